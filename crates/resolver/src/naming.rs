//! Logical name derivation.
//!
//! Components are keyed by a logical name built from a base name (explicit
//! override or the decapitalized simple type name) and a role suffix shared by
//! every component of one kind, e.g. `git` + `feature` -> `gitFeature`.

/// Returns true if `s` is empty or only whitespace.
#[inline]
pub fn is_blank(s: &str) -> bool {
	s.trim().is_empty()
}

/// Uppercases the first character of `s`.
pub fn capitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_uppercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Lowercases the first character of `s`.
pub fn uncapitalize(s: &str) -> String {
	let mut chars = s.chars();
	match chars.next() {
		Some(first) => first.to_lowercase().chain(chars).collect(),
		None => String::new(),
	}
}

/// Converts a type name into a property name.
///
/// Follows the JavaBeans rule: the first character is lowercased unless the
/// first two characters are both uppercase, so `URLFeature` is kept as is.
pub fn property_name(type_name: &str) -> String {
	let mut chars = type_name.chars();
	match (chars.next(), chars.next()) {
		(Some(a), Some(b)) if a.is_uppercase() && b.is_uppercase() => type_name.to_owned(),
		_ => uncapitalize(type_name),
	}
}

/// Strips the module path and generic arguments from a type name.
///
/// Accepts the output of [`std::any::type_name`]: `my_crate::features::GitFeature<u8>`
/// becomes `GitFeature`.
pub fn simple_type_name(full: &str) -> &str {
	let head = match full.find('<') {
		Some(idx) => &full[..idx],
		None => full,
	};
	match head.rfind("::") {
		Some(idx) => &head[idx + 2..],
		None => head,
	}
}

/// Appends `suffix` to `base` unless `base` already ends with it.
///
/// The suffix is capitalized before being appended or compared, so `git` and
/// `gitFeature` both yield `gitFeature` for the suffix `feature`. An empty
/// suffix returns `base` unchanged.
pub fn logical_name(base: &str, suffix: &str) -> String {
	if suffix.is_empty() {
		return base.to_owned();
	}
	let suffix = capitalize(suffix);
	if base.ends_with(&suffix) {
		base.to_owned()
	} else {
		format!("{base}{suffix}")
	}
}
