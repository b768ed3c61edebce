use std::sync::LazyLock;

use regex::Regex;

use crate::ApiDifference;

static METHOD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(
		r"^((public|private|protected|static|final|native|synchronized|abstract)\s)*(.+\s)?([$_\w]+)\((.*)\)$",
	)
	.expect("method pattern is valid")
});

static WHITESPACE: LazyLock<Regex> =
	LazyLock::new(|| Regex::new(r"\s+").expect("whitespace pattern is valid"));

/// Returns the member a difference applies to, in the form used by ignore lists.
///
/// Methods render as `name(params)` with whitespace stripped from the
/// parameter list; a signature without a return type is a constructor and
/// takes the simple class name. Fields render as their name. Returns `None`
/// for class-level differences and unparseable signatures.
pub fn member_name(difference: &ApiDifference) -> Option<String> {
	if let Some(method) = difference.method.as_deref() {
		let caps = METHOD_PATTERN.captures(method.trim())?;
		let params = WHITESPACE.replace_all(caps.get(5).map_or("", |m| m.as_str()), "");
		let name = match caps.get(3) {
			Some(_) => caps.get(4).map_or("", |m| m.as_str()),
			None => difference.simple_class_name(),
		};
		return Some(format!("{name}({params})"));
	}
	difference.field.clone()
}
