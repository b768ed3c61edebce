//! Component capability.
//!
//! A component is any caller-owned value that exposes ordering metadata: an
//! identity derived from its type, an optional explicit name, an optional
//! eviction target, and the names it depends on. The resolver only reads this
//! metadata; it never constructs or drops components on its own.

use std::borrow::Cow;
use std::rc::Rc;
use std::sync::Arc;

use crate::naming::{is_blank, logical_name, property_name, simple_type_name};

/// Owned or static string used throughout component metadata.
pub type Name = Cow<'static, str>;

/// Ordering metadata carried by a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentMeta {
	/// Simple type name, used to derive the default logical name.
	pub type_name: Name,
	/// Explicit name override. Wins over the derived name when not blank.
	pub name: Option<Name>,
	/// Logical name of the component this one replaces.
	pub evicts: Option<Name>,
	/// Logical names that must be activated before this component.
	pub depends_on: Vec<Name>,
}

impl ComponentMeta {
	/// Creates metadata for the given type name with no name, eviction or dependencies.
	pub fn new(type_name: impl Into<Name>) -> Self {
		Self {
			type_name: type_name.into(),
			name: None,
			evicts: None,
			depends_on: Vec::new(),
		}
	}

	/// Creates metadata whose type name is the simple name of `T`.
	pub fn of<T: ?Sized>() -> Self {
		Self::new(simple_type_name(std::any::type_name::<T>()))
	}

	/// Sets the explicit name override.
	pub fn with_name(mut self, name: impl Into<Name>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the eviction target.
	pub fn with_evicts(mut self, target: impl Into<Name>) -> Self {
		self.evicts = Some(target.into());
		self
	}

	/// Appends dependency names.
	pub fn with_depends_on<I>(mut self, names: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<Name>,
	{
		self.depends_on.extend(names.into_iter().map(Into::into));
		self
	}
}

/// Read access to the ordering metadata of a component.
///
/// Only [`Component::meta`] is required. The remaining methods normalize the
/// metadata (blank strings read as absent) and may be overridden by types
/// that compute their metadata some other way.
pub trait Component {
	/// Returns the metadata for this component.
	fn meta(&self) -> &ComponentMeta;

	/// Returns the simple type name.
	fn type_name(&self) -> &str {
		&self.meta().type_name
	}

	/// Returns the explicit name override, if set and not blank.
	fn explicit_name(&self) -> Option<&str> {
		self.meta().name.as_deref().filter(|n| !is_blank(n))
	}

	/// Returns the eviction target, if set and not blank.
	fn evicts(&self) -> Option<&str> {
		self.meta().evicts.as_deref().filter(|n| !is_blank(n))
	}

	/// Returns the dependency names in declaration order.
	fn depends_on(&self) -> &[Name] {
		&self.meta().depends_on
	}

	/// Returns the explicit name, or the property name derived from the type.
	fn base_name(&self) -> String {
		match self.explicit_name() {
			Some(name) => name.to_owned(),
			None => property_name(self.type_name()),
		}
	}

	/// Returns the logical name under the given role suffix.
	fn logical_name(&self, suffix: &str) -> String {
		logical_name(&self.base_name(), suffix)
	}

	/// Returns a human-readable identity for diagnostics and errors.
	fn describe(&self) -> String {
		match self.explicit_name() {
			Some(name) => format!("{}[{name}]", self.type_name()),
			None => self.type_name().to_owned(),
		}
	}
}

impl Component for ComponentMeta {
	fn meta(&self) -> &ComponentMeta {
		self
	}
}

macro_rules! forward_component {
	($($ptr:ty),* $(,)?) => {
		$(
			impl<C: Component + ?Sized> Component for $ptr {
				fn meta(&self) -> &ComponentMeta {
					(**self).meta()
				}
				fn type_name(&self) -> &str {
					(**self).type_name()
				}
				fn explicit_name(&self) -> Option<&str> {
					(**self).explicit_name()
				}
				fn evicts(&self) -> Option<&str> {
					(**self).evicts()
				}
				fn depends_on(&self) -> &[Name] {
					(**self).depends_on()
				}
				fn base_name(&self) -> String {
					(**self).base_name()
				}
				fn logical_name(&self, suffix: &str) -> String {
					(**self).logical_name(suffix)
				}
				fn describe(&self) -> String {
					(**self).describe()
				}
			}
		)*
	};
}

forward_component!(&C, &mut C, Box<C>, Rc<C>, Arc<C>);

/// Implements [`Component`] for a type with a `meta: ComponentMeta` field.
#[macro_export]
macro_rules! impl_component {
	($type:ty) => {
		impl $crate::Component for $type {
			fn meta(&self) -> &$crate::ComponentMeta {
				&self.meta
			}
		}
	};
}
