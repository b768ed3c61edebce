//! Configured resolution runs.
//!
//! [`Resolver`] bundles the per-run parameters (context, type label, suffix,
//! order hint) and drives indexing and sorting against a caller-supplied
//! [`DiagnosticSink`].

use crate::component::Component;
use crate::diagnostics::{DiagnosticSink, RecordingSink, ResolveEvent, Scope, TracingSink};
use crate::error::ResolveError;
use crate::index::{InstanceMap, index_checked};
use crate::naming::is_blank;
use crate::sort::{peel, seed};

/// Parameters for one indexing or sorting run.
///
/// # Example
///
/// ```
/// use lineup_resolver::{ComponentMeta, RecordingSink, Resolver};
///
/// let components = vec![
/// 	ComponentMeta::new("Publishing").with_depends_on(["base"]),
/// 	ComponentMeta::new("Base"),
/// ];
///
/// let order = Resolver::new(":app", "feature")
/// 	.sort(components, &mut RecordingSink::new())
/// 	.unwrap();
///
/// assert_eq!(order.keys().collect::<Vec<_>>(), ["base", "publishing"]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Resolver {
	context: String,
	type_label: String,
	suffix: String,
	order_hint: Vec<String>,
}

impl Resolver {
	/// Creates a resolver for the given context and component kind.
	///
	/// No suffix and no order hint are configured.
	pub fn new(context: impl Into<String>, type_label: impl Into<String>) -> Self {
		Self {
			context: context.into(),
			type_label: type_label.into(),
			..Self::default()
		}
	}

	/// Sets the role suffix appended to derived logical names.
	pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
		self.suffix = suffix.into();
		self
	}

	/// Sets the names to move to the front before dependency ordering.
	pub fn with_order_hint<I>(mut self, hint: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<String>,
	{
		self.order_hint = hint.into_iter().map(Into::into).collect();
		self
	}

	/// Returns the scope attached to every emitted event.
	pub fn scope(&self) -> Scope<'_> {
		Scope {
			context: &self.context,
			type_label: &self.type_label,
		}
	}

	/// Returns the configured suffix.
	pub fn suffix(&self) -> &str {
		&self.suffix
	}

	/// Returns the configured order hint.
	pub fn order_hint(&self) -> &[String] {
		&self.order_hint
	}

	fn validate(&self) -> Result<(), ResolveError> {
		if is_blank(&self.type_label) {
			return Err(ResolveError::InvalidArgument {
				argument: "type_label",
				reason: "must not be blank",
			});
		}
		if self.order_hint.iter().any(|name| is_blank(name)) {
			return Err(ResolveError::InvalidArgument {
				argument: "order_hint",
				reason: "entries must not be blank",
			});
		}
		Ok(())
	}

	/// Indexes components by logical name, resolving evictions.
	///
	/// # Errors
	///
	/// Returns [`ResolveError::Conflict`] when two components claim the same
	/// name and the claim is not settled by exactly one eviction.
	pub fn index<C, I, S>(&self, components: I, sink: &mut S) -> Result<InstanceMap<C>, ResolveError>
	where
		C: Component,
		I: IntoIterator<Item = C>,
		S: DiagnosticSink + ?Sized,
	{
		self.validate()?;
		Ok(index_checked(self.scope(), components, &self.suffix, sink)?)
	}

	/// Indexes components and orders them by their dependencies.
	///
	/// Cycles and dependencies on unknown names never fail: the affected
	/// components are appended in their current order and reported to `sink`
	/// as [`ResolveEvent::Unresolved`].
	///
	/// # Errors
	///
	/// Same as [`Resolver::index`].
	pub fn sort<C, I, S>(&self, components: I, sink: &mut S) -> Result<InstanceMap<C>, ResolveError>
	where
		C: Component,
		I: IntoIterator<Item = C>,
		S: DiagnosticSink + ?Sized,
	{
		let indexed = self.index(components, sink)?;
		let seeded = seed(indexed, &self.order_hint);
		if !self.order_hint.is_empty() && sink.detailed() {
			sink.record(
				self.scope(),
				ResolveEvent::Seeded {
					order: seeded.keys().cloned().collect(),
				},
			);
		}
		Ok(peel(self.scope(), seeded, sink))
	}

	/// Sorts components and returns the order together with every decision made.
	pub fn explain<C, I>(&self, components: I) -> Result<Resolution<C>, ResolveError>
	where
		C: Component,
		I: IntoIterator<Item = C>,
	{
		let mut sink = RecordingSink::new();
		let order = self.sort(components, &mut sink)?;
		Ok(Resolution {
			order,
			events: sink.into_events(),
		})
	}
}

/// Result of [`Resolver::explain`].
#[derive(Debug, Clone)]
pub struct Resolution<C> {
	/// Components in activation order.
	pub order: InstanceMap<C>,
	/// Decisions recorded while resolving, in emission order.
	pub events: Vec<ResolveEvent>,
}

impl<C> Resolution<C> {
	/// Returns the events that are not per-entry detail.
	pub fn decisions(&self) -> impl Iterator<Item = &ResolveEvent> + '_ {
		self.events.iter().filter(|e| !e.is_detail())
	}
}

/// Indexes components by logical name, resolving evictions and logging through `tracing`.
pub fn index_by_name_checked<C, I>(
	context: &str,
	components: I,
	suffix: &str,
	type_label: &str,
) -> Result<InstanceMap<C>, ResolveError>
where
	C: Component,
	I: IntoIterator<Item = C>,
{
	Resolver::new(context, type_label)
		.with_suffix(suffix)
		.index(components, &mut TracingSink)
}

/// Orders components by their dependencies, logging through `tracing`.
pub fn sort_by_dependencies<C, I>(
	context: &str,
	components: I,
	suffix: &str,
	type_label: &str,
) -> Result<InstanceMap<C>, ResolveError>
where
	C: Component,
	I: IntoIterator<Item = C>,
{
	sort_by_dependencies_with_order(context, components, suffix, type_label, Vec::<String>::new())
}

/// Orders components by their dependencies after moving `order_hint` entries to the front.
pub fn sort_by_dependencies_with_order<C, I, H>(
	context: &str,
	components: I,
	suffix: &str,
	type_label: &str,
	order_hint: H,
) -> Result<InstanceMap<C>, ResolveError>
where
	C: Component,
	I: IntoIterator<Item = C>,
	H: IntoIterator,
	H::Item: Into<String>,
{
	Resolver::new(context, type_label)
		.with_suffix(suffix)
		.with_order_hint(order_hint)
		.sort(components, &mut TracingSink)
}
