//! Diagnostic events emitted while indexing and sorting.
//!
//! The resolver never logs through a global handle. Every decision is handed
//! to a [`DiagnosticSink`] supplied by the caller: [`TracingSink`] forwards to
//! `tracing`, [`RecordingSink`] keeps the events for inspection.

use tracing::Level;

/// Identifies the resolution run an event belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scope<'a> {
	/// Caller-supplied context, e.g. the project path being configured.
	pub context: &'a str,
	/// Kind of component being resolved, e.g. `feature` or `notifier`.
	pub type_label: &'a str,
}

/// A single resolution decision.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveEvent {
	/// `by` took over the slot `key` previously held by `evicted`.
	Evicted {
		key: String,
		evicted: String,
		by: String,
	},
	/// `incoming` was dropped because `kept` already claims `key` through its eviction.
	Superseded {
		key: String,
		incoming: String,
		kept: String,
	},
	/// The order hint moved `order` to the front.
	Seeded { order: Vec<String> },
	/// A peel pass started over the `remaining` keys.
	Pass { pass: usize, remaining: Vec<String> },
	/// `name` waits for `missing` to be activated.
	Deferred { name: String, missing: String },
	/// `name` was activated with every dependency satisfied.
	Activated { name: String },
	/// `name` was appended by the cycle fallback with `depends_on` still unsatisfied.
	Unresolved {
		name: String,
		depends_on: Vec<String>,
	},
	/// Resolution finished with the given key order.
	Completed { order: Vec<String> },
}

impl ResolveEvent {
	/// Returns true for per-entry trace events (passes, deferrals, activations).
	pub fn is_detail(&self) -> bool {
		matches!(
			self,
			Self::Pass { .. } | Self::Deferred { .. } | Self::Activated { .. }
		)
	}
}

/// Receives resolution events.
pub trait DiagnosticSink {
	/// Records one event.
	fn record(&mut self, scope: Scope<'_>, event: ResolveEvent);

	/// Returns false to skip building per-entry detail events.
	fn detailed(&self) -> bool {
		true
	}
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
	fn record(&mut self, scope: Scope<'_>, event: ResolveEvent) {
		(**self).record(scope, event);
	}

	fn detailed(&self) -> bool {
		(**self).detailed()
	}
}

/// Fans every event out to both sinks.
impl<A: DiagnosticSink, B: DiagnosticSink> DiagnosticSink for (A, B) {
	fn record(&mut self, scope: Scope<'_>, event: ResolveEvent) {
		self.0.record(scope, event.clone());
		self.1.record(scope, event);
	}

	fn detailed(&self) -> bool {
		self.0.detailed() || self.1.detailed()
	}
}

/// Forwards events to the active `tracing` subscriber.
///
/// Evictions and the final order are logged at `INFO`, unresolved
/// dependencies at `WARN`, and pass details at `DEBUG`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
	fn record(&mut self, scope: Scope<'_>, event: ResolveEvent) {
		let Scope {
			context,
			type_label: kind,
		} = scope;
		match event {
			ResolveEvent::Evicted { key, evicted, by } => {
				tracing::info!(context, kind, %key, %evicted, %by, "{kind} {key} with instance {evicted} evicted by {by}");
			}
			ResolveEvent::Superseded {
				key,
				incoming,
				kept,
			} => {
				tracing::info!(context, kind, %key, %incoming, %kept, "{kind} {key} with instance {incoming} evicted by {kept}");
			}
			ResolveEvent::Seeded { order } => {
				tracing::debug!(context, kind, ?order, "seeded {kind} order from hint");
			}
			ResolveEvent::Pass { pass, remaining } => {
				tracing::debug!(context, kind, pass, ?remaining, "current {kind} order");
			}
			ResolveEvent::Deferred { name, missing } => {
				tracing::debug!(context, kind, %name, %missing, "skipped {kind} '{name}', dependency '{missing}' not yet added");
			}
			ResolveEvent::Activated { name } => {
				tracing::debug!(context, kind, %name, "added {kind} '{name}'");
			}
			ResolveEvent::Unresolved { name, depends_on } => {
				tracing::warn!(context, kind, %name, ?depends_on, "unresolved {kind} dependencies, adding '{name}' at end");
			}
			ResolveEvent::Completed { order } => {
				tracing::info!(context, kind, ?order, "computed {kind} order");
			}
		}
	}

	fn detailed(&self) -> bool {
		tracing::enabled!(Level::DEBUG)
	}
}

/// Collects events in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingSink {
	events: Vec<ResolveEvent>,
}

impl RecordingSink {
	/// Creates an empty sink.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the events recorded so far.
	pub fn events(&self) -> &[ResolveEvent] {
		&self.events
	}

	/// Consumes the sink, returning its events.
	pub fn into_events(self) -> Vec<ResolveEvent> {
		self.events
	}

	/// Returns the keys reported through [`ResolveEvent::Unresolved`].
	pub fn unresolved(&self) -> Vec<&str> {
		self.events
			.iter()
			.filter_map(|e| match e {
				ResolveEvent::Unresolved { name, .. } => Some(name.as_str()),
				_ => None,
			})
			.collect()
	}
}

impl DiagnosticSink for RecordingSink {
	fn record(&mut self, _scope: Scope<'_>, event: ResolveEvent) {
		self.events.push(event);
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	const SCOPE: Scope<'static> = Scope {
		context: ":app",
		type_label: "feature",
	};

	struct Quiet(usize);

	impl DiagnosticSink for Quiet {
		fn record(&mut self, _scope: Scope<'_>, _event: ResolveEvent) {
			self.0 += 1;
		}

		fn detailed(&self) -> bool {
			false
		}
	}

	#[test]
	fn test_pair_records_into_both_sinks() {
		let mut recording = RecordingSink::new();
		let mut pair = (Quiet(0), &mut recording);
		assert!(pair.detailed());

		pair.record(SCOPE, ResolveEvent::Activated { name: "a".into() });
		assert_eq!(pair.0.0, 1);
		assert_eq!(
			recording.events(),
			&[ResolveEvent::Activated { name: "a".into() }]
		);
	}

	#[test]
	fn test_detail_classification() {
		assert!(ResolveEvent::Pass {
			pass: 1,
			remaining: Vec::new()
		}
		.is_detail());
		assert!(!ResolveEvent::Completed { order: Vec::new() }.is_detail());
	}
}
