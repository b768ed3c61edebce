//! Dependency ordering over an indexed instance map.
//!
//! # Mental Model
//!
//! 1. **Seed:** entries named by the order hint move to the front in hint
//!    order. Everything else keeps its relative order.
//! 2. **Peel:** each pass scans the remaining entries in order and activates
//!    every entry whose dependencies are already active. Activations made
//!    earlier in the same pass count, so a chain declared in order resolves in
//!    a single pass.
//! 3. **Fallback:** a pass that activates nothing means a cycle or a
//!    dependency outside the map. The remaining entries are appended in their
//!    current order and reported as [`ResolveEvent::Unresolved`].
//!
//! # Invariants
//!
//! - Every input entry appears exactly once in the output.
//!   - Tested by: `tests::prop_sort_is_total`
//! - In the acyclic case a dependency precedes its dependents.
//!   - Tested by: `tests::prop_dependencies_precede_dependents`
//! - The loop runs at most one pass per entry plus the fallback pass.

use rustc_hash::FxHashSet;

use crate::component::Component;
use crate::diagnostics::{DiagnosticSink, ResolveEvent, Scope};
use crate::index::InstanceMap;
use crate::naming::is_blank;


/// Moves the entries named in `hint` to the front, in hint order.
///
/// Names missing from `map` are ignored and repeated names count once.
pub(crate) fn seed<C>(map: InstanceMap<C>, hint: &[String]) -> InstanceMap<C> {
	if hint.is_empty() {
		return map;
	}
	let mut rest = map;
	let mut seeded = InstanceMap::with_capacity(rest.len());
	for name in hint {
		if let Some(component) = rest.shift_remove(name.as_str()) {
			seeded.insert(name.clone(), component);
		}
	}
	seeded.extend(rest);
	seeded
}

/// Orders `map` so that every entry follows its dependencies where possible.
pub(crate) fn peel<C, S>(scope: Scope<'_>, map: InstanceMap<C>, sink: &mut S) -> InstanceMap<C>
where
	C: Component,
	S: DiagnosticSink + ?Sized,
{
	let total = map.len();
	let detailed = sink.detailed();
	let mut remaining: Vec<(String, C)> = map.into_iter().collect();
	let mut activated: FxHashSet<String> =
		FxHashSet::with_capacity_and_hasher(total, Default::default());
	let mut sorted = InstanceMap::with_capacity(total);
	let mut pass = 0;

	while !remaining.is_empty() {
		pass += 1;
		if detailed {
			sink.record(
				scope,
				ResolveEvent::Pass {
					pass,
					remaining: remaining.iter().map(|(name, _)| name.clone()).collect(),
				},
			);
		}

		let before = sorted.len();
		let mut deferred = Vec::with_capacity(remaining.len());

		for (name, component) in std::mem::take(&mut remaining) {
			let missing = component
				.depends_on()
				.iter()
				.find(|dep| !is_blank(dep) && !activated.contains::<str>(dep));

			if let Some(dep) = missing {
				if detailed {
					sink.record(
						scope,
						ResolveEvent::Deferred {
							name: name.clone(),
							missing: dep.to_string(),
						},
					);
				}
				deferred.push((name, component));
				continue;
			}

			if detailed {
				sink.record(scope, ResolveEvent::Activated { name: name.clone() });
			}
			activated.insert(name.clone());
			sorted.insert(name, component);
		}

		remaining = deferred;

		if sorted.len() == before {
			for (name, component) in std::mem::take(&mut remaining) {
				if !activated.insert(name.clone()) {
					continue;
				}
				sink.record(
					scope,
					ResolveEvent::Unresolved {
						name: name.clone(),
						depends_on: component
							.depends_on()
							.iter()
							.map(|dep| dep.to_string())
							.collect(),
					},
				);
				sorted.insert(name, component);
			}
			break;
		}

		if sorted.len() == total {
			break;
		}
	}

	sink.record(
		scope,
		ResolveEvent::Completed {
			order: sorted.keys().cloned().collect(),
		},
	);
	sorted
}
