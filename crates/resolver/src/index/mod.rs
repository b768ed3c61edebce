//! Logical-name indexing with eviction resolution.
//!
//! # Role
//!
//! Maps components to unique logical names. The basic pass ([`index_by_name`])
//! only derives names. The checked pass ([`index_checked`]) also settles which
//! component owns a contested slot.
//!
//! # Slot Rules
//!
//! For each incoming component, in input order:
//!
//! 1. It evicts `X` and `X` is occupied: the occupant must not itself evict
//!    anything, otherwise the claim is a [`ConflictKind::Eviction`]. The incoming
//!    component replaces the occupant in place.
//! 2. Otherwise its key is its eviction target if it has one, else its own
//!    logical name. If the key is occupied by a component that evicts, the
//!    incoming component is superseded and dropped. If the occupant does not
//!    evict, the claim is a [`ConflictKind::Unmarked`] collision.
//!
//! # Invariants
//!
//! - Keys are unique and each holds exactly one live component.
//! - Replacement keeps the slot's original position, so iteration order is
//!   the order in which slots were first claimed.

use indexmap::IndexMap;

use crate::component::Component;
use crate::diagnostics::{DiagnosticSink, ResolveEvent, Scope};
use crate::error::{ConflictError, ConflictKind};

#[cfg(test)]
mod tests;

/// Ordered mapping from logical name to component.
pub type InstanceMap<C> = IndexMap<String, C>;

/// Indexes components by logical name without conflict checks.
///
/// A later component with the same name replaces the earlier one in place.
pub fn index_by_name<C, I>(components: I, suffix: &str) -> InstanceMap<C>
where
	C: Component,
	I: IntoIterator<Item = C>,
{
	let mut map = InstanceMap::new();
	for component in components {
		map.insert(component.logical_name(suffix), component);
	}
	map
}

/// Indexes components by logical name, resolving evictions.
pub(crate) fn index_checked<C, I, S>(
	scope: Scope<'_>,
	components: I,
	suffix: &str,
	sink: &mut S,
) -> Result<InstanceMap<C>, ConflictError>
where
	C: Component,
	I: IntoIterator<Item = C>,
	S: DiagnosticSink + ?Sized,
{
	let components = components.into_iter();
	let mut map: InstanceMap<C> = InstanceMap::with_capacity(components.size_hint().0);

	for component in components {
		let target = component.evicts().map(str::to_owned);

		if let Some(target) = target.as_deref()
			&& let Some(occupant) = map.get_mut(target)
		{
			if occupant.evicts().is_some() {
				return Err(conflict(
					ConflictKind::Eviction,
					scope,
					target,
					&component,
					occupant,
				));
			}
			let evicted = std::mem::replace(occupant, component);
			sink.record(
				scope,
				ResolveEvent::Evicted {
					key: target.to_owned(),
					evicted: evicted.describe(),
					by: occupant.describe(),
				},
			);
			continue;
		}

		let key = match target {
			Some(target) => target,
			None => component.logical_name(suffix),
		};

		match map.get(&key) {
			None => {
				map.insert(key, component);
			}
			Some(occupant) if occupant.evicts().is_none() => {
				return Err(conflict(
					ConflictKind::Unmarked,
					scope,
					&key,
					&component,
					occupant,
				));
			}
			Some(occupant) => {
				let kept = occupant.describe();
				sink.record(
					scope,
					ResolveEvent::Superseded {
						key,
						incoming: component.describe(),
						kept,
					},
				);
			}
		}
	}

	Ok(map)
}

fn conflict<C: Component>(
	kind: ConflictKind,
	scope: Scope<'_>,
	key: &str,
	incoming: &C,
	existing: &C,
) -> ConflictError {
	ConflictError {
		kind,
		type_label: scope.type_label.to_owned(),
		key: key.to_owned(),
		incoming: incoming.describe(),
		existing: existing.describe(),
	}
}
