//! Dependency-ordered component resolution.
//!
//! # Purpose
//!
//! Turns a collection of caller-owned components (build features, notifiers,
//! extensions) into a deterministic activation order. Each component carries
//! optional metadata: an explicit name, the name of a component it evicts, and
//! the names it depends on.
//!
//! # Mental Model
//!
//! 1. **Index:** every component gets a logical name (explicit override or the
//!    decapitalized type name, plus a role suffix). Contested names are settled
//!    by evictions; anything else is a [`ConflictError`].
//! 2. **Seed:** an optional order hint moves named entries to the front.
//! 3. **Peel:** entries whose dependencies are active are activated in scan
//!    order until none remain. When no progress is possible the remaining
//!    entries are appended as they stand, so cycles never fail a run.
//!
//! # Key Types
//!
//! | Type | Role |
//! |------|------|
//! | [`Component`] | Read access to ordering metadata. |
//! | [`ComponentMeta`] | Owned metadata; also a component on its own. |
//! | [`Resolver`] | Per-run parameters and entry point. |
//! | [`DiagnosticSink`] | Receives every eviction and ordering decision. |
//! | [`InstanceMap`] | Ordered name to component mapping. |

pub mod component;
pub mod diagnostics;
pub mod error;
pub mod index;
pub mod naming;
mod resolver;
mod sort;

pub use component::{Component, ComponentMeta, Name};
pub use diagnostics::{DiagnosticSink, RecordingSink, ResolveEvent, Scope, TracingSink};
pub use error::{ConflictError, ConflictKind, ResolveError};
pub use index::{InstanceMap, index_by_name};
pub use resolver::{
	Resolution, Resolver, index_by_name_checked, sort_by_dependencies,
	sort_by_dependencies_with_order,
};
