use pretty_assertions::assert_eq;

use super::{InstanceMap, index_by_name, index_checked};
use crate::component::{Component, ComponentMeta};
use crate::diagnostics::{RecordingSink, ResolveEvent, Scope};
use crate::error::{ConflictError, ConflictKind};

const SCOPE: Scope<'static> = Scope {
	context: ":app",
	type_label: "feature",
};

fn named(name: &'static str) -> ComponentMeta {
	ComponentMeta::new("Test").with_name(name)
}

fn evicting(name: &'static str, target: &'static str) -> ComponentMeta {
	named(name).with_evicts(target)
}

fn index(components: Vec<ComponentMeta>) -> (Result<InstanceMap<ComponentMeta>, ConflictError>, RecordingSink) {
	let mut sink = RecordingSink::new();
	let result = index_checked(SCOPE, components, "", &mut sink);
	(result, sink)
}

fn keys<C>(map: &InstanceMap<C>) -> Vec<&str> {
	map.keys().map(String::as_str).collect()
}

#[test]
fn test_basic_index_derives_names_with_suffix() {
	let map = index_by_name(
		vec![
			ComponentMeta::new("GitFeature"),
			ComponentMeta::new("Slack").with_name("chat"),
		],
		"feature",
	);
	assert_eq!(keys(&map), vec!["gitFeature", "chatFeature"]);
}

#[test]
fn test_basic_index_replaces_duplicates_in_place() {
	let map = index_by_name(
		vec![
			named("a").with_depends_on(["first"]),
			named("b"),
			named("a").with_depends_on(["second"]),
		],
		"",
	);
	assert_eq!(keys(&map), vec!["a", "b"]);
	assert_eq!(map["a"].depends_on()[0], "second");
}

#[test]
fn test_evicting_component_takes_over_slot() {
	let (result, sink) = index(vec![named("A"), evicting("B", "A")]);
	let map = result.expect("eviction should resolve");

	assert_eq!(keys(&map), vec!["A"]);
	assert_eq!(map["A"].explicit_name(), Some("B"));
	assert_eq!(
		sink.events(),
		&[ResolveEvent::Evicted {
			key: "A".into(),
			evicted: "Test[A]".into(),
			by: "Test[B]".into(),
		}]
	);
}

#[test]
fn test_eviction_keeps_slot_position() {
	let (result, _) = index(vec![named("X"), named("Y"), evicting("Z", "X")]);
	let map = result.expect("eviction should resolve");

	assert_eq!(keys(&map), vec!["X", "Y"]);
	assert_eq!(map["X"].explicit_name(), Some("Z"));
}

#[test]
fn test_evicting_component_seen_first_supersedes_target() {
	let (result, sink) = index(vec![evicting("B", "A"), named("A")]);
	let map = result.expect("eviction should resolve");

	assert_eq!(keys(&map), vec!["A"]);
	assert_eq!(map["A"].explicit_name(), Some("B"));
	assert_eq!(
		sink.events(),
		&[ResolveEvent::Superseded {
			key: "A".into(),
			incoming: "Test[A]".into(),
			kept: "Test[B]".into(),
		}]
	);
}

#[test]
fn test_eviction_of_absent_target_claims_target_name() {
	let (result, sink) = index(vec![evicting("B", "ghost")]);
	let map = result.expect("should index");

	assert_eq!(keys(&map), vec!["ghost"]);
	assert!(sink.events().is_empty());
}

#[test]
fn test_competing_evictions_conflict() {
	let (result, _) = index(vec![evicting("A", "X"), evicting("B", "X")]);
	let err = result.expect_err("two evictions of X must conflict");

	assert_eq!(err.kind, ConflictKind::Eviction);
	assert_eq!(err.key, "X");
	assert_eq!(err.incoming, "Test[B]");
	assert_eq!(err.existing, "Test[A]");
	assert_eq!(err.type_label, "feature");
}

#[test]
fn test_competing_evictions_conflict_with_target_present() {
	let (result, _) = index(vec![named("X"), evicting("A", "X"), evicting("B", "X")]);
	let err = result.expect_err("two evictions of X must conflict");

	assert_eq!(err.kind, ConflictKind::Eviction);
	assert_eq!(err.existing, "Test[A]");
}

#[test]
fn test_unmarked_collision_fails() {
	let (result, _) = index(vec![
		ComponentMeta::new("Foo"),
		ComponentMeta::new("Other").with_name("foo"),
	]);
	let err = result.expect_err("unmarked collision must fail");

	assert_eq!(err.kind, ConflictKind::Unmarked);
	assert_eq!(err.key, "foo");
	assert_eq!(
		err.to_string(),
		"feature foo: neither Other[foo] nor Foo declares an eviction"
	);
}

#[test]
fn test_eviction_targets_are_raw_keys() {
	let mut sink = RecordingSink::new();
	let map = index_checked(
		SCOPE,
		vec![
			ComponentMeta::new("GitFeature"),
			ComponentMeta::new("Hg").with_evicts("gitFeature"),
		],
		"feature",
		&mut sink,
	)
	.expect("eviction should resolve");

	assert_eq!(keys(&map), vec!["gitFeature"]);
	assert_eq!(map["gitFeature"].type_name(), "Hg");
}
