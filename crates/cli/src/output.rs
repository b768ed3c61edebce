//! Text and JSON rendering.

use std::fmt::Write as _;

use lineup_apidiff::ApiDifference;
use lineup_resolver::{Component, ComponentMeta, InstanceMap, ResolveEvent};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct OrderEntry<'a> {
	position: usize,
	key: &'a str,
	#[serde(rename = "type")]
	type_name: &'a str,
	#[serde(skip_serializing_if = "Option::is_none")]
	name: Option<&'a str>,
	#[serde(skip_serializing_if = "Option::is_none")]
	evicts: Option<&'a str>,
	depends_on: Vec<&'a str>,
}

#[derive(Debug, Serialize)]
struct ClassDifferences<'a> {
	class: &'a str,
	differences: &'a [ApiDifference],
}

pub fn order_text(order: &InstanceMap<ComponentMeta>) -> String {
	let mut out = String::new();
	for (position, (key, component)) in order.iter().enumerate() {
		let _ = write!(out, "{:>3}. {key} ({})", position + 1, component.describe());
		if !component.depends_on().is_empty() {
			let deps: Vec<&str> = component.depends_on().iter().map(|d| &**d).collect();
			let _ = write!(out, " after {}", deps.join(", "));
		}
		out.push('\n');
	}
	out
}

pub fn order_json(order: &InstanceMap<ComponentMeta>) -> serde_json::Result<String> {
	let entries: Vec<OrderEntry<'_>> = order
		.iter()
		.enumerate()
		.map(|(position, (key, component))| OrderEntry {
			position: position + 1,
			key,
			type_name: component.type_name(),
			name: component.explicit_name(),
			evicts: component.evicts(),
			depends_on: component.depends_on().iter().map(|d| &**d).collect(),
		})
		.collect();
	serde_json::to_string_pretty(&entries)
}

pub fn event_text(event: &ResolveEvent) -> String {
	match event {
		ResolveEvent::Evicted { key, evicted, by } => {
			format!("evicted   {key}: {evicted} replaced by {by}")
		}
		ResolveEvent::Superseded {
			key,
			incoming,
			kept,
		} => format!("evicted   {key}: {incoming} dropped in favour of {kept}"),
		ResolveEvent::Seeded { order } => format!("seeded    {}", order.join(", ")),
		ResolveEvent::Pass { pass, remaining } => {
			format!("pass {pass:<4} {}", remaining.join(", "))
		}
		ResolveEvent::Deferred { name, missing } => format!("deferred  {name}: waiting on {missing}"),
		ResolveEvent::Activated { name } => format!("activated {name}"),
		ResolveEvent::Unresolved { name, depends_on } => {
			format!("forced    {name}: unresolved {}", depends_on.join(", "))
		}
		ResolveEvent::Completed { order } => format!("order     {}", order.join(", ")),
	}
}

pub fn differences_text<'a, I>(groups: I) -> String
where
	I: IntoIterator<Item = (&'a String, &'a Vec<ApiDifference>)>,
{
	let mut out = String::new();
	for (class, differences) in groups {
		let _ = writeln!(out, "{class}");
		for difference in differences {
			let member = difference
				.method
				.as_deref()
				.or(difference.field.as_deref())
				.unwrap_or("<class>");
			let _ = writeln!(
				out,
				"  [{:?}] {} {member}: {}",
				difference.severity, difference.message_id, difference.description
			);
		}
	}
	out
}

pub fn differences_json<'a, I>(groups: I) -> serde_json::Result<String>
where
	I: IntoIterator<Item = (&'a String, &'a Vec<ApiDifference>)>,
{
	let groups: Vec<ClassDifferences<'_>> = groups
		.into_iter()
		.map(|(class, differences)| ClassDifferences {
			class,
			differences,
		})
		.collect();
	serde_json::to_string_pretty(&groups)
}

#[cfg(test)]
mod tests {
	use lineup_resolver::index_by_name;
	use pretty_assertions::assert_eq;

	use super::*;

	fn order() -> InstanceMap<ComponentMeta> {
		index_by_name(
			vec![
				ComponentMeta::new("Base"),
				ComponentMeta::new("Git")
					.with_name("scm")
					.with_depends_on(["base"]),
			],
			"",
		)
	}

	#[test]
	fn test_order_text() {
		assert_eq!(order_text(&order()), "  1. base (Base)\n  2. scm (Git[scm]) after base\n");
	}

	#[test]
	fn test_order_json_fields() {
		let json: serde_json::Value =
			serde_json::from_str(&order_json(&order()).expect("should render")).expect("valid json");
		assert_eq!(json[1]["key"], "scm");
		assert_eq!(json[1]["type"], "Git");
		assert_eq!(json[1]["name"], "scm");
		assert_eq!(json[1]["depends_on"][0], "base");
		assert!(json[0].get("name").is_none());
	}

	#[test]
	fn test_event_text() {
		let event = ResolveEvent::Unresolved {
			name: "x".into(),
			depends_on: vec!["y".into()],
		};
		assert_eq!(event_text(&event), "forced    x: unresolved y");
	}
}
