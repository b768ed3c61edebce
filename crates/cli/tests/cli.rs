//! Runs the lineup binary against manifests written to a temp dir.

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use pretty_assertions::assert_eq;

const FEATURES: &str = r#"
context = ":app"
type = "feature"
suffix = "feature"

[[component]]
type = "PublishingFeature"
depends_on = ["signingFeature"]

[[component]]
type = "SigningFeature"
depends_on = ["baseFeature"]

[[component]]
type = "BaseFeature"
"#;

const CYCLE: &str = r#"
type = "notifier"

[[component]]
type = "Slack"
depends_on = ["mail"]

[[component]]
type = "Mail"
depends_on = ["slack"]
"#;

fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
	let path = dir.join(name);
	std::fs::write(&path, contents).expect("write fixture");
	path
}

fn lineup(args: &[&str]) -> Output {
	Command::new(env!("CARGO_BIN_EXE_lineup"))
		.args(args)
		.env_remove("RUST_LOG")
		.output()
		.expect("run lineup")
}

fn stdout(output: &Output) -> String {
	String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn order_prints_dependency_order() {
	let dir = tempfile::tempdir().expect("tempdir");
	let manifest = write(dir.path(), "features.toml", FEATURES);

	let output = lineup(&["order", manifest.to_str().unwrap()]);
	assert!(output.status.success());
	assert_eq!(
		stdout(&output),
		"  1. baseFeature (BaseFeature)\n  2. signingFeature (SigningFeature) after baseFeature\n  3. publishingFeature (PublishingFeature) after signingFeature\n"
	);
}

#[test]
fn order_hint_override_from_command_line() {
	let dir = tempfile::tempdir().expect("tempdir");
	let manifest = write(dir.path(), "cycle.toml", CYCLE);

	let output = lineup(&["order", manifest.to_str().unwrap(), "--order", "mail", "--format", "json"]);
	assert!(output.status.success());

	let json: serde_json::Value = serde_json::from_slice(&output.stdout).expect("json output");
	let keys: Vec<&str> = json
		.as_array()
		.expect("array")
		.iter()
		.map(|entry| entry["key"].as_str().expect("key"))
		.collect();
	assert_eq!(keys, vec!["mail", "slack"]);
}

#[test]
fn deny_unresolved_sets_exit_status() {
	let dir = tempfile::tempdir().expect("tempdir");
	let manifest = write(dir.path(), "cycle.toml", CYCLE);

	let output = lineup(&["order", manifest.to_str().unwrap(), "--deny-unresolved"]);
	assert_eq!(output.status.code(), Some(2));
	assert_eq!(stdout(&output).lines().count(), 2);
	assert!(String::from_utf8_lossy(&output.stderr).contains("unresolved notifier dependencies"));
}

#[test]
fn explain_lists_evictions() {
	let dir = tempfile::tempdir().expect("tempdir");
	let manifest = write(
		dir.path(),
		"evict.toml",
		&format!("{FEATURES}\n[[component]]\ntype = \"GpgSigning\"\nevicts = \"signingFeature\"\n"),
	);

	let output = lineup(&["explain", manifest.to_str().unwrap()]);
	assert!(output.status.success());
	let text = stdout(&output);
	assert!(text.starts_with("  1. signingFeature (GpgSigning)\n"));
	assert!(text.contains("evicted   signingFeature: SigningFeature replaced by GpgSigning"));
}

#[test]
fn conflict_fails_with_both_components_named() {
	let dir = tempfile::tempdir().expect("tempdir");
	let manifest = write(
		dir.path(),
		"conflict.toml",
		"type = \"feature\"\n[[component]]\ntype = \"Base\"\n[[component]]\ntype = \"Other\"\nname = \"base\"\n",
	);

	let output = lineup(&["order", manifest.to_str().unwrap()]);
	assert!(!output.status.success());
	let stderr = String::from_utf8_lossy(&output.stderr);
	assert!(stderr.contains("neither Other[base] nor Base declares an eviction"), "{stderr}");
}

#[test]
fn diff_filters_and_fails_on_errors() {
	let dir = tempfile::tempdir().expect("tempdir");
	let filter = write(
		dir.path(),
		"filter.toml",
		"ignored_packages = [\"org.acme.internal.*\"]\n",
	);
	let report = write(
		dir.path(),
		"report.json",
		r#"[
			{"message_id": 7002, "severity": "error", "class": "org.acme.internal.Impl", "method": "public void run()"},
			{"message_id": 7002, "severity": "error", "class": "org.acme.Api", "method": "public void stop()"}
		]"#,
	);

	let output = lineup(&[
		"diff",
		filter.to_str().unwrap(),
		report.to_str().unwrap(),
		"--fail-on-error",
	]);
	assert_eq!(output.status.code(), Some(1));
	assert_eq!(
		stdout(&output),
		"org.acme.Api\n  [Error] 7002 public void stop(): \n"
	);
}
