//! lineup binary.
//!
//! Loads component manifests and prints their activation order, or filters
//! API difference reports against a project's ignore lists.

mod cli;
mod manifest;
mod output;

use std::path::Path;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cli::{Cli, Command, Format, Target};
use lineup_apidiff::{ApiDifference, DiffFilter, FilterConfig, Severity};
use lineup_resolver::{RecordingSink, ResolveEvent, TracingSink};
use manifest::Manifest;

/// Exit status when `--deny-unresolved` finds a forced activation.
const EXIT_UNRESOLVED: u8 = 2;

fn main() -> anyhow::Result<ExitCode> {
	let cli = Cli::parse();

	setup_tracing(cli.verbose);

	match cli.command {
		Command::Order {
			target,
			format,
			deny_unresolved,
		} => order(&target, format, deny_unresolved),
		Command::Explain { target, all } => explain(&target, all),
		Command::Diff {
			filter,
			report,
			format,
			fail_on_error,
		} => diff(&filter, &report, format, fail_on_error),
	}
}

fn order(target: &Target, format: Format, deny_unresolved: bool) -> anyhow::Result<ExitCode> {
	let manifest = Manifest::load(target)?;
	let resolver = manifest.resolver();

	let mut recording = RecordingSink::new();
	let sorted = resolver
		.sort(manifest.components(), &mut (TracingSink, &mut recording))
		.with_context(|| format!("failed to order {}", target.manifest.display()))?;

	match format {
		Format::Text => print!("{}", output::order_text(&sorted)),
		Format::Json => println!("{}", output::order_json(&sorted)?),
	}

	if deny_unresolved && !recording.unresolved().is_empty() {
		return Ok(ExitCode::from(EXIT_UNRESOLVED));
	}
	Ok(ExitCode::SUCCESS)
}

fn explain(target: &Target, all: bool) -> anyhow::Result<ExitCode> {
	let manifest = Manifest::load(target)?;
	let resolution = manifest
		.resolver()
		.explain(manifest.components())
		.with_context(|| format!("failed to order {}", target.manifest.display()))?;

	print!("{}", output::order_text(&resolution.order));
	println!();

	let events: Vec<&ResolveEvent> = if all {
		resolution.events.iter().collect()
	} else {
		resolution.decisions().collect()
	};
	for event in events {
		println!("{}", output::event_text(event));
	}
	Ok(ExitCode::SUCCESS)
}

fn diff(filter: &Path, report: &Path, format: Format, fail_on_error: bool) -> anyhow::Result<ExitCode> {
	let config = std::fs::read_to_string(filter)
		.with_context(|| format!("failed to read filter {}", filter.display()))?;
	let config = FilterConfig::from_toml_str(&config)
		.with_context(|| format!("in {}", filter.display()))?;

	let report_text = std::fs::read_to_string(report)
		.with_context(|| format!("failed to read report {}", report.display()))?;
	let differences: Vec<ApiDifference> = serde_json::from_str(&report_text)
		.with_context(|| format!("invalid difference report {}", report.display()))?;

	let total = differences.len();
	let mut diff_filter = DiffFilter::new(config);
	let kept = diff_filter.report_all(differences);
	tracing::info!(total, kept, "filtered API differences");

	let groups = diff_filter.differences();
	match format {
		Format::Text => print!("{}", output::differences_text(groups)),
		Format::Json => println!("{}", output::differences_json(groups)?),
	}

	let has_errors = groups
		.values()
		.flatten()
		.any(|d| d.severity == Severity::Error);
	if fail_on_error && has_errors {
		return Ok(ExitCode::FAILURE);
	}
	Ok(ExitCode::SUCCESS)
}

fn setup_tracing(verbose: bool) {
	use tracing_subscriber::EnvFilter;

	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
		if verbose {
			EnvFilter::new("lineup=debug,lineup_resolver=debug,lineup_apidiff=debug")
		} else {
			EnvFilter::new("warn")
		}
	});

	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(std::io::stderr)
		.with_target(false)
		.init();
}
