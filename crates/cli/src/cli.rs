//! CLI schema for the lineup binary.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

/// Resolve component activation order.
#[derive(Parser, Debug)]
#[command(name = "lineup", version)]
#[command(about = "Resolve component activation order and filter API diff reports")]
pub struct Cli {
	/// Verbose logging
	#[arg(short, long, global = true)]
	pub verbose: bool,

	#[command(subcommand)]
	pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
	/// Print the resolved activation order.
	Order {
		#[command(flatten)]
		target: Target,

		/// Output format
		#[arg(long, value_enum, default_value_t = Format::Text)]
		format: Format,

		/// Exit with status 2 when a cycle or missing dependency forced the order
		#[arg(long)]
		deny_unresolved: bool,
	},

	/// Print the resolved order and the decisions that produced it.
	Explain {
		#[command(flatten)]
		target: Target,

		/// Include per-pass detail events
		#[arg(long)]
		all: bool,
	},

	/// Filter an API difference report.
	Diff {
		/// TOML file with ignore lists
		#[arg(value_name = "FILTER")]
		filter: PathBuf,

		/// JSON array of reported differences
		#[arg(value_name = "REPORT")]
		report: PathBuf,

		/// Output format
		#[arg(long, value_enum, default_value_t = Format::Text)]
		format: Format,

		/// Exit with status 1 when an error-level difference remains
		#[arg(long)]
		fail_on_error: bool,
	},
}

/// Manifest location and per-run overrides.
#[derive(Args, Debug, Clone, Default)]
pub struct Target {
	/// Component manifest (TOML)
	#[arg(value_name = "MANIFEST")]
	pub manifest: PathBuf,

	/// Context label attached to log events
	#[arg(long)]
	pub context: Option<String>,

	/// Component kind, e.g. `feature`
	#[arg(long = "type", value_name = "TYPE")]
	pub type_label: Option<String>,

	/// Suffix appended to derived names
	#[arg(long)]
	pub suffix: Option<String>,

	/// Names to move to the front, comma separated
	#[arg(long, value_delimiter = ',')]
	pub order: Option<Vec<String>>,
}

#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Format {
	#[default]
	Text,
	Json,
}
