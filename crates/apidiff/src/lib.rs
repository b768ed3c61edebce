//! Buffered filtering of API compatibility reports.
//!
//! A compatibility checker reports one [`ApiDifference`] per changed class
//! member. [`DiffFilter`] drops the ones a project has chosen to accept and
//! groups the rest by affected class.

mod filter;
mod member;

use serde::{Deserialize, Serialize};

pub use filter::{DiffFilter, FilterConfig, FilterError};
pub use member::member_name;

/// Severity assigned by the compatibility checker.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
	#[default]
	Info,
	Warning,
	Error,
}

/// A single reported API difference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiDifference {
	/// Numeric message id identifying the kind of difference.
	pub message_id: u32,
	#[serde(default)]
	pub severity: Severity,
	/// Fully qualified name of the affected class.
	pub class: String,
	/// Affected method signature, e.g. `public void run(int, String)`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub method: Option<String>,
	/// Affected field name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub field: Option<String>,
	#[serde(default)]
	pub description: String,
}

impl ApiDifference {
	/// Returns the package of the affected class, or `""` for the default package.
	pub fn package(&self) -> &str {
		self.class.rsplit_once('.').map_or("", |(package, _)| package)
	}

	/// Returns the affected class name without its package.
	pub fn simple_class_name(&self) -> &str {
		self.class.rsplit_once('.').map_or(self.class.as_str(), |(_, name)| name)
	}
}
