use indexmap::IndexMap;
use rustc_hash::FxHashMap;
use serde::Deserialize;

use crate::{ApiDifference, member_name};

/// Ignore lists applied by [`DiffFilter`].
///
/// ```toml
/// ignored_difference_types = [7002]
/// ignored_packages = ["org.acme.internal.*"]
/// ignored_classes = ["org.acme.Legacy"]
///
/// [ignored_members]
/// "org.acme.Service" = ["run(int)", "VERSION"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FilterConfig {
	/// Message ids to drop regardless of class.
	pub ignored_difference_types: Vec<u32>,
	/// Packages to drop. `pkg.*` also drops `pkg` and every sub-package.
	pub ignored_packages: Vec<String>,
	/// Fully qualified classes to drop.
	pub ignored_classes: Vec<String>,
	/// Members to drop, keyed by fully qualified class name.
	pub ignored_members: FxHashMap<String, Vec<String>>,
}

impl FilterConfig {
	/// Parses a filter configuration from TOML.
	pub fn from_toml_str(input: &str) -> Result<Self, FilterError> {
		Ok(toml::from_str(input)?)
	}

	fn ignores_package(&self, package: &str) -> bool {
		self.ignored_packages.iter().any(|ignored| {
			if ignored == package {
				return true;
			}
			match ignored.strip_suffix(".*") {
				Some(prefix) => {
					package == prefix
						|| package
							.strip_prefix(prefix)
							.is_some_and(|rest| rest.starts_with('.'))
				}
				None => false,
			}
		})
	}
}

/// Errors raised while loading a filter configuration.
#[derive(Debug, thiserror::Error)]
pub enum FilterError {
	#[error("invalid filter config: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Buffers reported differences that survive the configured ignore lists.
///
/// Differences are grouped by affected class, in the order classes were first
/// reported.
#[derive(Debug, Default)]
pub struct DiffFilter {
	config: FilterConfig,
	differences: IndexMap<String, Vec<ApiDifference>>,
}

impl DiffFilter {
	pub fn new(config: FilterConfig) -> Self {
		Self {
			config,
			differences: IndexMap::new(),
		}
	}

	/// Returns true if `difference` matches one of the ignore lists.
	pub fn is_ignored(&self, difference: &ApiDifference) -> bool {
		let config = &self.config;
		if config
			.ignored_difference_types
			.contains(&difference.message_id)
		{
			return true;
		}
		if config.ignored_classes.contains(&difference.class)
			|| config.ignores_package(difference.package())
		{
			return true;
		}
		match (config.ignored_members.get(&difference.class), member_name(difference)) {
			(Some(members), Some(member)) => members.contains(&member),
			_ => false,
		}
	}

	/// Buffers `difference` unless it is ignored. Returns true if it was kept.
	pub fn report(&mut self, difference: ApiDifference) -> bool {
		if self.is_ignored(&difference) {
			tracing::debug!(
				class = %difference.class,
				message_id = difference.message_id,
				"ignored API difference"
			);
			return false;
		}
		self.differences
			.entry(difference.class.clone())
			.or_default()
			.push(difference);
		true
	}

	/// Buffers every difference from `differences`, returning how many were kept.
	pub fn report_all<I>(&mut self, differences: I) -> usize
	where
		I: IntoIterator<Item = ApiDifference>,
	{
		let mut kept = 0;
		for difference in differences {
			if self.report(difference) {
				kept += 1;
			}
		}
		kept
	}

	/// Returns the buffered differences grouped by class.
	pub fn differences(&self) -> &IndexMap<String, Vec<ApiDifference>> {
		&self.differences
	}

	/// Consumes the filter, returning the buffered differences.
	pub fn into_differences(self) -> IndexMap<String, Vec<ApiDifference>> {
		self.differences
	}
}
