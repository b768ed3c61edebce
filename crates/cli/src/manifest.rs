//! Component manifests.
//!
//! A manifest declares the components of one resolution run:
//!
//! ```toml
//! context = ":app"
//! type = "feature"
//! suffix = "feature"
//! order = ["git"]
//!
//! [[component]]
//! type = "GitFeature"
//! name = "git"
//! evicts = "scmFeature"
//! depends_on = ["baseFeature"]
//! ```

use std::path::Path;

use anyhow::Context;
use lineup_resolver::{ComponentMeta, Resolver};
use serde::Deserialize;

use crate::cli::Target;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
	#[serde(default)]
	pub context: String,
	#[serde(rename = "type")]
	pub type_label: String,
	#[serde(default)]
	pub suffix: String,
	#[serde(default)]
	pub order: Vec<String>,
	#[serde(default, rename = "component")]
	pub components: Vec<ComponentSpec>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ComponentSpec {
	#[serde(rename = "type")]
	pub type_name: String,
	#[serde(default)]
	pub name: Option<String>,
	#[serde(default)]
	pub evicts: Option<String>,
	#[serde(default)]
	pub depends_on: Vec<String>,
}

impl ComponentSpec {
	fn to_meta(&self) -> ComponentMeta {
		let mut meta = ComponentMeta::new(self.type_name.clone())
			.with_depends_on(self.depends_on.iter().cloned());
		meta.name = self.name.clone().map(Into::into);
		meta.evicts = self.evicts.clone().map(Into::into);
		meta
	}
}

impl Manifest {
	pub fn from_toml_str(input: &str) -> anyhow::Result<Self> {
		toml::from_str(input).context("invalid component manifest")
	}

	/// Reads the manifest named by `target` and applies its overrides.
	pub fn load(target: &Target) -> anyhow::Result<Self> {
		let mut manifest = Self::read(&target.manifest)?;
		manifest.apply(target);
		Ok(manifest)
	}

	fn read(path: &Path) -> anyhow::Result<Self> {
		let input = std::fs::read_to_string(path)
			.with_context(|| format!("failed to read manifest {}", path.display()))?;
		Self::from_toml_str(&input).with_context(|| format!("in {}", path.display()))
	}

	fn apply(&mut self, target: &Target) {
		if let Some(context) = &target.context {
			self.context = context.clone();
		}
		if let Some(type_label) = &target.type_label {
			self.type_label = type_label.clone();
		}
		if let Some(suffix) = &target.suffix {
			self.suffix = suffix.clone();
		}
		if let Some(order) = &target.order {
			self.order = order.clone();
		}
	}

	pub fn resolver(&self) -> Resolver {
		Resolver::new(self.context.clone(), self.type_label.clone())
			.with_suffix(self.suffix.clone())
			.with_order_hint(self.order.iter().cloned())
	}

	pub fn components(&self) -> Vec<ComponentMeta> {
		self.components.iter().map(ComponentSpec::to_meta).collect()
	}
}
