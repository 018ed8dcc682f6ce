use crate::error::FqdnSshError;
use crate::resolve::{ResolveSettings, RewriteTarget};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Default location of the ssh client.
pub const DEFAULT_SSH_PATH: &str = "/usr/bin/ssh";

/// Top-level configuration from a `.fqdn-ssh.toml` file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
	/// ssh binary to execute. Bare names are looked up on PATH.
	#[serde(default)]
	pub ssh_path: Option<String>,

	/// Domain suffixes to try, in order.
	#[serde(default)]
	pub suffixes: Vec<String>,

	/// Sort suffixes longest first before searching.
	#[serde(default)]
	pub prefer_longest_suffix: bool,

	/// Replace a suffixed match with the resolver's canonical name.
	#[serde(default)]
	pub reverse_lookup: bool,

	/// Rewrite passes to run, in order. Defaults to `["hostname"]`.
	#[serde(default)]
	pub rewrite: Option<Vec<RewriteTarget>>,
}

impl Config {
	/// Reject configs that list a rewrite target twice.
	pub fn validate(&self) -> Result<(), FqdnSshError> {
		if let Some(ref targets) = self.rewrite {
			validate_targets(targets)?;
		}
		Ok(())
	}
}

pub(crate) fn validate_targets(targets: &[RewriteTarget]) -> Result<(), FqdnSshError> {
	let mut seen = HashSet::new();
	for target in targets {
		if !seen.insert(*target) {
			return Err(FqdnSshError::DuplicateRewriteTarget {
				target: target.to_string(),
			});
		}
	}
	Ok(())
}

/// A loaded configuration with its source path for display.
#[derive(Debug, Clone)]
pub struct LoadedConfig {
	/// The parsed configuration.
	pub config: Config,

	/// The path this config was loaded from.
	pub path: PathBuf,
}

/// Settings for one run, after the config file and command line overrides
/// have been combined.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
	pub ssh_path: String,
	pub resolve: ResolveSettings,
	pub rewrite: Vec<RewriteTarget>,

	/// Where the file-based part came from, if anywhere.
	pub source: Option<PathBuf>,
}

impl Default for Settings {
	fn default() -> Self {
		Settings {
			ssh_path: DEFAULT_SSH_PATH.to_string(),
			resolve: ResolveSettings::default(),
			rewrite: vec![RewriteTarget::Hostname],
			source: None,
		}
	}
}

impl Settings {
	/// Settings from an optional loaded config, falling back to defaults.
	pub fn from_loaded(loaded: Option<&LoadedConfig>) -> Self {
		let mut settings = Settings::default();
		let Some(loaded) = loaded else {
			return settings;
		};

		let config = &loaded.config;
		if let Some(ref ssh_path) = config.ssh_path {
			settings.ssh_path = ssh_path.clone();
		}
		settings.resolve = ResolveSettings {
			suffixes: config.suffixes.clone(),
			prefer_longest_suffix: config.prefer_longest_suffix,
			reverse_lookup: config.reverse_lookup,
		};
		if let Some(ref rewrite) = config.rewrite {
			settings.rewrite = rewrite.clone();
		}
		settings.source = Some(loaded.path.clone());
		settings
	}
}

/// Command line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
	pub ssh_path: Option<String>,

	/// Appended after the configured suffixes.
	pub suffixes: Vec<String>,

	/// Forces longest-first ordering when set.
	pub prefer_longest_suffix: bool,

	/// Forces canonical-name results when set.
	pub reverse_lookup: bool,

	/// Replaces the configured rewrite passes when non-empty.
	pub rewrite: Vec<RewriteTarget>,
}

impl Settings {
	/// Apply command line overrides.
	pub fn with_overrides(mut self, overrides: Overrides) -> Result<Self, FqdnSshError> {
		if let Some(ssh_path) = overrides.ssh_path {
			self.ssh_path = ssh_path;
		}
		self.resolve.suffixes.extend(overrides.suffixes);
		self.resolve.prefer_longest_suffix |= overrides.prefer_longest_suffix;
		self.resolve.reverse_lookup |= overrides.reverse_lookup;
		if !overrides.rewrite.is_empty() {
			validate_targets(&overrides.rewrite)?;
			self.rewrite = overrides.rewrite;
		}
		Ok(self)
	}
}
