use crate::cmdline::grammar::USAGE;
use std::path::PathBuf;

/// Library-level structured errors for fqdn-ssh.
///
/// Every variant is fatal and is raised before ssh is executed. A hostname
/// that fails to resolve is not an error and never shows up here.
#[derive(Debug, thiserror::Error)]
pub enum FqdnSshError {
	#[error("{reason}\n{usage}", usage = USAGE)]
	InvalidArguments { reason: String },

	#[error("Cannot determine hostname from argument: {argument}")]
	CannotDetermineHostname { argument: String },

	#[error("Malformed forward specification for -{flag}: {spec} (expected port:host:hostport)")]
	MalformedForwardSpec { flag: char, spec: String },

	#[error("Config file not found: {path}")]
	ConfigNotFound { path: PathBuf },

	#[error("Failed to read config file: {path}")]
	ConfigReadError {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to parse config file: {path}")]
	ConfigParseError {
		path: PathBuf,
		#[source]
		source: toml::de::Error,
	},

	#[error("Rewrite target listed more than once: {target}")]
	DuplicateRewriteTarget { target: String },

	#[error("Command not found: {command}")]
	CommandNotFound { command: String },

	#[error("Failed to execute: {command}")]
	ExecFailed {
		command: String,
		#[source]
		source: std::io::Error,
	},

	#[error("Failed to resolve home directory")]
	HomeDirectoryNotFound,
}

impl FqdnSshError {
	pub(crate) fn invalid_arguments(reason: impl Into<String>) -> Self {
		FqdnSshError::InvalidArguments {
			reason: reason.into(),
		}
	}
}

/// Result type alias using FqdnSshError.
pub type Result<T> = std::result::Result<T, FqdnSshError>;
