use crate::config::parser::parse_config_file;
use crate::config::types::{LoadedConfig, Settings};
use crate::error::{FqdnSshError, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// File name of the per-user config in the home directory.
pub const USER_CONFIG_FILE: &str = ".fqdn-ssh.toml";

/// Environment variable naming an explicit config file.
pub const CONFIG_ENV_VAR: &str = "FQDN_SSH_CONFIG";

/// Environment variable that, if truthy, disables config loading.
pub const NO_CONFIG_ENV_VAR: &str = "FQDN_SSH_NO_CONFIG";

/// How to find the config file for this run.
#[derive(Debug, Clone, Default)]
pub struct ConfigSource {
	/// Explicit path from the command line. Must exist.
	pub explicit: Option<PathBuf>,

	/// Skip config loading entirely.
	pub disabled: bool,
}

/// Locate and load the config file, if any.
///
/// The lookup order is:
/// 1. Nothing, if disabled on the command line or via `FQDN_SSH_NO_CONFIG`
/// 2. The explicit path, which must exist
/// 3. `$FQDN_SSH_CONFIG`, which must exist
/// 4. `~/.fqdn-ssh.toml`, if present
pub fn discover_config(source: &ConfigSource) -> Result<Option<LoadedConfig>> {
	if source.disabled || is_env_truthy(NO_CONFIG_ENV_VAR) {
		debug!("config loading disabled");
		return Ok(None);
	}

	if let Some(ref path) = source.explicit {
		return load_required(path).map(Some);
	}

	if let Some(path) = std::env::var_os(CONFIG_ENV_VAR).filter(|p| !p.is_empty()) {
		return load_required(Path::new(&path)).map(Some);
	}

	let user_path = user_config_path()?;
	if user_path.exists() {
		return load_required(&user_path).map(Some);
	}

	debug!("no config file found, using defaults");
	Ok(None)
}

fn load_required(path: &Path) -> Result<LoadedConfig> {
	if !path.exists() {
		return Err(FqdnSshError::ConfigNotFound {
			path: path.to_path_buf(),
		});
	}

	debug!("loading config from {}", path.display());
	let config = parse_config_file(path)?;
	Ok(LoadedConfig {
		config,
		path: path.to_path_buf(),
	})
}

/// Check if an environment variable is set to a truthy value.
fn is_env_truthy(var_name: &str) -> bool {
	match std::env::var(var_name) {
		Ok(value) => {
			let lower = value.to_lowercase();
			!value.is_empty() && lower != "0" && lower != "false" && lower != "no"
		}
		Err(_) => false,
	}
}

/// Convenience function to discover the config and turn it into settings.
pub fn load_settings(source: &ConfigSource) -> Result<Settings> {
	let loaded = discover_config(source)?;
	Ok(Settings::from_loaded(loaded.as_ref()))
}

/// Get the path to the user's config file.
pub fn user_config_path() -> Result<PathBuf> {
	let home_dir = dirs::home_dir().ok_or(FqdnSshError::HomeDirectoryNotFound)?;
	Ok(home_dir.join(USER_CONFIG_FILE))
}
