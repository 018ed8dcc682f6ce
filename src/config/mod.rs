//! Configuration loading for fqdn-ssh.
//!
//! This module handles:
//! - TOML config file parsing
//! - Config file discovery (command line, environment, home directory)
//! - Combining the file with command line overrides

pub mod discovery;
pub mod parser;
pub mod types;

pub use discovery::{
	CONFIG_ENV_VAR, ConfigSource, NO_CONFIG_ENV_VAR, USER_CONFIG_FILE, discover_config,
	load_settings, user_config_path,
};
pub use parser::{parse_config_file, parse_config_str};
pub use types::{Config, DEFAULT_SSH_PATH, LoadedConfig, Overrides, Settings};
