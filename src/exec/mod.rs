//! Handing off to the ssh client.
//!
//! This module handles:
//! - Locating the ssh binary
//! - Replacing the current process with it, environment unchanged

use crate::error::{FqdnSshError, Result};
use std::path::{Path, PathBuf};
use std::process::Command;

/// Replace the current process with `binary`, passing `args`.
///
/// `argv[0]` is the binary path and the environment is inherited as is.
/// Only returns if the exec itself failed.
#[cfg(unix)]
pub fn exec_ssh(binary: &Path, args: &[String]) -> FqdnSshError {
	use std::os::unix::process::CommandExt;

	let source = Command::new(binary).arg0(binary).args(args).exec();
	FqdnSshError::ExecFailed {
		command: binary.to_string_lossy().to_string(),
		source,
	}
}

/// Run `binary` to completion and exit with its status.
///
/// Only returns if the command could not be started.
#[cfg(not(unix))]
pub fn exec_ssh(binary: &Path, args: &[String]) -> FqdnSshError {
	match Command::new(binary).args(args).status() {
		Ok(status) => std::process::exit(status.code().unwrap_or(1)),
		Err(source) => FqdnSshError::ExecFailed {
			command: binary.to_string_lossy().to_string(),
			source,
		},
	}
}

/// Resolve a command name to its full path.
///
/// A command containing a path separator (`/usr/bin/ssh`, `./bin/ssh`) is
/// used as-is. A bare name is searched for on PATH.
pub fn resolve_command(command: &str) -> Result<PathBuf> {
	let not_found = || FqdnSshError::CommandNotFound {
		command: command.to_string(),
	};
	let path = Path::new(command);

	if path.is_absolute() || path.components().count() > 1 {
		return if path.exists() {
			Ok(path.to_path_buf())
		} else {
			Err(not_found())
		};
	}

	let path_var = std::env::var_os("PATH").ok_or_else(not_found)?;
	std::env::split_paths(&path_var)
		.map(|dir| dir.join(command))
		.find(|full_path| full_path.is_file())
		.ok_or_else(not_found)
}
