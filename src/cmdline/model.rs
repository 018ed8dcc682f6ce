use crate::cmdline::options::CmdOption;
use crate::cmdline::parser::parse_args;
use crate::error::{FqdnSshError, Result};
use regex::Regex;
use std::sync::LazyLock;

static HOST_ARG: LazyLock<Regex> = LazyLock::new(|| {
	Regex::new(r"^(?:(?P<username>[^@]+)@)?(?P<hostname>[a-zA-Z0-9\-.]{2,128})$")
		.expect("host argument pattern is valid")
});

/// A parsed ssh invocation.
///
/// Hostname and username are derived once, when the command line is parsed,
/// and can be overridden afterwards. The positional arguments themselves are
/// never modified; [`CommandLine::to_argv`] rebuilds the host argument from
/// the derived fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
	options: Vec<CmdOption>,
	args: Vec<String>,
	hostname: String,
	username: Option<String>,
	end_of_options: bool,
}

impl CommandLine {
	/// Parse an ssh argument vector (without the program name).
	pub fn parse(argv: &[String]) -> Result<Self> {
		let parsed = parse_args(argv)?;
		let Some(host_arg) = parsed.args.first() else {
			return Err(FqdnSshError::invalid_arguments("missing hostname"));
		};

		let (username, hostname) = split_host_arg(host_arg)?;
		let mut cmdline = CommandLine {
			options: parsed.options,
			args: parsed.args,
			hostname,
			username,
			end_of_options: parsed.end_of_options,
		};

		if cmdline.username.is_none() {
			cmdline.username = cmdline
				.option('l')
				.and_then(CmdOption::last_value)
				.map(str::to_string);
		}

		Ok(cmdline)
	}

	pub fn hostname(&self) -> &str {
		&self.hostname
	}

	pub fn set_hostname(&mut self, hostname: impl Into<String>) {
		self.hostname = hostname.into();
	}

	/// The login name: the `user@` prefix of the host argument, else the last `-l` value.
	pub fn username(&self) -> Option<&str> {
		self.username.as_deref()
	}

	pub fn set_username(&mut self, username: impl Into<String>) {
		self.username = Some(username.into());
	}

	/// All recognized options in first-sight order.
	pub fn options(&self) -> &[CmdOption] {
		&self.options
	}

	pub fn option(&self, flag: char) -> Option<&CmdOption> {
		self.options.iter().find(|o| o.flag() == flag)
	}

	pub fn option_mut(&mut self, flag: char) -> Option<&mut CmdOption> {
		self.options.iter_mut().find(|o| o.flag() == flag)
	}

	/// Positional arguments as given: the host argument followed by the remote command.
	pub fn args(&self) -> &[String] {
		&self.args
	}

	/// The host argument as it will be emitted: `user@host` or `host`.
	pub fn host_arg(&self) -> String {
		match self.username.as_deref() {
			Some(user) if !user.is_empty() => format!("{user}@{}", self.hostname),
			_ => self.hostname.clone(),
		}
	}

	/// Rebuild an argument vector: options, then the host argument, then the
	/// remote command. A `--` given on input is emitted before the host
	/// argument, so ssh still treats what follows as the remote command.
	pub fn to_argv(&self) -> Vec<String> {
		let mut argv: Vec<String> = self.options.iter().flat_map(CmdOption::argv).collect();
		if self.end_of_options {
			argv.push("--".to_string());
		}
		argv.push(self.host_arg());
		argv.extend(self.args.iter().skip(1).cloned());
		argv
	}
}

/// Split `[user@]host` into its parts.
fn split_host_arg(arg: &str) -> Result<(Option<String>, String)> {
	let captures = HOST_ARG
		.captures(arg)
		.ok_or_else(|| FqdnSshError::CannotDetermineHostname {
			argument: arg.to_string(),
		})?;

	let username = captures.name("username").map(|m| m.as_str().to_string());
	let hostname = captures["hostname"].to_string();
	Ok((username, hostname))
}
