use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use std::path::PathBuf;
use std::process::ExitCode;

use fqdn_ssh::FqdnSshError;
use fqdn_ssh::cmdline::CommandLine;
use fqdn_ssh::config::{ConfigSource, Overrides, Settings, load_settings, user_config_path};
use fqdn_ssh::exec::{exec_ssh, resolve_command};
use fqdn_ssh::resolve::{FqdnResolver, RewriteTarget};

/// Exit status ssh itself uses for usage errors.
const USAGE_EXIT_CODE: u8 = 255;

#[derive(Parser)]
#[command(name = "fqdn-ssh")]
#[command(
	author,
	version,
	about = "ssh wrapper that resolves short hostnames against domain suffixes before connecting"
)]
#[command(disable_help_flag = true, disable_version_flag = true)]
struct Cli {
	/// Print help
	#[arg(long, action = ArgAction::Help)]
	help: Option<bool>,

	/// Print version
	#[arg(long, action = ArgAction::Version)]
	version: Option<bool>,

	/// Read configuration from this file instead of ~/.fqdn-ssh.toml
	#[arg(long, value_name = "PATH", conflicts_with = "no_config")]
	config: Option<PathBuf>,

	/// Ignore all configuration files
	#[arg(long)]
	no_config: bool,

	/// Domain suffix to try (repeatable, appended after configured suffixes)
	#[arg(long = "suffix", value_name = "SUFFIX")]
	suffixes: Vec<String>,

	/// Try the longest suffixes first
	#[arg(long)]
	longest: bool,

	/// Use the resolver's canonical name for suffixed matches
	#[arg(long)]
	reverse: bool,

	/// Rewrite pass to run: hostname, local-forward or remote-forward (repeatable)
	#[arg(long = "rewrite", value_name = "TARGET")]
	rewrite: Vec<RewriteTarget>,

	/// ssh binary to execute
	#[arg(long, value_name = "PATH")]
	ssh_path: Option<String>,

	/// Print the rewritten command line instead of running it
	#[arg(long)]
	dry_run: bool,

	/// Display the effective configuration and exit
	#[arg(long)]
	show_config: bool,

	/// Arguments for ssh
	#[arg(trailing_var_arg = true, allow_hyphen_values = true)]
	args: Vec<String>,
}

fn main() -> ExitCode {
	let cli = Cli::parse();

	env_logger::Builder::from_env(env_logger::Env::new().filter_or("FQDN_SSH_LOG", "warn"))
		.format_timestamp(None)
		.init();

	match run(cli) {
		Ok(code) => code,
		Err(e) => {
			if let Some(err @ FqdnSshError::InvalidArguments { .. }) = e.downcast_ref::<FqdnSshError>()
			{
				eprintln!("{err}");
				return ExitCode::from(USAGE_EXIT_CODE);
			}
			eprintln!("error: {e:?}");
			ExitCode::FAILURE
		}
	}
}

fn run(cli: Cli) -> Result<ExitCode> {
	let source = ConfigSource {
		explicit: cli.config.clone(),
		disabled: cli.no_config,
	};
	let settings = load_settings(&source)
		.context("Failed to load configuration")?
		.with_overrides(Overrides {
			ssh_path: cli.ssh_path.clone(),
			suffixes: cli.suffixes.clone(),
			prefer_longest_suffix: cli.longest,
			reverse_lookup: cli.reverse,
			rewrite: cli.rewrite.clone(),
		})?;

	if cli.show_config {
		return handle_show_config(&settings);
	}

	let argv = rewrite_command_line(&cli.args, &settings)?;

	if cli.dry_run {
		println!("{} {}", settings.ssh_path, argv.join(" "));
		return Ok(ExitCode::SUCCESS);
	}

	let ssh_path = resolve_command(&settings.ssh_path)?;
	let err = exec_ssh(&ssh_path, &argv);
	Err(err).with_context(|| format!("Failed to hand off to {}", ssh_path.display()))
}

/// Parse the ssh arguments and run every configured rewrite pass over them.
fn rewrite_command_line(args: &[String], settings: &Settings) -> Result<Vec<String>> {
	let mut cmdline = CommandLine::parse(args)?;

	for target in &settings.rewrite {
		FqdnResolver::system(&settings.resolve, *target)
			.update(&mut cmdline)
			.with_context(|| format!("Failed to apply {target} rewrite"))?;
	}

	Ok(cmdline.to_argv())
}

fn handle_show_config(settings: &Settings) -> Result<ExitCode> {
	match settings.source {
		Some(ref path) => println!("# Source: {}", path.display()),
		None => println!("# Source: (defaults)"),
	}
	println!("ssh-path: {}", settings.ssh_path);
	println!("suffixes: {}", settings.resolve.suffixes.join(", "));
	println!(
		"prefer-longest-suffix: {}",
		settings.resolve.prefer_longest_suffix
	);
	println!("reverse-lookup: {}", settings.resolve.reverse_lookup);
	let rewrite: Vec<&str> = settings.rewrite.iter().map(RewriteTarget::as_str).collect();
	println!("rewrite: {}", rewrite.join(", "));
	println!();

	if let Ok(user_path) = user_config_path() {
		println!("User config path: {}", user_path.display());
		if user_path.exists() {
			println!("  (exists)");
		} else {
			println!("  (not found)");
		}
	}

	Ok(ExitCode::SUCCESS)
}
