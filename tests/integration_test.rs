#![allow(deprecated)] // assert_cmd::Command::cargo_bin is deprecated but replacement requires nightly

use predicates::prelude::*;
use std::fs;

fn fqdn_ssh_cmd() -> assert_cmd::Command {
	let mut cmd = assert_cmd::Command::cargo_bin("fqdn-ssh").unwrap();
	cmd.env_remove("FQDN_SSH_CONFIG")
		.env_remove("FQDN_SSH_NO_CONFIG")
		.env_remove("FQDN_SSH_LOG");
	cmd
}

/// A command that ignores any config file on the machine running the tests.
fn isolated_cmd() -> assert_cmd::Command {
	let mut cmd = fqdn_ssh_cmd();
	cmd.arg("--no-config");
	cmd
}

// ============================================================================
// CLI flag tests
// ============================================================================

#[test]
fn test_help_flag() {
	fqdn_ssh_cmd()
		.arg("--help")
		.assert()
		.success()
		.stdout(predicate::str::contains("resolves short hostnames"));
}

#[test]
fn test_version_flag() {
	fqdn_ssh_cmd()
		.arg("--version")
		.assert()
		.success()
		.stdout(predicate::str::contains("fqdn-ssh"));
}

#[test]
fn test_no_args_shows_ssh_usage() {
	isolated_cmd()
		.assert()
		.code(255)
		.stderr(predicate::str::contains("missing hostname"))
		.stderr(predicate::str::contains("usage: ssh"));
}

#[test]
fn test_short_flags_belong_to_ssh() {
	isolated_cmd()
		.args(["--dry-run", "--ssh-path", "ssh", "-V", "-v", "127.0.0.1"])
		.assert()
		.success()
		.stdout(predicate::str::diff("ssh -V -v 127.0.0.1\n"));
}

// ============================================================================
// Argument errors
// ============================================================================

#[test]
fn test_unknown_ssh_flag() {
	isolated_cmd()
		.args(["--dry-run", "-h", "127.0.0.1"])
		.assert()
		.code(255)
		.stderr(predicate::str::contains("unknown option -- h"))
		.stderr(predicate::str::contains("[user@]hostname [command]"));
}

#[test]
fn test_missing_option_value() {
	isolated_cmd()
		.args(["--dry-run", "-p"])
		.assert()
		.code(255)
		.stderr(predicate::str::contains("option requires an argument -- p"));
}

#[test]
fn test_cannot_determine_hostname() {
	isolated_cmd()
		.args(["--dry-run", "bad_host"])
		.assert()
		.code(1)
		.stderr(predicate::str::contains("Cannot determine hostname"));
}

#[test]
fn test_malformed_forward_spec() {
	isolated_cmd()
		.args([
			"--dry-run",
			"--rewrite",
			"remote-forward",
			"-R",
			"127.0.0.1:8080:web:80",
			"127.0.0.1",
		])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Malformed forward specification for -R"));
}

#[test]
fn test_duplicate_rewrite_targets() {
	isolated_cmd()
		.args([
			"--dry-run",
			"--rewrite",
			"hostname",
			"--rewrite",
			"hostname",
			"127.0.0.1",
		])
		.assert()
		.failure()
		.stderr(predicate::str::contains("more than once"));
}

#[test]
fn test_unknown_rewrite_target() {
	isolated_cmd()
		.args(["--dry-run", "--rewrite", "dynamic-forward", "127.0.0.1"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("unknown rewrite target"));
}

// ============================================================================
// Dry-run rewriting tests
// ============================================================================

#[test]
fn test_dry_run_round_trip() {
	isolated_cmd()
		.args([
			"--dry-run",
			"--ssh-path",
			"ssh",
			"-A",
			"-p",
			"2222",
			"-o",
			"BatchMode=yes",
			"root@127.0.0.1",
			"uptime",
			"-p",
		])
		.assert()
		.success()
		.stdout(predicate::str::diff(
			"ssh -A -p 2222 -o BatchMode=yes root@127.0.0.1 uptime -p\n",
		));
}

#[test]
fn test_dry_run_login_flag_becomes_user_prefix() {
	isolated_cmd()
		.args(["--dry-run", "--ssh-path", "ssh", "-l", "alice", "127.0.0.1", "uptime"])
		.assert()
		.success()
		.stdout(predicate::str::diff("ssh -l alice alice@127.0.0.1 uptime\n"));
}

#[test]
fn test_dry_run_local_forward_with_literal_address() {
	isolated_cmd()
		.args([
			"--dry-run",
			"--ssh-path",
			"ssh",
			"--suffix",
			".invalid",
			"--rewrite",
			"local-forward",
			"-L",
			"8080:10.0.0.1:80",
			"127.0.0.1",
		])
		.assert()
		.success()
		.stdout(predicate::str::diff("ssh -L 8080:10.0.0.1:80 127.0.0.1\n"));
}

#[test]
fn test_dry_run_unresolvable_host_is_unchanged() {
	isolated_cmd()
		.args([
			"--dry-run",
			"--suffix",
			".invalid",
			"deploy@no-such-host-fqdn-ssh.invalid",
			"uptime",
		])
		.assert()
		.success()
		.stdout(predicate::str::contains(
			"deploy@no-such-host-fqdn-ssh.invalid uptime",
		));
}

#[test]
fn test_dry_run_without_suffixes_is_quiet() {
	isolated_cmd()
		.args([
			"--dry-run",
			"--ssh-path",
			"ssh",
			"--rewrite",
			"hostname",
			"--rewrite",
			"local-forward",
			"127.0.0.1",
		])
		.assert()
		.success()
		.stdout(predicate::str::diff("ssh 127.0.0.1\n"))
		.stderr(predicate::str::contains("no domain suffixes").not());
}

// ============================================================================
// Configuration tests
// ============================================================================

#[test]
fn test_show_config_defaults() {
	isolated_cmd()
		.arg("--show-config")
		.assert()
		.success()
		.stdout(predicate::str::contains("# Source: (defaults)"))
		.stdout(predicate::str::contains("ssh-path: /usr/bin/ssh"))
		.stdout(predicate::str::contains("rewrite: hostname"));
}

#[test]
fn test_show_config_from_file_with_overrides() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("fqdn-ssh.toml");

	fs::write(
		&config_path,
		r#"
ssh-path = "/opt/openssh/bin/ssh"
suffixes = [".example.test"]
rewrite = ["local-forward"]
"#,
	)
	.unwrap();

	fqdn_ssh_cmd()
		.arg("--config")
		.arg(&config_path)
		.args(["--suffix", ".corp.example.test", "--longest", "--show-config"])
		.assert()
		.success()
		.stdout(predicate::str::contains("# Source:"))
		.stdout(predicate::str::contains("ssh-path: /opt/openssh/bin/ssh"))
		.stdout(predicate::str::contains(
			"suffixes: .example.test, .corp.example.test",
		))
		.stdout(predicate::str::contains("prefer-longest-suffix: true"))
		.stdout(predicate::str::contains("rewrite: local-forward"));
}

#[test]
fn test_config_from_env_var() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("fqdn-ssh.toml");

	fs::write(&config_path, "reverse-lookup = true\n").unwrap();

	fqdn_ssh_cmd()
		.env("FQDN_SSH_CONFIG", &config_path)
		.arg("--show-config")
		.assert()
		.success()
		.stdout(predicate::str::contains("reverse-lookup: true"));
}

#[test]
fn test_config_env_var_missing_file() {
	fqdn_ssh_cmd()
		.env("FQDN_SSH_CONFIG", "/nonexistent/fqdn-ssh.toml")
		.arg("--show-config")
		.assert()
		.failure()
		.stderr(predicate::str::contains("Config file not found"));
}

#[test]
fn test_no_config_env_var_disables_loading() {
	fqdn_ssh_cmd()
		.env("FQDN_SSH_CONFIG", "/nonexistent/fqdn-ssh.toml")
		.env("FQDN_SSH_NO_CONFIG", "1")
		.arg("--show-config")
		.assert()
		.success()
		.stdout(predicate::str::contains("(defaults)"));
}

#[test]
fn test_invalid_config_file() {
	let temp_dir = tempfile::tempdir().unwrap();
	let config_path = temp_dir.path().join("fqdn-ssh.toml");

	fs::write(&config_path, "suffixes = [[[").unwrap();

	fqdn_ssh_cmd()
		.arg("--config")
		.arg(&config_path)
		.args(["--dry-run", "127.0.0.1"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Failed to parse config file"));
}

#[test]
fn test_config_and_no_config_conflict() {
	fqdn_ssh_cmd()
		.args(["--config", "/tmp/x.toml", "--no-config", "127.0.0.1"])
		.assert()
		.failure();
}

// ============================================================================
// Exec tests (Unix only - these replace the process with a Unix command)
// ============================================================================

#[cfg(unix)]
#[test]
fn test_exec_replaces_process_with_rewritten_argv() {
	isolated_cmd()
		.args(["--ssh-path", "echo", "-l", "alice", "127.0.0.1", "uptime"])
		.assert()
		.success()
		.stdout(predicate::str::diff("-l alice alice@127.0.0.1 uptime\n"));
}

#[cfg(unix)]
#[test]
fn test_exec_exit_code_is_ssh_exit_code() {
	isolated_cmd()
		.args(["--ssh-path", "false", "127.0.0.1"])
		.assert()
		.code(1);
}

#[cfg(unix)]
#[test]
fn test_exec_passes_environment_through() {
	// printenv looks up the "hostname" as a variable name.
	isolated_cmd()
		.env("FQDNSSHMARKER", "marker-value")
		.args([
			"--ssh-path",
			"printenv",
			"--rewrite",
			"local-forward",
			"FQDNSSHMARKER",
		])
		.assert()
		.success()
		.stdout(predicate::str::diff("marker-value\n"));
}

#[test]
fn test_exec_missing_ssh_binary() {
	isolated_cmd()
		.args(["--ssh-path", "/nonexistent/bin/ssh", "127.0.0.1"])
		.assert()
		.failure()
		.stderr(predicate::str::contains("Command not found"));
}
