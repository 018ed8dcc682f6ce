use crate::cmdline::CommandLine;
use crate::error::Result;
use crate::resolve::forward::ForwardSpec;
use crate::resolve::lookup::{Lookup, SystemLookup};
use log::{debug, info};
use serde::Deserialize;
use std::fmt;
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Which part of the command line a resolver rewrites.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RewriteTarget {
	/// The `[user@]host` argument.
	Hostname,
	/// The host field of every `-L` specification.
	LocalForward,
	/// The host field of every `-R` specification.
	RemoteForward,
}

impl RewriteTarget {
	pub fn as_str(&self) -> &'static str {
		match self {
			RewriteTarget::Hostname => "hostname",
			RewriteTarget::LocalForward => "local-forward",
			RewriteTarget::RemoteForward => "remote-forward",
		}
	}

	/// The forwarding flag this target rewrites, if any.
	pub fn forward_flag(&self) -> Option<char> {
		match self {
			RewriteTarget::Hostname => None,
			RewriteTarget::LocalForward => Some('L'),
			RewriteTarget::RemoteForward => Some('R'),
		}
	}
}

impl fmt::Display for RewriteTarget {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

impl FromStr for RewriteTarget {
	type Err = String;

	fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
		match s {
			"hostname" => Ok(RewriteTarget::Hostname),
			"local-forward" => Ok(RewriteTarget::LocalForward),
			"remote-forward" => Ok(RewriteTarget::RemoteForward),
			other => Err(format!(
				"unknown rewrite target '{other}' (expected hostname, local-forward or remote-forward)"
			)),
		}
	}
}

/// Suffix search settings shared by every rewrite pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolveSettings {
	/// Domain suffixes to try, e.g. `.example.com`.
	pub suffixes: Vec<String>,

	/// Try suffixes longest first.
	pub prefer_longest_suffix: bool,

	/// Return the resolver's canonical name instead of the queried name.
	pub reverse_lookup: bool,
}

/// Resolves short hostnames to fully qualified ones and applies the result
/// to one part of a [`CommandLine`].
#[derive(Debug)]
pub struct FqdnResolver<L = SystemLookup> {
	suffixes: Vec<String>,
	reverse_lookup: bool,
	target: RewriteTarget,
	lookup: L,
}

impl FqdnResolver<SystemLookup> {
	/// Resolver backed by the system resolver.
	pub fn system(settings: &ResolveSettings, target: RewriteTarget) -> Self {
		FqdnResolver::new(settings, target, SystemLookup)
	}
}

impl<L: Lookup> FqdnResolver<L> {
	pub fn new(settings: &ResolveSettings, target: RewriteTarget, lookup: L) -> Self {
		let mut suffixes = settings.suffixes.clone();
		if settings.prefer_longest_suffix {
			// Stable, so equal-length suffixes keep their configured order.
			suffixes.sort_by(|a, b| b.len().cmp(&a.len()));
		}
		suffixes.push(String::new());

		FqdnResolver {
			suffixes,
			reverse_lookup: settings.reverse_lookup,
			target,
			lookup,
		}
	}

	/// Suffixes in search order, always ending with the empty suffix.
	pub fn suffixes(&self) -> &[String] {
		&self.suffixes
	}

	pub fn target(&self) -> RewriteTarget {
		self.target
	}

	/// Find the first resolvable `hostname + suffix`.
	///
	/// IPv4 literals are returned untouched. If nothing resolves the input is
	/// returned unchanged.
	pub fn find_fqdn(&self, hostname: &str) -> String {
		if is_ipv4_literal(hostname) {
			return hostname.to_string();
		}

		for suffix in &self.suffixes {
			let candidate = format!("{hostname}{suffix}");
			match self.lookup.lookup(&candidate) {
				Ok(entry) => {
					if self.reverse_lookup && !suffix.is_empty() && !entry.canonical_name.is_empty() {
						debug!("{candidate} resolved, canonical name {}", entry.canonical_name);
						return entry.canonical_name;
					}
					debug!("{candidate} resolved");
					return candidate;
				}
				Err(e) => debug!("{e}"),
			}
		}

		debug!("no suffix made {hostname} resolvable, leaving it unchanged");
		hostname.to_string()
	}

	/// Apply this resolver's rewrite to the command line.
	pub fn update(&self, cmdline: &mut CommandLine) -> Result<()> {
		if self.suffixes.len() == 1 {
			debug!(
				"no domain suffixes configured, {} rewrite only checks bare names",
				self.target
			);
		}

		match self.target.forward_flag() {
			None => {
				let resolved = self.find_fqdn(cmdline.hostname());
				if resolved != cmdline.hostname() {
					info!("hostname {} -> {resolved}", cmdline.hostname());
				}
				cmdline.set_hostname(resolved);
			}
			Some(flag) => self.update_forwards(cmdline, flag)?,
		}

		Ok(())
	}

	fn update_forwards(&self, cmdline: &mut CommandLine, flag: char) -> Result<()> {
		let Some(option) = cmdline.option_mut(flag) else {
			return Ok(());
		};

		// Validate every spec before touching any of them.
		let specs = option
			.values()
			.map(|value| ForwardSpec::parse(flag, value))
			.collect::<Result<Vec<_>>>()?;

		for (index, mut spec) in specs.into_iter().enumerate() {
			let resolved = self.find_fqdn(&spec.host);
			if resolved != spec.host {
				info!("-{flag} host {} -> {resolved}", spec.host);
			}
			spec.host = resolved;
			option.set_value(index, spec.to_string());
		}

		Ok(())
	}
}

/// True for a dotted-quad IPv4 address in canonical form.
fn is_ipv4_literal(hostname: &str) -> bool {
	hostname
		.parse::<Ipv4Addr>()
		.is_ok_and(|addr| addr.to_string() == hostname)
}
