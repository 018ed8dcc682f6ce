use crate::error::{FqdnSshError, Result};
use std::fmt;

/// A `port:host:hostport` forwarding rule as passed to `-L` or `-R`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ForwardSpec {
	pub listen_port: String,
	pub host: String,
	pub host_port: String,
}

impl ForwardSpec {
	/// Parse a forward specification. Anything other than exactly three
	/// colon-separated fields is rejected.
	pub fn parse(flag: char, spec: &str) -> Result<Self> {
		let malformed = || FqdnSshError::MalformedForwardSpec {
			flag,
			spec: spec.to_string(),
		};

		let mut fields = spec.split(':');
		let (Some(listen_port), Some(host), Some(host_port), None) =
			(fields.next(), fields.next(), fields.next(), fields.next())
		else {
			return Err(malformed());
		};

		Ok(ForwardSpec {
			listen_port: listen_port.to_string(),
			host: host.to_string(),
			host_port: host_port.to_string(),
		})
	}
}

impl fmt::Display for ForwardSpec {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}:{}:{}", self.listen_port, self.host, self.host_port)
	}
}
