use dns_lookup::{AddrInfoHints, getaddrinfo};
use std::collections::BTreeSet;
use std::net::IpAddr;

/// Result of a successful name lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostEntry {
	/// The canonical name reported by the resolver.
	pub canonical_name: String,

	/// Other names for the host, if the resolver reports any.
	pub aliases: Vec<String>,

	/// Addresses the name resolved to.
	pub addresses: Vec<IpAddr>,
}

/// A failed name lookup. Never fatal: callers move on to the next candidate.
#[derive(Debug, thiserror::Error)]
pub enum LookupError {
	#[error("Failed to resolve {name}")]
	Resolve {
		name: String,
		#[source]
		source: std::io::Error,
	},

	#[error("No addresses found for {name}")]
	NoAddresses { name: String },
}

/// Name resolution used by the suffix search.
pub trait Lookup {
	fn lookup(&self, name: &str) -> Result<HostEntry, LookupError>;
}

impl<F> Lookup for F
where
	F: Fn(&str) -> Result<HostEntry, LookupError>,
{
	fn lookup(&self, name: &str) -> Result<HostEntry, LookupError> {
		self(name)
	}
}

/// Lookup through the system resolver (`getaddrinfo` with a canonical-name request).
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemLookup;

impl Lookup for SystemLookup {
	fn lookup(&self, name: &str) -> Result<HostEntry, LookupError> {
		let hints = AddrInfoHints {
			socktype: libc::SOCK_STREAM,
			protocol: 0,
			address: libc::AF_UNSPEC,
			flags: libc::AI_CANONNAME,
		};

		let resolve_error = |source: std::io::Error| LookupError::Resolve {
			name: name.to_string(),
			source,
		};

		let infos = getaddrinfo(Some(name), None, Some(hints))
			.map_err(|e| resolve_error(std::io::Error::from(e)))?;

		let mut canonical_name = None;
		let mut addresses = BTreeSet::new();
		for info in infos {
			let info = info.map_err(resolve_error)?;
			if canonical_name.is_none() {
				canonical_name = info.canonname;
			}
			addresses.insert(info.sockaddr.ip());
		}

		if addresses.is_empty() {
			return Err(LookupError::NoAddresses {
				name: name.to_string(),
			});
		}

		Ok(HostEntry {
			canonical_name: canonical_name.unwrap_or_else(|| name.to_string()),
			aliases: Vec::new(),
			addresses: addresses.into_iter().collect(),
		})
	}
}
