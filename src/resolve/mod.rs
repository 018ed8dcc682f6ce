//! Hostname resolution and command line rewriting.
//!
//! This module handles:
//! - Suffix search against the system resolver (or any [`Lookup`])
//! - Rewriting the target hostname
//! - Rewriting hosts inside `-L` / `-R` forward specifications

pub mod forward;
pub mod fqdn;
pub mod lookup;

pub use forward::ForwardSpec;
pub use fqdn::{FqdnResolver, ResolveSettings, RewriteTarget};
pub use lookup::{HostEntry, Lookup, LookupError, SystemLookup};
