//! fqdn-ssh - ssh wrapper that qualifies short hostnames before connecting.
//!
//! This library provides the core functionality for fqdn-ssh, including:
//! - Parsing an ssh command line into options and positional arguments
//! - Suffix search for resolvable hostnames
//! - Rewriting the target host and `-L` / `-R` forward specifications
//! - Configuration loading and handing off to ssh
//!
//! # Example
//!
//! ```no_run
//! use fqdn_ssh::cmdline::CommandLine;
//! use fqdn_ssh::resolve::{FqdnResolver, ResolveSettings, RewriteTarget};
//!
//! let argv: Vec<String> = ["-L", "5432:db:5432", "alice@bastion"]
//!     .iter()
//!     .map(|s| s.to_string())
//!     .collect();
//! let mut cmdline = CommandLine::parse(&argv).unwrap();
//!
//! let settings = ResolveSettings {
//!     suffixes: vec![".example.com".to_string()],
//!     ..Default::default()
//! };
//! for target in [RewriteTarget::Hostname, RewriteTarget::LocalForward] {
//!     FqdnResolver::system(&settings, target).update(&mut cmdline).unwrap();
//! }
//!
//! println!("ssh {}", cmdline.to_argv().join(" "));
//! ```

pub mod cmdline;
pub mod config;
pub mod error;
pub mod exec;
pub mod resolve;

pub use error::{FqdnSshError, Result};
