//! ssh command line model.
//!
//! This module handles:
//! - The fixed ssh option grammar
//! - getopt-style parsing into accumulated options and positional arguments
//! - Hostname and username derivation from `[user@]host`
//! - Re-linearizing the model into an argument vector

pub mod grammar;
pub mod model;
pub mod options;
pub mod parser;

pub use grammar::{FlagSpec, SSH_FLAGS, USAGE, lookup_flag};
pub use model::CommandLine;
pub use options::CmdOption;
pub use parser::{ParsedArgs, parse_args};
