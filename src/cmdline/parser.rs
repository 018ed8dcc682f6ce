use crate::cmdline::grammar::{FlagSpec, lookup_flag};
use crate::cmdline::options::CmdOption;
use crate::error::{FqdnSshError, Result};

/// Options and positional arguments split out of an ssh argument vector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedArgs {
	/// Recognized options in first-sight order, repeats accumulated.
	pub options: Vec<CmdOption>,

	/// Everything from the first non-option token on.
	pub args: Vec<String>,

	/// Scanning was ended by an explicit `--`.
	pub end_of_options: bool,
}

impl ParsedArgs {
	fn record(&mut self, spec: &FlagSpec, value: Option<String>) {
		if let Some(existing) = self.options.iter_mut().find(|o| o.flag() == spec.flag) {
			existing.add(value);
			return;
		}

		let mut option = CmdOption::new(*spec);
		option.add(value);
		self.options.push(option);
	}
}

/// Split an ssh argument vector (without the program name) into options and
/// positional arguments.
///
/// Scanning follows POSIX getopt: it stops at `--` (which is consumed and
/// noted in [`ParsedArgs::end_of_options`]), at a lone `-`, or at the first
/// token not starting with `-`.
pub fn parse_args(argv: &[String]) -> Result<ParsedArgs> {
	let mut parsed = ParsedArgs::default();
	let mut i = 0;

	while i < argv.len() {
		let token = argv[i].as_str();

		if token == "--" {
			parsed.end_of_options = true;
			i += 1;
			break;
		}
		if token == "-" || !token.starts_with('-') {
			break;
		}
		if token.starts_with("--") {
			return Err(FqdnSshError::invalid_arguments(format!(
				"unrecognized option '{token}'"
			)));
		}

		let body = &token[1..];
		for (idx, flag) in body.char_indices() {
			let spec = lookup_flag(flag).ok_or_else(|| {
				FqdnSshError::invalid_arguments(format!("unknown option -- {flag}"))
			})?;

			if !spec.takes_argument {
				parsed.record(spec, None);
				continue;
			}

			// A value flag consumes the rest of the token, or the next token.
			let rest = &body[idx + flag.len_utf8()..];
			let value = if rest.is_empty() {
				i += 1;
				argv.get(i).cloned().ok_or_else(|| {
					FqdnSshError::invalid_arguments(format!("option requires an argument -- {flag}"))
				})?
			} else {
				rest.to_string()
			};
			parsed.record(spec, Some(value));
			break;
		}

		i += 1;
	}

	parsed.args = argv[i..].to_vec();
	Ok(parsed)
}
