use crate::cmdline::grammar::FlagSpec;

/// A recognized ssh flag together with every occurrence seen on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CmdOption {
	spec: FlagSpec,
	occurrences: Vec<Option<String>>,
}

impl CmdOption {
	/// Create an option with no occurrences yet.
	pub fn new(spec: FlagSpec) -> Self {
		CmdOption {
			spec,
			occurrences: Vec::new(),
		}
	}

	/// The flag character, e.g. `'L'`.
	pub fn flag(&self) -> char {
		self.spec.flag
	}

	/// The flag as it appears on the command line, e.g. `"-L"`.
	pub fn token(&self) -> String {
		format!("-{}", self.spec.flag)
	}

	pub fn takes_argument(&self) -> bool {
		self.spec.takes_argument
	}

	/// Number of times the flag appeared.
	pub fn count(&self) -> usize {
		self.occurrences.len()
	}

	/// Record another occurrence.
	///
	/// The value is dropped for boolean flags so that only value flags ever
	/// carry one.
	pub fn add(&mut self, value: Option<String>) {
		let value = if self.spec.takes_argument { value } else { None };
		self.occurrences.push(value);
	}

	/// Values of a value flag, in occurrence order.
	pub fn values(&self) -> impl Iterator<Item = &str> {
		self.occurrences.iter().filter_map(|v| v.as_deref())
	}

	/// Value of the most recent occurrence, if any.
	pub fn last_value(&self) -> Option<&str> {
		self.occurrences.last().and_then(|v| v.as_deref())
	}

	/// Replace the value at `index`. Ignored for boolean flags.
	pub fn set_value(&mut self, index: usize, value: String) {
		if !self.spec.takes_argument {
			return;
		}
		if let Some(slot) = self.occurrences.get_mut(index) {
			*slot = Some(value);
		}
	}

	/// Render every occurrence as argv tokens: `-v -v` or `-L spec -L spec`.
	pub fn argv(&self) -> Vec<String> {
		let mut argv = Vec::with_capacity(self.occurrences.len() * 2);
		for value in &self.occurrences {
			argv.push(self.token());
			if let Some(value) = value {
				argv.push(value.clone());
			}
		}
		argv
	}
}
