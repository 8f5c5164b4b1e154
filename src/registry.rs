/*!
# Argspan: Option Registry.
*/

use crate::{
	CmdOption,
	ParseError,
	text,
};
use std::collections::BTreeMap;



#[derive(Debug, Clone, Default)]
/// # Option Registry.
///
/// This holds the set of declared [`CmdOption`]s, keyed by their lowercase
/// long names.
///
/// Iteration is alphabetical (case-insensitively), but short-name resolution
/// follows declaration order so that the first option declared with a given
/// alias always wins.
pub struct OptionRegistry {
	/// # Options (Declaration Order).
	options: Vec<CmdOption>,

	/// # Lowercase Long Name to Index.
	index: BTreeMap<String, usize>,
}

impl OptionRegistry {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	/// # Declare.
	///
	/// Add an option to the registry.
	///
	/// ## Errors
	///
	/// This will return an error if the long name is blank or was already
	/// declared (case-insensitively). In either case the registry is left as
	/// it was.
	pub fn declare(&mut self, option: CmdOption) -> Result<(), ParseError> {
		if text::is_blank(option.long()) { return Err(ParseError::BlankOption); }

		let key = text::to_lower(option.long());
		if self.index.contains_key(&key) {
			return Err(ParseError::DuplicateOption(option.long().to_owned()));
		}

		self.index.insert(key, self.options.len());
		self.options.push(option);
		Ok(())
	}

	#[must_use]
	/// # Exists?
	///
	/// Test whether an option with this long name has been declared,
	/// ignoring case.
	pub fn exists(&self, long: &str) -> bool {
		self.index.contains_key(&text::to_lower(long))
	}

	#[must_use]
	/// # Get.
	///
	/// Return a copy of the option matching the long name, if any.
	pub fn get(&self, long: &str) -> Option<CmdOption> {
		self.find(long).cloned()
	}

	#[must_use]
	/// # Resolve Short Name.
	///
	/// Return the long name of the first declared option whose short name
	/// matches exactly (case-sensitively).
	pub fn resolve_short(&self, short: &str) -> Option<&str> {
		self.options.iter()
			.find(|o| o.short() == short)
			.map(CmdOption::long)
	}

	/// # Update Value.
	///
	/// ## Errors
	///
	/// This will return an error if no option matches the long name.
	pub fn update_value(&mut self, long: &str, value: String)
	-> Result<(), ParseError> {
		let idx = self.index.get(&text::to_lower(long))
			.copied()
			.ok_or_else(|| ParseError::UnknownOption(long.to_owned()))?;
		self.options[idx].set_value(value);
		Ok(())
	}

	#[must_use]
	/// # Length.
	pub fn len(&self) -> usize { self.options.len() }

	#[must_use]
	/// # Is Empty?
	pub fn is_empty(&self) -> bool { self.options.is_empty() }

	/// # Iterate (Alphabetically).
	pub fn iter(&self) -> impl Iterator<Item=&CmdOption> {
		self.index.values().map(|&idx| &self.options[idx])
	}

	/// # Find by Long Name.
	fn find(&self, long: &str) -> Option<&CmdOption> {
		self.index.get(&text::to_lower(long)).map(|&idx| &self.options[idx])
	}
}
