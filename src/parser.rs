/*!
# Argspan: Argument Parser.

This module handles the actual parsing: splitting the raw arguments into
option spans, separating each span's name from its value, and committing the
results to an [`OptionRegistry`].
*/

use crate::{
	OptionRegistry,
	ParseError,
	text,
};



/// # Name/Value Separators.
const SEPARATORS: [char; 3] = [' ', ':', '='];



#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
/// # Parse Mode.
///
/// This determines how [`ArgumentParser`] reacts to unknown or malformed
/// options.
pub enum ParseMode {
	#[default]
	/// # Strict.
	///
	/// The first bad option aborts the whole pass; nothing after it is
	/// parsed.
	Strict,

	/// # Lenient.
	///
	/// Bad options are logged and skipped, and parsing continues.
	Lenient,
}



#[derive(Debug)]
/// # Argument Parser.
///
/// This walks a token sequence, writing any values it finds into the
/// registry and appending problems to the error log.
///
/// An option span begins with any token starting with a dash, and continues
/// until the next such token (or the end). Everything in between is glued
/// together and split into a name and value on the first space, `:`, or `=`.
/// As such, the following are all equivalent:
/// * `--key=val`; `--key:val`; `--key` then `val`;
/// * `-k=val`; `-k:val`; `-k` then `val`;
///
/// Values may optionally be wrapped in double quotes.
///
/// ## Examples
///
/// ```
/// use argspan::{ArgumentParser, CmdOption, OptionRegistry};
///
/// let mut reg = OptionRegistry::new();
/// reg.declare(CmdOption::from(("optionA", "3", "a"))).unwrap();
/// reg.declare(CmdOption::from(("optionB", "45.6", "b"))).unwrap();
///
/// let mut errors = Vec::new();
/// assert!(
///     ArgumentParser::new(&mut reg, &mut errors)
///         .parse(&["-a:16", "-b", "6.3"])
/// );
/// assert!(errors.is_empty());
/// assert_eq!(reg.get("optionB").unwrap().get::<f64>(), Ok(6.3));
/// ```
pub struct ArgumentParser<'a> {
	/// # Registry.
	registry: &'a mut OptionRegistry,

	/// # Error Log.
	errors: &'a mut Vec<ParseError>,

	/// # Mode.
	mode: ParseMode,
}

impl<'a> ArgumentParser<'a> {
	/// # New.
	pub fn new(registry: &'a mut OptionRegistry, errors: &'a mut Vec<ParseError>)
	-> Self {
		Self {
			registry,
			errors,
			mode: ParseMode::Strict,
		}
	}

	#[must_use]
	/// # With Mode.
	pub const fn with_mode(mut self, mode: ParseMode) -> Self {
		self.mode = mode;
		self
	}

	/// # Parse.
	///
	/// Parse the tokens, returning `true` if everything went well.
	///
	/// In [`ParseMode::Strict`], the first unknown or malformed option is
	/// logged and parsing stops, returning `false`. In
	/// [`ParseMode::Lenient`], failures are logged and skipped.
	pub fn parse<S: AsRef<str>>(mut self, tokens: &[S]) -> bool {
		for span in Spans::new(tokens) {
			log::trace!("Parsing option span {span:?}.");
			if let Err(e) = self.commit(&span) {
				log::warn!("{e}");
				self.errors.push(e);
				if self.mode == ParseMode::Strict { return false; }
			}
		}

		true
	}

	/// # Commit Span.
	///
	/// Resolve the span's option and save its value.
	fn commit(&mut self, span: &str) -> Result<(), ParseError> {
		let (long_form, name, value) = split_span(span);
		if name.is_empty() { return Err(ParseError::Malformed(span.to_owned())); }

		let long =
			if long_form { name.to_owned() }
			else {
				self.registry.resolve_short(name)
					.ok_or_else(|| ParseError::UnknownOption(name.to_owned()))?
					.to_owned()
			};

		log::debug!("Setting option {long} to {value:?}.");
		self.registry.update_value(&long, value.to_owned())
	}
}



/// # Span Iterator.
///
/// This groups tokens into option spans, yielding each as a single string.
/// Tokens preceding the first dash-prefixed entry are skipped.
struct Spans<'a, S> {
	/// # Tokens.
	tokens: &'a [S],

	/// # Cursor.
	pos: usize,
}

impl<'a, S: AsRef<str>> Spans<'a, S> {
	/// # New.
	const fn new(tokens: &'a [S]) -> Self {
		Self { tokens, pos: 0 }
	}

	/// # Next Option Position.
	///
	/// Return the index of the next option-introducing token at or after
	/// `from`, or the length of the slice if there are none.
	fn next_option(&self, from: usize) -> usize {
		self.tokens.iter()
			.skip(from)
			.position(|t| is_option(t.as_ref()))
			.map_or(self.tokens.len(), |p| p + from)
	}
}

impl<S: AsRef<str>> Iterator for Spans<'_, S> {
	type Item = String;

	fn next(&mut self) -> Option<Self::Item> {
		let start = self.next_option(self.pos);
		if start >= self.tokens.len() {
			self.pos = self.tokens.len();
			return None;
		}
		let end = self.next_option(start + 1);
		self.pos = end;

		let mut out = String::new();
		for token in &self.tokens[start..end] {
			let token = token.as_ref();

			// A bare value following a bare key needs something to keep them
			// apart.
			if
				! out.is_empty() &&
				! text::trim_start(&out, '-').contains(SEPARATORS) &&
				! token.starts_with(SEPARATORS)
			{
				out.push(' ');
			}

			out.push_str(token);
		}

		Some(out)
	}
}



/// # Is Option?
///
/// Option-introducing tokens begin with a dash.
fn is_option(token: &str) -> bool { token.starts_with('-') }

/// # Split Span.
///
/// Return whether or not the span uses the long form, along with its
/// (trimmed) name and value.
fn split_span(span: &str) -> (bool, &str, &str) {
	let long_form = span.starts_with("--");
	let body = text::trim_start(span, '-');
	let (name, value) = body.split_once(SEPARATORS).unwrap_or((body, ""));
	let name = text::trim(name, ' ');
	let value = text::unquote(text::trim(value, ' '));
	(long_form, name, value)
}
