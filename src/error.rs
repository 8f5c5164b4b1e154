/*!
# Argspan: Errors.

There are two kinds of errors here: [`ParseError`]s, which are collected by
[`CmdParse`](crate::CmdParse) during declaration and parsing, and
[`ValueError`]s, which are returned directly by the typed value accessors
after the fact.
*/

use std::{
	error::Error,
	fmt,
	num::{
		ParseFloatError,
		ParseIntError,
	},
};



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Parse Error.
pub enum ParseError {
	/// # Option Name is Blank.
	BlankOption,

	/// # Duplicate Option.
	///
	/// The (case-insensitive) long name was already declared.
	DuplicateOption(String),

	/// # Malformed Span.
	///
	/// The command line contained a dash-prefixed entry with no option name,
	/// like `--` or `-=3`.
	Malformed(String),

	/// # No Arguments.
	///
	/// Not even the executable path was provided.
	NoArguments,

	/// # Unknown Option.
	UnknownOption(String),
}

impl Error for ParseError {}

impl fmt::Display for ParseError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::BlankOption | Self::NoArguments => f.write_str(self.as_str()),
			Self::DuplicateOption(s) => write!(f, "Option already exists: {s}"),
			Self::Malformed(s) => write!(f, "Malformed option: {s}"),
			Self::UnknownOption(s) => write!(f, "Option not found: {s}"),
		}
	}
}

impl ParseError {
	#[must_use]
	/// # As String Slice.
	///
	/// Return a generic description of the error, sans specifics.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::BlankOption => "Option name cannot be blank",
			Self::DuplicateOption(_) => "Option already exists",
			Self::Malformed(_) => "Malformed option",
			Self::NoArguments => "No arguments given to application",
			Self::UnknownOption(_) => "Option not found",
		}
	}
}



#[derive(Debug, Clone, Eq, PartialEq)]
/// # Value Conversion Error.
///
/// This is returned by [`CmdOption::get`](crate::CmdOption::get) and friends
/// when the stored string cannot be read as the requested type.
pub enum ValueError {
	/// # Not a Boolean.
	Bool(String),

	/// # Empty Value.
	Empty,

	/// # Not a Float.
	Float(ParseFloatError),

	/// # Not an Integer.
	Int(ParseIntError),
}

impl Error for ValueError {
	fn source(&self) -> Option<&(dyn Error + 'static)> {
		match self {
			Self::Float(e) => Some(e),
			Self::Int(e) => Some(e),
			Self::Bool(_) | Self::Empty => None,
		}
	}
}

impl fmt::Display for ValueError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Bool(s) => write!(f, "Invalid boolean: {s}"),
			Self::Empty => f.write_str(self.as_str()),
			Self::Float(e) => write!(f, "Invalid float: {e}"),
			Self::Int(e) => write!(f, "Invalid integer: {e}"),
		}
	}
}

impl From<ParseFloatError> for ValueError {
	#[inline]
	fn from(src: ParseFloatError) -> Self { Self::Float(src) }
}

impl From<ParseIntError> for ValueError {
	#[inline]
	fn from(src: ParseIntError) -> Self { Self::Int(src) }
}

impl ValueError {
	#[must_use]
	/// # As String Slice.
	pub const fn as_str(&self) -> &'static str {
		match self {
			Self::Bool(_) => "Invalid boolean.",
			Self::Empty => "Missing value.",
			Self::Float(_) => "Invalid float.",
			Self::Int(_) => "Invalid integer.",
		}
	}
}
