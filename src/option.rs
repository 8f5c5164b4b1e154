/*!
# Argspan: Options.
*/

use crate::{
	text,
	ValueError,
};



#[derive(Debug, Clone, Default, Eq, PartialEq)]
/// # Command-Line Option.
///
/// A single declarable option, consisting of a long name, a short alias, a
/// default value, and (once parsed) whatever value the user supplied.
///
/// Long names are matched case-insensitively; short names are matched
/// exactly. If no short name is given, the long name doubles as the short.
///
/// ## Examples
///
/// ```
/// use argspan::CmdOption;
///
/// let opt = CmdOption::new("BufferSize")
///     .with_default("1000")
///     .with_short("b");
///
/// assert_eq!(opt.long(), "BufferSize");
/// assert_eq!(opt.short(), "b");
/// assert_eq!(opt.default_value(), "1000");
/// assert_eq!(opt.get_or_default::<u32>(), Ok(1000));
///
/// // Tuples work too.
/// assert_eq!(opt, CmdOption::from(("BufferSize", "1000", "b")));
/// ```
pub struct CmdOption {
	/// # Long Name.
	long: String,

	/// # Short Name.
	short: String,

	/// # Default Value.
	default: String,

	/// # Parsed Value.
	value: String,

	/// # Value Assigned?
	set: bool,
}

impl From<&str> for CmdOption {
	#[inline]
	fn from(src: &str) -> Self { Self::new(src) }
}

impl From<(&str, &str)> for CmdOption {
	#[inline]
	fn from((long, default): (&str, &str)) -> Self {
		Self::new(long).with_default(default)
	}
}

impl From<(&str, &str, &str)> for CmdOption {
	#[inline]
	fn from((long, default, short): (&str, &str, &str)) -> Self {
		Self::new(long).with_default(default).with_short(short)
	}
}

impl CmdOption {
	#[must_use]
	/// # New.
	///
	/// Create a new option with the given long name, no default, and a short
	/// name equal to the long name.
	pub fn new<S: AsRef<str>>(long: S) -> Self {
		let long = text::trim(long.as_ref(), ' ').to_owned();
		Self {
			short: long.clone(),
			long,
			default: String::new(),
			value: String::new(),
			set: false,
		}
	}

	#[must_use]
	/// # With Default.
	pub fn with_default<S: Into<String>>(mut self, default: S) -> Self {
		self.default = default.into();
		self
	}

	#[must_use]
	/// # With Short Name.
	///
	/// Blank values are ignored, leaving the short name equal to the long
	/// name.
	pub fn with_short<S: AsRef<str>>(mut self, short: S) -> Self {
		let short = short.as_ref();
		if ! text::is_blank(short) {
			text::trim(short, ' ').clone_into(&mut self.short);
		}
		self
	}
}

impl CmdOption {
	#[must_use]
	/// # Long Name.
	pub fn long(&self) -> &str { &self.long }

	#[must_use]
	/// # Short Name.
	pub fn short(&self) -> &str { &self.short }

	#[must_use]
	/// # Default Value.
	pub fn default_value(&self) -> &str { &self.default }

	#[must_use]
	/// # Raw Value.
	///
	/// Return the value captured from the command line. This is empty if the
	/// option was not passed, or was passed without a value.
	pub fn value(&self) -> &str { &self.value }

	#[must_use]
	/// # Was Set?
	///
	/// Returns `true` if a parse pass assigned a value to this option, even
	/// an empty one (e.g. `--flag`).
	pub const fn is_set(&self) -> bool { self.set }

	#[must_use]
	/// # Is Value Blank?
	///
	/// Returns `true` if the captured value is empty or whitespace-only. Note
	/// that this says nothing about whether or not the option was actually
	/// passed; use [`CmdOption::is_set`] for that.
	pub fn is_value_blank(&self) -> bool { text::is_blank(&self.value) }

	/// # Get Value.
	///
	/// Read the captured value as `T`.
	///
	/// ## Examples
	///
	/// ```
	/// use argspan::CmdParse;
	///
	/// let mut cmd = CmdParse::from_options([("BufferSize", "1000", "b")]);
	/// assert!(cmd.init(["app", "--buffersize=23"]));
	///
	/// let opt = cmd.option("BufferSize").unwrap();
	/// assert_eq!(opt.get::<i32>(), Ok(23));
	/// assert_eq!(opt.get::<f64>(), Ok(23.0));
	/// assert_eq!(opt.get::<String>().as_deref(), Ok("23"));
	/// ```
	///
	/// ## Errors
	///
	/// An error is returned if the value cannot be converted.
	pub fn get<T: OptionValue>(&self) -> Result<T, ValueError> {
		T::from_value(&self.value)
	}

	/// # Get Value or Default.
	///
	/// Same as [`CmdOption::get`], except the default value is read instead
	/// if the option was never set.
	///
	/// ## Errors
	///
	/// An error is returned if the value cannot be converted.
	pub fn get_or_default<T: OptionValue>(&self) -> Result<T, ValueError> {
		if self.set { T::from_value(&self.value) }
		else { T::from_value(&self.default) }
	}

	/// # Set Value.
	pub(crate) fn set_value(&mut self, value: String) {
		self.value = value;
		self.set = true;
	}
}



/// # Option Value.
///
/// This trait is used by [`CmdOption::get`] to convert raw string values into
/// more useful types. It is implemented for the integer and float primitives,
/// `bool`, and `String`.
///
/// Numbers are parsed according to the standard [`FromStr`](std::str::FromStr)
/// rules after trimming surrounding whitespace; booleans accept `true`, `yes`,
/// `1`, `false`, `no`, and `0` (case-insensitively). Strings are passed
/// through as-are.
pub trait OptionValue: Sized {
	/// # From Value.
	///
	/// ## Errors
	///
	/// Return an error if `raw` cannot be represented as `Self`.
	fn from_value(raw: &str) -> Result<Self, ValueError>;
}

/// # Helper: Numeric Values.
macro_rules! from_num {
	($($ty:ty),+ $(,)?) => ($(
		impl OptionValue for $ty {
			fn from_value(raw: &str) -> Result<Self, ValueError> {
				let raw = text::trim(raw, ' ');
				if raw.is_empty() { Err(ValueError::Empty) }
				else { raw.parse::<Self>().map_err(ValueError::from) }
			}
		}
	)+);
}

from_num!(
	i8, i16, i32, i64, i128, isize,
	u8, u16, u32, u64, u128, usize,
	f32, f64,
);

impl OptionValue for bool {
	fn from_value(raw: &str) -> Result<Self, ValueError> {
		if text::is_blank(raw) { Err(ValueError::Empty) }
		else { text::parse_bool(raw).ok_or_else(|| ValueError::Bool(raw.to_owned())) }
	}
}

impl OptionValue for String {
	#[inline]
	fn from_value(raw: &str) -> Result<Self, ValueError> { Ok(raw.to_owned()) }
}
