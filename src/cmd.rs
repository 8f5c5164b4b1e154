/*!
# Argspan: Command Parser.
*/

use crate::{
	ArgumentParser,
	CmdOption,
	OptionRegistry,
	ParseError,
	ParseMode,
	text,
};
use std::{
	borrow::Cow,
	ffi::OsStr,
	fmt::Write,
};



/// # Default Version Marker.
const DEFAULT_VERSION: &str = "1.0";



#[derive(Debug, Clone)]
/// # Command-Line Parser.
///
/// This is the main entrypoint for the crate. Declare the options your
/// program supports, then call [`CmdParse::init`] (or
/// [`CmdParse::init_env`]) to parse the arguments and fill in their values.
///
/// Problems are never fatal to the program. Declaration conflicts and
/// unknown options are instead collected and can be reviewed with
/// [`CmdParse::errors`]. They accumulate until explicitly cleared with
/// [`CmdParse::clear_errors`].
///
/// ## Examples
///
/// ```
/// use argspan::{CmdOption, CmdParse};
///
/// let mut cmd = CmdParse::new();
/// cmd.add_option(CmdOption::from(("BufferSize", "1000", "b")));
/// cmd.add_option(CmdOption::from(("OutputFile", "output.txt", "o")));
///
/// assert!(cmd.init(["app", "--BufferSize:23", "-o", "\"C://Temp//\""]));
/// assert!(! cmd.has_errors());
///
/// let size = cmd.option("buffersize").unwrap();
/// assert_eq!(size.get::<usize>(), Ok(23));
///
/// let out = cmd.option("outputfile").unwrap();
/// assert_eq!(out.get::<String>().as_deref(), Ok("C://Temp//"));
/// ```
pub struct CmdParse {
	/// # Executable Name.
	exe: String,

	/// # Raw Arguments (Trimmed).
	arguments: Vec<String>,

	/// # Declared Options.
	options: OptionRegistry,

	/// # Error Log.
	errors: Vec<ParseError>,

	/// # Parse Mode.
	mode: ParseMode,

	/// # Version (for Help).
	version: Cow<'static, str>,
}

impl Default for CmdParse {
	fn default() -> Self {
		Self {
			exe: String::new(),
			arguments: Vec::new(),
			options: OptionRegistry::new(),
			errors: Vec::new(),
			mode: ParseMode::Strict,
			version: Cow::Borrowed(DEFAULT_VERSION),
		}
	}
}

impl<O: Into<CmdOption>> FromIterator<O> for CmdParse {
	fn from_iter<I: IntoIterator<Item=O>>(src: I) -> Self {
		let mut out = Self::new();
		for opt in src { out.add_option(opt.into()); }
		out
	}
}

impl CmdParse {
	#[must_use]
	/// # New.
	pub fn new() -> Self { Self::default() }

	#[must_use]
	/// # From Options.
	///
	/// Create a new instance with a set of options declared upfront. Any
	/// declaration errors are recorded in the usual way.
	///
	/// ## Examples
	///
	/// ```
	/// use argspan::CmdParse;
	///
	/// let cmd = CmdParse::from_options([
	///     ("optionA", "10", "a"),
	///     ("backColour", "#FFFFFF", "b"),
	/// ]);
	/// assert_eq!(cmd.option_count(), 2);
	/// ```
	pub fn from_options<O, I>(src: I) -> Self
	where O: Into<CmdOption>, I: IntoIterator<Item=O> {
		src.into_iter().collect()
	}

	#[must_use]
	/// # With Parse Mode.
	///
	/// By default, parsing stops at the first unknown option. Use
	/// [`ParseMode::Lenient`] to log and skip such options instead.
	pub const fn with_mode(mut self, mode: ParseMode) -> Self {
		self.mode = mode;
		self
	}

	#[must_use]
	/// # With Version.
	///
	/// Set the version printed at the end of [`CmdParse::help`].
	pub fn with_version<S: Into<Cow<'static, str>>>(mut self, version: S) -> Self {
		self.version = version.into();
		self
	}

	/// # With Option.
	///
	/// Builder-style variant of [`CmdParse::add_option`].
	///
	/// ## Examples
	///
	/// ```
	/// use argspan::{CmdOption, CmdParse};
	///
	/// let cmd = CmdParse::new()
	///     .with_option(CmdOption::new("verbose").with_short("v")).unwrap()
	///     .with_option(CmdOption::new("threads").with_default("4")).unwrap();
	///
	/// assert!(cmd.has_option("VERBOSE"));
	/// ```
	///
	/// ## Errors
	///
	/// This will return an error if the option is blank or already declared.
	/// Unlike [`CmdParse::add_option`], the error is returned rather than
	/// logged.
	pub fn with_option(mut self, option: CmdOption) -> Result<Self, ParseError> {
		self.options.declare(option)?;
		Ok(self)
	}
}

impl CmdParse {
	/// # Add Option.
	///
	/// Declare an option, returning `false` if it could not be added, either
	/// because its name is blank or because an option with the same name
	/// (ignoring case) already exists. The reason is recorded in the error
	/// log.
	pub fn add_option(&mut self, option: CmdOption) -> bool {
		match self.options.declare(option) {
			Ok(()) => true,
			Err(e) => {
				self.log_error(e);
				false
			},
		}
	}

	/// # Initialize.
	///
	/// Parse the program arguments. The first entry is taken to be the
	/// executable path; everything else is trimmed and parsed for options.
	///
	/// Returns `false` if there were no arguments at all (not even the
	/// executable) or if parsing failed. Check [`CmdParse::errors`] for the
	/// particulars.
	pub fn init<I, S>(&mut self, args: I) -> bool
	where I: IntoIterator<Item=S>, S: AsRef<OsStr> {
		self.exe.clear();
		self.arguments.clear();

		let mut args = args.into_iter();
		let Some(exe) = args.next() else {
			self.log_error(ParseError::NoArguments);
			return false;
		};

		self.exe = exe.as_ref().to_string_lossy().into_owned();
		self.arguments.extend(args.map(|a| {
			text::trim(&a.as_ref().to_string_lossy(), ' ').to_owned()
		}));

		ArgumentParser::new(&mut self.options, &mut self.errors)
			.with_mode(self.mode)
			.parse(&self.arguments)
	}

	/// # Initialize From Environment.
	///
	/// Same as [`CmdParse::init`], but using [`std::env::args_os`].
	pub fn init_env(&mut self) -> bool { self.init(std::env::args_os()) }

	/// # Log Error.
	fn log_error(&mut self, err: ParseError) {
		log::warn!("{err}");
		self.errors.push(err);
	}
}

impl CmdParse {
	#[must_use]
	/// # Arguments.
	///
	/// Return the raw (trimmed) arguments, excluding the executable.
	pub fn arguments(&self) -> &[String] { &self.arguments }

	#[must_use]
	/// # Executable.
	pub fn executable(&self) -> &str { &self.exe }

	#[must_use]
	/// # Option Count.
	pub fn option_count(&self) -> usize { self.options.len() }

	#[must_use]
	/// # Has Option?
	///
	/// Returns `true` if the option was declared, ignoring case.
	pub fn has_option(&self, long: &str) -> bool { self.options.exists(long) }

	#[must_use]
	/// # Option.
	///
	/// Return a copy of the declared option matching the **long** name
	/// (ignoring case), if any.
	pub fn option(&self, long: &str) -> Option<CmdOption> { self.options.get(long) }

	#[must_use]
	/// # Options.
	pub const fn options(&self) -> &OptionRegistry { &self.options }

	#[must_use]
	/// # Help.
	///
	/// Return a short overview of the available options, sorted
	/// alphabetically, e.g.:
	///
	/// ```text
	/// app [options]
	/// where options are:
	///     -b, --BufferSize
	///     -o, --OutputFile
	///
	///
	/// (version 1.0)
	/// ```
	pub fn help(&self) -> String {
		let mut out = format!("{} [options]\nwhere options are:\n", self.exe);
		for o in self.options.iter() {
			let _res = writeln!(out, "    -{}, --{}", o.short(), o.long());
		}
		let _res = write!(out, "\n\n(version {})", self.version);
		out
	}
}

impl CmdParse {
	#[must_use]
	/// # Has Errors?
	pub fn has_errors(&self) -> bool { ! self.errors.is_empty() }

	#[must_use]
	/// # Errors.
	///
	/// Return the accumulated errors, oldest first.
	pub fn errors(&self) -> &[ParseError] { &self.errors }

	/// # Clear Errors.
	pub fn clear_errors(&mut self) { self.errors.clear(); }
}



#[cfg(test)]
mod test {
	use super::*;
	use crate::ValueError;
	use logtest::Logger;
	use std::sync::{
		Mutex,
		MutexGuard,
		OnceLock,
	};

	/// # Shared Logger.
	///
	/// Only one logger can be installed per process, so tests take turns.
	fn logger() -> MutexGuard<'static, Logger> {
		static LOGGER: OnceLock<Mutex<Logger>> = OnceLock::new();
		LOGGER.get_or_init(|| Mutex::new(Logger::start()))
			.lock()
			.unwrap_or_else(std::sync::PoisonError::into_inner)
	}

	/// # Five Numbered Options.
	fn five() -> CmdParse {
		CmdParse::from_options([
			("option1", "1"),
			("option2", "2"),
			("option3", "3"),
			("option4", "4"),
			("option5", "5"),
		])
	}

	#[test]
	fn t_init_empty() {
		let mut cmd = CmdParse::new();
		assert!(! cmd.init(std::iter::empty::<&str>()));
		assert_eq!(cmd.errors(), [ParseError::NoArguments]);
		assert_eq!(cmd.errors()[0].to_string(), "No arguments given to application");

		// Just the executable is fine.
		cmd.clear_errors();
		assert!(cmd.init(["sample.exe"]));
		assert!(! cmd.has_errors());
		assert_eq!(cmd.executable(), "sample.exe");
		assert!(cmd.arguments().is_empty());
	}

	#[test]
	fn t_init_arguments() {
		let mut cmd = CmdParse::new();
		assert!(cmd.init(["sample.exe", " opt1 ", "opt2", "opt3"]));
		assert_eq!(cmd.arguments(), ["opt1", "opt2", "opt3"]);

		// A later empty call shouldn't leave the old state behind.
		assert!(! cmd.init(std::iter::empty::<&str>()));
		assert_eq!(cmd.executable(), "");
		assert!(cmd.arguments().is_empty());
	}

	#[cfg(unix)]
	#[test]
	fn t_init_invalid_utf8() {
		use std::os::unix::ffi::OsStrExt;

		let mut cmd = CmdParse::from_options([("name", "", "n")]);
		assert!(cmd.init([
			OsStr::new("app"),
			OsStr::from_bytes(b"--name=ab\xffcd"),
		]));
		assert!(! cmd.has_errors());
		assert_eq!(
			cmd.option("name").expect("Missing name.").value(),
			"ab\u{FFFD}cd",
		);
	}

	#[test]
	fn t_init_logs_warning() {
		let mut logger = logger();
		let mut cmd = five();
		assert!(! cmd.init(["Sample.exe", "--warnedAbout=1"]));

		// Other tests may be logging at the same time; look for ours.
		let mut found = false;
		while let Some(rec) = logger.pop() {
			if
				rec.level() == log::Level::Warn &&
				rec.args() == "Option not found: warnedAbout"
			{
				found = true;
			}
		}
		assert!(found, "Missing warning for the unknown option.");
	}

	#[test]
	fn t_option_match() {
		let mut cmd = CmdParse::new();
		assert!(cmd.add_option(CmdOption::from(("BufferSize", "1000", "b"))));
		assert!(cmd.add_option(CmdOption::from(("OutputFile", "output.txt", "o"))));
		assert!(cmd.init(["Sample.exe", "--BufferSize:23", "--OutputFile=\"C://Temp//\""]));

		assert_eq!(cmd.option_count(), 2);
		for name in ["BufferSize", "buffersize", "bufferSIZE", "BUFFERSIZE", "OutputFile", "outputfile"] {
			assert!(cmd.has_option(name), "{name} should be present.");
		}
		assert!(! cmd.has_option("NotAnOption"));

		let size = cmd.option("BufferSize").expect("Missing BufferSize.");
		assert_eq!(size.get::<i32>(), Ok(23));
		assert_eq!(size.default_value(), "1000");

		let out = cmd.option("OutputFile").expect("Missing OutputFile.");
		assert_eq!(out.get::<String>().as_deref(), Ok("C://Temp//"));
	}

	#[test]
	fn t_short_options() {
		let mut cmd = CmdParse::from_options([
			("optionA", "3", "a"),
			("optionB", "45.6", "b"),
		]);
		assert!(! cmd.has_errors());
		assert!(cmd.init(["Sample.exe", "-a:16", "-b", "6.3"]));
		assert!(! cmd.has_errors());
		assert_eq!(cmd.option_count(), 2);
		assert!(cmd.has_option("optionA"));
		assert!(cmd.has_option("optionB"));

		let a = cmd.option("optionA").expect("Missing optionA.");
		assert_eq!(a.get::<u8>(), Ok(16));
		let b = cmd.option("optionB").expect("Missing optionB.");
		assert_eq!(b.get::<f64>(), Ok(6.3));
	}

	#[test]
	fn t_same_option() {
		let mut cmd = five();
		assert!(! cmd.has_errors());
		assert!(cmd.init(["Sample.exe", "--option1:16", "--option2 6"]));
		assert_eq!(cmd.option_count(), 5);

		let opt1 = cmd.option("option1").expect("Missing option1.");
		assert_eq!(opt1.long(), "option1");
		assert_eq!(opt1.get::<i32>(), Ok(16));
		assert_eq!(opt1.default_value(), "1");
		assert_eq!(cmd.option("option1"), Some(opt1));

		let opt2 = cmd.option("option2").expect("Missing option2.");
		assert_eq!(opt2.get::<i32>(), Ok(6));

		let opt5 = cmd.option("option5").expect("Missing option5.");
		assert_eq!(opt5.long(), "option5");
		assert_eq!(opt5.value(), "");
		assert_eq!(opt5.default_value(), "5");
		assert_eq!(opt5.get::<i32>(), Err(ValueError::Empty));
		assert_eq!(opt5.get_or_default::<i32>(), Ok(5));
		assert_eq!(cmd.option("option5"), Some(opt5));
	}

	#[test]
	fn t_duplicates() {
		let mut cmd = five();
		assert!(! cmd.add_option(CmdOption::new("OPTION1")));
		assert!(! cmd.add_option(CmdOption::new("")));
		assert_eq!(cmd.option_count(), 5);
		assert_eq!(
			cmd.errors(),
			[
				ParseError::DuplicateOption("OPTION1".to_owned()),
				ParseError::BlankOption,
			]
		);
		assert_eq!(cmd.errors()[0].to_string(), "Option already exists: OPTION1");

		// Errors stick around until cleared.
		assert!(cmd.init(["Sample.exe"]));
		assert_eq!(cmd.errors().len(), 2);
		cmd.clear_errors();
		assert!(! cmd.has_errors());

		// The builder returns the error instead.
		assert_eq!(
			five().with_option(CmdOption::new("Option2")).map(|c| c.option_count()),
			Err(ParseError::DuplicateOption("Option2".to_owned())),
		);
	}

	#[test]
	fn t_unknown() {
		let mut cmd = five();
		assert!(! cmd.init(["Sample.exe", "--doesNotExist=1", "--option1=2"]));
		assert_eq!(cmd.errors().len(), 1);
		assert!(cmd.errors()[0].to_string().contains("doesNotExist"));
		assert!(! cmd.option("option1").expect("Missing option1.").is_set());

		// Lenient keeps going.
		let mut cmd = five().with_mode(ParseMode::Lenient);
		assert!(cmd.init(["Sample.exe", "--doesNotExist=1", "--option1=2"]));
		assert_eq!(cmd.errors().len(), 1);
		assert_eq!(cmd.option("option1").expect("Missing option1.").get::<u32>(), Ok(2));
	}

	#[test]
	fn t_help() {
		let mut cmd = CmdParse::from_options([
			("OutputFile", "output.txt", "o"),
			("BufferSize", "1000", "b"),
			("apples", "", ""),
		]);
		assert!(cmd.init(["MyApplication.exe"]));
		assert_eq!(
			cmd.help(),
			"MyApplication.exe [options]\nwhere options are:\n    -apples, --apples\n    -b, --BufferSize\n    -o, --OutputFile\n\n\n(version 1.0)",
		);

		let cmd = cmd.with_version("2.3.1");
		assert!(cmd.help().ends_with("(version 2.3.1)"));
	}
}
