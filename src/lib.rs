/*!
# Argspan

This crate provides a small, forgiving CLI option parser called [`CmdParse`].

Options are declared upfront with a long name, an optional short alias, and a
default value. Long names are matched case-insensitively, so `--BufferSize`,
`--buffersize`, and `--BUFFERSIZE` all refer to the same thing; short aliases
(`-b`) are matched exactly.

Values can be attached to keys in a number of ways. The following are all
equivalent:
* `--key=val`; `--key:val`; `--key val`;
* `-k=val`; `-k:val`; `-k val`;

Problems (duplicate declarations, unknown options, etc.) are collected
rather than fatal, leaving it up to you to decide what to do about them.

Once parsed, values can be read as strings, numbers, or booleans via
[`CmdOption::get`].



## Example

A general setup might look something like the following.

```
use argspan::{CmdOption, CmdParse};

let mut cmd = CmdParse::new();
cmd.add_option(CmdOption::from(("BufferSize", "1000", "b")));
cmd.add_option(CmdOption::from(("OutputFile", "output.txt", "o")));
cmd.add_option(CmdOption::new("verbose").with_short("v"));

// Normally you'd use `cmd.init_env()`.
if ! cmd.init(["app", "-b", "4096", "--outputfile=\"/tmp/out.txt\"", "-v"]) {
    for e in cmd.errors() { eprintln!("{e}"); }
    eprintln!("{}", cmd.help());
    return;
}

let size: usize = cmd.option("BufferSize")
    .and_then(|o| o.get_or_default().ok())
    .unwrap_or(1000);
assert_eq!(size, 4096);

let out = cmd.option("OutputFile").unwrap();
assert_eq!(out.value(), "/tmp/out.txt");

assert!(cmd.option("verbose").is_some_and(|o| o.is_set()));
```
*/

#![forbid(unsafe_code)]

#![deny(
	clippy::allow_attributes_without_reason,
	clippy::correctness,
	unreachable_pub,
)]

#![warn(
	clippy::complexity,
	clippy::nursery,
	clippy::pedantic,
	clippy::perf,
	clippy::style,

	clippy::allow_attributes,
	clippy::clone_on_ref_ptr,
	clippy::create_dir,
	clippy::filetype_is_file,
	clippy::format_push_string,
	clippy::get_unwrap,
	clippy::impl_trait_in_params,
	clippy::lossy_float_literal,
	clippy::missing_assert_message,
	clippy::missing_docs_in_private_items,
	clippy::needless_raw_strings,
	clippy::panic_in_result_fn,
	clippy::pub_without_shorthand,
	clippy::rest_pat_in_fully_bound_structs,
	clippy::semicolon_inside_block,
	clippy::str_to_string,
	clippy::string_to_string,
	clippy::todo,
	clippy::undocumented_unsafe_blocks,
	clippy::unneeded_field_pattern,
	clippy::unseparated_literal_suffix,
	clippy::unwrap_in_result,

	macro_use_extern_crate,
	missing_copy_implementations,
	missing_docs,
	non_ascii_idents,
	trivial_casts,
	trivial_numeric_casts,
	unused_crate_dependencies,
	unused_extern_crates,
	unused_import_braces,
)]



mod cmd;
mod error;
mod option;
mod parser;
mod registry;
mod text;

pub use cmd::CmdParse;
pub use error::{
	ParseError,
	ValueError,
};
pub use option::{
	CmdOption,
	OptionValue,
};
pub use parser::{
	ArgumentParser,
	ParseMode,
};
pub use registry::OptionRegistry;
