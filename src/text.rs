/*!
# Argspan: Text Helpers.

The handful of string operations the parser relies on. They are all pure and
allocation-light.
*/



#[must_use]
/// # Trim Character.
///
/// Strip every leading and trailing occurrence of `c` from `src`.
///
/// A space is treated specially: it trims _all_ whitespace rather than only
/// literal spaces.
pub(crate) fn trim(src: &str, c: char) -> &str {
	if c == ' ' { src.trim() }
	else { src.trim_matches(c) }
}

#[must_use]
/// # Trim Leading Character.
pub(crate) fn trim_start(src: &str, c: char) -> &str { src.trim_start_matches(c) }

#[must_use]
/// # Lowercase.
///
/// This is the normalized form used for case-insensitive option identity.
pub(crate) fn to_lower(src: &str) -> String { src.to_lowercase() }

#[must_use]
/// # Is Blank?
///
/// Returns `true` if the string is empty or contains nothing but whitespace.
pub(crate) fn is_blank(src: &str) -> bool { src.chars().all(char::is_whitespace) }

#[must_use]
/// # Unquote.
///
/// Strip a single leading and a single trailing double quote, if present.
pub(crate) fn unquote(src: &str) -> &str {
	let src = src.strip_prefix('"').unwrap_or(src);
	src.strip_suffix('"').unwrap_or(src)
}

#[must_use]
/// # Parse Boolean.
///
/// Recognizes `true`/`yes`/`1` and `false`/`no`/`0`, ignoring case and
/// surrounding whitespace.
pub(crate) fn parse_bool(src: &str) -> Option<bool> {
	match to_lower(trim(src, ' ')).as_str() {
		"true" | "yes" | "1" => Some(true),
		"false" | "no" | "0" => Some(false),
		_ => None,
	}
}
