//! Identifier and string quoting.
//!
//! Both quoting styles share one escaping scheme: the quote character and the
//! backslash are escaped with a backslash, and the usual control characters
//! are written as C escapes. Any input string therefore yields a literal that
//! reads back to the same string.

use alloc::string::String;
use core::fmt::{self, Write};

/// Write `s` surrounded by `quote`, escaping it as described in the module docs.
fn write_quoted<W: Write>(s: &str, quote: char, out: &mut W) -> fmt::Result {
    out.write_char(quote)?;
    for c in s.chars() {
        match c {
            '\\' => out.write_str("\\\\")?,
            '\u{8}' => out.write_str("\\b")?,
            '\u{c}' => out.write_str("\\f")?,
            '\n' => out.write_str("\\n")?,
            '\r' => out.write_str("\\r")?,
            '\t' => out.write_str("\\t")?,
            '\0' => out.write_str("\\0")?,
            c if c == quote => {
                out.write_char('\\')?;
                out.write_char(c)?;
            }
            c => out.write_char(c)?,
        }
    }
    out.write_char(quote)
}

/// Write `s` as a back-quoted identifier.
///
/// # Errors
///
/// Returns an error if the sink fails.
pub fn write_back_quoted<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    write_quoted(s, '`', out)
}

/// Write `s` as a single-quoted string literal.
///
/// # Errors
///
/// Returns an error if the sink fails.
pub fn write_quoted_string<W: Write>(s: &str, out: &mut W) -> fmt::Result {
    write_quoted(s, '\'', out)
}

/// Quote `s` as a back-quoted identifier.
///
/// ```rust
/// use settings_profile_sql::quoting::back_quote;
///
/// assert_eq!(back_quote("default"), "`default`");
/// assert_eq!(back_quote("a`b"), "`a\\`b`");
/// ```
#[must_use]
pub fn back_quote(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_back_quoted(s, &mut out).unwrap();
    out
}

/// Quote `s` as a single-quoted string literal.
///
/// ```rust
/// use settings_profile_sql::quoting::quote_string;
///
/// assert_eq!(quote_string("123"), "'123'");
/// assert_eq!(quote_string("it's"), "'it\\'s'");
/// ```
#[must_use]
pub fn quote_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 2);
    write_quoted_string(s, &mut out).unwrap();
    out
}

/// Whether `s` can be written bare, without back-quotes.
///
/// A bare identifier starts with an ASCII letter or underscore, continues with
/// ASCII alphanumerics or underscores, and is not one of the literal keywords
/// `NULL`, `TRUE` or `FALSE` (in any case).
#[must_use]
pub fn is_valid_identifier(s: &str) -> bool {
    let mut bytes = s.bytes();
    let Some(first) = bytes.next() else {
        return false;
    };
    if !(first.is_ascii_alphabetic() || first == b'_') {
        return false;
    }
    if !bytes.all(|b| b.is_ascii_alphanumeric() || b == b'_') {
        return false;
    }
    !["null", "true", "false"]
        .iter()
        .any(|keyword| s.eq_ignore_ascii_case(keyword))
}

/// Write the canonical form of a setting name.
///
/// Names that are valid identifiers are written as is, as are dotted names
/// whose every part is a valid identifier (`custom.my_setting`). Anything else
/// is back-quoted whole.
///
/// # Errors
///
/// Returns an error if the sink fails.
pub fn format_setting_name<W: Write>(name: &str, out: &mut W) -> fmt::Result {
    if name.split('.').all(is_valid_identifier) {
        return out.write_str(name);
    }
    write_back_quoted(name, out)
}
