//! Rendering of a profile reference target.

use core::fmt::{self, Write};

use crate::format::FormatSettings;
use crate::quoting::{write_back_quoted, write_quoted_string};

/// Write a profile reference target: `` `name` `` or `ID('id')`.
///
/// Only the `ID` keyword is highlighted; the quoted part never is.
///
/// # Errors
///
/// Returns an error if the sink fails.
pub fn format_profile_name_or_id<W: Write>(
    name: &str,
    is_id: bool,
    settings: FormatSettings,
    out: &mut W,
) -> fmt::Result {
    if is_id {
        settings.write_keyword("ID", out)?;
        out.write_char('(')?;
        write_quoted_string(name, out)?;
        out.write_char(')')
    } else {
        write_back_quoted(name, out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    fn render(name: &str, is_id: bool, settings: FormatSettings) -> String {
        let mut out = String::new();
        format_profile_name_or_id(name, is_id, settings, &mut out).unwrap();
        out
    }

    #[test]
    fn test_name() {
        assert_eq!(render("default", false, FormatSettings::default()), "`default`");
        assert_eq!(
            render("default", false, FormatSettings::highlighted()),
            "`default`"
        );
    }

    #[test]
    fn test_id() {
        assert_eq!(render("123", true, FormatSettings::default()), "ID('123')");
        assert_eq!(
            render("123", true, FormatSettings::highlighted()),
            "\x1b[1mID\x1b[0m('123')"
        );
    }

    #[test]
    fn test_id_escapes_quote() {
        assert_eq!(render("a'b", true, FormatSettings::default()), "ID('a\\'b')");
    }
}
