//! SQL output formatting.
//!
//! Every formatter in the crate writes into a caller-owned [`Write`] sink and
//! takes a [`FormatSettings`] by value. There is no ambient formatting state:
//! the output is a pure function of the node and the settings.
//!
//! # Example
//!
//! ```rust
//! use settings_profile_sql::{FormatSettings, FormatSql, SettingConstraint};
//!
//! let constraint = SettingConstraint::new("max_memory_usage").value(1000000u64);
//! assert_eq!(
//!     constraint.to_sql_string(FormatSettings::default()),
//!     "max_memory_usage = 1000000"
//! );
//! ```

use alloc::string::String;
use core::fmt::{self, Write};

/// Marker written before a highlighted keyword (ANSI bold).
pub const HILITE_KEYWORD: &str = "\x1b[1m";

/// Marker written after a highlighted keyword (ANSI reset).
pub const HILITE_NONE: &str = "\x1b[0m";

/// Options controlling how SQL text is produced.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FormatSettings {
    /// Wrap keywords in [`HILITE_KEYWORD`] / [`HILITE_NONE`] for terminal display.
    pub hilite: bool,
}

impl FormatSettings {
    /// Settings with keyword highlighting switched on.
    #[must_use]
    pub const fn highlighted() -> Self {
        Self { hilite: true }
    }

    /// Write `keyword`, wrapped in highlight markers when highlighting is on.
    ///
    /// The keyword text is written verbatim, so any surrounding spaces passed
    /// in end up inside the markers.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails.
    pub fn write_keyword<W: Write>(self, keyword: &str, out: &mut W) -> fmt::Result {
        if self.hilite {
            out.write_str(HILITE_KEYWORD)?;
            out.write_str(keyword)?;
            out.write_str(HILITE_NONE)
        } else {
            out.write_str(keyword)
        }
    }
}

/// Trait for AST nodes that can be formatted as SQL text.
pub trait FormatSql {
    /// Append the SQL text of this node to `out`.
    ///
    /// # Errors
    ///
    /// Returns an error if the sink fails. Formatting itself has no failure modes.
    fn format_sql<W: Write>(&self, settings: FormatSettings, out: &mut W) -> fmt::Result;

    /// Format this node into a fresh string.
    #[must_use]
    fn to_sql_string(&self, settings: FormatSettings) -> String {
        let mut sql = String::new();
        self.format_sql(settings, &mut sql).unwrap();
        sql
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_write_keyword_plain() {
        let mut out = String::new();
        FormatSettings::default()
            .write_keyword(" MIN ", &mut out)
            .unwrap();
        assert_eq!(out, " MIN ");
    }

    #[test]
    fn test_write_keyword_highlighted() {
        let mut out = String::new();
        FormatSettings::highlighted()
            .write_keyword("NONE", &mut out)
            .unwrap();
        assert_eq!(out, "\x1b[1mNONE\x1b[0m");
    }
}
