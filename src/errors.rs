//! Submodule defining the errors used across the crate.

use alloc::string::String;

/// Errors raised while converting external representations into profile AST values.
///
/// Formatting itself never produces these: it only fails when the output sink does.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The keyword does not name a writability mode.
    #[error("Unknown setting constraint writability: {0:?}")]
    UnknownWritability(String),
    /// The numeric code is the end-of-range marker, which is not a writability mode.
    #[error("Writability code 3 marks the end of the range and is not a valid mode")]
    WritabilitySentinel,
    /// The numeric code lies past the end of the writability range.
    #[error("Writability code {0} out of range (expected 0..=2)")]
    WritabilityOutOfRange(u8),
}
