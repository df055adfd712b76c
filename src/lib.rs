#![doc = include_str!("../README.md")]
#![no_std]
#![deny(clippy::mod_module_files)]

extern crate alloc;

pub mod errors;
pub mod field;
pub mod format;
pub mod profile;
pub mod quoting;
#[cfg(feature = "testing")]
pub mod testing;

// Re-export main types
pub use field::Field;
pub use format::{FormatSettings, FormatSql, HILITE_KEYWORD, HILITE_NONE};
pub use profile::{
    FlatProfileElement, ProfileElement, ProfileElements, ProfileReference, SettingConstraint,
    Writability,
};

// Re-export errors
pub use errors::Error;
