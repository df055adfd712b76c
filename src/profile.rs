//! Settings profile elements and their SQL rendering.
//!
//! A settings profile element is one item of the list that follows
//! `SETTINGS` in `CREATE/ALTER SETTINGS PROFILE`, `CREATE USER` or `GRANT`:
//! either a reference to a parent profile or a constraint on one setting.
//!
//! ```rust
//! use settings_profile_sql::{
//!     FormatSettings, FormatSql, ProfileElement, ProfileElements, ProfileReference,
//!     SettingConstraint, Writability,
//! };
//!
//! let mut elements: ProfileElements = [
//!     ProfileElement::from(
//!         SettingConstraint::new("readonly")
//!             .min(0u64)
//!             .max(1u64)
//!             .writability(Writability::Const),
//!     ),
//!     ProfileElement::from(ProfileReference::new("default")),
//! ]
//! .into_iter()
//! .collect();
//!
//! elements.set_use_inherit_keyword(true);
//! assert_eq!(
//!     elements.to_sql_string(FormatSettings::default()),
//!     "readonly MIN 0 MAX 1 CONST, INHERIT `default`"
//! );
//! ```

mod element;
mod elements;
mod flat;
mod name_or_id;
mod writability;

pub use element::{ProfileElement, ProfileReference, SettingConstraint};
pub use elements::ProfileElements;
pub use flat::FlatProfileElement;
pub use name_or_id::format_profile_name_or_id;
pub use writability::Writability;
