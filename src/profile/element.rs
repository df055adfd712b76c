//! A single settings profile element.

use alloc::string::String;
use core::fmt::{self, Display, Write};

use super::name_or_id::format_profile_name_or_id;
use super::writability::Writability;
use crate::field::Field;
use crate::format::{FormatSettings, FormatSql};
use crate::quoting::format_setting_name;

/// A reference to a parent profile: `PROFILE name`, `INHERIT name` or
/// `PROFILE ID('id')`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileReference {
    /// Profile name, or its opaque ID when `id_mode` is set.
    pub name: String,
    /// Whether `name` is an ID rather than a name.
    pub id_mode: bool,
    /// Write `INHERIT` instead of `PROFILE`.
    pub use_inherit_keyword: bool,
}

impl ProfileReference {
    /// Reference a profile by name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            id_mode: false,
            use_inherit_keyword: false,
        }
    }

    /// Reference a profile by its ID.
    #[must_use]
    pub fn by_id(id: impl Into<String>) -> Self {
        Self {
            id_mode: true,
            ..Self::new(id)
        }
    }

    /// Use the `INHERIT` keyword instead of `PROFILE`.
    #[must_use]
    pub fn inherit(mut self) -> Self {
        self.use_inherit_keyword = true;
        self
    }

    /// Whether the reference names no profile.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl FormatSql for ProfileReference {
    fn format_sql<W: Write>(&self, settings: FormatSettings, out: &mut W) -> fmt::Result {
        // A nameless reference has no keyword form; it prints like a nameless
        // setting constraint.
        if self.is_empty() {
            return format_setting_name(&self.name, out);
        }
        let keyword = if self.use_inherit_keyword {
            "INHERIT "
        } else {
            "PROFILE "
        };
        settings.write_keyword(keyword, out)?;
        format_profile_name_or_id(&self.name, self.id_mode, settings, out)
    }
}

/// A constraint on one setting:
/// `name [= value] [MIN min] [MAX max] [WRITABLE | CONST | CHANGEABLE_IN_READONLY]`.
///
/// Every part after the name is optional; present parts are always written
/// in that order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SettingConstraint {
    /// Setting name, canonicalized on output.
    pub name: String,
    /// Value assigned to the setting.
    pub value: Option<Field>,
    /// Lower bound.
    pub min_value: Option<Field>,
    /// Upper bound.
    pub max_value: Option<Field>,
    /// Writability mode.
    pub writability: Option<Writability>,
}

impl SettingConstraint {
    /// A constraint on `name` with no value, bounds or mode.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: None,
            min_value: None,
            max_value: None,
            writability: None,
        }
    }

    /// Set the value.
    #[must_use]
    pub fn value(mut self, value: impl Into<Field>) -> Self {
        self.value = Some(value.into());
        self
    }

    /// Set the lower bound.
    #[must_use]
    pub fn min(mut self, min_value: impl Into<Field>) -> Self {
        self.min_value = Some(min_value.into());
        self
    }

    /// Set the upper bound.
    #[must_use]
    pub fn max(mut self, max_value: impl Into<Field>) -> Self {
        self.max_value = Some(max_value.into());
        self
    }

    /// Set the writability mode.
    #[must_use]
    pub fn writability(mut self, writability: Writability) -> Self {
        self.writability = Some(writability);
        self
    }

    /// Whether the constraint names no setting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_empty()
    }
}

impl FormatSql for SettingConstraint {
    fn format_sql<W: Write>(&self, settings: FormatSettings, out: &mut W) -> fmt::Result {
        format_setting_name(&self.name, out)?;

        if let Some(value) = &self.value {
            write!(out, " = {value}")?;
        }

        if let Some(min_value) = &self.min_value {
            settings.write_keyword(" MIN ", out)?;
            write!(out, "{min_value}")?;
        }

        if let Some(max_value) = &self.max_value {
            settings.write_keyword(" MAX ", out)?;
            write!(out, "{max_value}")?;
        }

        if let Some(writability) = self.writability {
            settings.write_keyword(writability.clause(), out)?;
        }

        Ok(())
    }
}

/// One element of a settings profile element list.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProfileElement {
    /// Inherit from another profile.
    Reference(ProfileReference),
    /// Constrain a setting.
    Constraint(SettingConstraint),
}

impl ProfileElement {
    /// Whether the element names neither a profile nor a setting.
    ///
    /// Only the target name is consulted: a nameless constraint with a value
    /// is still empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            ProfileElement::Reference(reference) => reference.is_empty(),
            ProfileElement::Constraint(constraint) => constraint.is_empty(),
        }
    }

    /// Select the `INHERIT` or `PROFILE` keyword. Constraints are left unchanged.
    pub fn set_use_inherit_keyword(&mut self, use_inherit_keyword: bool) {
        if let ProfileElement::Reference(reference) = self {
            reference.use_inherit_keyword = use_inherit_keyword;
        }
    }
}

impl From<ProfileReference> for ProfileElement {
    fn from(reference: ProfileReference) -> Self {
        ProfileElement::Reference(reference)
    }
}

impl From<SettingConstraint> for ProfileElement {
    fn from(constraint: SettingConstraint) -> Self {
        ProfileElement::Constraint(constraint)
    }
}

impl FormatSql for ProfileElement {
    fn format_sql<W: Write>(&self, settings: FormatSettings, out: &mut W) -> fmt::Result {
        match self {
            ProfileElement::Reference(reference) => reference.format_sql(settings, out),
            ProfileElement::Constraint(constraint) => constraint.format_sql(settings, out),
        }
    }
}

impl Display for ProfileElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_sql(FormatSettings::default(), f)
    }
}

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::{ProfileElement, ProfileReference, SettingConstraint};
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a> Arbitrary<'a> for ProfileReference {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(Self {
                name: u.arbitrary()?,
                id_mode: u.arbitrary()?,
                use_inherit_keyword: u.arbitrary()?,
            })
        }
    }

    impl<'a> Arbitrary<'a> for SettingConstraint {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(Self {
                name: u.arbitrary()?,
                value: u.arbitrary()?,
                min_value: u.arbitrary()?,
                max_value: u.arbitrary()?,
                writability: u.arbitrary()?,
            })
        }
    }

    impl<'a> Arbitrary<'a> for ProfileElement {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(if u.arbitrary()? {
                ProfileElement::Reference(u.arbitrary()?)
            } else {
                ProfileElement::Constraint(u.arbitrary()?)
            })
        }
    }
}
