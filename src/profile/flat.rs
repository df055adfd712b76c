//! The flat, two-target shape in which parsers usually hand over an element.

use alloc::string::String;

use super::element::{ProfileElement, ProfileReference, SettingConstraint};
use super::writability::Writability;
use crate::field::Field;

/// A profile element with both possible targets as independent fields.
///
/// Nothing stops a producer from filling in both `parent_profile` and
/// `setting_name`, or neither. Lowering into [`ProfileElement`] settles that:
/// a non-empty `parent_profile` makes a reference and every constraint field
/// is dropped; otherwise the element is a constraint on `setting_name`, which
/// may itself be empty.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct FlatProfileElement {
    /// Parent profile name or ID.
    pub parent_profile: String,
    /// Whether `parent_profile` is an ID.
    pub id_mode: bool,
    /// Write `INHERIT` instead of `PROFILE`.
    pub use_inherit_keyword: bool,
    /// Constrained setting name.
    pub setting_name: String,
    /// Value assigned to the setting.
    pub value: Option<Field>,
    /// Lower bound.
    pub min_value: Option<Field>,
    /// Upper bound.
    pub max_value: Option<Field>,
    /// Writability mode.
    pub writability: Option<Writability>,
}

impl From<FlatProfileElement> for ProfileElement {
    fn from(flat: FlatProfileElement) -> Self {
        if !flat.parent_profile.is_empty() {
            return ProfileElement::Reference(ProfileReference {
                name: flat.parent_profile,
                id_mode: flat.id_mode,
                use_inherit_keyword: flat.use_inherit_keyword,
            });
        }
        ProfileElement::Constraint(SettingConstraint {
            name: flat.setting_name,
            value: flat.value,
            min_value: flat.min_value,
            max_value: flat.max_value,
            writability: flat.writability,
        })
    }
}

impl From<ProfileElement> for FlatProfileElement {
    fn from(element: ProfileElement) -> Self {
        match element {
            ProfileElement::Reference(reference) => Self {
                parent_profile: reference.name,
                id_mode: reference.id_mode,
                use_inherit_keyword: reference.use_inherit_keyword,
                ..Self::default()
            },
            ProfileElement::Constraint(constraint) => Self {
                setting_name: constraint.name,
                value: constraint.value,
                min_value: constraint.min_value,
                max_value: constraint.max_value,
                writability: constraint.writability,
                ..Self::default()
            },
        }
    }
}

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::FlatProfileElement;
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a> Arbitrary<'a> for FlatProfileElement {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(Self {
                parent_profile: u.arbitrary()?,
                id_mode: u.arbitrary()?,
                use_inherit_keyword: u.arbitrary()?,
                setting_name: u.arbitrary()?,
                value: u.arbitrary()?,
                min_value: u.arbitrary()?,
                max_value: u.arbitrary()?,
                writability: u.arbitrary()?,
            })
        }
    }
}
