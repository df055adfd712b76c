//! An ordered list of settings profile elements.

use alloc::vec::Vec;
use core::fmt::{self, Display, Write};
use core::ops::Index;

use super::element::ProfileElement;
use crate::format::{FormatSettings, FormatSql};

/// The element list of a `SETTINGS` clause, in source order.
///
/// A list whose elements are all empty, including the list with no elements,
/// formats as `NONE`.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ProfileElements {
    elements: Vec<ProfileElement>,
}

impl ProfileElements {
    /// Create an empty list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an element.
    #[must_use]
    pub fn push(mut self, element: impl Into<ProfileElement>) -> Self {
        self.elements.push(element.into());
        self
    }

    /// Number of elements, empty ones included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    /// Whether the list has no elements at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Whether every element is empty, so the list formats as `NONE`.
    /// Vacuously true for a list with no elements.
    #[must_use]
    pub fn formats_as_none(&self) -> bool {
        self.elements.iter().all(ProfileElement::is_empty)
    }

    /// Iterate over the elements in order.
    #[must_use]
    pub fn iter(&self) -> core::slice::Iter<'_, ProfileElement> {
        self.elements.iter()
    }

    /// Select the `INHERIT` or `PROFILE` keyword on every profile reference.
    ///
    /// Call this before formatting; the list is not otherwise mutated.
    pub fn set_use_inherit_keyword(&mut self, use_inherit_keyword: bool) {
        tracing::debug!(
            use_inherit_keyword,
            elements = self.elements.len(),
            "propagating inherit keyword"
        );
        for element in &mut self.elements {
            element.set_use_inherit_keyword(use_inherit_keyword);
        }
    }
}

impl FormatSql for ProfileElements {
    fn format_sql<W: Write>(&self, settings: FormatSettings, out: &mut W) -> fmt::Result {
        if self.formats_as_none() {
            tracing::trace!(elements = self.elements.len(), "element list collapses to NONE");
            return settings.write_keyword("NONE", out);
        }

        // Empty elements inside a non-empty list are still written.
        for (i, element) in self.elements.iter().enumerate() {
            if i > 0 {
                out.write_str(", ")?;
            }
            element.format_sql(settings, out)?;
        }
        Ok(())
    }
}

impl Display for ProfileElements {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.format_sql(FormatSettings::default(), f)
    }
}

impl From<Vec<ProfileElement>> for ProfileElements {
    fn from(elements: Vec<ProfileElement>) -> Self {
        Self { elements }
    }
}

impl From<ProfileElements> for Vec<ProfileElement> {
    fn from(list: ProfileElements) -> Self {
        list.elements
    }
}

impl<E: Into<ProfileElement>> FromIterator<E> for ProfileElements {
    fn from_iter<I: IntoIterator<Item = E>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for ProfileElements {
    type Item = ProfileElement;
    type IntoIter = alloc::vec::IntoIter<ProfileElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a ProfileElements {
    type Item = &'a ProfileElement;
    type IntoIter = core::slice::Iter<'a, ProfileElement>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}

impl Index<usize> for ProfileElements {
    type Output = ProfileElement;

    fn index(&self, index: usize) -> &Self::Output {
        &self.elements[index]
    }
}

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::{ProfileElement, ProfileElements, Vec};
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a> Arbitrary<'a> for ProfileElements {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            let len = u.int_in_range(0..=8)?;
            let elements: Vec<ProfileElement> = (0..len)
                .map(|_| u.arbitrary())
                .collect::<Result<_, _>>()?;
            Ok(Self { elements })
        }
    }
}
