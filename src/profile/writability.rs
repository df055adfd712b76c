//! Writability mode of a setting constraint.

use alloc::string::ToString;
use core::fmt::{self, Display};
use core::str::FromStr;

use crate::errors::Error;

/// Whether a session may change a constrained setting.
///
/// "No mode given" is expressed as `Option::<Writability>::None` on the
/// constraint, so every variant here maps to exactly one keyword.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Writability {
    /// The setting may be changed freely within its bounds.
    Writable,
    /// The setting may not be changed at all.
    Const,
    /// The setting may be changed even when the session is read-only.
    ChangeableInReadonly,
}

impl Writability {
    /// All modes, in their numeric order.
    pub const ALL: [Writability; 3] = [
        Writability::Writable,
        Writability::Const,
        Writability::ChangeableInReadonly,
    ];

    /// The SQL keyword for this mode.
    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Writability::Writable => "WRITABLE",
            Writability::Const => "CONST",
            Writability::ChangeableInReadonly => "CHANGEABLE_IN_READONLY",
        }
    }

    /// The keyword with its leading separator, as it appears after a constraint.
    pub(crate) const fn clause(self) -> &'static str {
        match self {
            Writability::Writable => " WRITABLE",
            Writability::Const => " CONST",
            Writability::ChangeableInReadonly => " CHANGEABLE_IN_READONLY",
        }
    }
}

impl Display for Writability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

impl FromStr for Writability {
    type Err = Error;

    /// Parse a writability keyword, ignoring case. `READONLY` is accepted as a
    /// synonym of `CONST`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("READONLY") {
            return Ok(Writability::Const);
        }
        Writability::ALL
            .into_iter()
            .find(|mode| s.eq_ignore_ascii_case(mode.keyword()))
            .ok_or_else(|| Error::UnknownWritability(s.to_string()))
    }
}

impl TryFrom<u8> for Writability {
    type Error = Error;

    /// Convert the numeric encoding `0..=2`. Code `3` is the end-of-range
    /// marker of that encoding and is rejected rather than mapped to nothing.
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Writability::Writable),
            1 => Ok(Writability::Const),
            2 => Ok(Writability::ChangeableInReadonly),
            3 => Err(Error::WritabilitySentinel),
            other => Err(Error::WritabilityOutOfRange(other)),
        }
    }
}

impl From<Writability> for u8 {
    fn from(mode: Writability) -> Self {
        match mode {
            Writability::Writable => 0,
            Writability::Const => 1,
            Writability::ChangeableInReadonly => 2,
        }
    }
}

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::Writability;
    use arbitrary::{Arbitrary, Unstructured};

    impl<'a> Arbitrary<'a> for Writability {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            Ok(*u.choose(&Writability::ALL)?)
        }
    }
}
