//! Literal values carried by setting constraints.
//!
//! A [`Field`] is the value side of `name = value`, `MIN value` and
//! `MAX value`. Its [`Display`](core::fmt::Display) implementation writes the
//! SQL literal form.

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use core::fmt::{self, Display, Write};

use crate::quoting::write_quoted_string;

/// A literal setting value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Field {
    /// SQL NULL
    Null,
    /// Boolean, written as `true` or `false`
    Bool(bool),
    /// Unsigned integer
    UInt64(u64),
    /// Signed integer
    Int64(i64),
    /// IEEE 754 floating point
    Float64(f64),
    /// UTF-8 text, written as a quoted string literal
    String(String),
    /// Array literal `[a, b]`
    Array(Vec<Field>),
    /// Tuple literal `(a, b)`
    Tuple(Vec<Field>),
}

/// Write `items` separated by `", "`.
fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Field]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

impl Display for Field {
    /// Format a Field as a SQL literal.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Null => f.write_str("NULL"),
            Field::Bool(v) => f.write_str(if *v { "true" } else { "false" }),
            Field::UInt64(v) => write!(f, "{v}"),
            Field::Int64(v) => write!(f, "{v}"),
            Field::Float64(v) => {
                if v.is_nan() {
                    f.write_str("nan")
                } else if v.is_infinite() {
                    f.write_str(if v.is_sign_positive() { "inf" } else { "-inf" })
                } else {
                    // Debug keeps the decimal point and switches to exponent form
                    // for very large or small magnitudes.
                    write!(f, "{v:?}")
                }
            }
            Field::String(s) => write_quoted_string(s, f),
            Field::Array(items) => {
                f.write_char('[')?;
                write_joined(f, items)?;
                f.write_char(']')
            }
            Field::Tuple(items) => {
                // `(x)` would read back as a parenthesized scalar.
                if items.len() == 1 {
                    f.write_str("tuple")?;
                }
                f.write_char('(')?;
                write_joined(f, items)?;
                f.write_char(')')
            }
        }
    }
}

// From implementations for common types
impl From<bool> for Field {
    fn from(v: bool) -> Self {
        Field::Bool(v)
    }
}

impl From<u64> for Field {
    fn from(v: u64) -> Self {
        Field::UInt64(v)
    }
}

impl From<u32> for Field {
    fn from(v: u32) -> Self {
        Field::UInt64(u64::from(v))
    }
}

impl From<i64> for Field {
    fn from(v: i64) -> Self {
        Field::Int64(v)
    }
}

impl From<i32> for Field {
    fn from(v: i32) -> Self {
        Field::Int64(i64::from(v))
    }
}

impl From<f64> for Field {
    fn from(v: f64) -> Self {
        Field::Float64(v)
    }
}

impl From<String> for Field {
    fn from(v: String) -> Self {
        Field::String(v)
    }
}

impl From<&str> for Field {
    fn from(v: &str) -> Self {
        Field::String(v.to_string())
    }
}

impl<T: Into<Field>> From<Vec<T>> for Field {
    fn from(v: Vec<T>) -> Self {
        Field::Array(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Field>> From<Option<T>> for Field {
    fn from(opt: Option<T>) -> Self {
        match opt {
            Some(v) => v.into(),
            None => Field::Null,
        }
    }
}

#[cfg(feature = "testing")]
mod arbitrary_impl {
    use super::{Field, Vec};
    use arbitrary::{Arbitrary, Unstructured};

    /// Nesting cap so generated arrays and tuples stay small.
    const MAX_DEPTH: u8 = 2;

    fn arbitrary_field(u: &mut Unstructured<'_>, depth: u8) -> arbitrary::Result<Field> {
        let max_kind = if depth >= MAX_DEPTH { 5 } else { 7 };
        Ok(match u.int_in_range(0..=max_kind)? {
            0 => Field::Null,
            1 => Field::Bool(u.arbitrary()?),
            2 => Field::UInt64(u.arbitrary()?),
            3 => Field::Int64(u.arbitrary()?),
            4 => Field::Float64(u.arbitrary()?),
            5 => Field::String(u.arbitrary()?),
            kind => {
                let len = u.int_in_range(0..=3)?;
                let items: Vec<Field> = (0..len)
                    .map(|_| arbitrary_field(u, depth + 1))
                    .collect::<Result<_, _>>()?;
                if kind == 6 {
                    Field::Array(items)
                } else {
                    Field::Tuple(items)
                }
            }
        })
    }

    impl<'a> Arbitrary<'a> for Field {
        fn arbitrary(u: &mut Unstructured<'a>) -> arbitrary::Result<Self> {
            arbitrary_field(u, 0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_format_scalars() {
        assert_eq!(Field::Null.to_string(), "NULL");
        assert_eq!(Field::from(true).to_string(), "true");
        assert_eq!(Field::from(1000000u64).to_string(), "1000000");
        assert_eq!(Field::from(-42i64).to_string(), "-42");
        assert_eq!(Field::from(0.5).to_string(), "0.5");
        assert_eq!(Field::from("it's").to_string(), "'it\\'s'");
    }

    #[test]
    fn test_format_floats_keep_their_type() {
        assert_eq!(Field::Float64(1.0).to_string(), "1.0");
        assert_eq!(Field::Float64(-0.0).to_string(), "-0.0");
        assert_eq!(Field::Float64(1e300).to_string(), "1e300");
        assert_eq!(Field::Float64(1e-7).to_string(), "1e-7");
        assert_eq!(Field::Float64(0.25).to_string(), "0.25");
    }

    #[test]
    fn test_format_special_floats() {
        assert_eq!(Field::Float64(f64::NAN).to_string(), "nan");
        assert_eq!(Field::Float64(f64::INFINITY).to_string(), "inf");
        assert_eq!(Field::Float64(f64::NEG_INFINITY).to_string(), "-inf");
    }

    #[test]
    fn test_format_composites() {
        assert_eq!(Field::from(vec![1i64, 2, 3]).to_string(), "[1, 2, 3]");
        assert_eq!(Field::Array(vec![]).to_string(), "[]");
        assert_eq!(
            Field::Tuple(vec![Field::from(1u64), Field::from("a")]).to_string(),
            "(1, 'a')"
        );
        assert_eq!(Field::Tuple(vec![Field::Null]).to_string(), "tuple(NULL)");
    }

    #[test]
    fn test_from_option() {
        assert_eq!(Field::from(None::<i64>), Field::Null);
        assert_eq!(Field::from(Some(7i32)), Field::Int64(7));
    }
}
