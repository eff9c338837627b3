use std::borrow::Cow;
use std::fmt::{self, Display, Formatter};

use super::Mappable;

/// A primitive field value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar<'a> {
    /// Text.
    Str(Cow<'a, str>),
    /// Integer number.
    Int(i64),
    /// Floating point number.
    Float(f64),
    /// Boolean.
    Bool(bool),
}

impl Display for Scalar<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Str(s) => f.write_str(s),
            Scalar::Int(i) => write!(f, "{}", i),
            // whole numbers keep a fractional digit, so 6.0 reads "6.0"
            Scalar::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{:.1}", x),
            Scalar::Float(x) => write!(f, "{}", x),
            Scalar::Bool(b) => write!(f, "{}", b),
        }
    }
}

/// The value of a field, as seen by the mapping engine.
///
/// The engine matches on the shape: a scalar becomes text or an attribute
/// value, a composite becomes a nested element and a sequence becomes one
/// nested element per present item.
pub enum FieldValue<'a> {
    /// No value; the field is skipped.
    Absent,
    /// A primitive value.
    Scalar(Scalar<'a>),
    /// A nested value with its own schema.
    Composite(&'a dyn Mappable),
    /// A sequence of nested values; absent items are skipped.
    Sequence(Vec<Option<&'a dyn Mappable>>),
}

impl<'a> FieldValue<'a> {
    /// A sequence value from an iterator of items.
    pub fn sequence<T, I>(items: I) -> Self
    where
        T: Mappable + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        FieldValue::Sequence(
            items
                .into_iter()
                .map(|item| Some(item as &dyn Mappable))
                .collect(),
        )
    }

    /// A composite value, or [`FieldValue::Absent`] if there is none.
    pub fn optional<T: Mappable + 'a>(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => FieldValue::Composite(value),
            None => FieldValue::Absent,
        }
    }

    /// Returns true if there is no value.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }
}

impl fmt::Debug for FieldValue<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("Absent"),
            FieldValue::Scalar(scalar) => f.debug_tuple("Scalar").field(scalar).finish(),
            FieldValue::Composite(value) => f
                .debug_tuple("Composite")
                .field(&value.schema().type_name())
                .finish(),
            FieldValue::Sequence(items) => f
                .debug_tuple("Sequence")
                .field(&items.len())
                .finish(),
        }
    }
}

impl<'a> From<Scalar<'a>> for FieldValue<'a> {
    fn from(scalar: Scalar<'a>) -> Self {
        FieldValue::Scalar(scalar)
    }
}

impl<'a> From<&'a str> for FieldValue<'a> {
    fn from(s: &'a str) -> Self {
        FieldValue::Scalar(Scalar::Str(Cow::Borrowed(s)))
    }
}

impl<'a> From<&'a String> for FieldValue<'a> {
    fn from(s: &'a String) -> Self {
        FieldValue::Scalar(Scalar::Str(Cow::Borrowed(s.as_str())))
    }
}

impl From<String> for FieldValue<'_> {
    fn from(s: String) -> Self {
        FieldValue::Scalar(Scalar::Str(Cow::Owned(s)))
    }
}

impl From<bool> for FieldValue<'_> {
    fn from(b: bool) -> Self {
        FieldValue::Scalar(Scalar::Bool(b))
    }
}

impl From<f64> for FieldValue<'_> {
    fn from(x: f64) -> Self {
        FieldValue::Scalar(Scalar::Float(x))
    }
}

impl From<f32> for FieldValue<'_> {
    fn from(x: f32) -> Self {
        FieldValue::Scalar(Scalar::Float(f64::from(x)))
    }
}

macro_rules! int_field_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue<'_> {
                fn from(i: $t) -> Self {
                    FieldValue::Scalar(Scalar::Int(i64::from(i)))
                }
            }
        )*
    };
}

int_field_value!(i8, i16, i32, i64, u8, u16, u32);

// integers that may not fit an `i64` keep their exact decimal form
macro_rules! wide_int_field_value {
    ($($t:ty),*) => {
        $(
            impl From<$t> for FieldValue<'_> {
                fn from(i: $t) -> Self {
                    let scalar = i64::try_from(i)
                        .map_or_else(|_| Scalar::Str(Cow::Owned(i.to_string())), Scalar::Int);
                    FieldValue::Scalar(scalar)
                }
            }
        )*
    };
}

wide_int_field_value!(u64, u128, i128, usize, isize);

impl<'a, T> From<Option<T>> for FieldValue<'a>
where
    T: Into<FieldValue<'a>>,
{
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Absent, Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Scalar::Str("M4310".into()), "M4310")]
    #[case(Scalar::Int(20), "20")]
    #[case(Scalar::Float(6.0), "6.0")]
    #[case(Scalar::Float(7.5), "7.5")]
    #[case(Scalar::Bool(true), "true")]
    fn test_scalar_display(#[case] scalar: Scalar<'_>, #[case] expected: &str) {
        assert_eq!(scalar.to_string(), expected);
    }

    #[rstest]
    #[case(FieldValue::from(42usize), "42")]
    #[case(FieldValue::from(7u64), "7")]
    #[case(FieldValue::from(u64::MAX), "18446744073709551615")]
    #[case(FieldValue::from(i128::MIN), "-170141183460469231731687303715884105728")]
    #[case(FieldValue::from(-3isize), "-3")]
    fn test_wide_integers(#[case] value: FieldValue<'static>, #[case] expected: &str) {
        match value {
            FieldValue::Scalar(scalar) => assert_eq!(scalar.to_string(), expected),
            other => panic!("expected a scalar, got {:?}", other),
        }
    }

    #[test]
    fn test_wide_integer_in_range_is_int() {
        assert!(matches!(
            FieldValue::from(42usize),
            FieldValue::Scalar(Scalar::Int(42))
        ));
    }

    #[test]
    fn test_from_option() {
        assert!(FieldValue::from(None::<&str>).is_absent());
        assert!(matches!(
            FieldValue::from(Some(3)),
            FieldValue::Scalar(Scalar::Int(3))
        ));
    }
}
