use super::{Type, Value};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};

/// Whether a [`ValueDateTime`] is in UTC, local time, or neither.
///
/// The kind survives the binary encoding of a date/time; string and tick
/// encodings drop it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeKind {
    #[default]
    Unspecified,
    Utc,
    Local,
}

/// A wall-clock date and time together with its [`DateTimeKind`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueDateTime {
    pub value: NaiveDateTime,
    pub kind: DateTimeKind,
}

impl ValueDateTime {
    pub fn new(value: NaiveDateTime, kind: DateTimeKind) -> ValueDateTime {
        ValueDateTime { value, kind }
    }

    pub fn unspecified(value: NaiveDateTime) -> ValueDateTime {
        ValueDateTime::new(value, DateTimeKind::Unspecified)
    }

    pub fn utc(value: NaiveDateTime) -> ValueDateTime {
        ValueDateTime::new(value, DateTimeKind::Utc)
    }
}

impl From<ValueDateTime> for Value {
    fn from(value: ValueDateTime) -> Self {
        Self::DateTime(value)
    }
}

impl From<NaiveDateTime> for Value {
    fn from(value: NaiveDateTime) -> Self {
        Self::DateTime(ValueDateTime::unspecified(value))
    }
}

impl From<DateTime<Utc>> for Value {
    fn from(value: DateTime<Utc>) -> Self {
        Self::DateTime(ValueDateTime::utc(value.naive_utc()))
    }
}

macro_rules! impl_chrono_conversions {
    ($chrono:ty, $name:ident) => {
        impl From<$chrono> for Value {
            fn from(value: $chrono) -> Self {
                Self::$name(value)
            }
        }

        impl TryFrom<Value> for $chrono {
            type Error = crate::Error;

            fn try_from(value: Value) -> Result<Self, Self::Error> {
                match value {
                    Value::$name(value) => Ok(value),
                    _ => Err(crate::Error::type_conversion(value, &Type::$name)),
                }
            }
        }
    };
}

impl_chrono_conversions!(DateTime<FixedOffset>, DateTimeOffset);
impl_chrono_conversions!(NaiveDate, Date);
impl_chrono_conversions!(NaiveTime, Time);
impl_chrono_conversions!(TimeDelta, Duration);

impl TryFrom<Value> for ValueDateTime {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::DateTime(value) => Ok(value),
            _ => Err(crate::Error::type_conversion(value, &Type::DateTime)),
        }
    }
}

impl TryFrom<Value> for NaiveDateTime {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        ValueDateTime::try_from(value).map(|value| value.value)
    }
}
