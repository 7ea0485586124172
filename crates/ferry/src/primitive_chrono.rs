use crate::Primitive;
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, Utc};
use ferry_core::{
    stmt::{Type, Value},
    Result,
};

macro_rules! impl_chrono_primitive {
    ($ty:ty, $name:ident) => {
        impl Primitive for $ty {
            fn ty() -> Type {
                Type::$name
            }

            fn into_value(self) -> Value {
                self.into()
            }

            fn load(value: Value) -> Result<Self> {
                value.try_into()
            }
        }
    };
}

impl_chrono_primitive!(NaiveDateTime, DateTime);
impl_chrono_primitive!(DateTime<FixedOffset>, DateTimeOffset);
impl_chrono_primitive!(NaiveDate, Date);
impl_chrono_primitive!(NaiveTime, Time);
impl_chrono_primitive!(TimeDelta, Duration);

/// Stored as a UTC-kind [`Type::DateTime`]. Loading ignores the kind.
impl Primitive for DateTime<Utc> {
    fn ty() -> Type {
        Type::DateTime
    }

    fn into_value(self) -> Value {
        self.into()
    }

    fn load(value: Value) -> Result<Self> {
        Ok(NaiveDateTime::try_from(value)?.and_utc())
    }
}
