use super::{PhysicalAddress, Type, ValueDateTime, ValueEnum};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveTime, TimeDelta};
use rust_decimal::Decimal;
use std::net::IpAddr;
use url::Url;
use uuid::Uuid;

/// A dynamically typed value flowing through a converter.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// A single Unicode scalar value
    Char(char),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),

    /// 32-bit floating point
    F32(f32),

    /// 64-bit floating point
    F64(f64),

    /// Scaled decimal
    Decimal(Decimal),

    /// String value
    String(String),

    /// Byte array
    Bytes(Vec<u8>),

    /// UUID
    Uuid(Uuid),

    /// Date and time tagged with its kind
    DateTime(ValueDateTime),

    /// Date and time with a fixed offset
    DateTimeOffset(DateTime<FixedOffset>),

    /// Calendar date
    Date(NaiveDate),

    /// Time of day
    Time(NaiveTime),

    /// Signed span of time
    Duration(TimeDelta),

    /// IP address
    IpAddr(IpAddr),

    /// Hardware address
    PhysicalAddress(PhysicalAddress),

    /// Absolute URL
    Url(Url),

    /// Value of an enumerated type
    Enum(ValueEnum),

    /// A list of values of the same type
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::Bytes(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// The name of the variant, used in error messages.
    pub fn variant_name(&self) -> &'static str {
        match self {
            Self::Bool(_) => "Bool",
            Self::Char(_) => "Char",
            Self::I8(_) => "I8",
            Self::I16(_) => "I16",
            Self::I32(_) => "I32",
            Self::I64(_) => "I64",
            Self::U8(_) => "U8",
            Self::U16(_) => "U16",
            Self::U32(_) => "U32",
            Self::U64(_) => "U64",
            Self::F32(_) => "F32",
            Self::F64(_) => "F64",
            Self::Decimal(_) => "Decimal",
            Self::String(_) => "String",
            Self::Bytes(_) => "Bytes",
            Self::Uuid(_) => "Uuid",
            Self::DateTime(_) => "DateTime",
            Self::DateTimeOffset(_) => "DateTimeOffset",
            Self::Date(_) => "Date",
            Self::Time(_) => "Time",
            Self::Duration(_) => "Duration",
            Self::IpAddr(_) => "IpAddr",
            Self::PhysicalAddress(_) => "PhysicalAddress",
            Self::Url(_) => "Url",
            Self::Enum(_) => "Enum",
            Self::List(_) => "List",
            Self::Null => "Null",
        }
    }

    /// Returns `true` if the value is an instance of `ty`. `Null` is an
    /// instance of every type.
    pub fn is_a(&self, ty: &Type) -> bool {
        if let Type::Option(inner) = ty {
            return self.is_a(inner);
        }

        match (self, ty) {
            (Self::Null, _) => true,
            (Self::Bool(_), Type::Bool) => true,
            (Self::Char(_), Type::Char) => true,
            (Self::I8(_), Type::I8) => true,
            (Self::I16(_), Type::I16) => true,
            (Self::I32(_), Type::I32) => true,
            (Self::I64(_), Type::I64) => true,
            (Self::U8(_), Type::U8) => true,
            (Self::U16(_), Type::U16) => true,
            (Self::U32(_), Type::U32) => true,
            (Self::U64(_), Type::U64) => true,
            (Self::F32(_), Type::F32) => true,
            (Self::F64(_), Type::F64) => true,
            (Self::Decimal(_), Type::Decimal) => true,
            (Self::String(_), Type::String) => true,
            (Self::Bytes(_), Type::Bytes) => true,
            (Self::Uuid(_), Type::Uuid) => true,
            (Self::DateTime(_), Type::DateTime) => true,
            (Self::DateTimeOffset(_), Type::DateTimeOffset) => true,
            (Self::Date(_), Type::Date) => true,
            (Self::Time(_), Type::Time) => true,
            (Self::Duration(_), Type::Duration) => true,
            (Self::IpAddr(_), Type::IpAddr) => true,
            (Self::PhysicalAddress(_), Type::PhysicalAddress) => true,
            (Self::Url(_), Type::Url) => true,
            (Self::Enum(_), Type::Enum(_)) => true,
            (Self::List(items), Type::List(item_ty)) => items.iter().all(|item| item.is_a(item_ty)),
            _ => false,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value)
    }
}

impl From<&[u8]> for Value {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(value.to_vec())
    }
}

impl From<Uuid> for Value {
    fn from(value: Uuid) -> Self {
        Self::Uuid(value)
    }
}

impl From<IpAddr> for Value {
    fn from(value: IpAddr) -> Self {
        Self::IpAddr(value)
    }
}

impl From<PhysicalAddress> for Value {
    fn from(value: PhysicalAddress) -> Self {
        Self::PhysicalAddress(value)
    }
}

impl From<Url> for Value {
    fn from(value: Url) -> Self {
        Self::Url(value)
    }
}

impl<T> From<Option<T>> for Value
where
    Value: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Value::from(value),
            None => Value::Null,
        }
    }
}

impl TryFrom<Value> for String {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, &Type::String)),
        }
    }
}

impl TryFrom<Value> for Vec<u8> {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Bytes(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, &Type::Bytes)),
        }
    }
}

impl TryFrom<Value> for Uuid {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Uuid(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, &Type::Uuid)),
        }
    }
}

impl TryFrom<Value> for IpAddr {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::IpAddr(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, &Type::IpAddr)),
        }
    }
}

impl TryFrom<Value> for PhysicalAddress {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::PhysicalAddress(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, &Type::PhysicalAddress)),
        }
    }
}

impl TryFrom<Value> for Url {
    type Error = crate::Error;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::Url(v) => Ok(v),
            _ => Err(crate::Error::type_conversion(value, &Type::Url)),
        }
    }
}
