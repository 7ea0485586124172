use super::TypeEnum;
use std::fmt;

/// Identifies the type at one end of a conversion.
///
/// `Type` names types, it never holds values (see [`Value`](super::Value)
/// for that). Both the application-facing "model" side and the store-facing
/// "provider" side of a converter are described with this enum.
///
/// Nullability is expressed with [`Type::Option`]. The selector strips it
/// before classifying a type; converter composition looks at it to decide
/// whether a bridging cast is needed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Type {
    /// Boolean value
    Bool,

    /// A single Unicode scalar value
    Char,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 32-bit floating point
    F32,

    /// 64-bit floating point
    F64,

    /// 96-bit scaled decimal
    Decimal,

    /// String type
    String,

    /// An array of bytes
    Bytes,

    /// 128-bit universally unique identifier
    Uuid,

    /// A calendar date and wall-clock time, tagged with a [`DateTimeKind`](super::DateTimeKind)
    DateTime,

    /// A date and time with a fixed UTC offset
    DateTimeOffset,

    /// A calendar date
    Date,

    /// A time of day
    Time,

    /// A signed span of time
    Duration,

    /// An IPv4 or IPv6 address
    IpAddr,

    /// A hardware (MAC) address
    PhysicalAddress,

    /// An absolute URL
    Url,

    /// A user enumeration backed by an integer type
    Enum(TypeEnum),

    /// A list of a single type
    List(Box<Type>),

    /// The nullable form of a type
    Option(Box<Type>),
}

/// Every numeric type, in the order the selector sweeps them.
pub(crate) const NUMERIC: &[Type] = &[
    Type::I32,
    Type::I64,
    Type::I16,
    Type::U8,
    Type::U64,
    Type::U32,
    Type::U16,
    Type::I8,
    Type::Decimal,
    Type::F64,
    Type::F32,
];

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn option(ty: impl Into<Self>) -> Self {
        Self::Option(Box::new(ty.into()))
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_char(&self) -> bool {
        matches!(self, Self::Char)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_bytes(&self) -> bool {
        matches!(self, Self::Bytes)
    }

    pub fn is_decimal(&self) -> bool {
        matches!(self, Self::Decimal)
    }

    pub fn is_enum(&self) -> bool {
        matches!(self, Self::Enum(_))
    }

    pub fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    pub fn is_option(&self) -> bool {
        matches!(self, Self::Option(_))
    }

    /// Returns `true` for the eight integer types.
    pub fn is_integer(&self) -> bool {
        matches!(
            self,
            Self::I8 | Self::I16 | Self::I32 | Self::I64 | Self::U8 | Self::U16 | Self::U32 | Self::U64
        )
    }

    pub fn is_float(&self) -> bool {
        matches!(self, Self::F32 | Self::F64)
    }

    /// Returns `true` for the integer, floating point and decimal types.
    ///
    /// `char` and `bool` are not numeric even though both can be cast to
    /// numbers.
    pub fn is_numeric(&self) -> bool {
        self.is_integer() || self.is_float() || self.is_decimal()
    }

    pub fn as_enum(&self) -> Option<&TypeEnum> {
        match self {
            Self::Enum(ty) => Some(ty),
            _ => None,
        }
    }

    /// Strips one level of [`Type::Option`].
    pub fn unwrap_option(&self) -> &Type {
        match self {
            Self::Option(inner) => inner,
            _ => self,
        }
    }

    /// Returns the underlying integer type of an enum, or `self` otherwise.
    pub fn unwrap_enum(&self) -> &Type {
        match self {
            Self::Enum(ty) => ty.underlying(),
            _ => self,
        }
    }

    /// Returns `true` if this is an integer type that can hold `value`.
    pub fn fits_integer(&self, value: i128) -> bool {
        match self {
            Self::I8 => i8::try_from(value).is_ok(),
            Self::I16 => i16::try_from(value).is_ok(),
            Self::I32 => i32::try_from(value).is_ok(),
            Self::I64 => i64::try_from(value).is_ok(),
            Self::U8 => u8::try_from(value).is_ok(),
            Self::U16 => u16::try_from(value).is_ok(),
            Self::U32 => u32::try_from(value).is_ok(),
            Self::U64 => u64::try_from(value).is_ok(),
            _ => false,
        }
    }

    /// Number of bytes in the fixed-width binary form of a numeric type.
    pub fn byte_width(&self) -> Option<usize> {
        Some(match self {
            Self::I8 | Self::U8 => 1,
            Self::I16 | Self::U16 => 2,
            Self::I32 | Self::U32 | Self::F32 => 4,
            Self::I64 | Self::U64 | Self::F64 => 8,
            Self::Decimal => 16,
            _ => return None,
        })
    }
}

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool => f.write_str("bool"),
            Self::Char => f.write_str("char"),
            Self::I8 => f.write_str("i8"),
            Self::I16 => f.write_str("i16"),
            Self::I32 => f.write_str("i32"),
            Self::I64 => f.write_str("i64"),
            Self::U8 => f.write_str("u8"),
            Self::U16 => f.write_str("u16"),
            Self::U32 => f.write_str("u32"),
            Self::U64 => f.write_str("u64"),
            Self::F32 => f.write_str("f32"),
            Self::F64 => f.write_str("f64"),
            Self::Decimal => f.write_str("Decimal"),
            Self::String => f.write_str("String"),
            Self::Bytes => f.write_str("Vec<u8>"),
            Self::Uuid => f.write_str("Uuid"),
            Self::DateTime => f.write_str("DateTime"),
            Self::DateTimeOffset => f.write_str("DateTimeOffset"),
            Self::Date => f.write_str("Date"),
            Self::Time => f.write_str("Time"),
            Self::Duration => f.write_str("Duration"),
            Self::IpAddr => f.write_str("IpAddr"),
            Self::PhysicalAddress => f.write_str("PhysicalAddress"),
            Self::Url => f.write_str("Url"),
            Self::Enum(ty) => f.write_str(ty.name()),
            Self::List(ty) => write!(f, "Vec<{ty}>"),
            Self::Option(ty) => write!(f, "Option<{ty}>"),
        }
    }
}

impl From<&Self> for Type {
    fn from(value: &Self) -> Self {
        value.clone()
    }
}

impl From<TypeEnum> for Type {
    fn from(value: TypeEnum) -> Self {
        Self::Enum(value)
    }
}
