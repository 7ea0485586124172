use crate::{convert::MappingHints, driver, stmt, Error, Result};

/// Database-level storage types representing how values are stored in the
/// target database.
///
/// `db::Type` is the **external** side of a mapping: the column type that
/// appears in a `CREATE TABLE` statement. A model's [`stmt::Type`] reaches it
/// in two steps:
///
/// ```text
/// model type ──converter──▶ provider type ──from_provider──▶ db::Type
///
/// stmt::Type::Uuid   ──GuidToString──▶  stmt::Type::String  ──▶  VarChar(36)
/// stmt::Type::I64    ───────────────────────────────────────▶  Integer(8)
/// stmt::Type::Char   ──CharToString──▶  stmt::Type::String  ──▶  VarChar(1)
/// ```
///
/// The size, precision and scale carried by the converter's
/// [`MappingHints`] shape the column (`VARCHAR(n)`, `NUMERIC(p, s)`,
/// `BINARY(n)`).
#[derive(Debug, Clone, PartialEq)]
pub enum Type {
    /// A boolean value
    Boolean,

    /// A signed integer of `n` bytes
    Integer(u8),

    /// An unsigned integer of `n` bytes
    UnsignedInteger(u8),

    /// A floating point number of `n` bytes
    Float(u8),

    /// Decimal number with optional precision and scale.
    /// - `None`: Arbitrary-precision decimal
    /// - `Some((precision, scale))`: Fixed precision and scale
    Numeric(Option<(u32, u32)>),

    /// Unconstrained text type
    Text,

    /// Text type with an explicit maximum length
    VarChar(u64),

    /// Unconstrained binary type
    Blob,

    /// Fixed-size binary type of `n` bytes
    Binary(u8),

    /// 128-bit universally unique identifier (UUID)
    Uuid,

    /// An instant in time with fractional seconds precision (0-9 digits).
    Timestamp(u8),

    /// A representation of a civil date in the Gregorian calendar.
    Date,

    /// A representation of civil "wall clock" time with fractional seconds
    /// precision (0-9 digits).
    Time(u8),

    /// A representation of a civil datetime in the Gregorian calendar with
    /// fractional seconds precision (0-9 digits).
    DateTime(u8),

    /// Database-specific type named verbatim
    Custom(String),
}

impl Type {
    /// Maps a provider type to a database-level storage type.
    pub fn from_provider(
        ty: &stmt::Type,
        hints: Option<&MappingHints>,
        db: &driver::StorageTypes,
    ) -> Result<Type> {
        let size = hints.and_then(|hints| hints.size);

        match ty.unwrap_option() {
            stmt::Type::Bool => Ok(Type::Boolean),
            stmt::Type::I8 => Ok(Type::Integer(1)),
            stmt::Type::I16 => Ok(Type::Integer(2)),
            stmt::Type::I32 => Ok(Type::Integer(4)),
            stmt::Type::I64 => Ok(Type::Integer(8)),
            stmt::Type::U8 => Ok(Type::UnsignedInteger(1)),
            stmt::Type::U16 => Ok(Type::UnsignedInteger(2)),
            stmt::Type::U32 => Ok(Type::UnsignedInteger(4)),
            stmt::Type::U64 => Ok(Type::UnsignedInteger(8)),
            stmt::Type::F32 => Ok(Type::Float(4)),
            stmt::Type::F64 => Ok(Type::Float(8)),
            stmt::Type::Decimal => Ok(Type::Numeric(hints.and_then(|hints| {
                hints.precision.map(|precision| (precision, hints.scale.unwrap_or(0)))
            }))),
            stmt::Type::String => Ok(match (size, db.varchar) {
                (Some(size), Some(max)) if u64::from(size) <= max => Type::VarChar(size.into()),
                _ => db.default_string_type.clone(),
            }),
            stmt::Type::Bytes => Ok(match (size, db.binary) {
                (Some(size), Some(max)) if size <= u32::from(max) => Type::Binary(size as u8),
                _ => Type::Blob,
            }),
            stmt::Type::Uuid => Ok(Type::Uuid),
            stmt::Type::DateTime => Ok(Type::DateTime(6)),
            stmt::Type::DateTimeOffset => Ok(Type::Timestamp(6)),
            stmt::Type::Date => Ok(Type::Date),
            stmt::Type::Time => Ok(Type::Time(6)),
            stmt::Type::Duration => Ok(Type::Custom("interval".to_string())),
            stmt::Type::IpAddr => Ok(Type::Custom("inet".to_string())),
            stmt::Type::PhysicalAddress => Ok(Type::Custom("macaddr".to_string())),
            ty => Err(Error::unsupported_feature(format!(
                "type {ty} has no storage type"
            ))),
        }
    }

    /// Checks the storage type against the database's limits.
    pub fn verify(&self, db: &driver::Capability) -> Result<()> {
        match *self {
            Type::VarChar(size) => match db.storage_types.varchar {
                Some(max) if size > max => Err(Error::unsupported_feature(format!(
                    "VARCHAR({size}) exceeds database maximum of {max}"
                ))),
                None => Err(Error::unsupported_feature(
                    "VARCHAR type is not supported by this database",
                )),
                _ => Ok(()),
            },
            Type::Binary(size) => match db.storage_types.binary {
                Some(max) if size > max => Err(Error::unsupported_feature(format!(
                    "BINARY({size}) exceeds database maximum of {max}"
                ))),
                None => Err(Error::unsupported_feature(
                    "BINARY type is not supported by this database",
                )),
                _ => Ok(()),
            },
            _ => Ok(()),
        }
    }
}
