use crate::{db, stmt::Type};

/// What a database can store, used to decide whether a model type needs a
/// converter and which provider type to pick.
#[derive(Debug)]
pub struct Capability {
    /// When true, the database uses a SQL-based query language.
    pub sql: bool,

    /// Column storage types supported by the database
    pub storage_types: StorageTypes,
}

#[derive(Debug)]
pub struct StorageTypes {
    /// Provider types the database stores without a converter.
    pub native: &'static [Type],

    /// The default storage type for a string.
    pub default_string_type: db::Type,

    /// When `Some` the database supports varchar types with the specified upper
    /// limit.
    pub varchar: Option<u64>,

    /// When `Some` the database supports fixed-size binary columns up to the
    /// specified number of bytes.
    pub binary: Option<u8>,
}

impl Capability {
    /// SQLite capabilities.
    pub const SQLITE: Self = Self {
        sql: true,
        storage_types: StorageTypes::SQLITE,
    };

    /// PostgreSQL capabilities
    pub const POSTGRESQL: Self = Self {
        storage_types: StorageTypes::POSTGRESQL,
        ..Self::SQLITE
    };

    /// MySQL capabilities
    pub const MYSQL: Self = Self {
        storage_types: StorageTypes::MYSQL,
        ..Self::SQLITE
    };

    /// DynamoDB capabilities
    pub const DYNAMODB: Self = Self {
        sql: false,
        storage_types: StorageTypes::DYNAMODB,
    };

    /// Returns `true` if values of `ty` are stored without conversion.
    pub fn is_native(&self, ty: &Type) -> bool {
        self.storage_types.native.contains(ty.unwrap_option())
    }
}

impl StorageTypes {
    /// SQLite storage types
    pub const SQLITE: StorageTypes = StorageTypes {
        // INTEGER columns hold up to 8 signed bytes, so `u64` needs a
        // converter.
        native: &[
            Type::I64,
            Type::I32,
            Type::I16,
            Type::I8,
            Type::U32,
            Type::U16,
            Type::U8,
            Type::Bool,
            Type::F64,
            Type::F32,
            Type::String,
            Type::Bytes,
        ],

        default_string_type: db::Type::Text,

        // SQLite doesn't enforce the "N" in VARCHAR(N). Any type containing
        // "CHAR", "CLOB", or "TEXT" has TEXT affinity and the length is
        // ignored. The only hard limit is SQLITE_MAX_LENGTH, 1 billion by
        // default.
        varchar: Some(1_000_000_000),

        binary: None,
    };

    pub const POSTGRESQL: StorageTypes = StorageTypes {
        native: &[
            Type::I64,
            Type::I32,
            Type::I16,
            Type::Bool,
            Type::F64,
            Type::F32,
            Type::Decimal,
            Type::String,
            Type::Bytes,
            Type::Uuid,
            Type::DateTime,
            Type::DateTimeOffset,
            Type::Date,
            Type::Time,
            Type::Duration,
            Type::IpAddr,
            Type::PhysicalAddress,
        ],

        default_string_type: db::Type::Text,

        // The maximum n you can specify is 10 485 760 characters. Larger
        // typmods are rejected at table-creation time.
        varchar: Some(10_485_760),

        // `bytea` has no fixed-size form.
        binary: None,
    };

    pub const MYSQL: StorageTypes = StorageTypes {
        native: &[
            Type::I64,
            Type::I32,
            Type::I16,
            Type::I8,
            Type::U64,
            Type::U32,
            Type::U16,
            Type::U8,
            Type::Bool,
            Type::F64,
            Type::F32,
            Type::Decimal,
            Type::String,
            Type::Bytes,
            Type::DateTime,
            Type::Date,
            Type::Time,
        ],

        default_string_type: db::Type::VarChar(191),

        // The length can be specified as a value from 0 to 65,535, subject to
        // the maximum row size shared among all columns and the character
        // set used.
        varchar: Some(65_535),

        binary: Some(255),
    };

    pub const DYNAMODB: StorageTypes = StorageTypes {
        // Numbers are stored as `N`, which holds 38 digits.
        native: &[
            Type::I64,
            Type::I32,
            Type::I16,
            Type::I8,
            Type::U64,
            Type::U32,
            Type::U16,
            Type::U8,
            Type::Bool,
            Type::F64,
            Type::F32,
            Type::Decimal,
            Type::String,
            Type::Bytes,
        ],

        default_string_type: db::Type::Text,

        // DynamoDB does not support varchar types
        varchar: None,

        binary: None,
    };
}
