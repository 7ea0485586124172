use ferry_core::convert::{MappingHints, Selector};
use ferry_core::db;
use ferry_core::driver::Capability;
use ferry_core::stmt::{Type, Value};
use ferry_core::TypeMapping;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::str::FromStr;

fn converter_name(mapping: &ferry_core::mapping::Mapping) -> Option<&str> {
    mapping.converter.as_ref().map(|converter| converter.name())
}

// ---------------------------------------------------------------------------
// Native types
// ---------------------------------------------------------------------------

#[test]
fn native_types_need_no_converter() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::I64, None)
        .unwrap();

    assert_eq!(mapping.provider_ty, Type::I64);
    assert!(mapping.converter.is_none());
    assert_eq!(mapping.hints, None);
    assert_eq!(mapping.storage_ty, db::Type::Integer(8));
    assert!(selector.cache().is_empty());
}

#[test]
fn requesting_the_model_type_is_direct() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::I32, Some(&Type::I32))
        .unwrap();

    assert!(mapping.converter.is_none());
    assert_eq!(mapping.storage_ty, db::Type::Integer(4));
}

#[test]
fn option_models_are_unwrapped() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::POSTGRESQL)
        .resolve(&Type::option(Type::Uuid), None)
        .unwrap();

    assert_eq!(mapping.model_ty, Type::Uuid);
    assert_eq!(mapping.storage_ty, db::Type::Uuid);
}

#[test]
fn default_string_storage() {
    let selector = Selector::new();

    let mapping = TypeMapping::new(&selector, &Capability::MYSQL)
        .resolve(&Type::String, None)
        .unwrap();
    assert_eq!(mapping.storage_ty, db::Type::VarChar(191));

    let mapping = TypeMapping::new(&selector, &Capability::POSTGRESQL)
        .resolve(&Type::Decimal, None)
        .unwrap();
    assert_eq!(mapping.storage_ty, db::Type::Numeric(None));
}

// ---------------------------------------------------------------------------
// Converted types
// ---------------------------------------------------------------------------

#[test]
fn guid_on_sqlite_is_text() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::Uuid, None)
        .unwrap();

    assert_eq!(mapping.provider_ty, Type::String);
    assert_eq!(converter_name(&mapping), Some("GuidToString"));
    assert_eq!(mapping.hints, Some(MappingHints::sized(36)));
    assert_eq!(mapping.storage_ty, db::Type::VarChar(36));
}

#[test]
fn decimal_on_sqlite_is_text() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::Decimal, None)
        .unwrap();

    assert_eq!(converter_name(&mapping), Some("NumberToString"));
    assert_eq!(mapping.storage_ty, db::Type::VarChar(64));

    let converter = mapping.converter.unwrap();
    let value = Value::Decimal(Decimal::from_str("12.50").unwrap());
    assert_eq!(
        converter.convert_to_provider(&value).unwrap(),
        Value::String("12.50".into())
    );
}

#[test]
fn u64_on_sqlite_skips_non_native_candidates() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::U64, None)
        .unwrap();

    // Decimal ranks first but SQLite has no decimal storage.
    assert_eq!(mapping.provider_ty, Type::String);
    assert_eq!(converter_name(&mapping), Some("NumberToString"));
}

#[test]
fn u8_on_postgres_widens() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::POSTGRESQL)
        .resolve(&Type::U8, None)
        .unwrap();

    assert_eq!(mapping.provider_ty, Type::I16);
    assert_eq!(converter_name(&mapping), Some("CastingConverter"));
    assert_eq!(mapping.storage_ty, db::Type::Integer(2));
}

#[test]
fn requested_bytes_on_mysql_are_fixed_width() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::MYSQL)
        .resolve(&Type::Uuid, Some(&Type::Bytes))
        .unwrap();

    assert_eq!(converter_name(&mapping), Some("GuidToBytes"));
    assert_eq!(mapping.storage_ty, db::Type::Binary(16));
}

#[test]
fn float_to_decimal_keeps_precision() {
    let selector = Selector::new();
    let mapping = TypeMapping::new(&selector, &Capability::MYSQL)
        .resolve(&Type::F64, Some(&Type::Decimal))
        .unwrap();

    assert_eq!(mapping.storage_ty, db::Type::Numeric(Some((38, 17))));
}

#[test]
fn dynamodb_has_no_varchar() {
    let selector = Selector::new();
    let capability = Capability::DYNAMODB;
    let mapping = TypeMapping::new(&selector, &capability)
        .resolve(&Type::IpAddr, None)
        .unwrap();

    assert_eq!(converter_name(&mapping), Some("IpAddressToString"));
    assert_eq!(mapping.storage_ty, db::Type::Text);
}

// ---------------------------------------------------------------------------
// Failures
// ---------------------------------------------------------------------------

#[test]
fn requested_provider_must_be_native() {
    let selector = Selector::new();
    let err = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::F64, Some(&Type::Decimal))
        .unwrap_err();

    assert!(err.is_unsupported_feature());
    assert!(err.to_string().contains("not supported"));
}

#[test]
fn no_conversion_for_pair() {
    let selector = Selector::new();
    let err = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::Uuid, Some(&Type::I64))
        .unwrap_err();

    assert!(err.is_unsupported_feature());
    assert!(err.to_string().contains("no conversion"));
}

#[test]
fn unmappable_model() {
    let selector = Selector::new();
    let err = TypeMapping::new(&selector, &Capability::SQLITE)
        .resolve(&Type::list(Type::Bytes), None)
        .unwrap_err();

    assert!(err.is_unsupported_feature());
}

#[test]
fn storage_limits_are_verified() {
    assert!(db::Type::VarChar(70_000)
        .verify(&Capability::MYSQL)
        .unwrap_err()
        .is_unsupported_feature());
    assert!(db::Type::Binary(16)
        .verify(&Capability::SQLITE)
        .is_err());
    assert!(db::Type::VarChar(70_000)
        .verify(&Capability::POSTGRESQL)
        .is_ok());
}
