use chrono::{DateTime, NaiveDate, TimeDelta, Utc};
use ferry::{Capability, Converters, Primitive, Type, TypedConverter, Value};
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use std::str::FromStr;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Primitive
// ---------------------------------------------------------------------------

#[test]
fn primitive_types() {
    assert_eq!(i32::ty(), Type::I32);
    assert_eq!(<Vec<u8>>::ty(), Type::Bytes);
    assert_eq!(NaiveDate::ty(), Type::Date);
    assert_eq!(<DateTime<Utc>>::ty(), Type::DateTime);
    assert_eq!(<Option<Uuid>>::ty(), Type::option(Type::Uuid));
    assert!(<Option<Uuid>>::nullable());
    assert!(!Uuid::nullable());
}

#[test]
fn primitive_values() {
    assert_eq!(7u16.into_value(), Value::U16(7));
    assert_eq!(None::<i64>.into_value(), Value::Null);
    assert_eq!(<Option<i64>>::load(Value::Null).unwrap(), None);
    assert_eq!(<Option<i64>>::load(Value::I64(3)).unwrap(), Some(3));
    assert_eq!(
        TimeDelta::load(TimeDelta::seconds(5).into_value()).unwrap(),
        TimeDelta::seconds(5)
    );

    let err = i64::load(Value::String("3".into())).unwrap_err();
    assert!(err.is_type_conversion());
}

#[test]
fn utc_date_times_load_as_utc() {
    let now = DateTime::parse_from_rfc3339("2024-03-01T13:05:09Z")
        .unwrap()
        .with_timezone(&Utc);

    assert_eq!(<DateTime<Utc>>::load(now.into_value()).unwrap(), now);
}

// ---------------------------------------------------------------------------
// TypedConverter
// ---------------------------------------------------------------------------

#[test]
fn find_typed_converter() {
    let converters = Converters::new();
    let converter = converters.find::<Uuid, String>().unwrap();

    let guid = Uuid::parse_str("00112233-4455-6677-8899-aabbccddeeff").unwrap();
    let text = converter.to_provider(guid).unwrap();

    assert_eq!(text, "00112233-4455-6677-8899-aabbccddeeff");
    assert_eq!(converter.from_provider(text).unwrap(), guid);
    assert_eq!(converter.converter().name(), "GuidToString");
}

#[test]
fn optional_models() {
    let converters = Converters::new();
    let converter = converters.find::<Option<i32>, Option<String>>().unwrap();

    assert_eq!(converter.to_provider(Some(4)).unwrap(), Some("4".to_string()));
    assert_eq!(converter.to_provider(None).unwrap(), None);
    assert_eq!(converter.from_provider(Some("-9".into())).unwrap(), Some(-9));
}

#[test]
fn decimal_through_string() {
    let converters = Converters::new();
    let converter = converters.find::<Decimal, String>().unwrap();
    let value = Decimal::from_str("1.50").unwrap();

    assert_eq!(converter.to_provider(value).unwrap(), "1.50");
    assert_eq!(converter.from_provider("1.50".into()).unwrap(), value);
}

#[test]
fn missing_conversion() {
    let converters = Converters::new();
    let err = converters.find::<Uuid, i64>().unwrap_err();

    assert!(err.is_unsupported_feature());
    assert!(err.to_string().contains("no conversion"));
}

#[test]
fn typed_converter_checks_types() {
    let converter = ferry::catalog::GuidToString::converter();

    assert!(TypedConverter::<Uuid, String>::new(converter.clone()).is_ok());
    assert!(TypedConverter::<Uuid, Vec<u8>>::new(converter)
        .unwrap_err()
        .is_unsupported_feature());
}

// ---------------------------------------------------------------------------
// Converters
// ---------------------------------------------------------------------------

#[test]
fn select_by_rust_type() {
    let converters = Converters::new();
    let providers: Vec<_> = converters
        .select::<bool>()
        .map(|info| info.provider_ty().clone())
        .collect();

    assert_eq!(providers.first(), Some(&Type::I32));
    assert_eq!(providers.last(), Some(&Type::Bytes));
    assert_eq!(providers.len(), 13);
}

#[test]
fn mapping_by_rust_type() {
    let converters = Converters::new();

    let mapping = converters.mapping::<Uuid>(&Capability::SQLITE).unwrap();
    assert_eq!(mapping.provider_ty, Type::String);

    let mapping = converters.mapping::<Uuid>(&Capability::POSTGRESQL).unwrap();
    assert!(mapping.converter.is_none());
}

#[test]
fn converters_share_the_cache() {
    let converters = Converters::new();
    let cloned = converters.clone();

    converters.find::<char, String>().unwrap();
    assert_eq!(cloned.selector().cache().len(), 1);
}
