use ferry_core::convert::catalog::{
    BoolToZeroOne, CastingConverter, DateOnlyToString, NumberToBytes, NumberToString,
    StringToBytes,
};
use ferry_core::convert::{Converter, MappingHints};
use ferry_core::stmt::{Type, Value};
use ferry_core::Error;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use std::sync::Arc;

// ---------------------------------------------------------------------------
// Composition
// ---------------------------------------------------------------------------

#[test]
fn compose_with_none_is_identity() {
    let converter = NumberToString::converter(&Type::I32).unwrap();
    let composed = converter.compose_with(None).unwrap();

    assert_eq!(composed.name(), converter.name());
    assert_eq!(composed.model_ty(), converter.model_ty());
    assert_eq!(composed.provider_ty(), converter.provider_ty());
    assert_eq!(composed.hints(), converter.hints());
    assert_eq!(
        composed.convert_to_provider(&Value::I32(5)).unwrap(),
        Value::String("5".into())
    );
}

#[test]
fn compose_chains_both_directions() {
    let first = BoolToZeroOne::converter(&Type::U8).unwrap();
    let second = NumberToBytes::converter(&Type::U8).unwrap();
    let composed = first.compose_with(Some(&second)).unwrap();

    assert_eq!(composed.name(), "BoolToZeroOne+NumberToBytes");
    assert_eq!(composed.model_ty(), &Type::Bool);
    assert_eq!(composed.provider_ty(), &Type::Bytes);
    assert_eq!(
        composed.convert_to_provider(&Value::Bool(true)).unwrap(),
        Value::Bytes(vec![1])
    );
    assert_eq!(
        composed
            .convert_from_provider(&Value::Bytes(vec![1]))
            .unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        composed.convert_from_provider(&Value::Bytes(vec![])).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn compose_hints_prefer_second() {
    let first = DateOnlyToString::converter();
    let second = StringToBytes::with_hints(Some(MappingHints {
        unicode: Some(false),
        ..MappingHints::default()
    }));
    let composed = first.compose_with(Some(&second)).unwrap();

    assert_eq!(
        composed.hints(),
        Some(&MappingHints {
            size: Some(10),
            unicode: Some(false),
            ..MappingHints::default()
        })
    );

    let second = StringToBytes::with_hints(Some(MappingHints::sized(32)));
    let composed = first.compose_with(Some(&second)).unwrap();
    assert_eq!(composed.hints(), Some(&MappingHints::sized(32)));

    let composed = first.compose_with(Some(&StringToBytes::converter())).unwrap();
    assert_eq!(composed.hints(), Some(&MappingHints::sized(10)));
}

#[test]
fn compose_mismatch_names_all_types() {
    let first = NumberToString::converter(&Type::I32).unwrap();
    let second = NumberToBytes::converter(&Type::I64).unwrap();

    let err = first.compose_with(Some(&second)).unwrap_err();
    assert!(err.is_composition_mismatch());

    let message = err.to_string();
    for ty in ["i32", "String", "i64", "Vec<u8>"] {
        assert!(message.contains(ty), "{message} should mention {ty}");
    }
}

#[test]
fn compose_bridges_nullable_provider() {
    let first = CastingConverter::converter(&Type::I32, &Type::option(Type::I64)).unwrap();
    let second = NumberToString::converter(&Type::I64).unwrap();
    let composed = first.compose_with(Some(&second)).unwrap();

    assert_eq!(composed.name(), "CastingConverter+Casting+NumberToString");
    assert_eq!(
        composed.convert_to_provider(&Value::I32(12)).unwrap(),
        Value::String("12".into())
    );
    assert_eq!(
        composed
            .convert_from_provider(&Value::String("12".into()))
            .unwrap(),
        Value::I32(12)
    );
}

#[test]
fn compose_three_deep() {
    let date = NaiveDate::from_ymd_opt(2020, 1, 2).unwrap();
    let composed = DateOnlyToString::converter()
        .compose_with(Some(&StringToBytes::converter()))
        .unwrap();

    let bytes = composed.convert_to_provider(&date.into()).unwrap();
    assert_eq!(bytes, Value::Bytes(b"2020-01-02".to_vec()));
    assert_eq!(composed.convert_from_provider(&bytes).unwrap(), date.into());
}

// ---------------------------------------------------------------------------
// Nulls
// ---------------------------------------------------------------------------

#[test]
fn null_passes_through_by_default() {
    let converter = NumberToString::converter(&Type::I32).unwrap();

    assert!(!converter.converts_nulls());
    assert_eq!(converter.convert_to_provider(&Value::Null).unwrap(), Value::Null);
    assert_eq!(converter.convert_from_provider(&Value::Null).unwrap(), Value::Null);
}

#[test]
fn converts_nulls_hands_null_to_the_expression() {
    let converter = Converter::from_fns(
        Type::option(Type::I32),
        Type::I32,
        |value| Ok(if value.is_null() { Value::I32(-1) } else { value }),
        |value| Ok(if value == Value::I32(-1) { Value::Null } else { value }),
    )
    .with_converts_nulls(true);

    assert_eq!(
        converter.convert_to_provider(&Value::Null).unwrap(),
        Value::I32(-1)
    );
    assert_eq!(
        converter.convert_from_provider(&Value::I32(-1)).unwrap(),
        Value::Null
    );
    assert_eq!(
        converter.convert_to_provider(&Value::I32(4)).unwrap(),
        Value::I32(4)
    );
}

#[test]
fn composite_converts_nulls_if_either_does() {
    let first = Converter::from_fns(
        Type::option(Type::I32),
        Type::I32,
        |value| Ok(if value.is_null() { Value::I32(0) } else { value }),
        Ok,
    )
    .with_converts_nulls(true);
    let second = NumberToString::converter(&Type::I32).unwrap();

    let composed = first.compose_with(Some(&second)).unwrap();
    assert!(composed.converts_nulls());
    assert_eq!(
        composed.convert_to_provider(&Value::Null).unwrap(),
        Value::String("0".into())
    );
}

// ---------------------------------------------------------------------------
// Custom converters
// ---------------------------------------------------------------------------

#[test]
fn custom_converter() {
    let converter = Converter::from_fns(
        Type::String,
        Type::String,
        |value| Ok(Value::String(String::try_from(value)?.to_uppercase())),
        |value| Ok(Value::String(String::try_from(value)?.to_lowercase())),
    );

    assert_eq!(converter.name(), "Custom");
    assert_eq!(
        converter
            .convert_to_provider(&Value::String("abc".into()))
            .unwrap(),
        Value::String("ABC".into())
    );
}

#[test]
fn custom_errors_propagate() {
    let converter = Converter::from_fns(
        Type::I32,
        Type::I32,
        |_| Err(Error::conversion_failed("nope")),
        Ok,
    );

    let err = converter.convert_to_provider(&Value::I32(1)).unwrap_err();
    assert!(err.is_conversion_failed());
    assert!(err.to_string().contains("nope"));
}

#[test]
fn compiled_functions_are_reused() {
    let converter = NumberToString::converter(&Type::I32).unwrap();

    assert!(Arc::ptr_eq(
        converter.to_provider_fn(),
        converter.to_provider_fn()
    ));
    assert!(Arc::ptr_eq(
        converter.from_provider_fn(),
        converter.from_provider_fn()
    ));
}

#[test]
fn reversed_swaps_directions() {
    let converter = NumberToString::converter(&Type::I32)
        .unwrap()
        .reversed("Parse");

    assert_eq!(converter.name(), "Parse");
    assert_eq!(converter.model_ty(), &Type::String);
    assert_eq!(
        converter
            .convert_to_provider(&Value::String("9".into()))
            .unwrap(),
        Value::I32(9)
    );
}
