use ferry_core::convert::catalog::{BoolToString, BoolToTwoValues, BoolToZeroOne, StringToBool};
use ferry_core::convert::MappingHints;
use ferry_core::stmt::{Type, Value};

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

// ---------------------------------------------------------------------------
// BoolToZeroOne
// ---------------------------------------------------------------------------

#[test]
fn zero_one_in_u8() {
    let converter = BoolToZeroOne::converter(&Type::U8).unwrap();

    assert_eq!(
        converter.convert_to_provider(&Value::Bool(true)).unwrap(),
        Value::U8(1)
    );
    assert_eq!(
        converter.convert_to_provider(&Value::Bool(false)).unwrap(),
        Value::U8(0)
    );
    assert_eq!(
        converter.convert_from_provider(&Value::U8(1)).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        converter.convert_from_provider(&Value::U8(0)).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn zero_one_reads_anything_but_one_as_false() {
    let converter = BoolToZeroOne::converter(&Type::I32).unwrap();

    assert_eq!(
        converter.convert_from_provider(&Value::I32(2)).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn zero_one_in_decimal_and_float() {
    let converter = BoolToZeroOne::converter(&Type::F64).unwrap();
    assert_eq!(
        converter.convert_to_provider(&Value::Bool(true)).unwrap(),
        Value::F64(1.0)
    );

    let converter = BoolToZeroOne::converter(&Type::Decimal).unwrap();
    assert_eq!(
        converter.convert_to_provider(&Value::Bool(true)).unwrap(),
        Value::Decimal(1.into())
    );
}

#[test]
fn zero_one_rejects_string_provider() {
    assert!(BoolToZeroOne::converter(&Type::String)
        .unwrap_err()
        .is_unsupported_type());
}

// ---------------------------------------------------------------------------
// BoolToTwoValues
// ---------------------------------------------------------------------------

#[test]
fn two_values_in_char() {
    let converter =
        BoolToTwoValues::converter(&Type::Char, Value::Char('N'), Value::Char('Y')).unwrap();

    assert_eq!(
        converter.convert_to_provider(&Value::Bool(true)).unwrap(),
        Value::Char('Y')
    );
    assert_eq!(
        converter.convert_from_provider(&Value::Char('N')).unwrap(),
        Value::Bool(false)
    );
    assert_eq!(
        converter.convert_from_provider(&Value::Char('y')).unwrap(),
        Value::Bool(false)
    );
}

#[test]
fn two_values_with_predicate() {
    let converter = BoolToTwoValues::with_predicate(
        &Type::Char,
        Value::Char('N'),
        Value::Char('Y'),
        |value| matches!(value, Value::Char('Y' | 'y')),
        None,
    )
    .unwrap();

    assert_eq!(
        converter.convert_from_provider(&Value::Char('y')).unwrap(),
        Value::Bool(true)
    );
}

#[test]
fn two_values_must_match_provider_type() {
    let err = BoolToTwoValues::converter(&Type::I32, Value::I64(0), Value::I64(1)).unwrap_err();

    assert!(err.is_type_conversion());
}

// ---------------------------------------------------------------------------
// BoolToString / StringToBool
// ---------------------------------------------------------------------------

#[test]
fn bool_to_string_defaults() {
    let converter = BoolToString::converter();

    assert_eq!(
        converter.convert_to_provider(&Value::Bool(true)).unwrap(),
        text("1")
    );
    assert_eq!(
        converter.convert_to_provider(&Value::Bool(false)).unwrap(),
        text("0")
    );
    assert_eq!(converter.hints(), Some(&MappingHints::sized(1)));
}

#[test]
fn bool_to_string_reads_first_char() {
    let converter = BoolToString::with_values("No", "Yes", None).unwrap();

    for (input, expected) in [
        ("Yes", true),
        ("yes", true),
        ("Y", true),
        ("No", false),
        ("", false),
        ("maybe", false),
    ] {
        assert_eq!(
            converter.convert_from_provider(&text(input)).unwrap(),
            Value::Bool(expected),
            "{input:?}"
        );
    }

    assert_eq!(converter.hints(), Some(&MappingHints::sized(3)));
}

#[test]
fn bool_to_string_needs_true_value() {
    assert!(BoolToString::with_values("0", "", None).is_err());
}

#[test]
fn string_to_bool() {
    let converter = StringToBool::converter();

    assert_eq!(converter.model_ty(), &Type::String);
    assert_eq!(converter.provider_ty(), &Type::Bool);
    assert_eq!(
        converter.convert_to_provider(&text("TRUE")).unwrap(),
        Value::Bool(true)
    );
    assert_eq!(
        converter.convert_to_provider(&text(" false ")).unwrap(),
        Value::Bool(false)
    );
    assert!(converter
        .convert_to_provider(&text("1"))
        .unwrap_err()
        .is_conversion_failed());
    assert_eq!(
        converter.convert_from_provider(&Value::Bool(true)).unwrap(),
        text("True")
    );
}
