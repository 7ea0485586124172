use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta};
use ferry_core::convert::catalog::{
    DateOnlyToString, DateTimeOffsetToBinary, DateTimeOffsetToBytes, DateTimeOffsetToString,
    DateTimeToBinary, DateTimeToString, DateTimeToTicks, StringToDateTime, StringToTimeSpan,
    TimeOnlyToString, TimeOnlyToTicks, TimeSpanToString, TimeSpanToTicks,
};
use ferry_core::convert::MappingHints;
use ferry_core::stmt::{DateTimeKind, Type, Value, ValueDateTime};

const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

fn text(value: &str) -> Value {
    Value::String(value.to_string())
}

fn date_time(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32, nanos: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(y, m, d)
        .unwrap()
        .and_hms_nano_opt(h, min, s, nanos)
        .unwrap()
}

fn offset(text: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(text).unwrap()
}

// ---------------------------------------------------------------------------
// DateTime
// ---------------------------------------------------------------------------

#[test]
fn date_time_to_string() {
    let converter = DateTimeToString::converter();

    assert_eq!(
        converter
            .convert_to_provider(&date_time(2024, 3, 1, 13, 5, 9, 0).into())
            .unwrap(),
        text("2024-03-01 13:05:09")
    );
    assert_eq!(
        converter
            .convert_to_provider(&date_time(2024, 3, 1, 13, 5, 9, 120_000_000).into())
            .unwrap(),
        text("2024-03-01 13:05:09.12")
    );
    assert_eq!(converter.hints(), Some(&MappingHints::sized(48)));
}

#[test]
fn string_to_date_time_accepts_t_separator() {
    let converter = StringToDateTime::converter();

    assert_eq!(
        converter
            .convert_to_provider(&text("2024-03-01T13:05:09.5"))
            .unwrap(),
        date_time(2024, 3, 1, 13, 5, 9, 500_000_000).into()
    );
    assert!(converter
        .convert_to_provider(&text("yesterday"))
        .unwrap_err()
        .is_conversion_failed());
}

#[test]
fn date_time_ticks() {
    let converter = DateTimeToTicks::converter();
    let epoch = date_time(1970, 1, 1, 0, 0, 0, 0);

    assert_eq!(
        converter.convert_to_provider(&epoch.into()).unwrap(),
        Value::I64(UNIX_EPOCH_TICKS)
    );
    assert_eq!(
        converter
            .convert_from_provider(&Value::I64(UNIX_EPOCH_TICKS + 1))
            .unwrap(),
        date_time(1970, 1, 1, 0, 0, 0, 100).into()
    );
}

#[test]
fn date_time_binary_keeps_kind() {
    let converter = DateTimeToBinary::converter();
    let epoch = date_time(1970, 1, 1, 0, 0, 0, 0);

    let utc = Value::DateTime(ValueDateTime::new(epoch, DateTimeKind::Utc));
    let binary = converter.convert_to_provider(&utc).unwrap();
    assert_eq!(binary, Value::I64(UNIX_EPOCH_TICKS | 0x4000_0000_0000_0000));
    assert_eq!(converter.convert_from_provider(&binary).unwrap(), utc);

    let local = Value::DateTime(ValueDateTime::new(epoch, DateTimeKind::Local));
    let binary = converter.convert_to_provider(&local).unwrap();
    assert!(matches!(binary, Value::I64(v) if v < 0));
    assert_eq!(converter.convert_from_provider(&binary).unwrap(), local);

    let unspecified = Value::from(epoch);
    assert_eq!(
        converter.convert_to_provider(&unspecified).unwrap(),
        Value::I64(UNIX_EPOCH_TICKS)
    );
}

// ---------------------------------------------------------------------------
// DateTimeOffset
// ---------------------------------------------------------------------------

#[test]
fn date_time_offset_to_string() {
    let converter = DateTimeOffsetToString::converter();
    let value = offset("2024-03-01T13:05:09.25+05:30");

    assert_eq!(
        converter.convert_to_provider(&value.into()).unwrap(),
        text("2024-03-01 13:05:09.25+05:30")
    );
    assert_eq!(
        converter
            .convert_from_provider(&text("2024-03-01 13:05:09.25+05:30"))
            .unwrap(),
        value.into()
    );
}

#[test]
fn date_time_offset_binary() {
    let converter = DateTimeOffsetToBinary::converter();
    let value = offset("1970-01-01T00:00:00-01:00");

    let expected = ((UNIX_EPOCH_TICKS / 1000) << 11) | (-60i64 & 0x7FF);
    assert_eq!(
        converter.convert_to_provider(&value.into()).unwrap(),
        Value::I64(expected)
    );
    assert_eq!(
        converter
            .convert_from_provider(&Value::I64(expected))
            .unwrap(),
        value.into()
    );
}

#[test]
fn date_time_offset_binary_drops_sub_millisecond() {
    let converter = DateTimeOffsetToBinary::converter();
    let value = offset("2024-03-01T13:05:09.1234567+00:00");

    let binary = converter.convert_to_provider(&value.into()).unwrap();
    assert_eq!(
        converter.convert_from_provider(&binary).unwrap(),
        offset("2024-03-01T13:05:09.123+00:00").into()
    );
}

#[test]
fn date_time_offset_bytes() {
    let converter = DateTimeOffsetToBytes::converter();
    let value = offset("1970-01-01T00:00:00+02:00");

    let mut expected = UNIX_EPOCH_TICKS.to_be_bytes().to_vec();
    expected.extend_from_slice(&120i16.to_be_bytes());

    let bytes = converter.convert_to_provider(&value.into()).unwrap();
    assert_eq!(bytes, Value::Bytes(expected));
    assert_eq!(converter.convert_from_provider(&bytes).unwrap(), value.into());
    assert_eq!(converter.hints(), Some(&MappingHints::sized(12)));
}

#[test]
fn date_time_offset_binary_rejects_wide_offsets() {
    let converter = DateTimeOffsetToBinary::converter();

    // 1023 minutes is the widest offset the 11-bit field holds.
    let widest = offset("2024-03-01T13:05:09+17:03");
    let binary = converter.convert_to_provider(&widest.into()).unwrap();
    assert_eq!(converter.convert_from_provider(&binary).unwrap(), widest.into());

    let err = converter
        .convert_to_provider(&offset("2024-03-01T13:05:09+20:00").into())
        .unwrap_err();
    assert!(err.is_conversion_failed());
    assert!(err.to_string().contains("1200 minutes"));

    let err = converter
        .convert_to_provider(&offset("2024-03-01T13:05:09-17:05").into())
        .unwrap_err();
    assert!(err.is_conversion_failed());

    // The bytes form keeps a full i16 of minutes.
    let converter = DateTimeOffsetToBytes::converter();
    let value = offset("2024-03-01T13:05:09+20:00");
    let bytes = converter.convert_to_provider(&value.into()).unwrap();
    assert_eq!(converter.convert_from_provider(&bytes).unwrap(), value.into());
}

#[test]
fn date_time_offset_rejects_offset_seconds() {
    let value = date_time(2024, 3, 1, 13, 5, 9, 0)
        .and_local_timezone(FixedOffset::east_opt(3600 + 30).unwrap())
        .unwrap();

    let err = DateTimeOffsetToBinary::converter()
        .convert_to_provider(&value.into())
        .unwrap_err();
    assert!(err.is_conversion_failed());

    let err = DateTimeOffsetToBytes::converter()
        .convert_to_provider(&value.into())
        .unwrap_err();
    assert!(err.is_conversion_failed());
}

// ---------------------------------------------------------------------------
// Date, time of day and spans
// ---------------------------------------------------------------------------

#[test]
fn date_to_string() {
    let converter = DateOnlyToString::converter();
    let date = NaiveDate::from_ymd_opt(2024, 2, 29).unwrap();

    assert_eq!(
        converter.convert_to_provider(&date.into()).unwrap(),
        text("2024-02-29")
    );
    assert_eq!(
        converter.convert_from_provider(&text("2024-02-29")).unwrap(),
        date.into()
    );
    assert!(converter.convert_from_provider(&text("2023-02-29")).is_err());
    assert_eq!(converter.hints(), Some(&MappingHints::sized(10)));
}

#[test]
fn time_to_string_and_ticks() {
    let time = NaiveTime::from_hms_nano_opt(1, 2, 3, 400_000_000).unwrap();

    let converter = TimeOnlyToString::converter();
    assert_eq!(
        converter.convert_to_provider(&time.into()).unwrap(),
        text("01:02:03.4000000")
    );
    assert_eq!(
        converter.convert_from_provider(&text("01:02:03.4")).unwrap(),
        time.into()
    );

    let converter = TimeOnlyToTicks::converter();
    assert_eq!(
        converter.convert_to_provider(&time.into()).unwrap(),
        Value::I64(3_723 * 10_000_000 + 4_000_000)
    );
    assert!(converter
        .convert_from_provider(&Value::I64(24 * 3_600 * 10_000_000))
        .is_err());
}

#[test]
fn time_span_to_string() {
    let converter = TimeSpanToString::converter();
    let span = TimeDelta::days(1) + TimeDelta::hours(2) + TimeDelta::milliseconds(500);

    assert_eq!(
        converter.convert_to_provider(&span.into()).unwrap(),
        text("1.02:00:00.5000000")
    );
    assert_eq!(
        converter
            .convert_to_provider(&(-TimeDelta::minutes(90)).into())
            .unwrap(),
        text("-01:30:00")
    );
}

#[test]
fn string_to_time_span() {
    let converter = StringToTimeSpan::converter();

    assert_eq!(converter.model_ty(), &Type::String);
    assert_eq!(
        converter.convert_to_provider(&text("00:45")).unwrap(),
        TimeDelta::minutes(45).into()
    );
    assert!(converter.convert_to_provider(&text("25:00")).is_err());
}

#[test]
fn time_span_ticks() {
    let converter = TimeSpanToTicks::converter();

    assert_eq!(
        converter
            .convert_to_provider(&TimeDelta::seconds(-2).into())
            .unwrap(),
        Value::I64(-20_000_000)
    );
    assert_eq!(
        converter
            .convert_from_provider(&Value::I64(15))
            .unwrap(),
        TimeDelta::nanoseconds(1_500).into()
    );
}
