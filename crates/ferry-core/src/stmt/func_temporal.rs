use super::{DateTimeKind, Value, ValueDateTime};
use crate::{Error, Result};
use chrono::{
    DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
};

/// Conversions for dates, times and spans.
///
/// Tick-based forms count 100-nanosecond intervals. Date/time ticks start at
/// `0001-01-01 00:00:00`; time-of-day ticks start at midnight.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncTemporal {
    /// `yyyy-MM-dd HH:mm:ss` with up to seven fraction digits
    DateTimeToString,
    DateTimeParse,

    /// Ticks with the [`DateTimeKind`] packed into the top two bits
    DateTimeToBinary,
    DateTimeFromBinary,

    DateTimeToTicks,
    DateTimeFromTicks,

    /// Same as [`FuncTemporal::DateTimeToString`] followed by `+hh:mm`
    DateTimeOffsetToString,
    DateTimeOffsetParse,

    /// Millisecond-precision ticks in the upper 53 bits, offset minutes in
    /// the lower 11
    DateTimeOffsetToBinary,
    DateTimeOffsetFromBinary,

    /// 8 big-endian bytes of ticks followed by 2 big-endian bytes of offset
    /// minutes
    DateTimeOffsetToBytes,
    DateTimeOffsetFromBytes,

    /// `yyyy-MM-dd`
    DateToString,
    DateParse,

    /// `HH:mm:ss.fffffff`
    TimeToString,
    TimeParse,
    TimeToTicks,
    TimeFromTicks,

    /// `[-][d.]hh:mm:ss[.fffffff]`
    DurationToString,
    DurationParse,
    DurationToTicks,
    DurationFromTicks,
}

const TICKS_PER_SECOND: i64 = 10_000_000;
const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;
const UNIX_EPOCH_TICKS: i64 = 621_355_968_000_000_000;

/// Ticks of `9999-12-31 23:59:59.9999999`
pub(crate) const MAX_TICKS: i64 = 3_155_378_975_999_999_999;

const KIND_UTC: i64 = 0x4000_0000_0000_0000;
const KIND_LOCAL: i64 = i64::MIN;
const TICKS_MASK: i64 = 0x3FFF_FFFF_FFFF_FFFF;

const DATE_TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

impl FuncTemporal {
    pub(crate) fn eval(&self, value: Value) -> Result<Value> {
        use FuncTemporal::*;

        Ok(match self {
            DateTimeToString => {
                let value = ValueDateTime::try_from(value)?.value;
                Value::String(format_date_time(&value))
            }
            DateTimeParse => ValueDateTime::unspecified(parse_date_time(&text(value)?)?).into(),
            DateTimeToBinary => {
                let value = ValueDateTime::try_from(value)?;
                let ticks = to_ticks(&value.value)?;

                Value::I64(match value.kind {
                    DateTimeKind::Unspecified => ticks,
                    DateTimeKind::Utc => ticks | KIND_UTC,
                    DateTimeKind::Local => ticks | KIND_LOCAL,
                })
            }
            DateTimeFromBinary => {
                let binary = i64::try_from(value)?;
                let kind = match (binary as u64) >> 62 {
                    0 => DateTimeKind::Unspecified,
                    1 => DateTimeKind::Utc,
                    _ => DateTimeKind::Local,
                };

                ValueDateTime::new(from_ticks(binary & TICKS_MASK)?, kind).into()
            }
            DateTimeToTicks => Value::I64(to_ticks(&ValueDateTime::try_from(value)?.value)?),
            DateTimeFromTicks => ValueDateTime::unspecified(from_ticks(i64::try_from(value)?)?).into(),
            DateTimeOffsetToString => {
                let value = DateTime::<FixedOffset>::try_from(value)?;
                Value::String(format!(
                    "{}{}",
                    format_date_time(&value.naive_local()),
                    value.format("%:z")
                ))
            }
            DateTimeOffsetParse => parse_date_time_offset(&text(value)?)?.into(),
            DateTimeOffsetToBinary => {
                let value = DateTime::<FixedOffset>::try_from(value)?;
                let ticks = to_ticks(&value.naive_local())?;
                let minutes = offset_minutes(&value)?;

                if !BINARY_OFFSET_MINUTES.contains(&minutes) {
                    return Err(Error::conversion_failed(format!(
                        "offset of {minutes} minutes does not fit the binary form"
                    )));
                }

                Value::I64(((ticks / 1000) << 11) | (i64::from(minutes) & 0x7FF))
            }
            DateTimeOffsetFromBinary => {
                let binary = i64::try_from(value)?;
                with_offset((binary >> 11) * 1000, (binary << 53) >> 53)?.into()
            }
            DateTimeOffsetToBytes => {
                let value = DateTime::<FixedOffset>::try_from(value)?;
                let ticks = to_ticks(&value.naive_local())?;

                let mut bytes = Vec::with_capacity(10);
                bytes.extend_from_slice(&ticks.to_be_bytes());
                bytes.extend_from_slice(&offset_minutes(&value)?.to_be_bytes());
                Value::Bytes(bytes)
            }
            DateTimeOffsetFromBytes => {
                let bytes = Vec::<u8>::try_from(value)?;
                let Ok(bytes) = <[u8; 10]>::try_from(bytes.as_slice()) else {
                    return Err(Error::conversion_failed(format!(
                        "expected 10 bytes for a date/time with offset; got {}",
                        bytes.len()
                    )));
                };

                let mut ticks = [0; 8];
                ticks.copy_from_slice(&bytes[..8]);
                let minutes = i16::from_be_bytes([bytes[8], bytes[9]]);

                with_offset(i64::from_be_bytes(ticks), minutes.into())?.into()
            }
            DateToString => Value::String(NaiveDate::try_from(value)?.format("%Y-%m-%d").to_string()),
            DateParse => {
                let text = text(value)?;
                NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d")
                    .map_err(|_| parse_failed(&text, "a date"))?
                    .into()
            }
            TimeToString => {
                let value = NaiveTime::try_from(value)?;
                Value::String(format!(
                    "{}.{:07}",
                    value.format("%H:%M:%S"),
                    subsec_ticks(value.nanosecond())
                ))
            }
            TimeParse => {
                let text = text(value)?;
                NaiveTime::parse_from_str(text.trim(), "%H:%M:%S%.f")
                    .or_else(|_| NaiveTime::parse_from_str(text.trim(), "%H:%M"))
                    .map_err(|_| parse_failed(&text, "a time"))?
                    .into()
            }
            TimeToTicks => {
                let value = NaiveTime::try_from(value)?;
                Value::I64(
                    i64::from(value.num_seconds_from_midnight()) * TICKS_PER_SECOND
                        + subsec_ticks(value.nanosecond()),
                )
            }
            TimeFromTicks => {
                let ticks = i64::try_from(value)?;
                if !(0..TICKS_PER_DAY).contains(&ticks) {
                    return Err(Error::conversion_failed(format!(
                        "{ticks} ticks is not a time of day"
                    )));
                }

                NaiveTime::from_num_seconds_from_midnight_opt(
                    (ticks / TICKS_PER_SECOND) as u32,
                    ((ticks % TICKS_PER_SECOND) * 100) as u32,
                )
                .ok_or_else(|| Error::conversion_failed(format!("{ticks} ticks is not a time of day")))?
                .into()
            }
            DurationToString => Value::String(format_duration(duration_to_ticks(
                &TimeDelta::try_from(value)?,
            )?)),
            DurationParse => duration_from_ticks(parse_duration(&text(value)?)?).into(),
            DurationToTicks => Value::I64(duration_to_ticks(&TimeDelta::try_from(value)?)?),
            DurationFromTicks => duration_from_ticks(i64::try_from(value)?).into(),
        })
    }
}

fn text(value: Value) -> Result<String> {
    String::try_from(value)
}

fn parse_failed(text: &str, what: &str) -> Error {
    Error::conversion_failed(format!("cannot parse '{text}' as {what}"))
}

/// Leap seconds fold into the last tick of the second.
fn subsec_ticks(nanos: u32) -> i64 {
    i64::from(nanos.min(999_999_999) / 100)
}

/// Ticks since `0001-01-01 00:00:00`.
pub(crate) fn to_ticks(value: &NaiveDateTime) -> Result<i64> {
    let utc = value.and_utc();

    utc.timestamp()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(subsec_ticks(utc.timestamp_subsec_nanos())))
        .and_then(|ticks| ticks.checked_add(UNIX_EPOCH_TICKS))
        .filter(|ticks| (0..=MAX_TICKS).contains(ticks))
        .ok_or_else(|| {
            Error::conversion_failed(format!("{value} is outside the representable date range"))
        })
}

pub(crate) fn from_ticks(ticks: i64) -> Result<NaiveDateTime> {
    let out_of_range =
        || Error::conversion_failed(format!("{ticks} ticks is outside the representable date range"));

    if !(0..=MAX_TICKS).contains(&ticks) {
        return Err(out_of_range());
    }

    let since_epoch = ticks - UNIX_EPOCH_TICKS;
    let secs = since_epoch.div_euclid(TICKS_PER_SECOND);
    let nanos = (since_epoch.rem_euclid(TICKS_PER_SECOND) * 100) as u32;

    DateTime::from_timestamp(secs, nanos)
        .map(|value| value.naive_utc())
        .ok_or_else(out_of_range)
}

fn format_date_time(value: &NaiveDateTime) -> String {
    let ticks = subsec_ticks(value.nanosecond());

    if ticks == 0 {
        value.format(DATE_TIME_FORMAT).to_string()
    } else {
        let fraction = format!("{ticks:07}");
        format!(
            "{}.{}",
            value.format(DATE_TIME_FORMAT),
            fraction.trim_end_matches('0')
        )
    }
}

fn parse_date_time(text: &str) -> Result<NaiveDateTime> {
    let trimmed = text.trim();

    NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f"))
        .map_err(|_| parse_failed(text, "a date/time"))
}

fn parse_date_time_offset(text: &str) -> Result<DateTime<FixedOffset>> {
    let trimmed = text.trim();

    DateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f%:z")
        .or_else(|_| DateTime::parse_from_str(trimmed, "%Y-%m-%dT%H:%M:%S%.f%:z"))
        .map_err(|_| parse_failed(text, "a date/time with offset"))
}

/// Signed 11-bit range of the offset field in the binary form.
const BINARY_OFFSET_MINUTES: std::ops::RangeInclusive<i16> = -1024..=1023;

fn offset_minutes(value: &DateTime<FixedOffset>) -> Result<i16> {
    let seconds = value.offset().local_minus_utc();

    if seconds % 60 != 0 {
        return Err(Error::conversion_failed(format!(
            "offset {} is not a whole number of minutes",
            value.offset()
        )));
    }

    // Fixed offsets are bounded by a day, so the minutes fit in an i16.
    Ok((seconds / 60) as i16)
}

fn with_offset(ticks: i64, minutes: i64) -> Result<DateTime<FixedOffset>> {
    let local = from_ticks(ticks)?;
    let offset = i32::try_from(minutes)
        .ok()
        .and_then(|minutes| FixedOffset::east_opt(minutes * 60))
        .ok_or_else(|| Error::conversion_failed(format!("{minutes} minutes is not a valid offset")))?;

    offset.from_local_datetime(&local).single().ok_or_else(|| {
        Error::conversion_failed(format!("{local} does not exist at offset {offset}"))
    })
}

fn duration_to_ticks(value: &TimeDelta) -> Result<i64> {
    value
        .num_seconds()
        .checked_mul(TICKS_PER_SECOND)
        .and_then(|ticks| ticks.checked_add(i64::from(value.subsec_nanos() / 100)))
        .ok_or_else(|| Error::conversion_failed(format!("{value} does not fit in 64-bit ticks")))
}

fn duration_from_ticks(ticks: i64) -> TimeDelta {
    TimeDelta::seconds(ticks / TICKS_PER_SECOND)
        + TimeDelta::nanoseconds((ticks % TICKS_PER_SECOND) * 100)
}

fn format_duration(ticks: i64) -> String {
    let sign = if ticks < 0 { "-" } else { "" };
    let ticks = ticks.unsigned_abs();

    let days = ticks / TICKS_PER_DAY as u64;
    let hours = ticks % TICKS_PER_DAY as u64 / TICKS_PER_HOUR as u64;
    let minutes = ticks % TICKS_PER_HOUR as u64 / TICKS_PER_MINUTE as u64;
    let seconds = ticks % TICKS_PER_MINUTE as u64 / TICKS_PER_SECOND as u64;
    let fraction = ticks % TICKS_PER_SECOND as u64;

    let days = if days > 0 {
        format!("{days}.")
    } else {
        String::new()
    };
    let fraction = if fraction > 0 {
        format!(".{fraction:07}")
    } else {
        String::new()
    };

    format!("{sign}{days}{hours:02}:{minutes:02}:{seconds:02}{fraction}")
}

/// Parses `[-][d.]hh:mm[:ss[.fffffff]]` into ticks.
fn parse_duration(text: &str) -> Result<i64> {
    let failed = || parse_failed(text, "a time span");

    let number = |digits: &str, max: i64| -> Result<i64> {
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(failed());
        }
        let n: i64 = digits.parse().map_err(|_| failed())?;
        if n > max {
            return Err(failed());
        }
        Ok(n)
    };

    let trimmed = text.trim();
    let (negative, rest) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed),
    };

    let mut parts = rest.split(':');
    let first = parts.next().ok_or_else(failed)?;
    let minutes = parts.next().ok_or_else(failed)?;
    let seconds = parts.next();
    if parts.next().is_some() {
        return Err(failed());
    }

    let (days, hours) = first.split_once('.').unwrap_or(("0", first));
    let (seconds, fraction) = match seconds {
        Some(seconds) => seconds.split_once('.').unwrap_or((seconds, "")),
        None => ("0", ""),
    };

    let fraction = if fraction.is_empty() {
        0
    } else if fraction.len() > 7 {
        return Err(failed());
    } else {
        number(&format!("{fraction:0<7}"), TICKS_PER_SECOND - 1)?
    };

    let ticks = number(days, i64::MAX / TICKS_PER_DAY)?
        .checked_mul(TICKS_PER_DAY)
        .and_then(|ticks| ticks.checked_add(number(hours, 23).ok()? * TICKS_PER_HOUR))
        .and_then(|ticks| ticks.checked_add(number(minutes, 59).ok()? * TICKS_PER_MINUTE))
        .and_then(|ticks| ticks.checked_add(number(seconds, 59).ok()? * TICKS_PER_SECOND))
        .and_then(|ticks| ticks.checked_add(fraction))
        .ok_or_else(failed)?;

    Ok(if negative { -ticks } else { ticks })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticks_epoch() {
        let start = NaiveDate::from_ymd_opt(1, 1, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        assert_eq!(to_ticks(&start).unwrap(), 0);
        assert_eq!(from_ticks(0).unwrap(), start);

        let end = NaiveDate::from_ymd_opt(9999, 12, 31)
            .unwrap()
            .and_hms_nano_opt(23, 59, 59, 999_999_900)
            .unwrap();
        assert_eq!(to_ticks(&end).unwrap(), MAX_TICKS);
    }

    #[test]
    fn duration_text() {
        assert_eq!(format_duration(0), "00:00:00");
        assert_eq!(format_duration(-(TICKS_PER_DAY + 5)), "-1.00:00:00.0000005");
        assert_eq!(
            parse_duration("1.02:03:04.5").unwrap(),
            TICKS_PER_DAY
                + 2 * TICKS_PER_HOUR
                + 3 * TICKS_PER_MINUTE
                + 4 * TICKS_PER_SECOND
                + 5_000_000
        );
        assert_eq!(parse_duration("-00:30").unwrap(), -30 * TICKS_PER_MINUTE);
        assert!(parse_duration("24:00:00").is_err());
        assert!(parse_duration("1:2:3:4").is_err());
        assert!(parse_duration("abc").is_err());
    }
}
