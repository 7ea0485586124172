use super::{Type, Value, ValueDateTime, ValueEnum};
use crate::{Error, Result};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use rust_decimal::Decimal;
use serde_json::Value as Json;
use std::str::FromStr;
use url::Url;
use uuid::Uuid;

/// Conversions between lists and JSON array text.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncJson {
    /// Serializes a list as a JSON array
    Serialize,

    /// Deserializes JSON text as a value of the given list type
    Deserialize(Type),
}

impl FuncJson {
    pub(crate) fn eval(&self, value: Value) -> Result<Value> {
        match self {
            FuncJson::Serialize => Ok(Value::String(serde_json::to_string(&to_json(&value)?)?)),
            FuncJson::Deserialize(ty) => {
                let json: Json = serde_json::from_str(&String::try_from(value)?)?;
                from_json(json, ty)
            }
        }
    }
}

/// Returns `true` if values of `ty` can be stored as JSON list elements.
pub(crate) fn is_json_element(ty: &Type) -> bool {
    match ty {
        Type::Bool
        | Type::Char
        | Type::String
        | Type::Decimal
        | Type::Uuid
        | Type::Url
        | Type::DateTime
        | Type::DateTimeOffset
        | Type::Date
        | Type::Time
        | Type::Enum(_) => true,
        Type::List(item) | Type::Option(item) => is_json_element(item),
        ty => ty.is_numeric(),
    }
}

fn to_json(value: &Value) -> Result<Json> {
    Ok(match value {
        Value::Null => Json::Null,
        Value::Bool(v) => Json::Bool(*v),
        Value::Char(v) => Json::String(v.to_string()),
        Value::I8(v) => (*v).into(),
        Value::I16(v) => (*v).into(),
        Value::I32(v) => (*v).into(),
        Value::I64(v) => (*v).into(),
        Value::U8(v) => (*v).into(),
        Value::U16(v) => (*v).into(),
        Value::U32(v) => (*v).into(),
        Value::U64(v) => (*v).into(),
        Value::F32(v) => float(f64::from(*v))?,
        Value::F64(v) => float(*v)?,
        // Kept as text so no precision is lost to `f64`.
        Value::Decimal(v) => Json::String(v.to_string()),
        Value::String(v) => Json::String(v.clone()),
        Value::Uuid(v) => Json::String(v.hyphenated().to_string()),
        Value::Url(v) => Json::String(v.to_string()),
        Value::DateTime(v) => Json::String(v.value.format("%Y-%m-%dT%H:%M:%S%.f").to_string()),
        Value::DateTimeOffset(v) => Json::String(v.to_rfc3339()),
        Value::Date(v) => Json::String(v.format("%Y-%m-%d").to_string()),
        Value::Time(v) => Json::String(v.format("%H:%M:%S%.f").to_string()),
        Value::Enum(v) => i64::try_from(v.discriminant)
            .map(Json::from)
            .or_else(|_| u64::try_from(v.discriminant).map(Json::from))
            .map_err(|_| Error::conversion_failed("enum discriminant does not fit in JSON"))?,
        Value::List(items) => Json::Array(items.iter().map(to_json).collect::<Result<_>>()?),
        value => {
            return Err(Error::expression_evaluation_failed(format!(
                "{} cannot be stored as JSON",
                value.variant_name()
            )))
        }
    })
}

fn float(value: f64) -> Result<Json> {
    serde_json::Number::from_f64(value)
        .map(Json::Number)
        .ok_or_else(|| Error::conversion_failed(format!("{value} cannot be stored as JSON")))
}

fn from_json(json: Json, ty: &Type) -> Result<Value> {
    let mismatch = |json: &Json| Error::conversion_failed(format!("expected JSON {ty}; got {json}"));

    if json.is_null() {
        return Ok(Value::Null);
    }

    Ok(match ty {
        Type::Option(inner) => from_json(json, inner)?,
        Type::List(item) => match json {
            Json::Array(items) => Value::List(
                items
                    .into_iter()
                    .map(|json| from_json(json, item))
                    .collect::<Result<_>>()?,
            ),
            json => return Err(mismatch(&json)),
        },
        Type::Bool => Value::Bool(json.as_bool().ok_or_else(|| mismatch(&json))?),
        Type::F32 => Value::F32(json.as_f64().ok_or_else(|| mismatch(&json))? as f32),
        Type::F64 => Value::F64(json.as_f64().ok_or_else(|| mismatch(&json))?),
        ty if ty.is_integer() => {
            let n = json_integer(&json)
                .filter(|n| ty.fits_integer(*n))
                .ok_or_else(|| mismatch(&json))?;

            match i64::try_from(n) {
                Ok(n) => ty.cast(Value::I64(n))?,
                Err(_) => ty.cast(Value::U64(n as u64))?,
            }
        }
        Type::Enum(enum_ty) => {
            let n = json_integer(&json)
                .filter(|n| enum_ty.is_representable(*n))
                .ok_or_else(|| mismatch(&json))?;

            Value::Enum(ValueEnum::new(n))
        }
        _ => {
            let text = match json {
                Json::String(text) => text,
                json => return Err(mismatch(&json)),
            };

            match ty {
                Type::Char => {
                    let mut chars = text.chars();
                    match (chars.next(), chars.next()) {
                        (Some(c), None) => Value::Char(c),
                        _ => return Err(mismatch(&Json::String(text))),
                    }
                }
                Type::String => Value::String(text),
                Type::Decimal => Value::Decimal(Decimal::from_str(&text)?),
                Type::Uuid => Value::Uuid(Uuid::parse_str(&text)?),
                Type::Url => Value::Url(Url::parse(&text)?),
                Type::DateTime => ValueDateTime::unspecified(NaiveDateTime::parse_from_str(
                    &text,
                    "%Y-%m-%dT%H:%M:%S%.f",
                )?)
                .into(),
                Type::DateTimeOffset => DateTime::parse_from_rfc3339(&text)?.into(),
                Type::Date => NaiveDate::parse_from_str(&text, "%Y-%m-%d")?.into(),
                Type::Time => NaiveTime::parse_from_str(&text, "%H:%M:%S%.f")?.into(),
                _ => return Err(mismatch(&Json::String(text))),
            }
        }
    })
}

fn json_integer(json: &Json) -> Option<i128> {
    json.as_i64()
        .map(i128::from)
        .or_else(|| json.as_u64().map(i128::from))
}
