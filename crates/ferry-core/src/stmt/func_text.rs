use super::{TypeEnum, Value, ValueEnum};
use crate::{Error, Result};
use base64::{engine::general_purpose::STANDARD, Engine as _};
use url::Url;
use uuid::Uuid;

/// Conversions to and from text and raw bytes.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncText {
    /// `char` to a one-character string
    CharToString,

    /// First character of a string, or `'\0'` when empty
    StringToChar,

    /// Tests whether the first character matches `char`, ignoring case.
    /// An empty string never matches.
    FirstCharEq(char),

    /// Parses `true` or `false`, ignoring case and surrounding whitespace
    ParseBool,

    /// String to its UTF-8 bytes
    Utf8Encode,

    /// UTF-8 bytes to a string
    Utf8Decode,

    /// Bytes to standard base64
    Base64Encode,

    /// Standard base64 to bytes
    Base64Decode,

    /// Hyphenated lowercase GUID
    GuidToString,

    /// Parses a GUID in any of the common textual forms
    GuidParse,

    /// GUID to 16 bytes with the first three fields little-endian
    GuidToBytes,

    /// Inverse of [`FuncText::GuidToBytes`]
    GuidFromBytes,

    UrlToString,

    UrlParse,

    /// Enum to its variant name, or its number when no variant matches
    EnumToString(TypeEnum),

    /// Text to an enum value of the given type
    EnumParse(TypeEnum),
}

impl FuncText {
    pub(crate) fn eval(&self, value: Value) -> Result<Value> {
        Ok(match self {
            FuncText::CharToString => Value::String(char::try_from(value)?.to_string()),
            FuncText::StringToChar => {
                Value::Char(String::try_from(value)?.chars().next().unwrap_or('\0'))
            }
            FuncText::FirstCharEq(expected) => {
                let text = String::try_from(value)?;
                let matches = text
                    .chars()
                    .next()
                    .is_some_and(|c| c.to_uppercase().eq(expected.to_uppercase()));
                Value::Bool(matches)
            }
            FuncText::ParseBool => {
                let text = String::try_from(value)?;
                let text = text.trim();

                if text.eq_ignore_ascii_case("true") {
                    Value::Bool(true)
                } else if text.eq_ignore_ascii_case("false") {
                    Value::Bool(false)
                } else {
                    return Err(Error::conversion_failed(format!(
                        "cannot parse '{text}' as bool"
                    )));
                }
            }
            FuncText::Utf8Encode => Value::Bytes(String::try_from(value)?.into_bytes()),
            FuncText::Utf8Decode => Value::String(String::from_utf8(Vec::try_from(value)?)?),
            FuncText::Base64Encode => Value::String(STANDARD.encode(Vec::<u8>::try_from(value)?)),
            FuncText::Base64Decode => Value::Bytes(STANDARD.decode(String::try_from(value)?)?),
            FuncText::GuidToString => Value::String(Uuid::try_from(value)?.hyphenated().to_string()),
            FuncText::GuidParse => Value::Uuid(Uuid::parse_str(String::try_from(value)?.trim())?),
            FuncText::GuidToBytes => Value::Bytes(Uuid::try_from(value)?.to_bytes_le().to_vec()),
            FuncText::GuidFromBytes => {
                let bytes = Vec::<u8>::try_from(value)?;
                let bytes: [u8; 16] = bytes.as_slice().try_into().map_err(|_| {
                    Error::conversion_failed(format!(
                        "expected 16 bytes for a GUID; got {}",
                        bytes.len()
                    ))
                })?;
                Value::Uuid(Uuid::from_bytes_le(bytes))
            }
            FuncText::UrlToString => Value::String(Url::try_from(value)?.into()),
            FuncText::UrlParse => Value::Url(Url::parse(&String::try_from(value)?)?),
            FuncText::EnumToString(ty) => {
                let discriminant = enum_discriminant(value)?;

                Value::String(match ty.variant_by_discriminant(discriminant) {
                    Some(variant) => variant.name.to_string(),
                    None => discriminant.to_string(),
                })
            }
            FuncText::EnumParse(ty) => {
                let text = String::try_from(value)?;
                Value::Enum(ValueEnum::new(parse_enum(ty, text.trim())))
            }
        })
    }
}

fn enum_discriminant(value: Value) -> Result<i128> {
    match value {
        Value::Enum(value) => Ok(value.discriminant),
        value => Err(Error::expression_evaluation_failed(format!(
            "expected an enum value; got {}",
            value.variant_name()
        ))),
    }
}

/// Matches the exact variant name first, then the name ignoring case, then
/// an integer in range. Anything else maps to discriminant 0.
fn parse_enum(ty: &TypeEnum, text: &str) -> i128 {
    if let Some(variant) = ty
        .variant_by_name(text, false)
        .or_else(|| ty.variant_by_name(text, true))
    {
        return variant.discriminant;
    }

    match text.parse::<i128>() {
        Ok(discriminant) if ty.is_representable(discriminant) => discriminant,
        _ => 0,
    }
}
