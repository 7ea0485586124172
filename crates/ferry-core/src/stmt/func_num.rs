use super::{Type, Value};
use crate::{Error, Result};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Conversions between numbers and their text and binary forms.
#[derive(Debug, Clone, PartialEq)]
pub enum FuncNum {
    /// Formats a number using its invariant display form
    ToString,

    /// Parses text as the given numeric type
    Parse(Type),

    /// Encodes a number as fixed-width big-endian bytes
    ToBytes,

    /// Decodes fixed-width big-endian bytes as the given numeric type
    FromBytes(Type),
}

impl FuncNum {
    pub(crate) fn eval(&self, value: Value) -> Result<Value> {
        match self {
            FuncNum::ToString => to_string(value),
            FuncNum::Parse(ty) => parse(&String::try_from(value)?, ty),
            FuncNum::ToBytes => to_bytes(value),
            FuncNum::FromBytes(ty) => from_bytes(&Vec::<u8>::try_from(value)?, ty),
        }
    }
}

fn to_string(value: Value) -> Result<Value> {
    Ok(Value::String(match value {
        Value::I8(v) => v.to_string(),
        Value::I16(v) => v.to_string(),
        Value::I32(v) => v.to_string(),
        Value::I64(v) => v.to_string(),
        Value::U8(v) => v.to_string(),
        Value::U16(v) => v.to_string(),
        Value::U32(v) => v.to_string(),
        Value::U64(v) => v.to_string(),
        Value::F32(v) => v.to_string(),
        Value::F64(v) => v.to_string(),
        Value::Decimal(v) => v.to_string(),
        value => {
            return Err(Error::expression_evaluation_failed(format!(
                "cannot format {} as a number",
                value.variant_name()
            )))
        }
    }))
}

fn parse(text: &str, ty: &Type) -> Result<Value> {
    let text = text.trim();
    let failed = || Error::conversion_failed(format!("cannot parse '{text}' as {ty}"));

    Ok(match ty {
        Type::I8 => Value::I8(text.parse().map_err(|_| failed())?),
        Type::I16 => Value::I16(text.parse().map_err(|_| failed())?),
        Type::I32 => Value::I32(text.parse().map_err(|_| failed())?),
        Type::I64 => Value::I64(text.parse().map_err(|_| failed())?),
        Type::U8 => Value::U8(text.parse().map_err(|_| failed())?),
        Type::U16 => Value::U16(text.parse().map_err(|_| failed())?),
        Type::U32 => Value::U32(text.parse().map_err(|_| failed())?),
        Type::U64 => Value::U64(text.parse().map_err(|_| failed())?),
        Type::F32 => Value::F32(text.parse().map_err(|_| failed())?),
        Type::F64 => Value::F64(text.parse().map_err(|_| failed())?),
        Type::Decimal => Value::Decimal(
            Decimal::from_str(text)
                .or_else(|_| Decimal::from_scientific(text))
                .map_err(|_| failed())?,
        ),
        _ => {
            return Err(Error::expression_evaluation_failed(format!(
                "cannot parse text as {ty}"
            )))
        }
    })
}

fn to_bytes(value: Value) -> Result<Value> {
    Ok(Value::Bytes(match value {
        Value::I8(v) => v.to_be_bytes().to_vec(),
        Value::I16(v) => v.to_be_bytes().to_vec(),
        Value::I32(v) => v.to_be_bytes().to_vec(),
        Value::I64(v) => v.to_be_bytes().to_vec(),
        Value::U8(v) => v.to_be_bytes().to_vec(),
        Value::U16(v) => v.to_be_bytes().to_vec(),
        Value::U32(v) => v.to_be_bytes().to_vec(),
        Value::U64(v) => v.to_be_bytes().to_vec(),
        Value::F32(v) => v.to_be_bytes().to_vec(),
        Value::F64(v) => v.to_be_bytes().to_vec(),
        Value::Decimal(v) => decimal_to_bytes(v).to_vec(),
        value => {
            return Err(Error::expression_evaluation_failed(format!(
                "cannot encode {} as number bytes",
                value.variant_name()
            )))
        }
    }))
}

macro_rules! decode {
    ($bytes:expr, $ty:ty) => {
        <$ty>::from_be_bytes(
            $bytes
                .try_into()
                .map_err(|_| crate::err!("expected {} bytes", core::mem::size_of::<$ty>()))?,
        )
    };
}

fn from_bytes(bytes: &[u8], ty: &Type) -> Result<Value> {
    let Some(width) = ty.byte_width() else {
        return Err(Error::expression_evaluation_failed(format!(
            "cannot decode bytes as {ty}"
        )));
    };

    // An empty array decodes as zero.
    let zeroed;
    let bytes = if bytes.is_empty() {
        zeroed = vec![0; width];
        &zeroed[..]
    } else if bytes.len() != width {
        return Err(Error::conversion_failed(format!(
            "expected {width} bytes for {ty}; got {}",
            bytes.len()
        )));
    } else {
        bytes
    };

    Ok(match ty {
        Type::I8 => Value::I8(decode!(bytes, i8)),
        Type::I16 => Value::I16(decode!(bytes, i16)),
        Type::I32 => Value::I32(decode!(bytes, i32)),
        Type::I64 => Value::I64(decode!(bytes, i64)),
        Type::U8 => Value::U8(decode!(bytes, u8)),
        Type::U16 => Value::U16(decode!(bytes, u16)),
        Type::U32 => Value::U32(decode!(bytes, u32)),
        Type::U64 => Value::U64(decode!(bytes, u64)),
        Type::F32 => Value::F32(decode!(bytes, f32)),
        Type::F64 => Value::F64(decode!(bytes, f64)),
        Type::Decimal => Value::Decimal(decimal_from_bytes(bytes)?),
        _ => unreachable!("byte_width is only defined for numeric types"),
    })
}

const SIGN_MASK: u32 = 0x8000_0000;
const MAX_SCALE: u32 = 28;

/// Lays a decimal out as four big-endian 32-bit words: flags, hi, mid, lo.
///
/// The flags word holds the scale in bits 16..24 and the sign in bit 31.
fn decimal_to_bytes(value: Decimal) -> [u8; 16] {
    let mantissa = value.mantissa().unsigned_abs();
    let lo = mantissa as u32;
    let mid = (mantissa >> 32) as u32;
    let hi = (mantissa >> 64) as u32;

    let mut flags = value.scale() << 16;
    if value.is_sign_negative() {
        flags |= SIGN_MASK;
    }

    let mut out = [0; 16];
    out[0..4].copy_from_slice(&flags.to_be_bytes());
    out[4..8].copy_from_slice(&hi.to_be_bytes());
    out[8..12].copy_from_slice(&mid.to_be_bytes());
    out[12..16].copy_from_slice(&lo.to_be_bytes());
    out
}

fn decimal_from_bytes(bytes: &[u8]) -> Result<Decimal> {
    let word = |i: usize| -> Result<u32> { Ok(decode!(&bytes[i * 4..i * 4 + 4], u32)) };

    let flags = word(0)?;
    let hi = word(1)?;
    let mid = word(2)?;
    let lo = word(3)?;

    let scale = (flags >> 16) & 0xFF;
    if scale > MAX_SCALE {
        return Err(Error::conversion_failed(format!(
            "decimal scale {scale} exceeds the maximum of {}",
            MAX_SCALE
        )));
    }

    Ok(Decimal::from_parts(
        lo,
        mid,
        hi,
        flags & SIGN_MASK != 0,
        scale,
    ))
}
