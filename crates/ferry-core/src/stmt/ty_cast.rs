use crate::{
    stmt::{Type, Value, ValueEnum},
    Error, Result,
};
use rust_decimal::{
    prelude::{FromPrimitive, ToPrimitive},
    Decimal,
};

/// A numeric operand normalized for casting.
#[derive(Debug, Clone, Copy)]
enum Num {
    Int(i128),
    Float(f64),
    Decimal(Decimal),
}

macro_rules! int_cast {
    ($num:expr, $ty:ty, $variant:ident) => {
        Value::$variant(match $num {
            Num::Int(v) => v as $ty,
            Num::Float(v) => v as $ty,
            Num::Decimal(v) => decimal_to_int::<$ty>(v, &Type::$variant)?,
        })
    };
}

impl Type {
    /// Casts a value to this type.
    ///
    /// Numeric casts follow unchecked integer semantics: integer narrowing
    /// wraps, float to integer saturates. Conversions out of `Decimal` are
    /// checked and fail when the value does not fit. `char` casts go through
    /// the character's code point and fail when the code point does not fit
    /// the target. Enum casts go through the enum's underlying type. Null
    /// values are passed through.
    pub fn cast(&self, value: Value) -> Result<Value> {
        if value.is_null() {
            return Ok(value);
        }

        let target = self.unwrap_option();

        if value.is_a(target) {
            return Ok(value);
        }

        let num = match value {
            Value::I8(v) => Num::Int(v.into()),
            Value::I16(v) => Num::Int(v.into()),
            Value::I32(v) => Num::Int(v.into()),
            Value::I64(v) => Num::Int(v.into()),
            Value::U8(v) => Num::Int(v.into()),
            Value::U16(v) => Num::Int(v.into()),
            Value::U32(v) => Num::Int(v.into()),
            Value::U64(v) => Num::Int(v.into()),
            Value::F32(v) => Num::Float(v.into()),
            Value::F64(v) => Num::Float(v),
            Value::Decimal(v) => Num::Decimal(v),
            Value::Char(v) => {
                let code = u32::from(v);

                if !code_point_fits(code, target) {
                    return Err(Error::conversion_failed(format!(
                        "char {v:?} (U+{code:04X}) does not fit in {target}"
                    )));
                }

                Num::Int(code.into())
            }
            Value::Enum(v) => Num::Int(v.discriminant),
            value => {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot cast {} to {target}",
                    value.variant_name()
                )))
            }
        };

        num.cast(target)
    }
}

impl Num {
    fn cast(self, target: &Type) -> Result<Value> {
        Ok(match target {
            Type::I8 => int_cast!(self, i8, I8),
            Type::I16 => int_cast!(self, i16, I16),
            Type::I32 => int_cast!(self, i32, I32),
            Type::I64 => int_cast!(self, i64, I64),
            Type::U8 => int_cast!(self, u8, U8),
            Type::U16 => int_cast!(self, u16, U16),
            Type::U32 => int_cast!(self, u32, U32),
            Type::U64 => int_cast!(self, u64, U64),
            Type::F32 => Value::F32(match self {
                Num::Int(v) => v as f32,
                Num::Float(v) => v as f32,
                Num::Decimal(v) => decimal_to_f64(v)? as f32,
            }),
            Type::F64 => Value::F64(match self {
                Num::Int(v) => v as f64,
                Num::Float(v) => v,
                Num::Decimal(v) => decimal_to_f64(v)?,
            }),
            Type::Decimal => Value::Decimal(match self {
                Num::Int(v) => Decimal::try_from_i128_with_scale(v, 0)?,
                Num::Float(v) => Decimal::from_f64(v).ok_or_else(|| {
                    Error::conversion_failed(format!("value {v} is out of range for Decimal"))
                })?,
                Num::Decimal(v) => v,
            }),
            Type::Char => {
                let code = match self {
                    Num::Int(v) => u32::try_from(v).ok(),
                    Num::Float(v) => Some(v as u32),
                    Num::Decimal(v) => Some(decimal_to_int::<u32>(v, &Type::U32)?),
                };

                Value::Char(code.and_then(char::from_u32).ok_or_else(|| {
                    Error::conversion_failed(format!("{self:?} is not a valid char code point"))
                })?)
            }
            Type::Enum(ty) => {
                let discriminant = match self.cast(ty.underlying())? {
                    Value::I8(v) => v.into(),
                    Value::I16(v) => v.into(),
                    Value::I32(v) => v.into(),
                    Value::I64(v) => v.into(),
                    Value::U8(v) => v.into(),
                    Value::U16(v) => v.into(),
                    Value::U32(v) => v.into(),
                    Value::U64(v) => v.into(),
                    value => {
                        return Err(Error::expression_evaluation_failed(format!(
                            "enum `{}` has non-integer underlying value {}",
                            ty.name(),
                            value.variant_name()
                        )))
                    }
                };

                Value::Enum(ValueEnum::new(discriminant))
            }
            _ => {
                return Err(Error::expression_evaluation_failed(format!(
                    "cannot cast a number to {target}"
                )))
            }
        })
    }
}

fn decimal_to_int<T: TryFrom<i128>>(value: Decimal, ty: &Type) -> Result<T> {
    value
        .trunc()
        .to_i128()
        .and_then(|v| T::try_from(v).ok())
        .ok_or_else(|| Error::conversion_failed(format!("value {value} is out of range for {ty}")))
}

fn decimal_to_f64(value: Decimal) -> Result<f64> {
    value
        .to_f64()
        .ok_or_else(|| Error::conversion_failed(format!("value {value} cannot be represented as f64")))
}

/// Whether a char's code point is representable in an integer target.
fn code_point_fits(code: u32, target: &Type) -> bool {
    match target {
        Type::I8 => i8::try_from(code).is_ok(),
        Type::U8 => u8::try_from(code).is_ok(),
        Type::I16 => i16::try_from(code).is_ok(),
        Type::U16 => u16::try_from(code).is_ok(),
        Type::Enum(ty) => code_point_fits(code, ty.underlying()),
        _ => true,
    }
}
