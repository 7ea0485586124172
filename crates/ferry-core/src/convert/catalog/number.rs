use super::{expect, require};
use crate::{
    convert::{Converter, ConverterInfo, MappingHints},
    stmt::{Expr, FuncNum, Type, NUMERIC},
    Result,
};

const CASTABLE: &[Type] = &[
    Type::I8,
    Type::I16,
    Type::I32,
    Type::I64,
    Type::U8,
    Type::U16,
    Type::U32,
    Type::U64,
    Type::F32,
    Type::F64,
    Type::Decimal,
    Type::Char,
];

/// Converts between numeric types (and `char`) with a plain cast.
///
/// Integer narrowing wraps and float to integer saturates. Casting out of
/// `Decimal` fails when the value is out of range.
#[derive(Debug, Clone, Copy, Default)]
pub struct CastingConverter;

impl CastingConverter {
    pub fn converter(model_ty: &Type, provider_ty: &Type) -> Result<Converter> {
        Self::with_hints(model_ty, provider_ty, None)
    }

    pub fn with_hints(
        model_ty: &Type,
        provider_ty: &Type,
        hints: Option<MappingHints>,
    ) -> Result<Converter> {
        require("CastingConverter", model_ty, CASTABLE)?;
        require("CastingConverter", provider_ty, CASTABLE)?;

        Ok(Converter::new(
            "CastingConverter",
            model_ty.clone(),
            provider_ty.clone(),
            Expr::cast(Expr::Arg, provider_ty),
            Expr::cast(Expr::Arg, model_ty),
        )
        .with_hints(MappingHints::or_defaults(
            hints,
            decimal_hints(model_ty, provider_ty),
        )))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        require("CastingConverter", model_ty, CASTABLE)?;
        require("CastingConverter", provider_ty, CASTABLE)?;

        Ok(ConverterInfo::new(
            model_ty.clone(),
            provider_ty.clone(),
            decimal_hints(model_ty, provider_ty),
            |info| Self::with_hints(info.model_ty(), info.provider_ty(), info.hints().cloned()),
        ))
    }
}

/// Precision and scale for a decimal column that holds every value of
/// `model_ty`.
pub(super) fn decimal_hints(model_ty: &Type, provider_ty: &Type) -> Option<MappingHints> {
    if !provider_ty.unwrap_option().is_decimal() {
        return None;
    }

    match model_ty.unwrap_option().unwrap_enum() {
        Type::I64 | Type::U64 => Some(MappingHints::decimal(20, 0)),
        Type::F32 | Type::F64 => Some(MappingHints::decimal(38, 17)),
        _ => None,
    }
}

/// Stores a number as its invariant text form.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberToString;

impl NumberToString {
    pub fn converter(model_ty: &Type) -> Result<Converter> {
        Self::with_hints(model_ty, None)
    }

    pub fn with_hints(model_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        require("NumberToString", model_ty, NUMERIC)?;

        Ok(Converter::new(
            "NumberToString",
            model_ty.clone(),
            Type::String,
            Expr::func(FuncNum::ToString, Expr::Arg),
            Expr::func(FuncNum::Parse(model_ty.unwrap_option().clone()), Expr::Arg),
        )
        .with_hints(MappingHints::or_defaults(hints, Self::default_hints())))
    }

    pub fn default_hints() -> Option<MappingHints> {
        Some(MappingHints::sized(64))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        require("NumberToString", model_ty, NUMERIC)?;
        expect("NumberToString", provider_ty, &Type::String)?;

        Ok(ConverterInfo::new(
            model_ty.clone(),
            Type::String,
            Self::default_hints(),
            |info| Self::with_hints(info.model_ty(), info.hints().cloned()),
        ))
    }
}

/// Reads text as a number. The reverse of [`NumberToString`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToNumber;

impl StringToNumber {
    pub fn converter(provider_ty: &Type) -> Result<Converter> {
        Self::with_hints(provider_ty, None)
    }

    pub fn with_hints(provider_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        require("StringToNumber", provider_ty, NUMERIC)?;
        Ok(NumberToString::with_hints(provider_ty, hints)?.reversed("StringToNumber"))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        expect("StringToNumber", model_ty, &Type::String)?;
        require("StringToNumber", provider_ty, NUMERIC)?;

        Ok(ConverterInfo::new(
            Type::String,
            provider_ty.clone(),
            NumberToString::default_hints(),
            |info| Self::with_hints(info.provider_ty(), info.hints().cloned()),
        ))
    }
}

/// Stores a number as fixed-width big-endian bytes.
///
/// Widths are 1, 2, 4 or 8 bytes by type, and 16 for `Decimal`, which is
/// written as four 32-bit words: flags (scale and sign), then the high,
/// middle and low words of the mantissa. Reading an empty array yields zero.
#[derive(Debug, Clone, Copy, Default)]
pub struct NumberToBytes;

impl NumberToBytes {
    pub fn converter(model_ty: &Type) -> Result<Converter> {
        Self::with_hints(model_ty, None)
    }

    pub fn with_hints(model_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        require("NumberToBytes", model_ty, NUMERIC)?;

        Ok(Converter::new(
            "NumberToBytes",
            model_ty.clone(),
            Type::Bytes,
            Expr::func(FuncNum::ToBytes, Expr::Arg),
            Expr::func(FuncNum::FromBytes(model_ty.unwrap_option().clone()), Expr::Arg),
        )
        .with_hints(MappingHints::or_defaults(hints, Self::default_hints(model_ty))))
    }

    pub fn default_hints(model_ty: &Type) -> Option<MappingHints> {
        model_ty
            .unwrap_option()
            .byte_width()
            .map(|width| MappingHints::sized(width as u32))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        require("NumberToBytes", model_ty, NUMERIC)?;
        expect("NumberToBytes", provider_ty, &Type::Bytes)?;

        Ok(ConverterInfo::new(
            model_ty.clone(),
            Type::Bytes,
            Self::default_hints(model_ty),
            |info| Self::with_hints(info.model_ty(), info.hints().cloned()),
        ))
    }
}
