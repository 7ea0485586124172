use super::{expect, number::decimal_hints, require};
use crate::{
    convert::{Converter, ConverterInfo, MappingHints},
    stmt::{Expr, FuncText, Type, TypeEnum, NUMERIC},
    Error, Result,
};

/// Stores an enum as its discriminant in a numeric type.
///
/// Discriminants outside the declared variants are kept as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumToNumber;

impl EnumToNumber {
    pub fn converter(model_ty: &Type, provider_ty: &Type) -> Result<Converter> {
        Self::with_hints(model_ty, provider_ty, None)
    }

    pub fn with_hints(
        model_ty: &Type,
        provider_ty: &Type,
        hints: Option<MappingHints>,
    ) -> Result<Converter> {
        enum_ty("EnumToNumber", model_ty)?;
        require("EnumToNumber", provider_ty, NUMERIC)?;

        Ok(Converter::new(
            "EnumToNumber",
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
        enum_ty("EnumToNumber", model_ty)?;
        require("EnumToNumber", provider_ty, NUMERIC)?;

        Ok(ConverterInfo::new(
            model_ty.clone(),
            provider_ty.clone(),
            decimal_hints(model_ty, provider_ty),
            |info| Self::with_hints(info.model_ty(), info.provider_ty(), info.hints().cloned()),
        ))
    }
}

/// Stores an enum as the name of its variant.
///
/// Values with no named variant are written as their number. Reading matches
/// names exactly first, then ignoring case, then as a number; anything else
/// reads as discriminant `0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnumToString;

impl EnumToString {
    pub fn converter(model_ty: &Type) -> Result<Converter> {
        Self::with_hints(model_ty, None)
    }

    pub fn with_hints(model_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        let ty = enum_ty("EnumToString", model_ty)?;

        Ok(Converter::new(
            "EnumToString",
            model_ty.clone(),
            Type::String,
            Expr::func(FuncText::EnumToString(ty.clone()), Expr::Arg),
            Expr::func(FuncText::EnumParse(ty.clone()), Expr::Arg),
        )
        .with_hints(hints))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        enum_ty("EnumToString", model_ty)?;
        expect("EnumToString", provider_ty, &Type::String)?;

        Ok(ConverterInfo::new(
            model_ty.clone(),
            Type::String,
            None,
            |info| Self::with_hints(info.model_ty(), info.hints().cloned()),
        ))
    }
}

/// Reads text as an enum. The reverse of [`EnumToString`].
#[derive(Debug, Clone, Copy, Default)]
pub struct StringToEnum;

impl StringToEnum {
    pub fn converter(provider_ty: &Type) -> Result<Converter> {
        Self::with_hints(provider_ty, None)
    }

    pub fn with_hints(provider_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        Ok(EnumToString::with_hints(provider_ty, hints)?.reversed("StringToEnum"))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        expect("StringToEnum", model_ty, &Type::String)?;
        enum_ty("StringToEnum", provider_ty)?;

        Ok(ConverterInfo::new(
            Type::String,
            provider_ty.clone(),
            None,
            |info| Self::with_hints(info.provider_ty(), info.hints().cloned()),
        ))
    }
}

fn enum_ty<'a>(converter: &'static str, ty: &'a Type) -> Result<&'a TypeEnum> {
    ty.unwrap_option()
        .as_enum()
        .ok_or_else(|| Error::unsupported_type_described(converter, ty, "any enum type"))
}
