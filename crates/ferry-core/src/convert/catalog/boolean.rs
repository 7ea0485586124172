use super::{expect, require};
use crate::{
    convert::{Converter, ConverterInfo, MappingHints},
    stmt::{Expr, FuncText, Type, Value, NUMERIC},
    Error, Result,
};

/// Stores `bool` as one of two provider values.
///
/// `true` maps to `true_value` and `false` to `false_value`. Reading back
/// compares against `true_value` unless a predicate is supplied.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolToTwoValues;

impl BoolToTwoValues {
    pub fn converter(provider_ty: &Type, false_value: Value, true_value: Value) -> Result<Converter> {
        Self::with_hints(provider_ty, false_value, true_value, None)
    }

    pub fn with_hints(
        provider_ty: &Type,
        false_value: Value,
        true_value: Value,
        hints: Option<MappingHints>,
    ) -> Result<Converter> {
        two_values(
            "BoolToTwoValues",
            provider_ty,
            false_value,
            true_value,
            None,
            hints,
        )
    }

    /// Reads a provider value back as `true` when `predicate` holds.
    pub fn with_predicate(
        provider_ty: &Type,
        false_value: Value,
        true_value: Value,
        predicate: impl Fn(&Value) -> bool + Send + Sync + 'static,
        hints: Option<MappingHints>,
    ) -> Result<Converter> {
        let from_provider = Expr::custom("predicate", Expr::Arg, move |value| {
            Ok(Value::Bool(predicate(&value)))
        });

        two_values(
            "BoolToTwoValues",
            provider_ty,
            false_value,
            true_value,
            Some(from_provider),
            hints,
        )
    }
}

fn two_values(
    name: &'static str,
    provider_ty: &Type,
    false_value: Value,
    true_value: Value,
    from_provider: Option<Expr>,
    hints: Option<MappingHints>,
) -> Result<Converter> {
    for value in [&false_value, &true_value] {
        if value.is_null() || !value.is_a(provider_ty) {
            return Err(Error::type_conversion(value.clone(), provider_ty));
        }
    }

    let from_provider = from_provider.unwrap_or_else(|| Expr::eq(Expr::Arg, true_value.clone()));

    Ok(Converter::new(
        name,
        Type::Bool,
        provider_ty.clone(),
        Expr::if_then_else(Expr::Arg, true_value, false_value),
        from_provider,
    )
    .with_hints(hints))
}

/// Stores `bool` as `1` or `0` in any numeric type.
///
/// Order preserving: `false` sorts before `true`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolToZeroOne;

impl BoolToZeroOne {
    pub fn converter(provider_ty: &Type) -> Result<Converter> {
        Self::with_hints(provider_ty, None)
    }

    pub fn with_hints(provider_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        require("BoolToZeroOne", provider_ty, NUMERIC)?;

        two_values(
            "BoolToZeroOne",
            provider_ty,
            provider_ty.cast(Value::I32(0))?,
            provider_ty.cast(Value::I32(1))?,
            None,
            hints,
        )
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        expect("BoolToZeroOne", model_ty, &Type::Bool)?;
        require("BoolToZeroOne", provider_ty, NUMERIC)?;

        Ok(ConverterInfo::new(
            Type::Bool,
            provider_ty.clone(),
            None,
            |info| Self::with_hints(info.provider_ty(), info.hints().cloned()),
        ))
    }
}

/// Stores `bool` as text, `"0"` and `"1"` unless other values are given.
///
/// Reading compares the first character with the first character of the
/// true value, ignoring case, so `"1"`, `"Y"` or `"true"` style columns read
/// back leniently. An empty string reads as `false`.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoolToString;

impl BoolToString {
    pub fn converter() -> Converter {
        Self::with_hints(None)
    }

    pub fn with_hints(hints: Option<MappingHints>) -> Converter {
        build("0", "1", '1', hints)
    }

    pub fn with_values(
        false_value: &str,
        true_value: &str,
        hints: Option<MappingHints>,
    ) -> Result<Converter> {
        let Some(first) = true_value.chars().next() else {
            crate::bail!("BoolToString requires a non-empty true value");
        };

        Ok(build(false_value, true_value, first, hints))
    }

    pub fn default_hints() -> Option<MappingHints> {
        Some(MappingHints::sized(1))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        expect("BoolToString", model_ty, &Type::Bool)?;
        expect("BoolToString", provider_ty, &Type::String)?;

        Ok(ConverterInfo::new(
            Type::Bool,
            Type::String,
            Self::default_hints(),
            |info| Ok(Self::with_hints(info.hints().cloned())),
        ))
    }
}

fn build(false_value: &str, true_value: &str, first: char, hints: Option<MappingHints>) -> Converter {
    let size = false_value.chars().count().max(true_value.chars().count()) as u32;

    Converter::new(
        "BoolToString",
        Type::Bool,
        Type::String,
        Expr::if_then_else(
            Expr::Arg,
            Expr::value(true_value),
            Expr::value(false_value),
        ),
        Expr::func(FuncText::FirstCharEq(first), Expr::Arg),
    )
    .with_hints(MappingHints::or_defaults(hints, Some(MappingHints::sized(size))))
}

converter_family! {
    /// Reads text as `bool`, accepting `true` or `false` in any case, and
    /// writes `"True"` or `"False"` back.
    StringToBool: Type::String => Type::Bool,
    to_provider: Expr::func(FuncText::ParseBool, Expr::Arg),
    from_provider: Expr::if_then_else(Expr::Arg, Expr::value("True"), Expr::value("False")),
    hints: Some(MappingHints::sized(5)),
}
