use super::expect;
use crate::{
    convert::{Converter, ConverterInfo, MappingHints},
    stmt::{is_json_element, Expr, FuncJson, Type},
    Error, Result,
};

/// Stores a list of primitives as a JSON array in a text column.
///
/// Null elements are written as JSON `null`. Decimals are written as strings
/// so no precision is lost, and enums as their discriminant.
#[derive(Debug, Clone, Copy, Default)]
pub struct CollectionToJson;

impl CollectionToJson {
    pub fn converter(model_ty: &Type) -> Result<Converter> {
        Self::with_hints(model_ty, None)
    }

    pub fn with_hints(model_ty: &Type, hints: Option<MappingHints>) -> Result<Converter> {
        check(model_ty)?;

        Ok(Converter::new(
            "CollectionToJson",
            model_ty.clone(),
            Type::String,
            Expr::func(FuncJson::Serialize, Expr::Arg),
            Expr::func(FuncJson::Deserialize(model_ty.unwrap_option().clone()), Expr::Arg),
        )
        .with_hints(hints))
    }

    pub fn default_info(model_ty: &Type, provider_ty: &Type) -> Result<ConverterInfo> {
        check(model_ty)?;
        expect("CollectionToJson", provider_ty, &Type::String)?;

        Ok(ConverterInfo::new(
            model_ty.clone(),
            Type::String,
            None,
            |info| Self::with_hints(info.model_ty(), info.hints().cloned()),
        ))
    }
}

fn check(model_ty: &Type) -> Result<()> {
    match model_ty.unwrap_option() {
        Type::List(item) if is_json_element(item) => Ok(()),
        _ => Err(Error::unsupported_type_described(
            "CollectionToJson",
            model_ty,
            "a list of scalar, temporal, enum or nested list elements",
        )),
    }
}
