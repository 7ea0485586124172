use crate::{
    convert::{Converter, MappingHints, Selector},
    db,
    driver::Capability,
    stmt::Type,
    Error, Result,
};

/// Decides how model types are stored by a particular database.
#[derive(Debug, Clone, Copy)]
pub struct TypeMapping<'a> {
    selector: &'a Selector,
    capability: &'a Capability,
}

/// How one model type is stored.
#[derive(Debug, Clone)]
pub struct Mapping {
    /// The type as the application sees it
    pub model_ty: Type,

    /// The type handed to the database
    pub provider_ty: Type,

    /// Converts between the two. `None` when the model type is stored as is.
    pub converter: Option<Converter>,

    /// Column facets suggested by the converter
    pub hints: Option<MappingHints>,

    /// The column type
    pub storage_ty: db::Type,
}

impl<'a> TypeMapping<'a> {
    pub fn new(selector: &'a Selector, capability: &'a Capability) -> TypeMapping<'a> {
        TypeMapping {
            selector,
            capability,
        }
    }

    /// Resolves the storage of `model_ty`.
    ///
    /// With no `requested_provider`, a natively stored model type is stored as
    /// is. Otherwise the most preferred conversion to a native provider type
    /// wins. A requested provider type must itself be native.
    pub fn resolve(&self, model_ty: &Type, requested_provider: Option<&Type>) -> Result<Mapping> {
        let model_ty = model_ty.unwrap_option();
        let requested_provider = requested_provider.map(Type::unwrap_option);

        if let Some(provider_ty) = requested_provider {
            if !self.capability.is_native(provider_ty) {
                return Err(Error::unsupported_feature(format!(
                    "type {provider_ty} is not supported by this database"
                )));
            }
        }

        let direct = match requested_provider {
            Some(provider_ty) => provider_ty == model_ty,
            None => self.capability.is_native(model_ty),
        };

        if direct {
            return self.mapping(model_ty.clone(), model_ty.clone(), None, None);
        }

        let Some(info) = self
            .selector
            .select(model_ty, requested_provider)
            .find(|info| self.capability.is_native(info.provider_ty()))
        else {
            return Err(Error::unsupported_feature(match requested_provider {
                Some(provider_ty) => format!("no conversion from {model_ty} to {provider_ty}"),
                None => format!("type {model_ty} is not supported by this database"),
            }));
        };

        let converter = info.create()?;

        tracing::debug!(
            model_ty = %model_ty,
            provider_ty = %info.provider_ty(),
            converter = converter.name(),
            "resolved type mapping"
        );

        self.mapping(
            model_ty.clone(),
            info.provider_ty().clone(),
            converter.hints().cloned(),
            Some(converter),
        )
    }

    fn mapping(
        &self,
        model_ty: Type,
        provider_ty: Type,
        hints: Option<MappingHints>,
        converter: Option<Converter>,
    ) -> Result<Mapping> {
        let storage_ty =
            db::Type::from_provider(&provider_ty, hints.as_ref(), &self.capability.storage_types)?;
        storage_ty.verify(self.capability)?;

        Ok(Mapping {
            model_ty,
            provider_ty,
            converter,
            hints,
            storage_ty,
        })
    }
}
