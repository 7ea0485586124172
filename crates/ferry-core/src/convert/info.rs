use super::{Converter, MappingHints};
use crate::{stmt::Type, Result};
use std::{fmt, sync::Arc};

/// Builds a [`Converter`] from the descriptor that describes it.
pub type ConverterFactory = Arc<dyn Fn(&ConverterInfo) -> Result<Converter> + Send + Sync>;

/// Describes an available conversion without building it.
///
/// The selector hands out descriptors so callers can inspect the provider
/// type and hints of each candidate and only pay for constructing the one
/// they pick, through [`ConverterInfo::create`].
#[derive(Clone)]
pub struct ConverterInfo {
    model_ty: Type,
    provider_ty: Type,
    hints: Option<MappingHints>,
    factory: ConverterFactory,
}

impl ConverterInfo {
    pub fn new(
        model_ty: Type,
        provider_ty: Type,
        hints: Option<MappingHints>,
        factory: impl Fn(&ConverterInfo) -> Result<Converter> + Send + Sync + 'static,
    ) -> ConverterInfo {
        ConverterInfo {
            model_ty,
            provider_ty,
            hints,
            factory: Arc::new(factory),
        }
    }

    pub fn model_ty(&self) -> &Type {
        &self.model_ty
    }

    pub fn provider_ty(&self) -> &Type {
        &self.provider_ty
    }

    pub fn hints(&self) -> Option<&MappingHints> {
        self.hints.as_ref()
    }

    /// Builds the converter.
    pub fn create(&self) -> Result<Converter> {
        (self.factory)(self)
    }

    /// Describes the conversion that runs `self` and then `second`.
    ///
    /// Hints follow the same rule as [`Converter::compose_with`].
    pub fn compose_with(self, second: ConverterInfo) -> ConverterInfo {
        let hints = MappingHints::compose(self.hints(), second.hints());

        ConverterInfo::new(
            self.model_ty.clone(),
            second.provider_ty.clone(),
            hints,
            move |_| self.create()?.compose_with(Some(&second.create()?)),
        )
    }
}

impl fmt::Debug for ConverterInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConverterInfo")
            .field("model_ty", &self.model_ty)
            .field("provider_ty", &self.provider_ty)
            .field("hints", &self.hints)
            .finish()
    }
}
