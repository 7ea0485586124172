use crate::{Primitive, TypedConverter};
use ferry_core::{
    convert::{ConverterCache, Select, Selector},
    driver::Capability,
    mapping::Mapping,
    Error, Result, TypeMapping,
};

/// Looks up built-in converters by Rust type.
#[derive(Debug, Clone, Default)]
pub struct Converters {
    selector: Selector,
}

impl Converters {
    pub fn new() -> Converters {
        Converters::default()
    }

    pub fn with_cache(cache: ConverterCache) -> Converters {
        Converters {
            selector: Selector::with_cache(cache),
        }
    }

    pub fn selector(&self) -> &Selector {
        &self.selector
    }

    /// Every conversion available for `M`, most preferred first.
    pub fn select<M: Primitive>(&self) -> Select<'_> {
        self.selector.select(&M::ty(), None)
    }

    /// The most preferred conversion from `M` to `P`.
    pub fn find<M: Primitive, P: Primitive>(&self) -> Result<TypedConverter<M, P>> {
        let model_ty = M::ty();
        let provider_ty = P::ty();

        let Some(info) = self.selector.select(&model_ty, Some(&provider_ty)).next() else {
            return Err(Error::unsupported_feature(format!(
                "no conversion from {model_ty} to {provider_ty}"
            )));
        };

        TypedConverter::new(info.create()?)
    }

    /// How `M` is stored by a database with the given capability.
    pub fn mapping<M: Primitive>(&self, capability: &Capability) -> Result<Mapping> {
        TypeMapping::new(&self.selector, capability).resolve(&M::ty(), None)
    }
}
