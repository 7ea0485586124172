use crate::Primitive;
use ferry_core::{convert::Converter, Error, Result};
use std::{fmt, marker::PhantomData};

/// A [`Converter`] bound to the Rust types on either side.
///
/// Construction checks the converter's model and provider types against
/// `M::ty()` and `P::ty()`, ignoring `Option`.
pub struct TypedConverter<M, P> {
    converter: Converter,
    _p: PhantomData<fn(M) -> P>,
}

impl<M: Primitive, P: Primitive> TypedConverter<M, P> {
    pub fn new(converter: Converter) -> Result<TypedConverter<M, P>> {
        let model_ty = M::ty();
        let provider_ty = P::ty();

        if converter.model_ty().unwrap_option() != model_ty.unwrap_option()
            || converter.provider_ty().unwrap_option() != provider_ty.unwrap_option()
        {
            return Err(Error::unsupported_feature(format!(
                "converter {} converts {} to {}, not {model_ty} to {provider_ty}",
                converter.name(),
                converter.model_ty(),
                converter.provider_ty(),
            )));
        }

        Ok(TypedConverter {
            converter,
            _p: PhantomData,
        })
    }

    pub fn to_provider(&self, value: M) -> Result<P> {
        P::load(self.converter.convert_to_provider(&value.into_value())?)
    }

    pub fn from_provider(&self, value: P) -> Result<M> {
        M::load(self.converter.convert_from_provider(&value.into_value())?)
    }

    pub fn converter(&self) -> &Converter {
        &self.converter
    }

    pub fn into_inner(self) -> Converter {
        self.converter
    }
}

impl<M, P> Clone for TypedConverter<M, P> {
    fn clone(&self) -> Self {
        TypedConverter {
            converter: self.converter.clone(),
            _p: PhantomData,
        }
    }
}

impl<M, P> fmt::Debug for TypedConverter<M, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("TypedConverter").field(&self.converter).finish()
    }
}
