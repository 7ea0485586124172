use super::Type;
use crate::{Error, Result};
use std::sync::Arc;

/// Describes a user enumeration: its name, the integer type backing it and
/// its named variants.
///
/// Values of an enum are not restricted to the declared variants; any
/// discriminant representable in the underlying type is valid.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TypeEnum {
    name: Arc<str>,
    underlying: Box<Type>,
    variants: Arc<[EnumVariant]>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct EnumVariant {
    /// Variant name
    pub name: Arc<str>,

    /// Enum discriminant
    pub discriminant: i128,
}

impl TypeEnum {
    /// Declares an enum backed by `underlying`, which must be an integer type.
    pub fn new<'a>(
        name: &str,
        underlying: Type,
        variants: impl IntoIterator<Item = (&'a str, i128)>,
    ) -> Result<TypeEnum> {
        if !underlying.is_integer() {
            return Err(Error::unsupported_type(
                "TypeEnum",
                &underlying,
                &[
                    Type::I8,
                    Type::I16,
                    Type::I32,
                    Type::I64,
                    Type::U8,
                    Type::U16,
                    Type::U32,
                    Type::U64,
                ],
            ));
        }

        let variants = variants
            .into_iter()
            .map(|(name, discriminant)| {
                if !underlying.fits_integer(discriminant) {
                    crate::bail!(
                        "discriminant {discriminant} of variant `{name}` does not fit in {underlying}"
                    );
                }

                Ok(EnumVariant {
                    name: name.into(),
                    discriminant,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(TypeEnum {
            name: name.into(),
            underlying: Box::new(underlying),
            variants: variants.into(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The integer type the enum is stored as.
    pub fn underlying(&self) -> &Type {
        &self.underlying
    }

    pub fn variants(&self) -> &[EnumVariant] {
        &self.variants
    }

    /// Returns `true` if `discriminant` fits in the underlying type.
    pub fn is_representable(&self, discriminant: i128) -> bool {
        self.underlying.fits_integer(discriminant)
    }

    pub fn variant_by_discriminant(&self, discriminant: i128) -> Option<&EnumVariant> {
        self.variants
            .iter()
            .find(|variant| variant.discriminant == discriminant)
    }

    /// Finds a variant by name, optionally ignoring ASCII case.
    pub fn variant_by_name(&self, name: &str, ignore_case: bool) -> Option<&EnumVariant> {
        self.variants.iter().find(|variant| {
            if ignore_case {
                variant.name.eq_ignore_ascii_case(name)
            } else {
                &*variant.name == name
            }
        })
    }
}
