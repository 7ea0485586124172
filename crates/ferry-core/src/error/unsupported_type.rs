use super::Error;
use crate::stmt::Type;

/// Error when a converter family is built for a type it does not handle.
///
/// Raised when a converter is constructed, which in practice means while the
/// model is being configured, long before any value flows through it.
#[derive(Debug)]
pub(super) struct UnsupportedType {
    converter: &'static str,
    ty: Type,
    supported: Supported,
}

#[derive(Debug)]
enum Supported {
    Types(Box<[Type]>),
    /// Families that accept an open-ended set of types, such as every enum
    Described(&'static str),
}

impl std::error::Error for UnsupportedType {}

impl core::fmt::Display for UnsupportedType {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "type `{}` cannot be used with `{}`",
            self.ty, self.converter
        )?;

        let types = match &self.supported {
            Supported::Described(description) => {
                return write!(f, "; supported types: {description}");
            }
            Supported::Types(types) if types.is_empty() => return Ok(()),
            Supported::Types(types) => types,
        };

        f.write_str("; supported types: ")?;

        for (i, ty) in types.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{ty}")?;
        }

        Ok(())
    }
}

impl Error {
    /// Creates an unsupported type error.
    ///
    /// `converter` names the converter family, `ty` the rejected type and
    /// `supported` every type the family accepts.
    pub fn unsupported_type(converter: &'static str, ty: &Type, supported: &[Type]) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            converter,
            ty: ty.clone(),
            supported: Supported::Types(supported.into()),
        }))
    }

    /// Creates an unsupported type error for a family whose accepted types
    /// are described rather than listed.
    pub fn unsupported_type_described(
        converter: &'static str,
        ty: &Type,
        supported: &'static str,
    ) -> Error {
        Error::from(super::ErrorKind::UnsupportedType(UnsupportedType {
            converter,
            ty: ty.clone(),
            supported: Supported::Described(supported),
        }))
    }

    /// Returns `true` if this error is an unsupported type error.
    pub fn is_unsupported_type(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::UnsupportedType(_))
    }
}
