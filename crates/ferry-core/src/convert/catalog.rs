//! The built-in converter families.
//!
//! Each family is a unit struct with constructors returning a
//! [`Converter`](super::Converter) and a `default_info` function with the
//! signature `fn(&Type, &Type) -> Result<ConverterInfo>`. The selector stores
//! `default_info` functions in its plans and calls them on a cache miss.

use crate::{stmt::Type, Error, Result};

/// Declares a family converting between two fixed types.
macro_rules! converter_family {
    (
        $(#[$attr:meta])*
        $name:ident: $model:expr => $provider:expr,
        to_provider: $to:expr,
        from_provider: $from:expr,
        hints: $hints:expr $(,)?
    ) => {
        $(#[$attr])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $name;

        impl $name {
            pub fn converter() -> $crate::convert::Converter {
                Self::with_hints(None)
            }

            pub fn with_hints(
                hints: Option<$crate::convert::MappingHints>,
            ) -> $crate::convert::Converter {
                $crate::convert::Converter::new(stringify!($name), $model, $provider, $to, $from)
                    .with_hints($crate::convert::MappingHints::or_defaults(
                        hints,
                        Self::default_hints(),
                    ))
            }

            pub fn default_hints() -> Option<$crate::convert::MappingHints> {
                $hints
            }

            pub fn default_info(
                model_ty: &$crate::stmt::Type,
                provider_ty: &$crate::stmt::Type,
            ) -> $crate::Result<$crate::convert::ConverterInfo> {
                $crate::convert::catalog::expect(stringify!($name), model_ty, &$model)?;
                $crate::convert::catalog::expect(stringify!($name), provider_ty, &$provider)?;

                Ok($crate::convert::ConverterInfo::new(
                    $model,
                    $provider,
                    Self::default_hints(),
                    |info| Ok(Self::with_hints(info.hints().cloned())),
                ))
            }
        }
    };
}

mod boolean;
pub use boolean::{BoolToString, BoolToTwoValues, BoolToZeroOne, StringToBool};

mod character;
pub use character::{CharToString, StringToChar};

mod enums;
pub use enums::{EnumToNumber, EnumToString, StringToEnum};

mod guid;
pub use guid::{BytesToGuid, GuidToBytes, GuidToString, StringToGuid};

mod json;
pub use json::CollectionToJson;

mod net;
pub use net::{IpAddressToBytes, IpAddressToString, PhysicalAddressToBytes, PhysicalAddressToString};

mod number;
pub use number::{CastingConverter, NumberToBytes, NumberToString, StringToNumber};

mod temporal;
pub use temporal::{
    DateOnlyToString, DateTimeOffsetToBinary, DateTimeOffsetToBytes, DateTimeOffsetToString,
    DateTimeToBinary, DateTimeToString, DateTimeToTicks, StringToDateOnly, StringToDateTime,
    StringToDateTimeOffset, StringToTimeOnly, StringToTimeSpan, TimeOnlyToString,
    TimeOnlyToTicks, TimeSpanToString, TimeSpanToTicks,
};

mod text;
pub use text::{BytesToString, StringToBytes, StringToUri, UriToString};

/// Fails unless `ty` is exactly `expected`.
pub(crate) fn expect(converter: &'static str, ty: &Type, expected: &Type) -> Result<()> {
    if ty == expected {
        Ok(())
    } else {
        Err(Error::unsupported_type(
            converter,
            ty,
            std::slice::from_ref(expected),
        ))
    }
}

/// Fails unless `ty`, ignoring [`Type::Option`], is one of `supported`.
pub(crate) fn require(converter: &'static str, ty: &Type, supported: &[Type]) -> Result<()> {
    if supported.contains(ty.unwrap_option()) {
        Ok(())
    } else {
        Err(Error::unsupported_type(converter, ty, supported))
    }
}
