use super::Error;
use crate::stmt::Type;

/// Error when two converters cannot be chained because the provider type of
/// the first does not line up with the model type of the second.
#[derive(Debug)]
pub(super) struct CompositionMismatch {
    first: (Type, Type),
    second: (Type, Type),
}

impl std::error::Error for CompositionMismatch {}

impl core::fmt::Display for CompositionMismatch {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot compose converter for `{}` -> `{}` with converter for `{}` -> `{}`",
            self.first.0, self.first.1, self.second.0, self.second.1
        )
    }
}

impl Error {
    /// Creates a composition mismatch error from the `(model, provider)`
    /// types of both converters.
    pub fn composition_mismatch(first: (&Type, &Type), second: (&Type, &Type)) -> Error {
        Error::from(super::ErrorKind::CompositionMismatch(CompositionMismatch {
            first: (first.0.clone(), first.1.clone()),
            second: (second.0.clone(), second.1.clone()),
        }))
    }

    /// Returns `true` if this error is a composition mismatch.
    pub fn is_composition_mismatch(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::CompositionMismatch(_))
    }
}
