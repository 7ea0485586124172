use super::Error;

/// Error when a single value cannot be converted.
///
/// This is a data problem, not a configuration problem: the converter is
/// valid but the value it was handed is not (a malformed GUID string, a
/// byte array of the wrong width, an out-of-range decimal, ...).
#[derive(Debug)]
pub(super) struct ConversionFailed {
    message: Box<str>,
}

impl std::error::Error for ConversionFailed {}

impl core::fmt::Display for ConversionFailed {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "conversion failed: {}", self.message)
    }
}

impl Error {
    /// Creates a conversion failed error.
    pub fn conversion_failed(message: impl Into<String>) -> Error {
        Error::from(super::ErrorKind::ConversionFailed(ConversionFailed {
            message: message.into().into(),
        }))
    }

    /// Returns `true` if this error is a conversion failure.
    pub fn is_conversion_failed(&self) -> bool {
        matches!(self.kind(), super::ErrorKind::ConversionFailed(_))
    }
}
