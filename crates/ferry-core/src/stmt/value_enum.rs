use super::Value;

/// A value of a user enumeration, stored as its discriminant.
///
/// The discriminant is kept as `i128` so every integral underlying type
/// (including `u64`) round-trips without loss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueEnum {
    pub discriminant: i128,
}

impl ValueEnum {
    pub fn new(discriminant: i128) -> ValueEnum {
        ValueEnum { discriminant }
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
