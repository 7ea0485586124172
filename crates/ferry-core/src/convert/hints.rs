use super::ValueGenerator;
use std::{fmt, sync::Arc};

/// Builds a fresh [`ValueGenerator`] for a column.
pub type ValueGeneratorFactory = Arc<dyn Fn() -> Box<dyn ValueGenerator> + Send + Sync>;

/// Advisory facets for choosing the storage type of a converted value.
///
/// Every field is optional. Hints never change how a value is converted;
/// they tell the storage layer how wide a column has to be (see
/// [`db::Type::from_provider`](crate::db::Type::from_provider)).
#[derive(Clone, Default)]
pub struct MappingHints {
    /// Maximum length of text or binary data
    pub size: Option<u32>,

    /// Total number of digits of a decimal
    pub precision: Option<u32>,

    /// Number of fraction digits of a decimal
    pub scale: Option<u32>,

    /// Whether text needs a Unicode-capable column
    pub unicode: Option<bool>,

    /// Generator for values the store does not produce itself
    pub value_generator: Option<ValueGeneratorFactory>,
}

impl MappingHints {
    /// Hints carrying only a size.
    pub fn sized(size: u32) -> MappingHints {
        MappingHints {
            size: Some(size),
            ..MappingHints::default()
        }
    }

    /// Hints carrying a decimal precision and scale.
    pub fn decimal(precision: u32, scale: u32) -> MappingHints {
        MappingHints {
            precision: Some(precision),
            scale: Some(scale),
            ..MappingHints::default()
        }
    }

    pub fn with_value_generator(
        mut self,
        factory: impl Fn() -> Box<dyn ValueGenerator> + Send + Sync + 'static,
    ) -> MappingHints {
        self.value_generator = Some(Arc::new(factory));
        self
    }

    /// Merges two sets of hints, keeping `self`'s value for every field it
    /// sets and taking the rest from `other`.
    pub fn with(&self, other: &MappingHints) -> MappingHints {
        MappingHints {
            size: self.size.or(other.size),
            precision: self.precision.or(other.precision),
            scale: self.scale.or(other.scale),
            unicode: self.unicode.or(other.unicode),
            value_generator: self
                .value_generator
                .clone()
                .or_else(|| other.value_generator.clone()),
        }
    }

    /// Merges two sets of hints, taking `other`'s value for every field it
    /// sets and keeping `self`'s for the rest.
    pub fn override_with(&self, other: &MappingHints) -> MappingHints {
        other.with(self)
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_none()
            && self.precision.is_none()
            && self.scale.is_none()
            && self.unicode.is_none()
            && self.value_generator.is_none()
    }

    /// Hints of `first` chained with `second`: the second converter's hints
    /// win where both are set.
    pub(crate) fn compose(
        first: Option<&MappingHints>,
        second: Option<&MappingHints>,
    ) -> Option<MappingHints> {
        match (first, second) {
            (Some(first), Some(second)) => Some(second.with(first)),
            (first, second) => second.or(first).cloned(),
        }
    }

    /// Caller hints take precedence over a family's defaults.
    pub(crate) fn or_defaults(
        hints: Option<MappingHints>,
        defaults: Option<MappingHints>,
    ) -> Option<MappingHints> {
        match (hints, defaults) {
            (Some(hints), Some(defaults)) => Some(hints.with(&defaults)),
            (hints, defaults) => hints.or(defaults),
        }
    }
}

impl PartialEq for MappingHints {
    fn eq(&self, other: &Self) -> bool {
        let same_generator = match (&self.value_generator, &other.value_generator) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            (None, None) => true,
            _ => false,
        };

        same_generator
            && self.size == other.size
            && self.precision == other.precision
            && self.scale == other.scale
            && self.unicode == other.unicode
    }
}

impl fmt::Debug for MappingHints {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MappingHints")
            .field("size", &self.size)
            .field("precision", &self.precision)
            .field("scale", &self.scale)
            .field("unicode", &self.unicode)
            .field("value_generator", &self.value_generator.is_some())
            .finish()
    }
}
