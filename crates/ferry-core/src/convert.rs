mod cache;
pub use cache::ConverterCache;

pub mod catalog;

mod converter;
pub use converter::{ConvertFn, Converter};

mod hints;
pub use hints::{MappingHints, ValueGeneratorFactory};

mod info;
pub use info::{ConverterFactory, ConverterInfo};

mod selector;
pub use selector::{Select, Selector};

mod value_generator;
pub use value_generator::{SequentialGuidValueGenerator, ValueGenerator};
