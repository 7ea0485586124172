pub mod convert;
pub use convert::{Converter, ConverterInfo, MappingHints, Selector};

pub mod db;

pub mod driver;

mod error;
pub use error::Error;

pub mod mapping;
pub use mapping::TypeMapping;

pub mod stmt;

/// A Result type alias that uses Ferry's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
