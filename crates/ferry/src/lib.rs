mod converters;
pub use converters::Converters;

mod primitive;
pub use primitive::Primitive;

mod primitive_chrono;

mod typed;
pub use typed::TypedConverter;

pub use ferry_core::{
    convert::{catalog, Converter, ConverterCache, ConverterInfo, MappingHints, Select, Selector},
    driver::Capability,
    mapping::Mapping,
    stmt::{Type, Value},
    Error, Result, TypeMapping,
};
