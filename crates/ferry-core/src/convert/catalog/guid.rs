use crate::{
    convert::{MappingHints, SequentialGuidValueGenerator},
    stmt::{Expr, FuncText, Type},
};

fn guid_bytes_hints() -> Option<MappingHints> {
    Some(MappingHints::sized(16).with_value_generator(SequentialGuidValueGenerator::boxed))
}

converter_family! {
    /// Stores a GUID as hyphenated lowercase text.
    GuidToString: Type::Uuid => Type::String,
    to_provider: Expr::func(FuncText::GuidToString, Expr::Arg),
    from_provider: Expr::func(FuncText::GuidParse, Expr::Arg),
    hints: Some(MappingHints::sized(36)),
}

converter_family! {
    StringToGuid: Type::String => Type::Uuid,
    to_provider: Expr::func(FuncText::GuidParse, Expr::Arg),
    from_provider: Expr::func(FuncText::GuidToString, Expr::Arg),
    hints: Some(MappingHints::sized(36)),
}

converter_family! {
    /// Stores a GUID as 16 bytes with its first three fields little-endian.
    ///
    /// Byte order differs from the textual order, so sorting the stored
    /// bytes does not sort the GUIDs. The hints carry a generator of
    /// sequential GUIDs for stores that cluster on this column.
    GuidToBytes: Type::Uuid => Type::Bytes,
    to_provider: Expr::func(FuncText::GuidToBytes, Expr::Arg),
    from_provider: Expr::func(FuncText::GuidFromBytes, Expr::Arg),
    hints: guid_bytes_hints(),
}

converter_family! {
    BytesToGuid: Type::Bytes => Type::Uuid,
    to_provider: Expr::func(FuncText::GuidFromBytes, Expr::Arg),
    from_provider: Expr::func(FuncText::GuidToBytes, Expr::Arg),
    hints: Some(MappingHints::sized(16)),
}
