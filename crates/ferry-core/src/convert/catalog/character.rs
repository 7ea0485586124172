use crate::{
    convert::MappingHints,
    stmt::{Expr, FuncText, Type},
};

converter_family! {
    /// Stores a `char` as a one-character string.
    CharToString: Type::Char => Type::String,
    to_provider: Expr::func(FuncText::CharToString, Expr::Arg),
    from_provider: Expr::func(FuncText::StringToChar, Expr::Arg),
    hints: Some(MappingHints::sized(1)),
}

converter_family! {
    /// Reads the first character of a string; an empty string reads as `'\0'`.
    StringToChar: Type::String => Type::Char,
    to_provider: Expr::func(FuncText::StringToChar, Expr::Arg),
    from_provider: Expr::func(FuncText::CharToString, Expr::Arg),
    hints: Some(MappingHints::sized(1)),
}
