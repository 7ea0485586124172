use crate::stmt::{Expr, FuncText, Type};

converter_family! {
    UriToString: Type::Url => Type::String,
    to_provider: Expr::func(FuncText::UrlToString, Expr::Arg),
    from_provider: Expr::func(FuncText::UrlParse, Expr::Arg),
    hints: None,
}

converter_family! {
    StringToUri: Type::String => Type::Url,
    to_provider: Expr::func(FuncText::UrlParse, Expr::Arg),
    from_provider: Expr::func(FuncText::UrlToString, Expr::Arg),
    hints: None,
}

converter_family! {
    /// Stores bytes as standard base64 text.
    BytesToString: Type::Bytes => Type::String,
    to_provider: Expr::func(FuncText::Base64Encode, Expr::Arg),
    from_provider: Expr::func(FuncText::Base64Decode, Expr::Arg),
    hints: None,
}

converter_family! {
    /// Stores text as its UTF-8 bytes.
    StringToBytes: Type::String => Type::Bytes,
    to_provider: Expr::func(FuncText::Utf8Encode, Expr::Arg),
    from_provider: Expr::func(FuncText::Utf8Decode, Expr::Arg),
    hints: None,
}
