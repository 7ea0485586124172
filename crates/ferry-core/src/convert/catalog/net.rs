use crate::{
    convert::MappingHints,
    stmt::{Expr, FuncNet, Type},
};

converter_family! {
    /// Stores an IP address as text. The size fits an IPv4-mapped IPv6
    /// address.
    IpAddressToString: Type::IpAddr => Type::String,
    to_provider: Expr::func(FuncNet::IpToString, Expr::Arg),
    from_provider: Expr::func(FuncNet::IpParse, Expr::Arg),
    hints: Some(MappingHints::sized(45)),
}

converter_family! {
    IpAddressToBytes: Type::IpAddr => Type::Bytes,
    to_provider: Expr::func(FuncNet::IpToBytes, Expr::Arg),
    from_provider: Expr::func(FuncNet::IpFromBytes, Expr::Arg),
    hints: Some(MappingHints::sized(16)),
}

converter_family! {
    PhysicalAddressToString: Type::PhysicalAddress => Type::String,
    to_provider: Expr::func(FuncNet::PhysicalAddressToString, Expr::Arg),
    from_provider: Expr::func(FuncNet::PhysicalAddressParse, Expr::Arg),
    hints: Some(MappingHints::sized(20)),
}

converter_family! {
    PhysicalAddressToBytes: Type::PhysicalAddress => Type::Bytes,
    to_provider: Expr::func(FuncNet::PhysicalAddressToBytes, Expr::Arg),
    from_provider: Expr::func(FuncNet::PhysicalAddressFromBytes, Expr::Arg),
    hints: Some(MappingHints::sized(8)),
}
