use crate::{
    convert::MappingHints,
    stmt::{Expr, FuncTemporal, Type},
};

fn func(func: FuncTemporal) -> Expr {
    Expr::func(func, Expr::Arg)
}

converter_family! {
    /// Stores a date and time as `yyyy-MM-dd HH:mm:ss.FFFFFFF` text.
    ///
    /// The [`DateTimeKind`](crate::stmt::DateTimeKind) is not stored; values
    /// read back are unspecified.
    DateTimeToString: Type::DateTime => Type::String,
    to_provider: func(FuncTemporal::DateTimeToString),
    from_provider: func(FuncTemporal::DateTimeParse),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    /// Stores a date and time as a 64-bit integer that keeps the
    /// [`DateTimeKind`](crate::stmt::DateTimeKind).
    DateTimeToBinary: Type::DateTime => Type::I64,
    to_provider: func(FuncTemporal::DateTimeToBinary),
    from_provider: func(FuncTemporal::DateTimeFromBinary),
    hints: None,
}

converter_family! {
    /// Stores a date and time as ticks since `0001-01-01`.
    DateTimeToTicks: Type::DateTime => Type::I64,
    to_provider: func(FuncTemporal::DateTimeToTicks),
    from_provider: func(FuncTemporal::DateTimeFromTicks),
    hints: None,
}

converter_family! {
    DateTimeOffsetToString: Type::DateTimeOffset => Type::String,
    to_provider: func(FuncTemporal::DateTimeOffsetToString),
    from_provider: func(FuncTemporal::DateTimeOffsetParse),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    /// Packs a date and time with offset into a 64-bit integer.
    ///
    /// Precision is reduced to milliseconds.
    DateTimeOffsetToBinary: Type::DateTimeOffset => Type::I64,
    to_provider: func(FuncTemporal::DateTimeOffsetToBinary),
    from_provider: func(FuncTemporal::DateTimeOffsetFromBinary),
    hints: None,
}

converter_family! {
    DateTimeOffsetToBytes: Type::DateTimeOffset => Type::Bytes,
    to_provider: func(FuncTemporal::DateTimeOffsetToBytes),
    from_provider: func(FuncTemporal::DateTimeOffsetFromBytes),
    hints: Some(MappingHints::sized(12)),
}

converter_family! {
    DateOnlyToString: Type::Date => Type::String,
    to_provider: func(FuncTemporal::DateToString),
    from_provider: func(FuncTemporal::DateParse),
    hints: Some(MappingHints::sized(10)),
}

converter_family! {
    TimeOnlyToString: Type::Time => Type::String,
    to_provider: func(FuncTemporal::TimeToString),
    from_provider: func(FuncTemporal::TimeParse),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    /// Stores a time of day as ticks since midnight.
    TimeOnlyToTicks: Type::Time => Type::I64,
    to_provider: func(FuncTemporal::TimeToTicks),
    from_provider: func(FuncTemporal::TimeFromTicks),
    hints: None,
}

converter_family! {
    TimeSpanToString: Type::Duration => Type::String,
    to_provider: func(FuncTemporal::DurationToString),
    from_provider: func(FuncTemporal::DurationParse),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    TimeSpanToTicks: Type::Duration => Type::I64,
    to_provider: func(FuncTemporal::DurationToTicks),
    from_provider: func(FuncTemporal::DurationFromTicks),
    hints: None,
}

converter_family! {
    StringToDateTime: Type::String => Type::DateTime,
    to_provider: func(FuncTemporal::DateTimeParse),
    from_provider: func(FuncTemporal::DateTimeToString),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    StringToDateTimeOffset: Type::String => Type::DateTimeOffset,
    to_provider: func(FuncTemporal::DateTimeOffsetParse),
    from_provider: func(FuncTemporal::DateTimeOffsetToString),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    StringToDateOnly: Type::String => Type::Date,
    to_provider: func(FuncTemporal::DateParse),
    from_provider: func(FuncTemporal::DateToString),
    hints: Some(MappingHints::sized(10)),
}

converter_family! {
    StringToTimeOnly: Type::String => Type::Time,
    to_provider: func(FuncTemporal::TimeParse),
    from_provider: func(FuncTemporal::TimeToString),
    hints: Some(MappingHints::sized(48)),
}

converter_family! {
    StringToTimeSpan: Type::String => Type::Duration,
    to_provider: func(FuncTemporal::DurationParse),
    from_provider: func(FuncTemporal::DurationToString),
    hints: Some(MappingHints::sized(48)),
}
