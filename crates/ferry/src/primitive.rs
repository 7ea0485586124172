use ferry_core::{
    stmt::{PhysicalAddress, Type, Value},
    Result,
};
use rust_decimal::Decimal;
use std::net::IpAddr;
use url::Url;
use uuid::Uuid;

/// A Rust type with a fixed [`Type`] that converts to and from [`Value`].
pub trait Primitive: Sized {
    fn ty() -> Type;

    fn into_value(self) -> Value;

    fn load(value: Value) -> Result<Self>;

    /// Returns `true` if the primitive represents a nullable type (e.g. `Option`).
    fn nullable() -> bool {
        false
    }
}

macro_rules! impl_primitive {
    ($($ty:ty => $name:ident,)*) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$name
                }

                fn into_value(self) -> Value {
                    self.into()
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    char => Char,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f32 => F32,
    f64 => F64,
    Decimal => Decimal,
    String => String,
    Vec<u8> => Bytes,
    Uuid => Uuid,
    Url => Url,
    IpAddr => IpAddr,
    PhysicalAddress => PhysicalAddress,
}

impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        Type::option(T::ty())
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn nullable() -> bool {
        true
    }
}
