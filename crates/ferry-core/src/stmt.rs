mod eval;

mod expr;
pub use expr::Expr;

mod expr_binary_op;
pub use expr_binary_op::ExprBinaryOp;

mod expr_cast;
pub use expr_cast::ExprCast;

mod expr_custom;
pub use expr_custom::{CustomFn, ExprCustom};

mod expr_func;
pub use expr_func::{ExprFunc, Func};

mod expr_if;
pub use expr_if::ExprIf;

mod func_json;
pub use func_json::FuncJson;
pub(crate) use func_json::is_json_element;

mod func_net;
pub use func_net::FuncNet;

mod func_num;
pub use func_num::FuncNum;

mod func_temporal;
pub use func_temporal::FuncTemporal;
pub(crate) use func_temporal::to_ticks;

mod func_text;
pub use func_text::FuncText;

mod num;

mod op_binary;
pub use op_binary::BinaryOp;

mod physical_address;
pub use physical_address::PhysicalAddress;

mod substitute;

mod ty;
pub use ty::Type;
pub(crate) use ty::NUMERIC;

mod ty_cast;

mod ty_enum;
pub use ty_enum::{EnumVariant, TypeEnum};

mod value;
pub use value::Value;

mod value_chrono;
pub use value_chrono::{DateTimeKind, ValueDateTime};

mod value_enum;
pub use value_enum::ValueEnum;
