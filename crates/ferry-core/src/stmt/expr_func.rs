use super::{Expr, FuncJson, FuncNet, FuncNum, FuncTemporal, FuncText, Value};
use crate::Result;

/// A built-in conversion function applied to a sub-expression.
///
/// ```text
/// num::to_bytes(arg)           // i32 -> big-endian bytes
/// temporal::date_to_string(arg)
/// ```
///
/// Functions are never called with `Null`; a null operand makes the whole
/// call evaluate to `Null`.
#[derive(Debug, Clone, PartialEq)]
pub struct ExprFunc {
    /// The function to apply
    pub func: Func,

    /// The function's input
    pub expr: Box<Expr>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Func {
    /// Collection to and from JSON text
    Json(FuncJson),

    /// Network addresses
    Net(FuncNet),

    /// Numbers to and from text and bytes
    Num(FuncNum),

    /// Dates, times and spans
    Temporal(FuncTemporal),

    /// Text, GUIDs, URLs, characters and enums
    Text(FuncText),
}

impl Func {
    pub(crate) fn eval(&self, value: Value) -> Result<Value> {
        match self {
            Func::Json(func) => func.eval(value),
            Func::Net(func) => func.eval(value),
            Func::Num(func) => func.eval(value),
            Func::Temporal(func) => func.eval(value),
            Func::Text(func) => func.eval(value),
        }
    }
}

impl Expr {
    pub fn func(func: impl Into<Func>, expr: impl Into<Self>) -> Self {
        ExprFunc {
            func: func.into(),
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl From<ExprFunc> for Expr {
    fn from(value: ExprFunc) -> Self {
        Self::Func(value)
    }
}

impl From<FuncJson> for Func {
    fn from(value: FuncJson) -> Self {
        Self::Json(value)
    }
}

impl From<FuncNet> for Func {
    fn from(value: FuncNet) -> Self {
        Self::Net(value)
    }
}

impl From<FuncNum> for Func {
    fn from(value: FuncNum) -> Self {
        Self::Num(value)
    }
}

impl From<FuncTemporal> for Func {
    fn from(value: FuncTemporal) -> Self {
        Self::Temporal(value)
    }
}

impl From<FuncText> for Func {
    fn from(value: FuncText) -> Self {
        Self::Text(value)
    }
}
