use super::*;

/// A conversion expression.
///
/// Converters describe each direction as a small tree rather than an opaque
/// closure. The tree is the source of truth: it can be inspected, composed
/// with another converter's tree (see [`Expr::substitute`]) and evaluated
/// against a value (see [`Expr::eval`]).
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// The value being converted
    Arg,

    /// Binary expression
    BinaryOp(ExprBinaryOp),

    /// Cast an expression to a different type
    Cast(ExprCast),

    /// Apply a user-supplied function
    Custom(ExprCustom),

    /// Built-in conversion function
    Func(ExprFunc),

    /// Conditional on a boolean expression
    If(ExprIf),

    /// Evaluates to a constant value
    Value(Value),
}

impl Expr {
    pub fn arg() -> Self {
        Self::Arg
    }

    pub fn is_arg(&self) -> bool {
        matches!(self, Self::Arg)
    }

    pub fn value(value: impl Into<Value>) -> Self {
        Self::Value(value.into())
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }
}

impl From<Value> for Expr {
    fn from(value: Value) -> Self {
        Self::Value(value)
    }
}
