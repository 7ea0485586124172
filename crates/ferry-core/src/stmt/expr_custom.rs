use super::{Expr, Value};
use crate::Result;
use std::{fmt, sync::Arc};

/// A user-supplied conversion function.
pub type CustomFn = Arc<dyn Fn(Value) -> Result<Value> + Send + Sync>;

/// Applies an opaque function to the result of `expr`.
///
/// Unlike built-in functions, a custom function is handed `Null` values
/// as-is, so it can map them to something else.
#[derive(Clone)]
pub struct ExprCustom {
    /// Name shown when the expression is printed
    pub name: Arc<str>,

    /// The function to apply
    pub func: CustomFn,

    /// The function's input
    pub expr: Box<Expr>,
}

impl Expr {
    pub fn custom(
        name: &str,
        expr: impl Into<Self>,
        func: impl Fn(Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Self {
        ExprCustom {
            name: name.into(),
            func: Arc::new(func),
            expr: Box::new(expr.into()),
        }
        .into()
    }
}

impl PartialEq for ExprCustom {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.func, &other.func) && self.expr == other.expr
    }
}

impl fmt::Debug for ExprCustom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExprCustom")
            .field("name", &self.name)
            .field("expr", &self.expr)
            .finish()
    }
}

impl From<ExprCustom> for Expr {
    fn from(value: ExprCustom) -> Self {
        Self::Custom(value)
    }
}
