use crate::{
    stmt::{BinaryOp, Expr, Value},
    Result,
};

impl Expr {
    /// Evaluates the expression with `arg` bound to [`Expr::Arg`].
    ///
    /// Casts, built-in functions and comparisons propagate `Null`. Custom
    /// functions receive `Null` like any other value.
    pub fn eval(&self, arg: &Value) -> Result<Value> {
        match self {
            Expr::Arg => Ok(arg.clone()),
            Expr::BinaryOp(expr_binary_op) => {
                let lhs = expr_binary_op.lhs.eval(arg)?;
                let rhs = expr_binary_op.rhs.eval(arg)?;

                if lhs.is_null() || rhs.is_null() {
                    return Ok(Value::Null);
                }

                match expr_binary_op.op {
                    BinaryOp::Eq => Ok((lhs == rhs).into()),
                    BinaryOp::Ne => Ok((lhs != rhs).into()),
                }
            }
            Expr::Cast(expr_cast) => expr_cast.ty.cast(expr_cast.expr.eval(arg)?),
            Expr::Custom(expr_custom) => (expr_custom.func)(expr_custom.expr.eval(arg)?),
            Expr::Func(expr_func) => {
                let value = expr_func.expr.eval(arg)?;

                if value.is_null() {
                    return Ok(Value::Null);
                }

                expr_func.func.eval(value)
            }
            Expr::If(expr_if) => match expr_if.cond.eval(arg)? {
                Value::Bool(true) => expr_if.then.eval(arg),
                Value::Bool(false) => expr_if.otherwise.eval(arg),
                Value::Null => Ok(Value::Null),
                value => Err(crate::Error::expression_evaluation_failed(format!(
                    "condition must evaluate to Bool; got {}",
                    value.variant_name()
                ))),
            },
            Expr::Value(value) => Ok(value.clone()),
        }
    }

    /// Evaluates the expression and requires a boolean result.
    pub fn eval_bool(&self, arg: &Value) -> Result<bool> {
        match self.eval(arg)? {
            Value::Bool(value) => Ok(value),
            value => Err(crate::Error::expression_evaluation_failed(format!(
                "expected expression to evaluate to Bool; got {}",
                value.variant_name()
            ))),
        }
    }
}
