use super::Expr;

struct Substitute<'a> {
    input: &'a Expr,
}

impl Substitute<'_> {
    fn visit_expr_mut(&mut self, expr: &mut Expr) {
        match expr {
            Expr::Arg => *expr = self.input.clone(),
            Expr::BinaryOp(expr_binary_op) => {
                self.visit_expr_mut(&mut expr_binary_op.lhs);
                self.visit_expr_mut(&mut expr_binary_op.rhs);
            }
            Expr::Cast(expr_cast) => self.visit_expr_mut(&mut expr_cast.expr),
            Expr::Custom(expr_custom) => self.visit_expr_mut(&mut expr_custom.expr),
            Expr::Func(expr_func) => self.visit_expr_mut(&mut expr_func.expr),
            Expr::If(expr_if) => {
                self.visit_expr_mut(&mut expr_if.cond);
                self.visit_expr_mut(&mut expr_if.then);
                self.visit_expr_mut(&mut expr_if.otherwise);
            }
            Expr::Value(_) => {}
        }
    }
}

impl Expr {
    /// Replaces every [`Expr::Arg`] with `input`.
    ///
    /// Substituting converter A's forward expression into converter B's
    /// forward expression yields the forward expression of "A then B".
    pub fn substitute(&mut self, input: &Expr) {
        Substitute { input }.visit_expr_mut(self);
    }

    /// Consuming form of [`Expr::substitute`].
    pub fn substituted(mut self, input: &Expr) -> Expr {
        self.substitute(input);
        self
    }
}
