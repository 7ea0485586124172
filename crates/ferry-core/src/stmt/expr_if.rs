use super::Expr;

/// `if cond { then } else { otherwise }`
#[derive(Debug, Clone, PartialEq)]
pub struct ExprIf {
    /// Must evaluate to a boolean
    pub cond: Box<Expr>,

    pub then: Box<Expr>,

    pub otherwise: Box<Expr>,
}

impl Expr {
    pub fn if_then_else(
        cond: impl Into<Self>,
        then: impl Into<Self>,
        otherwise: impl Into<Self>,
    ) -> Self {
        ExprIf {
            cond: Box::new(cond.into()),
            then: Box::new(then.into()),
            otherwise: Box::new(otherwise.into()),
        }
        .into()
    }
}

impl From<ExprIf> for Expr {
    fn from(value: ExprIf) -> Self {
        Self::If(value)
    }
}
