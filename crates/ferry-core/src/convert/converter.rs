use super::MappingHints;
use crate::{
    stmt::{Expr, Type, Value},
    Error, Result,
};
use std::{
    fmt,
    sync::{Arc, OnceLock},
};

/// A compiled, one-directional conversion.
pub type ConvertFn = Arc<dyn Fn(&Value) -> Result<Value> + Send + Sync>;

/// Converts values between a model type and a provider type.
///
/// The two directions are stored as expression trees. The trees are what
/// composition operates on; the callable forms returned by
/// [`Converter::to_provider_fn`] and [`Converter::from_provider_fn`] are
/// built from them on first use and reused afterwards.
///
/// Unless [`converts_nulls`](Converter::converts_nulls) is set, `Null`
/// passes through both directions without reaching the expressions.
#[derive(Clone)]
pub struct Converter {
    name: Arc<str>,
    model_ty: Type,
    provider_ty: Type,
    to_provider: Expr,
    from_provider: Expr,
    converts_nulls: bool,
    hints: Option<MappingHints>,
    compiled_to_provider: OnceLock<ConvertFn>,
    compiled_from_provider: OnceLock<ConvertFn>,
}

impl Converter {
    /// Creates a converter from its two conversion expressions.
    ///
    /// In both expressions [`Expr::Arg`] stands for the value being
    /// converted.
    pub fn new(
        name: impl Into<Arc<str>>,
        model_ty: Type,
        provider_ty: Type,
        to_provider: Expr,
        from_provider: Expr,
    ) -> Converter {
        Converter {
            name: name.into(),
            model_ty,
            provider_ty,
            to_provider,
            from_provider,
            converts_nulls: false,
            hints: None,
            compiled_to_provider: OnceLock::new(),
            compiled_from_provider: OnceLock::new(),
        }
    }

    /// Creates a converter from two closures.
    ///
    /// The closures become [`Expr::custom`] nodes, so the result composes
    /// like any other converter.
    pub fn from_fns(
        model_ty: Type,
        provider_ty: Type,
        to_provider: impl Fn(Value) -> Result<Value> + Send + Sync + 'static,
        from_provider: impl Fn(Value) -> Result<Value> + Send + Sync + 'static,
    ) -> Converter {
        Converter::new(
            "Custom",
            model_ty,
            provider_ty,
            Expr::custom("to_provider", Expr::Arg, to_provider),
            Expr::custom("from_provider", Expr::Arg, from_provider),
        )
    }

    pub fn with_hints(mut self, hints: Option<MappingHints>) -> Converter {
        self.hints = hints;
        self
    }

    /// When `true`, `Null` is handed to the conversion expressions like any
    /// other value.
    pub fn with_converts_nulls(mut self, converts_nulls: bool) -> Converter {
        self.converts_nulls = converts_nulls;
        self
    }

    /// Family name, used in diagnostics
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn model_ty(&self) -> &Type {
        &self.model_ty
    }

    pub fn provider_ty(&self) -> &Type {
        &self.provider_ty
    }

    pub fn to_provider_expr(&self) -> &Expr {
        &self.to_provider
    }

    pub fn from_provider_expr(&self) -> &Expr {
        &self.from_provider
    }

    pub fn converts_nulls(&self) -> bool {
        self.converts_nulls
    }

    pub fn hints(&self) -> Option<&MappingHints> {
        self.hints.as_ref()
    }

    /// The model-to-provider conversion as a callable.
    pub fn to_provider_fn(&self) -> &ConvertFn {
        self.compiled_to_provider
            .get_or_init(|| self.compile(&self.to_provider, &self.model_ty, "to provider"))
    }

    /// The provider-to-model conversion as a callable.
    pub fn from_provider_fn(&self) -> &ConvertFn {
        self.compiled_from_provider
            .get_or_init(|| self.compile(&self.from_provider, &self.provider_ty, "from provider"))
    }

    pub fn convert_to_provider(&self, value: &Value) -> Result<Value> {
        (self.to_provider_fn())(value)
    }

    pub fn convert_from_provider(&self, value: &Value) -> Result<Value> {
        (self.from_provider_fn())(value)
    }

    /// Swaps the two directions: a `A -> B` converter becomes `B -> A`.
    pub fn reversed(self, name: impl Into<Arc<str>>) -> Converter {
        Converter {
            name: name.into(),
            model_ty: self.provider_ty,
            provider_ty: self.model_ty,
            to_provider: self.from_provider,
            from_provider: self.to_provider,
            converts_nulls: self.converts_nulls,
            hints: self.hints,
            compiled_to_provider: OnceLock::new(),
            compiled_from_provider: OnceLock::new(),
        }
    }

    /// Chains `self: A -> B` with `second: B -> C` into a converter `A -> C`.
    ///
    /// The adjoining types must match once [`Type::Option`] is stripped from
    /// both. When `B` is nullable and `second` expects the non-nullable form,
    /// a cast between the two is inserted. Composing with `None` returns a
    /// copy of `self`.
    pub fn compose_with(&self, second: Option<&Converter>) -> Result<Converter> {
        let Some(second) = second else {
            return Ok(self.clone());
        };

        if self.provider_ty.unwrap_option() != second.model_ty.unwrap_option() {
            return Err(Error::composition_mismatch(
                (&self.model_ty, &self.provider_ty),
                (&second.model_ty, &second.provider_ty),
            ));
        }

        if self.provider_ty.is_option() && !second.model_ty.is_option() {
            let bridge = Converter::new(
                "Casting",
                self.provider_ty.clone(),
                second.model_ty.clone(),
                Expr::cast(Expr::Arg, second.model_ty.clone()),
                Expr::cast(Expr::Arg, self.provider_ty.clone()),
            );

            return self.compose_with(Some(&bridge))?.compose_with(Some(second));
        }

        Ok(Converter {
            name: format!("{}+{}", self.name, second.name).into(),
            model_ty: self.model_ty.clone(),
            provider_ty: second.provider_ty.clone(),
            to_provider: second.to_provider.clone().substituted(&self.to_provider),
            from_provider: self.from_provider.clone().substituted(&second.from_provider),
            converts_nulls: self.converts_nulls || second.converts_nulls,
            hints: MappingHints::compose(self.hints.as_ref(), second.hints.as_ref()),
            compiled_to_provider: OnceLock::new(),
            compiled_from_provider: OnceLock::new(),
        })
    }

    fn compile(&self, expr: &Expr, input_ty: &Type, direction: &'static str) -> ConvertFn {
        tracing::debug!(
            converter = %self.name,
            model_ty = %self.model_ty,
            provider_ty = %self.provider_ty,
            direction,
            "compiling converter"
        );

        let expr = expr.clone();
        let input_ty = input_ty.clone();
        let converts_nulls = self.converts_nulls;

        Arc::new(move |value: &Value| {
            if value.is_null() && !converts_nulls {
                return Ok(Value::Null);
            }

            if !value.is_a(&input_ty) {
                return Err(Error::type_conversion(value.clone(), &input_ty));
            }

            expr.eval(value)
        })
    }
}

impl fmt::Debug for Converter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("name", &self.name)
            .field("model_ty", &self.model_ty)
            .field("provider_ty", &self.provider_ty)
            .field("to_provider", &self.to_provider)
            .field("from_provider", &self.from_provider)
            .field("converts_nulls", &self.converts_nulls)
            .field("hints", &self.hints)
            .finish()
    }
}
