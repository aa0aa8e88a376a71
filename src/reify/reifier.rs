//! Literal / vararg IR → [`ConstantValue`].

use super::{ConstantValue, NarrowingPolicy, ReifyConfig, ReifyError};
use crate::ir::{ConstPayload, IrConst, IrExpr, IrExprKind};
use irconst_core::ConstKind;

/// Folds constant IR expressions into [`ConstantValue`]s.
///
/// The input is assumed to already be a compile-time constant (the typechecker guarantees this upstream); the
/// reifier does not re-validate, it only converts. Any other node shape is reported as
/// [`ReifyError::UnsupportedConstantExpression`].
///
/// ## Examples
///
/// ```rust
/// use irconst::ir::{IrConst, IrType, TypedExpr};
/// use irconst::reify::{ConstantReifier, ConstantValue};
///
/// let expr = TypedExpr::vararg(
///     IrType::Int,
///     vec![TypedExpr::constant(IrConst::int(1)), TypedExpr::constant(IrConst::int(2))],
/// );
/// let value = ConstantReifier::new().reify(&expr).unwrap();
/// assert_eq!(value, ConstantValue::Array(vec![ConstantValue::Int(1), ConstantValue::Int(2)]));
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConstantReifier {
    config: ReifyConfig,
}

impl ConstantReifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ReifyConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReifyConfig {
        &self.config
    }

    /// Reify `expr`. Vararg elements are reified in order.
    ///
    /// Vararg nesting deeper than [`ReifyConfig::max_depth`] is rejected with [`ReifyError::NestingTooDeep`].
    #[tracing::instrument(level = "trace", skip_all, fields(node = expr.kind.node_name()))]
    pub fn reify(&self, expr: &IrExpr) -> Result<ConstantValue, ReifyError> {
        self.reify_at(expr, 0)
    }

    fn reify_at(&self, expr: &IrExpr, depth: usize) -> Result<ConstantValue, ReifyError> {
        if depth > self.config.max_depth {
            tracing::debug!(max_depth = self.config.max_depth, start = expr.span.start, "vararg nesting too deep");
            return Err(ReifyError::NestingTooDeep {
                max_depth: self.config.max_depth,
                span: expr.span,
            });
        }
        match &expr.kind {
            IrExprKind::Const(konst) => self.reify_const(konst),
            IrExprKind::Vararg(elements) => elements
                .iter()
                .map(|element| self.reify_at(element, depth + 1))
                .collect::<Result<Vec<_>, _>>()
                .map(ConstantValue::Array),
            other => {
                tracing::debug!(node = other.node_name(), start = expr.span.start, "non-constant expression");
                Err(ReifyError::UnsupportedConstantExpression {
                    node: other.node_name(),
                    span: expr.span,
                })
            }
        }
    }

    fn reify_const(&self, konst: &IrConst) -> Result<ConstantValue, ReifyError> {
        let kind = konst.kind;
        // Null ignores whatever payload is stored.
        if kind == ConstKind::Null {
            return Ok(ConstantValue::Null);
        }
        let Some(payload) = &konst.value else {
            return Err(ReifyError::PayloadMismatch { kind, found: "missing" });
        };

        match (kind, payload) {
            (ConstKind::Boolean, ConstPayload::Bool(b)) => Ok(ConstantValue::Boolean(*b)),
            (ConstKind::Byte, ConstPayload::Integer(v)) => {
                self.check_integer_width(kind, *v)?;
                Ok(ConstantValue::Byte(*v as i8))
            }
            (ConstKind::Short, ConstPayload::Integer(v)) => {
                self.check_integer_width(kind, *v)?;
                Ok(ConstantValue::Short(*v as i16))
            }
            (ConstKind::Int, ConstPayload::Integer(v)) => {
                self.check_integer_width(kind, *v)?;
                Ok(ConstantValue::Int(*v as i32))
            }
            (ConstKind::Long, ConstPayload::Integer(v)) => Ok(ConstantValue::Long(*v)),
            (ConstKind::Char, ConstPayload::Char(c)) => Ok(ConstantValue::Char(*c)),
            (ConstKind::Float, ConstPayload::Floating(v)) => {
                self.check_float_width(*v)?;
                Ok(ConstantValue::Float(*v as f32))
            }
            (ConstKind::Double, ConstPayload::Floating(v)) => Ok(ConstantValue::Double(*v)),
            (ConstKind::String, ConstPayload::String(s)) => Ok(ConstantValue::String(s.clone())),
            (kind, payload) => Err(ReifyError::PayloadMismatch {
                kind,
                found: payload.shape(),
            }),
        }
    }

    fn check_integer_width(&self, kind: ConstKind, value: i64) -> Result<(), ReifyError> {
        if self.config.narrowing == NarrowingPolicy::Wrap {
            return Ok(());
        }
        let fits = match kind {
            ConstKind::Byte => i8::try_from(value).is_ok(),
            ConstKind::Short => i16::try_from(value).is_ok(),
            ConstKind::Int => i32::try_from(value).is_ok(),
            _ => true,
        };
        if fits {
            Ok(())
        } else {
            Err(ReifyError::ConstantOutOfRange {
                kind,
                value: value.to_string(),
            })
        }
    }

    fn check_float_width(&self, value: f64) -> Result<(), ReifyError> {
        if self.config.narrowing == NarrowingPolicy::Wrap {
            return Ok(());
        }
        // Exact iff the value survives a round trip through f32.
        if value.is_nan() || value.is_infinite() || f64::from(value as f32) == value {
            Ok(())
        } else {
            Err(ReifyError::ConstantOutOfRange {
                kind: ConstKind::Float,
                value: value.to_string(),
            })
        }
    }
}
