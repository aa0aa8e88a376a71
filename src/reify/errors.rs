//! Error types for constant reification.
//!
//! All of these are compiler-internal: they mean an earlier pass let a non-constant or malformed expression
//! reach a place that requires a constant. The surrounding pipeline decides how (and whether) to surface them to
//! the user; the span, when present, points at the offending IR node.

use miette::Diagnostic;
use thiserror::Error;

use crate::ir::IrSpan;
use irconst_core::ConstKind;

/// Error during constant reification or argument access.
#[derive(Debug, Clone, PartialEq, Error, Diagnostic)]
pub enum ReifyError {
    #[error("unsupported constant expression: a `{node}` node cannot be folded to a constant")]
    #[diagnostic(
        code(irconst::reify::unsupported_constant_expression),
        help("only literals and vararg aggregates of literals are constant")
    )]
    UnsupportedConstantExpression {
        node: &'static str,
        #[label("not a compile-time constant")]
        span: IrSpan,
    },

    #[error("vararg nesting exceeds the limit of {max_depth} levels")]
    #[diagnostic(code(irconst::reify::nesting_too_deep))]
    NestingTooDeep {
        max_depth: usize,
        #[label("nested too deeply")]
        span: IrSpan,
    },

    #[error("missing required argument `{parameter}`")]
    #[diagnostic(code(irconst::reify::missing_required_argument))]
    MissingRequiredArgument { parameter: String },

    #[error("literal of kind {kind} carries a {found} payload")]
    #[diagnostic(code(irconst::reify::payload_mismatch))]
    PayloadMismatch { kind: ConstKind, found: &'static str },

    #[error("value {value} does not fit in {kind}")]
    #[diagnostic(code(irconst::reify::constant_out_of_range))]
    ConstantOutOfRange { kind: ConstKind, value: String },

    #[error("argument `{parameter}` is {found}, expected {expected}")]
    #[diagnostic(code(irconst::reify::unexpected_argument_kind))]
    UnexpectedArgumentKind {
        parameter: String,
        expected: ConstKind,
        found: &'static str,
    },
}
