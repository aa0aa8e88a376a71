//! IR expression definitions.
//!
//! Literal nodes ([`IrConst`]) and vararg aggregates are the shapes the reifier folds into constant values.
//! The remaining kinds exist in the wider IR and are opaque to reification.

use super::{DeclId, IrSpan, IrType};
use irconst_core::ConstKind;

/// A typed expression in IR
#[derive(Debug, Clone, PartialEq)]
pub struct TypedExpr {
    /// The expression kind
    pub kind: IrExprKind,
    /// Resolved type
    pub ty: IrType,
    /// Source span for error reporting
    pub span: IrSpan,
}

impl TypedExpr {
    pub fn new(kind: IrExprKind, ty: IrType) -> Self {
        Self {
            kind,
            ty,
            span: IrSpan::default(),
        }
    }

    pub fn with_span(mut self, span: IrSpan) -> Self {
        self.span = span;
        self
    }

    /// A literal, typed after its kind.
    pub fn constant(konst: IrConst) -> Self {
        let ty = IrType::of_const_kind(konst.kind);
        Self::new(IrExprKind::Const(konst), ty)
    }

    /// A vararg aggregate of `elements`, each of type `element_ty`.
    pub fn vararg(element_ty: IrType, elements: Vec<IrExpr>) -> Self {
        Self::new(IrExprKind::Vararg(elements), IrType::Array(Box::new(element_ty)))
    }

    pub fn get_value(name: impl Into<String>, ty: IrType) -> Self {
        Self::new(IrExprKind::GetValue { name: name.into() }, ty)
    }

    pub fn call(call: IrCall, ty: IrType) -> Self {
        Self::new(IrExprKind::Call(call), ty)
    }
}

/// IR expression (alias for TypedExpr for convenience)
pub type IrExpr = TypedExpr;

/// Expression kinds in IR
#[derive(Debug, Clone, PartialEq)]
pub enum IrExprKind {
    /// Literal of one of the fixed [`ConstKind`]s.
    Const(IrConst),

    /// Literal array / vararg argument.
    Vararg(Vec<IrExpr>),

    // Variable read
    GetValue { name: String },

    // Function or constructor call
    Call(IrCall),

    // `is` / `as` / `as?`
    TypeOperator(TypeOperatorCall),

    // try / catch / finally
    Try {
        body: Box<IrExpr>,
        catches: Vec<IrCatch>,
        finally: Option<Box<IrExpr>>,
    },
}

impl IrExprKind {
    /// Short node name for diagnostics.
    pub fn node_name(&self) -> &'static str {
        match self {
            IrExprKind::Const(_) => "const",
            IrExprKind::Vararg(_) => "vararg",
            IrExprKind::GetValue { .. } => "get-value",
            IrExprKind::Call(_) => "call",
            IrExprKind::TypeOperator(_) => "type-operator",
            IrExprKind::Try { .. } => "try",
        }
    }
}

/// A literal node: its declared kind plus the stored payload.
///
/// The payload is kept in a wide representation; the kind says how wide the value really is. Use the typed
/// constructors (`IrConst::byte`, `IrConst::float`, ...) to build well-formed literals.
#[derive(Debug, Clone, PartialEq)]
pub struct IrConst {
    pub kind: ConstKind,
    /// `None` only for `Null`.
    pub value: Option<ConstPayload>,
}

/// Stored payload of a literal.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstPayload {
    Bool(bool),
    /// Any integral kind, sign-extended to 64 bits.
    Integer(i64),
    Char(char),
    /// `Float` or `Double`, widened to 64 bits.
    Floating(f64),
    String(String),
}

impl ConstPayload {
    /// Short payload shape name for diagnostics.
    pub fn shape(&self) -> &'static str {
        match self {
            ConstPayload::Bool(_) => "bool",
            ConstPayload::Integer(_) => "integer",
            ConstPayload::Char(_) => "char",
            ConstPayload::Floating(_) => "floating",
            ConstPayload::String(_) => "string",
        }
    }
}

impl IrConst {
    /// A literal with an arbitrary payload. Prefer the typed constructors.
    pub fn raw(kind: ConstKind, value: Option<ConstPayload>) -> Self {
        Self { kind, value }
    }

    pub fn boolean(value: bool) -> Self {
        Self::raw(ConstKind::Boolean, Some(ConstPayload::Bool(value)))
    }

    pub fn byte(value: i8) -> Self {
        Self::raw(ConstKind::Byte, Some(ConstPayload::Integer(value.into())))
    }

    pub fn short(value: i16) -> Self {
        Self::raw(ConstKind::Short, Some(ConstPayload::Integer(value.into())))
    }

    pub fn int(value: i32) -> Self {
        Self::raw(ConstKind::Int, Some(ConstPayload::Integer(value.into())))
    }

    pub fn long(value: i64) -> Self {
        Self::raw(ConstKind::Long, Some(ConstPayload::Integer(value)))
    }

    pub fn char(value: char) -> Self {
        Self::raw(ConstKind::Char, Some(ConstPayload::Char(value)))
    }

    pub fn float(value: f32) -> Self {
        Self::raw(ConstKind::Float, Some(ConstPayload::Floating(value.into())))
    }

    pub fn double(value: f64) -> Self {
        Self::raw(ConstKind::Double, Some(ConstPayload::Floating(value)))
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::raw(ConstKind::String, Some(ConstPayload::String(value.into())))
    }

    pub fn null() -> Self {
        Self::raw(ConstKind::Null, None)
    }
}

/// What a call invokes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallTarget {
    /// A class constructor (annotation applications are constructor calls).
    Constructor(DeclId),
    Function(DeclId),
}

impl CallTarget {
    pub fn callee(self) -> DeclId {
        match self {
            CallTarget::Constructor(id) | CallTarget::Function(id) => id,
        }
    }

    pub fn constructor(self) -> Option<DeclId> {
        match self {
            CallTarget::Constructor(id) => Some(id),
            CallTarget::Function(_) => None,
        }
    }
}

/// A call site: target plus value arguments by slot. `None` marks a slot with no supplied argument.
#[derive(Debug, Clone, PartialEq)]
pub struct IrCall {
    pub target: CallTarget,
    pub args: Vec<Option<IrExpr>>,
    pub span: IrSpan,
}

impl IrCall {
    pub fn new(target: CallTarget) -> Self {
        Self {
            target,
            args: Vec::new(),
            span: IrSpan::default(),
        }
    }

    pub fn constructor(ctor: DeclId) -> Self {
        Self::new(CallTarget::Constructor(ctor))
    }

    pub fn function(func: DeclId) -> Self {
        Self::new(CallTarget::Function(func))
    }

    /// Set the argument at `index`, growing the slot list as needed.
    pub fn with_arg(mut self, index: usize, arg: IrExpr) -> Self {
        if self.args.len() <= index {
            self.args.resize(index + 1, None);
        }
        self.args[index] = Some(arg);
        self
    }

    pub fn with_span(mut self, span: IrSpan) -> Self {
        self.span = span;
        self
    }

    /// The argument supplied at `index`, if any.
    pub fn value_argument(&self, index: usize) -> Option<&IrExpr> {
        self.args.get(index).and_then(Option::as_ref)
    }
}

/// Type operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TypeOperator {
    /// `x is T`
    InstanceOf,
    /// `x as T`
    Cast,
    /// `x as? T`
    SafeCast,
}

/// `argument <operator> type_operand`
#[derive(Debug, Clone, PartialEq)]
pub struct TypeOperatorCall {
    pub operator: TypeOperator,
    pub argument: Box<IrExpr>,
    pub type_operand: IrType,
}

impl TypeOperatorCall {
    /// The class named by the type operand, if it is a class type.
    pub fn type_operand_class(&self) -> Option<DeclId> {
        self.type_operand.class_id()
    }
}

/// A catch clause: the caught parameter and the handler.
#[derive(Debug, Clone, PartialEq)]
pub struct IrCatch {
    pub parameter: String,
    pub parameter_ty: IrType,
    pub result: IrExpr,
}

impl IrCatch {
    /// The class of the caught exception type, if it is a class type.
    pub fn catch_parameter_class(&self) -> Option<DeclId> {
        self.parameter_ty.class_id()
    }
}
