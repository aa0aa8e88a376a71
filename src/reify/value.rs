//! Constant values produced by reification.

use std::fmt;

use irconst_core::ConstKind;

/// A typed compile-time constant.
///
/// Each scalar variant mirrors one literal kind; `Array` mirrors a vararg aggregate, element order preserved.
/// Values are immutable once built and own all their data.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstantValue {
    Boolean(bool),
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Char(char),
    Float(f32),
    Double(f64),
    String(String),
    Null,
    Array(Vec<ConstantValue>),
}

impl ConstantValue {
    /// The literal kind this value was reified from, or `None` for arrays.
    pub fn kind(&self) -> Option<ConstKind> {
        Some(match self {
            ConstantValue::Boolean(_) => ConstKind::Boolean,
            ConstantValue::Byte(_) => ConstKind::Byte,
            ConstantValue::Short(_) => ConstKind::Short,
            ConstantValue::Int(_) => ConstKind::Int,
            ConstantValue::Long(_) => ConstKind::Long,
            ConstantValue::Char(_) => ConstKind::Char,
            ConstantValue::Float(_) => ConstKind::Float,
            ConstantValue::Double(_) => ConstKind::Double,
            ConstantValue::String(_) => ConstKind::String,
            ConstantValue::Null => ConstKind::Null,
            ConstantValue::Array(_) => return None,
        })
    }

    /// Variant name for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self.kind() {
            Some(kind) => irconst_core::lang::const_kinds::as_str(kind),
            None => "Array",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ConstantValue::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            ConstantValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Any integral value, sign-extended.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            ConstantValue::Byte(v) => Some((*v).into()),
            ConstantValue::Short(v) => Some((*v).into()),
            ConstantValue::Int(v) => Some((*v).into()),
            ConstantValue::Long(v) => Some(*v),
            _ => None,
        }
    }

    /// Any floating value, widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ConstantValue::Float(v) => Some((*v).into()),
            ConstantValue::Double(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_char(&self) -> Option<char> {
        match self {
            ConstantValue::Char(c) => Some(*c),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ConstantValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[ConstantValue]> {
        match self {
            ConstantValue::Array(items) => Some(items),
            _ => None,
        }
    }
}

/// Source-like rendering: `7.toByte()`, `(-7).toShort()`, `7L`, `1.5f`, `Float.NaN`, `"s"`, `[1, 2]`.
impl fmt::Display for ConstantValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstantValue::Boolean(b) => write!(f, "{}", b),
            ConstantValue::Byte(v) if *v < 0 => write!(f, "({}).toByte()", v),
            ConstantValue::Byte(v) => write!(f, "{}.toByte()", v),
            ConstantValue::Short(v) if *v < 0 => write!(f, "({}).toShort()", v),
            ConstantValue::Short(v) => write!(f, "{}.toShort()", v),
            ConstantValue::Int(v) => write!(f, "{}", v),
            ConstantValue::Long(v) => write!(f, "{}L", v),
            ConstantValue::Char(c) => write!(f, "'{}'", c.escape_debug()),
            ConstantValue::Float(v) => match non_finite(f64::from(*v)) {
                Some(name) => write!(f, "Float.{}", name),
                None => write!(f, "{:?}f", v),
            },
            ConstantValue::Double(v) => match non_finite(*v) {
                Some(name) => write!(f, "Double.{}", name),
                None => write!(f, "{:?}", v),
            },
            ConstantValue::String(s) => write!(f, "{:?}", s),
            ConstantValue::Null => f.write_str("null"),
            ConstantValue::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

fn non_finite(v: f64) -> Option<&'static str> {
    if v.is_nan() {
        Some("NaN")
    } else if v == f64::INFINITY {
        Some("POSITIVE_INFINITY")
    } else if v == f64::NEG_INFINITY {
        Some("NEGATIVE_INFINITY")
    } else {
        None
    }
}
