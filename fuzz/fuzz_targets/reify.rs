#![no_main]

use irconst::ConstKind;
use irconst::ir::{ConstPayload, IrConst, IrExpr, IrType, TypedExpr};
use irconst::reify::{ConstantReifier, DEFAULT_MAX_DEPTH, ReifyConfig};
use libfuzzer_sys::fuzz_target;

// Deeper than the reifier accepts, so the nesting limit is reached too.
const MAX_DEPTH: usize = DEFAULT_MAX_DEPTH + 44;

const KINDS: [ConstKind; 10] = [
    ConstKind::Boolean,
    ConstKind::Byte,
    ConstKind::Short,
    ConstKind::Int,
    ConstKind::Long,
    ConstKind::Char,
    ConstKind::Float,
    ConstKind::Double,
    ConstKind::String,
    ConstKind::Null,
];

/// Build an expression tree from the byte stream: literals with arbitrary kind/payload pairings, nested varargs,
/// and the occasional non-constant node.
fn build(bytes: &mut impl Iterator<Item = u8>, depth: usize) -> IrExpr {
    let tag = bytes.next().unwrap_or(0);
    match tag % 4 {
        0 if depth < MAX_DEPTH => {
            let len = usize::from(bytes.next().unwrap_or(0) % 8);
            let elements = (0..len).map(|_| build(&mut *bytes, depth + 1)).collect();
            TypedExpr::vararg(IrType::Unknown, elements)
        }
        1 => TypedExpr::get_value("x", IrType::Unknown),
        _ => {
            let kind = KINDS[usize::from(bytes.next().unwrap_or(0)) % KINDS.len()];
            let raw = i64::from_le_bytes(std::array::from_fn(|_| bytes.next().unwrap_or(0)));
            let payload = match bytes.next().unwrap_or(0) % 6 {
                0 => None,
                1 => Some(ConstPayload::Bool(raw & 1 == 1)),
                2 => Some(ConstPayload::Integer(raw)),
                3 => Some(ConstPayload::Char(char::from_u32(raw as u32).unwrap_or('?'))),
                4 => Some(ConstPayload::Floating(f64::from_bits(raw as u64))),
                _ => Some(ConstPayload::String(raw.to_string())),
            };
            TypedExpr::constant(IrConst::raw(kind, payload))
        }
    }
}

fuzz_target!(|data: &[u8]| {
    let mut bytes = data.iter().copied();
    let expr = build(&mut bytes, 0);
    // Neither policy may panic, whatever the payload/kind pairing.
    let _ = ConstantReifier::new().reify(&expr);
    let _ = ConstantReifier::with_config(ReifyConfig::strict()).reify(&expr);
    let _ = ConstantReifier::with_config(ReifyConfig::new().with_max_depth(2)).reify(&expr);
});
