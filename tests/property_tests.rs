//! Property-based tests for constant reification
//!
//! These tests use proptest to check the kind-to-value mapping across many generated payloads.

mod common;

use common::lit;
use irconst::ir::{ConstPayload, IrConst, IrType, TypedExpr};
use irconst::reify::{self, ConstantReifier, ConstantValue, ReifyConfig};
use irconst_core::ConstKind;
use proptest::prelude::*;

fn non_nan_f32() -> impl Strategy<Value = f32> {
    any::<f32>().prop_filter("NaN never compares equal", |v| !v.is_nan())
}

fn non_nan_f64() -> impl Strategy<Value = f64> {
    any::<f64>().prop_filter("NaN never compares equal", |v| !v.is_nan())
}

// =============================================================================
// Identity: a literal of kind K with payload P reifies to K(P)
// =============================================================================

proptest! {
    #[test]
    fn boolean_identity(v in any::<bool>()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::boolean(v))), Ok(ConstantValue::Boolean(v)));
    }

    #[test]
    fn byte_identity(v in any::<i8>()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::byte(v))), Ok(ConstantValue::Byte(v)));
    }

    #[test]
    fn short_identity(v in any::<i16>()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::short(v))), Ok(ConstantValue::Short(v)));
    }

    #[test]
    fn int_identity(v in any::<i32>()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::int(v))), Ok(ConstantValue::Int(v)));
    }

    #[test]
    fn long_identity(v in any::<i64>()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::long(v))), Ok(ConstantValue::Long(v)));
    }

    #[test]
    fn char_identity(v in any::<char>()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::char(v))), Ok(ConstantValue::Char(v)));
    }

    #[test]
    fn float_identity(v in non_nan_f32()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::float(v))), Ok(ConstantValue::Float(v)));
    }

    #[test]
    fn double_identity(v in non_nan_f64()) {
        prop_assert_eq!(reify::reify(&lit(IrConst::double(v))), Ok(ConstantValue::Double(v)));
    }

    #[test]
    fn string_identity(v in ".*") {
        prop_assert_eq!(reify::reify(&lit(IrConst::string(v.clone()))), Ok(ConstantValue::String(v)));
    }
}

// =============================================================================
// Aggregates and narrowing
// =============================================================================

proptest! {
    #[test]
    fn vararg_preserves_length_and_order(values in prop::collection::vec(any::<i32>(), 0..16)) {
        let expr = TypedExpr::vararg(
            IrType::Int,
            values.iter().map(|v| lit(IrConst::int(*v))).collect(),
        );
        let expected = ConstantValue::Array(values.into_iter().map(ConstantValue::Int).collect());
        prop_assert_eq!(reify::reify(&expr), Ok(expected));
    }

    #[test]
    fn strict_byte_accepts_exactly_the_i8_range(v in -1000i64..1000) {
        let konst = IrConst::raw(ConstKind::Byte, Some(ConstPayload::Integer(v)));
        let strict = ConstantReifier::with_config(ReifyConfig::strict()).reify(&lit(konst.clone()));
        prop_assert_eq!(strict.is_ok(), i8::try_from(v).is_ok());

        // Wrapping never fails and keeps the low byte.
        prop_assert_eq!(ConstantReifier::new().reify(&lit(konst)), Ok(ConstantValue::Byte(v as i8)));
    }
}
