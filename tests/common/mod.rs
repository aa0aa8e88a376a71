//! Shared helpers for integration tests.

#![allow(dead_code)]

use irconst::descriptors::DescriptorTable;
use irconst::ir::{DeclId, IrCall, IrConst, IrExpr, TypedExpr};
use irconst_core::ClassKind;

/// Route `tracing` output to the test harness. Filter with `RUST_LOG` (default `irconst=debug`).
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("irconst=debug")),
        )
        .with_test_writer()
        .try_init();
}

pub fn lit(konst: IrConst) -> IrExpr {
    TypedExpr::constant(konst)
}

/// Register an annotation class with a constructor taking `params`; returns the constructor.
pub fn annotation(table: &mut DescriptorTable, fq_name: &str, params: &[&str]) -> DeclId {
    let class = table.add_class(fq_name, ClassKind::AnnotationClass);
    table.add_constructor(class, params).expect("class was just registered")
}

/// An annotation application with positional constant arguments.
pub fn apply(ctor: DeclId, args: Vec<IrConst>) -> IrCall {
    args.into_iter()
        .enumerate()
        .fold(IrCall::constructor(ctor), |call, (i, arg)| call.with_arg(i, lit(arg)))
}
