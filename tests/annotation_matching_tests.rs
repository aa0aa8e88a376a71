//! Annotation-call detection and named-argument access on annotation applications.

mod common;

use common::{annotation, apply, init_tracing};
use irconst::annotations::{self, AnnotationMatcher};
use irconst::descriptors::DescriptorTable;
use irconst::ir::{IrCall, IrConst};
use irconst::reify::{ConstantReifier, ConstantValue, ReifyError};
use irconst_core::lang::annotations::{self as known, AnnotationId};
use irconst_core::{ClassKind, QualifiedName};

fn fq(name: &str) -> QualifiedName {
    QualifiedName::new(name)
}

// ============================================================================
// is_annotation_call
// ============================================================================

#[test]
fn exact_name_matches() {
    let mut table = DescriptorTable::new();
    let ctor = annotation(&mut table, "lib.Marker", &[]);
    let call = IrCall::constructor(ctor);

    assert!(annotations::is_annotation_call(&call, &fq("lib.Marker"), &table));
}

#[test]
fn near_miss_names_do_not_match() {
    let mut table = DescriptorTable::new();
    let ctor = annotation(&mut table, "lib.MarkerX", &[]);
    let call = IrCall::constructor(ctor);

    assert!(!annotations::is_annotation_call(&call, &fq("lib.Marker"), &table));
    assert!(!annotations::is_annotation_call(&call, &fq("lib.MarkerXY"), &table));
    assert!(!annotations::is_annotation_call(&call, &fq("ib.MarkerX"), &table));
    assert!(!annotations::is_annotation_call(&call, &fq("lib.MarkerX.<init>"), &table));
    assert!(annotations::is_annotation_call(&call, &fq("lib.MarkerX"), &table));
}

#[test]
fn function_call_never_matches() {
    let mut table = DescriptorTable::new();
    let func = table.add_function("lib.Marker", &[]);
    assert!(!annotations::is_annotation_call(&IrCall::function(func), &fq("lib.Marker"), &table));
}

#[cfg(debug_assertions)]
#[test]
#[should_panic(expected = "not an annotation class")]
fn constructor_of_plain_class_trips_debug_assertion() {
    let mut table = DescriptorTable::new();
    let class = table.add_class("lib.Plain", ClassKind::Class);
    let ctor = table.add_constructor(class, &[]).expect("known class");
    let _ = annotations::is_annotation_call(&IrCall::constructor(ctor), &fq("lib.Plain"), &table);
}

// ============================================================================
// Sequence helpers
// ============================================================================

#[test]
fn find_first_match_returns_earliest_match() {
    init_tracing();
    let mut table = DescriptorTable::new();
    let other = annotation(&mut table, "lib.Other", &[]);
    let wanted = annotation(&mut table, "lib.Wanted", &["tag"]);

    let calls = vec![
        apply(other, vec![]),
        apply(wanted, vec![IrConst::string("first")]),
        apply(wanted, vec![IrConst::string("second")]),
    ];

    let found = annotations::find_first_match(&calls, &fq("lib.Wanted"), &table).expect("match");
    assert!(std::ptr::eq(found, &calls[1]));
    assert!(annotations::any_matches(&calls, &fq("lib.Wanted"), &table));
    assert!(!annotations::any_matches(&calls, &fq("lib.Missing"), &table));
    assert!(annotations::find_first_match(&calls, &fq("lib.Missing"), &table).is_none());
}

#[test]
fn empty_sequence_has_no_match() {
    let table = DescriptorTable::new();
    let calls: Vec<IrCall> = Vec::new();
    assert!(!annotations::any_matches(&calls, &fq("lib.Any"), &table));
    assert!(annotations::find_first_match(&calls, &fq("lib.Any"), &table).is_none());
}

#[test]
fn matcher_is_reusable_across_calls() {
    let mut table = DescriptorTable::new();
    let a = annotation(&mut table, "lib.A", &[]);
    let b = annotation(&mut table, "lib.B", &[]);
    let matcher = AnnotationMatcher::new(&fq("lib.B"));

    let hits: Vec<bool> = [a, b, a]
        .into_iter()
        .map(|ctor| matcher.matches(&IrCall::constructor(ctor), &table))
        .collect();
    assert_eq!(hits, vec![false, true, false]);
}

// ============================================================================
// Declaration annotations
// ============================================================================

#[test]
fn declaration_annotations_are_searched() {
    let mut table = DescriptorTable::new();
    let symbol_name = annotation(
        &mut table,
        known::as_str(AnnotationId::SymbolName),
        known::params(AnnotationId::SymbolName),
    );
    let thread_local = annotation(&mut table, known::as_str(AnnotationId::ThreadLocal), &[]);
    let func = table.add_function("app.entry", &[]);
    table
        .annotate(func, apply(thread_local, vec![]))
        .annotate(func, apply(symbol_name, vec![IrConst::string("app_entry")]));

    let symbol_fq = known::fq_name(AnnotationId::SymbolName);
    assert!(annotations::has_annotation(func, &symbol_fq, &table));
    assert!(!annotations::has_annotation(func, &known::fq_name(AnnotationId::ObjCMethod), &table));

    let call = annotations::find_annotation(func, &symbol_fq, &table).expect("SymbolName applied");
    let name = ConstantReifier::new()
        .require_string_argument(call, known::NAME_ARG, &table)
        .expect("name argument");
    assert_eq!(name, "app_entry");

    let well_known = annotations::find_well_known(
        irconst::descriptors::DeclarationMetadata::annotations_of(&table, func),
        AnnotationId::ThreadLocal,
        &table,
    );
    assert!(well_known.is_some());
}

// ============================================================================
// Named arguments
// ============================================================================

#[test]
fn objc_method_arguments_by_name() {
    let mut table = DescriptorTable::new();
    let ctor = annotation(
        &mut table,
        known::as_str(AnnotationId::ObjCMethod),
        known::params(AnnotationId::ObjCMethod),
    );
    let call = apply(ctor, vec![IrConst::string("initWithFrame:"), IrConst::string("objc_bridge_1")]);

    let reifier = ConstantReifier::new();
    let args = reifier.all_value_arguments(&call, &table).expect("constant arguments");
    let names: Vec<&str> = args.iter().map(|(name, _)| name).collect();
    assert_eq!(names, vec![known::SELECTOR_ARG, known::BRIDGE_ARG]);
    assert_eq!(args.get(known::SELECTOR_ARG), Some(&ConstantValue::String("initWithFrame:".into())));
}

#[test]
fn empty_slot_is_reported_as_none() {
    let mut table = DescriptorTable::new();
    let ctor = annotation(&mut table, "lib.Opt", &["a", "b"]);
    let call = IrCall::constructor(ctor).with_arg(1, common::lit(IrConst::int(5)));

    let args = ConstantReifier::new().all_value_arguments(&call, &table).expect("arguments");
    assert_eq!(args.len(), 2);
    assert_eq!(args.slot("a"), Some(None));
    assert_eq!(args.slot("b"), Some(Some(&ConstantValue::Int(5))));
    assert_eq!(args.slot("c"), None);
}

#[test]
fn missing_named_argument() {
    init_tracing();
    let mut table = DescriptorTable::new();
    let ctor = annotation(&mut table, "lib.Named", &["present", "omitted"]);
    let call = apply(ctor, vec![IrConst::boolean(true)]);
    let reifier = ConstantReifier::new();

    // No such parameter.
    assert_eq!(reifier.named_constant_argument(&call, "nope", &table), Ok(None));
    // Parameter exists, no argument supplied.
    assert_eq!(reifier.named_constant_argument(&call, "omitted", &table), Ok(None));
    assert_eq!(
        reifier.require_named_constant_argument(&call, "nope", &table),
        Err(ReifyError::MissingRequiredArgument {
            parameter: "nope".to_string()
        })
    );
    assert_eq!(
        reifier.require_named_constant_argument(&call, "present", &table),
        Ok(ConstantValue::Boolean(true))
    );
}
