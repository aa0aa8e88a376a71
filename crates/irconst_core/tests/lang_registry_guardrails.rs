use std::collections::HashMap;

use irconst_core::QualifiedName;
use irconst_core::lang::{annotations, class_kinds, const_kinds};

#[test]
fn const_kinds_table_order_matches_ids() {
    for (idx, entry) in const_kinds::CONST_KINDS.iter().enumerate() {
        assert_eq!(
            entry.info.id as usize, idx,
            "const kind {:?} is out of declaration order",
            entry.info.id
        );
        assert_eq!(const_kinds::from_str(entry.info.canonical), Some(entry.info.id));
        assert_eq!(const_kinds::as_str(entry.info.id), entry.info.canonical);
    }
    assert_eq!(const_kinds::CONST_KINDS.len(), 10);
}

#[test]
fn const_kind_widths() {
    use const_kinds::ConstKind as K;
    assert_eq!(const_kinds::bits(K::Byte), Some(8));
    assert_eq!(const_kinds::bits(K::Short), Some(16));
    assert_eq!(const_kinds::bits(K::Int), Some(32));
    assert_eq!(const_kinds::bits(K::Long), Some(64));
    assert_eq!(const_kinds::bits(K::String), None);
    assert_eq!(const_kinds::bits(K::Null), None);
    assert!(K::Short.is_integral());
    assert!(!K::Char.is_integral());
    assert!(K::Float.is_floating());
}

#[test]
fn class_kinds_table_order_matches_ids() {
    for (idx, entry) in class_kinds::CLASS_KINDS.iter().enumerate() {
        assert_eq!(entry.id as usize, idx, "class kind {:?} is out of declaration order", entry.id);
        assert_eq!(class_kinds::from_str(entry.canonical), Some(entry.id));
    }
    assert!(class_kinds::ClassKind::AnnotationClass.is_annotation());
    assert!(!class_kinds::ClassKind::Class.is_annotation());
}

#[test]
fn annotations_are_unique_and_resolvable() {
    let mut seen: HashMap<&'static str, annotations::AnnotationId> = HashMap::new();

    for (idx, entry) in annotations::ANNOTATIONS.iter().enumerate() {
        let id = entry.info.id;
        assert_eq!(id as usize, idx, "annotation {:?} is out of declaration order", id);
        assert_eq!(annotations::from_str(entry.info.canonical), Some(id));
        if let Some(prev) = seen.insert(entry.info.canonical, id) {
            panic!("duplicate annotation name {:?}: {:?} and {:?}", entry.info.canonical, prev, id);
        }

        let fq = annotations::fq_name(id);
        assert!(!fq.is_root());
        assert!(!fq.is_constructor(), "annotation name must name the class: {}", fq);
        assert!(
            fq.short_name().chars().next().is_some_and(char::is_uppercase),
            "annotation class names are capitalized: {}",
            fq
        );
    }
}

#[test]
fn annotation_params_are_distinct() {
    for entry in annotations::ANNOTATIONS {
        let mut params = entry.params.to_vec();
        params.sort_unstable();
        params.dedup();
        assert_eq!(params.len(), entry.params.len(), "duplicate params on {}", entry.info.canonical);
    }
    assert_eq!(
        annotations::params(annotations::AnnotationId::ObjCMethod),
        &[annotations::SELECTOR_ARG, annotations::BRIDGE_ARG]
    );
    assert_eq!(
        annotations::fq_name(annotations::AnnotationId::SymbolName),
        QualifiedName::new("native.SymbolName")
    );
}
