//! In-memory descriptor model.

use std::collections::{HashMap, HashSet};

use super::{ClassKindQuery, DeclarationMetadata, FqNameResolver, ParameterLookup};
use crate::ir::{DeclId, IrCall, ModuleName, ValueParameter};
use irconst_core::{ClassKind, QualifiedName};

#[derive(Debug, Clone, Default)]
struct DeclEntry {
    fq_name: QualifiedName,
    class_kind: Option<ClassKind>,
    /// Set on constructors.
    constructed_class: Option<DeclId>,
    params: Option<Vec<ValueParameter>>,
    annotations: Vec<IrCall>,
    module: Option<ModuleName>,
}

/// A descriptor model backed by plain maps.
///
/// ## Examples
///
/// ```rust
/// use irconst::descriptors::{ClassKindQuery, DescriptorTable, FqNameResolver};
/// use irconst_core::{ClassKind, QualifiedName};
///
/// let mut table = DescriptorTable::new();
/// let ann = table.add_class("native.SymbolName", ClassKind::AnnotationClass);
/// let ctor = table.add_constructor(ann, &["name"]).unwrap();
///
/// assert_eq!(table.constructed_class(ctor), Some(ann));
/// assert_eq!(table.fq_name_of(ctor), Some(QualifiedName::new("native.SymbolName.<init>")));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DescriptorTable {
    decls: Vec<DeclEntry>,
    external: HashSet<DeclId>,
    local: HashSet<DeclId>,
    anonymous_objects: HashSet<DeclId>,
    delegated_fields: HashSet<DeclId>,
    by_name: HashMap<QualifiedName, DeclId>,
}

impl DescriptorTable {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, entry: DeclEntry) -> DeclId {
        // Handles are dense indices into `decls`.
        let id = DeclId(u32::try_from(self.decls.len()).expect("INVARIANT: fewer than u32::MAX declarations"));
        self.by_name.entry(entry.fq_name.clone()).or_insert(id);
        self.decls.push(entry);
        id
    }

    fn entry(&self, decl: DeclId) -> Option<&DeclEntry> {
        self.decls.get(decl.0 as usize)
    }

    /// Register a class-like declaration.
    pub fn add_class(&mut self, fq_name: impl Into<QualifiedName>, kind: ClassKind) -> DeclId {
        self.push(DeclEntry {
            fq_name: fq_name.into(),
            class_kind: Some(kind),
            ..DeclEntry::default()
        })
    }

    /// Register a constructor of `class` with the given parameter names (slot = position).
    ///
    /// The constructor is named `<class fq name>.<init>`. Returns `None` when `class` is not a known handle,
    /// like the other mutators that take a handle.
    pub fn add_constructor(&mut self, class: DeclId, params: &[&str]) -> Option<DeclId> {
        let fq_name = self.entry(class)?.fq_name.constructor();
        Some(self.push(DeclEntry {
            fq_name,
            constructed_class: Some(class),
            params: Some(parameters(params)),
            ..DeclEntry::default()
        }))
    }

    /// Register a function with the given parameter names (slot = position).
    pub fn add_function(&mut self, fq_name: impl Into<QualifiedName>, params: &[&str]) -> DeclId {
        self.push(DeclEntry {
            fq_name: fq_name.into(),
            params: Some(parameters(params)),
            ..DeclEntry::default()
        })
    }

    /// Register a declaration that is neither a class nor callable (fields, properties).
    pub fn add_declaration(&mut self, fq_name: impl Into<QualifiedName>) -> DeclId {
        self.push(DeclEntry {
            fq_name: fq_name.into(),
            ..DeclEntry::default()
        })
    }

    /// Attach an annotation application to `decl`. Unknown handles are ignored.
    pub fn annotate(&mut self, decl: DeclId, annotation: IrCall) -> &mut Self {
        if let Some(entry) = self.decls.get_mut(decl.0 as usize) {
            entry.annotations.push(annotation);
        }
        self
    }

    pub fn mark_external(&mut self, decl: DeclId) -> &mut Self {
        self.external.insert(decl);
        self
    }

    pub fn mark_local(&mut self, decl: DeclId) -> &mut Self {
        self.local.insert(decl);
        self
    }

    pub fn mark_anonymous_object(&mut self, decl: DeclId) -> &mut Self {
        self.anonymous_objects.insert(decl);
        self
    }

    pub fn mark_delegated_field(&mut self, decl: DeclId) -> &mut Self {
        self.delegated_fields.insert(decl);
        self
    }

    pub fn set_module(&mut self, decl: DeclId, module: ModuleName) -> &mut Self {
        if let Some(entry) = self.decls.get_mut(decl.0 as usize) {
            entry.module = Some(module);
        }
        self
    }

    /// Look up the first declaration registered under `fq_name`.
    pub fn lookup(&self, fq_name: &QualifiedName) -> Option<DeclId> {
        self.by_name.get(fq_name).copied()
    }

    pub fn len(&self) -> usize {
        self.decls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }
}

fn parameters(names: &[&str]) -> Vec<ValueParameter> {
    names
        .iter()
        .enumerate()
        .map(|(index, name)| ValueParameter::new(*name, index))
        .collect()
}

impl DeclarationMetadata for DescriptorTable {
    fn annotations_of(&self, decl: DeclId) -> &[IrCall] {
        self.entry(decl).map(|e| e.annotations.as_slice()).unwrap_or(&[])
    }

    fn is_external(&self, decl: DeclId) -> bool {
        self.external.contains(&decl)
    }

    fn is_local(&self, decl: DeclId) -> bool {
        self.local.contains(&decl)
    }

    fn is_anonymous_object(&self, decl: DeclId) -> bool {
        self.anonymous_objects.contains(&decl)
    }

    fn is_delegated_field(&self, decl: DeclId) -> bool {
        self.delegated_fields.contains(&decl)
    }

    fn owning_module(&self, decl: DeclId) -> Option<&ModuleName> {
        self.entry(decl).and_then(|e| e.module.as_ref())
    }
}

impl ParameterLookup for DescriptorTable {
    fn formal_parameters_of(&self, callee: DeclId) -> Option<&[ValueParameter]> {
        self.entry(callee).and_then(|e| e.params.as_deref())
    }
}

impl ClassKindQuery for DescriptorTable {
    fn kind_of(&self, class: DeclId) -> Option<ClassKind> {
        self.entry(class).and_then(|e| e.class_kind)
    }

    fn constructed_class(&self, ctor: DeclId) -> Option<DeclId> {
        self.entry(ctor).and_then(|e| e.constructed_class)
    }
}

impl FqNameResolver for DescriptorTable {
    fn fq_name_of(&self, decl: DeclId) -> Option<QualifiedName> {
        self.entry(decl).map(|e| e.fq_name.clone())
    }
}
