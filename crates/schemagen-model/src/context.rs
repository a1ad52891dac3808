//! Compilation context: registries, built records and collected diagnostics
//!
//! One context is created per generation run and threaded through the loader
//! and the type model builder. It is filled while schemas are loaded and only
//! read afterwards.

use crate::builder::TypeModelBuilder;
use crate::loader::SchemaSource;
use crate::types::{ElementDecl, RecordType, TypeDescriptor};
use indexmap::map::Entry;
use indexmap::{IndexMap, IndexSet};
use schemagen_diagnostics::{Diagnostic, SG0103, SG0107, Severity, SourceLocation};
use schemagen_dom::Element;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// When complexType declarations are turned into record types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ResolutionMode {
    /// Build each file's types as soon as its own elements are registered.
    /// A `ref` to an element from a file loaded later is dropped.
    #[default]
    SinglePass,
    /// Build all types after every input has been loaded
    Deferred,
}

/// Name-keyed declaration tables, append-if-absent, in registration order
#[derive(Debug, Clone, Default, Serialize)]
pub struct Registry {
    elements: IndexMap<String, ElementDecl>,
    types: IndexMap<String, TypeDescriptor>,
}

impl Registry {
    /// Look up a global element declaration
    pub fn element(&self, name: &str) -> Option<&ElementDecl> {
        self.elements.get(name)
    }

    /// All global element declarations in registration order
    pub fn elements(&self) -> impl Iterator<Item = &ElementDecl> {
        self.elements.values()
    }

    /// Look up a named schema type
    pub fn type_descriptor(&self, name: &str) -> Option<&TypeDescriptor> {
        self.types.get(name)
    }

    /// All named schema types in registration order
    pub fn types(&self) -> impl Iterator<Item = (&str, &TypeDescriptor)> {
        self.types.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Insert unless the name is taken; returns the existing declaration otherwise
    fn insert_element(&mut self, decl: ElementDecl) -> Result<(), &ElementDecl> {
        match self.elements.entry(decl.name.clone()) {
            Entry::Occupied(existing) => Err(existing.into_mut()),
            Entry::Vacant(slot) => {
                slot.insert(decl);
                Ok(())
            }
        }
    }

    fn insert_type(&mut self, name: &str, ty: TypeDescriptor) -> bool {
        match self.types.entry(name.to_string()) {
            Entry::Occupied(_) => false,
            Entry::Vacant(slot) => {
                slot.insert(ty);
                true
            }
        }
    }
}

/// A complexType declaration waiting to be built
#[derive(Debug, Clone)]
pub(crate) struct PendingComplexType {
    pub node: Element,
    /// Name of the directly enclosing `<element>`, if any
    pub enclosing: Option<String>,
    /// Declared directly under the schema root
    pub top_level: bool,
    pub source: Rc<SchemaSource>,
}

/// State of one generation run
#[derive(Debug, Default)]
pub struct CompilationContext {
    registry: Registry,
    records: Vec<RecordType>,
    loaded_files: IndexSet<PathBuf>,
    pending: Vec<PendingComplexType>,
    diagnostics: Vec<Diagnostic>,
    mode: ResolutionMode,
}

impl CompilationContext {
    /// Create a context with single-pass resolution
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a context with the given resolution mode
    pub fn with_mode(mode: ResolutionMode) -> Self {
        Self {
            mode,
            ..Self::default()
        }
    }

    pub fn mode(&self) -> ResolutionMode {
        self.mode
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Built record types in declaration order
    pub fn records(&self) -> &[RecordType] {
        &self.records
    }

    /// Consume the context, keeping the record types
    pub fn into_records(self) -> Vec<RecordType> {
        self.records
    }

    /// Diagnostics in the order they were reported
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    /// Canonical paths of every schema file loaded so far
    pub fn loaded_files(&self) -> impl Iterator<Item = &Path> {
        self.loaded_files.iter().map(PathBuf::as_path)
    }

    pub fn is_loaded(&self, canonical: &Path) -> bool {
        self.loaded_files.contains(canonical)
    }

    /// Record a file as loaded; returns false if it already was
    pub fn mark_loaded(&mut self, canonical: &Path) -> bool {
        self.loaded_files.insert(canonical.to_path_buf())
    }

    pub fn report(&mut self, diagnostic: Diagnostic) {
        log::debug!("{diagnostic}");
        self.diagnostics.push(diagnostic);
    }

    pub fn error_count(&self) -> usize {
        self.count(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count(Severity::Warning)
    }

    fn count(&self, severity: Severity) -> usize {
        self.diagnostics.iter().filter(|d| d.severity == severity).count()
    }

    /// Register a global element; the first declaration of a name wins
    pub fn register_element(&mut self, decl: ElementDecl, location: Option<SourceLocation>) -> bool {
        let source = decl.source.clone();
        let name = decl.name.clone();
        let first = match self.registry.insert_element(decl) {
            Ok(()) => return true,
            Err(existing) => existing.source.clone(),
        };

        let mut diag = Diagnostic::warning(SG0103, format!("Element {name} is defined more than once."));
        if let Some(source) = source {
            diag = diag.with_file(source);
        }
        if let Some(location) = location {
            diag = diag.with_location(location);
        }
        if let Some(first) = first {
            diag = diag.with_help(format!("first declared in {}", first.display()));
        }
        self.report(diag);
        false
    }

    /// Register a named schema type; the first declaration of a name wins
    pub fn register_type(&mut self, name: &str, ty: TypeDescriptor) -> bool {
        self.registry.insert_type(name, ty)
    }

    /// Hand over a complexType; built now or at [`finish`](Self::finish) depending on the mode
    pub(crate) fn accept(&mut self, pending: PendingComplexType) {
        match self.mode {
            ResolutionMode::SinglePass => self.build_pending(pending),
            ResolutionMode::Deferred => self.pending.push(pending),
        }
    }

    /// Build every deferred complexType; a no-op in single-pass mode
    pub fn finish(&mut self) {
        let pending = std::mem::take(&mut self.pending);
        if !pending.is_empty() {
            log::info!("Resolving {} deferred complexType declarations", pending.len());
        }
        for p in pending {
            self.build_pending(p);
        }
    }

    fn build_pending(&mut self, pending: PendingComplexType) {
        let builder = TypeModelBuilder::new(&self.registry).with_source(&pending.source);
        let record = match builder.build(&pending.node, pending.enclosing.as_deref(), &mut self.diagnostics) {
            Ok(record) => record,
            Err(diag) => return self.report(diag),
        };

        if self.records.iter().any(|r| r.name == record.name) {
            let location = pending.source.document.location(pending.node.span());
            self.report(
                Diagnostic::warning(SG0107, format!("Type {} is defined more than once.", record.name))
                    .with_file(pending.source.path.clone())
                    .with_location(location),
            );
            return;
        }

        if pending.top_level {
            self.register_type(&record.name, TypeDescriptor::Custom(record.name.clone()));
        }
        log::debug!("Built record type {} ({} properties)", record.name, record.properties.len());
        self.records.push(record);
    }
}
