//! Schema file loading and include resolution

use crate::context::{CompilationContext, PendingComplexType, ResolutionMode};
use crate::types::{ElementDecl, TypeDescriptor, anonymous_type_name};
use schemagen_diagnostics::{Diagnostic, Result, SG0001, SG0002, SG0003, SG0105, SchemaError, SourceLocation, Span};
use schemagen_dom::Document;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// Environment variable with extra include directories, colon separated
pub const INCLUDE_PATH_ENV: &str = "SCHEMAGEN_INCLUDE_PATH";

/// A parsed schema file
#[derive(Debug)]
pub struct SchemaSource {
    /// Canonical path of the file
    pub path: PathBuf,
    pub document: Document,
}

/// Settings for loading a set of schema files
#[derive(Debug, Clone, Default)]
pub struct LoaderOptions {
    /// Directories searched for includes not found next to the including file
    pub include_paths: Vec<PathBuf>,
    pub mode: ResolutionMode,
}

impl LoaderOptions {
    /// Options with include directories taken from `SCHEMAGEN_INCLUDE_PATH`
    pub fn from_env() -> Self {
        let include_paths = env::var_os(INCLUDE_PATH_ENV)
            .map(|value| {
                env::split_paths(&value)
                    .filter(|p| !p.as_os_str().is_empty())
                    .collect()
            })
            .unwrap_or_default();
        Self {
            include_paths,
            mode: ResolutionMode::default(),
        }
    }

    pub fn with_include_path(mut self, dir: impl Into<PathBuf>) -> Self {
        self.include_paths.push(dir.into());
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }
}

/// Load every file in order and resolve all declarations
///
/// Recoverable problems end up in the returned context's diagnostics; only
/// unreadable or malformed files abort.
pub fn load_schemas<P: AsRef<Path>>(paths: &[P], options: &LoaderOptions) -> Result<CompilationContext> {
    let mut ctx = CompilationContext::with_mode(options.mode);
    let mut loader = SchemaLoader::new(&mut ctx).with_include_paths(options.include_paths.clone());
    for path in paths {
        loader.load(path.as_ref())?;
    }
    ctx.finish();
    Ok(ctx)
}

/// Reads schema files into a [`CompilationContext`]
#[derive(Debug)]
pub struct SchemaLoader<'ctx> {
    ctx: &'ctx mut CompilationContext,
    include_paths: Vec<PathBuf>,
}

impl<'ctx> SchemaLoader<'ctx> {
    pub fn new(ctx: &'ctx mut CompilationContext) -> Self {
        Self {
            ctx,
            include_paths: Vec::new(),
        }
    }

    pub fn with_include_paths(mut self, include_paths: Vec<PathBuf>) -> Self {
        self.include_paths = include_paths;
        self
    }

    /// Load a schema file and, first, everything it includes
    ///
    /// A file that was already loaded (directly or as an include) is skipped.
    pub fn load(&mut self, path: &Path) -> Result<()> {
        let canonical = fs::canonicalize(path).map_err(|e| {
            SchemaError::document(SG0001, format!("Error opening schema file {}: {e}", path.display()), path)
        })?;
        if !self.ctx.mark_loaded(&canonical) {
            log::debug!("Schema {} already loaded", canonical.display());
            return Ok(());
        }
        self.load_file(canonical)
    }

    fn load_file(&mut self, path: PathBuf) -> Result<()> {
        log::info!("Loading schema {}", path.display());

        let text = fs::read_to_string(&path).map_err(|e| {
            SchemaError::document(SG0001, format!("Error opening schema file {}: {e}", path.display()), &path)
        })?;
        let document = match Document::parse(text.as_str()) {
            Ok(document) => document,
            Err(e) => {
                let message = format!("Error parsing schema file {}: {e}", path.display());
                return Err(match e.position() {
                    Some(offset) => SchemaError::document_at(
                        SG0002,
                        message,
                        &path,
                        SourceLocation::from_span(Span::point(offset), &text),
                    ),
                    None => SchemaError::document(SG0002, message, &path),
                });
            }
        };
        let source = Rc::new(SchemaSource { path, document });

        self.load_includes(&source)?;
        self.register_elements(&source);
        self.collect_complex_types(&source);
        Ok(())
    }

    fn load_includes(&mut self, source: &SchemaSource) -> Result<()> {
        let dir = source.path.parent().unwrap_or(Path::new("."));
        let includes = source
            .document
            .root()
            .descendants()
            .map(|visit| visit.element)
            .filter(|e| e.name() == "include");

        for include in includes {
            let location = include.attribute_or_empty("schemaLocation");
            if location.is_empty() {
                continue;
            }

            let resolved = self.resolve_include(dir, location).ok_or_else(|| {
                SchemaError::document_at(
                    SG0003,
                    format!("Included schema {location} not found"),
                    &source.path,
                    source.document.location(include.span()),
                )
            })?;

            if self.ctx.mark_loaded(&resolved) {
                log::info!("Include: {}", resolved.display());
                self.load_file(resolved)?;
            }
        }
        Ok(())
    }

    fn resolve_include(&self, dir: &Path, location: &str) -> Option<PathBuf> {
        std::iter::once(dir)
            .chain(self.include_paths.iter().map(PathBuf::as_path))
            .map(|base| base.join(location))
            .find(|candidate| candidate.is_file())
            .and_then(|found| fs::canonicalize(found).ok())
    }

    fn register_elements(&mut self, source: &SchemaSource) {
        for e in source.document.root().children().filter(|e| e.name() == "element") {
            let location = source.document.location(e.span());
            let name = e.attribute_or_empty("name");
            if name.is_empty() {
                self.ctx.report(
                    Diagnostic::warning(SG0105, "Global element without a name")
                        .with_file(source.path.clone())
                        .with_location(location),
                );
                continue;
            }

            let ty = TypeDescriptor::from_type_name(anonymous_type_name(name, e.attribute_or_empty("type")));
            let decl = ElementDecl::new(name, ty).with_source(source.path.clone());
            self.ctx.register_element(decl, Some(location));
        }
    }

    fn collect_complex_types(&mut self, source: &Rc<SchemaSource>) {
        let root = source.document.root();
        for visit in root.descendants().filter(|v| v.element.name() == "complexType") {
            let enclosing = visit
                .parent
                .filter(|p| p.name() == "element")
                .and_then(|p| p.attribute("name"))
                .map(str::to_string);
            let top_level = visit.parent.is_some_and(|p| std::ptr::eq(p, root));

            self.ctx.accept(PendingComplexType {
                node: visit.element.clone(),
                enclosing,
                top_level,
                source: Rc::clone(source),
            });
        }
    }
}
