//! The generation pipeline: load, check, emit, write

use crate::config::GeneratorConfig;
use schemagen_codegen::{GeneratedSources, RustEmitter, check_references};
use schemagen_diagnostics::{Diagnostic, Result, SG0200, SG0201, SG0202, SG0203, SchemaError};
use schemagen_model::{CompilationContext, RecordType, Registry, load_schemas};
use serde::Serialize;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

/// Loaded and checked schemas, ready for emission
#[derive(Debug)]
pub struct Compilation {
    context: CompilationContext,
    diagnostics: Vec<Diagnostic>,
}

impl Compilation {
    /// Record types in declaration order
    pub fn records(&self) -> &[RecordType] {
        self.context.records()
    }

    pub fn registry(&self) -> &Registry {
        self.context.registry()
    }

    /// Loader diagnostics followed by reference check diagnostics
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }

    pub fn loaded_files(&self) -> impl Iterator<Item = &Path> {
        self.context.loaded_files()
    }

    /// Serializable view of the resolved type graph
    pub fn type_graph(&self) -> TypeGraph<'_> {
        TypeGraph {
            files: self.loaded_files().collect(),
            registry: self.registry(),
            records: self.records(),
            diagnostics: self.diagnostics(),
        }
    }
}

/// The resolved type graph as reported by `inspect`
#[derive(Debug, Serialize)]
pub struct TypeGraph<'a> {
    pub files: Vec<&'a Path>,
    pub registry: &'a Registry,
    pub records: &'a [RecordType],
    pub diagnostics: &'a [Diagnostic],
}

/// Outcome of a successful run
#[derive(Debug)]
pub struct GenerationReport {
    /// Number of record types emitted
    pub records: usize,
    pub diagnostics: Vec<Diagnostic>,
    /// Files written, type section first
    pub outputs: Vec<PathBuf>,
}

/// Load every input and check the resulting record types
pub fn compile(config: &GeneratorConfig) -> Result<Compilation> {
    let context = load_schemas(&config.inputs, &config.loader_options())?;
    let mut diagnostics = context.diagnostics().to_vec();
    diagnostics.extend(check_references(context.records()));
    log::info!(
        "Loaded {} schema file(s): {} record types, {} diagnostics",
        context.loaded_files().count(),
        context.records().len(),
        diagnostics.len()
    );
    Ok(Compilation { context, diagnostics })
}

/// Emit both sections for a compilation
pub fn emit(config: &GeneratorConfig, compilation: &Compilation) -> Result<GeneratedSources> {
    RustEmitter::new(config.codegen_options())
        .emit(compilation.records())
        .map_err(|e| SchemaError::output(SG0202, e.to_string(), None))
}

/// Run the whole pipeline and write `<base>.rs` and `<base>_load.rs`
pub fn generate(config: &GeneratorConfig) -> Result<GenerationReport> {
    let compilation = compile(config)?;
    let outputs = write_outputs(config, &compilation)?;
    Ok(GenerationReport {
        records: compilation.records().len(),
        diagnostics: compilation.diagnostics,
        outputs,
    })
}

/// Emit and write both sections; returns the written paths, type section first
///
/// Outputs are staged in temporary files next to their destination, so an
/// error leaves any previous outputs untouched. In strict mode nothing is
/// written when the compilation reported any diagnostic.
pub fn write_outputs(config: &GeneratorConfig, compilation: &Compilation) -> Result<Vec<PathBuf>> {
    if config.strict && !compilation.diagnostics().is_empty() {
        return Err(SchemaError::output(
            SG0203,
            format!("{} diagnostic(s) reported, no output written", compilation.diagnostics().len()),
            None,
        ));
    }

    let defs_path = config.defs_path();
    let loaders_path = config.loaders_path();
    let mut defs_file = stage(&defs_path)?;
    let mut loaders_file = stage(&loaders_path)?;

    let sources = emit(config, compilation)?;
    write_staged(&mut defs_file, &defs_path, &sources.defs)?;
    write_staged(&mut loaders_file, &loaders_path, &sources.loaders)?;
    commit(defs_file, &defs_path)?;
    commit(loaders_file, &loaders_path)?;

    log::info!("Wrote {} and {}", defs_path.display(), loaders_path.display());
    Ok(vec![defs_path, loaders_path])
}

fn stage(path: &Path) -> Result<NamedTempFile> {
    let dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };
    NamedTempFile::new_in(dir).map_err(|e| {
        SchemaError::output(
            SG0200,
            format!("Error creating output file {}: {e}", path.display()),
            Some(path.to_path_buf()),
        )
    })
}

fn write_staged(file: &mut NamedTempFile, path: &Path, contents: &str) -> Result<()> {
    file.write_all(contents.as_bytes())
        .and_then(|()| file.flush())
        .map_err(|e| {
            SchemaError::output(
                SG0201,
                format!("Error writing output file {}: {e}", path.display()),
                Some(path.to_path_buf()),
            )
        })
}

fn commit(file: NamedTempFile, path: &Path) -> Result<()> {
    file.persist(path).map_err(|e| {
        SchemaError::output(
            SG0201,
            format!("Error writing output file {}: {}", path.display(), e.error),
            Some(path.to_path_buf()),
        )
    })?;
    Ok(())
}
