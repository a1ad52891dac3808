//! Generator configuration

use schemagen_codegen::CodegenOptions;
use schemagen_model::{LoaderOptions, ResolutionMode};
use std::path::PathBuf;

/// Default base name of the generated files
pub const DEFAULT_BASE_NAME: &str = "staschema";

/// Settings for one generation run
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Schema files, loaded in order
    pub inputs: Vec<PathBuf>,
    /// Directory the generated files are written to
    pub output_dir: PathBuf,
    /// File name stem of the generated files
    pub base_name: String,
    /// Prefix of every generated type name
    pub prefix: String,
    /// Path of the runtime crate used by generated code
    pub runtime_crate: String,
    /// Extra include directories
    pub include_paths: Vec<PathBuf>,
    pub mode: ResolutionMode,
    /// Refuse to write output when any diagnostic was reported
    pub strict: bool,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        let codegen = CodegenOptions::default();
        Self {
            inputs: Vec::new(),
            output_dir: PathBuf::from("."),
            base_name: DEFAULT_BASE_NAME.to_string(),
            prefix: codegen.prefix,
            runtime_crate: codegen.runtime_crate,
            include_paths: Vec::new(),
            mode: ResolutionMode::default(),
            strict: false,
        }
    }
}

impl GeneratorConfig {
    pub fn new(inputs: Vec<PathBuf>) -> Self {
        Self {
            inputs,
            ..Self::default()
        }
    }

    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn with_base_name(mut self, base_name: impl Into<String>) -> Self {
        self.base_name = base_name.into();
        self
    }

    pub fn with_mode(mut self, mode: ResolutionMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Path of the type section (`<base>.rs`)
    pub fn defs_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}.rs", self.base_name))
    }

    /// Path of the loader section (`<base>_load.rs`)
    pub fn loaders_path(&self) -> PathBuf {
        self.output_dir.join(format!("{}_load.rs", self.base_name))
    }

    /// Loader settings: configured include directories, then `SCHEMAGEN_INCLUDE_PATH`
    pub fn loader_options(&self) -> LoaderOptions {
        let from_env = LoaderOptions::from_env();
        let mut include_paths = self.include_paths.clone();
        include_paths.extend(from_env.include_paths);
        LoaderOptions {
            include_paths,
            mode: self.mode,
        }
    }

    pub fn codegen_options(&self) -> CodegenOptions {
        CodegenOptions::default()
            .with_prefix(self.prefix.clone())
            .with_runtime_crate(self.runtime_crate.clone())
    }
}
