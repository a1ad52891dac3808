//! Schema-driven record type and loader generator
//!
//! This crate ties the pipeline together:
//! - Loading schema files with their includes into a compilation context
//! - Building record types from complexType declarations
//! - Emitting Rust structs and `load` routines for them
//!
//! # Example
//!
//! ```no_run
//! use schemagen::{GeneratorConfig, generate};
//!
//! let config = GeneratorConfig::new(vec!["schemas/scenario.xsd".into()]).with_output_dir("src/generated");
//! let report = generate(&config)?;
//! for diagnostic in &report.diagnostics {
//!     eprintln!("{diagnostic}");
//! }
//! # Ok::<(), schemagen::SchemaError>(())
//! ```

// Re-export all public APIs from internal crates
pub use schemagen_codegen as codegen;
pub use schemagen_diagnostics as diagnostics;
pub use schemagen_dom as dom;
pub use schemagen_model as model;

pub mod config;
pub mod generate;

// Convenience re-exports
pub use config::GeneratorConfig;
pub use generate::{Compilation, GenerationReport, TypeGraph, compile, emit, generate, write_outputs};
pub use schemagen_diagnostics::{Diagnostic, Result, SchemaError};

// CLI module (only available with cli feature)
#[cfg(feature = "cli")]
pub mod cli;
