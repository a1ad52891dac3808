//! Schema loading and the record type model
//!
//! This crate provides:
//! - `types`: type descriptors, properties, element declarations and record types
//! - `context`: the compilation context holding registries, records and diagnostics
//! - `loader`: reading schema files with include resolution
//! - `builder`: turning complexType declarations into record types

pub mod builder;
pub mod context;
pub mod loader;
pub mod types;

pub use builder::TypeModelBuilder;
pub use context::{CompilationContext, Registry, ResolutionMode};
pub use loader::{INCLUDE_PATH_ENV, LoaderOptions, SchemaLoader, SchemaSource, load_schemas};
pub use types::*;
