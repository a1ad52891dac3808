//! Rust code generation for schemagen record types
//!
//! Every record type becomes a struct wrapping its base record (or the
//! implicit root record), with accessors, mutators and a `load` routine that
//! fills it from a `schemagen_dom::Element`.
//!
//! # Example
//!
//! ```
//! use schemagen_codegen::{CodegenOptions, RustEmitter};
//! use schemagen_model::{Property, RecordType, TypeDescriptor};
//!
//! let foo = RecordType::new("Foo", None).with_property(Property::new("count", TypeDescriptor::Integer));
//! let sources = RustEmitter::new(CodegenOptions::default()).emit(&[foo]).unwrap();
//! assert!(sources.defs.contains("pub struct ScenarioFoo {"));
//! assert!(sources.loaders.contains("self.base.load(e);"));
//! ```

pub mod check;
pub mod emit;
pub mod ident;
pub mod naming;

pub use check::check_references;
pub use emit::{CodegenError, CodegenOptions, GeneratedSources, RustEmitter};
pub use naming::NameTable;
