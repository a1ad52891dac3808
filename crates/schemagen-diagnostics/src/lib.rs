//! Schema generator diagnostics and error handling
//!
//! This crate provides the error handling infrastructure shared by the loader,
//! the type model builder and the code generator: error codes, source
//! locations, recoverable diagnostics and fatal errors.

mod error;
mod error_code;
mod span;

#[cfg(feature = "colored")]
mod render;

pub use error::*;
pub use error_code::*;
pub use span::*;

/// Result type for operations that can abort a generation run
pub type Result<T> = std::result::Result<T, SchemaError>;
