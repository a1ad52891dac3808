//! Owned XML element tree for schemagen
//!
//! This crate provides:
//! - `Document`: a text buffer parsed into a tree of named elements with
//!   attributes and ordered children
//! - Tree queries (same-tag sibling runs, pre-order traversal, text content)
//! - Primitive value parsers called by generated loader routines

pub mod document;
pub mod parse;
pub mod tree;

pub use document::*;
pub use parse::*;
pub use tree::*;
