//! Structured error codes for the schema generator
//!
//! Error code ranges:
//! - SG0001-SG0099: Document errors (opening, parsing, includes)
//! - SG0100-SG0199: Schema declaration errors (names, patterns, references)
//! - SG0200-SG0299: Generation errors (emission, output files)

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::sync::LazyLock;

/// Error code identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ErrorCode(u16);

impl ErrorCode {
    /// Create a new error code
    pub const fn new(code: u16) -> Self {
        Self(code)
    }

    /// Get the numeric code
    pub const fn code(&self) -> u16 {
        self.0
    }

    /// Get error information for this code
    pub fn info(&self) -> &'static ErrorInfo {
        ERROR_INFO.get(&self.0).unwrap_or(&UNKNOWN_ERROR)
    }

    /// Check if this is a document error (0001-0099)
    pub const fn is_document_error(&self) -> bool {
        self.0 >= 1 && self.0 < 100
    }

    /// Check if this is a schema declaration error (0100-0199)
    pub const fn is_schema_error(&self) -> bool {
        self.0 >= 100 && self.0 < 200
    }

    /// Check if this is a generation error (0200-0299)
    pub const fn is_generation_error(&self) -> bool {
        self.0 >= 200 && self.0 < 300
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SG{:04}", self.0)
    }
}

/// Information about an error code
#[derive(Debug, Clone)]
pub struct ErrorInfo {
    /// Short description of the error
    pub description: &'static str,
    /// Detailed help text
    pub help: Option<&'static str>,
}

impl ErrorInfo {
    const fn new(description: &'static str) -> Self {
        Self {
            description,
            help: None,
        }
    }

    const fn with_help(mut self, help: &'static str) -> Self {
        self.help = Some(help);
        self
    }
}

static UNKNOWN_ERROR: ErrorInfo = ErrorInfo::new("Unknown error");

static ERROR_INFO: LazyLock<HashMap<u16, ErrorInfo>> = LazyLock::new(|| {
    let mut map = HashMap::new();

    // Document errors (0001-0099)
    map.insert(1, ErrorInfo::new("Schema file could not be opened"));
    map.insert(2, ErrorInfo::new("Schema document is not well-formed"));
    map.insert(3, ErrorInfo::new("Included schema could not be found")
        .with_help("Include locations are resolved against the including file's directory, then each include path"));

    // Schema declaration errors (0100-0199)
    map.insert(100, ErrorInfo::new("Missing name for complexType")
        .with_help("Name the complexType or nest it directly inside a named element"));
    map.insert(101, ErrorInfo::new("Unrecognized complexType definition pattern")
        .with_help("Supported shapes: sequence, complexContent/sequence, complexContent/extension"));
    map.insert(102, ErrorInfo::new("Undefined element in ref"));
    map.insert(103, ErrorInfo::new("Element is defined more than once"));
    map.insert(104, ErrorInfo::new("Invalid occurrence constraint"));
    map.insert(105, ErrorInfo::new("Element has neither name nor ref"));
    map.insert(106, ErrorInfo::new("Unresolved type reference"));
    map.insert(107, ErrorInfo::new("Type is defined more than once"));
    map.insert(108, ErrorInfo::new("Generated Rust name is already taken")
        .with_help("Schema names that differ only in case or punctuation map to the same Rust name; the later one gets a numeric suffix"));

    // Generation errors (0200-0299)
    map.insert(200, ErrorInfo::new("Output file could not be created"));
    map.insert(201, ErrorInfo::new("Output file could not be written"));
    map.insert(202, ErrorInfo::new("Code emission failed"));
    map.insert(203, ErrorInfo::new("Diagnostics reported in strict mode")
        .with_help("Fix the reported declarations or run without --strict"));

    map
});

// Document errors
pub const SG0001: ErrorCode = ErrorCode::new(1);
pub const SG0002: ErrorCode = ErrorCode::new(2);
pub const SG0003: ErrorCode = ErrorCode::new(3);

// Schema declaration errors
pub const SG0100: ErrorCode = ErrorCode::new(100);
pub const SG0101: ErrorCode = ErrorCode::new(101);
pub const SG0102: ErrorCode = ErrorCode::new(102);
pub const SG0103: ErrorCode = ErrorCode::new(103);
pub const SG0104: ErrorCode = ErrorCode::new(104);
pub const SG0105: ErrorCode = ErrorCode::new(105);
pub const SG0106: ErrorCode = ErrorCode::new(106);
pub const SG0107: ErrorCode = ErrorCode::new(107);
pub const SG0108: ErrorCode = ErrorCode::new(108);

// Generation errors
pub const SG0200: ErrorCode = ErrorCode::new(200);
pub const SG0201: ErrorCode = ErrorCode::new(201);
pub const SG0202: ErrorCode = ErrorCode::new(202);
pub const SG0203: ErrorCode = ErrorCode::new(203);
