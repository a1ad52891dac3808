//! Diagnostics and fatal error types

use crate::{ErrorCode, SourceLocation};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// How serious a recoverable issue is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// The responsible declaration was dropped
    Error,
    /// Output is produced but may be incomplete
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Error => "error",
            Self::Warning => "warning",
        })
    }
}

/// A non-fatal issue found while loading schemas or generating code
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub severity: Severity,
    pub code: ErrorCode,
    pub message: String,
    /// Schema file the issue was found in
    pub file: Option<PathBuf>,
    /// Position inside `file`
    pub location: Option<SourceLocation>,
    pub help: Option<String>,
}

impl Diagnostic {
    fn new(severity: Severity, code: ErrorCode, message: String) -> Self {
        Self {
            severity,
            code,
            message,
            file: None,
            location: None,
            help: None,
        }
    }

    pub fn error(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Error, code, message.into())
    }

    pub fn warning(code: ErrorCode, message: impl Into<String>) -> Self {
        Self::new(Severity::Warning, code, message.into())
    }

    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    pub fn with_location(mut self, location: SourceLocation) -> Self {
        self.location = Some(location);
        self
    }

    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    pub fn is_error(&self) -> bool {
        self.severity == Severity::Error
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {} - {}", self.severity, self.code, self.message)?;
        match (&self.file, &self.location) {
            (Some(file), Some(loc)) => write!(f, " at {}:{}", file.display(), loc)?,
            (Some(file), None) => write!(f, " in {}", file.display())?,
            (None, Some(loc)) => write!(f, " at {}", loc)?,
            (None, None) => {}
        }
        Ok(())
    }
}

/// Fatal errors that abort a generation run
#[derive(Debug, Clone, Error)]
pub enum SchemaError {
    /// A schema document could not be opened, resolved or parsed
    #[error("{code}: {message}")]
    Document {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
        location: Option<SourceLocation>,
    },

    /// Generated output could not be produced
    #[error("{code}: {message}")]
    Output {
        code: ErrorCode,
        message: String,
        path: Option<PathBuf>,
    },
}

impl SchemaError {
    /// Create a document error for a file
    pub fn document(code: ErrorCode, message: impl Into<String>, path: impl AsRef<Path>) -> Self {
        Self::Document {
            code,
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            location: None,
        }
    }

    /// Create a document error with a position inside the file
    pub fn document_at(
        code: ErrorCode,
        message: impl Into<String>,
        path: impl AsRef<Path>,
        location: SourceLocation,
    ) -> Self {
        Self::Document {
            code,
            message: message.into(),
            path: Some(path.as_ref().to_path_buf()),
            location: Some(location),
        }
    }

    /// Create an output error
    pub fn output(code: ErrorCode, message: impl Into<String>, path: Option<PathBuf>) -> Self {
        Self::Output {
            code,
            message: message.into(),
            path,
        }
    }

    /// Get the error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::Document { code, .. } => *code,
            Self::Output { code, .. } => *code,
        }
    }

    /// Get the file the error refers to, if any
    pub fn path(&self) -> Option<&Path> {
        match self {
            Self::Document { path, .. } => path.as_deref(),
            Self::Output { path, .. } => path.as_deref(),
        }
    }

    /// Convert to a diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::Document { code, message, path, location } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(path) = path {
                    diag = diag.with_file(path.clone());
                }
                if let Some(loc) = location {
                    diag = diag.with_location(loc.clone());
                }
                if let Some(help) = code.info().help {
                    diag = diag.with_help(help);
                }
                diag
            }
            Self::Output { code, message, path } => {
                let mut diag = Diagnostic::error(*code, message.clone());
                if let Some(path) = path {
                    diag = diag.with_file(path.clone());
                }
                diag
            }
        }
    }
}
