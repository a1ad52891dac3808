//! Output formatting utilities

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::Colorize;
use schemagen_diagnostics::{Diagnostic, SchemaError, Severity};
use std::io::IsTerminal;

/// When to color terminal output
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum ColorMode {
    #[default]
    Auto,
    Always,
    Never,
}

/// Set up color output based on user preference
pub fn setup_colors(mode: ColorMode) {
    match mode {
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        ColorMode::Auto => colored::control::set_override(std::io::stderr().is_terminal()),
    }
}

/// Format an error for display
///
/// Schema errors are rendered as diagnostics so that their file location and
/// help text are shown.
pub fn format_error(error: &anyhow::Error) -> String {
    match error.downcast_ref::<SchemaError>() {
        Some(schema_error) => {
            let diagnostic = schema_error.to_diagnostic();
            let mut text = format!("{} {}\n{}", "Error:".red().bold(), error, diagnostic.render());
            if let Some(help) = &diagnostic.help {
                text.push_str(&format!("\n  {} {}", "help:".cyan(), help));
            }
            text
        }
        None => format!("{} {:#}", "Error:".red().bold(), error),
    }
}

/// Format a warning for display
pub fn format_warning(warning: &str) -> String {
    format!("{} {}", "Warning:".yellow().bold(), warning)
}

/// Format a success message for display
pub fn format_success(message: &str) -> String {
    format!("{} {}", "Success:".green().bold(), message)
}

/// Print diagnostics to stderr, one line each
pub fn print_diagnostics(diagnostics: &[Diagnostic]) {
    for diagnostic in diagnostics {
        eprintln!("{}", diagnostic.render());
        if let Some(help) = &diagnostic.help {
            eprintln!("  {} {}", "help:".cyan(), help);
        }
    }
}

/// "2 error(s), 1 warning(s)" style summary, or `None` when there is nothing to report
pub fn summarize(diagnostics: &[Diagnostic]) -> Option<String> {
    let errors = diagnostics.iter().filter(|d| d.severity == Severity::Error).count();
    let warnings = diagnostics.iter().filter(|d| d.severity == Severity::Warning).count();

    let mut parts = Vec::new();
    if errors > 0 {
        parts.push(format!("{errors} error(s)").red().to_string());
    }
    if warnings > 0 {
        parts.push(format!("{warnings} warning(s)").yellow().to_string());
    }
    (!parts.is_empty()).then(|| parts.join(", "))
}

/// Serialize a value as pretty JSON
pub fn format_json<T: serde::Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("Failed to serialize JSON")
}
