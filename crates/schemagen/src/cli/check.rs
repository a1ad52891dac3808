//! Check command implementation

use super::output;
use crate::config::GeneratorConfig;
use anyhow::{Context, Result};
use colored::Colorize;

/// Configuration for check command
pub struct CheckConfig {
    pub generator: GeneratorConfig,
    pub verbose: bool,
}

/// Load and check schema files without writing any output
///
/// Returns whether the schemas are clean: no diagnostics at all in strict
/// mode, otherwise no error-level diagnostics.
pub fn check(config: CheckConfig) -> Result<bool> {
    let generator = &config.generator;
    if generator.inputs.is_empty() {
        anyhow::bail!("No schema files specified");
    }

    let compilation = crate::compile(generator).context("Failed to load schemas")?;

    if config.verbose {
        for file in compilation.loaded_files() {
            eprintln!("Checked: {}", file.display());
        }
    }
    output::print_diagnostics(compilation.diagnostics());

    let diagnostics = compilation.diagnostics();
    let has_errors = diagnostics.iter().any(|d| d.is_error());
    let clean = !has_errors && !(generator.strict && !diagnostics.is_empty());

    match output::summarize(diagnostics) {
        None => println!(
            "{}",
            output::format_success(&format!(
                "{} record type(s), no issues found",
                compilation.records().len()
            ))
        ),
        Some(summary) if clean => eprintln!("{}", output::format_warning(&format!("Found {summary}"))),
        Some(summary) => {
            eprintln!("{} Found {}", "Check failed:".red().bold(), summary);
            if generator.strict && !has_errors {
                eprintln!("{}", "Strict mode: treating warnings as errors".yellow());
            }
        }
    }

    Ok(clean)
}
