//! Generate command implementation

use super::output;
use crate::config::GeneratorConfig;
use anyhow::{Context, Result};

/// Configuration for generate command
pub struct GenerateConfig {
    pub generator: GeneratorConfig,
    pub verbose: bool,
}

/// Generate record types and loaders from schema files
pub fn generate(config: GenerateConfig) -> Result<()> {
    let generator = &config.generator;
    if generator.inputs.is_empty() {
        anyhow::bail!("No schema files specified");
    }

    let compilation = crate::compile(generator).context("Failed to load schemas")?;
    output::print_diagnostics(compilation.diagnostics());

    if let Some(summary) = output::summarize(compilation.diagnostics()) {
        eprintln!("{}", output::format_warning(&format!("Found {summary}")));
    }

    let outputs = crate::write_outputs(generator, &compilation).context("Failed to write generated code")?;

    if config.verbose {
        for path in &outputs {
            eprintln!("  wrote {}", path.display());
        }
    }
    eprintln!(
        "{}",
        output::format_success(&format!(
            "Generated {} record type(s) into {}",
            compilation.records().len(),
            generator.output_dir.display()
        ))
    );
    Ok(())
}
