//! Inspect command implementation

use super::output;
use crate::config::GeneratorConfig;
use crate::generate::Compilation;
use anyhow::{Context, Result};
use clap::ValueEnum;
use std::fmt::Write;

/// Type graph output format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum InspectFormat {
    #[default]
    Json,
    Text,
}

/// Configuration for inspect command
pub struct InspectConfig {
    pub generator: GeneratorConfig,
    pub format: InspectFormat,
}

/// Print the resolved type graph
pub fn inspect(config: InspectConfig) -> Result<()> {
    if config.generator.inputs.is_empty() {
        anyhow::bail!("No schema files specified");
    }

    let compilation = crate::compile(&config.generator).context("Failed to load schemas")?;
    let text = match config.format {
        InspectFormat::Json => output::format_json(&compilation.type_graph())?,
        InspectFormat::Text => format_text(&compilation)?,
    };
    println!("{text}");
    Ok(())
}

/// Plain text summary of records and their properties
pub fn format_text(compilation: &Compilation) -> Result<String> {
    let mut out = String::new();

    writeln!(out, "Elements:")?;
    for element in compilation.registry().elements() {
        writeln!(out, "  {}: {}", element.name, element.ty)?;
    }

    writeln!(out, "Records:")?;
    for record in compilation.records() {
        match &record.base {
            Some(base) => writeln!(out, "  {} : {}", record.name, base)?,
            None => writeln!(out, "  {}", record.name)?,
        }
        for property in &record.properties {
            writeln!(
                out,
                "    {}: {} [{}..{}]",
                property.name, property.ty, property.min_occurs, property.max_occurs
            )?;
        }
    }

    Ok(out.trim_end().to_string())
}
