//! schemagen command-line interface

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use schemagen::GeneratorConfig;
use schemagen::cli::inspect::InspectFormat;
use schemagen::cli::output::ColorMode;
use schemagen::cli::{check, generate, inspect, logging, output};
use schemagen::config::DEFAULT_BASE_NAME;
use schemagen::model::ResolutionMode;
use std::path::PathBuf;

/// Schema-driven record type and loader generator
#[derive(Parser)]
#[command(name = "schemagen")]
#[command(author, version, about = "Generate Rust record types and loaders from XML schemas", long_about = None)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Color output
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command that loads schemas
#[derive(Args)]
struct LoadArgs {
    /// Schema files to load, in order
    #[arg(required = true)]
    files: Vec<PathBuf>,

    /// Include search paths (also read from SCHEMAGEN_INCLUDE_PATH)
    #[arg(short = 'I', long = "include-path")]
    include_paths: Vec<PathBuf>,

    /// Resolve element references after all files are loaded
    #[arg(long)]
    deferred_refs: bool,
}

impl LoadArgs {
    fn into_config(self) -> GeneratorConfig {
        let mode = if self.deferred_refs {
            ResolutionMode::Deferred
        } else {
            ResolutionMode::SinglePass
        };
        let mut config = GeneratorConfig::new(self.files).with_mode(mode);
        config.include_paths = self.include_paths;
        config
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Generate record types and loaders
    Generate {
        #[command(flatten)]
        load: LoadArgs,

        /// Output directory
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Base name of the generated files
        #[arg(long = "base", default_value = DEFAULT_BASE_NAME)]
        base_name: String,

        /// Prefix of generated type names
        #[arg(long, default_value = "Scenario")]
        prefix: String,

        /// Path of the runtime crate used by generated code
        #[arg(long, default_value = "schemagen_dom")]
        runtime_crate: String,

        /// Strict mode (no output when any diagnostic is reported)
        #[arg(short, long)]
        strict: bool,
    },

    /// Load and check schemas without writing output
    Check {
        #[command(flatten)]
        load: LoadArgs,

        /// Strict mode (warnings as errors)
        #[arg(short, long)]
        strict: bool,
    },

    /// Print the resolved type graph
    Inspect {
        #[command(flatten)]
        load: LoadArgs,

        /// Output format
        #[arg(short = 'F', long, value_enum, default_value_t = InspectFormat::Json)]
        format: InspectFormat,
    },
}

fn run(cli: Cli) -> Result<bool> {
    match cli.command {
        Commands::Generate {
            load,
            output,
            base_name,
            prefix,
            runtime_crate,
            strict,
        } => {
            let mut generator = load
                .into_config()
                .with_output_dir(output)
                .with_base_name(base_name)
                .with_strict(strict);
            generator.prefix = prefix;
            generator.runtime_crate = runtime_crate;

            generate::generate(generate::GenerateConfig {
                generator,
                verbose: cli.verbose,
            })?;
            Ok(true)
        }

        Commands::Check { load, strict } => check::check(check::CheckConfig {
            generator: load.into_config().with_strict(strict),
            verbose: cli.verbose,
        }),

        Commands::Inspect { load, format } => {
            inspect::inspect(inspect::InspectConfig {
                generator: load.into_config(),
                format,
            })?;
            Ok(true)
        }
    }
}

fn main() {
    human_panic::setup_panic!();

    let cli = Cli::parse();

    output::setup_colors(cli.color);
    logging::init(cli.verbose);

    match run(cli) {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}", output::format_error(&e));
            std::process::exit(1);
        }
    }
}
