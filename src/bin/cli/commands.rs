//! Mapping generation command implementation.

use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::debug;

use crate::cli::args::Cli;
use qtmap_rs::{GenerationSummary, MappingConfig, MappingEngine};

/// Configuration files picked up from the working directory.
const IMPLICIT_CONFIG_FILES: [&str; 2] = [".qtmap.yml", ".qtmap.yaml"];

/// Run the generator for the parsed command line.
pub fn generate_command(cli: &Cli) -> anyhow::Result<GenerationSummary> {
    let config = load_configuration(cli.config.as_deref())?;
    let engine = MappingEngine::new(config).context("Invalid mapping configuration")?;

    let summary = engine
        .generate(&cli.qt_include_dir, &cli.output_file)
        .with_context(|| {
            format!(
                "Failed to generate mappings from {} into {}",
                cli.qt_include_dir.display(),
                cli.output_file.display()
            )
        })?;

    print_summary(&summary);
    Ok(summary)
}

/// Load mapping configuration from an explicit path, an implicit
/// `.qtmap.yml`, or defaults.
pub fn load_configuration(explicit_path: Option<&Path>) -> anyhow::Result<MappingConfig> {
    let implicit_path = || {
        IMPLICIT_CONFIG_FILES
            .iter()
            .map(PathBuf::from)
            .find(|p| p.exists())
    };

    match explicit_path.map(Path::to_path_buf).or_else(implicit_path) {
        Some(path) => {
            debug!("Loading mapping configuration from {}", path.display());
            MappingConfig::from_yaml_file(&path).with_context(|| {
                format!("Failed to load configuration from {}", path.display())
            })
        }
        None => Ok(MappingConfig::default()),
    }
}

fn print_summary(summary: &GenerationSummary) {
    println!(
        "Wrote {} mappings ({} symbol, {} include) from {} headers to {}",
        summary.total_rules(),
        summary.symbol_rules,
        summary.include_rules,
        summary.headers_scanned,
        summary.output_path.display()
    );
}
