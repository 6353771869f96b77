//! CLI Argument Structures
//!
//! This module contains the argument definitions used by the qtmap binary.

use clap::Parser;
use std::path::PathBuf;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Generate an include-what-you-use mapping file from a Qt include tree
#[derive(Parser, Debug)]
#[command(name = "qtmap")]
#[command(version = VERSION)]
#[command(about = "Generate an include-what-you-use mapping file from a Qt include directory")]
#[command(long_about = "
Scan a Qt include directory and write an include-what-you-use mapping file
that redirects private Qt headers and object-system symbols to the public
headers that should be included instead.

Example:

  qtmap /usr/include/x86_64-linux-gnu/qt5 qt5_11.imp
")]
pub struct Cli {
    /// Qt include directory
    pub qt_include_dir: PathBuf,

    /// Generated output mapping file
    pub output_file: PathBuf,

    /// Mapping configuration file (YAML). Defaults to .qtmap.yml if present
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging for debugging
    #[arg(short, long)]
    pub verbose: bool,
}
