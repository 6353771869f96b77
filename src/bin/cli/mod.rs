//! CLI Module Organization
//!
//! - args: CLI argument structures
//! - commands: mapping generation and configuration loading

pub mod args;
pub mod commands;

// Re-export commonly used items for convenience
pub use args::*;
pub use commands::*;
