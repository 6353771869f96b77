//! # qtmap-rs: Qt mapping generator for include-what-you-use
//!
//! Scans a Qt include tree and generates an include-what-you-use mapping
//! file (`.imp`) that redirects private implementation headers and
//! object-system symbols to the public headers user code should include.
//!
//! ## Pipeline
//!
//! ```text
//! ┌──────────────┐   ┌──────────────┐   ┌──────────────┐   ┌──────────────┐
//! │   Catalog    │──▶│   Headers    │──▶│    Rules     │──▶│  .imp writer │
//! │ module/Class │   │ "#include"s  │   │ overrides +  │   │ banner, JSON │
//! │  discovery   │   │  (cached)    │   │ scan, ordered│   │ atomic write │
//! └──────────────┘   └──────────────┘   └──────────────┘   └──────────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use qtmap_rs::{MappingConfig, MappingEngine};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let engine = MappingEngine::new(MappingConfig::default())?;
//!     let summary = engine.generate(
//!         Path::new("/usr/include/x86_64-linux-gnu/qt5"),
//!         Path::new("qt5.imp"),
//!     )?;
//!
//!     println!("{} mappings written", summary.total_rules());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(unsafe_code)]
#![warn(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![cfg_attr(docsrs, feature(doc_cfg))]

// Core infrastructure
pub mod core {
    //! Configuration, errors and file helpers.

    pub mod config;
    pub mod errors;
    pub mod file_utils;
}

// Header discovery and rule derivation
pub mod mapping;

// Mapping file I/O
pub mod io;

// Public API and engine interface
pub mod api {
    //! High-level API and engine interface.

    pub mod engine;
    pub mod results;
}

// Re-export primary types for convenience
pub use api::engine::MappingEngine;
pub use api::results::GenerationSummary;
pub use core::config::MappingConfig;
pub use core::errors::{QtMapError, Result, ResultExt};
pub use mapping::rules::{IncludeRule, RuleSet, SymbolRule};

/// Library version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
