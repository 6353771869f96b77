//! Result types returned by the mapping engine.

use std::path::PathBuf;

/// Counts describing one generation run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationSummary {
    /// Headers that contributed rules
    pub headers_scanned: usize,
    /// Umbrella headers among them, processed last
    pub umbrella_headers: usize,
    /// Symbol rules written, overrides included
    pub symbol_rules: usize,
    /// Include rules written, overrides included
    pub include_rules: usize,
    /// Mapping file that was written
    pub output_path: PathBuf,
}

impl GenerationSummary {
    /// Total number of rules written.
    pub fn total_rules(&self) -> usize {
        self.symbol_rules + self.include_rules
    }
}
