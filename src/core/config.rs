//! Configuration types for the mapping generator.
//!
//! Every field has a default matching the stock Qt include layout, so an
//! absent or empty YAML file yields the same mappings as running without one.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{QtMapError, Result, ResultExt};

/// Configuration for a mapping generation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingConfig {
    /// Class names that never contribute rules
    #[serde(default = "MappingConfig::default_excluded_classes")]
    pub excluded_classes: Vec<String>,

    /// File name suffixes that mark implementation headers rather than
    /// class headers
    #[serde(default = "MappingConfig::default_excluded_suffixes")]
    pub excluded_suffixes: Vec<String>,

    /// Symbol overrides placed right after the built-in override table
    #[serde(default)]
    pub extra_symbol_overrides: Vec<SymbolOverride>,

    /// Include overrides placed right after the built-in override table
    #[serde(default)]
    pub extra_include_overrides: Vec<IncludeOverride>,
}

/// A hand-written symbol mapping from the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolOverride {
    /// Symbol name as written in user code
    pub symbol: String,
    /// Public header the symbol maps to
    pub header: String,
}

/// A hand-written include mapping from the configuration file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncludeOverride {
    /// Module directory that may prefix the include
    pub module: String,
    /// Private header name without extension
    pub include: String,
    /// Public header the include maps to
    pub header: String,
}

impl Default for MappingConfig {
    fn default() -> Self {
        Self {
            excluded_classes: Self::default_excluded_classes(),
            excluded_suffixes: Self::default_excluded_suffixes(),
            extra_symbol_overrides: Vec::new(),
            extra_include_overrides: Vec::new(),
        }
    }
}

impl MappingConfig {
    fn default_excluded_classes() -> Vec<String> {
        vec!["QInternal".to_string()]
    }

    fn default_excluded_suffixes() -> Vec<String> {
        vec![".h".to_string()]
    }

    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            QtMapError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content)
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Save configuration to a YAML file
    pub fn to_yaml_file(&self, path: impl Into<PathBuf>) -> Result<()> {
        let path = path.into();
        let content = serde_yaml::to_string(self)?;
        std::fs::write(&path, content).map_err(|e| {
            QtMapError::io(
                format!("Failed to write config file: {}", path.display()),
                e,
            )
        })
    }

    /// Returns true if headers named `class_name` are skipped entirely.
    pub fn is_excluded_class(&self, class_name: &str) -> bool {
        self.excluded_classes.iter().any(|name| name == class_name)
    }

    /// Returns true if a file named `file_name` is an implementation header.
    pub fn has_excluded_suffix(&self, file_name: &str) -> bool {
        self.excluded_suffixes
            .iter()
            .any(|suffix| file_name.ends_with(suffix.as_str()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        validate_names(&self.excluded_classes, "excluded_classes")?;
        validate_names(&self.excluded_suffixes, "excluded_suffixes")?;

        for (idx, entry) in self.extra_symbol_overrides.iter().enumerate() {
            let field = format!("extra_symbol_overrides[{idx}]");
            validate_names([&entry.symbol, &entry.header], &field)?;
        }

        for (idx, entry) in self.extra_include_overrides.iter().enumerate() {
            let field = format!("extra_include_overrides[{idx}]");
            validate_names([&entry.module, &entry.include, &entry.header], &field)?;
        }

        Ok(())
    }
}

fn validate_names<I, S>(names: I, field: &str) -> Result<()>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    if names.into_iter().any(|name| name.as_ref().trim().is_empty()) {
        return Err(QtMapError::config_field(
            format!("{field} must not contain empty names"),
            field,
        ));
    }
    Ok(())
}
