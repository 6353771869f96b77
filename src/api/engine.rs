//! Main mapping engine implementation.

use std::path::Path;

use tracing::info;

use crate::api::results::GenerationSummary;
use crate::core::config::MappingConfig;
use crate::core::errors::Result;
use crate::io::imp_format::write_imp;
use crate::mapping::catalog::HeaderCatalog;
use crate::mapping::overrides::manual_overrides;
use crate::mapping::rules::{derive_rules, RuleSet};

/// Main qtmap engine: catalogue a Qt include tree and turn it into mapping
/// rules.
pub struct MappingEngine {
    config: MappingConfig,
}

impl MappingEngine {
    /// Create a new engine with the given configuration
    pub fn new(config: MappingConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Engine configuration
    pub fn config(&self) -> &MappingConfig {
        &self.config
    }

    /// Build the full ordered rule set for the tree under `root`: manual
    /// overrides, then regular headers, then umbrella headers.
    pub fn build_rules(&self, root: &Path) -> Result<RuleSet> {
        let catalog = HeaderCatalog::discover(root, &self.config)?;
        self.rules_for_catalog(&catalog)
    }

    fn rules_for_catalog(&self, catalog: &HeaderCatalog) -> Result<RuleSet> {
        let mut rules = manual_overrides(&self.config);
        rules.extend(derive_rules(catalog)?);
        Ok(rules)
    }

    /// Generate the mapping file for `root` at `output`.
    pub fn generate(&self, root: &Path, output: &Path) -> Result<GenerationSummary> {
        info!("Generating Qt mappings from {}", root.display());

        let catalog = HeaderCatalog::discover(root, &self.config)?;
        let rules = self.rules_for_catalog(&catalog)?;
        write_imp(output, &rules)?;

        Ok(GenerationSummary {
            headers_scanned: catalog.len(),
            umbrella_headers: catalog.deferred().len(),
            symbol_rules: rules.symbols.len(),
            include_rules: rules.includes.len(),
            output_path: output.to_path_buf(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::SymbolOverride;
    use crate::core::errors::QtMapError;
    use crate::mapping::overrides::builtin_overrides;
    use crate::mapping::rules::{IncludeRule, SymbolRule};
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_rejects_invalid_config() {
        let mut config = MappingConfig::default();
        config.excluded_classes.push(String::new());
        assert!(matches!(
            MappingEngine::new(config),
            Err(QtMapError::Config { .. })
        ));
    }

    #[test]
    fn test_overrides_lead_scan_rules() {
        let dir = tempdir().unwrap();
        let module = dir.path().join("QtCore");
        fs::create_dir_all(&module).unwrap();
        fs::write(module.join("QTimer"), "#include \"qtimer.h\"\n").unwrap();

        let engine = MappingEngine::new(MappingConfig::default()).unwrap();
        let rules = engine.build_rules(dir.path()).unwrap();
        let overrides = builtin_overrides();

        assert_eq!(&rules.symbols[..overrides.symbols.len()], &overrides.symbols[..]);
        assert_eq!(&rules.includes[..overrides.includes.len()], &overrides.includes[..]);
        assert_eq!(rules.symbols.last(), Some(&SymbolRule::new("QTimer", "QTimer")));
        assert_eq!(
            rules.includes.last(),
            Some(&IncludeRule::new("QtCore", "qtimer", "QTimer"))
        );
    }

    #[test]
    fn test_configured_overrides_precede_scan_rules() {
        let dir = tempdir().unwrap();
        let module = dir.path().join("QtCore");
        fs::create_dir_all(&module).unwrap();
        fs::write(module.join("QDebug"), "").unwrap();

        let mut config = MappingConfig::default();
        config.extra_symbol_overrides.push(SymbolOverride {
            symbol: "qWarning".to_string(),
            header: "QtGlobal".to_string(),
        });
        let engine = MappingEngine::new(config).unwrap();
        let rules = engine.build_rules(dir.path()).unwrap();

        let symbols: Vec<&str> = rules.symbols.iter().map(|r| r.symbol.as_str()).collect();
        let n = symbols.len();
        assert_eq!(&symbols[n - 2..], &["qWarning", "QDebug"]);
    }

    #[test]
    fn test_generate_reports_summary() {
        let dir = tempdir().unwrap();
        let root = dir.path().join("qt5");
        for (module, class, body) in [
            ("QtCore", "QtCore", "#include \"qtcoreversion.h\"\n"),
            ("QtCore", "QObject", "#include \"qobject.h\"\n"),
            ("QtGui", "QColor", "#include \"qcolor.h\"\n"),
        ] {
            fs::create_dir_all(root.join(module)).unwrap();
            fs::write(root.join(module).join(class), body).unwrap();
        }
        let output = dir.path().join("qt5.imp");

        let engine = MappingEngine::new(MappingConfig::default()).unwrap();
        let summary = engine.generate(&root, &output).unwrap();

        let overrides = builtin_overrides();
        assert_eq!(summary.headers_scanned, 3);
        assert_eq!(summary.umbrella_headers, 1);
        assert_eq!(summary.symbol_rules, overrides.symbols.len() + 3);
        assert_eq!(summary.include_rules, overrides.includes.len() + 3);
        assert_eq!(summary.output_path, output);
        assert!(output.exists());
    }

    #[test]
    fn test_generate_missing_root_leaves_no_output() {
        let dir = tempdir().unwrap();
        let output = dir.path().join("qt5.imp");

        let engine = MappingEngine::new(MappingConfig::default()).unwrap();
        let result = engine.generate(&dir.path().join("missing"), &output);

        assert!(matches!(result, Err(QtMapError::Path { .. })));
        assert!(!output.exists());
    }
}
