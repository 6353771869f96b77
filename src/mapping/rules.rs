//! Symbol and include rules, and their derivation from catalogued headers.

use tracing::debug;

use crate::core::errors::Result;

use super::catalog::HeaderCatalog;
use super::header::QtHeader;

/// Redirect uses of `symbol` to an include of the public `header`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolRule {
    /// Symbol as written in user code
    pub symbol: String,
    /// Public header to include instead
    pub header: String,
}

impl SymbolRule {
    /// Create a symbol rule.
    pub fn new(symbol: impl Into<String>, header: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            header: header.into(),
        }
    }
}

/// Redirect includes of `include` (quoted or angled, optionally prefixed by
/// `module/`) to an include of the public `header`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IncludeRule {
    /// Module directory that may prefix the include
    pub module: String,
    /// Included private header name, without extension
    pub include: String,
    /// Public header to include instead
    pub header: String,
}

impl IncludeRule {
    /// Create an include rule.
    pub fn new(
        module: impl Into<String>,
        include: impl Into<String>,
        header: impl Into<String>,
    ) -> Self {
        Self {
            module: module.into(),
            include: include.into(),
            header: header.into(),
        }
    }
}

/// Ordered symbol and include rules. The consumer applies the first
/// matching rule, so insertion order is part of the output contract.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// Symbol rules, in emission order
    pub symbols: Vec<SymbolRule>,
    /// Include rules, in emission order
    pub includes: Vec<IncludeRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the rules contributed by one header: a symbol rule for its
    /// class and an include rule per private header it pulls in.
    pub fn add_header_rules(&mut self, header: &QtHeader) -> Result<()> {
        let private_headers = header.private_headers()?;
        let class_name = header.class_name();
        self.symbols.push(SymbolRule::new(class_name, class_name));
        self.includes.extend(
            private_headers
                .iter()
                .map(|include| IncludeRule::new(header.module_name(), include, class_name)),
        );

        debug!(
            "{}/{}: 1 symbol rule, {} include rule(s)",
            header.module_name(),
            class_name,
            private_headers.len()
        );
        Ok(())
    }

    /// Append another rule set after this one's rules.
    pub fn extend(&mut self, other: RuleSet) {
        self.symbols.extend(other.symbols);
        self.includes.extend(other.includes);
    }

    /// Total number of rules.
    pub fn len(&self) -> usize {
        self.symbols.len() + self.includes.len()
    }

    /// Returns true if the set holds no rule.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty() && self.includes.is_empty()
    }
}

/// Derive rules for the whole catalog: regular headers first, then the
/// umbrella headers, so a module header never shadows a class header.
pub fn derive_rules(catalog: &HeaderCatalog) -> Result<RuleSet> {
    let mut rules = RuleSet::new();
    for header in catalog.regular() {
        rules.add_header_rules(header)?;
    }

    let mut deferred = RuleSet::new();
    for header in catalog.deferred() {
        deferred.add_header_rules(header)?;
    }

    rules.extend(deferred);
    Ok(rules)
}
