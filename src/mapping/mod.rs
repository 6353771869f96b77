//! Header discovery and mapping rule derivation.
//!
//! The catalog finds class headers, each header lists the private headers it
//! includes, and the rules module turns both into the ordered rule set that
//! follows the manual overrides.

pub mod catalog;
pub mod header;
pub mod overrides;
pub mod rules;

pub use catalog::HeaderCatalog;
pub use header::QtHeader;
pub use overrides::{builtin_overrides, manual_overrides};
pub use rules::{derive_rules, IncludeRule, RuleSet, SymbolRule};
