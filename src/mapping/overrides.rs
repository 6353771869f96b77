//! Hand-curated rules the header scan cannot discover.
//!
//! Macros and free functions have no header named after them, so they are
//! mapped here. These rules always lead both rule lists.

use crate::core::config::MappingConfig;

use super::rules::{IncludeRule, RuleSet, SymbolRule};

/// Debug logging entry point declared by the global header.
pub const DEBUG_SYMBOL_OVERRIDE: (&str, &str) = ("qDebug", "QtGlobal");

/// Public header of the object system.
pub const QOBJECT_HEADER: &str = "QObject";

/// Meta-object macros and keywords that user code reaches through `<QObject>`.
pub const QOBJECT_SYMBOLS: &[&str] = &[
    "QObjectList",
    "qFindChildren",
    "qobject_cast",
    "QT_NO_NARROWING_CONVERSIONS_IN_CONNECT",
    "Q_CLASSINFO",
    "Q_DISABLE_COPY",
    "Q_DISABLE_COPY_MOVE",
    "Q_DISABLE_MOVE",
    "Q_EMIT",
    "Q_ENUM",
    "Q_ENUM_NS",
    "Q_FLAG",
    "Q_FLAG_NS",
    "Q_GADGET",
    "Q_INTERFACES",
    "Q_INVOKABLE",
    "Q_NAMESPACE",
    "Q_NAMESPACE_EXPORT",
    "Q_OBJECT",
    "Q_PROPERTY",
    "Q_REVISION",
    "Q_SET_OBJECT_NAME",
    "Q_SIGNAL",
    "Q_SIGNALS",
    "Q_SLOT",
    "Q_SLOTS",
    "emit",
    "slots",
    "signals",
    "SIGNAL",
    "SLOT",
];

/// `qnamespace.h` declares the `Qt` namespace; its public header is `<Qt>`.
pub const NAMESPACE_INCLUDE_OVERRIDE: (&str, &str, &str) = ("QtCore", "qnamespace", "Qt");

/// The built-in override rules, in emission order.
pub fn builtin_overrides() -> RuleSet {
    let (debug_symbol, debug_header) = DEBUG_SYMBOL_OVERRIDE;
    let mut symbols = vec![SymbolRule::new(debug_symbol, debug_header)];
    symbols.extend(
        QOBJECT_SYMBOLS
            .iter()
            .map(|symbol| SymbolRule::new(*symbol, QOBJECT_HEADER)),
    );

    let (module, include, header) = NAMESPACE_INCLUDE_OVERRIDE;
    RuleSet {
        symbols,
        includes: vec![IncludeRule::new(module, include, header)],
    }
}

/// Built-in overrides followed by the ones listed in `config`.
pub fn manual_overrides(config: &MappingConfig) -> RuleSet {
    let mut rules = builtin_overrides();
    rules.symbols.extend(
        config
            .extra_symbol_overrides
            .iter()
            .map(|entry| SymbolRule::new(&entry.symbol, &entry.header)),
    );
    rules.includes.extend(
        config
            .extra_include_overrides
            .iter()
            .map(|entry| IncludeRule::new(&entry.module, &entry.include, &entry.header)),
    );
    rules
}
