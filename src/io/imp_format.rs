//! Reading and writing include-what-you-use mapping (`.imp`) documents.
//!
//! The document is a JSON array with one compact rule object per line,
//! preceded by a `#` comment. Entries use the separators and ASCII escaping
//! the mapping reader's own generators produce, so regenerated files diff
//! cleanly against existing ones.

use std::io;
use std::path::Path;

use serde::{Deserialize, Serialize};
use serde_json::ser::Formatter;
use tracing::info;

use crate::core::errors::{QtMapError, Result};
use crate::core::file_utils::write_atomically;
use crate::mapping::rules::{IncludeRule, RuleSet, SymbolRule};

/// Name written into the generated-file banner.
pub const GENERATOR_NAME: &str = "qtmap";

const PRIVATE_MARKER: &str = "private";
const PUBLIC_MARKER: &str = "public";

/// Regex pieces around `module/` and `include` in an include rule.
const INCLUDE_PATTERN_PREFIX: &str = "@[\"<](";
const INCLUDE_PATTERN_MODULE_END: &str = "/)?";
const INCLUDE_PATTERN_SUFFIX: &str = "\\.h[\">]";

/// First line of every generated mapping file.
pub fn generated_banner() -> String {
    format!("# Do not edit! This file was generated by {GENERATOR_NAME}.")
}

/// One `.imp` array element: `{"symbol": [...]}` or `{"include": [...]}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
enum ImpEntry {
    #[serde(rename = "symbol")]
    Symbol(String, String, String, String),
    #[serde(rename = "include")]
    Include(String, String, String, String),
}

impl From<&SymbolRule> for ImpEntry {
    fn from(rule: &SymbolRule) -> Self {
        Self::Symbol(
            rule.symbol.clone(),
            PRIVATE_MARKER.to_string(),
            angled(&rule.header),
            PUBLIC_MARKER.to_string(),
        )
    }
}

impl From<&IncludeRule> for ImpEntry {
    fn from(rule: &IncludeRule) -> Self {
        Self::Include(
            include_pattern(&rule.module, &rule.include),
            PRIVATE_MARKER.to_string(),
            angled(&rule.header),
            PUBLIC_MARKER.to_string(),
        )
    }
}

fn angled(header: &str) -> String {
    format!("<{header}>")
}

/// Regex matching `"include.h"`, `<include.h>` and either form prefixed
/// by `module/`.
pub fn include_pattern(module: &str, include: &str) -> String {
    format!(
        "{INCLUDE_PATTERN_PREFIX}{module}{INCLUDE_PATTERN_MODULE_END}{include}{INCLUDE_PATTERN_SUFFIX}"
    )
}

/// Single-line JSON with `", "` and `": "` separators and every character
/// outside printable ASCII written as a `\uXXXX` escape.
struct PackedFormatter;

impl Formatter for PackedFormatter {
    fn begin_array_value<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_key<W>(&mut self, writer: &mut W, first: bool) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if first {
            Ok(())
        } else {
            writer.write_all(b", ")
        }
    }

    fn begin_object_value<W>(&mut self, writer: &mut W) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        writer.write_all(b": ")
    }

    fn write_string_fragment<W>(&mut self, writer: &mut W, fragment: &str) -> io::Result<()>
    where
        W: ?Sized + io::Write,
    {
        if fragment.is_ascii() && !fragment.contains('\x7f') {
            return writer.write_all(fragment.as_bytes());
        }

        let mut units = [0u16; 2];
        for ch in fragment.chars() {
            if (ch as u32) < 0x7f {
                let mut buf = [0u8; 4];
                writer.write_all(ch.encode_utf8(&mut buf).as_bytes())?;
            } else {
                for unit in ch.encode_utf16(&mut units) {
                    write!(writer, "\\u{unit:04x}")?;
                }
            }
        }
        Ok(())
    }
}

fn entry_line(entry: &ImpEntry) -> Result<String> {
    let mut buf = Vec::new();
    let mut serializer = serde_json::Serializer::with_formatter(&mut buf, PackedFormatter);
    entry.serialize(&mut serializer)?;

    String::from_utf8(buf).map_err(|err| QtMapError::Serialization {
        message: format!("Rendered mapping entry is not UTF-8: {err}"),
        data_type: Some("JSON".to_string()),
        source: Some(Box::new(err)),
    })
}

/// Render `rules` as a complete `.imp` document: banner line, then every
/// symbol rule, then every include rule.
pub fn render_imp(rules: &RuleSet) -> Result<String> {
    let entries = rules
        .symbols
        .iter()
        .map(ImpEntry::from)
        .chain(rules.includes.iter().map(ImpEntry::from));

    let mut lines = Vec::with_capacity(rules.len());
    for entry in entries {
        lines.push(format!("  {}", entry_line(&entry)?));
    }

    let mut output = generated_banner();
    output.push('\n');
    output.push_str("[\n");
    output.push_str(&lines.join(",\n"));
    output.push_str("\n]\n");
    // Blank line after the closing bracket
    output.push('\n');
    Ok(output)
}

/// Render `rules` and replace `path` with the result.
pub fn write_imp(path: &Path, rules: &RuleSet) -> Result<()> {
    let document = render_imp(rules)?;
    write_atomically(path, document.as_bytes())?;
    info!(
        "Wrote {} symbol and {} include mappings to {}",
        rules.symbols.len(),
        rules.includes.len(),
        path.display()
    );
    Ok(())
}

/// Parse a `.imp` document back into a rule set.
///
/// Lines starting with `#` are comments. Every entry must use the
/// `private`/`public` markers, an angle-bracketed target and, for include
/// rules, the pattern shape produced by [`include_pattern`].
pub fn parse_imp(document: &str) -> Result<RuleSet> {
    let json: String = document
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .collect::<Vec<_>>()
        .join("\n");

    let entries: Vec<ImpEntry> = serde_json::from_str(&json)?;

    let mut rules = RuleSet::new();
    for entry in entries {
        match entry {
            ImpEntry::Symbol(symbol, from, to, target) => {
                let header = parse_target(&from, &to, &target)?;
                rules.symbols.push(SymbolRule::new(symbol, header));
            }
            ImpEntry::Include(pattern, from, to, target) => {
                let header = parse_target(&from, &to, &target)?;
                let (module, include) = parse_include_pattern(&pattern)?;
                rules.includes.push(IncludeRule::new(module, include, header));
            }
        }
    }
    Ok(rules)
}

fn parse_target(from: &str, to: &str, target: &str) -> Result<String> {
    if from != PRIVATE_MARKER || target != PUBLIC_MARKER {
        return Err(QtMapError::parse_entry(
            format!("Expected \"{PRIVATE_MARKER}\" and \"{PUBLIC_MARKER}\" markers"),
            format!("{from} -> {target}"),
        ));
    }

    to.strip_prefix('<')
        .and_then(|rest| rest.strip_suffix('>'))
        .map(str::to_string)
        .ok_or_else(|| QtMapError::parse_entry("Target header must be angle-bracketed", to))
}

fn parse_include_pattern(pattern: &str) -> Result<(String, String)> {
    let (module, rest) = pattern
        .strip_prefix(INCLUDE_PATTERN_PREFIX)
        .and_then(|rest| rest.split_once(INCLUDE_PATTERN_MODULE_END))
        .ok_or_else(|| QtMapError::parse_entry("Unrecognised include pattern", pattern))?;

    let include = rest
        .strip_suffix(INCLUDE_PATTERN_SUFFIX)
        .ok_or_else(|| QtMapError::parse_entry("Unrecognised include pattern", pattern))?;

    Ok((module.to_string(), include.to_string()))
}

#[cfg(test)]
#[path = "imp_format_tests.rs"]
mod tests;
