//! Header discovery over a Qt include tree.
//!
//! Qt installs one directory per module under the include root, with the
//! extensionless class headers (`QtCore/QString`) sitting next to the
//! lower-case implementation headers (`QtCore/qstring.h`). Only the former
//! are catalogued; they are the public headers user code should include.

use std::ffi::OsStr;
use std::path::Path;

use tracing::{debug, info};
use walkdir::{DirEntry, WalkDir};

use crate::core::config::MappingConfig;
use crate::core::errors::{QtMapError, Result};

use super::header::QtHeader;

/// Module directories are one level below the root, headers two.
const HEADER_DEPTH: usize = 2;

/// Catalogued headers, split into the two ordered sequences rule derivation
/// consumes.
#[derive(Debug, Default)]
pub struct HeaderCatalog {
    regular: Vec<QtHeader>,
    deferred: Vec<QtHeader>,
}

impl HeaderCatalog {
    /// Walk `root` and catalogue every class header below it.
    ///
    /// Fails with [`QtMapError::Path`] when `root` is missing or is not a
    /// directory, and with [`QtMapError::Io`] when part of the tree cannot be
    /// read.
    pub fn discover(root: &Path, config: &MappingConfig) -> Result<Self> {
        if !root.exists() {
            return Err(QtMapError::path("Include root does not exist", root));
        }
        if !root.is_dir() {
            return Err(QtMapError::path("Include root is not a directory", root));
        }

        let mut catalog = Self::default();
        let walker = WalkDir::new(root)
            .min_depth(HEADER_DEPTH)
            .max_depth(HEADER_DEPTH)
            .follow_links(true)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry?;
            if !is_candidate(&entry, config) {
                continue;
            }

            let header = QtHeader::new(entry.path());
            if config.is_excluded_class(header.class_name()) {
                debug!("Skipping excluded header {}", entry.path().display());
                continue;
            }
            catalog.push(header);
        }

        info!(
            "Catalogued {} headers under {} ({} umbrella)",
            catalog.len(),
            root.display(),
            catalog.deferred.len()
        );
        Ok(catalog)
    }

    /// Add a header to the sequence it belongs to.
    pub fn push(&mut self, header: QtHeader) {
        if header.is_umbrella() {
            self.deferred.push(header);
        } else {
            self.regular.push(header);
        }
    }

    /// Headers whose class name differs from their module name, in
    /// discovery order.
    pub fn regular(&self) -> &[QtHeader] {
        &self.regular
    }

    /// Umbrella headers, in discovery order. Their rules go last.
    pub fn deferred(&self) -> &[QtHeader] {
        &self.deferred
    }

    /// All headers in processing order: regular first, then deferred.
    pub fn in_processing_order(&self) -> impl Iterator<Item = &QtHeader> {
        self.regular.iter().chain(self.deferred.iter())
    }

    /// Number of catalogued headers.
    pub fn len(&self) -> usize {
        self.regular.len() + self.deferred.len()
    }

    /// Returns true if no header was catalogued.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

fn is_hidden(name: &OsStr) -> bool {
    name.to_str()
        .map(|name| name.starts_with('.'))
        .unwrap_or(false)
}

fn is_candidate(entry: &DirEntry, config: &MappingConfig) -> bool {
    // With follow_links the file type is that of the link target.
    if entry.file_type().is_dir() {
        return false;
    }
    let module_hidden = entry
        .path()
        .parent()
        .and_then(Path::file_name)
        .map(is_hidden)
        .unwrap_or(false);
    if module_hidden || is_hidden(entry.file_name()) {
        return false;
    }
    let name = entry.file_name().to_string_lossy();
    !config.has_excluded_suffix(&name)
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
