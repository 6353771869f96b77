//! File utilities for safe and robust file operations.
//!
//! Header reads tolerate non-UTF-8 content, and the mapping file is written
//! through a temporary sibling so a failed run never leaves a truncated file.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::core::errors::{QtMapError, Result};

/// Safe file reading with UTF-8 validation and fallback handling
pub struct FileReader;

impl FileReader {
    /// Read a file to string, handling non-UTF-8 files gracefully
    pub fn read_to_string(file_path: &Path) -> Result<String> {
        match fs::read_to_string(file_path) {
            Ok(content) => Ok(content),
            Err(e) => {
                if e.kind() == std::io::ErrorKind::InvalidData {
                    let bytes = fs::read(file_path).map_err(|err| {
                        QtMapError::io(
                            format!("Failed to read file as bytes: {}", file_path.display()),
                            err,
                        )
                    })?;

                    let content = String::from_utf8_lossy(&bytes).into_owned();
                    warn!(
                        "File contained invalid UTF-8, converted with lossy encoding: {}",
                        file_path.display()
                    );
                    Ok(content)
                } else {
                    Err(QtMapError::io(
                        format!("Failed to read file: {}", file_path.display()),
                        e,
                    ))
                }
            }
        }
    }
}

/// Replace `path` with `contents`, going through a temporary file in the same
/// directory so readers only ever see the old or the complete new content.
///
/// A symlinked `path` is resolved first, so the link survives and its target
/// receives the new content. An existing file keeps its permissions; a new
/// file gets the process umask default, as a plain create would.
pub fn write_atomically(path: &Path, contents: &[u8]) -> Result<()> {
    let target = resolve_write_target(path)?;
    let parent = match target.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = temp_builder().tempfile_in(parent).map_err(|e| {
        QtMapError::io(
            format!("Failed to create temporary file in {}", parent.display()),
            e,
        )
    })?;

    if let Ok(existing) = fs::metadata(&target) {
        temp.as_file()
            .set_permissions(existing.permissions())
            .map_err(|e| {
                QtMapError::io(
                    format!("Failed to copy permissions of {}", target.display()),
                    e,
                )
            })?;
    }

    temp.write_all(contents)
        .and_then(|()| temp.as_file().sync_all())
        .map_err(|e| {
            QtMapError::io(
                format!("Failed to write temporary file for {}", target.display()),
                e,
            )
        })?;

    // Dropping the NamedTempFile on the error path removes it
    temp.persist(&target).map_err(|e| {
        QtMapError::io(
            format!("Failed to move output into {}", target.display()),
            e.error,
        )
    })?;

    debug!("Wrote {} bytes to {}", contents.len(), target.display());
    Ok(())
}

const MAX_SYMLINK_HOPS: usize = 40;

/// Follow symlinks from `path` to the file that should actually be replaced.
/// A dangling link resolves to the path it points at, which is then created.
fn resolve_write_target(path: &Path) -> Result<PathBuf> {
    let mut current = path.to_path_buf();

    for _ in 0..MAX_SYMLINK_HOPS {
        match fs::symlink_metadata(&current) {
            Ok(meta) if meta.file_type().is_symlink() => {
                let link = fs::read_link(&current).map_err(|e| {
                    QtMapError::io(format!("Failed to read symlink {}", current.display()), e)
                })?;
                current = match current.parent() {
                    Some(parent) if link.is_relative() => parent.join(link),
                    _ => link,
                };
            }
            _ => return Ok(current),
        }
    }

    Err(QtMapError::path("Too many levels of symbolic links", path))
}

#[cfg(unix)]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    use std::os::unix::fs::PermissionsExt;

    // The kernel applies the umask to this mode at creation
    let mut builder = tempfile::Builder::new();
    builder.permissions(fs::Permissions::from_mode(0o666));
    builder
}

#[cfg(not(unix))]
fn temp_builder() -> tempfile::Builder<'static, 'static> {
    tempfile::Builder::new()
}
