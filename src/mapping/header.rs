//! A single Qt header discovered in the include tree.

use std::path::{Path, PathBuf};

use once_cell::sync::Lazy;
use once_cell::unsync::OnceCell;
use regex::Regex;
use tracing::debug;

use crate::core::errors::{QtMapError, Result};
use crate::core::file_utils::FileReader;

/// Quoted local include. Greedy and line-bound, so a trailing comment that
/// also quotes a `.h` name is swallowed into the capture.
static LOCAL_INCLUDE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"#include "(.*)\.h""#).expect("local include pattern is valid"));

/// A class header such as `QtCore/QString`, with the private headers it pulls in.
#[derive(Debug)]
pub struct QtHeader {
    path: PathBuf,
    class_name: String,
    module_name: String,
    private_headers: OnceCell<Vec<String>>,
}

impl QtHeader {
    /// Build a header record from its path. Class and module names come
    /// from the file stem and the parent directory name.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let class_name = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        let module_name = path
            .parent()
            .and_then(Path::file_name)
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path,
            class_name,
            module_name,
            private_headers: OnceCell::new(),
        }
    }

    /// Path of the header file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Class the header is named after, e.g. `QString`.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Module directory holding the header, e.g. `QtCore`.
    pub fn module_name(&self) -> &str {
        &self.module_name
    }

    /// True for module umbrella headers such as `QtCore/QtCore`.
    pub fn is_umbrella(&self) -> bool {
        self.class_name == self.module_name
    }

    /// Names of the headers this header includes with `#include "<name>.h"`,
    /// in file order and without the extension.
    ///
    /// The file is read on the first call only; later calls return the cached
    /// list.
    pub fn private_headers(&self) -> Result<&[String]> {
        self.private_headers
            .get_or_try_init(|| {
                let content = FileReader::read_to_string(&self.path)?;
                let included = extract_local_includes(&content);
                debug!(
                    "{} includes {} private header(s)",
                    self.path.display(),
                    included.len()
                );
                Ok::<_, QtMapError>(included)
            })
            .map(Vec::as_slice)
    }
}

/// Collect the captured names of every quoted `.h` include in `content`.
pub fn extract_local_includes(content: &str) -> Vec<String> {
    LOCAL_INCLUDE
        .captures_iter(content)
        .filter_map(|caps| caps.get(1))
        .map(|name| name.as_str().to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_names_from_path() {
        let header = QtHeader::new("/usr/include/qt5/QtCore/QString");
        assert_eq!(header.class_name(), "QString");
        assert_eq!(header.module_name(), "QtCore");
        assert!(!header.is_umbrella());

        let umbrella = QtHeader::new("/usr/include/qt5/QtCore/QtCore");
        assert!(umbrella.is_umbrella());
    }

    #[test]
    fn test_class_name_strips_extension() {
        let header = QtHeader::new("/qt/QtGui/QOpenGLFunctions.inc");
        assert_eq!(header.class_name(), "QOpenGLFunctions");
    }

    #[test]
    fn test_extract_quoted_includes_only() {
        let content = "#include \"qstring.h\"\n#include <QtCore/qchar.h>\n#include \"qlist.h\"\n";
        assert_eq!(extract_local_includes(content), vec!["qstring", "qlist"]);
    }

    #[test]
    fn test_extract_with_subdirectory_and_ignores_other_extensions() {
        let content = "#include \"private/qobject_p.h\"\n#include \"moc_qobject.cpp\"\n";
        assert_eq!(extract_local_includes(content), vec!["private/qobject_p"]);
    }

    #[test]
    fn test_extract_is_greedy_within_a_line() {
        let content = "#include \"a.h\" // see \"b.h\"\n";
        assert_eq!(extract_local_includes(content), vec!["a.h\" // see \"b"]);
    }

    #[test]
    fn test_extract_handles_crlf() {
        let content = "#include \"qwidget.h\"\r\n#include \"qframe.h\"\r\n";
        assert_eq!(extract_local_includes(content), vec!["qwidget", "qframe"]);
    }

    #[test]
    fn test_private_headers_are_cached() {
        let temp_dir = TempDir::new().unwrap();
        let module = temp_dir.path().join("QtWidgets");
        fs::create_dir_all(&module).unwrap();
        let path = module.join("QWidget");
        fs::write(&path, "#include \"qwidget.h\"\n").unwrap();

        let header = QtHeader::new(&path);
        assert_eq!(header.private_headers().unwrap(), ["qwidget".to_string()]);

        // A second call must not touch the filesystem again.
        fs::remove_file(&path).unwrap();
        assert_eq!(header.private_headers().unwrap(), ["qwidget".to_string()]);
    }

    #[test]
    fn test_private_headers_missing_file_fails() {
        let temp_dir = TempDir::new().unwrap();
        let header = QtHeader::new(temp_dir.path().join("QtCore").join("QGone"));
        assert!(header.private_headers().is_err());
    }
}
