use super::*;
use std::fs;
use std::path::PathBuf;
use tempfile::tempdir;

fn write_header(root: &Path, module: &str, name: &str, contents: &str) -> PathBuf {
    let dir = root.join(module);
    fs::create_dir_all(&dir).unwrap();
    let path = dir.join(name);
    fs::write(&path, contents).unwrap();
    path
}

fn class_names(headers: &[QtHeader]) -> Vec<&str> {
    headers.iter().map(QtHeader::class_name).collect()
}

#[test]
fn discovers_extensionless_headers_only() -> Result<()> {
    let dir = tempdir()?;
    write_header(dir.path(), "QtCore", "QString", "#include \"qstring.h\"\n");
    write_header(dir.path(), "QtCore", "qstring.h", "class QString;\n");
    write_header(dir.path(), "QtCore", "QPainterPath", "");

    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert_eq!(class_names(catalog.regular()), vec!["QPainterPath", "QString"]);
    assert!(catalog.deferred().is_empty());
    Ok(())
}

#[test]
fn skips_files_directly_under_root_and_nested_directories() -> Result<()> {
    let dir = tempdir()?;
    fs::write(dir.path().join("QtTopLevel"), "")?;
    write_header(dir.path(), "QtCore", "QObject", "");
    write_header(&dir.path().join("QtCore"), "private", "QObjectPrivate", "");

    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert_eq!(class_names(catalog.regular()), vec!["QObject"]);
    Ok(())
}

#[test]
fn skips_hidden_entries() -> Result<()> {
    let dir = tempdir()?;
    write_header(dir.path(), "QtCore", ".QHidden", "");
    write_header(dir.path(), ".git", "QObject", "");
    write_header(dir.path(), "QtCore", "QVariant", "");

    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert_eq!(class_names(catalog.regular()), vec!["QVariant"]);
    Ok(())
}

#[test]
fn excludes_qinternal() -> Result<()> {
    let dir = tempdir()?;
    write_header(dir.path(), "QtCore", "QInternal", "#include \"qnamespace.h\"\n");
    write_header(dir.path(), "QtCore", "QEvent", "");

    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert_eq!(class_names(catalog.regular()), vec!["QEvent"]);
    Ok(())
}

#[test]
fn separates_umbrella_headers() -> Result<()> {
    let dir = tempdir()?;
    write_header(dir.path(), "QtCore", "QtCore", "");
    write_header(dir.path(), "QtCore", "QTimer", "");
    write_header(dir.path(), "QtGui", "QColor", "");

    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert_eq!(class_names(catalog.regular()), vec!["QTimer", "QColor"]);
    assert_eq!(class_names(catalog.deferred()), vec!["QtCore"]);

    let order: Vec<&str> = catalog
        .in_processing_order()
        .map(QtHeader::class_name)
        .collect();
    assert_eq!(order, vec!["QTimer", "QColor", "QtCore"]);
    assert_eq!(catalog.len(), 3);
    Ok(())
}

#[test]
fn honours_configured_suffixes_and_classes() -> Result<()> {
    let dir = tempdir()?;
    write_header(dir.path(), "QtCore", "QtCoreDepends", "");
    write_header(dir.path(), "QtCore", "qconfig.pri", "");
    write_header(dir.path(), "QtCore", "QDate", "");

    let mut config = MappingConfig::default();
    config.excluded_suffixes.push(".pri".to_string());
    config.excluded_classes.push("QtCoreDepends".to_string());

    let catalog = HeaderCatalog::discover(dir.path(), &config)?;
    assert_eq!(class_names(catalog.regular()), vec!["QDate"]);
    Ok(())
}

#[test]
fn empty_root_yields_empty_catalog() -> Result<()> {
    let dir = tempdir()?;
    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert!(catalog.is_empty());
    Ok(())
}

#[test]
fn missing_root_fails_fast() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("qt5");

    let err = HeaderCatalog::discover(&missing, &MappingConfig::default()).unwrap_err();
    assert!(matches!(err, QtMapError::Path { path, .. } if path == missing));
}

#[test]
fn file_root_is_rejected() {
    let dir = tempdir().unwrap();
    let file = dir.path().join("qt5");
    fs::write(&file, "").unwrap();

    let err = HeaderCatalog::discover(&file, &MappingConfig::default()).unwrap_err();
    assert!(matches!(err, QtMapError::Path { .. }));
}

#[cfg(unix)]
#[test]
fn follows_symlinked_headers() -> Result<()> {
    let dir = tempdir()?;
    let target = write_header(dir.path(), "QtCore", "QStringList", "");
    std::os::unix::fs::symlink(&target, dir.path().join("QtCore").join("QStringListIterator"))?;

    let catalog = HeaderCatalog::discover(dir.path(), &MappingConfig::default())?;
    assert_eq!(
        class_names(catalog.regular()),
        vec!["QStringList", "QStringListIterator"]
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn dangling_symlink_is_io_error() -> Result<()> {
    let dir = tempdir()?;
    write_header(dir.path(), "QtCore", "QObject", "");
    std::os::unix::fs::symlink(
        dir.path().join("nowhere"),
        dir.path().join("QtCore").join("QDangling"),
    )?;

    let err = HeaderCatalog::discover(dir.path(), &MappingConfig::default()).unwrap_err();
    assert!(matches!(err, QtMapError::Io { .. }), "unexpected error: {err}");
    Ok(())
}
