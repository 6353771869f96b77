//! Error types for the qtmap-rs library.
//!
//! Every fallible operation in the mapping pipeline returns [`Result`], whose
//! error type keeps enough context (paths, offending entries) to tell the user
//! which part of the Qt header tree or output location caused the failure.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Main result type for qtmap operations.
pub type Result<T> = std::result::Result<T, QtMapError>;

/// Error type for all qtmap operations.
#[derive(Error, Debug)]
pub enum QtMapError {
    /// I/O related errors (reading headers, writing the mapping file)
    #[error("I/O error: {message}")]
    Io {
        /// Human-readable error message
        message: String,
        /// Underlying I/O error
        #[source]
        source: io::Error,
    },

    /// The include root (or another required path) is missing or unusable
    #[error("Path error: {message} ({})", path.display())]
    Path {
        /// Error description
        message: String,
        /// Path that caused the error
        path: PathBuf,
    },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Config {
        /// Error description
        message: String,
        /// Configuration field that caused the error
        field: Option<String>,
    },

    /// Serialization/deserialization errors
    #[error("Serialization error: {message}")]
    Serialization {
        /// Error description
        message: String,
        /// Data type being serialized
        data_type: Option<String>,
        /// Underlying serialization error
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// A mapping document entry that does not follow the `.imp` rule shape
    #[error("Parse error: {message}")]
    Parse {
        /// Error description
        message: String,
        /// Offending entry, if available
        entry: Option<String>,
    },
}

impl QtMapError {
    /// Create a new I/O error with context
    pub fn io(message: impl Into<String>, source: io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a new path error
    pub fn path(message: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self::Path {
            message: message.into(),
            path: path.into(),
        }
    }

    /// Create a new configuration error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: None,
        }
    }

    /// Create a new configuration error with field context
    pub fn config_field(message: impl Into<String>, field: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
            field: Some(field.into()),
        }
    }

    /// Create a new parse error
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            entry: None,
        }
    }

    /// Create a new parse error carrying the offending entry
    pub fn parse_entry(message: impl Into<String>, entry: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
            entry: Some(entry.into()),
        }
    }

    /// Add context to an existing error
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        match &mut self {
            Self::Io { message, .. }
            | Self::Path { message, .. }
            | Self::Config { message, .. }
            | Self::Serialization { message, .. }
            | Self::Parse { message, .. } => {
                *message = format!("{}: {}", context.into(), message);
            }
        }
        self
    }
}

impl From<io::Error> for QtMapError {
    fn from(err: io::Error) -> Self {
        Self::io("I/O operation failed", err)
    }
}

impl From<walkdir::Error> for QtMapError {
    fn from(err: walkdir::Error) -> Self {
        let message = match err.path() {
            Some(path) => format!("Failed to walk {}", path.display()),
            None => "Failed to walk header tree".to_string(),
        };
        match err.into_io_error() {
            Some(source) => Self::io(message, source),
            // Symlink loops carry no io::Error
            None => Self::io(message, io::Error::new(io::ErrorKind::Other, "filesystem loop")),
        }
    }
}

impl From<serde_json::Error> for QtMapError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization {
            message: format!("JSON serialization failed: {err}"),
            data_type: Some("JSON".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

impl From<serde_yaml::Error> for QtMapError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Serialization {
            message: format!("YAML serialization failed: {err}"),
            data_type: Some("YAML".to_string()),
            source: Some(Box::new(err)),
        }
    }
}

/// Result extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;

    /// Add static context to an error result
    fn context(self, msg: &'static str) -> Result<T>;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<QtMapError>,
{
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| e.into().with_context(f()))
    }

    fn context(self, msg: &'static str) -> Result<T> {
        self.map_err(|e| e.into().with_context(msg))
    }
}
