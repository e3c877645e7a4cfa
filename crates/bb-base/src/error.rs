use std::fmt;
use std::io;
use std::path::PathBuf;

/// Typed error for item store operations.
///
/// Every variant names the underlying cause so the fatal startup message
/// is actionable on its own.
#[derive(Debug)]
pub enum StoreError {
    /// Filesystem failure (directory creation, read, write, rename)
    Io { path: PathBuf, source: io::Error },
    /// Store file exists but is not valid YAML for the store layout
    Parse { path: PathBuf, message: String },
    /// Store file was written for a different entity or layout version
    SchemaMismatch { found: String, expected: String },
    /// Failed to serialize the store contents
    Serialize(String),
}

impl StoreError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        StoreError::Io { path: path.into(), source }
    }
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Io { path, source } => write!(f, "I/O error at {}: {}", path.display(), source),
            StoreError::Parse { path, message } => write!(f, "Parse error in {}: {}", path.display(), message),
            StoreError::SchemaMismatch { found, expected } => {
                write!(f, "Schema mismatch: found {}, expected {}", found, expected)
            }
            StoreError::Serialize(msg) => write!(f, "Serialize error: {}", msg),
        }
    }
}

impl std::error::Error for StoreError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            StoreError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<serde_yaml::Error> for StoreError {
    fn from(e: serde_yaml::Error) -> Self {
        StoreError::Serialize(e.to_string())
    }
}
