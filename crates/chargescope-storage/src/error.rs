// ============================================================================
// Errors
// ============================================================================

use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq)]
pub enum StorageError {
    /// The backing file is missing or unreadable. Fatal: the dashboard has
    /// no partial or degraded mode.
    DataUnavailable { path: PathBuf, reason: String },
    /// A file was readable but did not match the fixed dataset schema.
    SchemaMismatch { path: PathBuf, line: u64, reason: String },
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::DataUnavailable { path, reason } => {
                write!(f, "Dataset file '{}' is unavailable: {}", path.display(), reason)
            }
            StorageError::SchemaMismatch { path, line, reason } => {
                write!(f, "Schema mismatch in '{}' at line {}: {}", path.display(), line, reason)
            }
        }
    }
}

impl std::error::Error for StorageError {}
