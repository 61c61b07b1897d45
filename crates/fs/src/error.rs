use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Scan failures. Every variant names the offending path; the scanner never
/// recovers locally, so a single unreadable entry fails the whole scan.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("path not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read {}: {source}", path.display())]
    Traversal {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    pub(crate) fn traversal(path: &Path, source: io::Error) -> Self {
        ScanError::Traversal {
            path: path.to_path_buf(),
            source,
        }
    }

    /// Path the error was reported against.
    pub fn path(&self) -> &Path {
        match self {
            ScanError::NotFound { path } => path,
            ScanError::Traversal { path, .. } => path,
        }
    }
}
