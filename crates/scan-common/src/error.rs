//! Error types for scan imaging.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using ScanError.
pub type ScanResult<T> = Result<T, ScanError>;

/// Primary error type for scan assembly.
#[derive(Debug, Error)]
pub enum ScanError {
    // === Per-position errors (recoverable) ===
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: size of {size} bytes is not a whole number of samples", path.display())]
    MisalignedSize { path: PathBuf, size: u64 },

    #[error("No samples recorded for position ({x}, {y})")]
    MissingSamples { x: usize, y: usize },

    #[error("Sample sequence is empty")]
    EmptySequence,

    // === Configuration errors (fatal) ===
    #[error("Invalid filename pattern: {0}")]
    InvalidPattern(String),

    #[error("Invalid scan geometry: {0}")]
    InvalidGeometry(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

impl ScanError {
    /// Whether this error only affects a single grid position.
    ///
    /// Per-position errors are logged and the position is skipped; all other
    /// errors abort the run before any scan work.
    pub fn is_per_position(&self) -> bool {
        matches!(
            self,
            ScanError::Io { .. }
                | ScanError::MisalignedSize { .. }
                | ScanError::MissingSamples { .. }
                | ScanError::EmptySequence
        )
    }
}
