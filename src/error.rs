//! Error types for netrecon
//!
//! Uses `thiserror` for library errors; the binary wraps them with `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::entities::ParseError;
use crate::domain::ports::StoreError;

/// Result type alias for netrecon operations
pub type ReconResult<T> = Result<T, ReconError>;

/// Main error type for reconciliation
#[derive(Error, Debug)]
pub enum ReconError {
    /// A collector source uses the label reserved for the entity's own record
    #[error("source name 'Truth' is reserved for the entity's own network list")]
    ReservedSourceName,

    /// A network record could not be parsed; reconciliation of the entity stops here
    #[error("invalid network #{index} in source '{source_label}': {error}")]
    InvalidNetwork {
        source_label: String,
        index: usize,
        #[source]
        error: ParseError,
    },

    /// Record store failure
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Invalid configuration file
    #[error("invalid configuration in {file}: {message}")]
    Config { file: PathBuf, message: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ReconError {
    /// Whether the failure is caused by malformed client-supplied data
    /// (as opposed to the store or the environment).
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            ReconError::ReservedSourceName
                | ReconError::InvalidNetwork { .. }
                | ReconError::Store(StoreError::Corrupted { .. })
        )
    }
}
