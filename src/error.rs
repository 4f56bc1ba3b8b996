//! Error types for loading and writing recipe datasets.
//!
//! The annotation itself never fails; every variant here comes from the
//! file or JSON layer around it.

use std::io;
use std::path::PathBuf;

/// Error type for dataset I/O and (de)serialization failures
#[derive(Debug, thiserror::Error)]
pub enum AnnotatorError {
    /// The input document could not be opened or read
    #[error("failed to read dataset '{}': {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// The input document is not valid JSON or is not shaped as a dataset
    #[error("failed to parse dataset '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// The output document could not be created or written
    #[error("failed to write dataset '{}': {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to serialize dataset: {0}")]
    Serialize(#[from] serde_json::Error),
}
