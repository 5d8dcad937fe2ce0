//! Ingestion error module.
//!
//! Errors raised while reading a word source. They are fatal to the load but
//! never to the process: the binary reports them and carries on.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading words from a source.
#[derive(Error, Debug)]
pub enum IngestError {
    /// The word file does not exist.
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    /// The word source could not be read.
    #[error("Error reading file {path}: {source}")]
    Read {
        /// Path of the source, or `<reader>` for in-memory sources
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },
}
