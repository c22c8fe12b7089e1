//! Content loading errors

use std::path::PathBuf;
use thiserror::Error;

/// Failures while locating or reading lesson files.
///
/// Malformed front-matter is never one of these; it degrades to partial
/// metadata instead.
#[derive(Error, Debug)]
pub enum ContentError {
    #[error("Failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to walk content directory: {0}")]
    Walk(#[from] walkdir::Error),

    #[error("Invalid exclude pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_yaml::Error),

    #[error("No content at {0:?}")]
    MissingSource(String),
}
