//! Error handling for the showcase

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ShowcaseError {
    /// Terminal or filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file exists but could not be parsed or serialized.
    #[error("Invalid configuration: {0}")]
    Config(#[from] serde_json::Error),

    /// A section label that is not one of the six navigation entries.
    #[error("Unknown section: {0}")]
    UnknownSection(String),

    /// No home directory to place the configuration file in.
    #[error("Could not determine home directory")]
    HomeDirNotFound,

    /// The file picked in the uploader could not be read.
    #[error("Cannot upload {}: {source}", path.display())]
    Upload {
        path: PathBuf,
        source: std::io::Error,
    },
}
