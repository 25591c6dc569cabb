//! Defines custom error types for the conversion pipeline.

use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Error, Debug)]
/// Error type returned when a conversion run cannot complete.
pub enum Md2HtmlError {
    #[error("Markdown rendering failed: {url} answered with status {status}")]
    RenderFailed { url: String, status: StatusCode },

    #[error("Failed to fetch {url}: server answered with status {status}")]
    FetchFailed { url: String, status: StatusCode },

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to persist {}: {source}", path.display())]
    Persist {
        path: PathBuf,
        #[source]
        source: tempfile::PersistError,
    },

    #[error("Failed to write status output: {0}")]
    Status(#[source] std::io::Error),

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Md2HtmlError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// Convenience alias used throughout the library.
pub type Result<T> = std::result::Result<T, Md2HtmlError>;
