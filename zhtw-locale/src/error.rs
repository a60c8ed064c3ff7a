//! All error types for the zhtw-locale crate.
//!
//! Most of these are "skip and report" conditions: the batch and patch
//! operations collect them per file instead of aborting the whole run.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("cannot decode `{}`: {reason}", .path.display())]
    Encoding { path: PathBuf, reason: String },

    #[error("{what} not found: {}", .path.display())]
    MissingPath { what: &'static str, path: PathBuf },

    #[error("no `.{extension}` files found in {}", .dir.display())]
    NoInputFiles { dir: PathBuf, extension: String },

    #[error("config error: {0}")]
    Config(#[from] toml::de::Error),

    #[error("unsupported voice locale `{0}`")]
    InvalidLocale(String),
}

impl Error {
    /// Creates a new encoding error for the given file.
    pub fn encoding_error(path: impl Into<PathBuf>, reason: impl Into<String>) -> Self {
        Error::Encoding {
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Creates a new missing-path error; `what` names the role of the path.
    pub fn missing_path(what: &'static str, path: impl Into<PathBuf>) -> Self {
        Error::MissingPath {
            what,
            path: path.into(),
        }
    }
}
