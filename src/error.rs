//! Error types for file conversion.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while converting a Markdown file.
///
/// Parsing itself never fails; every error comes from the surrounding I/O.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Missing {}", .path.display())]
    MissingInput { path: PathBuf },

    #[error("{} is {len} bytes, larger than the supported maximum", .path.display())]
    InputTooLarge { path: PathBuf, len: usize },

    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
