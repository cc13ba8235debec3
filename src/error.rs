//! Library error type.

use std::path::PathBuf;

use plotters::drawing::DrawingAreaErrorKind;
use thiserror::Error;

use crate::dsp::ThresholdError;

/// Errors raised by the library.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem failure, tagged with the path involved.
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Malformed or incomplete CSV data.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Threshold table failed validation.
    #[error("invalid threshold table: {0}")]
    Threshold(#[from] ThresholdError),

    /// Chart backend failure (font lookup, bitmap encoding, ...).
    #[error("plot error: {0}")]
    Plot(String),
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}

impl<E> From<DrawingAreaErrorKind<E>> for Error
where
    E: std::error::Error + Send + Sync,
{
    fn from(err: DrawingAreaErrorKind<E>) -> Self {
        Error::Plot(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
