//! Error types for conversion

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while converting tagged sentences into SSF
#[derive(Error, Debug)]
pub enum ConvertError {
    /// Input file or membership list is missing or unreadable
    #[error("cannot read {}: {source}", path.display())]
    MissingResource {
        /// Path that could not be read
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// A unit of a tagged line does not contain the separator
    #[error("malformed unit '{unit}' in sentence {sentence}: no '{separator}' separator")]
    MalformedUnit {
        /// The offending whitespace-delimited unit
        unit: String,
        /// Separator that was expected in the unit
        separator: String,
        /// 1-based id of the sentence containing the unit
        sentence: usize,
    },

    /// Output destination cannot be created or written
    #[error("cannot write {}: {source}", path.display())]
    OutputUnwritable {
        /// Destination path
        path: PathBuf,
        /// Underlying I/O failure
        #[source]
        source: io::Error,
    },

    /// The token/tag separator is empty
    #[error("separator must not be empty")]
    EmptySeparator,

    /// Directory traversal failed
    #[error("cannot walk {}: {source}", path.display())]
    Walk {
        /// Directory being walked
        path: PathBuf,
        /// Underlying traversal failure
        #[source]
        source: walkdir::Error,
    },
}

impl ConvertError {
    pub(crate) fn missing(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::MissingResource {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn unwritable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ConvertError::OutputUnwritable {
            path: path.into(),
            source,
        }
    }
}

/// Result type for conversion operations
pub type Result<T> = std::result::Result<T, ConvertError>;
