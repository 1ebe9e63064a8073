use std::path::PathBuf;

use thiserror::Error;

pub type Result<T, E = TrackerError> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum TrackerError {
    #[error("date must be YYYY-MM-DD")]
    InvalidDate(String),

    #[error("amount must be > 0")]
    InvalidAmount(f64),

    #[error("category is required")]
    EmptyCategory,

    #[error("No fields to update")]
    NoFieldsToUpdate,

    #[error("no existing records to derive an id from")]
    NoExistingRecords,

    #[error("malformed expense id {0:?}")]
    MalformedId(String),

    #[error("Expense {0} not found")]
    NotFound(String),

    #[error("Corrupted data file. Please check {}", path.display())]
    StorageCorrupted {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Could not access expenses file {}: {source}", path.display())]
    StorageIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Coarse classification of [`TrackerError`], one per user-facing failure class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    StorageCorrupted,
    StorageIo,
}

impl TrackerError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidDate(_)
            | Self::InvalidAmount(_)
            | Self::EmptyCategory
            | Self::NoFieldsToUpdate
            | Self::NoExistingRecords
            | Self::MalformedId(_) => ErrorKind::Validation,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::StorageCorrupted { .. } => ErrorKind::StorageCorrupted,
            Self::StorageIo { .. } => ErrorKind::StorageIo,
        }
    }

    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::StorageIo {
            path: path.into(),
            source,
        }
    }
}
