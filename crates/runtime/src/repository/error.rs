//! Error types raised by repository implementations.

use fight_core::{ErrorSeverity, GameError, RecordError};
use thiserror::Error;

/// Errors surfaced by repository implementations.
#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("save repository lock was poisoned")]
    LockPoisoned,

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(String),

    #[error("corrupted save data: {0}")]
    CorruptedData(String),

    #[error("saved player cannot be rebuilt: {0}")]
    Record(#[from] RecordError),
}

impl GameError for RepositoryError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::LockPoisoned | Self::Io(_) | Self::Serialization(_) => ErrorSeverity::Internal,
            Self::CorruptedData(_) => ErrorSeverity::Validation,
            Self::Record(error) => error.severity(),
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::LockPoisoned => "REPOSITORY_LOCK_POISONED",
            Self::Io(_) => "REPOSITORY_IO",
            Self::Serialization(_) => "REPOSITORY_SERIALIZATION",
            Self::CorruptedData(_) => "REPOSITORY_CORRUPTED_DATA",
            Self::Record(error) => error.error_code(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RepositoryError>;
