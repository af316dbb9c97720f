//! Error types for slot allocation operations.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::slot::SlotId;

/// Errors produced by the slot allocation engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LotError {
    /// A size, increment, or identifier argument is out of range.
    #[error("{0}")]
    InvalidArgument(String),
    /// `initialize` was called on a lot that already has slots.
    #[error("parking lot already initialized")]
    AlreadyInitialized,
    /// An operation ran before the lot was initialized.
    #[error("parking lot not initialized yet")]
    NotInitialized,
    /// Every slot is occupied.
    #[error("parking lot is full")]
    Full,
    /// The slot is free or outside the pool.
    #[error("slot {0} is already free or does not exist")]
    SlotNotFound(SlotId),
    /// No occupied slot holds the given registration.
    #[error("car with registration number `{0}` not found")]
    OccupantNotFound(String),
}

/// Coarse classification of a [`LotError`], stable across message changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Bad size, increment, key, or release selector.
    InvalidArgument,
    /// Second initialization attempt.
    AlreadyInitialized,
    /// Operation before initialization.
    NotInitialized,
    /// No free slot left.
    Full,
    /// Nothing matched the release target.
    NotFound,
}

impl ErrorKind {
    /// Transport status conventionally used for this kind.
    #[must_use]
    pub const fn status_code(self) -> u16 {
        match self {
            Self::NotFound => 404,
            Self::InvalidArgument | Self::AlreadyInitialized | Self::NotInitialized | Self::Full => {
                400
            }
        }
    }
}

impl LotError {
    /// Classify this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
            Self::AlreadyInitialized => ErrorKind::AlreadyInitialized,
            Self::NotInitialized => ErrorKind::NotInitialized,
            Self::Full => ErrorKind::Full,
            Self::SlotNotFound(_) | Self::OccupantNotFound(_) => ErrorKind::NotFound,
        }
    }

    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
