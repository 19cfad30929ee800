//! Typed error taxonomy for the claim core.
//!
//! Every fallible core operation returns [`ClaimError`]. The variants map
//! one-to-one onto the ways a claim action can go wrong:
//!
//! - [`ValidationError`]: a submitted entry is incomplete and is never
//!   committed to a ledger.
//! - [`ClaimError::IndexOutOfRange`]: a stale position reference, usually
//!   after another entry was removed. Callers re-read the ledger instead of
//!   retrying.
//! - [`FormatError`]: a malformed time, date, duration or month key reached
//!   a conversion function. Conversions fail loudly instead of coercing.
//! - [`SyncError`]: a sync backend failed. The synchronizer turns these
//!   into fallback outcomes, so they never block the caller.

use thiserror::Error;
use uuid::Uuid;

/// Reasons a candidate entry is rejected before it reaches a ledger.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Date is required")]
    MissingDate,

    #[error("Both time in and time out are required")]
    MissingTimes,
}

/// Malformed input reaching one of the conversion functions.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("Invalid time: '{0}'")]
    Time(String),

    #[error("Invalid date: '{0}'")]
    Date(String),

    #[error("Invalid duration: '{0}'")]
    Duration(String),

    #[error("Invalid month key: '{0}'")]
    MonthKey(String),

    #[error("Invalid session: '{0}' (expected AM or PM)")]
    Session(String),
}

/// Failures reported by a sync backend.
#[derive(Error, Debug)]
pub enum SyncError {
    #[error("Sync transport failed: {0}")]
    Transport(String),

    #[error("Sync backend rejected the credentials")]
    Unauthorized,

    #[error("Sync backend answered with status {0}")]
    Status(u16),

    #[error("Sync payload could not be (de)serialized: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Sync I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<reqwest::Error> for SyncError {
    fn from(err: reqwest::Error) -> Self {
        match err.status() {
            Some(status) => SyncError::Status(status.as_u16()),
            None => SyncError::Transport(err.to_string()),
        }
    }
}

#[derive(Error, Debug)]
pub enum ClaimError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("No entry at position {index} (ledger has {len} entries)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Entry {0} no longer exists")]
    EntryNotFound(Uuid),

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error(transparent)]
    Sync(#[from] SyncError),
}

pub type ClaimResult<T> = Result<T, ClaimError>;
