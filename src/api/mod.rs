//! Sync backends for user record sets.
//!
//! Every backend implements [`SyncReconciler`]: push a whole record set for
//! a user, or pull the whole record set back. Backends are picked from the
//! configuration (see [`crate::libs::sync::SyncBackend`]), never by which
//! module happens to be loaded last.
//!
//! - [`mirror::LocalMirror`]: one JSON file per user in a local directory.
//!   Also serves as the local-only backup when a remote push fails.
//! - [`remote::RemoteStore`]: HTTP document store addressed by user id.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeclaim::api::{mirror::LocalMirror, SyncReconciler};
//! use timeclaim::libs::record_set::UserRecordSet;
//!
//! # async fn run() -> Result<(), timeclaim::libs::error::SyncError> {
//! let mirror = LocalMirror::new("/tmp/timeclaim-mirror");
//! mirror.push("jdoe", &UserRecordSet::new()).await?;
//! let copy = mirror.pull("jdoe").await?;
//! assert!(copy.is_some());
//! # Ok(())
//! # }
//! ```

use crate::libs::error::SyncError;
use crate::libs::record_set::UserRecordSet;

pub mod mirror;
pub mod remote;

pub use mirror::LocalMirror;
pub use remote::{RemoteConfig, RemoteStore};

/// Whole-record-set transfer to and from a sync backend.
///
/// There is no conflict detection: a push overwrites whatever the backend
/// held, and a pulled set replaces the local one. The last writer wins.
#[allow(async_fn_in_trait)]
pub trait SyncReconciler {
    /// Short human readable name used in messages and logs.
    fn name(&self) -> String;

    /// Replaces the backend's copy of `user_id`'s records.
    async fn push(&self, user_id: &str, records: &UserRecordSet) -> Result<(), SyncError>;

    /// The backend's copy of `user_id`'s records; `None` when it has none.
    async fn pull(&self, user_id: &str) -> Result<Option<UserRecordSet>, SyncError>;
}
