//! Database layer for timeclaim.
//!
//! A single SQLite database in the platform data directory holds every
//! user's record set as one JSON document per user. Reads and writes always
//! move the whole document, matching the record store contract in
//! [`crate::libs::record_set::RecordStore`].
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeclaim::db::records::Records;
//! use timeclaim::libs::record_set::{RecordStore, UserRecordSet};
//!
//! let mut records = Records::new()?;
//! assert!(records.read("jdoe")?.is_none());
//! records.write("jdoe", &UserRecordSet::new())?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection management.
pub mod db;

/// Per-user record set persistence.
pub mod records;
