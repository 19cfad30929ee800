//! Core library modules for timeclaim.
//!
//! ## Layout
//!
//! - **Value types**: [`time`], [`date`], [`duration`] convert and compute
//!   clock times, dates and `H:MM` durations.
//! - **Claim model**: [`entry`] validates drafts into entries, [`ledger`]
//!   keeps one month, [`record_set`] keeps all months of a user and defines
//!   the store contract, [`claim`] ties them to a store.
//! - **Sync**: [`sync`] selects the backend, applies fallbacks and runs the
//!   auto-sync timer.
//! - **Infrastructure**: configuration, data storage, messages, errors.
//! - **Presentation**: console table, row formatting, claim form export.
//!
//! ## Usage
//!
//! ```rust
//! use timeclaim::libs::entry::{EntryDraft, Session};
//! use timeclaim::libs::ledger::{MonthKey, MonthLedger};
//!
//! let mut ledger = MonthLedger::new(MonthKey::new(2, 2025)?);
//! let entry = EntryDraft::new("2025-03-05", Session::Pm, "13:00", "17:15").validate()?;
//! assert_eq!(ledger.append(entry).to_string(), "4:15");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod claim;
pub mod config;
pub mod data_storage;
pub mod date;
pub mod duration;
pub mod entry;
pub mod error;
pub mod export;
pub mod formatter;
pub mod ledger;
pub mod messages;
pub mod record_set;
pub mod sync;
pub mod time;
pub mod view;
