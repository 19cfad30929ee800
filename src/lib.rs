//! # timeclaim
//!
//! Employee time-claim records: morning and afternoon work sessions per
//! day, grouped by month, totalled in `H:MM`, and synced to a backend.
//!
//! ## Features
//!
//! - **Time conversion**: 24-hour storage, 12-hour display
//! - **Duration calculation**: sessions crossing midnight wrap to the next day
//! - **Validation**: drafts become entries only with a date and both times
//! - **Month ledgers**: append, edit, remove and total per month
//! - **Persistence**: whole record sets per user in SQLite
//! - **Sync**: local mirror or HTTP remote, with local backup on failure
//! - **Export**: claim forms as CSV, JSON or Excel
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeclaim::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
