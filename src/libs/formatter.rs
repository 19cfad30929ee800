//! Display formatting of claim entries.
//!
//! A [`ClaimRow`] is the presentation form of one [`TimeEntry`]: display
//! date (`DD/MM/YYYY`), session, 12-hour times and the `H:MM` duration. The
//! console table, the exporters and the claim document all render rows,
//! never raw entries.
//!
//! ```rust
//! use timeclaim::libs::entry::EntryDraft;
//! use timeclaim::libs::entry::Session;
//! use timeclaim::libs::formatter::ClaimRow;
//!
//! let entry = EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30").validate()?;
//! let row = ClaimRow::from_entry(&entry);
//! assert_eq!(row.date, "05/03/2025");
//! assert_eq!(row.time_in, "8:00 AM");
//! assert_eq!(row.duration, "4:30");
//! # Ok::<(), timeclaim::libs::error::ClaimError>(())
//! ```

use super::entry::TimeEntry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimRow {
    pub date: String,
    pub session: String,

    pub time_in: String,

    pub time_out: String,

    pub duration: String,
}

impl ClaimRow {
    pub fn from_entry(entry: &TimeEntry) -> Self {
        ClaimRow {
            date: entry.display_date(),
            session: entry.session().to_string(),
            time_in: entry.time_in().to_12_hour(),
            time_out: entry.time_out().to_12_hour(),
            duration: entry.duration().to_string(),
        }
    }
}
