//! Month ledgers: the ordered entries of one user for one month.
//!
//! Entries keep insertion order; an entry added out of calendar order stays
//! where it was added. Positions are dense, so removing an entry shifts
//! every later entry down by one. Callers holding a position across a
//! removal must re-read the ledger; callers that need a reference that
//! survives removals use the entry id ([`MonthLedger::position`],
//! [`MonthLedger::replace`], [`MonthLedger::remove`]) or an [`EditSession`].
//!
//! ## Totals
//!
//! [`MonthLedger::total`] folds over the durations stored on the entries. It
//! does not recompute them from the clock times: the minutes of every entry
//! are summed first and hours/minutes are derived once from the grand total.
//!
//! ## Usage
//!
//! ```rust
//! use timeclaim::libs::entry::{EntryDraft, Session};
//! use timeclaim::libs::ledger::{MonthKey, MonthLedger};
//!
//! let mut ledger = MonthLedger::new("2-2025".parse().unwrap());
//! let entry = EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30").validate().unwrap();
//! assert_eq!(ledger.append(entry).to_string(), "4:30");
//!
//! let mut edit = ledger.begin_edit(0).unwrap();
//! edit.draft.time_out = "13:00".to_string();
//! assert_eq!(ledger.commit_edit(edit).unwrap().to_string(), "5:00");
//! ```

use super::duration::ClaimDuration;
use super::entry::{EntryDraft, TimeEntry};
use super::error::{ClaimError, ClaimResult, FormatError};
use super::time::parse_digits;
use chrono::{Datelike, Local, NaiveDate};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use tracing::debug;
use uuid::Uuid;

/// Composite `"<month0>-<year>"` key, month counted from 0.
///
/// `"3-2025"` is April 2025.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MonthKey {
    month0: u32,
    year: i32,
}

impl MonthKey {
    pub fn new(month0: u32, year: i32) -> Result<Self, FormatError> {
        if month0 > 11 {
            return Err(FormatError::MonthKey(format!("{}-{}", month0, year)));
        }
        Ok(MonthKey { month0, year })
    }

    pub fn from_date(date: NaiveDate) -> Self {
        MonthKey {
            month0: date.month0(),
            year: date.year(),
        }
    }

    /// The key of the current local month.
    pub fn current() -> Self {
        Self::from_date(Local::now().date_naive())
    }

    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Human readable month, e.g. `April 2025`.
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month0 + 1, 1) {
            Some(first) => first.format("%B %Y").to_string(),
            None => self.to_string(),
        }
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.month0, self.year)
    }
}

impl FromStr for MonthKey {
    type Err = FormatError;

    /// Only the canonical form is accepted: plain digits, no sign and no
    /// leading zeros, so each month has exactly one key string.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || FormatError::MonthKey(s.to_string());
        let (month0, year) = s.split_once('-').ok_or_else(invalid)?;
        let month0 = parse_digits(month0).ok_or_else(invalid)?;
        let year = parse_digits(year).and_then(|year| i32::try_from(year).ok()).ok_or_else(invalid)?;
        let key = MonthKey::new(month0, year).map_err(|_| invalid())?;
        if key.to_string() != s {
            return Err(invalid());
        }
        Ok(key)
    }
}

impl Ord for MonthKey {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month0).cmp(&(other.year, other.month0))
    }
}

impl PartialOrd for MonthKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Serialize for MonthKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for MonthKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// An in-progress edit of one ledger entry.
///
/// Holds the identity of the entry being edited and a draft prefilled from
/// it. The draft is public so the caller can change any field before
/// handing the session back to [`MonthLedger::commit_edit`]. Dropping the
/// session cancels the edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSession {
    month: MonthKey,
    entry_id: Uuid,
    pub draft: EntryDraft,
}

impl EditSession {
    pub fn month(&self) -> MonthKey {
        self.month
    }

    pub fn entry_id(&self) -> Uuid {
        self.entry_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthLedger {
    key: MonthKey,
    entries: Vec<TimeEntry>,
}

impl MonthLedger {
    pub fn new(key: MonthKey) -> Self {
        MonthLedger { key, entries: Vec::new() }
    }

    pub fn from_entries(key: MonthKey, entries: Vec<TimeEntry>) -> Self {
        MonthLedger { key, entries }
    }

    pub fn key(&self) -> MonthKey {
        self.key
    }

    pub fn entries(&self) -> &[TimeEntry] {
        &self.entries
    }

    pub fn into_entries(self) -> Vec<TimeEntry> {
        self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&TimeEntry> {
        self.entries.get(index)
    }

    /// Adds the entry at the end and returns the new total.
    pub fn append(&mut self, entry: TimeEntry) -> ClaimDuration {
        debug!(month = %self.key, id = %entry.id(), duration = %entry.duration(), "append entry");
        self.entries.push(entry);
        self.total()
    }

    /// Replaces the entry at `index` whole and returns the new total.
    pub fn replace_at(&mut self, index: usize, entry: TimeEntry) -> ClaimResult<ClaimDuration> {
        let len = self.entries.len();
        let slot = self.entries.get_mut(index).ok_or(ClaimError::IndexOutOfRange { index, len })?;
        debug!(month = %self.key, index, id = %entry.id(), "replace entry");
        *slot = entry;
        Ok(self.total())
    }

    /// Removes the entry at `index`; later entries move down one position.
    pub fn remove_at(&mut self, index: usize) -> ClaimResult<TimeEntry> {
        let len = self.entries.len();
        if index >= len {
            return Err(ClaimError::IndexOutOfRange { index, len });
        }
        let removed = self.entries.remove(index);
        debug!(month = %self.key, index, id = %removed.id(), "remove entry");
        Ok(removed)
    }

    pub fn position(&self, id: Uuid) -> Option<usize> {
        self.entries.iter().position(|entry| entry.id() == id)
    }

    pub fn replace(&mut self, id: Uuid, entry: TimeEntry) -> ClaimResult<ClaimDuration> {
        let index = self.position(id).ok_or(ClaimError::EntryNotFound(id))?;
        self.replace_at(index, entry)
    }

    pub fn remove(&mut self, id: Uuid) -> ClaimResult<TimeEntry> {
        let index = self.position(id).ok_or(ClaimError::EntryNotFound(id))?;
        self.remove_at(index)
    }

    /// Sum of the stored durations.
    pub fn total(&self) -> ClaimDuration {
        let minutes: u64 = self.entries.iter().map(|entry| entry.duration().total_minutes()).sum();
        ClaimDuration::from_minutes(minutes)
    }

    /// Opens an edit of the entry currently at `index`.
    pub fn begin_edit(&self, index: usize) -> ClaimResult<EditSession> {
        let entry = self.entries.get(index).ok_or(ClaimError::IndexOutOfRange {
            index,
            len: self.entries.len(),
        })?;
        Ok(EditSession {
            month: self.key,
            entry_id: entry.id(),
            draft: entry.to_draft(),
        })
    }

    /// Validates the session's draft and replaces the edited entry by id.
    ///
    /// The entry keeps its identity. If it was removed while the session was
    /// open the edit fails with [`ClaimError::EntryNotFound`]; nothing else
    /// in the ledger is touched.
    pub fn commit_edit(&mut self, session: EditSession) -> ClaimResult<ClaimDuration> {
        let index = self.position(session.entry_id).ok_or(ClaimError::EntryNotFound(session.entry_id))?;
        let entry = session.draft.validate()?.with_identity(session.entry_id);
        self.replace_at(index, entry)
    }
}
