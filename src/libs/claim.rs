//! The claim book: one user's record set bound to a record store.
//!
//! Every mutating call runs validate → compute → mutate → persist in one
//! synchronous step. The whole record set is written back after each
//! mutation, never a single month. Nothing here waits on sync; sync works on
//! snapshots taken from the store (see [`crate::libs::sync`]).
//!
//! ## Usage
//!
//! ```rust
//! use timeclaim::libs::claim::ClaimBook;
//! use timeclaim::libs::entry::{EntryDraft, Session};
//! use timeclaim::libs::record_set::MemoryRecords;
//!
//! let mut book = ClaimBook::open(MemoryRecords::new(), "jdoe", "2-2025".parse().unwrap())?;
//! book.submit(&EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30"))?;
//! assert_eq!(book.total().to_string(), "4:30");
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::duration::ClaimDuration;
use super::entry::{EntryDraft, TimeEntry};
use super::export::ClaimDocument;
use super::ledger::{EditSession, MonthKey, MonthLedger};
use super::record_set::{RecordStore, UserRecordSet};
use anyhow::Result;
use tracing::debug;

pub struct ClaimBook<S: RecordStore> {
    store: S,
    user_id: String,
    records: UserRecordSet,
    ledger: MonthLedger,
}

impl<S: RecordStore> ClaimBook<S> {
    /// Loads `user_id`'s record set and selects the `month` ledger.
    pub fn open(store: S, user_id: &str, month: MonthKey) -> Result<Self> {
        let records = store.read(user_id)?.unwrap_or_default();
        let ledger = records.ledger(month);
        debug!(user_id, month = %month, entries = ledger.len(), "claim book opened");
        Ok(ClaimBook {
            store,
            user_id: user_id.to_string(),
            records,
            ledger,
        })
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn month(&self) -> MonthKey {
        self.ledger.key()
    }

    pub fn ledger(&self) -> &MonthLedger {
        &self.ledger
    }

    pub fn records(&self) -> &UserRecordSet {
        &self.records
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_store(self) -> S {
        self.store
    }

    pub fn total(&self) -> ClaimDuration {
        self.ledger.total()
    }

    pub fn switch_month(&mut self, month: MonthKey) {
        self.ledger = self.records.ledger(month);
    }

    /// Validates the draft, appends it and persists. Returns the stored entry.
    ///
    /// Validation failures leave the ledger and the store untouched.
    pub fn submit(&mut self, draft: &EntryDraft) -> Result<TimeEntry> {
        let entry = draft.validate()?;
        let mut ledger = self.ledger.clone();
        ledger.append(entry.clone());
        self.commit(ledger)?;
        Ok(entry)
    }

    pub fn replace_at(&mut self, index: usize, draft: &EntryDraft) -> Result<ClaimDuration> {
        let entry = draft.validate()?;
        let mut ledger = self.ledger.clone();
        let total = ledger.replace_at(index, entry)?;
        self.commit(ledger)?;
        Ok(total)
    }

    pub fn remove_at(&mut self, index: usize) -> Result<TimeEntry> {
        let mut ledger = self.ledger.clone();
        let removed = ledger.remove_at(index)?;
        self.commit(ledger)?;
        Ok(removed)
    }

    pub fn begin_edit(&self, index: usize) -> Result<EditSession> {
        Ok(self.ledger.begin_edit(index)?)
    }

    pub fn save_edit(&mut self, session: EditSession) -> Result<ClaimDuration> {
        let mut ledger = self.ledger.clone();
        let total = ledger.commit_edit(session)?;
        self.commit(ledger)?;
        Ok(total)
    }

    /// Replaces the whole record set, e.g. with a pulled cloud copy, and
    /// persists it. Local changes not contained in `records` are lost.
    pub fn replace_records(&mut self, records: UserRecordSet) -> Result<()> {
        self.store.write(&self.user_id, &records)?;
        self.ledger = records.ledger(self.ledger.key());
        self.records = records;
        Ok(())
    }

    /// Claim form content for the selected month.
    pub fn document(&self, employee_name: &str) -> ClaimDocument {
        ClaimDocument::from_ledger(employee_name, &self.ledger)
    }

    /// Writes the record set with `ledger` in place, then adopts both. A
    /// failed write leaves the book as it was.
    fn commit(&mut self, ledger: MonthLedger) -> Result<()> {
        let mut records = self.records.clone();
        records.put_ledger(ledger.clone());
        self.store.write(&self.user_id, &records)?;
        self.records = records;
        self.ledger = ledger;
        Ok(())
    }
}
