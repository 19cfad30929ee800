//! A user's full set of month ledgers and the store contract around it.
//!
//! The record set is always read and written whole: a session loads it once
//! and every mutation writes the entire set back, never a single month.
//! Serialized it is a plain JSON object keyed by month key:
//!
//! ```json
//! { "3-2025": [ { "id": "...", "date": "2025-04-01", "session": "AM",
//!                 "timeIn": "08:00", "timeOut": "12:00", "duration": "4:00" } ] }
//! ```

use super::entry::TimeEntry;
use super::ledger::{MonthKey, MonthLedger};
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserRecordSet {
    months: BTreeMap<MonthKey, Vec<TimeEntry>>,
}

impl UserRecordSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// The ledger for `key`; empty when the month has no records yet.
    pub fn ledger(&self, key: MonthKey) -> MonthLedger {
        let entries = self.months.get(&key).cloned().unwrap_or_default();
        MonthLedger::from_entries(key, entries)
    }

    /// Stores the ledger's entries under its month key, replacing that month.
    pub fn put_ledger(&mut self, ledger: MonthLedger) {
        let key = ledger.key();
        self.months.insert(key, ledger.into_entries());
    }

    pub fn entries(&self, key: MonthKey) -> &[TimeEntry] {
        self.months.get(&key).map(Vec::as_slice).unwrap_or_default()
    }

    /// Month keys in calendar order.
    pub fn months(&self) -> impl Iterator<Item = MonthKey> + '_ {
        self.months.keys().copied()
    }

    pub fn is_empty(&self) -> bool {
        self.months.values().all(Vec::is_empty)
    }

    pub fn entry_count(&self) -> usize {
        self.months.values().map(Vec::len).sum()
    }
}

/// Persistence for record sets, keyed by user identity.
///
/// `read` of an unknown user is `Ok(None)`, never an error. `write` replaces
/// the whole stored value in one step.
pub trait RecordStore {
    fn read(&self, user_id: &str) -> Result<Option<UserRecordSet>>;

    fn write(&mut self, user_id: &str, records: &UserRecordSet) -> Result<()>;
}

/// In-process store, used when nothing needs to outlive the process.
#[derive(Debug, Default)]
pub struct MemoryRecords {
    records: HashMap<String, UserRecordSet>,
}

impl MemoryRecords {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordStore for MemoryRecords {
    fn read(&self, user_id: &str) -> Result<Option<UserRecordSet>> {
        Ok(self.records.get(user_id).cloned())
    }

    fn write(&mut self, user_id: &str, records: &UserRecordSet) -> Result<()> {
        self.records.insert(user_id.to_string(), records.clone());
        Ok(())
    }
}
