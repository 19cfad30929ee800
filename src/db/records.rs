use crate::db::db::Db;
use crate::libs::record_set::{RecordStore, UserRecordSet};
use anyhow::{Context, Result};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use tracing::debug;

const SCHEMA_RECORDS: &str = "CREATE TABLE IF NOT EXISTS records (
    user_id TEXT PRIMARY KEY,
    data TEXT NOT NULL,
    updated_at TIMESTAMP NOT NULL
);";
const UPSERT_RECORDS: &str = "INSERT INTO records (user_id, data, updated_at)
    VALUES (?1, ?2, datetime(CURRENT_TIMESTAMP, 'localtime'))
    ON CONFLICT(user_id) DO UPDATE SET data = excluded.data, updated_at = excluded.updated_at";
const SELECT_BY_USER: &str = "SELECT data FROM records WHERE user_id = ?1";

/// SQLite-backed record store, one JSON document per user.
pub struct Records {
    conn: Connection,
}

impl Records {
    pub fn new() -> Result<Self> {
        Self::from_db(Db::new()?)
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_db(Db::open(path)?)
    }

    pub fn in_memory() -> Result<Self> {
        Self::from_db(Db::open_in_memory()?)
    }

    fn from_db(db: Db) -> Result<Self> {
        db.conn.execute(SCHEMA_RECORDS, [])?;
        Ok(Records { conn: db.conn })
    }
}

impl RecordStore for Records {
    fn read(&self, user_id: &str) -> Result<Option<UserRecordSet>> {
        let data: Option<String> = self
            .conn
            .query_row(SELECT_BY_USER, [user_id], |row| row.get(0))
            .optional()?;
        match data {
            Some(data) => {
                let records = serde_json::from_str(&data).with_context(|| format!("stored records for '{}' are corrupt", user_id))?;
                Ok(Some(records))
            }
            None => Ok(None),
        }
    }

    fn write(&mut self, user_id: &str, records: &UserRecordSet) -> Result<()> {
        let data = serde_json::to_string(records)?;
        self.conn.execute(UPSERT_RECORDS, params![user_id, data])?;
        debug!(user_id, months = records.months().count(), entries = records.entry_count(), "records written");
        Ok(())
    }
}
