#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timeclaim::db::records::Records;
    use timeclaim::libs::claim::ClaimBook;
    use timeclaim::libs::entry::{EntryDraft, Session};
    use timeclaim::libs::ledger::{MonthKey, MonthLedger};
    use timeclaim::libs::record_set::{MemoryRecords, RecordStore, UserRecordSet};

    struct RecordsTestContext {
        temp_dir: TempDir,
    }

    impl TestContext for RecordsTestContext {
        fn setup() -> Self {
            RecordsTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
            }
        }
    }

    impl RecordsTestContext {
        fn open(&self) -> Records {
            Records::open(self.temp_dir.path().join("records.db")).unwrap()
        }
    }

    /// Memory store whose writes can be made to fail.
    #[derive(Default)]
    struct FlakyStore {
        inner: MemoryRecords,
        fail_writes: Cell<bool>,
    }

    impl RecordStore for FlakyStore {
        fn read(&self, user_id: &str) -> anyhow::Result<Option<UserRecordSet>> {
            self.inner.read(user_id)
        }

        fn write(&mut self, user_id: &str, records: &UserRecordSet) -> anyhow::Result<()> {
            if self.fail_writes.get() {
                anyhow::bail!("disk full");
            }
            self.inner.write(user_id, records)
        }
    }

    fn record_set(entries: &[(&str, &str, &str)]) -> UserRecordSet {
        let mut records = UserRecordSet::new();
        for (date, time_in, time_out) in entries {
            let entry = EntryDraft::new(date, Session::Am, time_in, time_out).validate().unwrap();
            let mut ledger = records.ledger(MonthKey::from_date(entry.date()));
            ledger.append(entry);
            records.put_ledger(ledger);
        }
        records
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_read_unknown_user_is_none(ctx: &mut RecordsTestContext) {
        assert!(ctx.open().read("nobody").unwrap().is_none());
        assert!(MemoryRecords::new().read("nobody").unwrap().is_none());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_write_then_read_round_trips(ctx: &mut RecordsTestContext) {
        let records = record_set(&[("2025-03-05", "08:00", "12:30"), ("2025-04-01", "13:00", "17:00")]);

        ctx.open().write("jdoe", &records).unwrap();

        // A fresh connection sees the committed value.
        let stored = ctx.open().read("jdoe").unwrap().unwrap();
        assert_eq!(stored, records);
        assert_eq!(stored.months().collect::<Vec<_>>(), vec![MonthKey::new(2, 2025).unwrap(), MonthKey::new(3, 2025).unwrap()]);
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_second_write_replaces_wholesale(ctx: &mut RecordsTestContext) {
        let mut store = ctx.open();
        store.write("jdoe", &record_set(&[("2025-03-05", "08:00", "12:30"), ("2025-04-01", "13:00", "17:00")])).unwrap();

        let replacement = record_set(&[("2025-05-02", "09:00", "10:00")]);
        store.write("jdoe", &replacement).unwrap();

        let stored = store.read("jdoe").unwrap().unwrap();
        assert_eq!(stored, replacement);
        assert!(stored.entries(MonthKey::new(2, 2025).unwrap()).is_empty());
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_users_are_isolated(ctx: &mut RecordsTestContext) {
        let mut store = ctx.open();
        store.write("a", &record_set(&[("2025-03-05", "08:00", "12:30")])).unwrap();
        store.write("b", &UserRecordSet::new()).unwrap();

        assert_eq!(store.read("a").unwrap().unwrap().entry_count(), 1);
        assert_eq!(store.read("b").unwrap().unwrap().entry_count(), 0);
    }

    #[test]
    fn test_in_memory_database() {
        let mut store = Records::in_memory().unwrap();
        let records = record_set(&[("2025-03-05", "08:00", "12:30")]);
        store.write("jdoe", &records).unwrap();
        assert_eq!(store.read("jdoe").unwrap(), Some(records));
    }

    #[test]
    fn test_record_set_json_is_keyed_by_month() {
        let records = record_set(&[("2025-04-01", "08:00", "12:00")]);
        let json: serde_json::Value = serde_json::to_value(&records).unwrap();

        let april = &json["3-2025"][0];
        assert_eq!(april["date"], "2025-04-01");
        assert_eq!(april["session"], "AM");
        assert_eq!(april["timeIn"], "08:00");
        assert_eq!(april["timeOut"], "12:00");
        assert_eq!(april["duration"], "4:00");
    }

    #[test]
    fn test_corrupt_duration_fails_to_load() {
        let json = r#"{"3-2025":[{"id":"0190c5d4-8f2e-7b3a-9c1d-2e3f4a5b6c7d","date":"2025-04-01","session":"AM","timeIn":"08:00","timeOut":"12:00","duration":"four hours"}]}"#;
        assert!(serde_json::from_str::<UserRecordSet>(json).is_err());
    }

    #[test]
    fn test_stored_durations_are_summed_as_stored() {
        let json = r#"{"3-2025":[{"id":"0190c5d4-8f2e-7b3a-9c1d-2e3f4a5b6c7d","date":"2025-04-01","session":"AM","timeIn":"08:00","timeOut":"12:00","duration":"1:00"}]}"#;
        let records: UserRecordSet = serde_json::from_str(json).unwrap();
        let ledger: MonthLedger = records.ledger(MonthKey::new(3, 2025).unwrap());
        assert_eq!(ledger.total().to_string(), "1:00");
    }

    #[test_context(RecordsTestContext)]
    #[test]
    fn test_claim_book_persists_every_mutation(ctx: &mut RecordsTestContext) {
        let march = MonthKey::new(2, 2025).unwrap();
        let mut book = ClaimBook::open(ctx.open(), "jdoe", march).unwrap();
        book.submit(&EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30")).unwrap();
        book.submit(&EntryDraft::new("2025-03-05", Session::Pm, "13:00", "17:15")).unwrap();
        book.remove_at(0).unwrap();

        let reopened = ClaimBook::open(ctx.open(), "jdoe", march).unwrap();
        assert_eq!(reopened.ledger().len(), 1);
        assert_eq!(reopened.total().to_string(), "4:15");
    }

    #[test]
    fn test_claim_book_rejects_invalid_drafts_without_writing() {
        let march = MonthKey::new(2, 2025).unwrap();
        let mut book = ClaimBook::open(MemoryRecords::new(), "jdoe", march).unwrap();

        assert!(book.submit(&EntryDraft::new("", Session::Am, "08:00", "12:30")).is_err());
        assert!(book.ledger().is_empty());
        assert!(book.store().read("jdoe").unwrap().is_none());
    }

    #[test]
    fn test_claim_book_keeps_other_months() {
        let mut store = MemoryRecords::new();
        store.write("jdoe", &record_set(&[("2025-04-01", "08:00", "12:00")])).unwrap();

        let mut book = ClaimBook::open(store, "jdoe", MonthKey::new(2, 2025).unwrap()).unwrap();
        book.submit(&EntryDraft::new("2025-03-05", Session::Am, "08:00", "09:00")).unwrap();

        let stored = book.store().read("jdoe").unwrap().unwrap();
        assert_eq!(stored.entry_count(), 2);

        book.switch_month(MonthKey::new(3, 2025).unwrap());
        assert_eq!(book.total().to_string(), "4:00");
    }

    #[test]
    fn test_claim_book_edit_session() {
        let march = MonthKey::new(2, 2025).unwrap();
        let mut book = ClaimBook::open(MemoryRecords::new(), "jdoe", march).unwrap();
        book.submit(&EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30")).unwrap();

        let mut session = book.begin_edit(0).unwrap();
        session.draft.time_in = "09:00".to_string();
        assert_eq!(book.save_edit(session).unwrap().to_string(), "3:30");

        let stored = book.store().read("jdoe").unwrap().unwrap();
        assert_eq!(stored.entries(march)[0].time_in().to_string(), "09:00");
    }

    #[test]
    fn test_claim_book_replace_records() {
        let march = MonthKey::new(2, 2025).unwrap();
        let mut book = ClaimBook::open(MemoryRecords::new(), "jdoe", march).unwrap();
        book.submit(&EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30")).unwrap();

        book.replace_records(record_set(&[("2025-03-10", "10:00", "11:00")])).unwrap();

        assert_eq!(book.total().to_string(), "1:00");
        assert_eq!(book.store().read("jdoe").unwrap().unwrap().entry_count(), 1);
    }

    #[test]
    fn test_claim_book_unchanged_when_write_fails() {
        let march = MonthKey::new(2, 2025).unwrap();
        let mut book = ClaimBook::open(FlakyStore::default(), "jdoe", march).unwrap();
        book.submit(&EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30")).unwrap();
        let before = book.records().clone();

        book.store().fail_writes.set(true);
        assert!(book.submit(&EntryDraft::new("2025-03-06", Session::Am, "08:00", "12:30")).is_err());
        assert!(book.replace_at(0, &EntryDraft::new("2025-03-05", Session::Am, "09:00", "12:30")).is_err());
        assert!(book.remove_at(0).is_err());
        let mut session = book.begin_edit(0).unwrap();
        session.draft.time_out = "17:00".to_string();
        assert!(book.save_edit(session).is_err());
        assert!(book.replace_records(UserRecordSet::new()).is_err());

        assert_eq!(book.ledger().len(), 1);
        assert_eq!(book.total().to_string(), "4:30");
        assert_eq!(book.records(), &before);

        // A retry after the store recovers adds the entry once.
        book.store().fail_writes.set(false);
        book.submit(&EntryDraft::new("2025-03-06", Session::Am, "08:00", "12:30")).unwrap();
        assert_eq!(book.ledger().len(), 2);
        assert_eq!(book.total().to_string(), "9:00");
        assert_eq!(book.store().read("jdoe").unwrap().unwrap().entry_count(), 2);
    }

    #[test]
    fn test_records_without_id_load_with_fresh_ids() {
        let json = r#"{"2-2025":[
            {"date":"2025-03-05","session":"AM","timeIn":"08:00","timeOut":"12:30","duration":"4:30"},
            {"date":"2025-03-05","session":"PM","timeIn":"13:00","timeOut":"17:00","duration":"4:00"}
        ]}"#;
        let records: UserRecordSet = serde_json::from_str(json).unwrap();

        let entries = records.entries(MonthKey::new(2, 2025).unwrap());
        assert_eq!(entries.len(), 2);
        assert_ne!(entries[0].id(), entries[1].id());
        assert_eq!(records.ledger(MonthKey::new(2, 2025).unwrap()).total().to_string(), "8:30");
    }
}
