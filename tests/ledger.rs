#[cfg(test)]
mod tests {
    use timeclaim::libs::entry::{EntryDraft, Session, TimeEntry};
    use timeclaim::libs::error::ClaimError;
    use timeclaim::libs::ledger::{MonthKey, MonthLedger};

    fn entry(date: &str, time_in: &str, time_out: &str) -> TimeEntry {
        EntryDraft::new(date, Session::Am, time_in, time_out).validate().unwrap()
    }

    fn march() -> MonthLedger {
        MonthLedger::new(MonthKey::new(2, 2025).unwrap())
    }

    #[test]
    fn test_total_of_appended_entries() {
        let mut ledger = march();
        assert_eq!(ledger.total().to_string(), "0:00");
        assert_eq!(ledger.append(entry("2025-03-03", "08:00", "09:30")).to_string(), "1:30");
        assert_eq!(ledger.append(entry("2025-03-04", "13:00", "15:45")).to_string(), "4:15");
        assert_eq!(ledger.total().to_string(), "4:15");
    }

    #[test]
    fn test_remove_reindexes_later_entries() {
        let mut ledger = march();
        let a = entry("2025-03-03", "08:00", "09:00");
        let b = entry("2025-03-04", "08:00", "10:00");
        let c = entry("2025-03-05", "08:00", "11:00");
        for e in [a.clone(), b.clone(), c.clone()] {
            ledger.append(e);
        }

        let removed = ledger.remove_at(0).unwrap();
        assert_eq!(removed.id(), a.id());
        assert_eq!(ledger.len(), 2);
        assert_eq!(ledger.get(0).unwrap().id(), b.id());
        assert_eq!(ledger.get(1).unwrap().id(), c.id());
        assert_eq!(ledger.total().to_string(), "5:00");
    }

    #[test]
    fn test_replace_at_recomputes_total() {
        let mut ledger = march();
        ledger.append(entry("2025-03-03", "08:00", "09:00"));
        ledger.append(entry("2025-03-04", "08:00", "10:00"));

        let total = ledger.replace_at(1, entry("2025-03-04", "08:00", "12:00")).unwrap();
        assert_eq!(total.to_string(), "5:00");
    }

    #[test]
    fn test_out_of_range_positions() {
        let mut ledger = march();
        ledger.append(entry("2025-03-03", "08:00", "09:00"));

        assert!(matches!(ledger.remove_at(1), Err(ClaimError::IndexOutOfRange { index: 1, len: 1 })));
        assert!(matches!(
            ledger.replace_at(5, entry("2025-03-03", "08:00", "09:00")),
            Err(ClaimError::IndexOutOfRange { index: 5, len: 1 })
        ));
        assert!(matches!(ledger.begin_edit(3), Err(ClaimError::IndexOutOfRange { .. })));
        assert_eq!(ledger.len(), 1);
    }

    #[test]
    fn test_edit_keeps_identity() {
        let mut ledger = march();
        let original = entry("2025-03-03", "08:00", "09:00");
        ledger.append(original.clone());

        let mut session = ledger.begin_edit(0).unwrap();
        assert_eq!(session.entry_id(), original.id());
        assert_eq!(session.draft.time_out, "09:00");
        session.draft.time_out = "11:30".to_string();

        assert_eq!(ledger.commit_edit(session).unwrap().to_string(), "3:30");
        assert_eq!(ledger.get(0).unwrap().id(), original.id());
        assert_eq!(ledger.get(0).unwrap().time_out().to_string(), "11:30");
    }

    #[test]
    fn test_edit_follows_entry_after_earlier_removal() {
        let mut ledger = march();
        ledger.append(entry("2025-03-03", "08:00", "09:00"));
        let target = entry("2025-03-04", "08:00", "10:00");
        ledger.append(target.clone());

        let mut session = ledger.begin_edit(1).unwrap();
        ledger.remove_at(0).unwrap();
        session.draft.time_in = "07:00".to_string();

        ledger.commit_edit(session).unwrap();
        assert_eq!(ledger.len(), 1);
        assert_eq!(ledger.get(0).unwrap().id(), target.id());
        assert_eq!(ledger.total().to_string(), "3:00");
    }

    #[test]
    fn test_edit_of_removed_entry_fails() {
        let mut ledger = march();
        let target = entry("2025-03-03", "08:00", "09:00");
        ledger.append(target.clone());
        ledger.append(entry("2025-03-04", "08:00", "10:00"));

        let session = ledger.begin_edit(0).unwrap();
        ledger.remove(target.id()).unwrap();

        assert!(matches!(ledger.commit_edit(session), Err(ClaimError::EntryNotFound(id)) if id == target.id()));
        assert_eq!(ledger.total().to_string(), "2:00");
    }

    #[test]
    fn test_invalid_edit_leaves_ledger_untouched() {
        let mut ledger = march();
        ledger.append(entry("2025-03-03", "08:00", "09:00"));

        let mut session = ledger.begin_edit(0).unwrap();
        session.draft.date = String::new();

        assert!(matches!(ledger.commit_edit(session), Err(ClaimError::Validation(_))));
        assert_eq!(ledger.get(0).unwrap().time_out().to_string(), "09:00");
    }

    #[test]
    fn test_month_key_text_and_order() {
        let key: MonthKey = "3-2025".parse().unwrap();
        assert_eq!(key.month0(), 3);
        assert_eq!(key.year(), 2025);
        assert_eq!(key.to_string(), "3-2025");
        assert_eq!(key.label(), "April 2025");

        assert!("12-2025".parse::<MonthKey>().is_err());
        assert!("march".parse::<MonthKey>().is_err());
        assert!(MonthKey::new(11, 2024).unwrap() < MonthKey::new(0, 2025).unwrap());
    }

    #[test]
    fn test_month_key_rejects_non_canonical_text() {
        for text in ["03-2025", "3-+2025", "+3-2025", "3-02025", "3-", "-2025", "3 -2025", "0-"] {
            assert!(text.parse::<MonthKey>().is_err(), "{} should be rejected", text);
        }
        assert_eq!("0-2025".parse::<MonthKey>().unwrap(), MonthKey::new(0, 2025).unwrap());
        assert_eq!("11-2025".parse::<MonthKey>().unwrap(), MonthKey::new(11, 2025).unwrap());

        // Two spellings of one month would otherwise collapse into one key on load.
        let json = r#"{"3-2025":[],"03-2025":[]}"#;
        assert!(serde_json::from_str::<timeclaim::libs::record_set::UserRecordSet>(json).is_err());
    }
}
