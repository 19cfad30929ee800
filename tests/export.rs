#[cfg(test)]
mod tests {
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use timeclaim::libs::entry::{EntryDraft, Session};
    use timeclaim::libs::export::{ClaimDocument, ExportFormat, Exporter};
    use timeclaim::libs::ledger::{MonthKey, MonthLedger};
    use timeclaim::libs::view::View;

    struct ExportTestContext {
        temp_dir: TempDir,
        ledger: MonthLedger,
    }

    impl TestContext for ExportTestContext {
        fn setup() -> Self {
            let mut ledger = MonthLedger::new(MonthKey::new(2, 2025).unwrap());
            ledger.append(EntryDraft::new("2025-03-05", Session::Am, "08:00", "12:30").validate().unwrap());
            ledger.append(EntryDraft::new("2025-03-05", Session::Pm, "13:00", "17:15").validate().unwrap());
            ExportTestContext {
                temp_dir: tempfile::tempdir().unwrap(),
                ledger,
            }
        }
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_claim_document(ctx: &mut ExportTestContext) {
        let document = ClaimDocument::from_ledger("Jane Doe", &ctx.ledger);
        assert_eq!(document.employee_name, "Jane Doe");
        assert_eq!(document.month, "2-2025");
        assert_eq!(document.month_label, "March 2025");
        assert_eq!(document.rows.len(), 2);
        assert_eq!(document.rows[1].time_in, "1:00 PM");
        assert_eq!(document.rows[1].time_out, "5:15 PM");
        assert_eq!(document.total, "8:45");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_csv(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("claim.csv");
        let exporter = Exporter::new(ExportFormat::Csv, Some(output_path.clone()), ctx.ledger.key());
        let written = exporter.export(&ClaimDocument::from_ledger("Jane Doe", &ctx.ledger)).unwrap();
        assert_eq!(written, output_path);

        let content = std::fs::read_to_string(&output_path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines[0], "Date,Session,Time In,Time Out,Duration");
        assert_eq!(lines[1], "05/03/2025,AM,8:00 AM,12:30 PM,4:30");
        assert_eq!(lines[2], "05/03/2025,PM,1:00 PM,5:15 PM,4:15");
        assert_eq!(lines[3], "Total,,,,8:45");
        assert_eq!(lines.len(), 4);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_json(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("claim.json");
        let document = ClaimDocument::from_ledger("Jane Doe", &ctx.ledger);
        Exporter::new(ExportFormat::Json, Some(output_path.clone()), ctx.ledger.key())
            .export(&document)
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        let parsed: ClaimDocument = serde_json::from_str(&content).unwrap();
        assert_eq!(parsed, document);

        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["employeeName"], "Jane Doe");
        assert_eq!(value["total"], "8:45");
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_excel(ctx: &mut ExportTestContext) {
        let output_path = ctx.temp_dir.path().join("claim.xlsx");
        Exporter::new(ExportFormat::Excel, Some(output_path.clone()), ctx.ledger.key())
            .export(&ClaimDocument::from_ledger("Jane Doe", &ctx.ledger))
            .unwrap();

        assert!(output_path.exists());
        assert!(std::fs::metadata(&output_path).unwrap().len() > 0);
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_export_empty_month(ctx: &mut ExportTestContext) {
        let empty = MonthLedger::new(MonthKey::new(3, 2025).unwrap());
        let output_path = ctx.temp_dir.path().join("empty.csv");
        Exporter::new(ExportFormat::Csv, Some(output_path.clone()), empty.key())
            .export(&ClaimDocument::from_ledger("Jane Doe", &empty))
            .unwrap();

        let content = std::fs::read_to_string(&output_path).unwrap();
        assert_eq!(content.lines().last(), Some("Total,,,,0:00"));
    }

    #[test]
    fn test_default_file_name() {
        let name = Exporter::default_file_name(ExportFormat::Excel, MonthKey::new(2, 2025).unwrap());
        assert!(name.starts_with("timeclaim_2-2025_"));
        assert!(name.ends_with(".xlsx"));
        // timeclaim_2-2025_YYYYmmdd_HHMMSS.xlsx
        assert_eq!(name.len(), "timeclaim_2-2025_".len() + 15 + ".xlsx".len());
    }

    #[test_context(ExportTestContext)]
    #[test]
    fn test_ledger_table(ctx: &mut ExportTestContext) {
        let table = View::ledger_table(&ctx.ledger);
        // Header, two entries, total.
        assert_eq!(table.len(), 4);
        let rendered = table.to_string();
        assert!(rendered.contains("12:30 PM"));
        assert!(rendered.contains("8:45"));
    }
}
