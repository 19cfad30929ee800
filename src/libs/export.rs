//! Claim form export.
//!
//! A [`ClaimDocument`] is the content of one month's claim form: employee
//! name, month, one [`ClaimRow`] per entry and the month total. The
//! [`Exporter`] writes it as CSV, JSON or an Excel workbook.
//!
//! ## File naming
//!
//! Without an explicit output path the file is named
//! `timeclaim_<month-key>_<YYYYmmdd_HHMMSS>.<ext>` in the working directory,
//! e.g. `timeclaim_2-2025_20250305_171500.xlsx`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use timeclaim::libs::export::{ClaimDocument, ExportFormat, Exporter};
//! use timeclaim::libs::ledger::{MonthKey, MonthLedger};
//!
//! let ledger = MonthLedger::new(MonthKey::new(2, 2025)?);
//! let document = ClaimDocument::from_ledger("Jane Doe", &ledger);
//! let path = Exporter::new(ExportFormat::Csv, None, ledger.key()).export(&document)?;
//! println!("written to {}", path.display());
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::formatter::ClaimRow;
use super::ledger::{MonthKey, MonthLedger};
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;
use tracing::debug;

const HEADERS: [&str; 5] = ["Date", "Session", "Time In", "Time Out", "Duration"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
    /// `.xlsx` workbook with a bold header and total row.
    Excel,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimDocument {
    pub employee_name: String,
    /// Month key, e.g. `2-2025`.
    pub month: String,
    /// Human readable month, e.g. `March 2025`.
    pub month_label: String,
    pub rows: Vec<ClaimRow>,
    pub total: String,
}

impl ClaimDocument {
    pub fn from_ledger(employee_name: &str, ledger: &MonthLedger) -> Self {
        let key = ledger.key();
        ClaimDocument {
            employee_name: employee_name.to_string(),
            month: key.to_string(),
            month_label: key.label(),
            rows: ledger.entries().iter().map(ClaimRow::from_entry).collect(),
            total: ledger.total().to_string(),
        }
    }
}

pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: Option<PathBuf>, month: MonthKey) -> Self {
        let output_path = output_path.unwrap_or_else(|| PathBuf::from(Self::default_file_name(format, month)));
        Self { format, output_path }
    }

    pub fn default_file_name(format: ExportFormat, month: MonthKey) -> String {
        format!("timeclaim_{}_{}.{}", month, Local::now().format("%Y%m%d_%H%M%S"), format.extension())
    }

    pub fn output_path(&self) -> &PathBuf {
        &self.output_path
    }

    /// Writes the document and returns the path written to.
    pub fn export(&self, document: &ClaimDocument) -> Result<PathBuf> {
        match self.format {
            ExportFormat::Csv => self.export_csv(document)?,
            ExportFormat::Json => self.export_json(document)?,
            ExportFormat::Excel => self.export_excel(document)?,
        }
        debug!(path = %self.output_path.display(), rows = document.rows.len(), "claim exported");
        Ok(self.output_path.clone())
    }

    /// Header row, one row per entry, then a `Total` row with the total in
    /// the duration column.
    fn export_csv(&self, document: &ClaimDocument) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(HEADERS)?;
        for row in &document.rows {
            wtr.write_record([&row.date, &row.session, &row.time_in, &row.time_out, &row.duration])?;
        }
        wtr.write_record(["Total", "", "", "", document.total.as_str()])?;
        wtr.flush()?;
        Ok(())
    }

    fn export_json(&self, document: &ClaimDocument) -> Result<()> {
        let json = serde_json::to_string_pretty(document)?;
        File::create(&self.output_path)?.write_all(json.as_bytes())?;
        Ok(())
    }

    fn export_excel(&self, document: &ClaimDocument) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let bold = Format::new().set_bold();
        let header_format = Format::new().set_bold().set_background_color(rust_xlsxwriter::Color::Gray);

        worksheet.write_string_with_format(0, 0, "Employee", &bold)?;
        worksheet.write_string(0, 1, &document.employee_name)?;
        worksheet.write_string_with_format(1, 0, "Month", &bold)?;
        worksheet.write_string(1, 1, &document.month_label)?;

        let header_row = 3;
        for (col, header) in HEADERS.iter().enumerate() {
            worksheet.write_string_with_format(header_row, col as u16, *header, &header_format)?;
        }

        let mut row = header_row + 1;
        for claim in &document.rows {
            worksheet.write_string(row, 0, &claim.date)?;
            worksheet.write_string(row, 1, &claim.session)?;
            worksheet.write_string(row, 2, &claim.time_in)?;
            worksheet.write_string(row, 3, &claim.time_out)?;
            worksheet.write_string(row, 4, &claim.duration)?;
            row += 1;
        }
        worksheet.write_string_with_format(row, 0, "Total", &bold)?;
        worksheet.write_string_with_format(row, 4, &document.total, &bold)?;

        worksheet.autofit();
        workbook.save(&self.output_path)?;
        Ok(())
    }
}
