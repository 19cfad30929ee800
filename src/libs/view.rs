use super::formatter::ClaimRow;
use super::ledger::MonthLedger;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Builds the ledger table: positions are 1-based, the last row carries the total.
    pub fn ledger_table(ledger: &MonthLedger) -> Table {
        let mut table = Table::new();

        table.add_row(row!["#", "DATE", "SESSION", "TIME IN", "TIME OUT", "DURATION"]);
        for (index, entry) in ledger.entries().iter().enumerate() {
            let claim = ClaimRow::from_entry(entry);
            table.add_row(row![index + 1, claim.date, claim.session, claim.time_in, claim.time_out, claim.duration]);
        }
        table.add_row(row!["", "TOTAL", "", "", "", ledger.total()]);

        table
    }

    pub fn ledger(ledger: &MonthLedger) {
        Self::ledger_table(ledger).printstd();
    }
}
