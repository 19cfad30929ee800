use super::{configured_user, open_book, MonthArg};
use crate::{
    libs::{
        config::Config,
        export::{ExportFormat, Exporter},
        messages::Message,
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(short, long, value_enum, default_value = "csv")]
    format: ExportFormat,

    #[arg(short, long)]
    output: Option<PathBuf>,

    #[command(flatten)]
    month: MonthArg,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let config = Config::read()?;
    let user = configured_user(&config)?;
    let book = open_book(&config, args.month.key()?)?;

    if book.ledger().is_empty() {
        msg_warning!(Message::ExportNothingToExport(book.month().label()));
    }

    let path = Exporter::new(args.format, args.output, book.month()).export(&book.document(&user.employee_name))?;
    msg_success!(Message::ExportCompleted(path.display().to_string()));
    Ok(())
}
