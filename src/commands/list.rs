use super::{open_book, MonthArg};
use crate::{
    libs::{config::Config, messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[command(flatten)]
    month: MonthArg,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let book = open_book(&Config::read()?, args.month.key()?)?;
    let label = book.month().label();

    if book.ledger().is_empty() {
        msg_info!(Message::NoEntriesForMonth(label));
        return Ok(());
    }

    msg_print!(Message::LedgerHeader(label), true);
    View::ledger(book.ledger());
    Ok(())
}
