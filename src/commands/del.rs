use super::{open_book, position_to_index, MonthArg};
use crate::{
    libs::{config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DelArgs {
    /// Position as shown by `list`, starting at 1
    position: usize,

    #[command(flatten)]
    month: MonthArg,
}

pub fn cmd(args: DelArgs) -> Result<()> {
    let mut book = open_book(&Config::read()?, args.month.key()?)?;
    let index = position_to_index(args.position, book.ledger().len())?;
    book.remove_at(index)?;

    msg_success!(Message::EntryRemoved {
        position: args.position,
        total: book.total().to_string(),
    });
    Ok(())
}
