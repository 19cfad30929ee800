use super::{open_book, MonthArg};
use crate::{
    libs::{config::Config, messages::Message},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SumArgs {
    #[command(flatten)]
    month: MonthArg,
}

pub fn cmd(args: SumArgs) -> Result<()> {
    let book = open_book(&Config::read()?, args.month.key()?)?;
    msg_print!(Message::MonthTotal {
        month: book.month().label(),
        total: book.total().to_string(),
    });
    Ok(())
}
