use super::{normalize_time, open_book, position_to_index, MonthArg};
use crate::{
    libs::{config::Config, entry::Session, messages::Message},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Position as shown by `list`, starting at 1
    position: usize,

    #[arg(short, long)]
    date: Option<String>,

    #[arg(short, long, value_enum)]
    session: Option<Session>,

    #[arg(short = 'i', long)]
    time_in: Option<String>,

    #[arg(short = 'o', long)]
    time_out: Option<String>,

    #[command(flatten)]
    month: MonthArg,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut book = open_book(&Config::read()?, args.month.key()?)?;
    let index = position_to_index(args.position, book.ledger().len())?;
    let mut session = book.begin_edit(index)?;

    if args.date.is_none() && args.session.is_none() && args.time_in.is_none() && args.time_out.is_none() {
        msg_info!(Message::EditNoChanges);
        return Ok(());
    }

    if let Some(date) = args.date {
        session.draft.date = date;
    }
    if let Some(kind) = args.session {
        session.draft.session = kind;
    }
    if let Some(time_in) = args.time_in {
        session.draft.time_in = normalize_time(&time_in)?;
    }
    if let Some(time_out) = args.time_out {
        session.draft.time_out = normalize_time(&time_out)?;
    }

    let total = book.save_edit(session)?;
    msg_success!(Message::EntryUpdated {
        position: args.position,
        total: total.to_string(),
    });
    Ok(())
}
