use super::{normalize_time, open_book, MonthArg};
use crate::{
    libs::{
        config::Config,
        date::parse_canonical,
        entry::{EntryDraft, Session},
        ledger::MonthKey,
        messages::Message,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Work date, `YYYY-MM-DD`
    #[arg(short, long, default_value = "")]
    date: String,

    #[arg(short, long, value_enum)]
    session: Session,

    /// Start time, `HH:MM` or `H:MM AM`
    #[arg(short = 'i', long, default_value = "")]
    time_in: String,

    /// End time, `HH:MM` or `H:MM AM`
    #[arg(short = 'o', long, default_value = "")]
    time_out: String,

    #[command(flatten)]
    month: MonthArg,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let draft = EntryDraft {
        time_in: normalize_time(&args.time_in)?,
        time_out: normalize_time(&args.time_out)?,
        date: args.date,
        session: args.session,
    };

    // Without --month the entry goes to the month of its own date.
    let month = match (args.month.is_given(), parse_canonical(draft.date.trim())) {
        (false, Ok(date)) => MonthKey::from_date(date),
        _ => args.month.key()?,
    };

    let mut book = open_book(&Config::read()?, month)?;
    match book.submit(&draft) {
        Ok(entry) => {
            msg_success!(Message::EntryAdded {
                duration: entry.duration().to_string(),
                total: book.total().to_string(),
            });
            Ok(())
        }
        Err(err) => {
            msg_error!(Message::EntryRejected(err.to_string()));
            Err(err)
        }
    }
}
