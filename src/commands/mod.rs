//! Command-line interface.
//!
//! Each subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. Commands that touch claims open a [`ClaimBook`] over the
//! SQLite record store for the configured user.

pub mod add;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod sum;
pub mod sync;
pub mod watch;

use crate::{
    db::records::Records,
    libs::{
        claim::ClaimBook,
        config::{Config, UserConfig},
        ledger::MonthKey,
        messages::Message,
        time::ClockTime,
    },
    msg_bail_anyhow, msg_error_anyhow,
};
use anyhow::Result;
use clap::{Args, Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a time entry", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit the entry at a position", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Delete the entry at a position", arg_required_else_help = true)]
    Del(del::DelArgs),
    #[command(about = "Show the month's entries")]
    List(list::ListArgs),
    #[command(about = "Show the month's total")]
    Sum(sum::SumArgs),
    #[command(about = "Export the month's claim form")]
    Export(export::ExportArgs),
    #[command(about = "Push records to the sync backend")]
    Push,
    #[command(about = "Pull records from the sync backend, replacing local records")]
    Pull,
    #[command(about = "Auto-sync until interrupted")]
    Watch,
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Del(args) => del::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Sum(args) => sum::cmd(args),
            Commands::Export(args) => export::cmd(args),
            Commands::Push => sync::push().await,
            Commands::Pull => sync::pull().await,
            Commands::Watch => watch::cmd().await,
        }
    }
}

/// `--month` option shared by the ledger commands.
#[derive(Debug, Args)]
pub struct MonthArg {
    /// Month key `<month0>-<year>`, e.g. `2-2025` for March 2025. Defaults to the current month.
    #[arg(short, long)]
    month: Option<String>,
}

impl MonthArg {
    pub fn is_given(&self) -> bool {
        self.month.is_some()
    }

    pub fn key(&self) -> Result<MonthKey> {
        match &self.month {
            Some(month) => Ok(month.parse()?),
            None => Ok(MonthKey::current()),
        }
    }
}

/// The configured user, or an error telling the user to run `init`.
pub fn configured_user(config: &Config) -> Result<UserConfig> {
    match &config.user {
        Some(user) => Ok(user.clone()),
        None => msg_bail_anyhow!(Message::UserNotConfigured),
    }
}

/// Opens the configured user's claim book at `month`.
pub fn open_book(config: &Config, month: MonthKey) -> Result<ClaimBook<Records>> {
    let user = configured_user(config)?;
    ClaimBook::open(Records::new()?, &user.user_id, month)
}

/// Converts a 1-based displayed position into a ledger index.
pub fn position_to_index(position: usize, len: usize) -> Result<usize> {
    if position == 0 || position > len {
        return Err(msg_error_anyhow!(Message::EntryPositionNotFound(position)));
    }
    Ok(position - 1)
}

/// Accepts `HH:MM` or `H:MM AM` and returns the stored `HH:MM` form. Empty
/// input stays empty so validation can report it.
pub fn normalize_time(input: &str) -> Result<String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(String::new());
    }
    Ok(ClockTime::parse_flexible(input)?.to_string())
}
