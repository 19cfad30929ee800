//! Display implementation for timeclaim messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! between commands and can be changed in one place.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === ENTRY MESSAGES ===
            Message::EntryAdded { duration, total } => format!("Entry added ({}). Month total: {}", duration, total),
            Message::EntryUpdated { position, total } => format!("Entry #{} updated. Month total: {}", position, total),
            Message::EntryRemoved { position, total } => format!("Entry #{} removed. Month total: {}", position, total),
            Message::EntryPositionNotFound(position) => {
                format!("There is no entry #{}. List the month again, positions change after removals.", position)
            }
            Message::EntryRejected(reason) => format!("Entry not saved: {}", reason),
            Message::EditNoChanges => "Nothing to change. Pass at least one of --date, --session, --time-in, --time-out.".to_string(),

            // === LEDGER MESSAGES ===
            Message::LedgerHeader(month) => format!("Time claim for {}", month),
            Message::NoEntriesForMonth(month) => format!("No entries for {}.", month),
            Message::MonthTotal { month, total } => format!("Total for {}: {}", month, total),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleUser => "Employee settings".to_string(),
            Message::ConfigModuleSync => "Sync settings".to_string(),
            Message::PromptSelectModules => "Select the settings to configure".to_string(),
            Message::PromptUserId => "User ID".to_string(),
            Message::PromptEmployeeName => "Employee name (printed on the claim form)".to_string(),
            Message::PromptSyncBackend => "Sync backend".to_string(),
            Message::PromptSyncApiUrl => "Remote store URL".to_string(),
            Message::PromptSyncAuthToken => "Remote store token".to_string(),
            Message::PromptSyncInterval => "Auto-sync interval (seconds)".to_string(),
            Message::UserNotConfigured => "No user configured. Run `timeclaim init` first.".to_string(),

            // === SYNC MESSAGES ===
            Message::SyncPushed(backend) => format!("Records pushed to {}", backend),
            Message::SyncBackedUpLocally(reason) => format!("Cloud sync failed ({}). Records saved to the local backup.", reason),
            Message::SyncPushFailed(reason) => format!("Sync and local backup both failed: {}", reason),
            Message::SyncPulled(count) => format!("Pulled {} entries from the cloud copy", count),
            Message::SyncNoCloudData => "No cloud data found.".to_string(),
            Message::SyncNothingToPush => "No local records to push yet.".to_string(),
            Message::SyncUsingDefaultBackend => "No sync settings found, using the local mirror.".to_string(),
            Message::AutoSyncStarted(secs) => format!("Auto-sync running every {} seconds. Press Ctrl-C to stop.", secs),
            Message::AutoSyncStopped => "Auto-sync stopped.".to_string(),
            Message::AutoSyncReceivedCtrlC => "Received Ctrl-C, stopping auto-sync...".to_string(),
            Message::AutoSyncCtrlCListenFailed(error) => format!("Failed to listen for Ctrl-C: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Claim form exported to: {}", path),
            Message::ExportNothingToExport(month) => format!("No entries for {}, exporting an empty claim form.", month),
        };
        write!(f, "{}", text)
    }
}
