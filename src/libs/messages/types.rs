#[derive(Debug, Clone)]
pub enum Message {
    // === ENTRY MESSAGES ===
    EntryAdded {
        duration: String,
        total: String,
    },
    EntryUpdated {
        position: usize,
        total: String,
    },
    EntryRemoved {
        position: usize,
        total: String,
    },
    EntryPositionNotFound(usize),
    EntryRejected(String), // reason
    EditNoChanges,

    // === LEDGER MESSAGES ===
    LedgerHeader(String), // month label
    NoEntriesForMonth(String),
    MonthTotal {
        month: String,
        total: String,
    },

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleUser,
    ConfigModuleSync,
    PromptSelectModules,
    PromptUserId,
    PromptEmployeeName,
    PromptSyncBackend,
    PromptSyncApiUrl,
    PromptSyncAuthToken,
    PromptSyncInterval,
    UserNotConfigured,

    // === SYNC MESSAGES ===
    SyncPushed(String),          // backend name
    SyncBackedUpLocally(String), // reason
    SyncPushFailed(String),      // reason
    SyncPulled(usize),           // entry count
    SyncNoCloudData,
    SyncNothingToPush,
    SyncUsingDefaultBackend,
    AutoSyncStarted(u64), // interval in seconds
    AutoSyncStopped,
    AutoSyncReceivedCtrlC,
    AutoSyncCtrlCListenFailed(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String), // path
    ExportNothingToExport(String),
}
