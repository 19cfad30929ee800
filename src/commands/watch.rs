use super::{
    configured_user,
    sync::{report_push, synchronizer},
};
use crate::{
    api::SyncReconciler,
    db::records::Records,
    libs::{config::Config, messages::Message, sync::AutoSync},
    msg_error, msg_info,
};
use anyhow::Result;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::Duration;

/// Runs auto-sync for the configured user until Ctrl-C, printing the outcome
/// of every run.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let user = configured_user(&config)?;
    let interval_secs = config.sync_or_default().interval_secs.max(1);

    let store = Arc::new(Mutex::new(Records::new()?));
    let synchronizer = Arc::new(synchronizer(&config)?);
    let backend_name = synchronizer.backend().name();

    let mut auto_sync = AutoSync::new();
    let mut outcomes = auto_sync.outcomes();
    auto_sync
        .start(store, synchronizer, user.user_id, Duration::from_secs(interval_secs))
        .await;
    msg_info!(Message::AutoSyncStarted(interval_secs));

    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);
    loop {
        tokio::select! {
            result = &mut ctrl_c => {
                match result {
                    Ok(()) => msg_info!(Message::AutoSyncReceivedCtrlC),
                    Err(err) => msg_error!(Message::AutoSyncCtrlCListenFailed(err.to_string())),
                }
                break;
            }
            Some(outcome) = outcomes.recv() => report_push(outcome, &backend_name),
        }
    }

    auto_sync.stop().await;
    msg_info!(Message::AutoSyncStopped);
    Ok(())
}
