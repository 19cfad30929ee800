use super::{configured_user, open_book};
use crate::{
    api::SyncReconciler,
    db::records::Records,
    libs::{
        config::Config,
        data_storage::DataStorage,
        ledger::MonthKey,
        messages::Message,
        record_set::RecordStore,
        sync::{PullOutcome, PushOutcome, Synchronizer},
    },
    msg_error, msg_info, msg_success, msg_warning,
};
use anyhow::Result;

/// Builds the synchronizer for the configured backend.
pub fn synchronizer(config: &Config) -> Result<Synchronizer> {
    if config.sync.is_none() {
        msg_info!(Message::SyncUsingDefaultBackend);
    }
    Synchronizer::from_config(&config.sync_or_default(), &DataStorage::new())
}

pub async fn push() -> Result<()> {
    let config = Config::read()?;
    let user = configured_user(&config)?;
    let records = match Records::new()?.read(&user.user_id)? {
        Some(records) => records,
        None => {
            msg_info!(Message::SyncNothingToPush);
            return Ok(());
        }
    };

    let synchronizer = synchronizer(&config)?;
    let outcome = synchronizer.push(&user.user_id, &records).await;
    report_push(outcome, &synchronizer.backend().name());
    Ok(())
}

/// Prints a push outcome as a status line.
pub fn report_push(outcome: PushOutcome, backend_name: &str) {
    match outcome {
        PushOutcome::Pushed => msg_success!(Message::SyncPushed(backend_name.to_string())),
        PushOutcome::BackedUpLocally(reason) => msg_warning!(Message::SyncBackedUpLocally(reason)),
        PushOutcome::Failed(reason) => msg_error!(Message::SyncPushFailed(reason)),
    }
}

pub async fn pull() -> Result<()> {
    let config = Config::read()?;
    let user = configured_user(&config)?;

    match synchronizer(&config)?.pull(&user.user_id).await {
        PullOutcome::Pulled(records) => {
            let count = records.entry_count();
            let mut book = open_book(&config, MonthKey::current())?;
            book.replace_records(records)?;
            msg_success!(Message::SyncPulled(count));
        }
        PullOutcome::NoCloudData => msg_info!(Message::SyncNoCloudData),
    }
    Ok(())
}
