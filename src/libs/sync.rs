//! Sync policy: backend selection, fallbacks and the auto-sync timer.
//!
//! Sync never blocks or fails a claim action. A [`Synchronizer`] wraps the
//! configured backend and turns every backend error into an outcome:
//!
//! - a failed push writes the local backup copy instead
//!   ([`PushOutcome::BackedUpLocally`]);
//! - a failed pull reads as "no cloud data" ([`PullOutcome::NoCloudData`]).
//!
//! Nothing here retries. Pulled data replaces the local record set whole;
//! there is no locking between a pull and a concurrent local edit, so the
//! last writer wins.
//!
//! [`AutoSync`] pushes the stored record set on a fixed interval in a
//! background tokio task. Starting a running timer stops the old run first,
//! so one `AutoSync` never has two runs alive. Each run's [`PushOutcome`] is
//! sent to the receiver returned by [`AutoSync::outcomes`], so failures can
//! be shown to the user.

use crate::api::{LocalMirror, RemoteStore, SyncReconciler};
use crate::libs::config::{SyncBackendKind, SyncConfig};
use crate::libs::data_storage::DataStorage;
use crate::libs::error::SyncError;
use crate::libs::record_set::{RecordStore, UserRecordSet};
use anyhow::{anyhow, Result};
use parking_lot::Mutex;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info, warn};

pub const MIRROR_DIR: &str = "mirror";
pub const BACKUP_DIR: &str = "backup";

/// The configured backend.
#[derive(Debug, Clone)]
pub enum SyncBackend {
    Mirror(LocalMirror),
    Remote(RemoteStore),
}

impl SyncBackend {
    pub fn from_config(config: &SyncConfig, storage: &DataStorage) -> Result<Self> {
        match config.backend {
            SyncBackendKind::Mirror => Ok(SyncBackend::Mirror(LocalMirror::new(storage.get_dir(MIRROR_DIR)?))),
            SyncBackendKind::Remote => {
                let remote = config
                    .remote
                    .as_ref()
                    .ok_or_else(|| anyhow!("sync backend 'remote' selected but no remote store is configured"))?;
                Ok(SyncBackend::Remote(RemoteStore::new(remote)))
            }
        }
    }
}

impl SyncReconciler for SyncBackend {
    fn name(&self) -> String {
        match self {
            SyncBackend::Mirror(mirror) => mirror.name(),
            SyncBackend::Remote(remote) => remote.name(),
        }
    }

    async fn push(&self, user_id: &str, records: &UserRecordSet) -> Result<(), SyncError> {
        match self {
            SyncBackend::Mirror(mirror) => mirror.push(user_id, records).await,
            SyncBackend::Remote(remote) => remote.push(user_id, records).await,
        }
    }

    async fn pull(&self, user_id: &str) -> Result<Option<UserRecordSet>, SyncError> {
        match self {
            SyncBackend::Mirror(mirror) => mirror.pull(user_id).await,
            SyncBackend::Remote(remote) => remote.pull(user_id).await,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PushOutcome {
    Pushed,
    /// The backend failed; the local backup holds the records. Carries the reason.
    BackedUpLocally(String),
    /// Backend and backup both failed.
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PullOutcome {
    Pulled(UserRecordSet),
    NoCloudData,
}

/// The configured backend plus the local backup used when it fails.
#[derive(Debug, Clone)]
pub struct Synchronizer<B = SyncBackend> {
    backend: B,
    backup: LocalMirror,
}

impl Synchronizer<SyncBackend> {
    pub fn from_config(config: &SyncConfig, storage: &DataStorage) -> Result<Self> {
        let backend = SyncBackend::from_config(config, storage)?;
        Ok(Self::new(backend, LocalMirror::new(storage.get_dir(BACKUP_DIR)?)))
    }
}

impl<B: SyncReconciler> Synchronizer<B> {
    pub fn new(backend: B, backup: LocalMirror) -> Self {
        Self { backend, backup }
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn backup(&self) -> &LocalMirror {
        &self.backup
    }

    pub async fn push(&self, user_id: &str, records: &UserRecordSet) -> PushOutcome {
        match self.backend.push(user_id, records).await {
            Ok(()) => {
                info!(user_id, backend = %self.backend.name(), "records pushed");
                PushOutcome::Pushed
            }
            Err(err) => {
                warn!(user_id, backend = %self.backend.name(), error = %err, "push failed, writing local backup");
                match self.backup.push(user_id, records).await {
                    Ok(()) => PushOutcome::BackedUpLocally(err.to_string()),
                    Err(backup_err) => PushOutcome::Failed(format!("{}; backup: {}", err, backup_err)),
                }
            }
        }
    }

    pub async fn pull(&self, user_id: &str) -> PullOutcome {
        match self.backend.pull(user_id).await {
            Ok(Some(records)) => {
                info!(user_id, backend = %self.backend.name(), entries = records.entry_count(), "records pulled");
                PullOutcome::Pulled(records)
            }
            Ok(None) => PullOutcome::NoCloudData,
            Err(err) => {
                warn!(user_id, backend = %self.backend.name(), error = %err, "pull failed");
                PullOutcome::NoCloudData
            }
        }
    }
}

struct Running {
    handle: JoinHandle<()>,
    shutdown: oneshot::Sender<()>,
}

/// Interval-driven background push of one user's stored records.
#[derive(Default)]
pub struct AutoSync {
    running: Option<Running>,
    runs: Arc<AtomicU64>,
    outcomes: Option<mpsc::UnboundedSender<PushOutcome>>,
}

impl AutoSync {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running.as_ref().is_some_and(|running| !running.handle.is_finished())
    }

    /// Number of completed sync runs since this timer was created.
    pub fn runs(&self) -> u64 {
        self.runs.load(Ordering::SeqCst)
    }

    /// Receiver for the outcome of every later run. Takes effect on the
    /// next [`AutoSync::start`]; a second call replaces the first receiver.
    pub fn outcomes(&mut self) -> mpsc::UnboundedReceiver<PushOutcome> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.outcomes = Some(tx);
        rx
    }

    /// Starts pushing every `every`, the first run immediately. A run that
    /// is already active is stopped first.
    pub async fn start<S>(&mut self, store: Arc<Mutex<S>>, synchronizer: Arc<Synchronizer>, user_id: String, every: Duration)
    where
        S: RecordStore + Send + 'static,
    {
        self.stop().await;

        let (shutdown, mut shutdown_rx) = oneshot::channel();
        let runs = self.runs.clone();
        let outcomes = self.outcomes.clone();
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(every);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    _ = ticker.tick() => {
                        let outcome = sync_once(&store, &synchronizer, &user_id).await;
                        runs.fetch_add(1, Ordering::SeqCst);
                        if let (Some(outcome), Some(tx)) = (outcome, &outcomes) {
                            let _ = tx.send(outcome);
                        }
                    }
                }
            }
            debug!(user_id = %user_id, "auto-sync loop ended");
        });

        info!(interval_secs = every.as_secs(), "auto-sync started");
        self.running = Some(Running { handle, shutdown });
    }

    /// Signals the running task and waits for it to finish.
    pub async fn stop(&mut self) {
        if let Some(running) = self.running.take() {
            let _ = running.shutdown.send(());
            if let Err(err) = running.handle.await {
                warn!(error = %err, "auto-sync task ended abnormally");
            }
            info!("auto-sync stopped");
        }
    }
}

/// One auto-sync run: snapshot the stored set, then push it.
async fn sync_once<S: RecordStore>(store: &Mutex<S>, synchronizer: &Synchronizer, user_id: &str) -> Option<PushOutcome> {
    let snapshot = store.lock().read(user_id);
    match snapshot {
        Ok(Some(records)) => Some(synchronizer.push(user_id, &records).await),
        Ok(None) => {
            debug!(user_id, "nothing stored yet, skipping auto-sync run");
            None
        }
        Err(err) => {
            warn!(user_id, error = %err, "could not read records for auto-sync");
            None
        }
    }
}
