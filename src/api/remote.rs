use super::SyncReconciler;
use crate::libs::config::ConfigModule;
use crate::libs::error::SyncError;
use crate::libs::messages::Message;
use crate::libs::record_set::UserRecordSet;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input};
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

const RECORDS_URL: &str = "records";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RemoteConfig {
    /// Base URL; records live under `{api_url}/records/{user_id}`.
    pub api_url: String,
    /// Sent as a bearer token. Empty disables the header.
    pub auth_token: String,
}

impl RemoteConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "remote".to_string(),
            name: "Remote store".to_string(),
        }
    }

    pub fn init(config: &Option<RemoteConfig>) -> Result<Self> {
        let config = config.clone().unwrap_or(Self {
            api_url: "".to_string(),
            auth_token: "".to_string(),
        });
        msg_print!(Self::module().name);
        Ok(Self {
            api_url: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSyncApiUrl.to_string())
                .default(config.api_url)
                .interact_text()?,
            auth_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptSyncAuthToken.to_string())
                .default(config.auth_token)
                .allow_empty(true)
                .interact_text()?,
        })
    }
}

/// Record sets stored as JSON documents behind an HTTP API.
///
/// `PUT {api_url}/records/{user_id}` replaces the document, `GET` returns
/// it, `404` means the store has nothing for the user.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    client: Client,
    config: RemoteConfig,
}

impl RemoteStore {
    pub fn new(config: &RemoteConfig) -> Self {
        let client = Client::builder().timeout(REQUEST_TIMEOUT).build().unwrap_or_else(|_| Client::new());
        Self {
            client,
            config: config.clone(),
        }
    }

    fn url(&self, user_id: &str) -> String {
        format!("{}/{}/{}", self.config.api_url.trim_end_matches('/'), RECORDS_URL, user_id)
    }

    fn authorize(&self, request: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
        if self.config.auth_token.is_empty() {
            request
        } else {
            request.bearer_auth(&self.config.auth_token)
        }
    }
}

fn check_status(status: StatusCode) -> Result<(), SyncError> {
    match status {
        s if s.is_success() => Ok(()),
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Err(SyncError::Unauthorized),
        s => Err(SyncError::Status(s.as_u16())),
    }
}

impl SyncReconciler for RemoteStore {
    fn name(&self) -> String {
        format!("remote store ({})", self.config.api_url)
    }

    async fn push(&self, user_id: &str, records: &UserRecordSet) -> Result<(), SyncError> {
        let res = self.authorize(self.client.put(self.url(user_id))).json(records).send().await?;
        debug!(user_id, status = %res.status(), "remote push");
        check_status(res.status())
    }

    async fn pull(&self, user_id: &str) -> Result<Option<UserRecordSet>, SyncError> {
        let res = self.authorize(self.client.get(self.url(user_id))).send().await?;
        debug!(user_id, status = %res.status(), "remote pull");
        if res.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        check_status(res.status())?;

        let body = res.text().await?;
        if body.trim().is_empty() || body.trim() == "null" {
            return Ok(None);
        }
        Ok(Some(serde_json::from_str(&body)?))
    }
}
