//! # Client Module
//!
//! HTTP client for the zone settings API.
//!
//! ```text
//! ┌─────────────────────┐          HTTPS          ┌─────────────────────┐
//! │   seclevel          │ ◄───────────────────►   │   Zone settings API │
//! │                     │                         │                     │
//! │  ┌───────────────┐  │  GET   /zones/{zone}/   │                     │
//! │  │ LevelGate     │  │        settings/        │                     │
//! │  │               │  │        security_level   │                     │
//! │  └───────────────┘  │  PATCH (same path)      │                     │
//! └─────────────────────┘                         └─────────────────────┘
//! ```
//!
//! Every response is wrapped in an envelope:
//! `{"success": bool, "errors": [...], "messages": [...], "result": {...}}`.

use crate::config::Config;
use crate::store::{SettingStore, StoreError};
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use seclevel_core::SETTING_ID;
use serde::{Deserialize, Serialize};
use std::time::Duration;

// =============================================================================
// WIRE TYPES
// =============================================================================

/// Error or informational message inside a response envelope.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiMessage {
    #[serde(default)]
    pub code: i64,
    pub message: String,
}

/// Response envelope shared by all endpoints.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiEnvelope<T> {
    pub success: bool,
    #[serde(default)]
    pub errors: Vec<ApiMessage>,
    #[serde(default)]
    pub messages: Vec<ApiMessage>,
    pub result: Option<T>,
}

impl<T> ApiEnvelope<T> {
    fn error_summary(&self) -> String {
        self.errors
            .iter()
            .map(|e| format!("{} ({})", e.message, e.code))
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// A single zone setting record.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ZoneSetting {
    pub id: String,
    pub value: Option<String>,
    #[serde(default)]
    pub editable: Option<bool>,
    #[serde(default)]
    pub modified_on: Option<String>,
}

/// PATCH body for a setting update.
#[derive(Debug, Clone, Serialize)]
struct SettingUpdate<'a> {
    id: &'a str,
    value: &'a str,
}

// =============================================================================
// CLIENT
// =============================================================================

/// HTTP client bound to one zone's `security_level` setting.
#[derive(Debug, Clone)]
pub struct CloudflareClient {
    setting_url: String,
    client: reqwest::Client,
}

impl CloudflareClient {
    /// Build a client from resolved configuration.
    ///
    /// Sends `X-Auth-Email` and `Authorization: Bearer <api_key>` with every
    /// request and applies the configured timeout.
    pub fn from_config(config: &Config) -> Result<Self, StoreError> {
        let creds = &config.credentials;
        Self::new(
            &config.api_base,
            &creds.zone_id,
            &creds.email,
            &creds.api_key,
            config.timeout,
        )
    }

    pub fn new(
        api_base: &str,
        zone_id: &str,
        email: &str,
        api_key: &str,
        timeout: Duration,
    ) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            HeaderName::from_static("x-auth-email"),
            HeaderValue::from_str(email).map_err(|_| StoreError::InvalidHeader("X-Auth-Email"))?,
        );
        let mut auth = HeaderValue::from_str(&format!("Bearer {}", api_key))
            .map_err(|_| StoreError::InvalidHeader("Authorization"))?;
        auth.set_sensitive(true);
        headers.insert(AUTHORIZATION, auth);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            setting_url: format!(
                "{}/zones/{}/settings/{}",
                api_base.trim_end_matches('/'),
                zone_id,
                SETTING_ID
            ),
            client,
        })
    }

    /// Full URL of the managed setting.
    pub fn setting_url(&self) -> &str {
        &self.setting_url
    }

    /// Fetch the setting record.
    pub async fn setting(&self) -> Result<ZoneSetting, StoreError> {
        tracing::debug!(url = %self.setting_url, "GET setting");
        let resp = self.client.get(&self.setting_url).send().await?;
        let bytes = Self::check_status(resp).await?;
        Self::decode_setting(&bytes)
    }

    /// Replace the setting value and return the updated record.
    pub async fn update(&self, value: &str) -> Result<ZoneSetting, StoreError> {
        let bytes = self.patch(value).await?;
        Self::decode_setting(&bytes)
    }

    async fn patch(&self, value: &str) -> Result<Bytes, StoreError> {
        tracing::debug!(url = %self.setting_url, value, "PATCH setting");
        let body = SettingUpdate {
            id: SETTING_ID,
            value,
        };
        let resp = self
            .client
            .patch(&self.setting_url)
            .json(&body)
            .send()
            .await?;
        Self::check_status(resp).await
    }

    /// Body of a 2xx response, or `StoreError::Status` for anything else.
    async fn check_status(resp: reqwest::Response) -> Result<Bytes, StoreError> {
        let status = resp.status();
        let bytes = resp.bytes().await?;

        if !status.is_success() {
            // Error bodies usually carry an envelope, but a proxy may not.
            let detail = serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes)
                .map(|env| env.error_summary())
                .unwrap_or_default();
            return Err(StoreError::Status {
                code: status.as_u16(),
                detail,
            });
        }
        Ok(bytes)
    }

    fn decode_setting(bytes: &[u8]) -> Result<ZoneSetting, StoreError> {
        let envelope: ApiEnvelope<ZoneSetting> = serde_json::from_slice(bytes)?;
        if !envelope.success {
            return Err(StoreError::Api(envelope.error_summary()));
        }
        envelope
            .result
            .ok_or_else(|| StoreError::Api("response carried no result".to_string()))
    }
}

impl SettingStore for CloudflareClient {
    async fn read_setting(&self) -> Result<Option<String>, StoreError> {
        Ok(self.setting().await?.value)
    }

    /// A 2xx status means the write landed. The body is only consulted for
    /// an explicit `success: false`.
    async fn write_setting(&self, value: &str) -> Result<(), StoreError> {
        let bytes = self.patch(value).await?;
        match serde_json::from_slice::<ApiEnvelope<serde_json::Value>>(&bytes) {
            Ok(envelope) if !envelope.success => Err(StoreError::Api(envelope.error_summary())),
            Ok(_) => {
                tracing::debug!(value, "setting written");
                Ok(())
            }
            Err(e) => {
                tracing::debug!(value, error = %e, "setting written, response body not an envelope");
                Ok(())
            }
        }
    }
}
