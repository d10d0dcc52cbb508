//! # Store Module
//!
//! The remote collaborator holding the security-level setting.
//!
//! The gate only needs one read and one write. [`CloudflareClient`]
//! implements this over HTTP; tests substitute an in-memory store.
//!
//! [`CloudflareClient`]: crate::client::CloudflareClient

use std::future::Future;
use thiserror::Error;

/// Errors from reading or writing the remote setting.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Transport failure or timeout.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Response body was not the expected JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Server answered with a non-success status code.
    #[error("Status code {code}{}", detail_suffix(.detail))]
    Status { code: u16, detail: String },

    /// Server answered 2xx but reported failure in the response envelope.
    #[error("API error: {0}")]
    Api(String),

    /// A credential could not be encoded as an HTTP header.
    #[error("Invalid header value for {0}")]
    InvalidHeader(&'static str),
}

fn detail_suffix(detail: &str) -> String {
    if detail.is_empty() {
        String::new()
    } else {
        format!(": {detail}")
    }
}

/// Read/write access to the single remote setting.
pub trait SettingStore {
    /// Fetch the current value. `Ok(None)` means the service answered
    /// without a value.
    fn read_setting(&self) -> impl Future<Output = Result<Option<String>, StoreError>> + Send;

    /// Replace the current value.
    fn write_setting(&self, value: &str) -> impl Future<Output = Result<(), StoreError>> + Send;
}
