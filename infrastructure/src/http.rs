//! Shared plumbing for the reqwest-based adapters.
//!
//! Every adapter sends JSON and expects JSON back. Failures are first
//! sorted into [`TransportError`] and then converted into the error type of
//! the port the adapter implements.

use helpdesk_application::{GatewayError, RetrievalError};
use helpdesk_domain::util::truncate_str;
use reqwest::RequestBuilder;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;

/// How an HTTP exchange failed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("connection failed: {0}")]
    Connection(String),

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("invalid response: {0}")]
    InvalidResponse(String),

    #[error("request timed out")]
    Timeout,

    #[error("{0}")]
    Other(String),
}

impl From<reqwest::Error> for TransportError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            TransportError::Timeout
        } else if e.is_connect() {
            TransportError::Connection(e.to_string())
        } else if e.is_decode() {
            TransportError::InvalidResponse(e.to_string())
        } else {
            TransportError::Other(e.to_string())
        }
    }
}

impl From<TransportError> for GatewayError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Connection(msg) => GatewayError::ConnectionError(msg),
            TransportError::Status { .. } => GatewayError::RequestFailed(e.to_string()),
            TransportError::InvalidResponse(msg) => GatewayError::InvalidResponse(msg),
            TransportError::Timeout => GatewayError::Timeout,
            TransportError::Other(msg) => GatewayError::Other(msg),
        }
    }
}

impl From<TransportError> for RetrievalError {
    fn from(e: TransportError) -> Self {
        match e {
            TransportError::Connection(msg) => RetrievalError::ConnectionError(msg),
            TransportError::Status { .. } => RetrievalError::RequestFailed(e.to_string()),
            TransportError::InvalidResponse(msg) => RetrievalError::InvalidResponse(msg),
            TransportError::Timeout => RetrievalError::Timeout,
            TransportError::Other(msg) => RetrievalError::Other(msg),
        }
    }
}

/// Send `request` and decode a successful JSON body.
pub(crate) async fn send_json<T: DeserializeOwned>(
    request: RequestBuilder,
) -> Result<T, TransportError> {
    let response = request.send().await?;
    let status = response.status();
    let body = response.text().await?;
    debug!(status = %status, bytes = body.len(), "response received");

    if !status.is_success() {
        return Err(TransportError::Status {
            status: status.as_u16(),
            message: error_message(&body),
        });
    }

    serde_json::from_str(&body).map_err(|e| TransportError::InvalidResponse(e.to_string()))
}

/// Pull a readable message out of an error body.
///
/// Understands `{"error": {"message": ..}}`, `{"error": ".."}` and
/// `{"message": ..}`; anything else is returned truncated.
fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        let message = value
            .pointer("/error/message")
            .or_else(|| value.get("message"))
            .or_else(|| value.get("error"))
            .and_then(|m| m.as_str());
        if let Some(message) = message {
            return message.to_string();
        }
    }
    truncate_str(body.trim(), 200).to_string()
}
