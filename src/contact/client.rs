//! HTTP client for the contact endpoint.
//!
//! This module defines the narrow submission seam used by the pipeline and
//! the default implementation that posts JSON to the configured backend.

use super::error::ContactError;
use super::model::{ApiResponse, ContactFormData, SubmissionReceipt};
use async_trait::async_trait;
use log::*;
use std::time::Duration;

/// Default bound on a single request.
///
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Sends a validated contact message somewhere.
///
#[async_trait]
pub trait ContactSubmitter: Send + Sync {
    async fn submit(&self, data: &ContactFormData) -> Result<SubmissionReceipt, ContactError>;
}

/// Posts contact messages to `{base_url}/contact`.
///
pub struct HttpSubmitter {
    base_url: String,
    http_client: reqwest::Client,
}

impl HttpSubmitter {
    /// Returns a new instance for the given base URL with the default timeout.
    ///
    pub fn new(base_url: &str) -> Result<Self, ContactError> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, ContactError> {
        let http_client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ContactError::Other(format!("Failed to create HTTP client: {}", e)))?;
        Ok(HttpSubmitter {
            base_url: base_url.trim_end_matches('/').to_owned(),
            http_client,
        })
    }

    fn endpoint(&self) -> String {
        format!("{}/contact", self.base_url)
    }
}

/// Classify a transport failure.
///
fn transport_error(e: reqwest::Error) -> ContactError {
    if e.is_timeout() {
        ContactError::Network {
            message: e.to_string(),
            timed_out: true,
        }
    } else if e.is_connect() || e.is_request() {
        ContactError::Network {
            message: e.to_string(),
            timed_out: false,
        }
    } else {
        ContactError::Other(e.to_string())
    }
}

/// Turn a decoded response envelope into the pipeline's result.
///
fn interpret(
    response: ApiResponse<SubmissionReceipt>,
) -> Result<SubmissionReceipt, ContactError> {
    if !response.success {
        return Err(match response.errors {
            Some(errors) if !errors.is_empty() => ContactError::ServerValidation {
                message: response.message,
                errors,
            },
            _ => ContactError::Rejected(response.message),
        });
    }
    // An accepted message without a receipt is still accepted.
    Ok(response.data.unwrap_or(SubmissionReceipt {
        id: String::new(),
        timestamp: response.timestamp,
    }))
}

#[async_trait]
impl ContactSubmitter for HttpSubmitter {
    async fn submit(&self, data: &ContactFormData) -> Result<SubmissionReceipt, ContactError> {
        let url = self.endpoint();
        debug!("Posting contact message to {}...", url);

        let response = self
            .http_client
            .post(&url)
            .json(data)
            .send()
            .await
            .map_err(transport_error)?;
        let status = response.status();
        let bytes = response.bytes().await.map_err(transport_error)?;

        if !status.is_success() {
            let message = serde_json::from_slice::<serde_json::Value>(&bytes)
                .ok()
                .and_then(|body| {
                    body.get("message")
                        .and_then(|m| m.as_str())
                        .map(str::to_owned)
                })
                .filter(|m| !m.is_empty())
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
            warn!(
                "Contact endpoint answered with status {}: {}",
                status, message
            );
            return Err(ContactError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let envelope: ApiResponse<SubmissionReceipt> = serde_json::from_slice(&bytes)
            .map_err(|e| ContactError::Other(format!("Failed to decode response: {}", e)))?;
        interpret(envelope)
    }
}
