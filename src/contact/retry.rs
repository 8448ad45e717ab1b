//! Timeout and retry around a contact submission.

use super::client::{ContactSubmitter, REQUEST_TIMEOUT};
use super::error::ContactError;
use super::model::{ContactFormData, SubmissionReceipt};
use log::*;
use std::future::Future;
use std::time::Duration;

/// Bounds for submitting a single message.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    pub max_attempts: u32,
    pub base_delay: Duration,
    pub timeout: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        RetryPolicy {
            max_attempts: 3,
            base_delay: Duration::from_secs(1),
            timeout: REQUEST_TIMEOUT,
        }
    }
}

impl RetryPolicy {
    /// Return the wait after the given failed attempt (1-based).
    ///
    pub fn delay_after(&self, attempt: u32) -> Duration {
        self.base_delay * attempt
    }
}

/// Submit with the policy's timeout and retry rules, sleeping on the tokio
/// timer between attempts.
///
pub async fn submit_with_retry(
    submitter: &dyn ContactSubmitter,
    data: &ContactFormData,
    policy: &RetryPolicy,
) -> Result<SubmissionReceipt, ContactError> {
    submit_with_retry_using(submitter, data, policy, tokio::time::sleep).await
}

/// Same as [`submit_with_retry`] with a caller-supplied sleep.
///
pub async fn submit_with_retry_using<S, F>(
    submitter: &dyn ContactSubmitter,
    data: &ContactFormData,
    policy: &RetryPolicy,
    mut sleep: S,
) -> Result<SubmissionReceipt, ContactError>
where
    S: FnMut(Duration) -> F,
    F: Future<Output = ()>,
{
    let mut attempt = 1;
    loop {
        let result = match tokio::time::timeout(policy.timeout, submitter.submit(data)).await {
            Ok(result) => result,
            Err(_) => Err(ContactError::Network {
                message: format!("Request exceeded {:?}", policy.timeout),
                timed_out: true,
            }),
        };

        match result {
            Ok(receipt) => {
                info!("Contact message accepted on attempt {}.", attempt);
                return Ok(receipt);
            }
            Err(e) if e.is_retryable() && attempt < policy.max_attempts => {
                let delay = policy.delay_after(attempt);
                warn!(
                    "Contact attempt {} of {} failed: {}. Retrying in {:?}...",
                    attempt, policy.max_attempts, e, delay
                );
                sleep(delay).await;
                attempt += 1;
            }
            Err(e) => {
                error!("Contact submission failed after {} attempt(s): {}", attempt, e);
                return Err(e);
            }
        }
    }
}
