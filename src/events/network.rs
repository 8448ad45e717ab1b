use crate::contact::{submit_with_retry, ContactFormData, ContactSubmitter, RetryPolicy};
use crate::state::State;
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    SubmitContact(ContactFormData),
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    submitter: &'a dyn ContactSubmitter,
    policy: RetryPolicy,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(
        state: &'a Arc<Mutex<State>>,
        submitter: &'a dyn ContactSubmitter,
        policy: RetryPolicy,
    ) -> Self {
        Handler {
            state,
            submitter,
            policy,
        }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::SubmitContact(data) => self.submit_contact(data).await?,
        }
        Ok(())
    }

    /// Submit the message without holding the state lock, then record the
    /// outcome.
    ///
    async fn submit_contact(&mut self, data: ContactFormData) -> Result<()> {
        info!("Submitting contact message from {}...", data.email);
        let result = submit_with_retry(self.submitter, &data, &self.policy).await;
        if let Err(ref e) = result {
            error!("Failed to submit contact message: {}", e);
        }
        let mut state = self.state.lock().await;
        state.finish_contact_submission(result);
        Ok(())
    }
}
