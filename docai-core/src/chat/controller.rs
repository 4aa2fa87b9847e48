//! Request lifecycle driver

use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::debug;

use super::state::{ChatState, Submission};
use crate::client::{AskBackend, AskError, AskResponse};

/// Outcome of a dispatched question, delivered back to the event loop
#[derive(Debug)]
pub struct Resolution {
    pub submission: Submission,
    pub outcome: Result<AskResponse, AskError>,
}

/// Owns a [`ChatState`] and sends its questions to a backend
pub struct ChatClient<B> {
    backend: Arc<B>,
    state: ChatState,
}

impl<B> ChatClient<B>
where
    B: AskBackend + 'static,
{
    pub fn new(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: ChatState::new(),
        }
    }

    pub fn state(&self) -> &ChatState {
        &self.state
    }

    /// Draft editing goes through here
    pub fn state_mut(&mut self) -> &mut ChatState {
        &mut self.state
    }

    /// Submit the draft and wait for the answer
    ///
    /// Returns `false` when the draft was blank or a request was pending, in
    /// which case nothing was sent. Failures never surface here; they are
    /// recorded as a bot entry.
    pub async fn submit_question(&mut self) -> bool {
        let Some(submission) = self.state.begin_submit() else {
            return false;
        };
        let outcome = self.backend.ask(&submission.question).await;
        self.state.resolve(&submission, outcome);
        true
    }

    /// Submit the draft without waiting
    ///
    /// The request runs on a spawned task and its [`Resolution`] is sent to
    /// `tx`; feed it to [`ChatClient::apply`]. Must be called within a tokio
    /// runtime.
    pub fn dispatch(&mut self, tx: mpsc::Sender<Resolution>) -> bool {
        let Some(submission) = self.state.begin_submit() else {
            return false;
        };
        let backend = Arc::clone(&self.backend);

        tokio::spawn(async move {
            let outcome = backend.ask(&submission.question).await;
            if tx.send(Resolution { submission, outcome }).await.is_err() {
                debug!("Chat closed before the answer arrived");
            }
        });
        true
    }

    /// Record a delivered outcome; stale ones are dropped
    pub fn apply(&mut self, resolution: Resolution) -> bool {
        self.state.resolve(&resolution.submission, resolution.outcome)
    }
}
