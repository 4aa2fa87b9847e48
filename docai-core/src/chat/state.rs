//! Chat state management

use tracing::{debug, warn};

use super::entry::ConversationEntry;
use super::log::ConversationLog;
use crate::client::{AskError, AskResponse};

/// A question accepted for sending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    /// Sequence number; only the request in flight may be resolved
    pub id: u64,
    /// Exact draft text, surrounding whitespace included
    pub question: String,
}

/// Draft, conversation log and pending flag of one chat session
///
/// The pending flag is true exactly while one request is in flight. A new
/// question is refused until that request resolves, so responses are always
/// recorded in the order the questions were asked. Only the in-flight
/// request can be resolved, and only once.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    log: ConversationLog,
    draft: String,
    /// Cursor position in the draft, counted in chars
    cursor_pos: usize,
    /// Id of the request in flight
    in_flight: Option<u64>,
    revision: u64,
    next_request_id: u64,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn log(&self) -> &ConversationLog {
        &self.log
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn cursor_pos(&self) -> usize {
        self.cursor_pos
    }

    pub fn is_pending(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Counter bumped on every change to the log or the pending flag
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Accept the draft as a question
    ///
    /// Returns `None` and changes nothing when the draft is blank or a
    /// request is already pending. Otherwise clears the draft, raises the
    /// pending flag and records the user entry before handing back the
    /// question to send.
    pub fn begin_submit(&mut self) -> Option<Submission> {
        if self.draft.trim().is_empty() {
            return None;
        }
        if self.is_pending() {
            debug!("Ignoring submit while a request is pending");
            return None;
        }

        self.next_request_id += 1;
        let id = self.next_request_id;
        let question = self.take_draft();
        self.in_flight = Some(id);
        self.log.append(ConversationEntry::user(question.clone()));
        self.bump_revision();

        let submission = Submission { id, question };
        debug!(request = submission.id, "Question accepted");
        Some(submission)
    }

    /// Record the outcome of a submitted question
    ///
    /// The bot entry is appended before the pending flag is cleared. Failures
    /// end here as the fixed error entry. An outcome for anything but the
    /// request in flight is dropped; returns whether it was recorded.
    pub fn resolve(
        &mut self,
        submission: &Submission,
        outcome: Result<AskResponse, AskError>,
    ) -> bool {
        if self.in_flight != Some(submission.id) {
            debug!(
                request = submission.id,
                in_flight = ?self.in_flight,
                "Dropping outcome of a request that is not in flight"
            );
            return false;
        }

        let entry = match outcome {
            Ok(response) => {
                debug!(
                    request = submission.id,
                    sources = response.sources.len(),
                    "Answer recorded"
                );
                ConversationEntry::bot(response.answer, response.sources)
            }
            Err(err) => {
                warn!(
                    request = submission.id,
                    kind = err.kind(),
                    error = %err,
                    "Question failed"
                );
                ConversationEntry::bot(err.user_message(), Vec::new())
            }
        };
        self.log.append(entry);
        self.in_flight = None;
        self.bump_revision();
        true
    }

    /// Replace the draft, placing the cursor at its end
    pub fn set_draft(&mut self, text: impl Into<String>) {
        self.draft = text.into();
        self.cursor_pos = self.draft.chars().count();
    }

    /// Get the current draft and clear it
    pub fn take_draft(&mut self) -> String {
        self.cursor_pos = 0;
        std::mem::take(&mut self.draft)
    }

    pub fn clear_draft(&mut self) {
        self.draft.clear();
        self.cursor_pos = 0;
    }

    /// Insert character at cursor position
    pub fn insert_char(&mut self, c: char) {
        let at = self.byte_offset(self.cursor_pos);
        self.draft.insert(at, c);
        self.cursor_pos += 1;
    }

    /// Delete character before cursor (backspace)
    pub fn delete_char(&mut self) {
        if self.cursor_pos > 0 {
            let at = self.byte_offset(self.cursor_pos - 1);
            self.draft.remove(at);
            self.cursor_pos -= 1;
        }
    }

    /// Delete character at cursor (delete key)
    pub fn delete_char_forward(&mut self) {
        if self.cursor_pos < self.draft_len() {
            let at = self.byte_offset(self.cursor_pos);
            self.draft.remove(at);
        }
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor_pos = self.cursor_pos.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        if self.cursor_pos < self.draft_len() {
            self.cursor_pos += 1;
        }
    }

    pub fn move_cursor_home(&mut self) {
        self.cursor_pos = 0;
    }

    pub fn move_cursor_end(&mut self) {
        self.cursor_pos = self.draft_len();
    }

    fn draft_len(&self) -> usize {
        self.draft.chars().count()
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.draft
            .char_indices()
            .nth(char_pos)
            .map(|(i, _)| i)
            .unwrap_or(self.draft.len())
    }

    fn bump_revision(&mut self) {
        self.revision = self.revision.wrapping_add(1);
    }
}
