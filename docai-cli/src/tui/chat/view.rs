use super::scroll::ScrollFollow;

const SPINNER_FRAMES: [&str; 4] = ["⠋", "⠙", "⠹", "⠸"];

/// Presentation state of the chat screen
///
/// Nothing here belongs to the conversation; it is rebuilt on every launch.
#[derive(Debug, Clone)]
pub struct ChatView {
    pub scroll: ScrollFollow,
    pub spinner_frame: usize,
    /// One-line notice in the help bar, replaced by the next one
    pub status_message: Option<String>,
}

impl Default for ChatView {
    fn default() -> Self {
        Self::new()
    }
}

impl ChatView {
    pub fn new() -> Self {
        Self {
            scroll: ScrollFollow::new(),
            spinner_frame: 0,
            status_message: None,
        }
    }

    /// Advance the loading animation
    pub fn tick_spinner(&mut self) {
        self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }
}
