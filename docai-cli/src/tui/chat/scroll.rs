//! Keeps the newest message in view.
//!
//! [`ScrollFollow::on_update`] is the post-update hook: it runs before each
//! frame and snaps to the bottom whenever the chat state's revision moved.
//! It only reads the revision and never writes back into the chat state.

/// Scroll position of the message area
#[derive(Debug, Clone, Default)]
pub struct ScrollFollow {
    offset: u16,
    follow_bottom: bool,
    max_scroll: u16,
    page: u16,
    seen_revision: Option<u64>,
}

impl ScrollFollow {
    pub fn new() -> Self {
        Self {
            follow_bottom: true,
            ..Self::default()
        }
    }

    /// Snap to the bottom if `revision` differs from the one last seen.
    ///
    /// Returns whether it snapped.
    pub fn on_update(&mut self, revision: u64) -> bool {
        if self.seen_revision == Some(revision) {
            return false;
        }
        self.seen_revision = Some(revision);
        self.follow_bottom = true;
        true
    }

    /// Fix the offset against the rendered content and return it
    pub fn resolve(&mut self, max_scroll: u16, page: u16) -> u16 {
        self.max_scroll = max_scroll;
        self.page = page.max(1);
        self.offset = if self.follow_bottom {
            max_scroll
        } else {
            self.offset.min(max_scroll)
        };
        self.offset
    }

    pub fn offset(&self) -> u16 {
        self.offset
    }

    pub fn is_following(&self) -> bool {
        self.follow_bottom
    }

    pub fn scroll_up(&mut self) {
        self.scroll_up_by(1);
    }

    pub fn scroll_down(&mut self) {
        self.scroll_down_by(1);
    }

    pub fn page_up(&mut self) {
        self.scroll_up_by(self.page.max(1));
    }

    pub fn page_down(&mut self) {
        self.scroll_down_by(self.page.max(1));
    }

    pub fn scroll_to_top(&mut self) {
        self.follow_bottom = false;
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.follow_bottom = true;
        self.offset = self.max_scroll;
    }

    fn scroll_up_by(&mut self, lines: u16) {
        self.follow_bottom = false;
        self.offset = self.offset.saturating_sub(lines);
    }

    fn scroll_down_by(&mut self, lines: u16) {
        self.offset = self.offset.saturating_add(lines);
        if self.offset >= self.max_scroll {
            self.scroll_to_bottom();
        }
    }
}
