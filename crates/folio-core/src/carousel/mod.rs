//! Featured-project carousel on the home page.
//!
//! Only the index arithmetic lives here; the auto-advance timer belongs to
//! the view layer, which calls [`Carousel::tick`] once per period.

use std::time::Duration;

/// Auto-advance period used when the site config does not set one.
pub const DEFAULT_AUTO_ADVANCE: Duration = Duration::from_secs(8);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    playing: bool,
}

impl Carousel {
    /// A carousel over `len` slides, starting at the first and playing.
    pub fn new(len: usize) -> Self {
        Self {
            len,
            current: 0,
            playing: true,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn is_playing(&self) -> bool {
        self.playing
    }

    pub fn advance(&mut self) {
        if self.len > 0 {
            self.current = (self.current + 1) % self.len;
        }
    }

    pub fn retreat(&mut self) {
        if self.len > 0 {
            self.current = (self.current + self.len - 1) % self.len;
        }
    }

    /// Out-of-range indices are ignored.
    pub fn jump_to(&mut self, index: usize) {
        if index < self.len {
            self.current = index;
        }
    }

    /// Timer callback: advances only while playing.
    pub fn tick(&mut self) {
        if self.playing {
            self.advance();
        }
    }

    pub fn toggle_playing(&mut self) {
        self.playing = !self.playing;
    }

    /// `"03 / 09"`; `"00 / 00"` when empty.
    pub fn position_label(&self) -> String {
        let shown = if self.len == 0 { 0 } else { self.current + 1 };
        format!("{:02} / {:02}", shown, self.len)
    }
}
