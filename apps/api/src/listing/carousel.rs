//! Image gallery cursor used by the project detail view.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SlideDirection {
    Forward,
    Backward,
    None,
}

/// Position within a project's image list. Wraps at both ends. Autoplay runs
/// until the first manual navigation and never resumes on its own.
#[derive(Debug, Clone, Serialize)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: SlideDirection,
    autoplay: bool,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            direction: SlideDirection::None,
            // A single image has nothing to cycle through.
            autoplay: len > 1,
        }
    }

    /// Resumes at `index` (clamped) with autoplay still running.
    pub fn starting_at(len: usize, index: usize) -> Self {
        let mut carousel = Self::new(len);
        carousel.index = index.min(len.saturating_sub(1));
        carousel
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    pub fn is_autoplaying(&self) -> bool {
        self.autoplay
    }

    pub fn stop_autoplay(&mut self) {
        self.autoplay = false;
    }

    pub fn next(&mut self) {
        self.autoplay = false;
        self.advance();
    }

    pub fn previous(&mut self) {
        self.autoplay = false;
        if self.len == 0 {
            return;
        }
        self.direction = SlideDirection::Backward;
        self.index = if self.index == 0 {
            self.len - 1
        } else {
            self.index - 1
        };
    }

    /// Jumps to `index`, clamped to the last image.
    pub fn go_to(&mut self, index: usize) {
        self.autoplay = false;
        if self.len == 0 {
            return;
        }
        let target = index.min(self.len - 1);
        self.direction = if target > self.index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.index = target;
    }

    /// Autoplay step. No-op once the user has navigated manually.
    pub fn tick(&mut self) {
        if self.autoplay {
            self.advance();
        }
    }

    fn advance(&mut self) {
        if self.len == 0 {
            return;
        }
        self.direction = SlideDirection::Forward;
        self.index = (self.index + 1) % self.len;
    }
}
