use serde::{Deserialize, Serialize};

pub const INITIAL_VISIBLE: usize = 3;
pub const VISIBLE_STEP: usize = 3;

/// "Show more" cutoff for the project grid.
///
/// The raw count only grows, in steps of `VISIBLE_STEP`, and only while it is
/// below the list length. What is rendered is `visible(len)`, which never
/// exceeds the list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisibleWindow {
    count: usize,
}

impl Default for VisibleWindow {
    fn default() -> Self {
        Self {
            count: INITIAL_VISIBLE,
        }
    }
}

impl VisibleWindow {
    /// Restores a window from a client-held count. Values below the initial
    /// cutoff snap up to it; the count is otherwise taken as-is.
    pub fn from_count(count: usize) -> Self {
        Self {
            count: count.max(INITIAL_VISIBLE),
        }
    }

    pub fn count(&self) -> usize {
        self.count
    }

    pub fn visible(&self, len: usize) -> usize {
        self.count.min(len)
    }

    pub fn has_more(&self, len: usize) -> bool {
        self.count < len
    }

    /// Grows the cutoff by one step. Inert once everything is shown.
    pub fn show_more(&mut self, len: usize) -> bool {
        if !self.has_more(len) {
            return false;
        }
        self.count += VISIBLE_STEP;
        true
    }

    pub fn apply<'a, T>(&self, items: &'a [T]) -> &'a [T] {
        &items[..self.visible(items.len())]
    }
}
