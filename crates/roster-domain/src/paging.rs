//! Page counter for incremental loading.

/// Tracks the last requested page and guards against overlapping
/// append requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageCursor {
    page: u32,
    is_fetching_more: bool,
    has_more: bool,
}

impl Default for PageCursor {
    fn default() -> Self {
        Self::new()
    }
}

impl PageCursor {
    pub fn new() -> Self {
        Self {
            page: 1,
            is_fetching_more: false,
            has_more: true,
        }
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn is_fetching_more(&self) -> bool {
        self.is_fetching_more
    }

    pub fn has_more(&self) -> bool {
        self.has_more
    }

    pub fn set_has_more(&mut self, has_more: bool) {
        self.has_more = has_more;
    }

    /// Back to page 1. Any append in flight is abandoned.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Claim the next page. `None` while an append is outstanding or when
    /// the last response reported no further pages.
    pub fn try_advance(&mut self) -> Option<u32> {
        if self.is_fetching_more || !self.has_more {
            return None;
        }
        self.is_fetching_more = true;
        self.page += 1;
        Some(self.page)
    }

    pub fn settle(&mut self) {
        self.is_fetching_more = false;
    }

    /// Undo the advance for `failed_page` so the next attempt requests it again.
    pub fn rollback(&mut self, failed_page: u32) {
        if self.page == failed_page && self.page > 1 {
            self.page -= 1;
        }
    }
}
