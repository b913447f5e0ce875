//! Quiet-period trigger for search input.
//!
//! Each text change mints a fresh token and invalidates the previous one.
//! When a timer armed with a token expires, the owner asks whether that
//! token is still the latest before acting on it.

/// Identifies one armed debounce timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DebounceToken(u64);

#[derive(Debug, Clone, Default)]
pub struct Debouncer {
    latest: u64,
    pending: bool,
}

impl Debouncer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancel any pending timer and arm a new one.
    pub fn restart(&mut self) -> DebounceToken {
        self.latest += 1;
        self.pending = true;
        DebounceToken(self.latest)
    }

    /// Invalidate the pending timer without arming a new one.
    pub fn cancel(&mut self) {
        if self.pending {
            self.latest += 1;
            self.pending = false;
        }
    }

    /// Consume an expired timer. True only for the latest, still-pending token.
    pub fn fire(&mut self, token: DebounceToken) -> bool {
        if self.pending && token.0 == self.latest {
            self.pending = false;
            true
        } else {
            false
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }
}
