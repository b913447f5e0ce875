//! Selection cursor over a grid of items.
//!
//! The cursor is a flat item index; vertical moves step by the current
//! column count.

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GridSelection {
    selected_index: Option<usize>,
}

impl GridSelection {
    pub fn new() -> Self {
        Self {
            selected_index: None,
        }
    }

    pub fn get(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn set(&mut self, index: Option<usize>) {
        self.selected_index = index;
    }

    pub fn clear(&mut self) {
        self.selected_index = None;
    }

    /// Keep the selection inside `0..len`, selecting the first item when
    /// items exist and nothing is selected.
    pub fn clamp(&mut self, len: usize) {
        self.selected_index = match (self.selected_index, len) {
            (_, 0) => None,
            (None, _) => Some(0),
            (Some(idx), len) => Some(idx.min(len - 1)),
        };
    }

    fn step(&mut self, len: usize, f: impl FnOnce(usize) -> usize) {
        if len == 0 {
            return;
        }
        self.selected_index = Some(match self.selected_index {
            Some(idx) => f(idx).min(len - 1),
            None => 0,
        });
    }

    pub fn right(&mut self, len: usize) {
        self.step(len, |idx| idx + 1);
    }

    pub fn left(&mut self, len: usize) {
        self.step(len, |idx| idx.saturating_sub(1));
    }

    /// Move one row down. On a partial last row this lands on the last item.
    pub fn down(&mut self, len: usize, columns: usize) {
        self.step(len, |idx| idx + columns.max(1));
    }

    pub fn up(&mut self, len: usize, columns: usize) {
        self.step(len, |idx| idx.saturating_sub(columns.max(1)));
    }

    pub fn page_down(&mut self, len: usize, columns: usize, rows: usize) {
        self.step(len, |idx| idx + columns.max(1) * rows.max(1));
    }

    pub fn page_up(&mut self, len: usize, columns: usize, rows: usize) {
        self.step(len, |idx| idx.saturating_sub(columns.max(1) * rows.max(1)));
    }

    pub fn jump_to_first(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(0);
        }
    }

    pub fn jump_to_last(&mut self, len: usize) {
        if len > 0 {
            self.selected_index = Some(len - 1);
        }
    }
}
