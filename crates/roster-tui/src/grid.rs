//! Scroll and selection state for the character grid.

use roster_core::{GridPage, GridPageInfo, GridSelection};

/// Rows a single character card occupies, borders included.
pub const CARD_HEIGHT: u16 = 7;

#[derive(Debug, Clone, Default)]
pub struct GridView {
    page: GridPage,
    selection: GridSelection,
    viewport_rows: usize,
    /// Item count for which the end-reached trigger already fired.
    sent_end_for_len: Option<usize>,
}

impl GridView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn columns(&self) -> usize {
        self.page.columns()
    }

    pub fn viewport_rows(&self) -> usize {
        self.viewport_rows
    }

    pub fn selected(&self) -> Option<usize> {
        self.selection.get()
    }

    pub fn page_info(&self) -> GridPageInfo {
        self.page.get_page_info(self.viewport_rows)
    }

    /// Fit the grid to `len` items in `columns` columns and `viewport_rows` rows.
    ///
    /// A change in column count rebuilds the viewport from scratch around the
    /// selected item instead of re-flowing the old scroll position.
    pub fn layout(&mut self, len: usize, columns: usize, viewport_rows: usize) {
        self.viewport_rows = viewport_rows;
        self.page.set_total_items(len);
        self.selection.clamp(len);

        if columns != self.page.columns() {
            tracing::debug!(
                "Grid columns {} -> {}, re-laying out",
                self.page.columns(),
                columns
            );
            self.page
                .relayout(columns, self.selection.get(), viewport_rows);
            self.sent_end_for_len = None;
        }

        self.follow_selection();
    }

    /// Back to the top after the list was replaced.
    pub fn reset(&mut self) {
        let columns = self.page.columns();
        self.page = GridPage::new(0, columns);
        self.selection.clear();
        self.sent_end_for_len = None;
    }

    fn follow_selection(&mut self) {
        if let Some(idx) = self.selection.get() {
            self.page.scroll_to_visible(idx, self.viewport_rows);
        }
    }

    /// True once per content length when the viewport nears the end.
    ///
    /// Scrolling back out of the threshold re-arms the trigger, so a failed
    /// page can be retried by scrolling away and back.
    pub fn end_reached(&mut self, threshold: f32) -> bool {
        let len = self.page.total_items();
        if len == 0 {
            return false;
        }
        if !self.page_info().is_near_end(threshold) {
            self.sent_end_for_len = None;
            return false;
        }
        if self.sent_end_for_len == Some(len) {
            return false;
        }
        self.sent_end_for_len = Some(len);
        true
    }

    pub fn move_left(&mut self) {
        self.selection.left(self.page.total_items());
        self.follow_selection();
    }

    pub fn move_right(&mut self) {
        self.selection.right(self.page.total_items());
        self.follow_selection();
    }

    pub fn move_up(&mut self) {
        self.selection.up(self.page.total_items(), self.page.columns());
        self.follow_selection();
    }

    pub fn move_down(&mut self) {
        self.selection
            .down(self.page.total_items(), self.page.columns());
        self.follow_selection();
    }

    pub fn page_up(&mut self) {
        self.selection.page_up(
            self.page.total_items(),
            self.page.columns(),
            self.viewport_rows,
        );
        self.follow_selection();
    }

    pub fn page_down(&mut self) {
        self.selection.page_down(
            self.page.total_items(),
            self.page.columns(),
            self.viewport_rows,
        );
        self.follow_selection();
    }

    pub fn jump_to_first(&mut self) {
        self.selection.jump_to_first(self.page.total_items());
        self.follow_selection();
    }

    pub fn jump_to_last(&mut self) {
        self.selection.jump_to_last(self.page.total_items());
        self.follow_selection();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_reached_fires_once_per_length() {
        let mut grid = GridView::new();
        grid.layout(20, 4, 3);
        assert!(!grid.end_reached(0.2));

        grid.jump_to_last();
        assert!(grid.end_reached(0.2));
        assert!(!grid.end_reached(0.2));

        grid.layout(40, 4, 3);
        assert!(!grid.end_reached(0.2));
        grid.jump_to_last();
        assert!(grid.end_reached(0.2));
    }

    #[test]
    fn test_scrolling_away_rearms_trigger() {
        let mut grid = GridView::new();
        grid.layout(40, 2, 4);
        grid.jump_to_last();
        assert!(grid.end_reached(0.2));

        grid.jump_to_first();
        assert!(!grid.end_reached(0.2));
        grid.jump_to_last();
        assert!(grid.end_reached(0.2));
    }

    #[test]
    fn test_column_change_keeps_selection_visible() {
        let mut grid = GridView::new();
        grid.layout(40, 2, 4);
        for _ in 0..15 {
            grid.move_down();
        }
        assert_eq!(grid.selected(), Some(30));

        grid.layout(40, 4, 4);
        assert_eq!(grid.columns(), 4);
        assert_eq!(grid.selected(), Some(30));
        assert!(grid.page_info().visible_items.contains(&30));
    }

    #[test]
    fn test_reset_clears_selection() {
        let mut grid = GridView::new();
        grid.layout(20, 3, 2);
        grid.move_right();
        grid.reset();
        assert_eq!(grid.selected(), None);
        grid.layout(20, 3, 2);
        assert_eq!(grid.selected(), Some(0));
    }
}
