//! Grid viewport pagination.
//!
//! Tracks which rows of a multi-column grid are visible and how close the
//! viewport is to the end of the loaded content. Knows nothing about
//! rendering.

use std::ops::Range;

/// Information about the visible portion of a grid.
#[derive(Debug, Clone, PartialEq)]
pub struct GridPageInfo {
    /// Item indices visible in the current viewport, in display order.
    pub visible_items: Range<usize>,
    /// First visible row.
    pub first_row: usize,
    /// Rows that fit in the viewport.
    pub rows_per_page: usize,
    /// Rows hidden above the viewport.
    pub rows_above: usize,
    /// Rows hidden below the viewport.
    pub rows_below: usize,
    /// Total rows of content.
    pub total_rows: usize,
}

impl GridPageInfo {
    pub fn empty() -> Self {
        Self {
            visible_items: 0..0,
            first_row: 0,
            rows_per_page: 0,
            rows_above: 0,
            rows_below: 0,
            total_rows: 0,
        }
    }

    /// Whether the unseen content below the viewport is within `threshold`
    /// visible lengths of the end.
    pub fn is_near_end(&self, threshold: f32) -> bool {
        if self.rows_per_page == 0 {
            return false;
        }
        (self.rows_below as f32) <= threshold * self.rows_per_page as f32
    }
}

/// Scroll state for a grid of `total_items` laid out in `columns` columns.
#[derive(Debug, Clone)]
pub struct GridPage {
    total_items: usize,
    columns: usize,
    scroll_row: usize,
}

impl GridPage {
    pub fn new(total_items: usize, columns: usize) -> Self {
        Self {
            total_items,
            columns: columns.max(1),
            scroll_row: 0,
        }
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn total_items(&self) -> usize {
        self.total_items
    }

    pub fn scroll_row(&self) -> usize {
        self.scroll_row
    }

    pub fn total_rows(&self) -> usize {
        self.total_items.div_ceil(self.columns)
    }

    pub fn row_of(&self, item_idx: usize) -> usize {
        item_idx / self.columns
    }

    /// Update the item count, clamping the scroll row if content shrank.
    pub fn set_total_items(&mut self, total_items: usize) {
        self.total_items = total_items;
        let last_row = self.total_rows().saturating_sub(1);
        if self.scroll_row > last_row {
            self.scroll_row = last_row;
        }
    }

    /// Rebuild the viewport for a new column count, keeping `anchor` visible.
    ///
    /// Row positions depend on the column count, so the old scroll row is
    /// meaningless afterwards; it is recomputed from scratch.
    pub fn relayout(&mut self, columns: usize, anchor: Option<usize>, viewport_rows: usize) {
        *self = Self::new(self.total_items, columns);
        if let Some(idx) = anchor {
            self.scroll_to_visible(idx, viewport_rows);
        }
    }

    pub fn get_page_info(&self, viewport_rows: usize) -> GridPageInfo {
        if self.total_items == 0 || viewport_rows == 0 {
            return GridPageInfo::empty();
        }

        let total_rows = self.total_rows();
        let first_row = self.scroll_row.min(total_rows.saturating_sub(1));
        let end_row = (first_row + viewport_rows).min(total_rows);

        let first_item = first_row * self.columns;
        let end_item = (end_row * self.columns).min(self.total_items);

        GridPageInfo {
            visible_items: first_item..end_item,
            first_row,
            rows_per_page: viewport_rows,
            rows_above: first_row,
            rows_below: total_rows - end_row,
            total_rows,
        }
    }

    /// Scroll the minimum amount needed to bring `item_idx` into view.
    pub fn scroll_to_visible(&mut self, item_idx: usize, viewport_rows: usize) {
        if viewport_rows == 0 {
            return;
        }
        let row = self.row_of(item_idx);
        if row < self.scroll_row {
            self.scroll_row = row;
        } else if row >= self.scroll_row + viewport_rows {
            self.scroll_row = row + 1 - viewport_rows;
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_items == 0
    }
}

impl Default for GridPage {
    fn default() -> Self {
        Self::new(0, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_grid() {
        let page = GridPage::new(0, 3);
        let info = page.get_page_info(4);
        assert_eq!(info, GridPageInfo::empty());
        assert!(!info.is_near_end(0.2));
    }

    #[test]
    fn test_first_page_of_twenty_items_in_four_columns() {
        let page = GridPage::new(20, 4);
        let info = page.get_page_info(3);
        assert_eq!(info.total_rows, 5);
        assert_eq!(info.visible_items, 0..12);
        assert_eq!(info.rows_above, 0);
        assert_eq!(info.rows_below, 2);
        assert!(!info.is_near_end(0.2));
    }

    #[test]
    fn test_partial_last_row() {
        let mut page = GridPage::new(10, 3);
        page.scroll_to_visible(9, 2);
        let info = page.get_page_info(2);
        assert_eq!(info.first_row, 2);
        assert_eq!(info.visible_items, 6..10);
        assert_eq!(info.rows_below, 0);
        assert!(info.is_near_end(0.2));
    }

    #[test]
    fn test_near_end_threshold_scales_with_viewport() {
        let mut page = GridPage::new(40, 2);
        // 20 rows, viewport of 10 rows: near end when at most 2 rows remain below.
        page.scroll_to_visible(31, 10);
        let info = page.get_page_info(10);
        assert_eq!(info.rows_below, 4);
        assert!(!info.is_near_end(0.2));

        page.scroll_to_visible(35, 10);
        let info = page.get_page_info(10);
        assert_eq!(info.rows_below, 2);
        assert!(info.is_near_end(0.2));
    }

    #[test]
    fn test_content_shorter_than_viewport_is_near_end() {
        let page = GridPage::new(4, 4);
        assert!(page.get_page_info(10).is_near_end(0.2));
    }

    #[test]
    fn test_scroll_up_to_visible() {
        let mut page = GridPage::new(40, 4);
        page.scroll_to_visible(39, 3);
        assert_eq!(page.scroll_row(), 7);
        page.scroll_to_visible(4, 3);
        assert_eq!(page.scroll_row(), 1);
    }

    #[test]
    fn test_relayout_recomputes_scroll_for_new_columns() {
        let mut page = GridPage::new(40, 2);
        page.scroll_to_visible(30, 4);
        assert_eq!(page.scroll_row(), 12);

        page.relayout(4, Some(30), 4);
        assert_eq!(page.columns(), 4);
        assert_eq!(page.scroll_row(), 4);
        assert!(page.get_page_info(4).visible_items.contains(&30));
    }

    #[test]
    fn test_set_total_items_clamps_scroll() {
        let mut page = GridPage::new(40, 4);
        page.scroll_to_visible(39, 2);
        page.set_total_items(8);
        assert_eq!(page.scroll_row(), 1);
    }
}
