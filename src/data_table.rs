//! Pager state for the table view.
//!
//! Tracks which page of the filtered/sorted rows is on screen and keeps it in
//! range when the number of matching rows changes.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut pager = PageState::new(rows.len());
//! pager.go_next();
//! let window = &rows[pager.visible_range()];
//! ```

use crate::constants::PAGE_SIZE;
use std::ops::Range;

/// Pagination state for a table
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageState {
    /// Current page (0-indexed)
    pub current_page: usize,
    /// Rows per page
    pub page_size: usize,
    /// Total number of rows after filtering
    pub total_rows: usize,
}

impl Default for PageState {
    fn default() -> Self {
        Self::new(0)
    }
}

impl PageState {
    pub fn new(total_rows: usize) -> Self {
        Self {
            current_page: 0,
            page_size: PAGE_SIZE,
            total_rows,
        }
    }

    /// Number of pages; an empty table still has one (empty) page
    pub fn total_pages(&self) -> usize {
        if self.total_rows == 0 || self.page_size == 0 {
            1
        } else {
            self.total_rows.div_ceil(self.page_size)
        }
    }

    pub fn last_page(&self) -> usize {
        self.total_pages().saturating_sub(1)
    }

    pub fn can_go_prev(&self) -> bool {
        self.current_page > 0
    }

    pub fn can_go_next(&self) -> bool {
        self.current_page < self.last_page()
    }

    pub fn go_first(&mut self) {
        self.current_page = 0;
    }

    pub fn go_prev(&mut self) {
        if self.can_go_prev() {
            self.current_page -= 1;
        }
    }

    pub fn go_next(&mut self) {
        if self.can_go_next() {
            self.current_page += 1;
        }
    }

    pub fn go_last(&mut self) {
        self.current_page = self.last_page();
    }

    /// Jump to `page`, clamped to the last page
    pub fn set_page(&mut self, page: usize) {
        self.current_page = page.min(self.last_page());
    }

    /// Record a new row total and pull the current page back into range.
    ///
    /// Returns true if the page had to move.
    pub fn set_total_rows(&mut self, total_rows: usize) -> bool {
        self.total_rows = total_rows;
        self.clamp()
    }

    /// Clamp the current page to the last valid page
    pub fn clamp(&mut self) -> bool {
        let last = self.last_page();
        if self.current_page > last {
            self.current_page = last;
            true
        } else {
            false
        }
    }

    /// Get the range of rows to display for current page
    pub fn visible_range(&self) -> Range<usize> {
        let start = (self.current_page * self.page_size).min(self.total_rows);
        let end = (start + self.page_size).min(self.total_rows);
        start..end
    }

    /// "Showing X-Y of Z" label for the pager footer
    pub fn summary(&self) -> String {
        let range = self.visible_range();
        let showing_start = if self.total_rows == 0 { 0 } else { range.start + 1 };
        format!(
            "Showing {}-{} of {}",
            showing_start, range.end, self.total_rows
        )
    }
}

/// Format row count with a compact suffix (e.g., "1.2K rows")
pub fn format_row_count(count: usize) -> String {
    let formatted = if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    };

    if count == 1 {
        format!("{} row", formatted)
    } else {
        format!("{} rows", formatted)
    }
}
