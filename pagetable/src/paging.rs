//! Paging state and the facts derived from it.

use std::ops::Range;

/// Number of pages needed to show `total_rows`, never less than one.
///
/// `rows_per_page` of zero is treated as one.
pub fn page_count(total_rows: usize, rows_per_page: usize) -> usize {
    total_rows.div_ceil(rows_per_page.max(1)).max(1)
}

/// Index range of the rows shown on the one-based `page`.
///
/// Pages past the end yield an empty range anchored at `total_rows`.
pub fn page_range(page: usize, rows_per_page: usize, total_rows: usize) -> Range<usize> {
    let start = page
        .saturating_sub(1)
        .saturating_mul(rows_per_page)
        .min(total_rows);
    let end = start.saturating_add(rows_per_page).min(total_rows);
    start..end
}

/// Mutable paging position of one table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingState {
    rows_per_page: usize,
    current_page: usize,
}

impl PagingState {
    /// Create state at `current_page`, clamped into `[1, page_count]`.
    pub fn new(rows_per_page: usize, current_page: usize, total_rows: usize) -> Self {
        let rows_per_page = rows_per_page.max(1);
        let last = page_count(total_rows, rows_per_page);
        Self {
            rows_per_page,
            current_page: current_page.clamp(1, last),
        }
    }

    pub fn rows_per_page(&self) -> usize {
        self.rows_per_page
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self, total_rows: usize) -> usize {
        page_count(total_rows, self.rows_per_page)
    }

    /// Rows of the current page.
    pub fn visible_range(&self, total_rows: usize) -> Range<usize> {
        page_range(self.current_page, self.rows_per_page, total_rows)
    }

    pub fn is_last_page(&self, total_rows: usize) -> bool {
        self.current_page >= self.page_count(total_rows)
    }

    /// Change the page size and go back to the first page.
    pub fn set_rows_per_page(&mut self, rows: usize) {
        self.rows_per_page = rows.max(1);
        self.current_page = 1;
    }

    /// Move to the previous page if available.
    pub fn prev_page(&mut self) -> bool {
        if self.current_page > 1 {
            self.current_page -= 1;
            true
        } else {
            false
        }
    }

    /// Move to the next page if available.
    pub fn next_page(&mut self, total_rows: usize) -> bool {
        if self.current_page < self.page_count(total_rows) {
            self.current_page += 1;
            true
        } else {
            false
        }
    }

    /// Jump to `page` if it exists.
    pub fn go_to(&mut self, page: usize, total_rows: usize) -> bool {
        if (1..=self.page_count(total_rows)).contains(&page) {
            self.current_page = page;
            true
        } else {
            false
        }
    }
}
