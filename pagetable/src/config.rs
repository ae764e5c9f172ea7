//! Table configuration.

use crate::error::ConfigError;

/// Smallest rows-per-page a table accepts at construction.
pub const MIN_ROWS_PER_PAGE: usize = 3;

/// Page sizes offered by the selector unless configured otherwise.
pub const DEFAULT_PAGE_SIZE_OPTIONS: [usize; 4] = [10, 20, 50, 100];

/// Per-table configuration, fixed for the lifetime of the table.
///
/// `rows_per_page` and `current_page` are only the *initial* paging state;
/// the table owns the live state after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableConfig {
    /// Sizes offered by the rows-per-page selector.
    pub page_size_options: Vec<usize>,

    /// Initial rows shown per page.
    pub rows_per_page: usize,

    /// Initial one-based page.
    pub current_page: usize,

    /// Column captions. When empty, the first row's keys are used.
    pub header: Vec<String>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size_options: DEFAULT_PAGE_SIZE_OPTIONS.to_vec(),
            rows_per_page: DEFAULT_PAGE_SIZE_OPTIONS[0],
            current_page: 1,
            header: Vec::new(),
        }
    }
}

impl TableConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial rows per page.
    pub fn rows_per_page(mut self, rows: usize) -> Self {
        self.rows_per_page = rows;
        self
    }

    /// Set the initial page.
    pub fn current_page(mut self, page: usize) -> Self {
        self.current_page = page;
        self
    }

    /// Set the column captions.
    pub fn header<I, S>(mut self, header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.header = header.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the page sizes offered by the selector.
    pub fn page_size_options(mut self, options: impl IntoIterator<Item = usize>) -> Self {
        self.page_size_options = options.into_iter().collect();
        self
    }

    /// Check the construction invariants.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows_per_page < MIN_ROWS_PER_PAGE {
            return Err(ConfigError::RowsPerPageTooSmall {
                rows_per_page: self.rows_per_page,
                min: MIN_ROWS_PER_PAGE,
            });
        }
        if self.current_page < 1 {
            return Err(ConfigError::CurrentPageTooSmall(self.current_page));
        }
        if self.page_size_options.is_empty() {
            return Err(ConfigError::NoPageSizeOptions);
        }
        if let Some(&size) = self.page_size_options.iter().find(|&&s| s < MIN_ROWS_PER_PAGE) {
            return Err(ConfigError::PageSizeOptionTooSmall {
                size,
                min: MIN_ROWS_PER_PAGE,
            });
        }
        Ok(())
    }

    /// Sizes the selector lists: the configured options plus the initial
    /// `rows_per_page`, sorted and deduplicated.
    pub fn selector_options(&self) -> Vec<usize> {
        let mut options = self.page_size_options.clone();
        options.push(self.rows_per_page);
        options.sort_unstable();
        options.dedup();
        options
    }
}
