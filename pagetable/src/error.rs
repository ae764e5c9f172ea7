//! Error types

use thiserror::Error;

/// Why a table configuration was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("table surface should be provided")]
    MissingTableSurface,

    #[error("pager surface should be provided")]
    MissingPagerSurface,

    #[error("rows per page must be at least {min}, got {rows_per_page}")]
    RowsPerPageTooSmall { rows_per_page: usize, min: usize },

    #[error("current page must be at least 1, got {0}")]
    CurrentPageTooSmall(usize),

    #[error("at least one page size option is required")]
    NoPageSizeOptions,

    #[error("page size option {size} is below the minimum of {min}")]
    PageSizeOptionTooSmall { size: usize, min: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
