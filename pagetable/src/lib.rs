//! Paginated data tables rendered onto abstract node surfaces.
//!
//! A [`PaginatedTable`] owns two [`Surface`]s: one receives the header and
//! the rows of the current page, the other the pager controls. Hosts feed
//! user interaction back through [`PaginatedTable::trigger`] or
//! [`PaginatedTable::handle`].

pub mod config;
pub mod element;
pub mod error;
pub mod event;
pub mod paging;
pub mod render;
pub mod surface;
pub mod table;
pub mod text;
pub mod value;

pub use config::{TableConfig, DEFAULT_PAGE_SIZE_OPTIONS, MIN_ROWS_PER_PAGE};
pub use element::{Content, Control, Element, ElementKind};
pub use error::{ConfigError, Error, Result};
pub use event::{EventResult, TableEvent};
pub use paging::{page_count, page_range, PagingState};
pub use surface::{MemorySurface, Surface};
pub use table::{PaginatedTable, TableBuilder};
pub use value::{rows_from_json, CellValue, Row};
