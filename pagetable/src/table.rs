//! The paginated table controller.

use log::{debug, trace, warn};

use crate::config::TableConfig;
use crate::element::Control;
use crate::error::{ConfigError, Result};
use crate::event::{EventResult, TableEvent};
use crate::paging::PagingState;
use crate::render;
use crate::surface::Surface;
use crate::value::Row;

/// A data table split into pages, drawn onto two surfaces.
///
/// The table surface receives the header and the rows of the current page;
/// the pager surface receives the rows-per-page selector and the navigation
/// buttons. Every state change redraws both surfaces from scratch, so what
/// is shown is always a function of [`PagingState`] alone.
///
/// ```
/// use pagetable::{MemorySurface, PaginatedTable, Row, TableConfig, TableEvent};
///
/// let rows: Vec<Row> = (0..45).map(|i| Row::new().with("id", i)).collect();
/// let mut table = PaginatedTable::new(
///     MemorySurface::new(),
///     MemorySurface::new(),
///     TableConfig::new().rows_per_page(10),
///     rows,
/// )
/// .unwrap();
///
/// assert_eq!(table.page_count(), 5);
/// table.handle(TableEvent::Next);
/// assert_eq!(table.current_page(), 2);
/// ```
#[derive(Debug)]
pub struct PaginatedTable<T: Surface, P: Surface = T> {
    table_surface: T,
    pager_surface: P,
    config: TableConfig,
    /// Sizes listed by the selector.
    page_sizes: Vec<usize>,
    /// Resolved column captions, `None` when nothing can label the columns.
    header: Option<Vec<String>>,
    rows: Vec<Row>,
    state: PagingState,
}

impl<T: Surface, P: Surface> PaginatedTable<T, P> {
    /// Build a table and draw it.
    pub fn new(table_surface: T, pager_surface: P, config: TableConfig, rows: Vec<Row>) -> Result<Self> {
        Self::builder()
            .table_surface(table_surface)
            .pager_surface(pager_surface)
            .config(config)
            .rows(rows)
            .build()
    }

    pub fn builder() -> TableBuilder<T, P> {
        TableBuilder::new()
    }

    // -------------------------------------------------------------------------
    // State access
    // -------------------------------------------------------------------------

    pub fn state(&self) -> PagingState {
        self.state
    }

    pub fn rows_per_page(&self) -> usize {
        self.state.rows_per_page()
    }

    pub fn current_page(&self) -> usize {
        self.state.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.state.page_count(self.rows.len())
    }

    pub fn total_rows(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Rows shown on the current page.
    pub fn visible_rows(&self) -> &[Row] {
        &self.rows[self.state.visible_range(self.rows.len())]
    }

    /// Column captions in display order, if any.
    pub fn header(&self) -> Option<&[String]> {
        self.header.as_deref()
    }

    pub fn config(&self) -> &TableConfig {
        &self.config
    }

    /// Sizes offered by the rows-per-page selector.
    pub fn page_sizes(&self) -> &[usize] {
        &self.page_sizes
    }

    pub fn table_surface(&self) -> &T {
        &self.table_surface
    }

    pub fn pager_surface(&self) -> &P {
        &self.pager_surface
    }

    /// Tear the table down, handing the surfaces back.
    pub fn into_surfaces(self) -> (T, P) {
        (self.table_surface, self.pager_surface)
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Clear both surfaces and draw the current state.
    pub fn render(&mut self) {
        let total = self.rows.len();
        let page_count = self.state.page_count(total);
        debug!(
            "Rendering page {}/{} ({} rows per page, {} rows)",
            self.state.current_page(),
            page_count,
            self.state.rows_per_page(),
            total
        );

        self.pager_surface.clear();
        self.table_surface.clear();

        let width = match &self.header {
            Some(captions) => {
                self.table_surface.append(render::render_header(captions));
                captions.len()
            }
            None => 0,
        };
        for row in render::render_body(&self.rows, &self.state, width) {
            self.table_surface.append(row);
        }

        for node in render::render_pager(&self.page_sizes, &self.state, page_count) {
            self.pager_surface.append(node);
        }
    }

    // -------------------------------------------------------------------------
    // Events
    // -------------------------------------------------------------------------

    /// Apply an event and redraw if it changed anything.
    pub fn handle(&mut self, event: TableEvent) -> EventResult {
        trace!("Table event: {:?}", event);
        match event {
            TableEvent::PageSizeChanged(size) => self.on_page_size_changed(size),
            TableEvent::Previous => self.on_previous(),
            TableEvent::Next => self.on_next(),
            TableEvent::GoToPage(page) => self.on_page_clicked(page),
        }
    }

    /// Entry point for surfaces: a control was triggered with its current value.
    pub fn trigger(&mut self, control: Control, value: Option<&str>) -> EventResult {
        match TableEvent::from_control(control, value) {
            Some(event) => self.handle(event),
            None => {
                warn!("Ignoring {:?} with unreadable value {:?}", control, value);
                EventResult::Ignored
            }
        }
    }

    pub fn on_page_size_changed(&mut self, size: usize) -> EventResult {
        if !self.page_sizes.contains(&size) {
            warn!("Ignoring page size {} not offered by the selector", size);
            return EventResult::Ignored;
        }
        self.state.set_rows_per_page(size);
        debug!("Rows per page set to {}", size);
        self.render();
        EventResult::Consumed
    }

    pub fn on_previous(&mut self) -> EventResult {
        if !self.state.prev_page() {
            return EventResult::Ignored;
        }
        self.render();
        EventResult::Consumed
    }

    pub fn on_next(&mut self) -> EventResult {
        if !self.state.next_page(self.rows.len()) {
            return EventResult::Ignored;
        }
        self.render();
        EventResult::Consumed
    }

    pub fn on_page_clicked(&mut self, page: usize) -> EventResult {
        if !self.state.go_to(page, self.rows.len()) {
            warn!("Ignoring page {} outside 1..={}", page, self.page_count());
            return EventResult::Ignored;
        }
        self.render();
        EventResult::Consumed
    }
}

/// Collects the parts of a [`PaginatedTable`] and validates them on
/// [`build`](TableBuilder::build).
#[derive(Debug)]
pub struct TableBuilder<T, P> {
    table_surface: Option<T>,
    pager_surface: Option<P>,
    config: TableConfig,
    rows: Vec<Row>,
}

impl<T, P> Default for TableBuilder<T, P> {
    fn default() -> Self {
        Self {
            table_surface: None,
            pager_surface: None,
            config: TableConfig::default(),
            rows: Vec::new(),
        }
    }
}

impl<T: Surface, P: Surface> TableBuilder<T, P> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn table_surface(mut self, surface: T) -> Self {
        self.table_surface = Some(surface);
        self
    }

    pub fn pager_surface(mut self, surface: P) -> Self {
        self.pager_surface = Some(surface);
        self
    }

    pub fn config(mut self, config: TableConfig) -> Self {
        self.config = config;
        self
    }

    pub fn rows(mut self, rows: impl IntoIterator<Item = Row>) -> Self {
        self.rows = rows.into_iter().collect();
        self
    }

    /// Validate, construct and draw the table.
    ///
    /// Surfaces are left untouched when validation fails.
    pub fn build(self) -> Result<PaginatedTable<T, P>> {
        self.config.validate()?;
        let table_surface = self.table_surface.ok_or(ConfigError::MissingTableSurface)?;
        let pager_surface = self.pager_surface.ok_or(ConfigError::MissingPagerSurface)?;

        let config = self.config;
        let rows = self.rows;
        let state = PagingState::new(config.rows_per_page, config.current_page, rows.len());
        if state.current_page() != config.current_page {
            warn!(
                "Initial page {} is past the last page, showing page {}",
                config.current_page,
                state.current_page()
            );
        }

        let mut table = PaginatedTable {
            table_surface,
            pager_surface,
            page_sizes: config.selector_options(),
            header: render::header_captions(&config.header, &rows),
            config,
            rows,
            state,
        };
        table.render();
        Ok(table)
    }
}
