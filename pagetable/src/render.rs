//! Node builders for the table and its pager.
//!
//! Everything here is a pure function of paging state and data. The
//! controller in [`crate::table`] decides when to push the results onto
//! surfaces.

use crate::element::{Control, Element};
use crate::paging::PagingState;
use crate::value::Row;

/// ID of the rows-per-page selector.
pub const ITEMS_PER_PAGE_ID: &str = "itemsPerPage";
/// ID of the "previous page" button.
pub const PREV_BUTTON_ID: &str = "prevButton";
/// ID of the "next page" button.
pub const NEXT_BUTTON_ID: &str = "nextButton";
/// Prefix of page button IDs, followed by the zero-based page index.
pub const PAGE_BUTTON_PREFIX: &str = "page-";
/// ID of the node holding the navigation buttons.
pub const BUTTONS_CONTAINER_ID: &str = "container";

pub const PREV_LABEL: &str = "<<";
pub const NEXT_LABEL: &str = ">>";

/// ID of the button for the one-based `page`.
pub fn page_button_id(page: usize) -> String {
    format!("{PAGE_BUTTON_PREFIX}{}", page.saturating_sub(1))
}

/// Column captions: the configured header if any, else the first row's keys.
///
/// Returns `None` when neither is available, in which case no header is drawn.
pub fn header_captions(header: &[String], rows: &[Row]) -> Option<Vec<String>> {
    if !header.is_empty() {
        return Some(header.to_vec());
    }
    rows.first()
        .filter(|row| !row.is_empty())
        .map(|row| row.keys().map(str::to_string).collect())
}

/// `thead` holding a single row of header cells.
pub fn render_header(captions: &[String]) -> Element {
    let row = Element::row().children(captions.iter().map(Element::header_cell));
    Element::head().child(row)
}

/// One body row. Cells follow the row's own key order; rows narrower than
/// `min_cells` are padded with empty cells.
pub fn render_row(row: &Row, min_cells: usize) -> Element {
    let padding = min_cells.saturating_sub(row.len());
    let cells = row
        .values()
        .map(|v| Element::cell(v.to_string()))
        .chain(std::iter::repeat_with(|| Element::cell("")).take(padding));
    Element::row().children(cells)
}

/// Rows of the current page.
pub fn render_body(rows: &[Row], state: &PagingState, min_cells: usize) -> Vec<Element> {
    rows[state.visible_range(rows.len())]
        .iter()
        .map(|row| render_row(row, min_cells))
        .collect()
}

/// Rows-per-page selector with the current size selected.
pub fn render_page_size_selector(options: &[usize], rows_per_page: usize) -> Element {
    let options = options.iter().map(|&size| {
        Element::option(size.to_string()).selected(size == rows_per_page)
    });
    Element::select()
        .id(ITEMS_PER_PAGE_ID)
        .value(rows_per_page.to_string())
        .control(Control::PageSize)
        .children(options)
}

/// Previous button, one button per page, next button.
pub fn render_page_buttons(state: &PagingState, page_count: usize) -> Element {
    let prev = Element::button(PREV_LABEL)
        .id(PREV_BUTTON_ID)
        .control(Control::Previous);
    let next = Element::button(NEXT_LABEL)
        .id(NEXT_BUTTON_ID)
        .control(Control::Next);

    let pages = (1..=page_count).map(|page| {
        Element::button(page.to_string())
            .id(page_button_id(page))
            .value(page.to_string())
            .control(Control::Page(page))
            .active(page == state.current_page())
    });

    Element::container()
        .id(BUTTONS_CONTAINER_ID)
        .child(prev)
        .children(pages)
        .child(next)
}

/// Full pager: selector followed by the navigation buttons.
pub fn render_pager(options: &[usize], state: &PagingState, page_count: usize) -> Vec<Element> {
    vec![
        render_page_size_selector(options, state.rows_per_page()),
        render_page_buttons(state, page_count),
    ]
}
