use pagetable::render::{ITEMS_PER_PAGE_ID, NEXT_BUTTON_ID, PREV_BUTTON_ID};
use pagetable::{
    ConfigError, Control, Element, ElementKind, Error, EventResult, MemorySurface,
    PaginatedTable, Row, TableBuilder, TableConfig, TableEvent,
};

type Table = PaginatedTable<MemorySurface>;

fn rows(n: usize) -> Vec<Row> {
    (0..n)
        .map(|i| Row::new().with("id", i).with("name", format!("row {i}")))
        .collect()
}

fn table(n: usize, rows_per_page: usize) -> Table {
    table_at(n, rows_per_page, 1)
}

fn table_at(n: usize, rows_per_page: usize, page: usize) -> Table {
    PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().rows_per_page(rows_per_page).current_page(page),
        rows(n),
    )
    .unwrap()
}

/// `id` cell of every body row on the table surface.
fn body_ids(table: &Table) -> Vec<String> {
    table
        .table_surface()
        .nodes()
        .iter()
        .filter(|n| n.kind == ElementKind::Row)
        .map(|r| r.child_elements()[0].text().unwrap().to_string())
        .collect()
}

fn expected_ids(range: std::ops::Range<usize>) -> Vec<String> {
    range.map(|i| i.to_string()).collect()
}

fn page_buttons(table: &Table) -> Vec<&Element> {
    let container = table.pager_surface().find("container").unwrap();
    container
        .child_elements()
        .iter()
        .filter(|b| matches!(b.control, Some(Control::Page(_))))
        .collect()
}

fn active_pages(table: &Table) -> Vec<usize> {
    page_buttons(table)
        .iter()
        .filter(|b| b.active)
        .map(|b| b.value.as_deref().unwrap().parse().unwrap())
        .collect()
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_construct_renders_first_page() {
    let table = table(45, 10);

    assert_eq!(table.page_count(), 5);
    assert_eq!(table.current_page(), 1);
    assert_eq!(body_ids(&table), expected_ids(0..10));
    assert_eq!(active_pages(&table), vec![1]);
}

#[test]
fn test_construct_rejects_small_page_size() {
    let err = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().rows_per_page(2),
        rows(10),
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::RowsPerPageTooSmall {
            rows_per_page: 2,
            min: 3
        })
    );
}

#[test]
fn test_construct_rejects_page_zero() {
    let err = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().current_page(0),
        rows(10),
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::CurrentPageTooSmall(0))
    );
}

#[test]
fn test_construct_rejects_page_size_options_below_minimum() {
    let err = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().page_size_options([1, 2, 10]),
        rows(10),
    )
    .unwrap_err();

    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::PageSizeOptionTooSmall { size: 1, min: 3 })
    );
}

#[test]
fn test_construct_rejects_missing_surfaces() {
    let err = TableBuilder::<MemorySurface, MemorySurface>::new()
        .pager_surface(MemorySurface::new())
        .rows(rows(5))
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::MissingTableSurface)
    );

    let err = TableBuilder::<MemorySurface, MemorySurface>::new()
        .table_surface(MemorySurface::new())
        .build()
        .unwrap_err();
    assert_eq!(
        err,
        Error::InvalidConfiguration(ConfigError::MissingPagerSurface)
    );
}

#[test]
fn test_failed_construction_leaves_surfaces_untouched() {
    let mut table_surface = MemorySurface::new();
    let mut pager_surface = MemorySurface::new();

    let failed = PaginatedTable::new(
        &mut table_surface,
        &mut pager_surface,
        TableConfig::new().rows_per_page(1),
        rows(10),
    )
    .is_err();

    assert!(failed);
    assert_eq!(table_surface.clear_count(), 0);
    assert_eq!(pager_surface.clear_count(), 0);
    assert!(table_surface.is_empty());
    assert!(pager_surface.is_empty());
}

#[test]
fn test_construct_clamps_page_past_end() {
    let table = table_at(12, 10, 7);
    assert_eq!(table.current_page(), 2);
    assert_eq!(body_ids(&table), expected_ids(10..12));
}

#[test]
fn test_construct_at_later_page() {
    let table = table_at(45, 10, 3);
    assert_eq!(body_ids(&table), expected_ids(20..30));
    assert_eq!(active_pages(&table), vec![3]);
}

// ============================================================================
// Header
// ============================================================================

#[test]
fn test_header_uses_configured_captions() {
    let table = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().header(["ID", "Name"]),
        rows(3),
    )
    .unwrap();

    let head = &table.table_surface().nodes()[0];
    assert_eq!(head.kind, ElementKind::Head);
    let captions: Vec<&str> = head.child_elements()[0]
        .child_elements()
        .iter()
        .map(|c| c.text().unwrap())
        .collect();
    assert_eq!(captions, vec!["ID", "Name"]);
}

#[test]
fn test_header_falls_back_to_first_row_keys() {
    let table = table(3, 10);
    assert_eq!(
        table.header().unwrap(),
        &["id".to_string(), "name".to_string()]
    );
}

#[test]
fn test_no_header_without_captions_or_data() {
    let table = table(0, 10);
    assert!(table.header().is_none());
    assert!(table.table_surface().is_empty());
    assert_eq!(table.page_count(), 1);
    assert_eq!(active_pages(&table), vec![1]);
}

// ============================================================================
// Navigation
// ============================================================================

#[test]
fn test_forty_five_rows_scenario() {
    let mut table = table(45, 10);

    assert_eq!(table.handle(TableEvent::GoToPage(5)), EventResult::Consumed);
    assert_eq!(body_ids(&table), expected_ids(40..45));

    assert_eq!(
        table.handle(TableEvent::PageSizeChanged(20)),
        EventResult::Consumed
    );
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.page_count(), 3);
    assert_eq!(body_ids(&table), expected_ids(0..20));
    assert_eq!(page_buttons(&table).len(), 3);
}

#[test]
fn test_single_page_navigation_is_noop() {
    let mut table = table(2, 10);
    assert_eq!(table.page_count(), 1);

    let before = table.table_surface().clone();
    assert_eq!(table.handle(TableEvent::Next), EventResult::Ignored);
    assert_eq!(table.handle(TableEvent::Previous), EventResult::Ignored);
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.table_surface(), &before);
}

#[test]
fn test_boundary_navigation_keeps_state() {
    let mut table = table(45, 10);
    let state = table.state();
    assert_eq!(table.on_previous(), EventResult::Ignored);
    assert_eq!(table.state(), state);

    table.on_page_clicked(5);
    let state = table.state();
    assert_eq!(table.on_next(), EventResult::Ignored);
    assert_eq!(table.state(), state);
}

#[test]
fn test_next_and_previous_rerender_body() {
    let mut table = table(45, 10);

    table.handle(TableEvent::Next);
    assert_eq!(body_ids(&table), expected_ids(10..20));
    assert_eq!(active_pages(&table), vec![2]);

    table.handle(TableEvent::Previous);
    assert_eq!(body_ids(&table), expected_ids(0..10));
    assert_eq!(active_pages(&table), vec![1]);
}

#[test]
fn test_round_trip_returns_to_start() {
    for start in 1..=5 {
        let mut table = table_at(45, 10, start);
        let original = table.visible_rows().to_vec();
        let steps = table.page_count() - start;

        for _ in 0..steps {
            table.handle(TableEvent::Next);
        }
        assert_eq!(table.current_page(), table.page_count());
        for _ in 0..steps {
            table.handle(TableEvent::Previous);
        }

        assert_eq!(table.current_page(), start);
        assert_eq!(table.visible_rows(), original.as_slice());
    }
}

#[test]
fn test_exactly_one_active_button_after_every_event() {
    let mut table = table(95, 10);
    let events = [
        TableEvent::Next,
        TableEvent::Next,
        TableEvent::GoToPage(9),
        TableEvent::Next,
        TableEvent::Next,
        TableEvent::PageSizeChanged(50),
        TableEvent::Next,
        TableEvent::Previous,
        TableEvent::Previous,
    ];

    for event in events {
        table.handle(event);
        assert_eq!(active_pages(&table), vec![table.current_page()], "{event:?}");
        let ids = body_ids(&table);
        let start = (table.current_page() - 1) * table.rows_per_page();
        assert_eq!(ids, expected_ids(start..start + ids.len()));
    }
}

#[test]
fn test_invalid_page_requests_are_ignored() {
    let mut table = table(45, 10);
    assert_eq!(table.handle(TableEvent::GoToPage(0)), EventResult::Ignored);
    assert_eq!(table.handle(TableEvent::GoToPage(6)), EventResult::Ignored);
    assert_eq!(
        table.handle(TableEvent::PageSizeChanged(7)),
        EventResult::Ignored
    );
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.rows_per_page(), 10);
}

// ============================================================================
// Rendering
// ============================================================================

#[test]
fn test_rerender_is_idempotent() {
    let mut table = table_at(45, 10, 3);
    let table_before = table.table_surface().nodes().to_vec();
    let pager_before = table.pager_surface().nodes().to_vec();

    table.render();
    assert_eq!(table.table_surface().nodes(), table_before.as_slice());
    assert_eq!(table.pager_surface().nodes(), pager_before.as_slice());

    table.handle(TableEvent::GoToPage(3));
    assert_eq!(table.table_surface().nodes(), table_before.as_slice());
    assert_eq!(table.pager_surface().nodes(), pager_before.as_slice());
}

#[test]
fn test_every_event_redraws_from_clear() {
    let mut table = table(45, 10);
    assert_eq!(table.table_surface().clear_count(), 1);

    table.handle(TableEvent::Next);
    table.handle(TableEvent::Previous);
    table.handle(TableEvent::Previous);

    assert_eq!(table.table_surface().clear_count(), 3);
    assert_eq!(table.pager_surface().clear_count(), 3);
}

#[test]
fn test_pager_layout() {
    let table = table_at(25, 10, 2);
    let pager = table.pager_surface().nodes();
    assert_eq!(pager.len(), 2);

    let selector = &pager[0];
    assert_eq!(selector.id.as_deref(), Some(ITEMS_PER_PAGE_ID));
    assert_eq!(selector.value.as_deref(), Some("10"));
    let selected: Vec<&str> = selector
        .child_elements()
        .iter()
        .filter(|o| o.selected)
        .map(|o| o.text().unwrap())
        .collect();
    assert_eq!(selected, vec!["10"]);

    let buttons = pager[1].child_elements();
    let ids: Vec<&str> = buttons.iter().map(|b| b.id.as_deref().unwrap()).collect();
    assert_eq!(
        ids,
        vec![PREV_BUTTON_ID, "page-0", "page-1", "page-2", NEXT_BUTTON_ID]
    );
    assert!(buttons.iter().all(Element::is_interactive));
}

#[test]
fn test_short_rows_are_padded_with_empty_cells() {
    let data = vec![
        Row::new().with("a", 1).with("b", 2).with("c", 3),
        Row::new().with("a", 4),
    ];
    let table = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new(),
        data,
    )
    .unwrap();

    let short = &table.table_surface().nodes()[2];
    let texts: Vec<&str> = short
        .child_elements()
        .iter()
        .map(|c| c.text().unwrap())
        .collect();
    assert_eq!(texts, vec!["4", "", ""]);
}

// ============================================================================
// Triggering Controls
// ============================================================================

#[test]
fn test_trigger_page_size_selector() {
    let mut table = table(120, 10);
    table.handle(TableEvent::GoToPage(4));

    assert_eq!(
        table.trigger(Control::PageSize, Some("50")),
        EventResult::Consumed
    );
    assert_eq!(table.rows_per_page(), 50);
    assert_eq!(table.current_page(), 1);
    assert_eq!(table.page_count(), 3);
}

#[test]
fn test_trigger_rejects_unreadable_page_size() {
    let mut table = table(120, 10);
    assert_eq!(
        table.trigger(Control::PageSize, Some("lots")),
        EventResult::Ignored
    );
    assert_eq!(table.trigger(Control::PageSize, None), EventResult::Ignored);
    assert_eq!(table.rows_per_page(), 10);
}

#[test]
fn test_trigger_rendered_controls() {
    let mut table = table(45, 10);

    let control = table
        .pager_surface()
        .find("page-3")
        .and_then(|b| b.control)
        .unwrap();
    assert_eq!(table.trigger(control, None), EventResult::Consumed);
    assert_eq!(table.current_page(), 4);

    let next = table.pager_surface().find(NEXT_BUTTON_ID).unwrap().control.unwrap();
    table.trigger(next, None);
    assert_eq!(table.current_page(), 5);
    assert_eq!(table.trigger(next, None), EventResult::Ignored);
}

#[test]
fn test_custom_page_size_is_offered_by_selector() {
    let table = PaginatedTable::new(
        MemorySurface::new(),
        MemorySurface::new(),
        TableConfig::new().rows_per_page(5),
        rows(12),
    )
    .unwrap();

    assert_eq!(table.page_sizes(), &[5, 10, 20, 50, 100]);
    assert_eq!(table.page_count(), 3);
}
