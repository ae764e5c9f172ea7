//! Table interaction events.

use crate::element::Control;

/// A user interaction the table reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TableEvent {
    /// A new rows-per-page value was chosen.
    PageSizeChanged(usize),
    /// The "previous page" control was clicked.
    Previous,
    /// The "next page" control was clicked.
    Next,
    /// A numbered page control was clicked (one-based).
    GoToPage(usize),
}

impl TableEvent {
    /// Build the event for a triggered control.
    ///
    /// `value` is the control's current value as reported by the surface;
    /// only the page-size selector reads it. Returns `None` when the
    /// selector reports something that is not a page size.
    pub fn from_control(control: Control, value: Option<&str>) -> Option<Self> {
        match control {
            Control::PageSize => value
                .and_then(|v| v.trim().parse().ok())
                .map(TableEvent::PageSizeChanged),
            Control::Previous => Some(TableEvent::Previous),
            Control::Next => Some(TableEvent::Next),
            Control::Page(page) => Some(TableEvent::GoToPage(page)),
        }
    }
}

/// Result of handling an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventResult {
    /// Nothing changed; the event was a boundary no-op or invalid.
    Ignored,
    /// State changed and the table was re-rendered.
    Consumed,
}
