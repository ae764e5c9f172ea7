//! Plain-text rendering of surface contents.

use unicode_width::UnicodeWidthStr;

use crate::element::{Element, ElementKind};

pub fn display_width(s: &str) -> usize {
    s.width()
}

/// Pad `s` with spaces up to `width` display columns.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let pad = width.saturating_sub(display_width(s));
    let mut out = String::with_capacity(s.len() + pad);
    out.push_str(s);
    out.extend(std::iter::repeat_n(' ', pad));
    out
}

fn cell_texts(row: &Element) -> Vec<&str> {
    row.child_elements()
        .iter()
        .filter(|c| matches!(c.kind, ElementKind::Cell | ElementKind::HeaderCell))
        .map(|c| c.text().unwrap_or_default())
        .collect()
}

/// Lay table nodes out as aligned columns.
///
/// A `thead` becomes the first line followed by a rule; every top-level row
/// becomes one line. Columns are separated by ` | ` and padded to the
/// widest cell.
pub fn render_table(nodes: &[Element]) -> String {
    let mut header: Option<Vec<&str>> = None;
    let mut body: Vec<Vec<&str>> = Vec::new();

    for node in nodes {
        match node.kind {
            ElementKind::Head => {
                if let Some(row) = node.child_elements().first() {
                    header = Some(cell_texts(row));
                }
            }
            ElementKind::Row => body.push(cell_texts(node)),
            _ => {}
        }
    }

    let mut widths: Vec<usize> = Vec::new();
    for line in header.iter().chain(body.iter()) {
        for (i, text) in line.iter().enumerate() {
            let w = display_width(text);
            match widths.get_mut(i) {
                Some(max) => *max = (*max).max(w),
                None => widths.push(w),
            }
        }
    }

    let format_line = |cells: &[&str]| -> String {
        cells
            .iter()
            .zip(&widths)
            .map(|(text, &w)| pad_to_width(text, w))
            .collect::<Vec<_>>()
            .join(" | ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    if let Some(cells) = &header {
        lines.push(format_line(cells.as_slice()));
        let rule_width = widths.iter().sum::<usize>() + 3 * widths.len().saturating_sub(1);
        lines.push("-".repeat(rule_width));
    }
    lines.extend(body.iter().map(|cells| format_line(cells.as_slice())));
    lines.join("\n")
}

fn marked(text: &str, on: bool) -> String {
    if on {
        format!("[{text}]")
    } else {
        text.to_string()
    }
}

/// Render pager nodes on one line.
///
/// The selected page size and the active page are shown in brackets,
/// e.g. `[10] 20 50 100  << 1 [2] 3 >>`.
pub fn render_pager(nodes: &[Element]) -> String {
    let mut parts = Vec::new();
    for node in nodes {
        match node.kind {
            ElementKind::Select => {
                let options: Vec<String> = node
                    .child_elements()
                    .iter()
                    .map(|o| marked(o.text().unwrap_or_default(), o.selected))
                    .collect();
                parts.push(options.join(" "));
            }
            ElementKind::Container => {
                let buttons: Vec<String> = node
                    .child_elements()
                    .iter()
                    .filter(|b| b.kind == ElementKind::Button)
                    .map(|b| marked(b.text().unwrap_or_default(), b.active))
                    .collect();
                parts.push(buttons.join(" "));
            }
            ElementKind::Button => parts.push(marked(node.text().unwrap_or_default(), node.active)),
            _ => {}
        }
    }
    parts.join("  ")
}
