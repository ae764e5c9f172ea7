//! Rendering surfaces.
//!
//! A surface is anything that can display a flat list of structural nodes.
//! The table controller only ever clears a surface and appends nodes to it,
//! so hosts (a DOM binding, a terminal renderer, a test harness) implement
//! just those two operations.

use crate::element::{self, Element};

/// Destination for rendered nodes.
pub trait Surface {
    /// Remove everything previously appended.
    fn clear(&mut self);

    /// Add `node` as the last child of the surface.
    fn append(&mut self, node: Element);
}

impl<S: Surface + ?Sized> Surface for &mut S {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, node: Element) {
        (**self).append(node);
    }
}

impl<S: Surface + ?Sized> Surface for Box<S> {
    fn clear(&mut self) {
        (**self).clear();
    }

    fn append(&mut self, node: Element) {
        (**self).append(node);
    }
}

/// Surface that keeps appended nodes in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemorySurface {
    nodes: Vec<Element>,
    clears: usize,
}

impl MemorySurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nodes appended since the last clear, in order.
    pub fn nodes(&self) -> &[Element] {
        &self.nodes
    }

    /// How many times the surface has been cleared.
    pub fn clear_count(&self) -> usize {
        self.clears
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Find a node anywhere on the surface by ID.
    pub fn find(&self, id: &str) -> Option<&Element> {
        element::find_in(&self.nodes, id)
    }
}

impl Surface for MemorySurface {
    fn clear(&mut self) {
        self.nodes.clear();
        self.clears += 1;
    }

    fn append(&mut self, node: Element) {
        self.nodes.push(node);
    }
}
