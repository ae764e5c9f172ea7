mod content;
mod node;

pub use content::Content;
pub use node::{Control, Element, ElementKind};

/// Find an element by ID in the tree.
pub fn find_element<'a>(root: &'a Element, id: &str) -> Option<&'a Element> {
    if root.id.as_deref() == Some(id) {
        return Some(root);
    }

    if let Content::Children(children) = &root.content {
        for child in children {
            if let Some(found) = find_element(child, id) {
                return Some(found);
            }
        }
    }

    None
}

/// Find an element by ID across a list of sibling roots.
pub fn find_in<'a>(roots: &'a [Element], id: &str) -> Option<&'a Element> {
    roots.iter().find_map(|root| find_element(root, id))
}
