#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    Children(Vec<super::Element>),
}

impl Content {
    /// Text of a text node, `None` for containers and empty nodes.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(c) => c,
            _ => &[],
        }
    }
}
