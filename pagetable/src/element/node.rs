use super::Content;

/// Structural role of a node, mirroring the table and pager markup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ElementKind {
    /// Table header section (`thead`).
    Head,
    /// A row of cells (`tr`).
    Row,
    /// Header cell (`th`).
    HeaderCell,
    /// Body cell (`td`).
    Cell,
    /// Page-size selector (`select`).
    Select,
    /// One selectable page size (`option`).
    Option,
    /// Clickable control (`button`).
    Button,
    /// Generic grouping node (`div`).
    Container,
}

/// Identity of an interactive control.
///
/// Every interactive node carries exactly one of these. The host surface
/// hands it back, together with the node's current value, when the user
/// interacts with the node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Control {
    /// Rows-per-page selector. The triggered value is the chosen size.
    PageSize,
    /// "Previous page" button.
    Previous,
    /// "Next page" button.
    Next,
    /// Button jumping to the given one-based page number.
    Page(usize),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    // Identity
    pub id: Option<String>,
    pub kind: ElementKind,

    // Content
    pub content: Content,
    pub value: Option<String>,

    // State markers
    /// Pager button for the page currently shown.
    pub active: bool,
    /// Option currently chosen in its selector.
    pub selected: bool,

    // Interaction
    pub control: Option<Control>,
}

impl Element {
    fn new(kind: ElementKind) -> Self {
        Self {
            id: None,
            kind,
            content: Content::None,
            value: None,
            active: false,
            selected: false,
            control: None,
        }
    }

    fn with_text(kind: ElementKind, text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::new(kind)
        }
    }

    pub fn head() -> Self {
        Self::new(ElementKind::Head)
    }

    pub fn row() -> Self {
        Self::new(ElementKind::Row)
    }

    pub fn header_cell(text: impl Into<String>) -> Self {
        Self::with_text(ElementKind::HeaderCell, text)
    }

    pub fn cell(text: impl Into<String>) -> Self {
        Self::with_text(ElementKind::Cell, text)
    }

    pub fn select() -> Self {
        Self::new(ElementKind::Select)
    }

    /// Selector option whose value and label are both `value`.
    pub fn option(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            value: Some(value.clone()),
            ..Self::with_text(ElementKind::Option, value)
        }
    }

    pub fn button(label: impl Into<String>) -> Self {
        Self::with_text(ElementKind::Button, label)
    }

    pub fn container() -> Self {
        Self::new(ElementKind::Container)
    }

    // Identity
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = Some(value.into());
        self
    }

    // State
    pub fn active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    // Interaction
    pub fn control(mut self, control: Control) -> Self {
        self.control = Some(control);
        self
    }

    /// Text content, if this is a text node.
    pub fn text(&self) -> Option<&str> {
        self.content.as_text()
    }

    pub fn is_interactive(&self) -> bool {
        self.control.is_some()
    }

    // Children
    pub fn child(mut self, child: Element) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, new_children: impl IntoIterator<Item = Element>) -> Self {
        match &mut self.content {
            Content::Children(children) => children.extend(new_children),
            _ => self.content = Content::Children(new_children.into_iter().collect()),
        }
        self
    }

    pub fn child_elements(&self) -> &[Element] {
        self.content.children()
    }
}
