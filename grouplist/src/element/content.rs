#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Content {
    #[default]
    None,
    Text(String),
    /// Single-line text field. The host owns the value; the widget only
    /// reads it from input events.
    Input {
        value: String,
        placeholder: Option<String>,
    },
    Children(Vec<super::Element>),
}

impl Content {
    pub fn children(&self) -> &[super::Element] {
        match self {
            Self::Children(children) => children,
            _ => &[],
        }
    }
}
