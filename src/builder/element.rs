//! Output element tree
//!
//! Small owned tree used only on the build path. Attributes keep
//! insertion order so the emitted documents are stable.

/// An element of the output document.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub content: Content,
}

/// Element body.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Content {
    Empty,
    Text(String),
    Children(Vec<XmlElement>),
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        XmlElement {
            name: name.into(),
            attributes: Vec::new(),
            content: Content::Empty,
        }
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.push((name.into(), value.into()));
        self
    }

    /// Adds the attribute only when a value is supplied.
    pub fn opt_attr(self, name: impl Into<String>, value: Option<&str>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.content = Content::Text(text.into());
        self
    }

    pub fn child(mut self, child: XmlElement) -> Self {
        match &mut self.content {
            Content::Children(children) => children.push(child),
            _ => self.content = Content::Children(vec![child]),
        }
        self
    }

    pub fn children(mut self, children: impl IntoIterator<Item = XmlElement>) -> Self {
        for child in children {
            self = self.child(child);
        }
        self
    }

    /// Replaces the value of an existing attribute; attributes the
    /// skeleton did not declare are ignored.
    pub fn set_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        if let Some(slot) = self
            .attributes
            .iter_mut()
            .find(|(attr_name, _)| attr_name == name)
        {
            slot.1 = value.into();
        }
        self
    }

    /// Rebuilds the named child through `rebuild`, leaving the rest of
    /// the tree untouched.
    pub fn map_child(mut self, name: &str, rebuild: impl FnOnce(XmlElement) -> XmlElement) -> Self {
        if let Content::Children(children) = &mut self.content {
            if let Some(slot) = children.iter_mut().find(|child| child.name == name) {
                let taken = std::mem::replace(slot, XmlElement::new(name));
                *slot = rebuild(taken);
            }
        }
        self
    }
}
