/// Ordered inline style declarations (`property: value`).
///
/// Setting a property that is already present replaces its value in place, so declaration order
/// is the order of first insertion.
#[derive(Clone, Debug, Default, PartialEq, Eq, serde::Serialize)]
pub struct Style(Vec<(String, String)>);

impl Style {
    /// Empty declaration block.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`Style::set`].
    pub fn with(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(property, value);
        self
    }

    /// Insert or replace a declaration.
    pub fn set(&mut self, property: impl Into<String>, value: impl Into<String>) {
        let property = property.into();
        let value = value.into();
        match self.0.iter_mut().find(|(p, _)| *p == property) {
            Some(slot) => slot.1 = value,
            None => self.0.push((property, value)),
        }
    }

    /// Look up a declaration value.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(p, _)| p == property)
            .map(|(_, v)| v.as_str())
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(p, v)| (p.as_str(), v.as_str()))
    }

    /// `true` when no declarations are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Serialize as an inline `style` attribute body.
    pub fn to_css(&self) -> String {
        self.0
            .iter()
            .map(|(p, v)| format!("{p}: {v};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// One node of the rendered tree.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Node {
    /// Structured element.
    Element(Element),
    /// Text, escaped on output.
    Text(String),
    /// Opaque markup emitted verbatim (caller content, style sheets).
    Raw(String),
}

impl Node {
    /// Borrow the element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(el) => Some(el),
            _ => None,
        }
    }
}

impl From<Element> for Node {
    fn from(value: Element) -> Self {
        Self::Element(value)
    }
}

/// An element with ordered attributes, a computed inline style and children.
///
/// A caller-supplied `style` attribute is kept as-is and emitted *before* the computed
/// declarations, so computed keys always win.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize)]
pub struct Element {
    /// Tag name.
    pub tag: String,
    /// Attributes in insertion order.
    pub attrs: Vec<(String, String)>,
    /// Computed inline style.
    pub style: Style,
    /// Child nodes.
    pub children: Vec<Node>,
}

impl Element {
    /// Empty element.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            attrs: Vec::new(),
            style: Style::new(),
            children: Vec::new(),
        }
    }

    /// `<div>` shorthand.
    pub fn div() -> Self {
        Self::new("div")
    }

    /// Builder form of [`Element::set_attr`].
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(name, value);
        self
    }

    /// Insert or replace an attribute.
    pub fn set_attr(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(n, _)| *n == name) {
            Some(slot) => slot.1 = value,
            None => self.attrs.push((name, value)),
        }
    }

    /// Look up an attribute.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Replace the computed style.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Append one child.
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append many children.
    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(nodes);
        self
    }

    /// Element children only, in order.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Depth-first search (self included) for elements matching `pred`.
    pub fn find_all(&self, pred: &dyn Fn(&Element) -> bool) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect(pred, &mut out);
        out
    }

    fn collect<'a>(&'a self, pred: &dyn Fn(&Element) -> bool, out: &mut Vec<&'a Element>) {
        if pred(self) {
            out.push(self);
        }
        for child in self.child_elements() {
            child.collect(pred, out);
        }
    }

    /// Concatenated text and raw content of all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            match child {
                Node::Element(el) => out.push_str(&el.text_content()),
                Node::Text(t) | Node::Raw(t) => out.push_str(t),
            }
        }
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/node.rs"]
mod tests;
