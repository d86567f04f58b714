use std::fmt;

use crate::{
    foundation::core::SizeExpr,
    render::node::{Element, Node, Style},
};

/// One unit of content placed into the strip: an opaque node plus pass-through attributes.
///
/// The slider never inspects `content`; it only enumerates items and wraps each occurrence in a
/// fixed-width slide box.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    /// Opaque content node.
    pub content: Node,
    /// Attributes merged onto the slide wrapper (`id`, `class`, `data-*`, `aria-*`, ...).
    pub attrs: Vec<(String, String)>,
}

impl Item {
    /// Item wrapping an arbitrary node.
    pub fn new(content: impl Into<Node>) -> Self {
        Self {
            content: content.into(),
            attrs: Vec::new(),
        }
    }

    /// Item whose content is opaque markup, emitted verbatim.
    pub fn markup(html: impl Into<String>) -> Self {
        Self::new(Node::Raw(html.into()))
    }

    /// Item whose content is escaped text.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(Node::Text(text.into()))
    }

    /// Add a pass-through attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Render this item as a slide of the given width.
    pub fn render(&self, width: &SizeExpr) -> Element {
        render_slide(width, &self.attrs, &self.content)
    }
}

impl<'de> serde::Deserialize<'de> for Item {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(serde::Deserialize)]
        #[serde(deny_unknown_fields)]
        struct FullItem {
            content: String,
            #[serde(default, deserialize_with = "ordered_attrs")]
            attrs: Vec<(String, String)>,
        }

        #[derive(serde::Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Markup(String),
            Full(FullItem),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Markup(html) => Self::markup(html),
            Repr::Full(FullItem { content, attrs }) => Self {
                content: Node::Raw(content),
                attrs,
            },
        })
    }
}

/// Read a JSON object of attributes, keeping the caller's key order.
fn ordered_attrs<'de, D>(deserializer: D) -> Result<Vec<(String, String)>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    struct AttrsVisitor;

    impl<'de> serde::de::Visitor<'de> for AttrsVisitor {
        type Value = Vec<(String, String)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an object of string attributes")
        }

        fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
        where
            A: serde::de::MapAccess<'de>,
        {
            let mut attrs = Vec::with_capacity(map.size_hint().unwrap_or(0));
            while let Some(entry) = map.next_entry::<String, String>()? {
                attrs.push(entry);
            }
            Ok(attrs)
        }
    }

    deserializer.deserialize_map(AttrsVisitor)
}

/// Fixed-width, vertically centered, non-shrinking slide box around `content`.
///
/// Caller attributes are copied onto the wrapper as-is; the computed style keys always take
/// precedence over a caller-supplied `style` attribute.
pub fn render_slide(width: &SizeExpr, attrs: &[(String, String)], content: &Node) -> Element {
    let mut el = Element::div().style(
        Style::new()
            .with("width", width.as_str())
            .with("display", "flex")
            .with("align-items", "center")
            .with("flex-shrink", "0"),
    );
    for (name, value) in attrs {
        el.set_attr(name.as_str(), value.as_str());
    }
    el.child(content.clone())
}

#[cfg(test)]
#[path = "../../tests/unit/slide/item.rs"]
mod tests;
