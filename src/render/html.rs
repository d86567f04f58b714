use crate::render::node::{Element, Node};

/// Serialize a node tree to HTML.
pub fn to_html(node: &Node) -> String {
    let mut out = String::new();
    write_node(node, &mut out);
    out
}

/// Serialize a single element (and its subtree) to HTML.
pub fn element_to_html(el: &Element) -> String {
    let mut out = String::new();
    write_element(el, &mut out);
    out
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Element(el) => write_element(el, out),
        Node::Text(text) => out.push_str(&escape_text(text)),
        Node::Raw(raw) => out.push_str(raw),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&el.tag);

    let mut caller_style = None;
    for (name, value) in &el.attrs {
        if name.eq_ignore_ascii_case("style") {
            caller_style = Some(value.as_str());
            continue;
        }
        push_attr(out, name, value);
    }

    let computed = el.style.to_css();
    let style = match (caller_style.map(str::trim), computed.is_empty()) {
        (Some(c), true) if !c.is_empty() => c.to_owned(),
        (Some(c), false) if !c.is_empty() => {
            format!("{}; {computed}", c.trim_end_matches(';'))
        }
        (_, false) => computed,
        _ => String::new(),
    };
    if !style.is_empty() {
        push_attr(out, "style", &style);
    }
    out.push('>');

    for child in &el.children {
        write_node(child, out);
    }

    out.push_str("</");
    out.push_str(&el.tag);
    out.push('>');
}

fn push_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&escape_attr(value));
    out.push('"');
}

pub(crate) fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/html.rs"]
mod tests;
