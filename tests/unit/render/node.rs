use super::*;

#[test]
fn style_set_replaces_in_place() {
    let mut s = Style::new().with("width", "10px").with("display", "flex");
    s.set("width", "20px");
    assert_eq!(s.get("width"), Some("20px"));
    assert_eq!(s.to_css(), "width: 20px; display: flex;");
}

#[test]
fn attr_set_replaces_and_preserves_order() {
    let el = Element::div()
        .attr("id", "a")
        .attr("class", "x")
        .attr("id", "b");
    assert_eq!(el.get_attr("id"), Some("b"));
    assert_eq!(el.attrs[0].0, "id");
    assert_eq!(el.attrs.len(), 2);
}

#[test]
fn find_all_walks_depth_first() {
    let tree = Element::div().attr("data-k", "root").child(
        Element::div()
            .attr("data-k", "a")
            .child(Element::new("span").attr("data-k", "a1")),
    );
    let found = tree.find_all(&|el| el.get_attr("data-k").is_some());
    let keys: Vec<_> = found.iter().filter_map(|el| el.get_attr("data-k")).collect();
    assert_eq!(keys, vec!["root", "a", "a1"]);
}

#[test]
fn text_content_concatenates_text_and_raw() {
    let el = Element::div()
        .child(Node::Text("a".into()))
        .child(Element::new("b").child(Node::Raw("<i>c</i>".into())));
    assert_eq!(el.text_content(), "a<i>c</i>");
}
