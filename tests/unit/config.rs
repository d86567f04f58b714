use super::*;
use serde_json::json;

#[test]
fn defaults() {
    let c = SliderConfig::new();
    assert!(c.items.is_empty());
    assert_eq!(c.item_width.as_str(), "200px");
    assert_eq!(c.duration_seconds, 40.0);
    assert_eq!(c.direction, Direction::Left);
    assert!(!c.pause_on_hover);
    assert!(!c.edge_fade);
    assert_eq!(c.edge_fade_color.as_str(), "#fff");
}

#[test]
fn empty_json_object_is_the_default_config() {
    let c: SliderConfig = serde_json::from_value(json!({})).unwrap();
    assert_eq!(c, SliderConfig::default());
}

#[test]
fn parses_every_field() {
    let c: SliderConfig = serde_json::from_value(json!({
        "items": ["<b>A</b>", { "content": "<b>B</b>", "attrs": { "class": "logo" } }],
        "itemWidth": "12rem",
        "durationSeconds": 20,
        "direction": "right",
        "pauseOnHover": true,
        "edgeFade": true,
        "edgeFadeColor": "#000"
    }))
    .unwrap();
    assert_eq!(c.items.len(), 2);
    assert_eq!(c.item_width.as_str(), "12rem");
    assert_eq!(c.duration_seconds, 20.0);
    assert_eq!(c.direction, Direction::Right);
    assert!(c.pause_on_hover);
    assert!(c.edge_fade);
    assert_eq!(c.edge_fade_color.as_str(), "#000");
}

#[test]
fn single_item_is_accepted() {
    let c = SliderConfig::from_json(r#"{ "items": "<b>only</b>" }"#).unwrap();
    assert_eq!(c.items.len(), 1);
}

#[test]
fn unknown_keys_and_bad_values_are_rejected() {
    assert!(SliderConfig::from_json(r#"{ "toRight": true }"#).is_err());
    assert!(SliderConfig::from_json(r#"{ "itemWidth": "" }"#).is_err());
    assert!(SliderConfig::from_json(r#"{ "direction": "up" }"#).is_err());
}

#[test]
fn builder_appends_items_in_order() {
    let c = SliderConfig::new()
        .item(Item::text("A"))
        .item(Item::text("B"))
        .item_width("300px")
        .unwrap()
        .pause_on_hover(true);
    let texts: Vec<_> = c
        .items
        .iter()
        .map(|i| match &i.content {
            crate::render::node::Node::Text(t) => t.clone(),
            _ => String::new(),
        })
        .collect();
    assert_eq!(texts, vec!["A", "B"]);
    assert!(c.edge_fade_color("red;").is_err());
}
