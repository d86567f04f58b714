use super::*;
use serde_json::json;

#[test]
fn size_expr_trims_and_multiplies() {
    let w = SizeExpr::new("  12rem ").unwrap();
    assert_eq!(w.as_str(), "12rem");
    assert_eq!(w.times(6), "calc(12rem * 6)");
    assert_eq!(w.times_negated(2), "calc(12rem * 2 * -1)");
}

#[test]
fn size_expr_rejects_context_breakers() {
    assert!(SizeExpr::new("").is_err());
    assert!(SizeExpr::new("   ").is_err());
    assert!(SizeExpr::new("10px; color: red").is_err());
    assert!(SizeExpr::new("10px}").is_err());
    assert!(SizeExpr::new("</style>").is_err());
    assert!(SizeExpr::new("10\npx").is_err());
    assert!(SizeExpr::new("calc(100vw / 5)").is_ok());
}

#[test]
fn defaults_match_documented_values() {
    assert_eq!(SizeExpr::default().as_str(), "200px");
    assert_eq!(CssColor::default().as_str(), "#fff");
    assert_eq!(Direction::default(), Direction::Left);
    assert_eq!(PlayState::default(), PlayState::Running);
}

#[test]
fn serde_uses_plain_strings() {
    let w: SizeExpr = serde_json::from_value(json!("300px")).unwrap();
    assert_eq!(serde_json::to_value(&w).unwrap(), json!("300px"));

    let d: Direction = serde_json::from_value(json!("right")).unwrap();
    assert_eq!(d, Direction::Right);

    assert!(serde_json::from_value::<CssColor>(json!("red;")).is_err());
}

#[test]
fn play_state_css_keywords() {
    assert_eq!(PlayState::Running.as_css(), "running");
    assert_eq!(PlayState::Paused.as_css(), "paused");
}
