use super::*;
use crate::{
    foundation::core::PlayState, identity::allocator::IdAllocator, slide::item::Item,
};

fn config() -> SliderConfig {
    SliderConfig::new().items(vec![Item::text("A")])
}

#[test]
fn each_mount_injects_its_own_scope() {
    let mut surface = Surface::new();
    let a = surface.mount(Slider::new(config())).unwrap();
    let b = surface.mount(Slider::new(config())).unwrap();
    assert_ne!(a, b);
    assert_eq!(surface.style_scopes().count(), 2);

    let html = surface.to_html();
    assert_eq!(html.matches("<style>").count(), 2);
    assert_eq!(html.matches("@keyframes slider-animation-").count(), 2);
}

#[test]
fn unmount_removes_scope() {
    let mut surface = Surface::new();
    let a = surface.mount(Slider::new(config())).unwrap();
    let b = surface.mount(Slider::new(config())).unwrap();
    let removed = surface.unmount(a).unwrap();

    assert_eq!(surface.len(), 1);
    assert!(surface.style_scopes().all(|(name, _)| name != removed.name()));
    assert!(surface.rendered(a).is_err());
    assert!(surface.rendered(b).is_ok());
    assert!(matches!(surface.unmount(a), Err(MarqueeError::Mount(_))));
}

#[test]
fn duplicate_names_are_refused() {
    let alloc = IdAllocator::with_host(|| Some("same".to_owned()));
    let mut surface = Surface::new();
    surface
        .mount(Slider::with_allocator(config(), &alloc))
        .unwrap();
    let err = surface
        .mount(Slider::with_allocator(config(), &alloc))
        .unwrap_err();
    assert!(err.to_string().contains("already in use"));
}

#[test]
fn update_replaces_only_that_scope() {
    let mut surface = Surface::new();
    let a = surface.mount(Slider::new(config())).unwrap();
    let b = surface.mount(Slider::new(config())).unwrap();
    let b_css = surface.rendered(b).unwrap().style.css.clone();

    let out = surface
        .update(a, |c| c.direction = crate::foundation::core::Direction::Right)
        .unwrap();
    assert!(out.style.css.contains("0% { transform: translateX(calc("));
    assert_eq!(surface.rendered(b).unwrap().style.css, b_css);
    assert_eq!(surface.style_scopes().count(), 2);
}

#[test]
fn pointer_events_reach_only_the_target() {
    let mut surface = Surface::new();
    let a = surface
        .mount(Slider::new(config().pause_on_hover(true)))
        .unwrap();
    let b = surface
        .mount(Slider::new(config().pause_on_hover(true)))
        .unwrap();

    assert!(surface.pointer_enter(a).unwrap());
    assert_eq!(surface.slider(a).unwrap().play_state(), PlayState::Paused);
    assert_eq!(surface.slider(b).unwrap().play_state(), PlayState::Running);

    assert!(surface.pointer_leave(a).unwrap());
    assert_eq!(surface.slider(a).unwrap().play_state(), PlayState::Running);
}

#[test]
fn document_wraps_fragment() {
    let mut surface = Surface::new();
    surface.mount(Slider::new(config())).unwrap();
    let doc = surface.to_document("Logos <demo>");
    assert!(doc.starts_with("<!DOCTYPE html>"));
    assert!(doc.contains("<title>Logos &lt;demo&gt;</title>"));
    assert!(doc.contains("@keyframes"));
}
