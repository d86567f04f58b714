use super::*;
use crate::{
    config::SliderConfig, foundation::core::CssColor, sequence::compose::OCCURRENCE_KEY_ATTR,
    slide::item::Item,
};

fn two_logos() -> SliderConfig {
    SliderConfig::new().items(vec![Item::text("A"), Item::text("B")])
}

#[test]
fn track_width_and_distance_share_inputs() {
    let mut slider = Slider::new(two_logos());
    let out = slider.render();
    assert_eq!(out.track.width, "calc(200px * 6)");
    assert_eq!(out.track.animation.distance.to_css(), "calc(200px * 2)");
    assert_eq!(out.occurrence_count(), 6);
}

#[test]
fn track_is_bound_to_the_instance_animation() {
    let mut slider = Slider::new(two_logos().duration_seconds(20.0));
    let out = slider.render();
    assert_eq!(out.track.animation_name(), slider.name());
    assert_eq!(out.track.duration_seconds(), 20.0);
    assert_eq!(out.style.name, *slider.name());
    assert!(out
        .style
        .css
        .contains(&format!("@keyframes {} {{", slider.name())));
}

#[test]
fn root_children_are_style_wrapper_then_overlays() {
    let mut slider = Slider::new(two_logos().edge_fade(true));
    let root = slider.render().to_element();
    let kids: Vec<_> = root.child_elements().collect();
    assert_eq!(kids.len(), 4);
    assert_eq!(kids[0].tag, "style");
    assert_eq!(kids[1].style.get("overflow"), Some("hidden"));
    assert_eq!(kids[2].get_attr("aria-hidden"), Some("true"));
    assert_eq!(kids[3].get_attr("aria-hidden"), Some("true"));

    let track = kids[1].child_elements().next().unwrap();
    assert_eq!(track.style.get("display"), Some("flex"));
    assert_eq!(track.child_elements().count(), 6);
}

#[test]
fn no_overlays_without_edge_fade() {
    let mut slider = Slider::new(two_logos());
    let out = slider.render();
    assert!(out.overlays.is_none());
    let hidden = out
        .to_element()
        .find_all(&|el| el.get_attr("aria-hidden").is_some())
        .len();
    assert_eq!(hidden, 0);
}

#[test]
fn overlays_carry_configured_color() {
    let mut cfg = two_logos().edge_fade(true);
    cfg.edge_fade_color = CssColor::new("#123456").unwrap();
    let out = Slider::new(cfg).render();
    let (l, r) = out.overlays.unwrap();
    assert!(l.style.get("background").unwrap().contains("#123456"));
    assert!(r.style.get("background").unwrap().contains("#123456"));
}

#[test]
fn hover_without_pause_on_hover_is_inert() {
    let mut slider = Slider::new(two_logos());
    let out = slider.render();
    assert!(out.wrapper.handlers.is_none());
    assert!(!out.pointer_enter());
    assert_eq!(out.track.play_state(), PlayState::Running);
    assert!(!out.to_html().contains("onmouseenter"));
}

#[test]
fn hover_round_trip_with_pause_on_hover() {
    let mut slider = Slider::new(two_logos().pause_on_hover(true));
    let out = slider.render();

    assert!(out.pointer_enter());
    assert_eq!(out.track.play_state(), PlayState::Paused);
    assert_eq!(slider.play_state(), PlayState::Paused);
    assert!(out.to_html().contains("animation-play-state: paused;"));

    assert!(out.pointer_leave());
    assert_eq!(out.track.play_state(), PlayState::Running);
}

#[test]
fn hover_never_recomputes_derived_values() {
    let mut slider = Slider::new(two_logos().pause_on_hover(true));
    let out = slider.render();
    let before = slider.memo_stats();
    for _ in 0..5 {
        out.pointer_enter();
        out.pointer_leave();
    }
    assert_eq!(slider.memo_stats(), before);
}

#[test]
fn unrelated_changes_reuse_the_sequence() {
    let mut slider = Slider::new(two_logos());
    slider.render();
    slider.update(|c| {
        c.edge_fade = true;
        c.pause_on_hover = true;
    });
    slider.render();
    assert_eq!(slider.memo_stats().sequence_builds, 1);
    assert_eq!(slider.memo_stats().animation_builds, 1);

    slider.update(|c| c.direction = Direction::Right);
    slider.render();
    assert_eq!(slider.memo_stats().sequence_builds, 1);
    assert_eq!(slider.memo_stats().animation_builds, 2);

    slider.update(|c| c.item_width = SizeExpr::new("50px").unwrap());
    let out = slider.render();
    assert_eq!(slider.memo_stats().sequence_builds, 2);
    for slide in out.track.slides() {
        assert_eq!(slide.as_element().unwrap().style.get("width"), Some("50px"));
    }
}

#[test]
fn rerender_keeps_play_state() {
    let mut slider = Slider::new(two_logos().pause_on_hover(true));
    slider.render().pointer_enter();
    slider.update(|c| c.duration_seconds = 10.0);
    let out = slider.render();
    assert_eq!(out.track.play_state(), PlayState::Paused);
}

#[test]
fn occurrence_keys_are_unique() {
    let mut slider = Slider::new(two_logos());
    let out = slider.render();
    let mut keys: Vec<_> = out
        .track
        .slides()
        .iter()
        .filter_map(|n| n.as_element()?.get_attr(OCCURRENCE_KEY_ATTR))
        .collect();
    keys.sort_unstable();
    keys.dedup();
    assert_eq!(keys.len(), 6);
}

#[test]
fn two_identical_instances_get_distinct_names() {
    let a = Slider::new(two_logos());
    let b = Slider::new(two_logos());
    assert_ne!(a.name(), b.name());
}

#[test]
fn changing_items_rebuilds_sequence_and_animation() {
    let mut slider = Slider::new(SliderConfig::new().items(vec![Item::text("A")]));
    slider.render();
    let before = slider.memo_stats();

    slider.update(|c| c.items = vec![Item::text("A"), Item::text("Z")].into());
    let out = slider.render();
    let after = slider.memo_stats();

    assert_eq!(after.sequence_builds, before.sequence_builds + 1);
    assert_eq!(after.animation_builds, before.animation_builds + 1);
    assert_eq!(out.occurrence_count(), 6);
    assert_eq!(out.track.width, "calc(200px * 6)");
    assert_eq!(out.track.animation.distance.to_css(), "calc(200px * 2)");
}

#[test]
fn equal_items_in_new_storage_reuse_the_sequence() {
    let mut slider = Slider::new(two_logos());
    slider.render();
    slider.update(|c| c.items = vec![Item::text("A"), Item::text("B")].into());
    slider.render();
    assert_eq!(slider.memo_stats().sequence_builds, 1);
}
