//! Marquee builds seamless, infinitely looping logo strips for HTML pages.
//!
//! A slider is described by a [`SliderConfig`]; a [`Slider`] instance turns it into a
//! [`Rendered`] tree:
//!
//! 1. **Name**: every instance owns a unique keyframe name ([`IdAllocator`]).
//! 2. **Compose**: the items are laid out three times ([`compose`]).
//! 3. **Derive**: a two-keyframe translation covering exactly one copy ([`derive`]).
//! 4. **Assemble**: style scope, clipping wrapper, animated track and optional edge fades.
//!
//! All lengths stay symbolic (`calc(...)`) and are evaluated by the browser. Hover pausing
//! writes straight through a [`TrackHandle`] and never re-renders.
//!
//! A [`Surface`] hosts several instances on one page and owns their style scopes.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod animation;
mod config;
mod foundation;
mod identity;
mod overlay;
mod playback;
mod render;
mod sequence;
mod slide;
mod slider;
mod surface;

pub use animation::derive::{
    AnimationSpec, DEFAULT_DURATION_SECS, Distance, MIN_DURATION_SECS, Offset, clamp_duration,
    derive,
};
pub use config::SliderConfig;
pub use foundation::core::{CssColor, Direction, PlayState, SizeExpr};
pub use foundation::error::{MarqueeError, MarqueeResult};
pub use foundation::memo::Memo;
pub use identity::allocator::{ANIMATION_NAME_PREFIX, AnimationName, IdAllocator, sanitize_token};
pub use overlay::edge_fade::{EDGE_FADE_WIDTH, Edge, gradient, render_overlay};
pub use playback::controller::{PlaybackController, PointerEvent, TrackHandle, hover_handlers};
pub use render::html::{element_to_html, to_html};
pub use render::node::{Element, Node, Style};
pub use sequence::compose::{
    Items, OCCURRENCE_KEY_ATTR, Occurrence, OccurrenceKey, REPLICA_COUNT, ReplicaTag,
    ReplicatedSequence, compose,
};
pub use slide::item::{Item, render_slide};
pub use slider::{MemoStats, Rendered, Slider, StyleScope, Track, Wrapper};
pub use surface::{MountId, Surface};

/// Render the left and right edge fade panels.
pub use overlay::edge_fade::render as render_edge_fades;
