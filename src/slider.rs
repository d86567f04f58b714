use std::rc::Rc;

use crate::{
    animation::derive::{AnimationSpec, Distance, derive},
    config::SliderConfig,
    foundation::{
        core::{Direction, PlayState, SizeExpr},
        memo::Memo,
    },
    identity::allocator::{AnimationName, IdAllocator},
    overlay::edge_fade,
    playback::controller::{PlaybackController, PointerEvent, TrackHandle, hover_handlers},
    render::{
        html::element_to_html,
        node::{Element, Node, Style},
    },
    sequence::compose::{Items, REPLICA_COUNT, ReplicatedSequence, compose},
};

type SequenceKey = (Items, SizeExpr);
type AnimationKey = (usize, SizeExpr, Direction, u64);

/// Replicated sequence plus its rendered slides, cached together.
#[derive(Clone, Debug)]
struct ComposedTrack {
    sequence: ReplicatedSequence,
    slides: Rc<[Node]>,
}

/// Cache counters, mainly for asserting that unrelated changes do not recompute.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoStats {
    /// Times the replicated sequence (and its slides) was rebuilt.
    pub sequence_builds: u64,
    /// Times the animation spec was rebuilt.
    pub animation_builds: u64,
}

/// One slider instance: configuration, its animation name, its live track handle and the
/// memoized derived values.
#[derive(Debug)]
pub struct Slider {
    config: SliderConfig,
    name: AnimationName,
    track: TrackHandle,
    sequence: Memo<SequenceKey, ComposedTrack>,
    animation: Memo<AnimationKey, AnimationSpec>,
}

impl Slider {
    /// New instance named by the fallback allocator.
    pub fn new(config: SliderConfig) -> Self {
        Self::with_allocator(config, &IdAllocator::new())
    }

    /// New instance named by `allocator`.
    pub fn with_allocator(config: SliderConfig, allocator: &IdAllocator) -> Self {
        Self {
            config,
            name: allocator.allocate(),
            track: TrackHandle::new(),
            sequence: Memo::new(),
            animation: Memo::new(),
        }
    }

    /// Keyframe name owned by this instance for its whole lifetime.
    pub fn name(&self) -> &AnimationName {
        &self.name
    }

    /// Current configuration.
    pub fn config(&self) -> &SliderConfig {
        &self.config
    }

    /// Replace the configuration. The play-state is left as it is.
    pub fn set_config(&mut self, config: SliderConfig) {
        self.config = config;
    }

    /// Edit the configuration in place.
    pub fn update(&mut self, edit: impl FnOnce(&mut SliderConfig)) {
        edit(&mut self.config);
    }

    /// Live play-state of the track.
    pub fn play_state(&self) -> PlayState {
        self.track.play_state()
    }

    /// Handle onto the live track.
    pub fn track_handle(&self) -> &TrackHandle {
        &self.track
    }

    /// Cache counters.
    pub fn memo_stats(&self) -> MemoStats {
        MemoStats {
            sequence_builds: self.sequence.misses(),
            animation_builds: self.animation.misses(),
        }
    }

    /// The replicated sequence for the current items and width.
    pub fn sequence(&mut self) -> &ReplicatedSequence {
        &self.composed().sequence
    }

    /// The animation for the current width, item count, direction and duration.
    pub fn animation(&mut self) -> &AnimationSpec {
        let key = (
            self.config.items.len(),
            self.config.item_width.clone(),
            self.config.direction,
            self.config.duration_seconds.to_bits(),
        );
        let name = &self.name;
        self.animation.get_or_compute(key, |(count, width, direction, secs)| {
            tracing::debug!(%name, count, "deriving animation");
            derive(name, width, *count, *direction, f64::from_bits(*secs))
        })
    }

    fn composed(&mut self) -> &ComposedTrack {
        let key = (self.config.items.clone(), self.config.item_width.clone());
        self.sequence.get_or_compute(key, |(items, width)| {
            tracing::debug!(count = items.len(), %width, "composing replicated sequence");
            let sequence = compose(items.clone(), width);
            let slides = sequence.render().into();
            ComposedTrack { sequence, slides }
        })
    }

    /// Assemble the instance's output for the current configuration.
    ///
    /// Track width and animation distance are both derived from the same item count and width,
    /// so the end-of-cycle offset is exactly one un-replicated copy.
    #[tracing::instrument(level = "debug", skip(self), fields(name = %self.name))]
    pub fn render(&mut self) -> Rendered {
        let composed = self.composed().clone();
        let animation = self.animation().clone();
        let track_width = Distance::new(
            composed.sequence.width(),
            composed.sequence.source_len() * REPLICA_COUNT,
        );

        let overlays = self
            .config
            .edge_fade
            .then(|| edge_fade::render(&self.config.edge_fade_color));

        Rendered {
            style: StyleScope {
                name: self.name.clone(),
                css: animation.keyframes_css(),
            },
            wrapper: Wrapper {
                handlers: hover_handlers(self.config.pause_on_hover, &self.track),
            },
            track: Track {
                width: track_width.to_css(),
                animation,
                handle: self.track.clone(),
                sequence: composed.sequence,
                slides: composed.slides,
            },
            overlays,
        }
    }
}

/// The `<style>` block carrying one instance's keyframes.
#[derive(Clone, Debug, PartialEq)]
pub struct StyleScope {
    /// Name of the keyframes rule, which also keys the scope.
    pub name: AnimationName,
    /// Keyframes text.
    pub css: String,
}

/// The clipping wrapper; owns the hover handlers when pause-on-hover is on.
#[derive(Clone, Debug)]
pub struct Wrapper {
    /// Attached handlers, absent when hovering must not affect playback.
    pub handlers: Option<PlaybackController>,
}

/// The animated flex row holding every occurrence.
#[derive(Clone, Debug)]
pub struct Track {
    /// `calc(<itemWidth> * <3n>)`.
    pub width: String,
    /// Animation the track is bound to.
    pub animation: AnimationSpec,
    handle: TrackHandle,
    sequence: ReplicatedSequence,
    slides: Rc<[Node]>,
}

impl Track {
    /// Live play-state.
    pub fn play_state(&self) -> PlayState {
        self.handle.play_state()
    }

    /// Bound animation name.
    pub fn animation_name(&self) -> &AnimationName {
        &self.animation.name
    }

    /// Bound cycle length in seconds.
    pub fn duration_seconds(&self) -> f64 {
        self.animation.duration_seconds
    }

    /// The replicated sequence laid out on the track.
    pub fn sequence(&self) -> &ReplicatedSequence {
        &self.sequence
    }

    /// Rendered slides, `3n` of them.
    pub fn slides(&self) -> &[Node] {
        &self.slides
    }

    fn to_element(&self) -> Element {
        Element::div()
            .style(
                Style::new()
                    .with("display", "flex")
                    .with("width", self.width.as_str())
                    .with("animation", self.animation.shorthand())
                    .with("animation-play-state", self.play_state().as_css()),
            )
            .children(self.slides.iter().cloned())
    }
}

/// Output of one render: style scope, wrapper with track, optional edge panels.
#[derive(Clone, Debug)]
pub struct Rendered {
    /// Injected keyframes.
    pub style: StyleScope,
    /// Clipping wrapper.
    pub wrapper: Wrapper,
    /// Animated track inside the wrapper.
    pub track: Track,
    /// Left and right fade panels, when enabled.
    pub overlays: Option<(Element, Element)>,
}

impl Rendered {
    /// Deliver a pointer event to the wrapper. Returns `false` when no handler is attached.
    pub fn dispatch(&self, event: PointerEvent) -> bool {
        match &self.wrapper.handlers {
            Some(ctl) => {
                ctl.handle(event);
                true
            }
            None => false,
        }
    }

    /// Pointer entered the wrapper.
    pub fn pointer_enter(&self) -> bool {
        self.dispatch(PointerEvent::Enter)
    }

    /// Pointer left the wrapper.
    pub fn pointer_leave(&self) -> bool {
        self.dispatch(PointerEvent::Leave)
    }

    /// Number of rendered content occurrences.
    pub fn occurrence_count(&self) -> usize {
        self.track.slides.len()
    }

    /// Snapshot of the element tree, reflecting the live play-state.
    ///
    /// Root children, in order: `<style>`, wrapper, then the two fade panels if enabled.
    pub fn to_element(&self) -> Element {
        let mut wrapper = Element::div().style(
            Style::new()
                .with("width", "100%")
                .with("height", "auto")
                .with("margin", "auto")
                .with("overflow", "hidden")
                .with("position", "relative"),
        );
        if self.wrapper.handlers.is_some() {
            wrapper.set_attr(
                "onmouseenter",
                "this.firstElementChild.style.animationPlayState='paused'",
            );
            wrapper.set_attr(
                "onmouseleave",
                "this.firstElementChild.style.animationPlayState='running'",
            );
        }

        let mut root = Element::div()
            .style(Style::new().with("position", "relative"))
            .child(Element::new("style").child(Node::Raw(self.style.css.clone())))
            .child(wrapper.child(self.track.to_element()));
        if let Some((left, right)) = &self.overlays {
            root = root.child(left.clone()).child(right.clone());
        }
        root
    }

    /// Snapshot serialized to HTML.
    pub fn to_html(&self) -> String {
        element_to_html(&self.to_element())
    }
}

#[cfg(test)]
#[path = "../tests/unit/slider.rs"]
mod tests;
