use crate::{
    foundation::core::{Direction, SizeExpr},
    identity::allocator::AnimationName,
};

/// Floor applied to non-positive or non-finite durations.
pub const MIN_DURATION_SECS: f64 = 0.001;

/// Default cycle length in seconds.
pub const DEFAULT_DURATION_SECS: f64 = 40.0;

/// `width × count`, kept symbolic so the rendering surface evaluates it.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Distance {
    width: SizeExpr,
    count: usize,
}

impl Distance {
    /// Distance covered by `count` slides of `width`.
    pub fn new(width: &SizeExpr, count: usize) -> Self {
        Self {
            width: width.clone(),
            count,
        }
    }

    /// Slide width factor.
    pub fn width(&self) -> &SizeExpr {
        &self.width
    }

    /// Slide count factor.
    pub fn count(&self) -> usize {
        self.count
    }

    /// `calc(<width> * <count>)`.
    pub fn to_css(&self) -> String {
        self.width.times(self.count)
    }

    /// `calc(<width> * <count> * -1)`.
    pub fn negated_css(&self) -> String {
        self.width.times_negated(self.count)
    }
}

impl serde::Serialize for Distance {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Horizontal translation of one keyframe.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Offset {
    /// `translateX(0)`.
    Zero,
    /// `translateX(-distance)`.
    Back(Distance),
}

impl Offset {
    /// The translation as a CSS length.
    pub fn to_css(&self) -> String {
        match self {
            Self::Zero => "0".to_owned(),
            Self::Back(d) => d.negated_css(),
        }
    }

    /// `translateX(...)` transform function.
    pub fn translate_x(&self) -> String {
        format!("translateX({})", self.to_css())
    }

    /// `true` for the zero offset.
    pub fn is_zero(&self) -> bool {
        matches!(self, Self::Zero)
    }
}

impl serde::Serialize for Offset {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_css())
    }
}

/// Two-keyframe, linear, infinitely repeating translation bound to one slider instance.
///
/// Exactly one of the two offsets is [`Offset::Zero`]; the other is minus the width of one
/// un-replicated copy of the content.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnimationSpec {
    /// Keyframe name, unique per instance.
    pub name: AnimationName,
    /// Offset at 0%.
    pub from_offset: Offset,
    /// Offset at 100%.
    pub to_offset: Offset,
    /// Seconds per cycle, always positive.
    pub duration_seconds: f64,
    /// Single-pass distance travelled per cycle.
    pub distance: Distance,
}

impl AnimationSpec {
    /// The `@keyframes` rule for this animation.
    pub fn keyframes_css(&self) -> String {
        format!(
            "@keyframes {name} {{\n  0% {{ transform: {from}; }}\n  100% {{ transform: {to}; }}\n}}\n",
            name = self.name,
            from = self.from_offset.translate_x(),
            to = self.to_offset.translate_x(),
        )
    }

    /// The `animation` shorthand value binding the track to this rule.
    pub fn shorthand(&self) -> String {
        format!("{} {}s linear infinite", self.name, self.duration_seconds)
    }
}

/// Guard a configured duration: non-finite or non-positive values become
/// [`MIN_DURATION_SECS`].
pub fn clamp_duration(secs: f64) -> f64 {
    if secs.is_finite() && secs > 0.0 {
        secs
    } else {
        tracing::warn!(secs, min = MIN_DURATION_SECS, "clamping slider duration");
        MIN_DURATION_SECS
    }
}

/// Build the direction-aware keyframe pair for `count` slides of `width`.
///
/// `Left` runs `0 -> -distance`; `Right` runs `-distance -> 0`, so the left edge is already
/// backed by the trailing copy when the cycle starts.
#[tracing::instrument(level = "debug", skip(width), fields(width = %width))]
pub fn derive(
    name: &AnimationName,
    width: &SizeExpr,
    count: usize,
    direction: Direction,
    duration_seconds: f64,
) -> AnimationSpec {
    let distance = Distance::new(width, count);
    let back = Offset::Back(distance.clone());
    let (from_offset, to_offset) = match direction {
        Direction::Left => (Offset::Zero, back),
        Direction::Right => (back, Offset::Zero),
    };
    AnimationSpec {
        name: name.clone(),
        from_offset,
        to_offset,
        duration_seconds: clamp_duration(duration_seconds),
        distance,
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/derive.rs"]
mod tests;
