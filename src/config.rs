use crate::{
    animation::derive::DEFAULT_DURATION_SECS,
    foundation::core::{CssColor, Direction, SizeExpr},
    foundation::error::MarqueeResult,
    sequence::compose::Items,
    slide::item::Item,
};

/// Everything a slider instance is configured with.
///
/// All fields are optional when deserialized; missing ones take the [`Default`] values.
/// Unknown keys are rejected.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct SliderConfig {
    /// Slides, in order. A single item is accepted as a one-element list.
    pub items: Items,
    /// Width of every slide (CSS length expression).
    pub item_width: SizeExpr,
    /// Seconds per animation cycle. Non-positive values are clamped when derived.
    pub duration_seconds: f64,
    /// Scroll direction.
    pub direction: Direction,
    /// Freeze the strip while the pointer is over it.
    pub pause_on_hover: bool,
    /// Draw fade panels over both edges.
    pub edge_fade: bool,
    /// Color the fade panels start from.
    pub edge_fade_color: CssColor,
}

impl Default for SliderConfig {
    fn default() -> Self {
        Self {
            items: Items::default(),
            item_width: SizeExpr::default(),
            duration_seconds: DEFAULT_DURATION_SECS,
            direction: Direction::Left,
            pause_on_hover: false,
            edge_fade: false,
            edge_fade_color: CssColor::default(),
        }
    }
}

impl SliderConfig {
    /// Default configuration with no items.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a JSON configuration.
    pub fn from_json(json: &str) -> MarqueeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Replace the items.
    pub fn items(mut self, items: impl Into<Items>) -> Self {
        self.items = items.into();
        self
    }

    /// Append one item.
    pub fn item(mut self, item: Item) -> Self {
        self.items = self.items.iter().cloned().chain([item]).collect();
        self
    }

    /// Set the slide width.
    pub fn item_width(mut self, width: impl AsRef<str>) -> MarqueeResult<Self> {
        self.item_width = SizeExpr::new(width)?;
        Ok(self)
    }

    /// Set the cycle length.
    pub fn duration_seconds(mut self, secs: f64) -> Self {
        self.duration_seconds = secs;
        self
    }

    /// Set the scroll direction.
    pub fn direction(mut self, direction: Direction) -> Self {
        self.direction = direction;
        self
    }

    /// Toggle pause-on-hover.
    pub fn pause_on_hover(mut self, on: bool) -> Self {
        self.pause_on_hover = on;
        self
    }

    /// Toggle the edge fade panels.
    pub fn edge_fade(mut self, on: bool) -> Self {
        self.edge_fade = on;
        self
    }

    /// Set the edge fade color.
    pub fn edge_fade_color(mut self, color: impl AsRef<str>) -> MarqueeResult<Self> {
        self.edge_fade_color = CssColor::new(color)?;
        Ok(self)
    }
}

#[cfg(test)]
#[path = "../tests/unit/config.rs"]
mod tests;
