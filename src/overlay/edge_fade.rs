use crate::{
    foundation::core::CssColor,
    render::node::{Element, Style},
};

/// Width of each fade panel.
pub const EDGE_FADE_WIDTH: &str = "180px";

/// Stacking layer of the panels, above the track.
pub const EDGE_FADE_Z_INDEX: &str = "10";

/// Viewport edge a panel is pinned to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    /// Left edge, gradient at 90deg.
    Left,
    /// Right edge, gradient at 270deg.
    Right,
}

impl Edge {
    fn pin_property(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
        }
    }

    fn angle(self) -> &'static str {
        match self {
            Self::Left => "90deg",
            Self::Right => "270deg",
        }
    }
}

/// Gradient from `color` at the edge to fully transparent 80% of the way across.
pub fn gradient(edge: Edge, color: &CssColor) -> String {
    format!(
        "linear-gradient({}, {color} 10%, rgba(255, 255, 255, 0) 80%)",
        edge.angle()
    )
}

/// One decorative, non-interactive fade panel.
pub fn render_overlay(edge: Edge, color: &CssColor) -> Element {
    Element::div().attr("aria-hidden", "true").style(
        Style::new()
            .with("position", "absolute")
            .with("top", "0")
            .with(edge.pin_property(), "0")
            .with("width", EDGE_FADE_WIDTH)
            .with("height", "100%")
            .with("z-index", EDGE_FADE_Z_INDEX)
            .with("pointer-events", "none")
            .with("background", gradient(edge, color)),
    )
}

/// Left and right fade panels.
pub fn render(color: &CssColor) -> (Element, Element) {
    (
        render_overlay(Edge::Left, color),
        render_overlay(Edge::Right, color),
    )
}

#[cfg(test)]
#[path = "../../tests/unit/overlay/edge_fade.rs"]
mod tests;
