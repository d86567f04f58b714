use std::fmt;

use crate::foundation::error::{MarqueeError, MarqueeResult};

/// Characters that would let a value escape the declaration, rule or element it is
/// interpolated into.
const CSS_VALUE_BREAKERS: &[char] = &[';', '{', '}', '<', '>'];

fn check_css_value(kind: &str, raw: &str) -> MarqueeResult<String> {
    let value = raw.trim();
    if value.is_empty() {
        return Err(MarqueeError::validation(format!("{kind} must not be empty")));
    }
    if let Some(c) = value
        .chars()
        .find(|c| CSS_VALUE_BREAKERS.contains(c) || c.is_control())
    {
        return Err(MarqueeError::validation(format!(
            "{kind} \"{value}\" contains forbidden character {c:?}"
        )));
    }
    Ok(value.to_owned())
}

/// A CSS length expression (`200px`, `12rem`, `calc(100vw / 5)`, ...).
///
/// The value is never evaluated numerically; arithmetic on it is emitted as `calc()` and left
/// to the rendering surface, so relative units keep working.
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SizeExpr(String);

impl SizeExpr {
    /// Validate and wrap a CSS length expression.
    pub fn new(raw: impl AsRef<str>) -> MarqueeResult<Self> {
        check_css_value("size expression", raw.as_ref()).map(Self)
    }

    /// Borrow the expression text.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// `calc(<self> * <factor>)`.
    pub fn times(&self, factor: usize) -> String {
        format!("calc({} * {factor})", self.0)
    }

    /// `calc(<self> * <factor> * -1)`.
    pub fn times_negated(&self, factor: usize) -> String {
        format!("calc({} * {factor} * -1)", self.0)
    }
}

impl Default for SizeExpr {
    fn default() -> Self {
        Self("200px".to_owned())
    }
}

impl TryFrom<String> for SizeExpr {
    type Error = MarqueeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<SizeExpr> for String {
    fn from(value: SizeExpr) -> Self {
        value.0
    }
}

impl fmt::Display for SizeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A CSS color value, passed through verbatim (`#fff`, `rgb(0 0 0)`, `tomato`, ...).
#[derive(Clone, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct CssColor(String);

impl CssColor {
    /// Validate and wrap a CSS color.
    pub fn new(raw: impl AsRef<str>) -> MarqueeResult<Self> {
        check_css_value("color", raw.as_ref()).map(Self)
    }

    /// Borrow the color text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for CssColor {
    fn default() -> Self {
        Self("#fff".to_owned())
    }
}

impl TryFrom<String> for CssColor {
    type Error = MarqueeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<CssColor> for String {
    fn from(value: CssColor) -> Self {
        value.0
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Horizontal scroll direction of the strip.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Content moves leftward.
    #[default]
    Left,
    /// Content moves rightward, entering from the left edge.
    Right,
}

/// Value of the track's `animation-play-state`.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum PlayState {
    /// Animation advances.
    #[default]
    Running,
    /// Animation is frozen at its current progress.
    Paused,
}

impl PlayState {
    /// CSS keyword for this state.
    pub fn as_css(self) -> &'static str {
        match self {
            Self::Running => "running",
            Self::Paused => "paused",
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
