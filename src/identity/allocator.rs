use std::{
    fmt,
    sync::atomic::{AtomicU64, Ordering},
};

/// Prefix shared by every generated keyframe name.
pub const ANIMATION_NAME_PREFIX: &str = "slider-animation-";

/// Characters that cannot appear unescaped in a CSS `<custom-ident>` used as an
/// `animation-name` / `@keyframes` name. Whitespace and control characters are stripped too.
const ILLEGAL_NAME_CHARS: &[char] = &[
    ':', '.', '#', ',', ';', '{', '}', '(', ')', '[', ']', '<', '>', '"', '\'', '`', '\\', '/',
    '@', '!', '$', '%', '^', '&', '*', '+', '=', '|', '~', '?',
];

static FALLBACK_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Collision-free keyframe name owned by one slider instance.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, serde::Serialize)]
pub struct AnimationName(String);

impl AnimationName {
    /// Borrow the name.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AnimationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Strip every character that is not valid inside an animation name.
pub fn sanitize_token(raw: &str) -> String {
    raw.chars()
        .filter(|c| !ILLEGAL_NAME_CHARS.contains(c) && !c.is_whitespace() && !c.is_control())
        .collect()
}

type HostIdFn = Box<dyn Fn() -> Option<String>>;

/// Hands out one [`AnimationName`] per slider instance.
///
/// When a host id primitive is installed its tokens are used (after sanitizing). Otherwise, or
/// when the host yields nothing usable, a process-wide monotonic counter plus a random suffix
/// is used, so allocation never fails.
#[derive(Default)]
pub struct IdAllocator {
    host: Option<HostIdFn>,
}

impl IdAllocator {
    /// Allocator that always uses the counter + random fallback.
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocator backed by a host-provided unique id primitive.
    pub fn with_host(host: impl Fn() -> Option<String> + 'static) -> Self {
        Self {
            host: Some(Box::new(host)),
        }
    }

    /// Produce a fresh name.
    pub fn allocate(&self) -> AnimationName {
        if let Some(host) = &self.host {
            match host().map(|raw| sanitize_token(&raw)) {
                Some(token) if !token.is_empty() => {
                    return AnimationName(format!("{ANIMATION_NAME_PREFIX}{token}"));
                }
                _ => tracing::debug!("host id primitive yielded no usable token; using fallback"),
            }
        }

        let seq = FALLBACK_COUNTER.fetch_add(1, Ordering::Relaxed);
        let salt: u32 = rand::random();
        AnimationName(format!("{ANIMATION_NAME_PREFIX}{seq:x}-{salt:08x}"))
    }
}

impl fmt::Debug for IdAllocator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IdAllocator")
            .field("host", &self.host.is_some())
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/identity/allocator.rs"]
mod tests;
