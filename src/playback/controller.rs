use std::{cell::Cell, rc::Rc};

use crate::foundation::core::PlayState;

/// Live handle onto a mounted track's `animation-play-state`.
///
/// Owned by one slider instance; clones only ever go to that instance's controller, so writes
/// through it bypass rendering entirely.
#[derive(Clone, Debug, Default)]
pub struct TrackHandle(Rc<Cell<PlayState>>);

impl TrackHandle {
    /// Handle on a running track.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current play-state.
    pub fn play_state(&self) -> PlayState {
        self.0.get()
    }

    pub(crate) fn set_play_state(&self, state: PlayState) {
        self.0.set(state);
    }
}

/// Pointer transitions the wrapper reacts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the wrapper.
    Enter,
    /// Pointer left the wrapper.
    Leave,
}

/// Hover handlers pausing and resuming one track.
#[derive(Clone, Debug)]
pub struct PlaybackController {
    track: TrackHandle,
}

impl PlaybackController {
    /// Controller writing through `track`.
    pub fn new(track: TrackHandle) -> Self {
        Self { track }
    }

    /// Freeze the animation. Idempotent.
    pub fn pause(&self) {
        self.track.set_play_state(PlayState::Paused);
    }

    /// Resume the animation. Idempotent.
    pub fn resume(&self) {
        self.track.set_play_state(PlayState::Running);
    }

    /// Pointer-enter handler.
    pub fn on_enter(&self) {
        self.pause();
    }

    /// Pointer-leave handler.
    pub fn on_leave(&self) {
        self.resume();
    }

    /// Route a pointer event to its handler.
    pub fn handle(&self, event: PointerEvent) {
        tracing::trace!(?event, "hover transition");
        match event {
            PointerEvent::Enter => self.on_enter(),
            PointerEvent::Leave => self.on_leave(),
        }
    }

    /// Current play-state of the controlled track.
    pub fn play_state(&self) -> PlayState {
        self.track.play_state()
    }
}

/// Handlers to attach to the wrapper: a controller when `pause_on_hover`, nothing otherwise.
pub fn hover_handlers(pause_on_hover: bool, track: &TrackHandle) -> Option<PlaybackController> {
    pause_on_hover.then(|| PlaybackController::new(track.clone()))
}

#[cfg(test)]
#[path = "../../tests/unit/playback/controller.rs"]
mod tests;
