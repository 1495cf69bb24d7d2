//! Events emitted by the scheduler and the observers that consume them

use crate::config::Algorithm;
use std::time::Duration;

/// Why a bar is highlighted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HighlightKind {
    Compare,
    Swap,
    Overwrite,
}

/// A visual or statistical update produced during playback.
///
/// `Highlight`/`Unhighlight` carry two indices; single-bar highlights (an
/// overwrite) repeat the same index in `a` and `b`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackEvent {
    // Display
    RunStarted { algorithm: Algorithm, len: usize },
    Highlight { a: usize, b: usize, kind: HighlightKind },
    Unhighlight { a: usize, b: usize },
    SetHeight { index: usize, value: u32 },
    MarkSorted { index: usize },
    RunCompleted,
    RunStopped,

    // Statistics
    Comparison,
    Swap,
    TimeTick { elapsed: Duration },

    /// Sound-on-step; only emitted when sound is enabled
    Tone { frequency_hz: f32 },
}

/// Receiver of playback events
pub trait Observer {
    fn on_event(&mut self, event: &PlaybackEvent);
}

/// Discards everything
impl Observer for () {
    fn on_event(&mut self, _event: &PlaybackEvent) {}
}

/// Captures everything, in order
impl Observer for Vec<PlaybackEvent> {
    fn on_event(&mut self, event: &PlaybackEvent) {
        self.push(*event);
    }
}

/// Fan out to two observers, left first
impl<A: Observer + ?Sized, B: Observer + ?Sized> Observer for (&mut A, &mut B) {
    fn on_event(&mut self, event: &PlaybackEvent) {
        self.0.on_event(event);
        self.1.on_event(event);
    }
}
