//! Statistics derived from the playback event stream

use super::events::{Observer, PlaybackEvent};
use std::time::Duration;

/// Comparison/swap counters and the latest elapsed-time sample.
///
/// Counts only what playback has dispatched, never what was merely recorded.
/// A `RunStarted` event resets everything, so one tracker can follow several
/// consecutive runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatsTracker {
    comparisons: u64,
    swaps: u64,
    elapsed: Duration,
}

impl StatsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn comparisons(&self) -> u64 {
        self.comparisons
    }

    pub fn swaps(&self) -> u64 {
        self.swaps
    }

    /// Running time at the last tick (paused time excluded)
    pub fn elapsed(&self) -> Duration {
        self.elapsed
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl Observer for StatsTracker {
    fn on_event(&mut self, event: &PlaybackEvent) {
        match event {
            PlaybackEvent::RunStarted { .. } => self.reset(),
            PlaybackEvent::Comparison => self.comparisons += 1,
            PlaybackEvent::Swap => self.swaps += 1,
            PlaybackEvent::TimeTick { elapsed } => self.elapsed = *elapsed,
            _ => {}
        }
    }
}
