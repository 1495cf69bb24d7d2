//! Display-side state: bar heights and per-bar colour state
//!
//! [`VisualState`] is the observer the TUI hands to the scheduler. It only
//! ever changes in response to playback events, so what it shows is exactly
//! what playback has revealed so far.

use crate::playback::{HighlightKind, Observer, PlaybackEvent};
use rustc_hash::FxHashMap;

/// Colour state of a single bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BarState {
    Compare,
    Swap,
    Overwrite,
    Sorted,
}

impl From<HighlightKind> for BarState {
    fn from(kind: HighlightKind) -> Self {
        match kind {
            HighlightKind::Compare => BarState::Compare,
            HighlightKind::Swap => BarState::Swap,
            HighlightKind::Overwrite => BarState::Overwrite,
        }
    }
}

#[derive(Debug, Default)]
pub struct VisualState {
    values: Vec<u32>,
    /// Bars not listed are drawn in the plain bar colour
    marks: FxHashMap<usize, BarState>,
    /// Frequency of the most recent tone, if sound is on
    last_tone: Option<f32>,
}

impl VisualState {
    pub fn new(values: &[u32]) -> Self {
        let mut state = Self::default();
        state.reset(values);
        state
    }

    /// Show `values` with no highlights
    pub fn reset(&mut self, values: &[u32]) {
        self.values.clear();
        self.values.extend_from_slice(values);
        self.marks.clear();
        self.last_tone = None;
    }

    pub fn values(&self) -> &[u32] {
        &self.values
    }

    pub fn bar_state(&self, index: usize) -> Option<BarState> {
        self.marks.get(&index).copied()
    }

    pub fn last_tone(&self) -> Option<f32> {
        self.last_tone
    }

    fn unmark(&mut self, index: usize) {
        if self.marks.get(&index) != Some(&BarState::Sorted) {
            self.marks.remove(&index);
        }
    }
}

impl Observer for VisualState {
    fn on_event(&mut self, event: &PlaybackEvent) {
        match *event {
            PlaybackEvent::RunStarted { .. } => {
                self.marks.clear();
                self.last_tone = None;
            }
            PlaybackEvent::Highlight { a, b, kind } => {
                self.marks.insert(a, kind.into());
                self.marks.insert(b, kind.into());
            }
            PlaybackEvent::Unhighlight { a, b } => {
                self.unmark(a);
                self.unmark(b);
            }
            PlaybackEvent::SetHeight { index, value } => {
                if let Some(slot) = self.values.get_mut(index) {
                    *slot = value;
                }
            }
            PlaybackEvent::MarkSorted { index } => {
                self.marks.insert(index, BarState::Sorted);
            }
            PlaybackEvent::RunStopped => self.marks.clear(),
            PlaybackEvent::Tone { frequency_hz } => self.last_tone = Some(frequency_hz),
            PlaybackEvent::RunCompleted
            | PlaybackEvent::Comparison
            | PlaybackEvent::Swap
            | PlaybackEvent::TimeTick { .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_highlight_cycle() {
        let mut visual = VisualState::new(&[3, 1]);
        visual.on_event(&PlaybackEvent::Highlight {
            a: 0,
            b: 1,
            kind: HighlightKind::Swap,
        });
        visual.on_event(&PlaybackEvent::SetHeight { index: 0, value: 1 });
        visual.on_event(&PlaybackEvent::SetHeight { index: 1, value: 3 });
        assert_eq!(visual.bar_state(0), Some(BarState::Swap));
        assert_eq!(visual.values(), &[1, 3]);

        visual.on_event(&PlaybackEvent::Unhighlight { a: 0, b: 1 });
        assert_eq!(visual.bar_state(0), None);
    }

    #[test]
    fn test_sorted_survives_unhighlight_but_not_stop() {
        let mut visual = VisualState::new(&[1, 2]);
        visual.on_event(&PlaybackEvent::MarkSorted { index: 1 });
        visual.on_event(&PlaybackEvent::Unhighlight { a: 1, b: 1 });
        assert_eq!(visual.bar_state(1), Some(BarState::Sorted));

        visual.on_event(&PlaybackEvent::RunStopped);
        assert_eq!(visual.bar_state(1), None);
    }
}
