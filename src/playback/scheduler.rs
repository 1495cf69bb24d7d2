//! Playback scheduler
//!
//! The scheduler never sleeps. The host calls [`Scheduler::advance`] with the
//! current time (from its event loop, or with synthetic instants in tests) and
//! the scheduler performs every action that has come due, in order, emitting
//! events to an [`Observer`].
//!
//! # Timing
//!
//! All deadlines live in *running time*: wall time minus the time spent paused.
//! Pausing freezes running time, so a resumed run continues with exactly the
//! delay budget it had left, and elapsed-time samples exclude the pause.
//!
//! Each step occupies one delay interval:
//!
//! ```text
//! t          apply step: Highlight (+ SetHeight / Tone for writes)
//! t + delay  Unhighlight, then the next step is applied
//! ```
//!
//! `TimeTick` samples fire every [`TICK_INTERVAL`] of running time. When the
//! source is exhausted the run completes and a separate sweep marks each index
//! sorted, left to right, [`SORTED_MARK_DELAY`] apart.
//!
//! # Cancellation
//!
//! [`Scheduler::stop`] takes effect immediately: the pending revert of the step
//! in flight is dropped, the source is discarded, and `RunStopped` is the last
//! event the run ever emits. The display array then reflects exactly the steps
//! consumed before the stop.

use super::events::{HighlightKind, Observer, PlaybackEvent};
use super::source::StepSource;
use super::stats::StatsTracker;
use super::{PlaybackState, RunStatus};
use crate::config::{Algorithm, Config};
use crate::constants::{
    SORTED_MARK_DELAY, SWEEP_BASE_HZ, SWEEP_HZ_PER_INDEX, TICK_INTERVAL, TONE_BASE_HZ,
    TONE_HZ_PER_UNIT,
};
use crate::errors::PlaybackError;
use crate::trace::{apply, Step};
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Per-run playback parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSettings {
    pub step_delay: Duration,
    pub sound: bool,
}

impl From<&Config> for PlaybackSettings {
    fn from(config: &Config) -> Self {
        PlaybackSettings {
            step_delay: config.step_delay(),
            sound: config.sound,
        }
    }
}

/// Progress of the completion sweep
#[derive(Debug, Clone, Copy)]
struct Sweep {
    started: Instant,
    next_index: usize,
}

/// Drives one run from `Idle` to `Completed` or `Stopped`
#[derive(Debug)]
pub struct Scheduler {
    /// Dropped as soon as the run completes or stops
    source: Option<StepSource>,
    algorithm: Algorithm,
    total_steps: Option<usize>,
    settings: PlaybackSettings,

    /// What the viewer has been shown so far
    display: Vec<u32>,
    status: RunStatus,
    step_index: usize,

    /// Highlight waiting to be reverted at `next_due`
    pending: Option<(usize, usize)>,
    /// Running-time deadline of the next action
    next_due: Duration,
    /// Running-time deadline of the next `TimeTick`
    next_tick: Duration,

    /// Running time accumulated before the last resume
    accumulated: Duration,
    /// Wall time of the last start/resume; `None` unless running
    resumed_at: Option<Instant>,

    stats: StatsTracker,
    sweep: Option<Sweep>,
}

impl Scheduler {
    /// Create an idle scheduler. `initial` is the array the source was
    /// recorded against and becomes the display array.
    pub fn new(source: StepSource, initial: Vec<u32>, settings: PlaybackSettings) -> Self {
        if initial.len() != source.input_len() {
            warn!(
                display = initial.len(),
                source = source.input_len(),
                "display array and step source disagree on length"
            );
        }
        Scheduler {
            algorithm: source.algorithm(),
            total_steps: source.total_steps(),
            source: Some(source),
            settings,
            display: initial,
            status: RunStatus::Idle,
            step_index: 0,
            pending: None,
            next_due: Duration::ZERO,
            next_tick: TICK_INTERVAL,
            accumulated: Duration::ZERO,
            resumed_at: None,
            stats: StatsTracker::new(),
            sweep: None,
        }
    }

    // ========== Control ==========

    /// `Idle -> Running`. The first step is applied immediately; an empty
    /// source completes within this call.
    pub fn start(&mut self, now: Instant, observer: &mut dyn Observer) -> Result<(), PlaybackError> {
        self.expect(RunStatus::Idle, "start")?;

        info!(
            algorithm = %self.algorithm,
            len = self.display.len(),
            total_steps = ?self.total_steps,
            "run started"
        );
        self.status = RunStatus::Running;
        self.resumed_at = Some(now);
        self.emit(
            PlaybackEvent::RunStarted {
                algorithm: self.algorithm,
                len: self.display.len(),
            },
            observer,
        );
        self.advance(now, observer);
        Ok(())
    }

    /// `Running -> Paused`. The step index and remaining delay are kept.
    pub fn pause(&mut self, now: Instant) -> Result<(), PlaybackError> {
        self.expect(RunStatus::Running, "pause")?;
        self.accumulated = self.running_elapsed(now);
        self.resumed_at = None;
        self.status = RunStatus::Paused;
        debug!(step = self.step_index, elapsed = ?self.accumulated, "run paused");
        Ok(())
    }

    /// `Paused -> Running`
    pub fn resume(&mut self, now: Instant) -> Result<(), PlaybackError> {
        self.expect(RunStatus::Paused, "resume")?;
        self.resumed_at = Some(now);
        self.status = RunStatus::Running;
        debug!(step = self.step_index, "run resumed");
        Ok(())
    }

    /// `Running | Paused -> Stopped`.
    ///
    /// On a completed run this only cuts the completion sweep short.
    pub fn stop(&mut self, now: Instant, observer: &mut dyn Observer) -> Result<(), PlaybackError> {
        match self.status {
            RunStatus::Running | RunStatus::Paused => {
                self.accumulated = self.running_elapsed(now);
                self.resumed_at = None;
                self.pending = None;
                self.source = None;
                self.status = RunStatus::Stopped;
                info!(
                    step = self.step_index,
                    comparisons = self.stats.comparisons(),
                    swaps = self.stats.swaps(),
                    "run stopped"
                );
                self.emit(
                    PlaybackEvent::TimeTick {
                        elapsed: self.accumulated,
                    },
                    observer,
                );
                self.emit(PlaybackEvent::RunStopped, observer);
                Ok(())
            }
            RunStatus::Completed => {
                self.sweep = None;
                Ok(())
            }
            from => Err(PlaybackError::InvalidTransition {
                from,
                action: "stop",
            }),
        }
    }

    /// Perform everything that has come due by `now`
    pub fn advance(&mut self, now: Instant, observer: &mut dyn Observer) {
        match self.status {
            RunStatus::Running => self.advance_steps(now, observer),
            RunStatus::Completed => self.advance_sweep(now, observer),
            RunStatus::Idle | RunStatus::Paused | RunStatus::Stopped => {}
        }
    }

    // ========== Queries ==========

    pub fn status(&self) -> RunStatus {
        self.status
    }

    /// The array as the viewer currently sees it
    pub fn display(&self) -> &[u32] {
        &self.display
    }

    pub fn stats(&self) -> &StatsTracker {
        &self.stats
    }

    pub fn state(&self) -> PlaybackState {
        PlaybackState {
            step_index: self.step_index,
            total_steps: self.total_steps,
            status: self.status,
            comparisons: self.stats.comparisons(),
            swaps: self.stats.swaps(),
            elapsed: self.stats.elapsed(),
        }
    }

    /// Unsampled running time at `now`
    pub fn elapsed(&self, now: Instant) -> Duration {
        self.running_elapsed(now)
    }

    /// True once nothing more will ever be emitted
    pub fn is_finished(&self) -> bool {
        match self.status {
            RunStatus::Stopped => true,
            RunStatus::Completed => self.sweep.is_none(),
            _ => false,
        }
    }

    /// Wall time of the next scheduled action, for hosts that sleep between
    /// calls to [`advance`](Self::advance). `None` when nothing is scheduled.
    pub fn next_deadline(&self) -> Option<Instant> {
        match self.status {
            RunStatus::Running => {
                let resumed_at = self.resumed_at?;
                let due = self.next_due.min(self.next_tick);
                Some(resumed_at + due.saturating_sub(self.accumulated))
            }
            RunStatus::Completed => {
                let sweep = self.sweep?;
                Some(sweep.started + sweep_offset(sweep.next_index))
            }
            _ => None,
        }
    }

    // ========== Internals ==========

    fn expect(&self, status: RunStatus, action: &'static str) -> Result<(), PlaybackError> {
        if self.status != status {
            debug!(from = %self.status, action, "rejected playback transition");
            return Err(PlaybackError::InvalidTransition {
                from: self.status,
                action,
            });
        }
        Ok(())
    }

    fn running_elapsed(&self, now: Instant) -> Duration {
        match self.resumed_at {
            Some(resumed_at) => self.accumulated + now.saturating_duration_since(resumed_at),
            None => self.accumulated,
        }
    }

    fn emit(&mut self, event: PlaybackEvent, observer: &mut dyn Observer) {
        self.stats.on_event(&event);
        observer.on_event(&event);
    }

    fn advance_steps(&mut self, now: Instant, observer: &mut dyn Observer) {
        let target = self.running_elapsed(now);

        loop {
            if self.next_tick <= self.next_due && self.next_tick <= target {
                let elapsed = self.next_tick;
                self.next_tick += TICK_INTERVAL;
                self.emit(PlaybackEvent::TimeTick { elapsed }, observer);
                continue;
            }
            if self.next_due > target {
                break;
            }
            if let Some((a, b)) = self.pending.take() {
                self.emit(PlaybackEvent::Unhighlight { a, b }, observer);
                continue;
            }

            let next = self.source.as_mut().and_then(StepSource::next_step);
            match next {
                Some(step) => {
                    self.dispatch(step, observer);
                    self.next_due += self.settings.step_delay;
                }
                None => {
                    self.complete(now, target, observer);
                    self.advance_sweep(now, observer);
                    break;
                }
            }
        }
    }

    /// Apply one step to the display and announce it
    fn dispatch(&mut self, step: Step, observer: &mut dyn Observer) {
        self.step_index += 1;

        match step {
            Step::Compare(..) => self.emit(PlaybackEvent::Comparison, observer),
            Step::Swap(..) => self.emit(PlaybackEvent::Swap, observer),
            Step::Overwrite(..) | Step::MarkSorted(_) => {}
        }

        if !apply(&step, &mut self.display) {
            warn!(?step, len = self.display.len(), "step out of range, skipped");
            return;
        }

        match step {
            Step::Compare(a, b) => {
                self.highlight(a, b, HighlightKind::Compare, observer);
            }
            Step::Swap(a, b) => {
                self.highlight(a, b, HighlightKind::Swap, observer);
                let (va, vb) = (self.display[a], self.display[b]);
                self.emit(PlaybackEvent::SetHeight { index: a, value: va }, observer);
                self.emit(PlaybackEvent::SetHeight { index: b, value: vb }, observer);
                self.tone(step_tone(va), observer);
            }
            Step::Overwrite(index, value) => {
                self.highlight(index, index, HighlightKind::Overwrite, observer);
                self.emit(PlaybackEvent::SetHeight { index, value }, observer);
                self.tone(step_tone(value), observer);
            }
            Step::MarkSorted(index) => {
                self.emit(PlaybackEvent::MarkSorted { index }, observer);
            }
        }
    }

    fn highlight(&mut self, a: usize, b: usize, kind: HighlightKind, observer: &mut dyn Observer) {
        self.emit(PlaybackEvent::Highlight { a, b, kind }, observer);
        self.pending = Some((a, b));
    }

    fn tone(&mut self, frequency_hz: f32, observer: &mut dyn Observer) {
        if self.settings.sound {
            self.emit(PlaybackEvent::Tone { frequency_hz }, observer);
        }
    }

    /// The source ran dry at running time `next_due`
    fn complete(&mut self, now: Instant, target: Duration, observer: &mut dyn Observer) {
        let finished_at = self.next_due;
        let late = target.saturating_sub(finished_at);

        self.accumulated = finished_at;
        self.resumed_at = None;
        self.source = None;
        self.status = RunStatus::Completed;
        self.sweep = (!self.display.is_empty()).then(|| Sweep {
            started: now.checked_sub(late).unwrap_or(now),
            next_index: 0,
        });

        info!(
            steps = self.step_index,
            comparisons = self.stats.comparisons(),
            swaps = self.stats.swaps(),
            elapsed = ?finished_at,
            "run completed"
        );
        self.emit(
            PlaybackEvent::TimeTick {
                elapsed: finished_at,
            },
            observer,
        );
        self.emit(PlaybackEvent::RunCompleted, observer);
    }

    fn advance_sweep(&mut self, now: Instant, observer: &mut dyn Observer) {
        let Some(mut sweep) = self.sweep else {
            return;
        };

        while sweep.next_index < self.display.len()
            && sweep.started + sweep_offset(sweep.next_index) <= now
        {
            let index = sweep.next_index;
            self.emit(PlaybackEvent::MarkSorted { index }, observer);
            self.tone(SWEEP_BASE_HZ + index as f32 * SWEEP_HZ_PER_INDEX, observer);
            sweep.next_index += 1;
        }

        self.sweep = (sweep.next_index < self.display.len()).then_some(sweep);
    }
}

fn step_tone(value: u32) -> f32 {
    TONE_BASE_HZ + value as f32 * TONE_HZ_PER_UNIT
}

fn sweep_offset(index: usize) -> Duration {
    SORTED_MARK_DELAY * u32::try_from(index).unwrap_or(u32::MAX)
}
