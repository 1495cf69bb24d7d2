//! Timed playback of recorded (or live) sorting steps
//!
//! - [`scheduler`]: the [`Scheduler`] state machine that turns steps into
//!   timed [`PlaybackEvent`]s, with pause, resume and stop
//! - [`events`]: the event vocabulary and the [`Observer`] trait
//! - [`stats`]: the [`StatsTracker`] observer
//!
//! # State machine
//!
//! ```text
//! Idle ──start──▶ Running ◀──resume── Paused
//!                   │  └────pause────────▲
//!                   ├──(source drained)──▶ Completed
//!                   └──stop (also from Paused)──▶ Stopped
//! ```
//!
//! `Completed` and `Stopped` are terminal; a new run needs a new scheduler.

pub mod events;
pub mod scheduler;
pub mod source;
pub mod stats;

pub use events::{HighlightKind, Observer, PlaybackEvent};
pub use scheduler::{PlaybackSettings, Scheduler};
pub use source::StepSource;
pub use stats::StatsTracker;

use std::fmt;
use std::time::Duration;

/// Lifecycle of one playback run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RunStatus {
    Idle,
    Running,
    Paused,
    Completed,
    Stopped,
}

impl RunStatus {
    /// Running or paused: the run still owns the display
    pub fn is_active(self) -> bool {
        matches!(self, RunStatus::Running | RunStatus::Paused)
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, RunStatus::Completed | RunStatus::Stopped)
    }
}

impl fmt::Display for RunStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RunStatus::Idle => "idle",
            RunStatus::Running => "running",
            RunStatus::Paused => "paused",
            RunStatus::Completed => "completed",
            RunStatus::Stopped => "stopped",
        };
        f.write_str(name)
    }
}

/// Read-only view of a run for observers and the UI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackState {
    /// Number of steps consumed so far
    pub step_index: usize,
    /// Total steps, when known up front (recorded mode)
    pub total_steps: Option<usize>,
    pub status: RunStatus,
    pub comparisons: u64,
    pub swaps: u64,
    /// Sampled running time
    pub elapsed: Duration,
}

impl Default for PlaybackState {
    fn default() -> Self {
        PlaybackState {
            step_index: 0,
            total_steps: None,
            status: RunStatus::Idle,
            comparisons: 0,
            swaps: 0,
            elapsed: Duration::ZERO,
        }
    }
}
