// Constants for the sorting visualizer

use std::time::Duration;

/// Default number of bars
pub const DEFAULT_LENGTH: usize = 50;

/// Default inclusive value range for generated arrays
pub const DEFAULT_MIN_VALUE: u32 = 10;
pub const DEFAULT_MAX_VALUE: u32 = 400;

/// Default delay between two playback steps
pub const DEFAULT_DELAY_MS: u64 = 50;

/// Upper bound on the array length accepted by the configuration.
///
/// Quadratic sorts record about n² steps; at this length a trace stays in
/// the low millions of steps.
pub const MAX_LENGTH: usize = 2_000;

/// Upper bound on the per-step delay
pub const MAX_DELAY_MS: u64 = 10_000;

/// Interval between two elapsed-time samples while a run is playing
pub const TICK_INTERVAL: Duration = Duration::from_millis(100);

/// Delay between two indices of the completion sweep
pub const SORTED_MARK_DELAY: Duration = Duration::from_millis(20);

/// Step tone: frequency = base + value * slope
pub const TONE_BASE_HZ: f32 = 200.0;
pub const TONE_HZ_PER_UNIT: f32 = 2.0;

/// Completion sweep tone: frequency = base + index * slope
pub const SWEEP_BASE_HZ: f32 = 400.0;
pub const SWEEP_HZ_PER_INDEX: f32 = 5.0;
