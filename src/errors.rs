//! Error types for the sorting visualizer
//!
//! Three layers of failure exist, each with its own type:
//!
//! - [`ConfigError`]: a configuration value was rejected before any array was
//!   generated or any trace recorded.
//! - [`PlaybackError`]: a control request did not match the scheduler's
//!   current state (for example resuming a run that is not paused).
//! - [`SessionError`]: a request to the [`Visualizer`](crate::session::Visualizer)
//!   failed, either for one of the reasons above or because a run is active.
//!
//! None of these are fatal; the caller decides whether to report or ignore them.

use crate::playback::RunStatus;
use std::path::PathBuf;
use thiserror::Error;

/// Rejected configuration values
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Array length outside `1..=max`
    #[error("array length {length} is out of bounds (expected 1..={max})")]
    InvalidLength { length: usize, max: usize },

    /// Value range with `min > max`
    #[error("value range {min}..={max} is empty (min must not exceed max)")]
    InvalidRange { min: u32, max: u32 },

    /// Per-step delay above the accepted maximum
    #[error("step delay {delay_ms}ms exceeds the maximum of {max}ms")]
    InvalidDelay { delay_ms: u64, max: u64 },

    /// Algorithm key that is not one of the supported sorts
    #[error("unsupported algorithm '{0}' (expected bubble, selection, insertion, merge, quick or heap)")]
    UnknownAlgorithm(String),

    /// Configuration file could not be read
    #[error("failed to read config file {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file is not valid TOML for [`Config`](crate::config::Config)
    #[error("failed to parse config file {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// State machine misuse on a [`Scheduler`](crate::playback::Scheduler)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PlaybackError {
    #[error("cannot {action} while {from}")]
    InvalidTransition {
        from: RunStatus,
        action: &'static str,
    },
}

/// Failures reported by the [`Visualizer`](crate::session::Visualizer)
#[derive(Debug, Error)]
pub enum SessionError {
    /// A run is playing or paused; configuration and array are locked
    #[error("a run is in progress; stop it before changing the configuration")]
    Busy,

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// The live-mode worker thread could not be started
    #[error("failed to start live worker: {0}")]
    Worker(#[from] std::io::Error),
}
