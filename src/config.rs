//! Run configuration
//!
//! A [`Config`] is supplied once per run and stays immutable while the run
//! plays. It can be loaded from a TOML file and then overridden field by field
//! from the command line; [`Config::validate`] is the single gate every value
//! passes before an array is generated.

use crate::constants::{
    DEFAULT_DELAY_MS, DEFAULT_LENGTH, DEFAULT_MAX_VALUE, DEFAULT_MIN_VALUE, MAX_DELAY_MS,
    MAX_LENGTH,
};
use crate::errors::ConfigError;
use serde::Deserialize;
use std::fmt;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;

/// The sorting algorithms a trace can be recorded for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    #[default]
    Bubble,
    Selection,
    Insertion,
    Merge,
    Quick,
    Heap,
}

impl Algorithm {
    /// All algorithms in selector order
    pub const ALL: [Algorithm; 6] = [
        Algorithm::Bubble,
        Algorithm::Selection,
        Algorithm::Insertion,
        Algorithm::Merge,
        Algorithm::Quick,
        Algorithm::Heap,
    ];

    /// The lowercase key used in config files and on the command line
    pub fn key(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Selection => "selection",
            Algorithm::Insertion => "insertion",
            Algorithm::Merge => "merge",
            Algorithm::Quick => "quick",
            Algorithm::Heap => "heap",
        }
    }

    /// Next algorithm in the selector, wrapping around
    pub fn next(self) -> Self {
        let i = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(i + 1) % Self::ALL.len()]
    }

    /// Previous algorithm in the selector, wrapping around
    pub fn prev(self) -> Self {
        let i = Self::ALL.iter().position(|a| *a == self).unwrap_or(0);
        Self::ALL[(i + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Heap => "Heap Sort",
        };
        f.write_str(name)
    }
}

impl FromStr for Algorithm {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        Self::ALL
            .iter()
            .copied()
            .find(|a| a.key() == key)
            .ok_or_else(|| ConfigError::UnknownAlgorithm(s.to_string()))
    }
}

/// How the scheduler obtains steps
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlaybackMode {
    /// Record the full trace up front, then replay it
    #[default]
    Recorded,
    /// Run the algorithm on a worker that pauses after every step
    Live,
}

impl fmt::Display for PlaybackMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaybackMode::Recorded => f.write_str("recorded"),
            PlaybackMode::Live => f.write_str("live"),
        }
    }
}

/// Inclusive range of generated bar values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ValueRange {
    pub min: u32,
    pub max: u32,
}

impl ValueRange {
    pub fn new(min: u32, max: u32) -> Result<Self, ConfigError> {
        let range = ValueRange { min, max };
        range.validate()?;
        Ok(range)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min > self.max {
            return Err(ConfigError::InvalidRange {
                min: self.min,
                max: self.max,
            });
        }
        Ok(())
    }

    pub fn contains(&self, value: u32) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

impl Default for ValueRange {
    fn default() -> Self {
        ValueRange {
            min: DEFAULT_MIN_VALUE,
            max: DEFAULT_MAX_VALUE,
        }
    }
}

/// Everything one run needs to know
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Number of bars
    pub length: usize,
    /// Range generated values are drawn from
    pub range: ValueRange,
    /// Delay between two playback steps, in milliseconds
    pub delay_ms: u64,
    pub algorithm: Algorithm,
    /// Emit a tone for every value change
    pub sound: bool,
    /// Only read by the UI
    pub dark_theme: bool,
    pub mode: PlaybackMode,
    /// Seed for reproducible arrays; `None` seeds from the OS
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            length: DEFAULT_LENGTH,
            range: ValueRange::default(),
            delay_ms: DEFAULT_DELAY_MS,
            algorithm: Algorithm::default(),
            sound: false,
            dark_theme: true,
            mode: PlaybackMode::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Load a configuration file. Missing keys take their defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Config = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check every field against its bounds
    pub fn validate(&self) -> Result<(), ConfigError> {
        validate_length(self.length)?;
        self.range.validate()?;
        validate_delay(self.delay_ms)?;
        Ok(())
    }

    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.delay_ms)
    }

    /// Equivalent playback rate; `None` when steps are not delayed at all
    pub fn steps_per_second(&self) -> Option<f64> {
        (self.delay_ms > 0).then(|| 1000.0 / self.delay_ms as f64)
    }
}

pub(crate) fn validate_length(length: usize) -> Result<(), ConfigError> {
    if length == 0 || length > MAX_LENGTH {
        return Err(ConfigError::InvalidLength {
            length,
            max: MAX_LENGTH,
        });
    }
    Ok(())
}

pub(crate) fn validate_delay(delay_ms: u64) -> Result<(), ConfigError> {
    if delay_ms > MAX_DELAY_MS {
        return Err(ConfigError::InvalidDelay {
            delay_ms,
            max: MAX_DELAY_MS,
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.length, 50);
        assert_eq!(config.range, ValueRange::new(10, 400).unwrap());
        assert_eq!(config.steps_per_second(), Some(20.0));
    }

    #[test]
    fn test_algorithm_keys() {
        for algorithm in Algorithm::ALL {
            assert_eq!(algorithm.key().parse::<Algorithm>().unwrap(), algorithm);
        }
        assert_eq!(" Quick ".parse::<Algorithm>().unwrap(), Algorithm::Quick);
        assert!(matches!(
            "bogo".parse::<Algorithm>(),
            Err(ConfigError::UnknownAlgorithm(key)) if key == "bogo"
        ));
    }

    #[test]
    fn test_algorithm_cycle() {
        assert_eq!(Algorithm::Bubble.next(), Algorithm::Selection);
        assert_eq!(Algorithm::Heap.next(), Algorithm::Bubble);
        assert_eq!(Algorithm::Bubble.prev(), Algorithm::Heap);
    }

    #[test]
    fn test_rejects_bad_values() {
        let config = Config {
            length: 0,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLength { length: 0, .. })
        ));

        assert!(matches!(
            ValueRange::new(50, 10),
            Err(ConfigError::InvalidRange { min: 50, max: 10 })
        ));

        let config = Config {
            delay_ms: MAX_DELAY_MS + 1,
            ..Config::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidDelay { .. })
        ));
    }

    #[test]
    fn test_length_bound() {
        assert_eq!(MAX_LENGTH, 2_000);
        let at_limit = Config {
            length: MAX_LENGTH,
            ..Config::default()
        };
        assert!(at_limit.validate().is_ok());

        let over = Config {
            length: MAX_LENGTH + 1,
            ..Config::default()
        };
        assert!(matches!(
            over.validate(),
            Err(ConfigError::InvalidLength { length, max: MAX_LENGTH }) if length == MAX_LENGTH + 1
        ));
    }

    #[test]
    fn test_load_partial_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "length = 12\nalgorithm = \"merge\"\nmode = \"live\"\n\n[range]\nmin = 1\nmax = 9"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.length, 12);
        assert_eq!(config.algorithm, Algorithm::Merge);
        assert_eq!(config.mode, PlaybackMode::Live);
        assert_eq!(config.range, ValueRange { min: 1, max: 9 });
        assert_eq!(config.delay_ms, DEFAULT_DELAY_MS);
    }

    #[test]
    fn test_load_rejects_unknown_keys_and_bad_ranges() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "colour = \"red\"").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse { .. })
        ));

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[range]\nmin = 9\nmax = 1").unwrap();
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::InvalidRange { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/sortty.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/sortty.toml"));
    }
}
