//! The visualizer session: configuration, current array and the active run
//!
//! A [`Visualizer`] is the single writer for everything a run touches. It
//! enforces two rules:
//!
//! - configuration changes and array regeneration are rejected with
//!   [`SessionError::Busy`] while a run is running or paused;
//! - starting a run while another is active stops the old one first (it emits
//!   `RunStopped`), so two schedulers never share the display.
//!
//! When a run finishes, the session array adopts what the viewer last saw, so
//! the next run starts from the on-screen bars.

use crate::config::{self, Algorithm, Config, PlaybackMode, ValueRange};
use crate::errors::{PlaybackError, SessionError};
use crate::generator::ArrayGenerator;
use crate::playback::{
    Observer, PlaybackSettings, PlaybackState, RunStatus, Scheduler, StatsTracker, StepSource,
};
use crate::trace::{self, live::LiveRun};
use std::time::Instant;
use tracing::{debug, info};

pub struct Visualizer {
    config: Config,
    generator: ArrayGenerator,
    array: Vec<u32>,
    run: Option<Scheduler>,
}

impl Visualizer {
    /// Validate `config` and generate the first array
    pub fn new(config: Config) -> Result<Self, SessionError> {
        config.validate()?;
        let mut generator = ArrayGenerator::new(config.seed);
        let array = generator.generate(config.length, config.range);
        Ok(Visualizer {
            config,
            generator,
            array,
            run: None,
        })
    }

    /// Session over a fixed array instead of a generated one
    pub fn with_array(config: Config, array: Vec<u32>) -> Result<Self, SessionError> {
        let config = Config {
            length: array.len(),
            ..config
        };
        config.validate()?;
        Ok(Visualizer {
            generator: ArrayGenerator::new(config.seed),
            config,
            array,
            run: None,
        })
    }

    // ========== Configuration ==========

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Replace the array with a freshly generated one. Resets statistics.
    pub fn regenerate(&mut self) -> Result<(), SessionError> {
        self.ensure_idle("regenerate")?;
        self.array = self.generator.generate(self.config.length, self.config.range);
        self.run = None;
        debug!(len = self.array.len(), "array regenerated");
        Ok(())
    }

    /// Change the array length; regenerates the array
    pub fn set_length(&mut self, length: usize) -> Result<(), SessionError> {
        self.ensure_idle("set length")?;
        config::validate_length(length)?;
        self.config.length = length;
        self.regenerate()
    }

    /// Change the value range; regenerates the array
    pub fn set_range(&mut self, range: ValueRange) -> Result<(), SessionError> {
        self.ensure_idle("set range")?;
        range.validate()?;
        self.config.range = range;
        self.regenerate()
    }

    pub fn set_delay_ms(&mut self, delay_ms: u64) -> Result<(), SessionError> {
        self.ensure_idle("set delay")?;
        config::validate_delay(delay_ms)?;
        self.config.delay_ms = delay_ms;
        Ok(())
    }

    pub fn set_algorithm(&mut self, algorithm: Algorithm) -> Result<(), SessionError> {
        self.ensure_idle("set algorithm")?;
        self.config.algorithm = algorithm;
        Ok(())
    }

    pub fn set_mode(&mut self, mode: PlaybackMode) -> Result<(), SessionError> {
        self.ensure_idle("set mode")?;
        self.config.mode = mode;
        Ok(())
    }

    pub fn set_sound(&mut self, sound: bool) -> Result<(), SessionError> {
        self.ensure_idle("set sound")?;
        self.config.sound = sound;
        Ok(())
    }

    /// Theme is cosmetic and may change at any time
    pub fn set_dark_theme(&mut self, dark: bool) {
        self.config.dark_theme = dark;
    }

    // ========== Runs ==========

    /// Record (or spawn) the selected algorithm over the current array and
    /// start playing it. An active run is stopped first.
    pub fn start(&mut self, now: Instant, observer: &mut dyn Observer) -> Result<(), SessionError> {
        if self.is_active() {
            info!("start requested during an active run; stopping it first");
            self.stop(now, observer)?;
        }

        let algorithm = self.config.algorithm;
        let source = match self.config.mode {
            PlaybackMode::Recorded => StepSource::recorded(trace::record(algorithm, &self.array)),
            PlaybackMode::Live => StepSource::live(LiveRun::spawn(algorithm, &self.array)?),
        };

        let mut run = Scheduler::new(
            source,
            self.array.clone(),
            PlaybackSettings::from(&self.config),
        );
        run.start(now, observer)?;
        self.run = Some(run);
        self.sync_finished_run();
        Ok(())
    }

    pub fn pause(&mut self, now: Instant) -> Result<(), SessionError> {
        let run = self.run_mut("pause")?;
        run.pause(now)?;
        Ok(())
    }

    pub fn resume(&mut self, now: Instant) -> Result<(), SessionError> {
        let run = self.run_mut("resume")?;
        run.resume(now)?;
        Ok(())
    }

    /// Pause a running run, resume a paused one
    pub fn toggle_pause(&mut self, now: Instant) -> Result<(), SessionError> {
        match self.status() {
            RunStatus::Running => self.pause(now),
            _ => self.resume(now),
        }
    }

    pub fn stop(&mut self, now: Instant, observer: &mut dyn Observer) -> Result<(), SessionError> {
        let run = self.run_mut("stop")?;
        run.stop(now, observer)?;
        self.sync_finished_run();
        Ok(())
    }

    /// Let the active run catch up to `now`
    pub fn advance(&mut self, now: Instant, observer: &mut dyn Observer) {
        if let Some(run) = self.run.as_mut() {
            run.advance(now, observer);
        }
        self.sync_finished_run();
    }

    // ========== Queries ==========

    /// The array the next run will sort
    pub fn array(&self) -> &[u32] {
        &self.array
    }

    /// What the viewer should currently see
    pub fn bars(&self) -> &[u32] {
        match &self.run {
            Some(run) => run.display(),
            None => &self.array,
        }
    }

    pub fn status(&self) -> RunStatus {
        self.run.as_ref().map_or(RunStatus::Idle, Scheduler::status)
    }

    pub fn is_active(&self) -> bool {
        self.status().is_active()
    }

    pub fn state(&self) -> PlaybackState {
        self.run.as_ref().map(Scheduler::state).unwrap_or_default()
    }

    pub fn stats(&self) -> StatsTracker {
        self.run
            .as_ref()
            .map(|run| *run.stats())
            .unwrap_or_default()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.run.as_ref().and_then(Scheduler::next_deadline)
    }

    // ========== Internals ==========

    fn ensure_idle(&self, action: &'static str) -> Result<(), SessionError> {
        if self.is_active() {
            debug!(action, "rejected while a run is active");
            return Err(SessionError::Busy);
        }
        Ok(())
    }

    fn run_mut(&mut self, action: &'static str) -> Result<&mut Scheduler, SessionError> {
        let status = self.status();
        self.run.as_mut().ok_or(SessionError::Playback(
            PlaybackError::InvalidTransition {
                from: status,
                action,
            },
        ))
    }

    fn sync_finished_run(&mut self) {
        if let Some(run) = &self.run {
            if run.status().is_terminal() && run.display() != self.array.as_slice() {
                self.array = run.display().to_vec();
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::playback::PlaybackEvent;
    use std::time::Duration;

    fn session(array: Vec<u32>) -> Visualizer {
        let config = Config {
            delay_ms: 10,
            ..Config::default()
        };
        Visualizer::with_array(config, array).unwrap()
    }

    #[test]
    fn test_config_locked_while_running() {
        let t0 = Instant::now();
        let mut v = session(vec![3, 2, 1]);
        v.start(t0, &mut ()).unwrap();

        assert!(matches!(v.set_length(10), Err(SessionError::Busy)));
        assert!(matches!(v.set_delay_ms(5), Err(SessionError::Busy)));
        assert!(matches!(v.regenerate(), Err(SessionError::Busy)));
        assert_eq!(v.config().delay_ms, 10);

        v.pause(t0).unwrap();
        assert!(matches!(
            v.set_algorithm(Algorithm::Heap),
            Err(SessionError::Busy)
        ));

        v.stop(t0, &mut ()).unwrap();
        v.set_algorithm(Algorithm::Heap).unwrap();
        assert_eq!(v.config().algorithm, Algorithm::Heap);
    }

    #[test]
    fn test_invalid_change_leaves_config_untouched() {
        let mut v = session(vec![3, 2, 1]);
        assert!(matches!(v.set_length(0), Err(SessionError::Config(_))));
        assert_eq!(v.config().length, 3);
        assert_eq!(v.array(), &[3, 2, 1]);
    }

    #[test]
    fn test_restart_stops_previous_run() {
        let t0 = Instant::now();
        let mut v = session(vec![3, 2, 1]);
        let mut events = Vec::new();
        v.start(t0, &mut events).unwrap();
        events.clear();

        v.start(t0 + Duration::from_millis(5), &mut events).unwrap();
        let stopped = events
            .iter()
            .position(|e| *e == PlaybackEvent::RunStopped)
            .unwrap();
        let started = events
            .iter()
            .position(|e| matches!(e, PlaybackEvent::RunStarted { .. }))
            .unwrap();
        assert!(stopped < started);
        assert_eq!(v.status(), RunStatus::Running);
        assert_eq!(v.state().step_index, 1);
    }

    #[test]
    fn test_finished_run_becomes_new_array() {
        let t0 = Instant::now();
        let mut v = session(vec![3, 2, 1]);
        v.start(t0, &mut ()).unwrap();
        v.advance(t0 + Duration::from_secs(1), &mut ());

        assert_eq!(v.status(), RunStatus::Completed);
        assert_eq!(v.array(), &[1, 2, 3]);
        assert_eq!(v.stats().comparisons(), 3);
        assert_eq!(v.stats().swaps(), 3);

        v.regenerate().unwrap();
        assert_eq!(v.stats(), StatsTracker::default());
        assert_eq!(v.status(), RunStatus::Idle);
    }

    #[test]
    fn test_control_without_run_is_rejected() {
        let t0 = Instant::now();
        let mut v = session(vec![2, 1]);
        assert!(matches!(v.pause(t0), Err(SessionError::Playback(_))));
        assert!(matches!(v.stop(t0, &mut ()), Err(SessionError::Playback(_))));
    }

    #[test]
    fn test_live_mode_run() {
        let t0 = Instant::now();
        let mut v = session(vec![5, 1, 4, 2, 3]);
        v.set_mode(PlaybackMode::Live).unwrap();
        v.start(t0, &mut ()).unwrap();
        assert_eq!(v.state().total_steps, None);

        v.advance(t0 + Duration::from_secs(5), &mut ());
        assert_eq!(v.status(), RunStatus::Completed);
        assert_eq!(v.array(), &[1, 2, 3, 4, 5]);
    }
}
