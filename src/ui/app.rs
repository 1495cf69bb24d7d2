//! Main TUI application state and logic

use crate::config::PlaybackMode;
use crate::constants::MAX_LENGTH;
use crate::errors::SessionError;
use crate::playback::RunStatus;
use crate::session::Visualizer;
use crate::ui::panes::{self, StatsRenderData, StatusRenderData};
use crate::ui::theme::Theme;
use crate::ui::visual::VisualState;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest the event loop waits for input when nothing is scheduled
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Shortest wait between frames, however close the next step is
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Speed presets cycled by `+`/`-`, fastest first
const DELAY_PRESETS_MS: [u64; 11] = [0, 1, 2, 5, 10, 20, 50, 100, 200, 500, 1000];

/// Bars added or removed by `]`/`[`
const LENGTH_STEP: usize = 10;
const MIN_INTERACTIVE_LENGTH: usize = 5;

/// The main application state
pub struct App {
    /// Configuration, array and the active run
    pub visualizer: Visualizer,

    /// What the bar pane draws
    pub visual: VisualState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Whether the status message reports a rejected action
    pub status_is_error: bool,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    /// Create a new app around a visualizer
    pub fn new(visualizer: Visualizer) -> Self {
        let visual = VisualState::new(visualizer.bars());
        App {
            visualizer,
            visual,
            should_quit: false,
            status_message: String::from("Ready!"),
            status_is_error: false,
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or_else(Instant::now),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            let was_active = self.visualizer.is_active();
            self.visualizer.advance(Instant::now(), &mut self.visual);
            if was_active && self.visualizer.status() == RunStatus::Completed {
                self.report_completion();
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Sleep until the next scheduled action, bounded on both sides
            let timeout = self
                .visualizer
                .next_deadline()
                .map(|deadline| deadline.saturating_duration_since(Instant::now()))
                .unwrap_or(IDLE_POLL)
                .clamp(FRAME_INTERVAL, IDLE_POLL);

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let config = self.visualizer.config();
        let theme = Theme::for_mode(config.dark_theme);

        // Bars on the left, statistics and legend on the right, status bar below
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(0), Constraint::Length(34)])
            .split(main_chunks[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(11), Constraint::Min(0)])
            .split(columns[1]);

        panes::render_bars_pane(
            frame,
            columns[0],
            &self.visual,
            config.range.max,
            &config.algorithm.to_string(),
            theme,
        );

        panes::render_stats_pane(
            frame,
            side[0],
            StatsRenderData {
                config,
                state: self.visualizer.state(),
            },
            theme,
        );

        panes::render_legend_pane(frame, side[1], theme);

        panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                is_error: self.status_is_error,
                status: self.visualizer.status(),
                last_tone: self.visual.last_tone(),
            },
            theme,
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        let now = Instant::now();
        let result = match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
                Ok(())
            }
            KeyCode::Char(' ') => {
                // 200ms debounce to prevent key repeat spam
                if self.last_space_press.elapsed() < Duration::from_millis(200) {
                    return;
                }
                self.last_space_press = now;
                self.play_or_pause(now)
            }
            KeyCode::Enter => self.start(now),
            KeyCode::Char('s') => self
                .visualizer
                .stop(now, &mut self.visual)
                .map(|()| self.set_message("Stopped")),
            KeyCode::Char('r') => self.regenerate(),
            KeyCode::Tab => {
                let next = self.visualizer.config().algorithm.next();
                self.visualizer
                    .set_algorithm(next)
                    .map(|()| self.set_message(format!("Selected {}", next)))
            }
            KeyCode::BackTab => {
                let prev = self.visualizer.config().algorithm.prev();
                self.visualizer
                    .set_algorithm(prev)
                    .map(|()| self.set_message(format!("Selected {}", prev)))
            }
            KeyCode::Char('+') | KeyCode::Char('=') => self.change_speed(true),
            KeyCode::Char('-') => self.change_speed(false),
            KeyCode::Char(']') => {
                let length = (self.visualizer.config().length + LENGTH_STEP).min(MAX_LENGTH);
                self.resize(length)
            }
            KeyCode::Char('[') => {
                let length = self
                    .visualizer
                    .config()
                    .length
                    .saturating_sub(LENGTH_STEP)
                    .max(MIN_INTERACTIVE_LENGTH);
                self.resize(length)
            }
            KeyCode::Char('l') => {
                let mode = match self.visualizer.config().mode {
                    PlaybackMode::Recorded => PlaybackMode::Live,
                    PlaybackMode::Live => PlaybackMode::Recorded,
                };
                self.visualizer
                    .set_mode(mode)
                    .map(|()| self.set_message(format!("Playback mode: {}", mode)))
            }
            KeyCode::Char('m') => {
                let sound = !self.visualizer.config().sound;
                self.visualizer.set_sound(sound).map(|()| {
                    self.set_message(if sound { "Sound on" } else { "Sound off" })
                })
            }
            KeyCode::Char('t') => {
                let dark = !self.visualizer.config().dark_theme;
                self.visualizer.set_dark_theme(dark);
                Ok(())
            }
            _ => Ok(()),
        };

        if let Err(e) = result {
            self.set_error(e);
        }
    }

    /// Space: start when idle or finished, otherwise toggle pause
    fn play_or_pause(&mut self, now: Instant) -> Result<(), SessionError> {
        match self.visualizer.status() {
            RunStatus::Running => {
                self.visualizer.pause(now)?;
                self.set_message("Paused");
                Ok(())
            }
            RunStatus::Paused => {
                self.visualizer.resume(now)?;
                self.set_message("Playing...");
                Ok(())
            }
            RunStatus::Idle | RunStatus::Completed | RunStatus::Stopped => self.start(now),
        }
    }

    /// Start a fresh run over the current array (stops any active run first)
    fn start(&mut self, now: Instant) -> Result<(), SessionError> {
        if !self.visualizer.is_active() {
            self.visual.reset(self.visualizer.array());
        }
        self.visualizer.start(now, &mut self.visual)?;
        // Arrays with nothing to sort complete inside `start`
        if self.visualizer.status() == RunStatus::Completed {
            self.report_completion();
        } else {
            self.set_message(format!("Playing {}...", self.visualizer.config().algorithm));
        }
        Ok(())
    }

    fn report_completion(&mut self) {
        let state = self.visualizer.state();
        self.set_message(format!(
            "Sorted: {} comparisons, {} swaps",
            state.comparisons, state.swaps
        ));
    }

    fn regenerate(&mut self) -> Result<(), SessionError> {
        self.visualizer.regenerate()?;
        self.visual.reset(self.visualizer.bars());
        self.set_message("New array");
        Ok(())
    }

    fn resize(&mut self, length: usize) -> Result<(), SessionError> {
        self.visualizer.set_length(length)?;
        self.visual.reset(self.visualizer.bars());
        self.set_message(format!("{} bars", length));
        Ok(())
    }

    fn change_speed(&mut self, faster: bool) -> Result<(), SessionError> {
        let current = self.visualizer.config().delay_ms;
        let delay_ms = if faster {
            DELAY_PRESETS_MS
                .iter()
                .rev()
                .find(|&&d| d < current)
                .copied()
                .unwrap_or(DELAY_PRESETS_MS[0])
        } else {
            DELAY_PRESETS_MS
                .iter()
                .find(|&&d| d > current)
                .copied()
                .unwrap_or(DELAY_PRESETS_MS[DELAY_PRESETS_MS.len() - 1])
        };
        self.visualizer.set_delay_ms(delay_ms)?;
        self.set_message(format!("Delay {}ms per step", delay_ms));
        Ok(())
    }

    fn set_message(&mut self, message: impl Into<String>) {
        self.status_message = message.into();
        self.status_is_error = false;
    }

    fn set_error(&mut self, error: SessionError) {
        self.status_message = error.to_string();
        self.status_is_error = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Algorithm, Config};

    fn app(array: Vec<u32>) -> App {
        let config = Config {
            algorithm: Algorithm::Merge,
            delay_ms: 10,
            ..Config::default()
        };
        App::new(Visualizer::with_array(config, array).unwrap())
    }

    #[test]
    fn test_start_reports_instant_completion() {
        let mut app = app(vec![7]);
        app.start(Instant::now()).unwrap();

        assert_eq!(app.visualizer.status(), RunStatus::Completed);
        assert_eq!(app.status_message, "Sorted: 0 comparisons, 0 swaps");
        assert!(!app.status_is_error);
    }

    #[test]
    fn test_start_reports_playing_while_running() {
        let mut app = app(vec![3, 1, 2]);
        app.start(Instant::now()).unwrap();

        assert_eq!(app.visualizer.status(), RunStatus::Running);
        assert_eq!(app.status_message, "Playing Merge Sort...");
    }

    #[test]
    fn test_rejected_change_shows_error() {
        let mut app = app(vec![3, 1, 2]);
        let now = Instant::now();
        app.start(now).unwrap();

        app.handle_key_event(KeyEvent::from(KeyCode::Char('r')));
        assert!(app.status_is_error);
        assert_eq!(app.visualizer.array(), &[3, 1, 2]);
    }
}
