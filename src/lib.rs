//! # Introduction
//!
//! sortty animates classical comparison sorts. Each algorithm runs to
//! completion against a private copy of the array while every comparison,
//! swap and overwrite is recorded as a step; the resulting trace is then
//! replayed against a bar chart at a controllable speed, with pause, resume
//! and stop. The terminal front end is built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Config → Generator → Array → Recorder → Trace → Scheduler → Events → TUI
//! ```
//!
//! 1. [`config`] — run configuration, loaded from TOML and validated.
//! 2. [`generator`] — random arrays within a value range.
//! 3. [`trace`] — the recorder: six instrumented sorts producing
//!    [`trace::Trace`]s, plus a live mode that suspends the algorithm after
//!    every step.
//! 4. [`playback`] — the [`playback::Scheduler`] state machine that turns steps
//!    into timed [`playback::PlaybackEvent`]s, and the statistics observer.
//! 5. [`session`] — the [`session::Visualizer`] that owns the array and the
//!    single active run.
//! 6. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Supported algorithms
//!
//! Bubble, selection, insertion, merge, quick (Lomuto) and heap sort.

pub mod config;
pub mod constants;
pub mod errors;
pub mod generator;
pub mod playback;
pub mod session;
pub mod trace;
pub mod ui;
