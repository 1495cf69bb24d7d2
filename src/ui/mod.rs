//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into four layers:
//!
//! - **[`app`]** — application state, keyboard event loop, playback pacing
//! - **[`visual`]** — the playback observer holding bar heights and colours
//! - **[`panes`]** — stateless render functions for each visible pane (bars,
//!   statistics, legend, status bar)
//! - **[`theme`]** — dark and light colour palettes used by all panes
//!
//! The entry point for consumers is [`App`]: construct it with a
//! [`Visualizer`] and call [`App::run`] to start the event loop.
//!
//! [`Visualizer`]: crate::session::Visualizer
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;
pub mod visual;

pub use app::App;
