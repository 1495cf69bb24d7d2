//! TUI pane rendering modules
//!
//! - [`bars`]: the bar chart, coloured by each bar's highlight state
//! - [`stats`]: comparisons, swaps, elapsed time and the run configuration
//! - [`legend`]: what each bar colour means
//! - [`status`]: status bar with run state, messages and keybindings
//!
//! Each module exports a single stateless `render_*` function taking the
//! frame, its area, the data it shows and the active [`Theme`](super::theme::Theme).

pub mod bars;
pub mod legend;
pub mod stats;
pub mod status;

pub use bars::render_bars_pane;
pub use legend::render_legend_pane;
pub use stats::{render_stats_pane, StatsRenderData};
pub use status::{render_status_bar, StatusRenderData};
