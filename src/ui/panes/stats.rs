//! Statistics pane

use crate::config::Config;
use crate::playback::PlaybackState;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Data needed to render the statistics pane
pub struct StatsRenderData<'a> {
    pub config: &'a Config,
    pub state: PlaybackState,
}

pub fn render_stats_pane(frame: &mut Frame, area: Rect, data: StatsRenderData, theme: &Theme) {
    let block = Block::default()
        .title(" Statistics ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    let label = Style::default().fg(theme.comment);
    let value = Style::default().fg(theme.fg).add_modifier(Modifier::BOLD);

    let progress = match data.state.total_steps {
        Some(total) => format!("{}/{}", data.state.step_index, total),
        None => format!("{}/?", data.state.step_index),
    };
    let speed = match data.config.steps_per_second() {
        Some(rate) => format!("{}ms/step ({:.0}/s)", data.config.delay_ms, rate),
        None => "unthrottled".to_string(),
    };

    let rows = [
        ("Algorithm", data.config.algorithm.to_string()),
        ("Comparisons", data.state.comparisons.to_string()),
        ("Swaps", data.state.swaps.to_string()),
        (
            "Time",
            format!("{:.2}s", data.state.elapsed.as_secs_f64()),
        ),
        ("Steps", progress),
        ("Bars", data.config.length.to_string()),
        ("Speed", speed),
        ("Mode", data.config.mode.to_string()),
        (
            "Sound",
            if data.config.sound { "on" } else { "off" }.to_string(),
        ),
    ];

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(name, text)| {
            Line::from(vec![
                Span::styled(format!(" {:<12}", name), label),
                Span::styled(text, value),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
