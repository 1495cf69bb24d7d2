//! Colour legend

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render_legend_pane(frame: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .title(" Legend ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.border_normal));

    let entries = [
        (theme.bar, "Unsorted"),
        (theme.compare, "Comparing"),
        (theme.swap, "Swapping"),
        (theme.overwrite, "Overwriting"),
        (theme.sorted, "Sorted"),
    ];

    let lines: Vec<Line> = entries
        .into_iter()
        .map(|(color, name)| {
            Line::from(vec![
                Span::styled(" ██ ", Style::default().fg(color)),
                Span::styled(name, Style::default().fg(theme.fg)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
