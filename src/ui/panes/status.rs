//! Status bar rendering with keybindings and state indicators

use crate::playback::RunStatus;
use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Key chip and description for each entry on the right of the status bar
const KEY_BINDS: [(&str, &str); 8] = [
    (" ⎵ ", " play/pause "),
    (" s ", " stop "),
    (" r ", " new array "),
    (" ⇥ ", " algorithm "),
    (" +/- ", " speed "),
    (" [/] ", " size "),
    (" l/m/t ", " live/sound/theme "),
    (" q ", " quit "),
];

/// Data needed to render the status bar
pub struct StatusRenderData<'a> {
    pub message: &'a str,
    pub is_error: bool,
    pub status: RunStatus,
    pub last_tone: Option<f32>,
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, data: StatusRenderData, theme: &Theme) {
    // Split status bar into left and right
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(area);

    let chip_bg = match data.status {
        RunStatus::Running => theme.secondary,
        RunStatus::Paused => theme.primary,
        RunStatus::Completed => theme.success,
        RunStatus::Stopped => theme.error,
        RunStatus::Idle => theme.comment,
    };

    let mut left_spans = vec![
        Span::styled(
            format!(" {} ", data.status.to_string().to_uppercase()),
            Style::default()
                .bg(chip_bg)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            " | ",
            Style::default().bg(theme.status_bg).fg(theme.comment),
        ),
        Span::styled(
            format!(" {} ", data.message),
            Style::default()
                .bg(theme.status_bg)
                .fg(if data.is_error { theme.error } else { theme.fg }),
        ),
    ];

    if let Some(hz) = data.last_tone {
        left_spans.push(Span::styled(
            format!(" ♪ {:.0}Hz ", hz),
            Style::default().bg(theme.status_bg).fg(theme.secondary),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: Keybinds with visual grouping
    let key_style = Style::default().bg(theme.comment).fg(Color::Black);
    let desc_style = Style::default().bg(theme.status_bg).fg(theme.fg);
    let sep_style = Style::default().bg(theme.status_bg).fg(theme.comment);

    let mut right_spans = Vec::with_capacity(KEY_BINDS.len() * 4);
    for (i, &(key, desc)) in KEY_BINDS.iter().enumerate() {
        if i > 0 {
            right_spans.push(Span::styled("│", sep_style));
            right_spans.push(Span::styled(" ", desc_style));
        }
        right_spans.push(Span::styled(key, key_style));
        right_spans.push(Span::styled(desc, desc_style));
    }

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.status_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
