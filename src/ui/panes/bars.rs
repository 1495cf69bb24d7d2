//! Bar chart pane
//!
//! Bars are drawn bottom-up with eighth-block glyphs so heights resolve finer
//! than one terminal row. When there are more bars than columns, each column
//! shows the bar at its proportional index.

use crate::ui::theme::Theme;
use crate::ui::visual::{BarState, VisualState};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const EIGHTHS: [&str; 8] = [" ", "▁", "▂", "▃", "▄", "▅", "▆", "▇"];
const FULL: &str = "█";

/// Render the bar chart pane
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    visual: &VisualState,
    max_value: u32,
    title: &str,
    theme: &Theme,
) {
    let block = Block::default()
        .title(format!(" {} ", title))
        .borders(Borders::ALL)
        .border_style(
            Style::default()
                .fg(theme.border_focused)
                .add_modifier(Modifier::BOLD),
        );

    let inner = block.inner(area);
    let values = visual.values();

    if values.is_empty() || inner.width == 0 || inner.height == 0 {
        let paragraph = Paragraph::new("(no bars)")
            .block(block)
            .style(Style::default().fg(theme.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let columns = column_indices(values.len(), inner.width as usize);
    let rows = inner.height as usize;
    let max_value = max_value.max(values.iter().copied().max().unwrap_or(1)).max(1);

    // Height of every column in eighths of a row
    let levels: Vec<usize> = columns
        .iter()
        .map(|&i| match i {
            Some(i) => bar_level(values[i], max_value, rows),
            None => 0,
        })
        .collect();

    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let from_bottom = rows - 1 - row;
            let spans: Vec<Span> = columns
                .iter()
                .zip(&levels)
                .map(|(&index, &level)| {
                    let glyph = glyph_for(level, from_bottom);
                    let color = match index.and_then(|i| visual.bar_state(i)) {
                        Some(BarState::Compare) => theme.compare,
                        Some(BarState::Swap) => theme.swap,
                        Some(BarState::Overwrite) => theme.overwrite,
                        Some(BarState::Sorted) => theme.sorted,
                        None => theme.bar,
                    };
                    Span::styled(glyph, Style::default().fg(color))
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.bg));
    frame.render_widget(paragraph, area);
}

/// Which bar each terminal column shows. With fewer bars than columns every
/// bar gets the same whole number of columns and the remainder stays empty.
pub(crate) fn column_indices(bars: usize, width: usize) -> Vec<Option<usize>> {
    if bars == 0 || width == 0 {
        return Vec::new();
    }
    if bars <= width {
        let bar_width = width / bars;
        (0..width)
            .map(|c| {
                let i = c / bar_width;
                (i < bars).then_some(i)
            })
            .collect()
    } else {
        (0..width).map(|c| Some(c * bars / width)).collect()
    }
}

/// Bar height in eighths of a row
pub(crate) fn bar_level(value: u32, max_value: u32, rows: usize) -> usize {
    let scaled = value as u64 * rows as u64 * 8 / max_value.max(1) as u64;
    // Keep non-zero values visible
    (scaled as usize).max(usize::from(value > 0))
}

fn glyph_for(level: usize, from_bottom: usize) -> &'static str {
    let floor = from_bottom * 8;
    if level >= floor + 8 {
        FULL
    } else if level > floor {
        EIGHTHS[level - floor]
    } else {
        " "
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_column_indices_spread_and_sample() {
        assert_eq!(
            column_indices(2, 5),
            vec![Some(0), Some(0), Some(1), Some(1), None]
        );
        assert_eq!(
            column_indices(10, 4),
            vec![Some(0), Some(2), Some(5), Some(7)]
        );
    }

    #[test]
    fn test_bar_levels_and_glyphs() {
        assert_eq!(bar_level(400, 400, 10), 80);
        assert_eq!(bar_level(1, 400, 10), 1);
        assert_eq!(bar_level(0, 400, 10), 0);

        assert_eq!(glyph_for(12, 0), FULL);
        assert_eq!(glyph_for(12, 1), "▄");
        assert_eq!(glyph_for(12, 2), " ");
    }
}
