//! Bar-chart pane rendering
//!
//! Draws the sequence as vertical bars scaled into the pane height using the
//! bounds recorded at set-time. Bars cycle through three gray shades so
//! adjacent equal-height bars stay distinguishable; the indices named in the
//! most recent step's highlight map are drawn in their role colors instead.

use crate::engine::HighlightRole;
use crate::sequence::SequenceState;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use rustc_hash::FxHashMap;

/// Resolve one bar's color: highlight role wins over the gradient
fn bar_color(index: usize, highlights: &FxHashMap<usize, HighlightRole>) -> Color {
    match highlights.get(&index) {
        Some(HighlightRole::Compared) => DEFAULT_THEME.compared,
        Some(HighlightRole::Placed) => DEFAULT_THEME.placed,
        None => DEFAULT_THEME.gradient[index % 3],
    }
}

/// Scale a value into a bar height of `1..=rows`
fn bar_height(value: i32, seq: &SequenceState, rows: usize) -> usize {
    let span = (seq.max_val() - seq.min_val()).max(1) as usize;
    let offset = (value - seq.min_val()) as usize;
    1 + offset * rows.saturating_sub(1) / span
}

/// Render the sequence as vertical bars with mutation highlights
pub fn render_bars_pane(
    frame: &mut Frame,
    area: Rect,
    seq: &SequenceState,
    highlights: &FxHashMap<usize, HighlightRole>,
) {
    let block = Block::default()
        .title(" Sequence ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border));

    // Account for the borders (2 each way)
    let rows = area.height.saturating_sub(2) as usize;
    let cols = area.width.saturating_sub(2) as usize;
    if rows == 0 || cols == 0 || seq.is_empty() {
        frame.render_widget(Paragraph::new("").block(block), area);
        return;
    }

    let n = seq.len();
    let bar_width = (cols / n).max(1);
    // With one cell per bar there is no room for a gap column
    let filled = if bar_width > 1 { bar_width - 1 } else { 1 };
    let visible = n.min(cols / bar_width);

    let heights: Vec<usize> = seq
        .snapshot()
        .iter()
        .take(visible)
        .map(|&v| bar_height(v, seq, rows))
        .collect();

    // Top row first; a bar occupies a row when its height reaches it
    let lines: Vec<Line> = (0..rows)
        .map(|row| {
            let threshold = rows - row;
            let spans: Vec<Span> = heights
                .iter()
                .enumerate()
                .map(|(i, &h)| {
                    if h >= threshold {
                        let mut cell = "\u{2588}".repeat(filled);
                        cell.push_str(&" ".repeat(bar_width - filled));
                        Span::styled(cell, Style::default().fg(bar_color(i, highlights)))
                    } else {
                        Span::raw(" ".repeat(bar_width))
                    }
                })
                .collect();
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(block);
    frame.render_widget(paragraph, area);
}
