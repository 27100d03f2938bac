//! Header pane: title and key-binding hints

use crate::engine::{AlgorithmKind, SortOrder};
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the centered title and the two control-hint lines
pub fn render_header_pane(
    frame: &mut Frame,
    area: Rect,
    algorithm: AlgorithmKind,
    order: SortOrder,
) {
    let title = format!("{} - {}", algorithm.label(), order.label());

    let lines = vec![
        Line::from(Span::styled(
            title,
            Style::default()
                .fg(DEFAULT_THEME.title)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "R - Reset | SPACE - Start Sorting | A - Ascending | D - Descending",
            Style::default().fg(DEFAULT_THEME.hint),
        )),
        Line::from(Span::styled(
            "I - Insertion Sort | B - Bubble Sort | Q - Quit",
            Style::default().fg(DEFAULT_THEME.hint),
        )),
    ];

    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}
