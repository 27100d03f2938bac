//! Status bar rendering with transient messages and run state

use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Render the one-line status bar at the bottom.
///
/// Left side carries the transient message; right side shows the mutating
/// tick count so far and whether a run is active.
pub fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    message: &str,
    swaps: usize,
    is_running: bool,
) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(area);

    let left = Paragraph::new(Line::from(Span::styled(
        format!(" {}", message),
        Style::default().fg(DEFAULT_THEME.fg),
    )));
    frame.render_widget(left, layout[0]);

    let state = if is_running {
        Span::styled(
            "Sorting ",
            Style::default()
                .fg(DEFAULT_THEME.running)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        Span::styled("Idle ", Style::default().fg(DEFAULT_THEME.hint))
    };

    let right = Paragraph::new(Line::from(vec![
        Span::styled(
            format!("Swaps: {} | ", swaps),
            Style::default().fg(DEFAULT_THEME.fg),
        ),
        state,
    ]))
    .alignment(Alignment::Right);
    frame.render_widget(right, layout[1]);
}
