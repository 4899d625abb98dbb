//! Shared helpers for pane rendering

use crate::ui::theme::Theme;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;

/// Border style for a pane depending on focus
pub(super) fn border_style(theme: &Theme, is_focused: bool) -> Style {
    if is_focused {
        Style::default().fg(theme.border_focused)
    } else {
        Style::default().fg(theme.border_normal)
    }
}

/// Clamp a scroll offset so the last page of content stays on screen.
/// `inner_height` is the drawable height inside the borders.
pub(super) fn clamp_scroll(scroll: &mut usize, content_lines: usize, inner_height: usize) {
    let max_scroll = content_lines.saturating_sub(inner_height);
    if *scroll > max_scroll {
        *scroll = max_scroll;
    }
}

/// Centered overlay rectangle taking the given percentages of `area`
pub(super) fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);
    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1]);
    horizontal[1]
}
