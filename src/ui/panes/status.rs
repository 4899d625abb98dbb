//! Status bar rendering with keybindings and deck state indicators

use crate::ui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use std::time::Duration;

/// Everything the status bar shows, gathered by the app each frame
pub struct StatusRenderData<'a> {
    /// 1-based position of the current slide
    pub position: usize,
    pub slide_count: usize,
    pub slide_id: &'a str,
    /// Build steps left on the current slide
    pub pending_steps: usize,
    pub auto_running: bool,
    pub notes_visible: bool,
    pub theme_name: &'a str,
    pub elapsed: Duration,
    /// Planned presentation length, if the deck declares one
    pub duration_minutes: Option<u64>,
    pub warning: Option<&'a str>,
}

fn format_clock(elapsed: Duration) -> String {
    let secs = elapsed.as_secs();
    format!("{}:{:02}", secs / 60, secs % 60)
}

/// Render the status bar at the bottom
pub fn render_status_bar(frame: &mut Frame, area: Rect, theme: &Theme, data: &StatusRenderData) {
    let layout = ratatui::layout::Layout::default()
        .direction(ratatui::layout::Direction::Horizontal)
        .constraints([
            ratatui::layout::Constraint::Percentage(55),
            ratatui::layout::Constraint::Percentage(45),
        ])
        .split(area);

    // Left side: position, identity, build and warning state
    let mut left_spans = vec![
        Span::styled(
            format!(" {}/{} ", data.position, data.slide_count),
            Style::default()
                .bg(theme.accent)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", data.slide_id),
            Style::default().bg(theme.bar_bg).fg(theme.fg),
        ),
    ];

    if data.pending_steps > 0 {
        left_spans.push(Span::styled(
            format!("│ {} to build ", data.pending_steps),
            Style::default().bg(theme.bar_bg).fg(theme.dim),
        ));
    }
    if data.auto_running {
        left_spans.push(Span::styled(
            " ▶ AUTO ",
            Style::default()
                .bg(theme.heading)
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ));
    }
    if let Some(warning) = data.warning {
        left_spans.push(Span::styled(
            format!(" ⚠ {} ", warning),
            Style::default().bg(theme.bar_bg).fg(theme.warning),
        ));
    }

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(theme.bar_bg))
        .alignment(Alignment::Left);
    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds and the presentation clock
    let key_style = Style::default().bg(theme.dim).fg(Color::Black);
    let desc_style = Style::default().bg(theme.bar_bg).fg(theme.fg);
    let sep_style = Style::default().bg(theme.bar_bg).fg(theme.dim);

    let notes_desc = if data.notes_visible {
        " notes✓ "
    } else {
        " notes "
    };
    let mut right_spans = vec![
        Span::styled(" ←/→ ", key_style),
        Span::styled(" slide ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" n ", key_style),
        Span::styled(notes_desc, desc_style),
        Span::styled("│", sep_style),
        Span::styled(" g ", key_style),
        Span::styled(" contents ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" t ", key_style),
        Span::styled(format!(" {} ", data.theme_name), desc_style),
        Span::styled("│", sep_style),
        Span::styled(" q ", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let clock = match data.duration_minutes {
        Some(minutes) => format!(
            " {} / {}:00 ",
            format_clock(data.elapsed),
            minutes
        ),
        None => format!(" {} ", format_clock(data.elapsed)),
    };
    let over_time = data
        .duration_minutes
        .is_some_and(|minutes| data.elapsed.as_secs() > minutes * 60);
    right_spans.push(Span::styled(
        clock,
        Style::default()
            .bg(theme.bar_bg)
            .fg(if over_time { theme.warning } else { theme.dim })
            .add_modifier(Modifier::BOLD),
    ));

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(theme.bar_bg))
        .alignment(Alignment::Right);
    frame.render_widget(right_paragraph, layout[1]);
}
