//! Speaker-notes panel, shown below the slide while notes are toggled on

use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn render_notes_pane(frame: &mut Frame, area: Rect, note: &str, theme: &Theme) {
    let content: Vec<Line> = if note.is_empty() {
        vec![Line::from(Span::styled(
            "(no notes for this slide)",
            Style::default()
                .fg(theme.dim)
                .add_modifier(Modifier::ITALIC),
        ))]
    } else {
        note.lines()
            .map(|line| Line::from(Span::styled(line, Style::default().fg(theme.fg))))
            .collect()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" speaker notes ")
        .border_style(super::utils::border_style(theme, false));

    let paragraph = Paragraph::new(content)
        .block(block)
        .style(Style::default().bg(theme.bg))
        .wrap(Wrap { trim: false });

    frame.render_widget(paragraph, area);
}
