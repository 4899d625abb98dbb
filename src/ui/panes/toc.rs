//! Contents overlay: a jump list over all slides

use crate::deck::engine::Deck;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the centered contents overlay. `selected` is the highlighted
/// row; Enter in the app jumps to it.
pub fn render_toc_pane(
    frame: &mut Frame,
    area: Rect,
    deck: &Deck,
    selected: usize,
    theme: &Theme,
) {
    let overlay = super::utils::centered_rect(60, 70, area);

    let mut lines: Vec<Line> = Vec::with_capacity(deck.slide_count());
    for slide in deck.slides() {
        let marker = if slide.index() == deck.current_index() {
            "▶ "
        } else {
            "  "
        };
        let title = slide.title_line().unwrap_or_else(|| slide.id());
        let text = format!("{}{:>2}  {}", marker, slide.index() + 1, title);
        let style = if slide.index() == selected {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if slide.visited() {
            Style::default().fg(theme.fg)
        } else {
            Style::default().fg(theme.dim)
        };
        lines.push(Line::from(Span::styled(text, style)));
    }

    // Keep the selection on screen for long decks.
    let inner_height = overlay.height.saturating_sub(2) as usize;
    let scroll = selected.saturating_sub(inner_height.saturating_sub(1)) as u16;

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" contents (enter: jump, esc: close) ")
        .border_style(super::utils::border_style(theme, true));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.bg))
        .scroll((scroll, 0));

    frame.render_widget(Clear, overlay);
    frame.render_widget(paragraph, overlay);
}
