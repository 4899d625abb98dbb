//! Slide pane: projection of the current slide's blocks and step states

use crate::content::model::Block;
use crate::deck::build::{StepDisplay, StepRef};
use crate::deck::slide::Slide;
use crate::ui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block as UiBlock, Borders, Paragraph},
    Frame,
};

/// Build the display lines for one slide.
///
/// Pending steps render as blank lines so later reveals do not shift
/// the layout.
fn slide_lines<'a>(slide: &'a Slide, theme: &Theme) -> Vec<Line<'a>> {
    let mut lines = Vec::new();
    let mut seen_heading = false;
    for (block_index, block) in slide.blocks().iter().enumerate() {
        if !lines.is_empty() {
            lines.push(Line::from(""));
        }
        match block {
            Block::Text(text) => {
                let style = if seen_heading {
                    Style::default().fg(theme.fg)
                } else {
                    seen_heading = true;
                    Style::default()
                        .fg(theme.heading)
                        .add_modifier(Modifier::BOLD)
                };
                lines.push(Line::from(Span::styled(text.as_str(), style)));
            }
            Block::Group(group) => {
                for (item_index, item) in group.items.iter().enumerate() {
                    let step = StepRef {
                        block: block_index,
                        item: item_index,
                    };
                    let line = match slide.step_display(step) {
                        StepDisplay::Pending => Line::from(""),
                        StepDisplay::Revealed => Line::from(Span::styled(
                            format!("• {}", item.text),
                            Style::default().fg(theme.fg),
                        )),
                        StepDisplay::CycleActive => Line::from(Span::styled(
                            format!("▸ {}", item.text),
                            Style::default()
                                .fg(theme.accent)
                                .add_modifier(Modifier::BOLD),
                        )),
                        StepDisplay::CycleInactive => Line::from(Span::styled(
                            format!("▸ {}", item.text),
                            Style::default().fg(theme.dim),
                        )),
                    };
                    lines.push(line);
                }
            }
        }
    }
    lines
}

/// Render the main slide pane
pub fn render_slide_pane(
    frame: &mut Frame,
    area: Rect,
    slide: &Slide,
    theme: &Theme,
    is_focused: bool,
    scroll: &mut usize,
) {
    let lines = slide_lines(slide, theme);

    let inner_height = area.height.saturating_sub(2) as usize;
    super::utils::clamp_scroll(scroll, lines.len(), inner_height);

    let block = UiBlock::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", slide.id()))
        .border_style(super::utils::border_style(theme, is_focused));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(theme.bg).fg(theme.fg))
        .scroll((*scroll as u16, 0));

    frame.render_widget(paragraph, area);
}
