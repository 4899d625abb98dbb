//! Main TUI application state and logic

use crate::deck::engine::{Deck, TickResult};
use crate::deck::input::{InputTarget, KeyToken};
use crate::ui::theme::theme_by_name;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::{
    Frame, Terminal,
    backend::Backend,
    layout::{Constraint, Direction, Layout},
};
use std::io;
use std::time::{Duration, Instant};

/// Terminal columns are coarse next to the swipe threshold, so drag
/// distances are scaled up before the deck compares them
const SWIPE_UNITS_PER_CELL: f32 = 10.0;

/// The main application state
pub struct App {
    /// The deck being presented
    pub deck: Deck,

    /// Scroll offset of the slide pane
    pub slide_scroll: usize,

    /// Whether the table-of-contents overlay is open
    pub toc_open: bool,

    /// Highlighted row in the table of contents
    pub toc_selected: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// When the presentation started, for the status bar clock
    pub started_at: Instant,

    /// Most recent deck warning, shown until the next one replaces it
    pub last_warning: Option<String>,

    /// Slide index at the previous frame, to reset scroll on navigation
    last_slide_index: usize,
}

impl App {
    /// Create a new app around a started deck
    pub fn new(deck: Deck) -> Self {
        let last_slide_index = deck.current_index();
        App {
            deck,
            slide_scroll: 0,
            toc_open: false,
            toc_selected: 0,
            should_quit: false,
            started_at: Instant::now(),
            last_warning: None,
            last_slide_index,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            if self.deck.current_index() != self.last_slide_index {
                self.last_slide_index = self.deck.current_index();
                self.slide_scroll = 0;
            }
            if let Some(warning) = self.deck.drain_warnings().pop() {
                self.last_warning = Some(warning.to_string());
            }

            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Drive pending auto-builds; a revealed step redraws right away
            if self.deck.tick(Instant::now()) == TickResult::RenderRequested {
                continue;
            }

            // Use poll with timeout so auto-builds keep advancing
            if event::poll(Duration::from_millis(50))? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => {
                        self.handle_key_event(key);
                    }
                    Event::Mouse(mouse) => self.handle_mouse_event(mouse),
                    _ => {}
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();
        let theme = theme_by_name(self.deck.theme_name());

        // Slide area on top, one-line status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let pane_area = main_chunks[0];
        let status_area = main_chunks[1];

        if self.deck.notes_visible() {
            let rows = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
                .split(pane_area);
            super::panes::render_slide_pane(
                frame,
                rows[0],
                self.deck.current_slide(),
                theme,
                !self.toc_open,
                &mut self.slide_scroll,
            );
            super::panes::render_notes_pane(frame, rows[1], self.deck.speaker_note(), theme);
        } else {
            super::panes::render_slide_pane(
                frame,
                pane_area,
                self.deck.current_slide(),
                theme,
                !self.toc_open,
                &mut self.slide_scroll,
            );
        }

        super::panes::render_status_bar(
            frame,
            status_area,
            theme,
            &super::panes::StatusRenderData {
                position: self.deck.current_index() + 1,
                slide_count: self.deck.slide_count(),
                slide_id: self.deck.current_id(),
                pending_steps: self.deck.pending_steps(),
                auto_running: self.deck.auto_running(),
                notes_visible: self.deck.notes_visible(),
                theme_name: self.deck.theme_name(),
                elapsed: self.started_at.elapsed(),
                duration_minutes: self.deck.meta().duration_minutes,
                warning: self.last_warning.as_deref(),
            },
        );

        if self.toc_open {
            super::panes::render_toc_pane(frame, size, &self.deck, self.toc_selected, theme);
        }
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        if self.toc_open {
            self.handle_toc_key(key);
            return;
        }
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.deck.handle_key(KeyToken::Left, InputTarget::General);
            }
            KeyCode::Right => {
                self.deck.handle_key(KeyToken::Right, InputTarget::General);
            }
            KeyCode::PageUp => {
                self.deck.handle_key(KeyToken::PageUp, InputTarget::General);
            }
            KeyCode::PageDown => {
                self.deck
                    .handle_key(KeyToken::PageDown, InputTarget::General);
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                self.deck.handle_key(KeyToken::Notes, InputTarget::General);
            }
            KeyCode::Char('t') => {
                self.deck.cycle_theme();
            }
            KeyCode::Char('g') => {
                self.toc_open = true;
                self.toc_selected = self.deck.current_index();
            }
            KeyCode::Char('[') => {
                self.deck.history_back();
            }
            KeyCode::Char(']') => {
                self.deck.history_forward();
            }
            KeyCode::Up => {
                self.slide_scroll = self.slide_scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                self.slide_scroll = self.slide_scroll.saturating_add(1);
            }
            _ => {}
        }
    }

    /// Handle keys while the table of contents is open
    fn handle_toc_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Up => {
                self.toc_selected = self.toc_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                self.toc_selected = (self.toc_selected + 1).min(self.deck.slide_count() - 1);
            }
            KeyCode::Enter => {
                let id = self.deck.slides()[self.toc_selected].id().to_string();
                self.deck.go_to(&id, true);
                self.toc_open = false;
            }
            KeyCode::Esc | KeyCode::Char('g') | KeyCode::Char('q') => {
                self.toc_open = false;
            }
            _ => {}
        }
    }

    /// Handle mouse events; a horizontal left-button drag is a swipe
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.deck
                    .swipe_start(f32::from(mouse.column) * SWIPE_UNITS_PER_CELL);
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.deck
                    .swipe_end(f32::from(mouse.column) * SWIPE_UNITS_PER_CELL);
            }
            _ => {}
        }
    }
}
