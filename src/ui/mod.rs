//! Terminal user interface built on [ratatui](https://github.com/ratatui-org/ratatui).
//!
//! The UI is organized into three layers:
//!
//! - **[`app`]** — application state, event loop, keyboard and mouse handling
//! - **[`panes`]** — stateless render functions for each visible pane (slide,
//!   speaker notes, table of contents, status bar)
//! - **[`theme`]** — named color palettes matching the deck's theme names
//!
//! The entry point for consumers is [`App`]: construct it with a started
//! [`Deck`] and call [`App::run`] to take over the terminal.
//!
//! [`Deck`]: crate::deck::engine::Deck
//! [`App::run`]: app::App::run

pub mod app;
pub mod panes;
pub mod theme;

pub use app::App;
