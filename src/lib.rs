//! # Introduction
//!
//! decktty loads a plain-text deck file, builds a slide deck with
//! reveal-step builds and a seven-position lifecycle window, and presents
//! it in a terminal UI built with [ratatui](https://docs.rs/ratatui).
//!
//! ## Presentation pipeline
//!
//! ```text
//! Deck file → Loader → Deck → navigation + ticks → TUI
//! ```
//!
//! 1. [`content`] — the deck file format: parsed [`content::model`] types
//!    and the line-oriented [`content::loader`].
//! 2. [`deck`] — the engine: [`deck::slide::Slide`] leaves carrying build
//!    queues, the [`deck::engine::Deck`] orchestrator with its lifecycle
//!    window, history replay, hooks, and the cancellable auto-build driver.
//! 3. [`settings`] — the persisted key/value store behind theme selection.
//! 4. [`ui`] — ratatui-based TUI; not part of the stable library API.
//!
//! ## Navigation model
//!
//! Advancing is build-aware: `next` reveals the current slide's pending
//! step before it moves on. Going back is purely positional and leaves
//! build progress alone, so returning to a slide shows it as it was left.

pub mod content;
pub mod deck;
pub mod settings;
pub mod ui;
