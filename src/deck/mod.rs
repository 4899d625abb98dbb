//! Deck engine
//!
//! This module provides the slide state machine:
//! - [`engine`]: the [`engine::Deck`] orchestrator (navigation, lifecycle
//!   window, history replay, auto-build driver)
//! - [`slide`]: the per-slide leaf (identity, note, lifecycle position)
//! - [`build`]: build queue classification and advance semantics
//! - [`autos`]: auto-build scheduling state and transition signaling
//! - [`history`]: visited-identity stack with back/forward replay
//! - [`hooks`]: lifecycle callbacks keyed by slide identity
//! - [`input`]: key and swipe routing
//! - [`config`], [`error`]: explicit configuration and error types
//!
//! # Navigation model
//!
//! Exactly one slide is current at any time. The seven-position window
//! around it (`distant-past … distant-future`) stages enter and exit
//! presentation; jumps of more than one slide reset the old window to
//! the distant baseline before the new one is computed. `next()` first
//! consumes a pending build step on the current slide; `prev()` is
//! purely positional and leaves build progress untouched.

pub mod autos;
pub mod build;
pub mod config;
pub mod engine;
pub mod error;
pub mod history;
pub mod hooks;
pub mod input;
pub mod slide;
