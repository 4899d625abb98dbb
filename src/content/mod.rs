//! Slide content loading
//!
//! This module turns deck file text into the flat slide collection the
//! engine is constructed from:
//! - [`model`]: slide source definitions (blocks, step groups, metadata)
//! - [`loader`]: line-oriented `.deck` file loader
//!
//! # Deck file format
//!
//! Slides are separated by `---` lines. Within a slide:
//! - `@slide <id>` sets the slide identity (default: `slide-<n>`)
//! - `@note <text>` appends a speaker-note line
//! - `@build` / `@cycle` / `@all` open a step group, closed by `@end`
//! - `- <text>` inside a group is a step, `! <text>` an automatic step
//! - any other line is plain slide text
//!
//! Before the first slide, `@title <text>` and `@duration <minutes>` set
//! deck-level metadata. Lines starting with `#` are comments.
//!
//! Duplicate identities and unterminated groups are load errors; anything
//! else malformed degrades to plain text.

pub mod loader;
pub mod model;
