// Line-oriented loader for `.deck` files

use crate::content::model::*;
use rustc_hash::FxHashSet;
use thiserror::Error;

/// Errors produced while loading a deck file
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("line {line}: duplicate slide identity `{id}`")]
    DuplicateIdentity { id: String, line: usize },
    #[error("line {line}: {directive} group is never closed")]
    UnterminatedGroup {
        directive: &'static str,
        line: usize,
    },
    #[error("line {line}: step group opened inside another group")]
    NestedGroup { line: usize },
    #[error("line {line}: @end without an open group")]
    StrayEnd { line: usize },
    #[error("deck file contains no slides")]
    EmptyDeck,
}

/// Parse deck file text into a [`DeckFile`]
pub fn parse_deck(source: &str) -> Result<DeckFile, LoadError> {
    let mut loader = Loader::new();
    for (idx, raw) in source.lines().enumerate() {
        loader.feed(idx + 1, raw)?;
    }
    loader.finish()
}

/// A step group opened by `@build` / `@cycle` / `@all` and not yet closed
struct OpenGroup {
    marker: BuildMarker,
    items: Vec<StepItem>,
    opened_at: usize,
}

/// Accumulates one slide between `---` separators
#[derive(Default)]
struct SlideBuilder {
    id: Option<String>,
    id_line: usize,
    start_line: usize,
    note: Vec<String>,
    blocks: Vec<Block>,
}

impl SlideBuilder {
    fn is_empty(&self) -> bool {
        self.id.is_none() && self.note.is_empty() && self.blocks.is_empty()
    }

    fn touch(&mut self, line: usize) {
        if self.start_line == 0 {
            self.start_line = line;
        }
    }
}

/// Line-at-a-time deck loader
struct Loader {
    meta: DeckMeta,
    slides: Vec<SlideSource>,
    seen_ids: FxHashSet<String>,
    current: SlideBuilder,
    group: Option<OpenGroup>,
    in_header: bool, // still before the first slide content
}

impl Loader {
    fn new() -> Self {
        Self {
            meta: DeckMeta::default(),
            slides: Vec::new(),
            seen_ids: FxHashSet::default(),
            current: SlideBuilder::default(),
            group: None,
            in_header: true,
        }
    }

    fn feed(&mut self, line: usize, raw: &str) -> Result<(), LoadError> {
        // Comments are only recognized at column zero so indented content
        // can still contain `#`.
        if raw.starts_with('#') {
            return Ok(());
        }
        let text = raw.trim();
        if text.is_empty() {
            return Ok(());
        }

        if text == "---" {
            self.close_group_required(line)?;
            self.in_header = false;
            return self.finish_slide();
        }

        if self.in_header {
            if let Some(title) = text.strip_prefix("@title ") {
                self.meta.title = Some(title.trim().to_string());
                return Ok(());
            }
            if let Some(minutes) = text.strip_prefix("@duration ") {
                // Unparsable durations degrade to "no timer".
                self.meta.duration_minutes = minutes.trim().parse().ok();
                return Ok(());
            }
        }
        // Any slide content ends the metadata header.
        self.in_header = false;
        self.current.touch(line);

        if let Some(id) = text.strip_prefix("@slide ") {
            self.current.id = Some(id.trim().to_string());
            self.current.id_line = line;
            return Ok(());
        }
        if let Some(note) = text.strip_prefix("@note ") {
            self.current.note.push(note.trim().to_string());
            return Ok(());
        }
        for marker in [BuildMarker::All, BuildMarker::Cycle, BuildMarker::Build] {
            if text == marker.directive() {
                if self.group.is_some() {
                    return Err(LoadError::NestedGroup { line });
                }
                self.group = Some(OpenGroup {
                    marker,
                    items: Vec::new(),
                    opened_at: line,
                });
                return Ok(());
            }
        }
        if text == "@end" {
            let group = self.group.take().ok_or(LoadError::StrayEnd { line })?;
            self.current.blocks.push(Block::Group(Group {
                marker: group.marker,
                items: group.items,
            }));
            return Ok(());
        }

        if let Some(group) = self.group.as_mut() {
            // Inside a group every line is a step; `!` marks it automatic.
            let (item, auto) = match (text.strip_prefix("- "), text.strip_prefix("! ")) {
                (Some(rest), _) => (rest, false),
                (None, Some(rest)) => (rest, true),
                (None, None) => (text, false),
            };
            group.items.push(StepItem {
                text: item.to_string(),
                auto,
            });
        } else {
            // Unrecognized directives degrade to plain text.
            self.current.blocks.push(Block::Text(text.to_string()));
        }
        Ok(())
    }

    fn close_group_required(&mut self, line: usize) -> Result<(), LoadError> {
        match self.group.take() {
            None => Ok(()),
            Some(group) => Err(LoadError::UnterminatedGroup {
                directive: group.marker.directive(),
                line: group.opened_at.min(line),
            }),
        }
    }

    fn finish_slide(&mut self) -> Result<(), LoadError> {
        let builder = std::mem::take(&mut self.current);
        if builder.is_empty() {
            return Ok(());
        }
        let line = if builder.id_line > 0 {
            builder.id_line
        } else {
            builder.start_line
        };
        let id = builder
            .id
            .unwrap_or_else(|| format!("slide-{}", self.slides.len() + 1));
        if !self.seen_ids.insert(id.clone()) {
            return Err(LoadError::DuplicateIdentity { id, line });
        }
        self.slides.push(SlideSource {
            id,
            note: builder.note.join("\n"),
            blocks: builder.blocks,
        });
        Ok(())
    }

    fn finish(mut self) -> Result<DeckFile, LoadError> {
        if let Some(group) = self.group.take() {
            return Err(LoadError::UnterminatedGroup {
                directive: group.marker.directive(),
                line: group.opened_at,
            });
        }
        self.finish_slide()?;
        if self.slides.is_empty() {
            return Err(LoadError::EmptyDeck);
        }
        Ok(DeckFile {
            meta: self.meta,
            slides: self.slides,
        })
    }
}
