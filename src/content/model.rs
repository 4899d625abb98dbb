// Slide source definitions: the flat slide collection handed to the deck engine

/// Kind of build marker attached to a step group
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildMarker {
    /// Steps revealed one at a time, in order
    Build,
    /// Exactly one step highlighted at a time; advancing moves the highlight
    Cycle,
    /// All steps revealed together as a single atomic step
    All,
}

impl BuildMarker {
    /// Directive keyword that opens a group of this kind
    pub fn directive(&self) -> &'static str {
        match self {
            BuildMarker::Build => "@build",
            BuildMarker::Cycle => "@cycle",
            BuildMarker::All => "@all",
        }
    }
}

/// One progressive-reveal item inside a step group
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepItem {
    pub text: String,
    pub auto: bool, // advanced by the engine rather than the presenter
}

/// A marked group of reveal steps
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    pub marker: BuildMarker,
    pub items: Vec<StepItem>,
}

/// One content block of a slide
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Always-visible text line
    Text(String),
    /// Step group subject to build classification
    Group(Group),
}

/// One slide container as loaded from a deck file
#[derive(Debug, Clone)]
pub struct SlideSource {
    pub id: String,
    pub note: String, // speaker note, empty when none was given
    pub blocks: Vec<Block>,
}

/// Deck-level metadata found before the first slide
#[derive(Debug, Clone, Default)]
pub struct DeckMeta {
    pub title: Option<String>,
    pub duration_minutes: Option<u64>,
}

/// A fully loaded deck file
#[derive(Debug, Clone)]
pub struct DeckFile {
    pub meta: DeckMeta,
    pub slides: Vec<SlideSource>,
}
