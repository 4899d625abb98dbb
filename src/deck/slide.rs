// Slide leaf: identity, note, lifecycle position, and build progress

use crate::content::model::{Block, SlideSource};
use crate::deck::build::{BuildState, StepDisplay, StepRef};

/// The seven-position lifecycle window centered on the current slide
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifecycleState {
    DistantPast,
    FarPast,
    Past,
    Current,
    Future,
    FarFuture,
    DistantFuture,
}

impl LifecycleState {
    /// Map a signed offset from the current slide to a window position.
    /// Offsets beyond the window collapse into the distant boundaries.
    pub fn from_offset(offset: isize) -> Self {
        match offset {
            o if o <= -3 => LifecycleState::DistantPast,
            -2 => LifecycleState::FarPast,
            -1 => LifecycleState::Past,
            0 => LifecycleState::Current,
            1 => LifecycleState::Future,
            2 => LifecycleState::FarFuture,
            _ => LifecycleState::DistantFuture,
        }
    }
}

/// Which `current` edges a state change crossed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StateChange {
    pub entered_current: bool,
    pub left_current: bool,
    /// True only on the very first transition into `current`
    pub first_visit: bool,
}

/// One slide of the deck
pub struct Slide {
    /// Position in the deck, fixed after construction
    index: usize,
    /// Stable external identifier used for addressing
    id: String,
    /// Speaker note, empty when none was given
    note: String,
    /// Content blocks in display order
    blocks: Vec<Block>,
    /// Set on the first transition into `current`
    visited: bool,
    state: LifecycleState,
    build: BuildState,
}

impl Slide {
    pub fn new(index: usize, source: SlideSource, builds_enabled: bool) -> Self {
        let build = BuildState::new(&source.blocks, builds_enabled);
        Self {
            index,
            id: source.id,
            note: source.note,
            blocks: source.blocks,
            visited: false,
            state: LifecycleState::DistantFuture,
            build,
        }
    }

    /// Move the slide to a new window position.
    ///
    /// The first transition into `current` marks the slide visited and
    /// builds its queue; revisits keep queue progress. The returned edges
    /// tell the deck which lifecycle hooks to fire.
    pub fn set_state(&mut self, state: LifecycleState) -> StateChange {
        let was_current = self.state == LifecycleState::Current;
        let now_current = state == LifecycleState::Current;
        let first_visit = now_current && !self.visited;
        if first_visit {
            self.visited = true;
            self.build.initialize(&self.blocks);
        }
        self.state = state;
        StateChange {
            entered_current: now_current && !was_current,
            left_current: was_current && !now_current,
            first_visit,
        }
    }

    /// Consume one build step. Build queues only shrink while the slide
    /// is current; calls in any other state return `false` untouched.
    pub fn advance_build(&mut self) -> bool {
        if self.state != LifecycleState::Current {
            return false;
        }
        self.build.advance()
    }

    /// Whether the step the next advance would consume is automatic
    pub fn front_step_auto(&self) -> bool {
        self.build.front_auto()
    }

    // ========== Getter methods for UI ==========

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn speaker_note(&self) -> &str {
        &self.note
    }

    pub fn state(&self) -> LifecycleState {
        self.state
    }

    pub fn is_current(&self) -> bool {
        self.state == LifecycleState::Current
    }

    pub fn visited(&self) -> bool {
        self.visited
    }

    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// First plain text line, used as the display title in jump lists
    pub fn title_line(&self) -> Option<&str> {
        self.blocks.iter().find_map(|block| match block {
            Block::Text(line) => Some(line.as_str()),
            Block::Group(_) => None,
        })
    }

    pub fn step_display(&self, step: StepRef) -> StepDisplay {
        self.build.display(step)
    }

    pub fn pending_steps(&self) -> usize {
        self.build.pending_steps()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::{BuildMarker, Group, StepItem};

    fn slide_with_build() -> Slide {
        let source = SlideSource {
            id: "s".to_string(),
            note: "talk slowly".to_string(),
            blocks: vec![Block::Group(Group {
                marker: BuildMarker::Build,
                items: vec![StepItem {
                    text: "step".to_string(),
                    auto: false,
                }],
            })],
        };
        Slide::new(0, source, true)
    }

    #[test]
    fn test_offset_mapping_collapses_at_boundaries() {
        assert_eq!(LifecycleState::from_offset(0), LifecycleState::Current);
        assert_eq!(LifecycleState::from_offset(-1), LifecycleState::Past);
        assert_eq!(LifecycleState::from_offset(2), LifecycleState::FarFuture);
        assert_eq!(LifecycleState::from_offset(-3), LifecycleState::DistantPast);
        assert_eq!(LifecycleState::from_offset(-9), LifecycleState::DistantPast);
        assert_eq!(LifecycleState::from_offset(3), LifecycleState::DistantFuture);
        assert_eq!(LifecycleState::from_offset(40), LifecycleState::DistantFuture);
    }

    #[test]
    fn test_first_visit_initializes_queue_once() {
        let mut slide = slide_with_build();
        let change = slide.set_state(LifecycleState::Current);
        assert!(change.entered_current);
        assert!(change.first_visit);
        assert!(slide.advance_build());

        slide.set_state(LifecycleState::Past);
        let change = slide.set_state(LifecycleState::Current);
        assert!(change.entered_current);
        assert!(!change.first_visit);
        // Progress survives the revisit.
        assert!(!slide.advance_build());
    }

    #[test]
    fn test_builds_do_not_advance_outside_current() {
        let mut slide = slide_with_build();
        slide.set_state(LifecycleState::Current);
        slide.set_state(LifecycleState::Future);
        assert!(!slide.advance_build());
        assert_eq!(slide.pending_steps(), 1);
    }

    #[test]
    fn test_same_state_is_not_an_edge() {
        let mut slide = slide_with_build();
        slide.set_state(LifecycleState::Current);
        let change = slide.set_state(LifecycleState::Current);
        assert!(!change.entered_current);
        assert!(!change.left_current);
    }
}
