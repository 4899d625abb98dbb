// Build queue classification and advance semantics

use std::collections::VecDeque;

use crate::content::model::{Block, BuildMarker, Group};

/// Reference to one step item within a slide's blocks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StepRef {
    pub block: usize,
    pub item: usize,
}

/// Rendered position of a step in the reveal progression
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepDisplay {
    /// Not yet revealed
    Pending,
    /// Revealed and shown normally
    Revealed,
    /// Highlighted entry of a cycle group
    CycleActive,
    /// Dimmed entry of a cycle group
    CycleInactive,
}

/// Classified build queue for one slide.
///
/// Classification inspects which markers are present, with precedence
/// Grouped > Cycle > Sequential > none. Steps of the winning kind are
/// collected across all groups of that kind, in document order; groups
/// of losing kinds are left fully revealed.
#[derive(Debug, Clone, Default)]
enum BuildQueue {
    #[default]
    None,
    /// Steps revealed front to back, one per advance
    Sequential { pending: VecDeque<StepRef> },
    /// One active entry; advancing moves the highlight forward
    Cycle {
        active: StepRef,
        pending: VecDeque<StepRef>,
    },
    /// Everything revealed together on the first advance
    Grouped { steps: Vec<StepRef>, spent: bool },
}

/// Build progress for one slide: the queue plus per-step display states
#[derive(Debug, Clone)]
pub struct BuildState {
    queue: BuildQueue,
    initialized: bool,
    enabled: bool,
    // Indexed [block][item]; empty for text blocks.
    displays: Vec<Vec<StepDisplay>>,
    autos: Vec<Vec<bool>>,
}

/// Steps of the winning marker kind, if any kind is present
fn classify(blocks: &[Block]) -> Option<(BuildMarker, Vec<StepRef>)> {
    for marker in [BuildMarker::All, BuildMarker::Cycle, BuildMarker::Build] {
        let refs: Vec<StepRef> = blocks
            .iter()
            .enumerate()
            .filter_map(|(b, block)| match block {
                Block::Group(Group { marker: m, items }) if *m == marker => {
                    Some((0..items.len()).map(move |i| StepRef { block: b, item: i }))
                }
                _ => None,
            })
            .flatten()
            .collect();
        if !refs.is_empty() {
            return Some((marker, refs));
        }
    }
    None
}

impl BuildState {
    /// Set up display defaults for a slide's blocks. The queue itself is
    /// built later by [`BuildState::initialize`], on the first visit.
    pub fn new(blocks: &[Block], enabled: bool) -> Self {
        let autos: Vec<Vec<bool>> = blocks
            .iter()
            .map(|block| match block {
                Block::Text(_) => Vec::new(),
                Block::Group(g) => g.items.iter().map(|item| item.auto).collect(),
            })
            .collect();
        let mut displays: Vec<Vec<StepDisplay>> = autos
            .iter()
            .map(|items| vec![StepDisplay::Revealed; items.len()])
            .collect();
        if enabled {
            if let Some((marker, refs)) = classify(blocks) {
                for (i, step) in refs.iter().enumerate() {
                    displays[step.block][step.item] = match marker {
                        BuildMarker::Build | BuildMarker::All => StepDisplay::Pending,
                        BuildMarker::Cycle if i == 0 => StepDisplay::CycleActive,
                        BuildMarker::Cycle => StepDisplay::CycleInactive,
                    };
                }
            }
        }
        Self {
            queue: BuildQueue::None,
            initialized: false,
            enabled,
            displays,
            autos,
        }
    }

    /// Build the queue on the first visit. Later calls are no-ops so an
    /// in-progress queue is never reset by revisiting the slide.
    pub fn initialize(&mut self, blocks: &[Block]) {
        if self.initialized {
            return;
        }
        self.initialized = true;
        if !self.enabled {
            return;
        }
        self.queue = match classify(blocks) {
            None => BuildQueue::None,
            Some((BuildMarker::Build, refs)) => BuildQueue::Sequential {
                pending: refs.into(),
            },
            Some((BuildMarker::All, refs)) => BuildQueue::Grouped {
                steps: refs,
                spent: false,
            },
            Some((BuildMarker::Cycle, refs)) => {
                let mut pending: VecDeque<StepRef> = refs.into();
                match pending.pop_front() {
                    Some(active) => BuildQueue::Cycle { active, pending },
                    None => BuildQueue::None,
                }
            }
        };
    }

    /// Consume one build step. Returns `false` once nothing remains.
    pub fn advance(&mut self) -> bool {
        match &mut self.queue {
            BuildQueue::None => false,
            BuildQueue::Sequential { pending } => match pending.pop_front() {
                Some(step) => {
                    self.displays[step.block][step.item] = StepDisplay::Revealed;
                    true
                }
                None => false,
            },
            BuildQueue::Cycle { active, pending } => match pending.pop_front() {
                Some(next) => {
                    self.displays[active.block][active.item] = StepDisplay::CycleInactive;
                    self.displays[next.block][next.item] = StepDisplay::CycleActive;
                    *active = next;
                    true
                }
                None => false,
            },
            BuildQueue::Grouped { steps, spent } => {
                if *spent {
                    return false;
                }
                for step in steps.iter() {
                    self.displays[step.block][step.item] = StepDisplay::Revealed;
                }
                *spent = true;
                true
            }
        }
    }

    /// Whether the step the next advance would consume is automatic
    pub fn front_auto(&self) -> bool {
        let front = match &self.queue {
            BuildQueue::None => None,
            BuildQueue::Sequential { pending } => pending.front(),
            BuildQueue::Cycle { pending, .. } => pending.front(),
            BuildQueue::Grouped { steps, spent } => {
                if *spent {
                    None
                } else {
                    steps.first()
                }
            }
        };
        front.is_some_and(|step| self.autos[step.block][step.item])
    }

    /// Number of advances left before the queue is exhausted
    pub fn pending_steps(&self) -> usize {
        match &self.queue {
            BuildQueue::None => 0,
            BuildQueue::Sequential { pending } => pending.len(),
            BuildQueue::Cycle { pending, .. } => pending.len(),
            BuildQueue::Grouped { spent, .. } => usize::from(!*spent),
        }
    }

    pub fn display(&self, step: StepRef) -> StepDisplay {
        self.displays[step.block][step.item]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::model::StepItem;

    fn group(marker: BuildMarker, items: &[(&str, bool)]) -> Block {
        Block::Group(Group {
            marker,
            items: items
                .iter()
                .map(|(text, auto)| StepItem {
                    text: text.to_string(),
                    auto: *auto,
                })
                .collect(),
        })
    }

    fn step(block: usize, item: usize) -> StepRef {
        StepRef { block, item }
    }

    #[test]
    fn test_sequential_advance_reveals_in_order() {
        let blocks = vec![group(BuildMarker::Build, &[("a", false), ("b", false)])];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);

        assert_eq!(build.display(step(0, 0)), StepDisplay::Pending);
        assert!(build.advance());
        assert_eq!(build.display(step(0, 0)), StepDisplay::Revealed);
        assert_eq!(build.display(step(0, 1)), StepDisplay::Pending);
        assert!(build.advance());
        assert!(!build.advance());
    }

    #[test]
    fn test_cycle_first_item_active_at_initialization() {
        let blocks = vec![group(BuildMarker::Cycle, &[("c1", false), ("c2", false)])];
        let mut build = BuildState::new(&blocks, true);
        assert_eq!(build.display(step(0, 0)), StepDisplay::CycleActive);
        assert_eq!(build.display(step(0, 1)), StepDisplay::CycleInactive);
        build.initialize(&blocks);
        assert_eq!(build.pending_steps(), 1);
    }

    #[test]
    fn test_cycle_moves_highlight_and_keeps_baseline() {
        let blocks = vec![group(
            BuildMarker::Cycle,
            &[("c1", false), ("c2", false), ("c3", false)],
        )];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);

        assert!(build.advance());
        assert_eq!(build.display(step(0, 0)), StepDisplay::CycleInactive);
        assert_eq!(build.display(step(0, 1)), StepDisplay::CycleActive);
        assert!(build.advance());
        assert_eq!(build.display(step(0, 2)), StepDisplay::CycleActive);
        assert!(!build.advance());
        assert!(!build.advance());
        // Exhaustion leaves the last entry highlighted.
        assert_eq!(build.display(step(0, 2)), StepDisplay::CycleActive);
    }

    #[test]
    fn test_grouped_reveals_everything_at_once() {
        let blocks = vec![
            group(BuildMarker::All, &[("x", false), ("y", false)]),
            group(BuildMarker::All, &[("z", false)]),
        ];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);

        assert_eq!(build.pending_steps(), 1);
        assert!(build.advance());
        assert_eq!(build.display(step(0, 0)), StepDisplay::Revealed);
        assert_eq!(build.display(step(0, 1)), StepDisplay::Revealed);
        assert_eq!(build.display(step(1, 0)), StepDisplay::Revealed);
        assert!(!build.advance());
    }

    #[test]
    fn test_precedence_grouped_over_cycle_over_sequential() {
        let blocks = vec![
            group(BuildMarker::Build, &[("s", false)]),
            group(BuildMarker::Cycle, &[("c", false)]),
            group(BuildMarker::All, &[("g", false)]),
        ];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);

        // Losing kinds are left fully revealed.
        assert_eq!(build.display(step(0, 0)), StepDisplay::Revealed);
        assert_eq!(build.display(step(1, 0)), StepDisplay::Revealed);
        assert_eq!(build.display(step(2, 0)), StepDisplay::Pending);
        assert!(build.advance());
        assert!(!build.advance());
    }

    #[test]
    fn test_steps_collected_across_groups_of_winning_kind() {
        let blocks = vec![
            group(BuildMarker::Build, &[("a", false)]),
            Block::Text("between".to_string()),
            group(BuildMarker::Build, &[("b", false)]),
        ];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);

        assert_eq!(build.pending_steps(), 2);
        assert!(build.advance());
        assert_eq!(build.display(step(0, 0)), StepDisplay::Revealed);
        assert_eq!(build.display(step(2, 0)), StepDisplay::Pending);
    }

    #[test]
    fn test_disabled_builds_reveal_everything() {
        let blocks = vec![group(BuildMarker::Build, &[("a", false), ("b", true)])];
        let mut build = BuildState::new(&blocks, false);
        build.initialize(&blocks);

        assert_eq!(build.display(step(0, 0)), StepDisplay::Revealed);
        assert_eq!(build.pending_steps(), 0);
        assert!(!build.advance());
        assert!(!build.front_auto());
    }

    #[test]
    fn test_front_auto_follows_queue_order() {
        let blocks = vec![group(
            BuildMarker::Build,
            &[("manual", false), ("auto", true)],
        )];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);

        assert!(!build.front_auto());
        assert!(build.advance());
        assert!(build.front_auto());
        assert!(build.advance());
        assert!(!build.front_auto());
    }

    #[test]
    fn test_second_initialize_keeps_progress() {
        let blocks = vec![group(BuildMarker::Build, &[("a", false), ("b", false)])];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);
        assert!(build.advance());

        build.initialize(&blocks);
        assert_eq!(build.pending_steps(), 1);
        assert_eq!(build.display(step(0, 0)), StepDisplay::Revealed);
    }

    #[test]
    fn test_text_only_slide_has_no_queue() {
        let blocks = vec![Block::Text("plain".to_string())];
        let mut build = BuildState::new(&blocks, true);
        build.initialize(&blocks);
        assert!(!build.advance());
        assert_eq!(build.pending_steps(), 0);
    }
}
