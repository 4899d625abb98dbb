// Auto-build driver state and transition signaling

use std::time::Instant;

/// Source of transition-completion signals.
///
/// Support is probed once when the deck starts; without it the engine
/// falls back to fixed delays between automatic steps. A supported but
/// silent notifier is bounded by the configured transition timeout, so
/// the build sequence never stalls.
pub trait TransitionNotifier {
    /// Whether the runtime can deliver transition-completion signals
    fn supported(&self) -> bool;
    /// True once the transition started by the latest reveal has finished
    fn is_settled(&self) -> bool;
}

/// Notifier for runtimes without transition signals
#[derive(Debug, Clone, Copy, Default)]
pub struct NoTransitions;

impl TransitionNotifier for NoTransitions {
    fn supported(&self) -> bool {
        false
    }

    fn is_settled(&self) -> bool {
        true
    }
}

/// Progress of the automatic build sequence on the current slide.
///
/// Navigation away from the slide overwrites this state, which is the
/// cancellation point: no timer outlives the arrival that armed it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AutoState {
    /// Nothing scheduled
    Idle,
    /// A slide just became current; the next tick starts the warm-up clock
    Armed,
    /// Waiting out the micro-delay before the first automatic step
    Warmup { due: Instant },
    /// A step was revealed; waiting for its transition to settle
    Settling { deadline: Instant },
}

impl AutoState {
    pub(crate) fn is_running(&self) -> bool {
        !matches!(self, AutoState::Idle)
    }
}
