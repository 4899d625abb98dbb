// Input routing: key and swipe interpretation

/// Navigation commands produced by the router
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeckCommand {
    Next,
    Prev,
    ToggleNotes,
}

/// Key tokens the engine understands, independent of any input backend
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyToken {
    Left,
    Right,
    PageUp,
    PageDown,
    /// The speaker-notes key ("N")
    Notes,
}

/// Where an input event was aimed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputTarget {
    General,
    /// A text-entry control has focus; navigation keys must not fire
    TextEntry,
}

/// Map a key to a deck command. Events aimed at text-entry targets are
/// dropped so typing never navigates the deck.
pub fn route_key(key: KeyToken, target: InputTarget) -> Option<DeckCommand> {
    if target == InputTarget::TextEntry {
        return None;
    }
    match key {
        KeyToken::Left | KeyToken::PageUp => Some(DeckCommand::Prev),
        KeyToken::Right | KeyToken::PageDown => Some(DeckCommand::Next),
        KeyToken::Notes => Some(DeckCommand::ToggleNotes),
    }
}

/// Accumulates one horizontal swipe in abstract input units
#[derive(Debug, Clone, Copy, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
}

impl SwipeTracker {
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
    }

    /// Finish the swipe. Emits a command only when the horizontal travel
    /// strictly exceeds `threshold`; a release without a matching begin
    /// is ignored.
    pub fn end(&mut self, x: f32, threshold: f32) -> Option<DeckCommand> {
        let start = self.start_x.take()?;
        let delta = start - x;
        if delta > threshold {
            Some(DeckCommand::Next)
        } else if delta < -threshold {
            Some(DeckCommand::Prev)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        let general = InputTarget::General;
        assert_eq!(
            route_key(KeyToken::Left, general),
            Some(DeckCommand::Prev)
        );
        assert_eq!(
            route_key(KeyToken::PageUp, general),
            Some(DeckCommand::Prev)
        );
        assert_eq!(
            route_key(KeyToken::Right, general),
            Some(DeckCommand::Next)
        );
        assert_eq!(
            route_key(KeyToken::PageDown, general),
            Some(DeckCommand::Next)
        );
        assert_eq!(
            route_key(KeyToken::Notes, general),
            Some(DeckCommand::ToggleNotes)
        );
    }

    #[test]
    fn test_text_entry_targets_swallow_keys() {
        assert_eq!(route_key(KeyToken::Right, InputTarget::TextEntry), None);
        assert_eq!(route_key(KeyToken::Notes, InputTarget::TextEntry), None);
    }

    #[test]
    fn test_swipe_below_threshold_is_ignored() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(200.0);
        assert_eq!(swipe.end(80.0, 150.0), None);
    }

    #[test]
    fn test_swipe_leftward_advances() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(260.0);
        assert_eq!(swipe.end(60.0, 150.0), Some(DeckCommand::Next));
    }

    #[test]
    fn test_swipe_rightward_goes_back() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(40.0);
        assert_eq!(swipe.end(240.0, 150.0), Some(DeckCommand::Prev));
    }

    #[test]
    fn test_exact_threshold_does_not_navigate() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(150.0);
        assert_eq!(swipe.end(0.0, 150.0), None);
    }

    #[test]
    fn test_release_without_begin_is_ignored() {
        let mut swipe = SwipeTracker::default();
        assert_eq!(swipe.end(500.0, 150.0), None);
    }

    #[test]
    fn test_tracker_resets_after_release() {
        let mut swipe = SwipeTracker::default();
        swipe.begin(300.0);
        assert_eq!(swipe.end(0.0, 150.0), Some(DeckCommand::Next));
        assert_eq!(swipe.end(0.0, 150.0), None);
    }
}
