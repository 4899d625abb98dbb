// Deck configuration, replacing the ambient globals of older slide decks

use std::time::Duration;

/// Explicit engine configuration supplied at construction
#[derive(Debug, Clone)]
pub struct DeckConfig {
    /// Identity to show first; `None` falls back to `fallback_id`
    pub start: Option<String>,
    /// Identity shown when a requested one cannot be resolved
    pub fallback_id: String,
    /// Master switch for build queues; when off, every step is visible
    /// from the start and `next()` always navigates
    pub builds_enabled: bool,
    /// Master switch for the speaker-notes toggle
    pub notes_enabled: bool,
    /// Pause after a slide becomes current before automatic steps start,
    /// and the settle interval between steps when transition signals are
    /// unavailable
    pub auto_step_delay: Duration,
    /// Upper bound on waiting for a transition-completion signal
    pub transition_timeout: Duration,
    /// Minimum horizontal swipe distance, in abstract input units, that
    /// triggers navigation
    pub swipe_threshold: f32,
    /// Theme rotation for `cycle_theme`; the first entry is the default
    pub themes: Vec<String>,
}

impl Default for DeckConfig {
    fn default() -> Self {
        Self {
            start: None,
            fallback_id: "landing-slide".to_string(),
            builds_enabled: true,
            notes_enabled: true,
            auto_step_delay: Duration::from_millis(400),
            transition_timeout: Duration::from_secs(1),
            swipe_threshold: 150.0,
            themes: vec![
                "moon".to_string(),
                "sand".to_string(),
                "sea-wave".to_string(),
            ],
        }
    }
}
