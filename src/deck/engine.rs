// Deck orchestrator: navigation, lifecycle window, history, auto-builds

use rustc_hash::FxHashMap;
use std::time::Instant;
use tracing::{debug, warn};

use crate::content::model::{DeckFile, DeckMeta};
use crate::deck::autos::{AutoState, NoTransitions, TransitionNotifier};
use crate::deck::config::DeckConfig;
use crate::deck::error::{DeckError, DeckResult, DeckWarning};
use crate::deck::history::HistoryStack;
use crate::deck::hooks::{HookEvent, HookRegistry, HookResult};
use crate::deck::input::{route_key, DeckCommand, InputTarget, KeyToken, SwipeTracker};
use crate::deck::slide::{LifecycleState, Slide, StateChange};
use crate::settings::SettingsStore;

/// Settings key under which the selected theme is persisted
pub const THEME_KEY: &str = "theme";

/// Half-width of the lifecycle window around the current slide
const WINDOW_REACH: isize = 3;

/// Render feedback from [`Deck::tick`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickResult {
    NoRender,
    RenderRequested,
}

/// The deck: an ordered slide collection with exactly one current slide.
///
/// All mutation funnels through the navigation operations and `tick`;
/// the UI reads state through the getters and renders a projection.
pub struct Deck {
    /// Slides in deck order; indices are stable for the session
    slides: Vec<Slide>,
    /// Identity to index lookup
    by_id: FxHashMap<String, usize>,
    /// Index of the slide whose lifecycle state is `current`
    current_index: usize,
    /// Visited identities for back/forward replay
    history: HistoryStack,
    notes_visible: bool,
    config: DeckConfig,
    meta: DeckMeta,
    hooks: HookRegistry,
    /// Non-fatal conditions since the last drain
    warnings: Vec<DeckWarning>,
    /// Auto-build progress on the current slide
    auto: AutoState,
    notifier: Box<dyn TransitionNotifier>,
    /// Probed once at start; fixed-delay fallback applies when false
    transitions_supported: bool,
    swipe: SwipeTracker,
    /// Position in `config.themes`
    theme_index: usize,
    settings: Box<dyn SettingsStore>,
    started: bool,
}

impl std::fmt::Debug for Deck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Deck")
            .field("current_index", &self.current_index)
            .field("slide_count", &self.slides.len())
            .finish_non_exhaustive()
    }
}

impl Deck {
    /// Build the deck from loaded slides. The initial identity comes from
    /// `config.start`; an unresolvable one falls back to the default
    /// slide with a [`DeckWarning::BrokenLink`].
    pub fn new(
        file: DeckFile,
        config: DeckConfig,
        settings: Box<dyn SettingsStore>,
    ) -> DeckResult<Self> {
        if file.slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }
        let mut by_id = FxHashMap::default();
        for (index, source) in file.slides.iter().enumerate() {
            if by_id.insert(source.id.clone(), index).is_some() {
                return Err(DeckError::DuplicateIdentity {
                    id: source.id.clone(),
                });
            }
        }
        let slides: Vec<Slide> = file
            .slides
            .into_iter()
            .enumerate()
            .map(|(index, source)| Slide::new(index, source, config.builds_enabled))
            .collect();

        let theme_index = settings
            .get(THEME_KEY)
            .and_then(|name| config.themes.iter().position(|t| *t == name))
            .unwrap_or(0);

        let mut deck = Deck {
            slides,
            by_id,
            current_index: 0,
            history: HistoryStack::new(),
            notes_visible: false,
            config,
            meta: file.meta,
            hooks: HookRegistry::default(),
            warnings: Vec::new(),
            auto: AutoState::Idle,
            notifier: Box::new(NoTransitions),
            transitions_supported: false,
            swipe: SwipeTracker::default(),
            theme_index,
            settings,
            started: false,
        };
        deck.current_index = match deck.config.start.clone() {
            Some(id) => deck.resolve_or_fallback(&id),
            None => deck.resolve_default(),
        };
        Ok(deck)
    }

    /// Replace the transition-signal source. Only meaningful before
    /// [`Deck::start`], which probes support once for the session.
    pub fn set_transition_notifier(&mut self, notifier: Box<dyn TransitionNotifier>) {
        self.notifier = notifier;
    }

    /// Register the lifecycle callback for one slide. Register hooks
    /// before `start` so the opening slide's load hook can fire.
    pub fn register_hook<F>(&mut self, id: &str, hook: F)
    where
        F: FnMut(HookEvent) -> HookResult + 'static,
    {
        self.hooks.register(id, hook);
    }

    /// Apply the initial lifecycle window, seed the history, and arm the
    /// auto-build driver. Idempotent; navigation calls it implicitly.
    pub fn start(&mut self) {
        if self.started {
            return;
        }
        self.started = true;
        self.transitions_supported = self.notifier.supported();
        self.apply_window(self.current_index, None);
        let id = self.slides[self.current_index].id().to_string();
        self.history.record(&id);
        self.auto = AutoState::Armed;
        debug!(
            slide = %id,
            transitions = self.transitions_supported,
            "deck started"
        );
    }

    /// Advance: consume a build step if the current slide has one
    /// pending, otherwise move to the following slide. At the last slide
    /// with nothing left to build this re-renders in place.
    pub fn next(&mut self) {
        self.start();
        if self.slides[self.current_index].advance_build() {
            debug!(slide = %self.current_id(), "revealed build step");
            return;
        }
        let target = (self.current_index + 1).min(self.slides.len() - 1);
        let id = self.slides[target].id().to_string();
        self.go_to(&id, true);
    }

    /// Move to the preceding slide. Purely positional: build state is
    /// neither consulted nor touched. No-op at the first slide.
    pub fn prev(&mut self) {
        self.start();
        let target = self.current_index.saturating_sub(1);
        let id = self.slides[target].id().to_string();
        self.go_to(&id, true);
    }

    /// Navigate to `identity`. Jumps of more than one slide first reset
    /// the previously affected window to the distant baseline so no
    /// intermediate positions linger. `push_history` is false for
    /// history replay, which must not grow the stack.
    pub fn go_to(&mut self, identity: &str, push_history: bool) {
        self.start();
        let saved = self.current_index;
        let target = self.resolve_or_fallback(identity);
        let reset_from = (target.abs_diff(saved) > 1).then_some(saved);
        self.current_index = target;
        self.apply_window(target, reset_from);
        if target != saved {
            if push_history {
                let id = self.slides[target].id().to_string();
                self.history.record(&id);
            }
            self.auto = AutoState::Armed;
        }
        debug!(from = saved, to = target, push_history, "navigated");
    }

    /// Replay one step back in the visited history
    pub fn history_back(&mut self) {
        if let Some(id) = self.history.back() {
            self.go_to(&id, false);
        }
    }

    /// Replay one step forward in the visited history
    pub fn history_forward(&mut self) {
        if let Some(id) = self.history.forward() {
            self.go_to(&id, false);
        }
    }

    /// Flip the speaker-notes panel. Independent of navigation.
    pub fn toggle_notes(&mut self) {
        if !self.config.notes_enabled {
            return;
        }
        self.notes_visible = !self.notes_visible;
    }

    /// Rotate to the next configured theme and persist the selection
    pub fn cycle_theme(&mut self) {
        if self.config.themes.is_empty() {
            return;
        }
        self.theme_index = (self.theme_index + 1) % self.config.themes.len();
        let name = self.config.themes[self.theme_index].clone();
        if let Err(err) = self.settings.set(THEME_KEY, &name) {
            warn!(theme = %name, error = %err, "theme selection not persisted");
            self.warnings.push(DeckWarning::SettingsNotPersisted {
                key: THEME_KEY.to_string(),
                message: err.to_string(),
            });
        }
        debug!(theme = %name, "switched theme");
    }

    /// Route one key event through the deck's input mapping
    pub fn handle_key(&mut self, key: KeyToken, target: InputTarget) {
        if let Some(command) = route_key(key, target) {
            self.apply(command);
        }
    }

    pub fn apply(&mut self, command: DeckCommand) {
        match command {
            DeckCommand::Next => self.next(),
            DeckCommand::Prev => self.prev(),
            DeckCommand::ToggleNotes => self.toggle_notes(),
        }
    }

    /// Begin a horizontal swipe at `x` (abstract units)
    pub fn swipe_start(&mut self, x: f32) {
        self.swipe.begin(x);
    }

    /// Finish a swipe; travel beyond the configured threshold navigates
    pub fn swipe_end(&mut self, x: f32) {
        if let Some(command) = self.swipe.end(x, self.config.swipe_threshold) {
            self.apply(command);
        }
    }

    /// Drive the auto-build sequence. The host calls this from its event
    /// loop with the current time; the deck never reads clocks itself.
    pub fn tick(&mut self, now: Instant) -> TickResult {
        match self.auto {
            AutoState::Idle => TickResult::NoRender,
            AutoState::Armed => {
                self.auto = AutoState::Warmup {
                    due: now + self.config.auto_step_delay,
                };
                TickResult::NoRender
            }
            AutoState::Warmup { due } => {
                if now < due {
                    return TickResult::NoRender;
                }
                self.advance_auto(now)
            }
            AutoState::Settling { deadline } => {
                let settled = (self.transitions_supported && self.notifier.is_settled())
                    || now >= deadline;
                if !settled {
                    return TickResult::NoRender;
                }
                self.advance_auto(now)
            }
        }
    }

    /// Consume the next automatic step on the current slide, or stand
    /// down when a manual step is next or the queue is exhausted
    fn advance_auto(&mut self, now: Instant) -> TickResult {
        let index = self.current_index;
        if !self.slides[index].front_step_auto() {
            self.auto = AutoState::Idle;
            return TickResult::NoRender;
        }
        if self.slides[index].advance_build() {
            debug!(slide = %self.slides[index].id(), "auto-revealed build step");
            let wait = if self.transitions_supported {
                self.config.transition_timeout
            } else {
                self.config.auto_step_delay
            };
            self.auto = AutoState::Settling {
                deadline: now + wait,
            };
            TickResult::RenderRequested
        } else {
            self.auto = AutoState::Idle;
            TickResult::NoRender
        }
    }

    /// Resolve an identity, falling back to the default slide with a
    /// warning when it does not exist
    fn resolve_or_fallback(&mut self, identity: &str) -> usize {
        if let Some(&index) = self.by_id.get(identity) {
            return index;
        }
        warn!(requested = %identity, "broken link");
        self.warnings.push(DeckWarning::BrokenLink {
            requested: identity.to_string(),
        });
        self.resolve_default()
    }

    fn resolve_default(&self) -> usize {
        self.by_id
            .get(&self.config.fallback_id)
            .copied()
            .unwrap_or(0)
    }

    /// Re-stage the lifecycle window around `center`. When `reset_from`
    /// is set, the window around that index is first collapsed to the
    /// distant baseline.
    fn apply_window(&mut self, center: usize, reset_from: Option<usize>) {
        if let Some(saved) = reset_from {
            for offset in -WINDOW_REACH..=WINDOW_REACH {
                if let Some(index) = Self::window_index(saved, offset, self.slides.len()) {
                    let baseline = if index < center {
                        LifecycleState::DistantPast
                    } else {
                        LifecycleState::DistantFuture
                    };
                    let change = self.slides[index].set_state(baseline);
                    self.process_change(index, change);
                }
            }
        }
        for offset in -WINDOW_REACH..=WINDOW_REACH {
            if let Some(index) = Self::window_index(center, offset, self.slides.len()) {
                let change = self.slides[index].set_state(LifecycleState::from_offset(offset));
                self.process_change(index, change);
            }
        }
    }

    fn window_index(center: usize, offset: isize, len: usize) -> Option<usize> {
        let index = center as isize + offset;
        (0..len as isize).contains(&index).then_some(index as usize)
    }

    fn process_change(&mut self, index: usize, change: StateChange) {
        if change.entered_current {
            self.fire_hook(index, HookEvent::Load);
        }
        if change.left_current {
            self.fire_hook(index, HookEvent::Unload);
        }
    }

    /// Fire one hook; failures become warnings and never abort navigation
    fn fire_hook(&mut self, index: usize, event: HookEvent) {
        let id = self.slides[index].id().to_string();
        if let Some(Err(message)) = self.hooks.fire(&id, event) {
            warn!(slide = %id, %message, "lifecycle hook failed");
            self.warnings.push(DeckWarning::HookFailed { id, message });
        }
    }

    // ========== Getter methods for UI ==========

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_slide(&self) -> &Slide {
        &self.slides[self.current_index]
    }

    pub fn current_id(&self) -> &str {
        self.slides[self.current_index].id()
    }

    /// Speaker note of the current slide
    pub fn speaker_note(&self) -> &str {
        self.slides[self.current_index].speaker_note()
    }

    pub fn notes_visible(&self) -> bool {
        self.notes_visible
    }

    pub fn meta(&self) -> &DeckMeta {
        &self.meta
    }

    pub fn theme_name(&self) -> &str {
        self.config
            .themes
            .get(self.theme_index)
            .map(String::as_str)
            .unwrap_or("moon")
    }

    /// Whether the auto-build driver has work scheduled
    pub fn auto_running(&self) -> bool {
        self.auto.is_running()
    }

    /// Build steps left on the current slide
    pub fn pending_steps(&self) -> usize {
        self.slides[self.current_index].pending_steps()
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Warnings gathered since the last drain, oldest first
    pub fn drain_warnings(&mut self) -> Vec<DeckWarning> {
        std::mem::take(&mut self.warnings)
    }
}
