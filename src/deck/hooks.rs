// Lifecycle hook registry, replacing per-slide inline hook scripts

use rustc_hash::FxHashMap;

/// Which lifecycle edge fired
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HookEvent {
    /// The slide became current
    Load,
    /// The slide stopped being current
    Unload,
}

/// Outcome of one hook invocation; the message ends up in a warning
pub type HookResult = Result<(), String>;

type HookFn = Box<dyn FnMut(HookEvent) -> HookResult>;

/// Pre-registered lifecycle callbacks keyed by slide identity.
///
/// The embedding application registers callbacks before the deck starts;
/// slides without a registration are skipped silently.
#[derive(Default)]
pub struct HookRegistry {
    hooks: FxHashMap<String, HookFn>,
}

impl HookRegistry {
    /// Register the callback for one slide, replacing any previous one
    pub fn register<F>(&mut self, id: &str, hook: F)
    where
        F: FnMut(HookEvent) -> HookResult + 'static,
    {
        self.hooks.insert(id.to_string(), Box::new(hook));
    }

    /// Invoke the callback for `id`, if one is registered
    pub fn fire(&mut self, id: &str, event: HookEvent) -> Option<HookResult> {
        self.hooks.get_mut(id).map(|hook| hook(event))
    }

    pub fn is_registered(&self, id: &str) -> bool {
        self.hooks.contains_key(id)
    }
}
