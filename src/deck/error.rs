// Engine error and warning types

use thiserror::Error;

/// Convenience alias for fallible deck operations
pub type DeckResult<T> = Result<T, DeckError>;

/// Fatal deck construction errors
#[derive(Debug, Error)]
pub enum DeckError {
    #[error("deck must contain at least one slide")]
    EmptyDeck,
    #[error("duplicate slide identity `{id}`")]
    DuplicateIdentity { id: String },
}

/// Non-fatal conditions, buffered on the deck and drainable by the host.
///
/// Warnings never abort the operation that raised them.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckWarning {
    /// A requested identity resolved to no slide; navigation fell back to
    /// the default slide
    #[error("broken link: no slide with identity `{requested}`")]
    BrokenLink { requested: String },
    /// A lifecycle hook reported failure
    #[error("hook failed on slide `{id}`: {message}")]
    HookFailed { id: String, message: String },
    /// The injected settings store rejected a write
    #[error("setting `{key}` not persisted: {message}")]
    SettingsNotPersisted { key: String, message: String },
}
