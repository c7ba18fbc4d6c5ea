//! Error types for the class registry.

/// Result type alias for registry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while registering or emitting styles.
///
/// Every error is fatal to the call that produced it; a failed registration
/// leaves the registry exactly as it was before the call.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The selector could not be tokenized or uses unsupported syntax.
    #[error("Invalid selector '{selector}': {message}")]
    InvalidSelector { selector: String, message: String },

    /// A comma-separated selector group was submitted.
    #[error("Doesn't accept multiple definitions at once: '{selector}'")]
    MultipleSelectors { selector: String },

    /// A selector segment names more than one class (`.a.b`).
    #[error("Doesn't accept multiple classes at once: '{selector}'")]
    CompoundClass { selector: String },

    /// A selector segment names no class at all (`:hover`).
    #[error("Selector segment without a class: '{selector}'")]
    MissingClass { selector: String },

    /// A non-terminal segment references a class id not yet registered.
    #[error("Ancestor not defined: class id '{class_id}' in '{selector}'")]
    UndefinedAncestor { selector: String, class_id: String },

    /// The same (selector, media) pair was registered twice.
    #[error("Class id already exists for this selector and media: '{selector}'")]
    DuplicateSelector {
        selector: String,
        media: Option<String>,
    },

    /// A hardcoded class name was supplied for a class id that already has one.
    #[error(
        "Can't use hardcoded class name '{requested}' because already exists one for the same class id '{class_id}' ('{existing}')"
    )]
    NameConflict {
        class_id: String,
        existing: String,
        requested: String,
    },

    /// A supplied or synthesized class name is not a valid CSS class name.
    #[error("Invalid class name '{0}'")]
    InvalidClassName(String),

    /// The child registry already has a parent.
    #[error("Child registry already attached")]
    DuplicateChild,

    /// Attaching the registry would make it its own descendant.
    #[error("Child registry would create a cycle")]
    CyclicChild,

    /// The media condition failed validation.
    #[error("Invalid media condition '{media}': {message}")]
    InvalidMedia { media: String, message: String },

    /// A style sink rejected the generated stylesheet.
    #[error("Failed to write stylesheet: {0}")]
    Sink(#[from] std::io::Error),
}

impl Error {
    /// Create a selector error.
    pub fn invalid_selector(selector: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidSelector {
            selector: selector.into(),
            message: message.into(),
        }
    }

    /// Create a media error.
    pub fn invalid_media(media: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidMedia {
            media: media.into(),
            message: message.into(),
        }
    }
}
