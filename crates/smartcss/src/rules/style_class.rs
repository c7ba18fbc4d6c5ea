//! A single registered style rule.

use crate::selector::ParsedSelector;
use crate::types::StyleDef;

/// Identity of a rule within a registry: its canonical selector text and
/// normalized media condition.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StyleKey {
    /// Canonical selector text in class-id space (`.a:hover .b`).
    pub selector: String,
    /// Normalized media condition, if any.
    pub media: Option<String>,
}

/// Everything needed to write one rule: header, body and media wrapper.
///
/// Created by [`StyleRegistry::set_class`](crate::StyleRegistry::set_class)
/// and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleClass {
    class_name: String,
    selector: ParsedSelector,
    style_def: StyleDef,
    media: Option<String>,
}

impl StyleClass {
    /// Create a style class.
    pub fn new(
        class_name: impl Into<String>,
        selector: ParsedSelector,
        style_def: StyleDef,
        media: Option<String>,
    ) -> Self {
        Self {
            class_name: class_name.into(),
            selector,
            style_def,
            media,
        }
    }

    /// The generated class name of the selector's subject.
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// The semantic class id of the selector's subject.
    pub fn class_id(&self) -> &str {
        &self.selector.subject().class_id
    }

    /// The parsed selector.
    pub fn selector(&self) -> &ParsedSelector {
        &self.selector
    }

    /// The style properties.
    pub fn style_def(&self) -> &StyleDef {
        &self.style_def
    }

    /// The media condition, if any.
    pub fn media(&self) -> Option<&str> {
        self.media.as_deref()
    }

    /// The identity used to detect duplicate registrations.
    pub fn key(&self) -> StyleKey {
        StyleKey {
            selector: self.selector.to_string(),
            media: self.media.clone(),
        }
    }
}
