//! Scoped CSS class generation for component modules.
//!
//! This crate turns style descriptions into collision-free class names and a
//! stylesheet, featuring:
//!
//! - **Registries**: One namespace per module, so `root` or `label` in two
//!   modules never share a generated class name
//! - **Selectors**: Ancestor chains, pseudo-classes and pseudo-elements over
//!   semantic class ids (`.item:hover .label`)
//! - **Stable names**: Every rule for a class id reuses the name it was first
//!   given, so `:hover` variants apply to the same element
//! - **Media queries**: Validated conditions wrapped as `@media` blocks
//! - **Composition**: Child registries rendered after their parent
//!
//! # Example
//!
//! ```
//! use smartcss::prelude::*;
//!
//! let context = StyleContext::new();
//! let css = StyleRegistry::in_context(&context, RegistryConfig::new());
//!
//! css.set_class(".a", [("color", "red")])?;
//! css.set_class(".a:hover .b", StyleDef::new().with("backgroundColor", Color::RED))?;
//!
//! let (a, b) = (css.get_class("a"), css.get_class("b"));
//! assert_eq!(
//!     context.styles_as_string(),
//!     format!(".{a}{{color:red;}}.{a}:hover .{b}{{background-color:hsl(0, 100%, 50%);}}")
//! );
//! # Ok::<(), smartcss::Error>(())
//! ```
//!
//! # Logging
//!
//! Diagnostics are emitted through `tracing` under the targets in
//! [`targets`]. Install a subscriber (e.g. `tracing_subscriber::fmt::init()`)
//! to see them.

pub mod media;
pub mod registry;
pub mod render;
pub mod rules;
pub mod selector;
pub mod sink;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use registry::{ClassOptions, RegistryConfig, StyleContext, StyleRegistry};
pub use rules::StyleClass;

/// Target names for log filtering.
pub mod targets {
    /// Registration and lookup target.
    pub const REGISTRY: &str = "smartcss::registry";
    /// Stylesheet rendering target.
    pub const RENDER: &str = "smartcss::render";
    /// Process-wide context target.
    pub const CONTEXT: &str = "smartcss::context";
}

/// Render every root registry of the global context.
///
/// See [`StyleContext::styles_as_string`].
pub fn styles_as_string() -> String {
    StyleContext::global().styles_as_string()
}

/// Clear every registry of the global context and reset its id counter.
///
/// Intended for tests and teardown; see [`StyleContext::clear_all`].
pub fn delete_styles() {
    StyleContext::global().clear_all();
}

/// Write the global stylesheet into a sink.
pub fn inject_styles<S: sink::StyleSink + ?Sized>(sink: &mut S) -> Result<()> {
    StyleContext::global().inject_styles(sink)
}

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::registry::{ClassOptions, RegistryConfig, StyleContext, StyleRegistry};
    pub use crate::rules::StyleClass;
    pub use crate::selector::{Combinator, ParsedSelector, Pseudo, PseudoKind, SelectorSegment};
    pub use crate::sink::StyleSink;
    pub use crate::types::{Color, StyleDef, StyleValue};
    pub use crate::{Error, Result};
}
