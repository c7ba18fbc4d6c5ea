//! Style registries and their shared context.

mod config;
mod context;
mod style_registry;

pub use config::{ClassOptions, RegistryConfig};
pub use context::StyleContext;
pub use style_registry::{StyleRegistry, is_valid_class_name};
