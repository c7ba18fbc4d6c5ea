//! Stylesheet text generation.

mod rule;
mod value;

pub use rule::{render_rules, render_selector, render_style_class, write_style_class};
pub use value::{hyphenate_property, render_declaration};
