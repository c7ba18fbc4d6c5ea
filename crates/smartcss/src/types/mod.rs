//! Style value types.
//!
//! This module provides the values a style definition is built from.

mod color;
mod style_def;
mod value;

pub use color::Color;
pub use style_def::StyleDef;
pub use value::StyleValue;
