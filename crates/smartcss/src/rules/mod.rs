//! Registered style rules.

mod style_class;

pub use style_class::{StyleClass, StyleKey};
