//! CSS selector types and parsing.

mod parser;
mod types;

pub use parser::{CssSelectorParser, SelectorParser, parse_selector_groups};
pub use types::*;
