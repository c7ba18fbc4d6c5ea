//! Style property values.

use super::Color;

/// The value of a single style property.
///
/// A closed set of shapes the renderer knows how to write:
///
/// ```
/// use smartcss::types::{Color, StyleValue};
///
/// let scalar = StyleValue::from("1px solid");
/// let color = StyleValue::from(Color::RED);
/// let border = StyleValue::from(vec![scalar.clone(), color.clone()]);
///
/// assert_eq!(border.to_css(), "1px solid hsl(0, 100%, 50%)");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum StyleValue {
    /// Text passed through verbatim (`red`, `10px`, `attr(data-hover)`).
    Scalar(String),
    /// A structured color, written in HSL notation.
    Color(Color),
    /// Space-separated tokens of a shorthand property (`border`, `margin`).
    Sequence(Vec<StyleValue>),
}

impl StyleValue {
    /// Render the value as CSS text.
    ///
    /// Scalars are not escaped; the caller is trusted to supply valid CSS.
    pub fn to_css(&self) -> String {
        match self {
            StyleValue::Scalar(s) => s.clone(),
            StyleValue::Color(c) => c.to_hsl_string(),
            StyleValue::Sequence(items) => items
                .iter()
                .map(StyleValue::to_css)
                .collect::<Vec<_>>()
                .join(" "),
        }
    }

    /// Check if this value is a color.
    pub fn is_color(&self) -> bool {
        matches!(self, StyleValue::Color(_))
    }
}

impl From<&str> for StyleValue {
    fn from(value: &str) -> Self {
        StyleValue::Scalar(value.to_string())
    }
}

impl From<String> for StyleValue {
    fn from(value: String) -> Self {
        StyleValue::Scalar(value)
    }
}

impl From<Color> for StyleValue {
    fn from(value: Color) -> Self {
        StyleValue::Color(value)
    }
}

impl From<Vec<StyleValue>> for StyleValue {
    fn from(value: Vec<StyleValue>) -> Self {
        StyleValue::Sequence(value)
    }
}

macro_rules! scalar_from_display {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for StyleValue {
                fn from(value: $ty) -> Self {
                    StyleValue::Scalar(value.to_string())
                }
            }
        )*
    };
}

scalar_from_display!(i32, i64, u32, u64, usize, f32, f64);
