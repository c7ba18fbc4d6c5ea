//! Ordered style property mapping.

use super::StyleValue;

/// A style definition: property names mapped to values, in declaration order.
///
/// Property names may be camel-cased (`backgroundColor`) or already
/// hyphenated (`background-color`); they are hyphenated when rendered.
///
/// # Example
///
/// ```
/// use smartcss::types::{Color, StyleDef};
///
/// let def = StyleDef::new()
///     .with("color", "red")
///     .with("backgroundColor", Color::WHITE)
///     .with("opacity", 0.5);
///
/// let names: Vec<_> = def.iter().map(|(name, _)| name).collect();
/// assert_eq!(names, ["color", "backgroundColor", "opacity"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StyleDef {
    properties: Vec<(String, StyleValue)>,
}

impl StyleDef {
    /// Create an empty definition.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a property, builder style.
    pub fn with(mut self, name: impl Into<String>, value: impl Into<StyleValue>) -> Self {
        self.set(name, value);
        self
    }

    /// Set a property.
    ///
    /// Setting a property that already exists replaces its value and keeps its
    /// original position.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<StyleValue>) {
        let name = name.into();
        let value = value.into();
        match self.properties.iter_mut().find(|(n, _)| *n == name) {
            Some((_, existing)) => *existing = value,
            None => self.properties.push((name, value)),
        }
    }

    /// Get a property value.
    pub fn get(&self, name: &str) -> Option<&StyleValue> {
        self.properties
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v)
    }

    /// Iterate over properties in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &StyleValue)> {
        self.properties.iter().map(|(n, v)| (n.as_str(), v))
    }

    /// Get the number of properties.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Check if no property is set.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl<K, V> FromIterator<(K, V)> for StyleDef
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut def = StyleDef::new();
        for (name, value) in iter {
            def.set(name, value);
        }
        def
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for StyleDef
where
    K: Into<String>,
    V: Into<StyleValue>,
{
    fn from(entries: [(K, V); N]) -> Self {
        entries.into_iter().collect()
    }
}
