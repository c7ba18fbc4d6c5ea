//! Registry and registration options.

/// Configuration for a [`StyleRegistry`](super::StyleRegistry).
///
/// # Example
///
/// ```
/// use smartcss::RegistryConfig;
///
/// // Generated names look like `menu-c12` instead of `item-12`.
/// let config = RegistryConfig::new()
///     .with_prefix_class_id(false)
///     .with_name("menu");
/// assert!(!config.prefix_class_id());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistryConfig {
    /// Include the class id in generated class names.
    prefix_class_id: bool,
    /// Component name prepended to generated class names.
    name: Option<String>,
}

impl RegistryConfig {
    /// Create the default configuration.
    pub fn new() -> Self {
        Self {
            prefix_class_id: true,
            name: None,
        }
    }

    /// Include the class id in generated names (`label-4` instead of `c4`).
    pub fn with_prefix_class_id(mut self, prefix: bool) -> Self {
        self.prefix_class_id = prefix;
        self
    }

    /// Prepend a component name to every generated class name.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Whether generated names include the class id.
    pub fn prefix_class_id(&self) -> bool {
        self.prefix_class_id
    }

    /// The component name, if any.
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Everything of a generated class name for `class_id` before the
    /// counter value: `item-`, `c`, `menu-item-` or `menu-c`.
    pub(crate) fn name_prefix(&self, class_id: &str) -> String {
        let base = if self.prefix_class_id {
            format!("{}-", class_id)
        } else {
            String::from("c")
        };
        match &self.name {
            Some(name) => format!("{}-{}", name, base),
            None => base,
        }
    }
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Per-registration options for [`StyleRegistry::set_class_with`](super::StyleRegistry::set_class_with).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClassOptions {
    /// Hardcoded class name instead of a generated one.
    pub class_name: Option<String>,
    /// Media condition wrapping the rule.
    pub media: Option<String>,
}

impl ClassOptions {
    /// Create empty options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a hardcoded class name.
    ///
    /// Once a class id has a name, only that same name may be requested again.
    pub fn with_class_name(mut self, class_name: impl Into<String>) -> Self {
        self.class_name = Some(class_name.into());
        self
    }

    /// Wrap the rule in `@media`.
    pub fn with_media(mut self, media: impl Into<String>) -> Self {
        self.media = Some(media.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_prefixes() {
        assert_eq!(RegistryConfig::new().name_prefix("root"), "root-");
        assert_eq!(RegistryConfig::new().with_prefix_class_id(false).name_prefix("root"), "c");
        assert_eq!(RegistryConfig::new().with_name("menu").name_prefix("item"), "menu-item-");
        assert_eq!(
            RegistryConfig::new()
                .with_name("menu")
                .with_prefix_class_id(false)
                .name_prefix("item"),
            "menu-c"
        );
    }
}
