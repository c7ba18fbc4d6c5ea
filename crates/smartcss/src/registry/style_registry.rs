//! Per-module class registry.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock};

use super::{ClassOptions, RegistryConfig, StyleContext};
use crate::media::normalize_media;
use crate::render::render_rules;
use crate::rules::{StyleClass, StyleKey};
use crate::selector::{ParsedSelector, RawSegment, SelectorSegment};
use crate::sink::StyleSink;
use crate::types::StyleDef;
use crate::{Error, Result, targets};

pub(crate) type SharedState = Arc<RwLock<RegistryState>>;

/// Serializes child attachment so the cycle check and the push happen
/// atomically, across every context.
static ATTACH_LOCK: Mutex<()> = Mutex::new(());

/// Mutable contents of a registry.
#[derive(Debug, Default)]
pub(crate) struct RegistryState {
    /// class id -> class name. Entries are never replaced.
    class_names: HashMap<String, String>,
    /// Registered rules in registration order.
    classes: Vec<StyleClass>,
    /// Identities of `classes`.
    keys: HashSet<StyleKey>,
    /// Attached child registries, rendered after this registry's own rules.
    children: Vec<SharedState>,
    /// Set while this registry is a child of another one.
    attached: bool,
}

impl RegistryState {
    /// Render own rules followed by every child, depth first.
    pub(crate) fn render_all(&self) -> String {
        let mut out = render_rules(&self.classes, &self.class_names);
        for child in &self.children {
            out.push_str(&child.read().render_all());
        }
        out
    }

    /// Drop all rules, names and children; children are cleared too.
    pub(crate) fn clear(&mut self) {
        for child in self.children.drain(..) {
            let mut child = child.write();
            child.attached = false;
            child.clear();
        }
        self.class_names.clear();
        self.classes.clear();
        self.keys.clear();
    }
}

/// Whether `target` is `from` or one of its descendants.
fn reaches(from: &SharedState, target: &SharedState) -> bool {
    Arc::ptr_eq(from, target) || from.read().children.iter().any(|child| reaches(child, target))
}

/// Check whether a name can be used as a CSS class name.
///
/// A class name must not be empty and must not start with a digit.
pub fn is_valid_class_name(name: &str) -> bool {
    name.chars().next().is_some_and(|c| !c.is_ascii_digit())
}

/// A namespace of style rules for one UI module.
///
/// Each module creates its own registry so that semantic class ids such as
/// `root` or `label` never collide in the generated class names. Handles are
/// cheap to clone; clones refer to the same registry.
///
/// # Example
///
/// ```
/// use smartcss::{RegistryConfig, StyleContext, StyleRegistry};
///
/// let context = StyleContext::new();
/// let css = StyleRegistry::in_context(&context, RegistryConfig::new());
///
/// css.set_class(".item", [("color", "red")]).unwrap();
/// css.set_class(".item:hover", [("color", "blue")]).unwrap();
///
/// let item = css.get_class("item");
/// assert_eq!(
///     css.styles_as_string(),
///     format!(".{item}{{color:red;}}.{item}:hover{{color:blue;}}")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct StyleRegistry {
    state: SharedState,
    context: StyleContext,
    config: RegistryConfig,
}

impl StyleRegistry {
    /// Create a registry in the global context with its default configuration.
    pub fn new() -> Self {
        let context = StyleContext::global();
        Self::in_context(context, context.default_config())
    }

    /// Create a registry in the global context.
    pub fn with_config(config: RegistryConfig) -> Self {
        Self::in_context(StyleContext::global(), config)
    }

    /// Create a registry in `context`. The registry starts as a root of the context.
    pub fn in_context(context: &StyleContext, config: RegistryConfig) -> Self {
        let state = SharedState::default();
        context.add_root(state.clone());
        Self {
            state,
            context: context.clone(),
            config,
        }
    }

    /// The configuration of this registry.
    pub fn config(&self) -> &RegistryConfig {
        &self.config
    }

    /// The context this registry allocates ids from.
    pub fn context(&self) -> &StyleContext {
        &self.context
    }

    /// Register a style rule.
    ///
    /// See [`set_class_with`](Self::set_class_with).
    pub fn set_class(&self, selector: &str, def: impl Into<StyleDef>) -> Result<StyleClass> {
        self.set_class_with(selector, def, ClassOptions::default())
    }

    /// Register a style rule with options.
    ///
    /// The selector must be a single ancestor chain of class segments, each
    /// with at most one class plus any pseudo selectors. Every segment before
    /// the last must reference a class id already registered here. The rule is
    /// stored under the last segment's class id, which keeps the class name it
    /// was first given, so `.a` and `.a:hover` resolve to the same name.
    ///
    /// # Errors
    ///
    /// Nothing is registered when an error is returned:
    /// - [`Error::InvalidSelector`] if the selector cannot be parsed
    /// - [`Error::MultipleSelectors`] for comma-separated groups
    /// - [`Error::CompoundClass`] / [`Error::MissingClass`] for segments with
    ///   more than one or no class
    /// - [`Error::InvalidMedia`] if the media condition fails validation
    /// - [`Error::UndefinedAncestor`] if an ancestor class id is not registered
    /// - [`Error::DuplicateSelector`] if the (selector, media) pair exists
    /// - [`Error::NameConflict`] if a hardcoded name is given for a class id
    ///   that already has a different one
    /// - [`Error::InvalidClassName`] if the resulting class name is invalid;
    ///   a generated name is checked before an id is drawn from the context
    pub fn set_class_with(
        &self,
        selector: &str,
        def: impl Into<StyleDef>,
        options: ClassOptions,
    ) -> Result<StyleClass> {
        let parsed = self.parse_selector(selector)?;
        let media = options.media.as_deref().map(normalize_media).transpose()?;

        let mut state = self.state.write();

        if let Some(missing) = parsed
            .ancestors()
            .iter()
            .find(|segment| !state.class_names.contains_key(&segment.class_id))
        {
            return Err(Error::UndefinedAncestor {
                selector: selector.to_string(),
                class_id: missing.class_id.clone(),
            });
        }

        let key = StyleKey {
            selector: parsed.to_string(),
            media: media.clone(),
        };
        if state.keys.contains(&key) {
            return Err(Error::DuplicateSelector {
                selector: key.selector,
                media: key.media,
            });
        }

        let class_id = parsed.subject().class_id.clone();
        let class_name = match (options.class_name, state.class_names.get(&class_id)) {
            (Some(requested), Some(existing)) if requested != *existing => {
                return Err(Error::NameConflict {
                    class_id,
                    existing: existing.clone(),
                    requested,
                });
            }
            (Some(requested), _) => requested,
            (None, Some(existing)) => existing.clone(),
            (None, None) => {
                // validated before an id is drawn
                let prefix = self.config.name_prefix(&class_id);
                if !is_valid_class_name(&prefix) {
                    return Err(Error::InvalidClassName(prefix));
                }
                format!("{}{}", prefix, self.context.next_id())
            }
        };
        if !is_valid_class_name(&class_name) {
            return Err(Error::InvalidClassName(class_name));
        }

        state
            .class_names
            .entry(class_id.clone())
            .or_insert_with(|| class_name.clone());

        let class = StyleClass::new(class_name, parsed, def.into(), media);
        tracing::debug!(
            target: targets::REGISTRY,
            selector = %key.selector,
            class_id = %class_id,
            class_name = class.class_name(),
            media = ?class.media(),
            "registered style class"
        );
        state.keys.insert(key);
        state.classes.push(class.clone());
        Ok(class)
    }

    /// Parse and validate a selector into a single chain of one-class segments.
    fn parse_selector(&self, selector: &str) -> Result<ParsedSelector> {
        let mut groups = self.context.parser().parse(selector)?;
        if groups.len() > 1 {
            return Err(Error::MultipleSelectors {
                selector: selector.to_string(),
            });
        }
        let raw = groups
            .pop()
            .ok_or_else(|| Error::invalid_selector(selector, "Empty selector"))?;

        let segments = raw
            .into_iter()
            .map(|segment| single_class_segment(selector, segment))
            .collect::<Result<Vec<_>>>()?;

        ParsedSelector::from_segments(segments)
            .ok_or_else(|| Error::invalid_selector(selector, "Empty selector"))
    }

    /// Get the class name for a class id.
    ///
    /// Unknown class ids return an empty string and log a warning, so
    /// templates can ask for classes that are only set conditionally.
    pub fn get_class(&self, class_id: &str) -> String {
        match self.state.read().class_names.get(class_id) {
            Some(name) => name.clone(),
            None => {
                tracing::warn!(target: targets::REGISTRY, class_id, "Class \"{}\" not set", class_id);
                String::new()
            }
        }
    }

    /// Get the class names of every selected class id, in selection order.
    ///
    /// ```
    /// use smartcss::{RegistryConfig, StyleContext, StyleRegistry};
    ///
    /// let css = StyleRegistry::in_context(&StyleContext::new(), RegistryConfig::new());
    /// css.set_class(".a", [("color", "red")]).unwrap();
    /// css.set_class(".b", [("color", "blue")]).unwrap();
    ///
    /// let names = css.get_class_list([("a", true), ("b", false)]);
    /// assert_eq!(names, [css.get_class("a")]);
    /// ```
    pub fn get_class_list<I, K>(&self, selection: I) -> Vec<String>
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        selection
            .into_iter()
            .filter(|(_, include)| *include)
            .map(|(class_id, _)| self.get_class(class_id.as_ref()))
            .collect()
    }

    /// Like [`get_class_list`](Self::get_class_list), joined with single spaces.
    pub fn get_classes<I, K>(&self, selection: I) -> String
    where
        I: IntoIterator<Item = (K, bool)>,
        K: AsRef<str>,
    {
        self.get_class_list(selection).join(" ")
    }

    /// Snapshot of the class id to class name table.
    pub fn class_names(&self) -> HashMap<String, String> {
        self.state.read().class_names.clone()
    }

    /// Registered rules in registration order.
    pub fn classes(&self) -> Vec<StyleClass> {
        self.state.read().classes.clone()
    }

    /// Get the number of registered rules (children not included).
    pub fn len(&self) -> usize {
        self.state.read().classes.len()
    }

    /// Check if no rule has been registered.
    pub fn is_empty(&self) -> bool {
        self.state.read().classes.is_empty()
    }

    /// Attach a child registry, rendered after this registry's own rules.
    ///
    /// The child stops being a root of its context and a registry has at most
    /// one parent, so the process-wide stylesheet emits it once, through this
    /// registry. Attachment is serialized process-wide; concurrent calls that
    /// would together form a cycle see one succeed and the other fail.
    ///
    /// # Errors
    ///
    /// - [`Error::CyclicChild`] if `child` is this registry or contains it
    /// - [`Error::DuplicateChild`] if `child` already has a parent, here or
    ///   elsewhere
    pub fn add_child_context(&self, child: &StyleRegistry) -> Result<()> {
        let _guard = ATTACH_LOCK.lock();

        if reaches(&child.state, &self.state) {
            return Err(Error::CyclicChild);
        }
        if child.state.read().attached {
            return Err(Error::DuplicateChild);
        }

        self.state.write().children.push(child.state.clone());
        child.state.write().attached = true;

        child.context.detach_root(&child.state);
        tracing::debug!(target: targets::REGISTRY, "attached child registry");
        Ok(())
    }

    /// Render this registry's rules followed by its children's.
    pub fn styles_as_string(&self) -> String {
        self.state.read().render_all()
    }

    /// Write [`styles_as_string`](Self::styles_as_string) into a sink.
    pub fn inject_into<S: StyleSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let css = self.styles_as_string();
        sink.attach_style(&css)?;
        Ok(())
    }
}

impl Default for StyleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn single_class_segment(selector: &str, segment: RawSegment) -> Result<SelectorSegment> {
    let RawSegment {
        class_list,
        combinator,
        pseudos,
    } = segment;

    let mut classes = class_list.into_iter();
    match (classes.next(), classes.next()) {
        (Some(class_id), None) => Ok(SelectorSegment {
            class_id,
            combinator,
            pseudos,
        }),
        (None, _) => Err(Error::MissingClass {
            selector: selector.to_string(),
        }),
        (Some(_), Some(_)) => Err(Error::CompoundClass {
            selector: selector.to_string(),
        }),
    }
}

static_assertions::assert_impl_all!(StyleRegistry: Send, Sync);
