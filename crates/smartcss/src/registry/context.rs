//! Process-wide registry bookkeeping.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};

use parking_lot::{Mutex, RwLock};

use super::RegistryConfig;
use super::style_registry::SharedState;
use crate::selector::{CssSelectorParser, SelectorParser};
use crate::sink::StyleSink;
use crate::{Result, targets};

/// Global context instance.
static GLOBAL_CONTEXT: OnceLock<StyleContext> = OnceLock::new();

/// Shared state for a family of registries.
///
/// A context provides:
/// - The id counter that keeps generated class names unique across every
///   registry created in it
/// - The list of root registries rendered by [`styles_as_string`](Self::styles_as_string)
/// - The selector parser used by its registries
/// - The default [`RegistryConfig`] for [`StyleRegistry::new`](super::StyleRegistry::new)
///
/// [`StyleContext::global`] is the process-wide instance used by the
/// convenience constructors. Tests create isolated contexts with
/// [`StyleContext::new`] instead of resetting the global one.
///
/// # Example
///
/// ```
/// use smartcss::{RegistryConfig, StyleContext, StyleRegistry};
///
/// let context = StyleContext::new();
/// let css = StyleRegistry::in_context(&context, RegistryConfig::new());
/// css.set_class(".title", [("fontWeight", "bold")]).unwrap();
///
/// let sheet = context.styles_as_string();
/// assert_eq!(sheet, format!(".{}{{font-weight:bold;}}", css.get_class("title")));
/// ```
#[derive(Clone)]
pub struct StyleContext {
    inner: Arc<ContextInner>,
}

struct ContextInner {
    /// Next value handed out for a generated class name.
    next_id: AtomicU64,
    /// Registries that are not attached to a parent, in creation order.
    roots: Mutex<Vec<SharedState>>,
    /// Selector parser shared by every registry in this context.
    parser: Arc<dyn SelectorParser>,
    /// Configuration used by `StyleRegistry::new`.
    default_config: RwLock<RegistryConfig>,
}

impl StyleContext {
    /// Create an isolated context using the default selector parser.
    pub fn new() -> Self {
        Self::with_parser(CssSelectorParser)
    }

    /// Create an isolated context with a custom selector parser.
    pub fn with_parser(parser: impl SelectorParser + 'static) -> Self {
        Self {
            inner: Arc::new(ContextInner {
                next_id: AtomicU64::new(0),
                roots: Mutex::new(vec![]),
                parser: Arc::new(parser),
                default_config: RwLock::new(RegistryConfig::default()),
            }),
        }
    }

    /// Get the global context instance.
    ///
    /// Initializes the context on first call.
    pub fn global() -> &'static StyleContext {
        GLOBAL_CONTEXT.get_or_init(StyleContext::new)
    }

    /// Draw the next id for a generated class name.
    pub fn next_id(&self) -> u64 {
        self.inner.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// The selector parser used by registries in this context.
    pub fn parser(&self) -> &dyn SelectorParser {
        self.inner.parser.as_ref()
    }

    /// The configuration applied by [`StyleRegistry::new`](super::StyleRegistry::new).
    pub fn default_config(&self) -> RegistryConfig {
        self.inner.default_config.read().clone()
    }

    /// Change the configuration applied to registries created afterwards.
    pub fn set_default_config(&self, config: RegistryConfig) {
        *self.inner.default_config.write() = config;
    }

    /// Get the number of root registries.
    pub fn root_count(&self) -> usize {
        self.inner.roots.lock().len()
    }

    /// Render every root registry, and their children, in creation order.
    ///
    /// Reading does not consume anything: repeated calls return the same text
    /// until a registry changes.
    pub fn styles_as_string(&self) -> String {
        let roots = self.inner.roots.lock();
        let mut out = String::new();
        for root in roots.iter() {
            out.push_str(&root.read().render_all());
        }
        out
    }

    /// Write the rendered stylesheet into a sink.
    pub fn inject_styles<S: StyleSink + ?Sized>(&self, sink: &mut S) -> Result<()> {
        let css = self.styles_as_string();
        sink.attach_style(&css)?;
        Ok(())
    }

    /// Clear every registry in this context and reset the id counter.
    ///
    /// Registry handles stay usable afterwards but are no longer roots, so
    /// they do not appear in [`styles_as_string`](Self::styles_as_string).
    pub fn clear_all(&self) {
        let mut roots = self.inner.roots.lock();
        for root in roots.iter() {
            root.write().clear();
        }
        let cleared = roots.len();
        roots.clear();
        self.inner.next_id.store(0, Ordering::Relaxed);
        tracing::debug!(target: targets::CONTEXT, roots = cleared, "cleared all styles");
    }

    pub(crate) fn add_root(&self, state: SharedState) {
        self.inner.roots.lock().push(state);
    }

    pub(crate) fn detach_root(&self, state: &SharedState) {
        self.inner.roots.lock().retain(|root| !Arc::ptr_eq(root, state));
    }
}

impl Default for StyleContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for StyleContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StyleContext")
            .field("next_id", &self.inner.next_id.load(Ordering::Relaxed))
            .field("roots", &self.root_count())
            .finish_non_exhaustive()
    }
}

static_assertions::assert_impl_all!(StyleContext: Send, Sync);
