// File: src/metadata.rs
// Purpose: Per-route display metadata (labels and sort order)

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a label producer is called with
#[derive(Debug, Clone, Copy)]
pub struct LabelContext<'a> {
    /// Route id the metadata was registered for
    pub route_id: &'a str,
    /// Canonical URL of the node being labelled
    pub url: &'a str,
    /// Normalized path the tree is being built for
    pub current_path: &'a str,
}

/// Shared label producer
pub type LabelFn = Arc<dyn Fn(&LabelContext<'_>) -> String + Send + Sync>;

/// Display text for a breadcrumb: fixed, or computed per build
#[derive(Clone)]
pub enum Label {
    Static(String),
    Dynamic(LabelFn),
}

impl Label {
    /// Wrap a closure as a dynamic label
    pub fn dynamic<F>(producer: F) -> Self
    where
        F: Fn(&LabelContext<'_>) -> String + Send + Sync + 'static,
    {
        Label::Dynamic(Arc::new(producer))
    }

    /// Resolve to display text; dynamic labels are invoked once per call
    pub fn resolve(&self, ctx: &LabelContext<'_>) -> String {
        match self {
            Label::Static(text) => text.clone(),
            Label::Dynamic(producer) => producer(ctx),
        }
    }
}

impl fmt::Debug for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Label::Static(text) => f.debug_tuple("Static").field(text).finish(),
            Label::Dynamic(_) => f.write_str("Dynamic(..)"),
        }
    }
}

impl From<&str> for Label {
    fn from(text: &str) -> Self {
        Label::Static(text.to_string())
    }
}

impl From<String> for Label {
    fn from(text: String) -> Self {
        Label::Static(text)
    }
}

/// Label and sort order registered for one route id
#[derive(Debug, Clone)]
pub struct DisplayMetadata {
    pub label: Label,
    /// Sibling sort key, ascending (default: 0)
    pub order: i32,
}

impl DisplayMetadata {
    pub fn new(label: impl Into<Label>) -> Self {
        Self {
            label: label.into(),
            order: 0,
        }
    }

    pub fn with_order(mut self, order: i32) -> Self {
        self.order = order;
        self
    }
}

/// Immutable route id → metadata map, built once at startup
///
/// ```
/// use rhtmx_breadcrumb::{Label, MetadataRegistry};
///
/// let metadata = MetadataRegistry::builder()
///     .label("index", "Home", 0)
///     .label("docs", "Documentation", 1)
///     .dynamic("profile", 2, |ctx| format!("Profile ({})", ctx.current_path))
///     .build();
///
/// assert_eq!(metadata.get("docs").unwrap().order, 1);
/// assert!(matches!(metadata.get("profile").unwrap().label, Label::Dynamic(_)));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataRegistry {
    entries: HashMap<String, DisplayMetadata>,
}

impl MetadataRegistry {
    pub fn builder() -> MetadataRegistryBuilder {
        MetadataRegistryBuilder::default()
    }

    pub fn get(&self, route_id: &str) -> Option<&DisplayMetadata> {
        self.entries.get(route_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Collects registrations; a later registration for the same route id replaces the earlier one
#[derive(Debug, Default)]
pub struct MetadataRegistryBuilder {
    entries: HashMap<String, DisplayMetadata>,
}

impl MetadataRegistryBuilder {
    pub fn register(mut self, route_id: impl Into<String>, metadata: DisplayMetadata) -> Self {
        self.entries.insert(route_id.into(), metadata);
        self
    }

    /// Register a static label
    pub fn label(self, route_id: impl Into<String>, text: impl Into<String>, order: i32) -> Self {
        self.register(
            route_id,
            DisplayMetadata::new(Label::Static(text.into())).with_order(order),
        )
    }

    /// Register a label producer
    pub fn dynamic<F>(self, route_id: impl Into<String>, order: i32, producer: F) -> Self
    where
        F: Fn(&LabelContext<'_>) -> String + Send + Sync + 'static,
    {
        self.register(
            route_id,
            DisplayMetadata::new(Label::dynamic(producer)).with_order(order),
        )
    }

    pub fn build(self) -> MetadataRegistry {
        MetadataRegistry {
            entries: self.entries,
        }
    }
}

/// Label for a URL without registered metadata
///
/// Last non-empty segment, `-`/`_` turned into spaces, title-cased.
/// The root (or an empty segment) gets `root_label`.
///
/// ```
/// use rhtmx_breadcrumb::metadata::default_label;
///
/// assert_eq!(default_label("/docs/getting-started", "Home"), "Getting Started");
/// assert_eq!(default_label("/", "Home"), "Home");
/// ```
pub fn default_label(url: &str, root_label: &str) -> String {
    let last = url
        .trim_end_matches('/')
        .rsplit('/')
        .next()
        .unwrap_or_default();

    if last.is_empty() {
        return root_label.to_string();
    }

    title_case(&last.replace(['-', '_'], " "))
}

/// Uppercase letters that follow a non-letter, lowercase the rest
fn title_case(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut at_word_start = true;

    for ch in text.chars() {
        if ch.is_alphabetic() {
            if at_word_start {
                out.extend(ch.to_uppercase());
            } else {
                out.extend(ch.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = true;
        }
    }

    out
}
