// File: src/catalog.rs
// Purpose: Read-through snapshot of the host routing table

use crate::config::CatalogConfig;
use crate::path::normalize_pattern;
use once_cell::sync::OnceCell;
use serde::Serialize;
use std::collections::{BTreeSet, HashMap};
use std::sync::Arc;
use tracing::debug;

/// A route as the host framework reports it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawRoute {
    /// URL pattern, possibly with placeholders (`/users/:id`, `/users/<id>`)
    pub pattern: String,
    /// Route identifier used to look up display metadata
    pub route_id: String,
    /// Allowed HTTP methods, upper-cased
    pub methods: BTreeSet<String>,
}

impl RawRoute {
    pub fn new<M, I>(pattern: impl Into<String>, route_id: impl Into<String>, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        Self {
            pattern: pattern.into(),
            route_id: route_id.into(),
            methods: methods
                .into_iter()
                .map(|m| m.as_ref().to_ascii_uppercase())
                .collect(),
        }
    }
}

/// Anything that can enumerate the host's routes
///
/// Asked at most once per [`RouteCatalog`]; the table is treated as fixed afterwards.
pub trait RouteSource: Send + Sync {
    fn routes(&self) -> Vec<RawRoute>;
}

impl<F> RouteSource for F
where
    F: Fn() -> Vec<RawRoute> + Send + Sync,
{
    fn routes(&self) -> Vec<RawRoute> {
        self()
    }
}

/// Ordered route registrations
///
/// Registration order is the order routes are reported in, which makes
/// duplicate resolution in the catalog deterministic.
///
/// ```
/// use rhtmx_breadcrumb::RouteTable;
///
/// let table = RouteTable::new()
///     .get("/", "index")
///     .get("/users", "users")
///     .route("/users/:id", "user", ["GET", "POST"]);
///
/// assert_eq!(table.len(), 3);
/// ```
#[derive(Debug, Clone, Default)]
pub struct RouteTable {
    routes: Vec<RawRoute>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a route allowing the given methods
    pub fn route<M, I>(mut self, pattern: &str, route_id: &str, methods: I) -> Self
    where
        I: IntoIterator<Item = M>,
        M: AsRef<str>,
    {
        self.add(RawRoute::new(pattern, route_id, methods));
        self
    }

    /// Register a GET route
    pub fn get(self, pattern: &str, route_id: &str) -> Self {
        self.route(pattern, route_id, ["GET"])
    }

    pub fn add(&mut self, route: RawRoute) {
        self.routes.push(route);
    }

    pub fn iter(&self) -> impl Iterator<Item = &RawRoute> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

impl From<Vec<RawRoute>> for RouteTable {
    fn from(routes: Vec<RawRoute>) -> Self {
        Self { routes }
    }
}

impl FromIterator<RawRoute> for RouteTable {
    fn from_iter<T: IntoIterator<Item = RawRoute>>(iter: T) -> Self {
        Self {
            routes: iter.into_iter().collect(),
        }
    }
}

impl RouteSource for RouteTable {
    fn routes(&self) -> Vec<RawRoute> {
        self.routes.clone()
    }
}

/// A breadcrumb candidate: one per canonical URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteEntry {
    pub canonical_url: String,
    pub route_id: String,
    pub methods: BTreeSet<String>,
}

/// Normalize, filter and deduplicate raw routes
///
/// - routes not allowing `config.method` are dropped
/// - route ids starting with an excluded prefix are dropped
/// - duplicates keep the first-seen position, take the latest route id,
///   and union their methods
pub fn collect_entries(raw: Vec<RawRoute>, config: &CatalogConfig) -> Vec<RouteEntry> {
    let method = config.method.to_ascii_uppercase();
    let mut entries: Vec<RouteEntry> = Vec::with_capacity(raw.len());
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut collapsed = 0usize;

    let candidates = raw.into_iter().filter(|route| {
        route.methods.contains(&method)
            && !config
                .excluded_prefixes
                .iter()
                .any(|prefix| route.route_id.starts_with(prefix.as_str()))
    });

    for route in candidates {
        let canonical_url = normalize_pattern(&route.pattern);

        match index.get(&canonical_url) {
            Some(&pos) => {
                let existing = &mut entries[pos];
                debug!(
                    url = %canonical_url,
                    previous = %existing.route_id,
                    replacement = %route.route_id,
                    "duplicate canonical url, latest registration wins"
                );
                existing.route_id = route.route_id;
                existing.methods.extend(route.methods);
                collapsed += 1;
            }
            None => {
                index.insert(canonical_url.clone(), entries.len());
                entries.push(RouteEntry {
                    canonical_url,
                    route_id: route.route_id,
                    methods: route.methods,
                });
            }
        }
    }

    debug!(routes = entries.len(), collapsed, "route catalog built");
    entries
}

/// Memoized catalog over a [`RouteSource`]
///
/// The source is queried on first use only; concurrent first callers block
/// until the single initialization finishes.
pub struct RouteCatalog {
    source: Arc<dyn RouteSource>,
    config: CatalogConfig,
    snapshot: OnceCell<Vec<RouteEntry>>,
}

impl std::fmt::Debug for RouteCatalog {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteCatalog")
            .field("config", &self.config)
            .field("initialized", &self.snapshot.get().is_some())
            .finish()
    }
}

impl RouteCatalog {
    pub fn new(source: impl RouteSource + 'static, config: CatalogConfig) -> Self {
        Self {
            source: Arc::new(source),
            config,
            snapshot: OnceCell::new(),
        }
    }

    /// All breadcrumb candidates, in registration order
    pub fn list_routes(&self) -> &[RouteEntry] {
        self.snapshot
            .get_or_init(|| collect_entries(self.source.routes(), &self.config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn urls(entries: &[RouteEntry]) -> Vec<&str> {
        entries.iter().map(|e| e.canonical_url.as_str()).collect()
    }

    #[test]
    fn test_collect_entries_filters_method_and_static() {
        let raw = vec![
            RawRoute::new("/", "index", ["GET", "HEAD"]),
            RawRoute::new("/submit", "submit", ["POST"]),
            RawRoute::new("/static/<path:filename>", "static", ["GET"]),
            RawRoute::new("/about", "about", ["get"]),
        ];

        let entries = collect_entries(raw, &CatalogConfig::default());
        assert_eq!(urls(&entries), vec!["/", "/about"]);
    }

    #[test]
    fn test_collect_entries_normalizes_patterns() {
        let raw = vec![
            RawRoute::new("/users/", "users", ["GET"]),
            RawRoute::new("/docs//guide/", "guide", ["GET"]),
        ];

        let entries = collect_entries(raw, &CatalogConfig::default());
        assert_eq!(urls(&entries), vec!["/users", "/docs/guide"]);
    }

    #[test]
    fn test_duplicates_keep_position_and_latest_id() {
        let raw = vec![
            RawRoute::new("/users", "user_list", ["GET"]),
            RawRoute::new("/about", "about", ["GET"]),
            RawRoute::new("/users/<int:id>", "user_detail", ["GET", "PUT"]),
        ];

        let entries = collect_entries(raw, &CatalogConfig::default());
        assert_eq!(urls(&entries), vec!["/users", "/about"]);
        assert_eq!(entries[0].route_id, "user_detail");
        assert!(entries[0].methods.contains("PUT"));
        assert!(entries[0].methods.contains("GET"));
    }

    #[test]
    fn test_non_get_duplicate_does_not_replace() {
        let raw = vec![
            RawRoute::new("/users", "user_list", ["GET"]),
            RawRoute::new("/users/:id", "user_delete", ["DELETE"]),
        ];

        let entries = collect_entries(raw, &CatalogConfig::default());
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].route_id, "user_list");
    }

    #[test]
    fn test_custom_excluded_prefixes() {
        let config = CatalogConfig {
            method: "GET".to_string(),
            excluded_prefixes: vec!["admin.".to_string()],
        };
        let raw = vec![
            RawRoute::new("/admin", "admin.index", ["GET"]),
            RawRoute::new("/static", "static", ["GET"]),
        ];

        let entries = collect_entries(raw, &config);
        assert_eq!(urls(&entries), vec!["/static"]);
    }

    #[test]
    fn test_catalog_queries_source_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let source = move || {
            counter.fetch_add(1, Ordering::SeqCst);
            vec![RawRoute::new("/a", "a", ["GET"])]
        };

        let catalog = RouteCatalog::new(source, CatalogConfig::default());
        assert_eq!(catalog.list_routes().len(), 1);
        assert_eq!(catalog.list_routes().len(), 1);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_route_table_preserves_order() {
        let table = RouteTable::new()
            .get("/b", "b")
            .get("/a", "a")
            .route("/c", "c", ["post"]);

        let ids: Vec<&str> = table.iter().map(|r| r.route_id.as_str()).collect();
        assert_eq!(ids, vec!["b", "a", "c"]);
        assert!(table.iter().last().unwrap().methods.contains("POST"));
    }
}
