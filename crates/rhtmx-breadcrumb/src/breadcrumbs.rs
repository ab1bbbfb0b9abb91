// File: src/breadcrumbs.rs
// Purpose: Breadcrumb service combining route catalog, metadata and configuration

use crate::builder::TreeBuilder;
use crate::catalog::{RouteCatalog, RouteEntry, RouteSource};
use crate::config::BreadcrumbConfig;
use crate::metadata::MetadataRegistry;
use crate::node::BreadcrumbNode;
use tracing::warn;

/// Breadcrumb trees for any path of one application
///
/// Construct once at startup and share (e.g. behind an `Arc`); every call
/// builds a fresh tree from the memoized catalog.
///
/// ```
/// use rhtmx_breadcrumb::{BreadcrumbConfig, Breadcrumbs, MetadataRegistry, RouteTable};
///
/// let routes = RouteTable::new()
///     .get("/", "index")
///     .get("/docs", "docs")
///     .get("/docs/guide", "guide");
/// let metadata = MetadataRegistry::builder().label("docs", "Documentation", 0).build();
/// let breadcrumbs = Breadcrumbs::new(routes, metadata, BreadcrumbConfig::default());
///
/// let tree = breadcrumbs.build("/docs/guide").unwrap();
/// let labels: Vec<&str> = tree.trail().iter().map(|n| n.label.as_str()).collect();
/// assert_eq!(labels, vec!["Home", "Documentation", "Guide"]);
///
/// assert_eq!(breadcrumbs.get_tree("/nowhere"), "{}");
/// ```
#[derive(Debug)]
pub struct Breadcrumbs {
    catalog: RouteCatalog,
    metadata: MetadataRegistry,
    config: BreadcrumbConfig,
}

impl Breadcrumbs {
    pub fn new(
        source: impl RouteSource + 'static,
        metadata: MetadataRegistry,
        config: BreadcrumbConfig,
    ) -> Self {
        Self {
            catalog: RouteCatalog::new(source, config.catalog.clone()),
            metadata,
            config,
        }
    }

    pub fn routes(&self) -> &[RouteEntry] {
        self.catalog.list_routes()
    }

    pub fn metadata(&self) -> &MetadataRegistry {
        &self.metadata
    }

    pub fn config(&self) -> &BreadcrumbConfig {
        &self.config
    }

    /// Tree for `path`, or `None` when no breadcrumb is available
    pub fn build(&self, path: &str) -> Option<BreadcrumbNode> {
        TreeBuilder::new(self.catalog.list_routes(), &self.metadata)
            .with_root_label(&self.config.labels.root_label)
            .build(path)
    }

    /// Tree for `path` as pretty-printed JSON; `"{}"` when no breadcrumb is available
    pub fn get_tree(&self, path: &str) -> String {
        let Some(tree) = self.build(path) else {
            return "{}".to_string();
        };

        tree.to_json().unwrap_or_else(|e| {
            warn!(path, error = %e, "failed to serialize breadcrumb tree");
            "{}".to_string()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::RouteTable;
    use crate::config::LabelConfig;
    use serde_json::Value;

    fn breadcrumbs() -> Breadcrumbs {
        let routes = RouteTable::new()
            .get("/", "index")
            .get("/shop", "shop")
            .get("/shop/cart", "cart")
            .get("/static/<path:filename>", "static");
        let metadata = MetadataRegistry::builder()
            .label("shop", "Shop", 1)
            .build();
        Breadcrumbs::new(routes, metadata, BreadcrumbConfig::default())
    }

    #[test]
    fn test_routes_exclude_static() {
        let bc = breadcrumbs();
        let urls: Vec<&str> = bc
            .routes()
            .iter()
            .map(|e| e.canonical_url.as_str())
            .collect();
        assert_eq!(urls, vec!["/", "/shop", "/shop/cart"]);
    }

    #[test]
    fn test_get_tree_json() {
        let json = breadcrumbs().get_tree("/shop/cart");
        let value: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["text"], "Home");
        assert_eq!(value["children"][0]["text"], "Shop");
        assert_eq!(value["children"][0]["order"], 1);
        assert_eq!(value["children"][0]["children"][0]["url"], "/shop/cart");
        assert_eq!(value["children"][0]["children"][0]["is_current_path"], true);
    }

    #[test]
    fn test_get_tree_empty() {
        assert_eq!(breadcrumbs().get_tree("/missing/page"), "{}");
    }

    #[test]
    fn test_root_label_from_config() {
        let config = BreadcrumbConfig {
            labels: LabelConfig {
                root_label: "Start".to_string(),
            },
            ..Default::default()
        };
        let breadcrumbs = Breadcrumbs::new(
            RouteTable::new().get("/a", "a"),
            MetadataRegistry::default(),
            config,
        );

        assert_eq!(breadcrumbs.build("/a").unwrap().label, "Start");
        assert_eq!(breadcrumbs.config().labels.root_label, "Start");
        assert!(breadcrumbs.metadata().is_empty());
    }
}
