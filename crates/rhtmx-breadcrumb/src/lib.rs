//! # RHTMX Breadcrumb
//!
//! Hierarchical breadcrumb trees derived from a flat route table:
//! - Parent/child structure inferred purely from URL segments
//! - Siblings at every level of the ancestor chain, sorted by `(order, url)`
//! - Descendants of the current page suppressed
//! - Static or dynamically computed labels, with generated fallbacks
//!
//! ## Model
//!
//! - [`RouteCatalog`] snapshots the host routes once ([`RouteSource`]),
//!   normalizing patterns like `/users/:id/` or `/users/<int:id>` to canonical
//!   URLs (`/users`).
//! - [`MetadataRegistry`] maps route ids to a [`Label`] and sort order. It is
//!   built once at startup and never mutated.
//! - [`TreeBuilder`] turns both into a [`BreadcrumbNode`] tree for a path.
//!   Nothing is cached between builds.
//!
//! ## Example
//!
//! ```
//! use rhtmx_breadcrumb::{BreadcrumbConfig, Breadcrumbs, MetadataRegistry, RouteTable};
//!
//! let routes = RouteTable::new()
//!     .get("/", "index")
//!     .get("/users", "users")
//!     .get("/users/:id/settings", "settings")
//!     .get("/about", "about");
//!
//! let metadata = MetadataRegistry::builder()
//!     .label("users", "People", 0)
//!     .label("about", "About us", 1)
//!     .build();
//!
//! let breadcrumbs = Breadcrumbs::new(routes, metadata, BreadcrumbConfig::default());
//! let tree = breadcrumbs.build("/users/settings").unwrap();
//!
//! assert_eq!(tree.children[0].label, "People");
//! assert_eq!(tree.children[1].label, "About us");
//! assert!(tree.children[0].children[0].is_current_path);
//! ```

// ============================================================================
// Module Declarations
// ============================================================================

pub mod breadcrumbs;
pub mod builder;
pub mod catalog;
pub mod config;
pub mod extract;
pub mod metadata;
pub mod node;
pub mod path;

// ============================================================================
// Re-exports
// ============================================================================

pub use breadcrumbs::Breadcrumbs;
pub use builder::TreeBuilder;
pub use catalog::{collect_entries, RawRoute, RouteCatalog, RouteEntry, RouteSource, RouteTable};
pub use config::{BreadcrumbConfig, CatalogConfig, LabelConfig};
pub use extract::{breadcrumb_tree_handler, CurrentBreadcrumbs, TreeQuery};
pub use metadata::{DisplayMetadata, Label, LabelContext, MetadataRegistry};
pub use node::BreadcrumbNode;
pub use path::{normalize_path, normalize_pattern, PathHierarchy};
