// File: src/builder.rs
// Purpose: Breadcrumb tree construction from a flat route catalog

use crate::catalog::RouteEntry;
use crate::metadata::{default_label, DisplayMetadata, LabelContext, MetadataRegistry};
use crate::node::BreadcrumbNode;
use crate::path::{is_descendant_of, normalize_request_path, PathHierarchy};
use std::collections::{HashMap, HashSet};
use tracing::trace;

/// A breadcrumb candidate before its label is resolved
#[derive(Debug, Clone, Copy)]
struct Candidate<'a> {
    route_id: Option<&'a str>,
    metadata: Option<&'a DisplayMetadata>,
}

impl Candidate<'_> {
    fn order(&self) -> i32 {
        self.metadata.map_or(0, |meta| meta.order)
    }
}

/// Builds breadcrumb trees over an immutable route snapshot
///
/// Pure: nothing is cached between builds and the inputs are never
/// mutated, so one builder can serve concurrent callers.
///
/// ```
/// use rhtmx_breadcrumb::{collect_entries, CatalogConfig, MetadataRegistry, RouteTable, RouteSource, TreeBuilder};
///
/// let table = RouteTable::new().get("/", "index").get("/docs", "docs").get("/blog", "blog");
/// let routes = collect_entries(table.routes(), &CatalogConfig::default());
/// let metadata = MetadataRegistry::builder().label("blog", "Blog", 1).build();
///
/// let tree = TreeBuilder::new(&routes, &metadata).build("/docs").unwrap();
/// let children: Vec<&str> = tree.children.iter().map(|c| c.url.as_str()).collect();
/// assert_eq!(children, vec!["/docs", "/blog"]);
/// assert!(tree.children[0].is_current_path);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct TreeBuilder<'a> {
    routes: &'a [RouteEntry],
    metadata: &'a MetadataRegistry,
    root_label: &'a str,
}

impl<'a> TreeBuilder<'a> {
    pub fn new(routes: &'a [RouteEntry], metadata: &'a MetadataRegistry) -> Self {
        Self {
            routes,
            metadata,
            root_label: "Home",
        }
    }

    /// Label used for `/` when it has no registered metadata
    pub fn with_root_label(mut self, root_label: &'a str) -> Self {
        self.root_label = root_label;
        self
    }

    /// Build the breadcrumb tree for `current_path`
    ///
    /// Returns `None` when neither the path nor any ancestor below the root
    /// is a known route.
    pub fn build(&self, current_path: &str) -> Option<BreadcrumbNode> {
        let current = normalize_request_path(current_path);
        let build = Build {
            candidates: self.materialize(),
            current: current.as_ref(),
            root_label: self.root_label,
        };

        if build.current == "/" {
            trace!(path = "/", "root breadcrumb");
            return Some(build.node("/"));
        }

        let mut chain: Vec<&str> = PathHierarchy::new(build.current)
            .filter(|url| build.candidates.contains_key(*url))
            .collect();
        chain.reverse();

        trace!(path = %build.current, depth = chain.len(), "breadcrumb ancestor chain");

        if chain.len() <= 1 {
            return None;
        }

        let groups = build.sibling_groups(&chain);
        Some(build.assemble(&chain, &groups, 0))
    }

    /// One candidate per canonical URL, plus a synthesized root
    fn materialize(&self) -> HashMap<&'a str, Candidate<'a>> {
        let mut candidates: HashMap<&'a str, Candidate<'a>> = self
            .routes
            .iter()
            .map(|entry| {
                let candidate = Candidate {
                    route_id: Some(entry.route_id.as_str()),
                    metadata: self.metadata.get(&entry.route_id),
                };
                (entry.canonical_url.as_str(), candidate)
            })
            .collect();

        candidates.entry("/").or_insert(Candidate {
            route_id: None,
            metadata: None,
        });

        candidates
    }
}

/// State of a single build
struct Build<'a, 'p> {
    candidates: HashMap<&'a str, Candidate<'a>>,
    current: &'p str,
    root_label: &'a str,
}

impl<'a, 'p> Build<'a, 'p> {
    /// Sibling lists for every expanded ancestor, sorted by (order, url)
    ///
    /// Each candidate hangs under its nearest registered ancestor. Strict
    /// descendants of the current path are left out.
    fn sibling_groups(&self, chain: &[&str]) -> HashMap<&'a str, Vec<&'a str>> {
        let expanded: HashSet<&str> = chain
            .iter()
            .copied()
            .filter(|url| *url != self.current)
            .collect();

        let mut groups: HashMap<&'a str, Vec<&'a str>> = HashMap::new();

        for &url in self.candidates.keys() {
            if url == "/" || is_descendant_of(url, self.current) {
                continue;
            }

            let parent = PathHierarchy::new(url)
                .skip(1)
                .find(|ancestor| self.candidates.contains_key(*ancestor));

            let Some(parent) = parent else {
                continue;
            };

            if expanded.contains(parent) {
                groups.entry(parent).or_default().push(url);
            }
        }

        for siblings in groups.values_mut() {
            siblings.sort_by(|a, b| {
                let order_a = self.candidates[*a].order();
                let order_b = self.candidates[*b].order();
                order_a.cmp(&order_b).then_with(|| a.cmp(b))
            });
        }

        groups
    }

    /// Node for `chain[depth]` with its siblings group attached, recursing along the chain
    fn assemble(
        &self,
        chain: &[&str],
        groups: &HashMap<&'a str, Vec<&'a str>>,
        depth: usize,
    ) -> BreadcrumbNode {
        let url = chain[depth];
        let mut node = self.node(url);

        if url == self.current {
            return node;
        }
        node.expanded = true;

        let next = chain.get(depth + 1).copied();
        if let Some(children) = groups.get(url) {
            node.children = children
                .iter()
                .map(|&child| {
                    if Some(child) == next {
                        self.assemble(chain, groups, depth + 1)
                    } else {
                        self.node(child)
                    }
                })
                .collect();
        }

        node
    }

    /// Childless node for a known URL, label resolved
    fn node(&self, url: &str) -> BreadcrumbNode {
        let candidate = self.candidates.get(url).copied().unwrap_or(Candidate {
            route_id: None,
            metadata: None,
        });

        let label = match (candidate.metadata, candidate.route_id) {
            (Some(meta), Some(route_id)) => meta.label.resolve(&LabelContext {
                route_id,
                url,
                current_path: self.current,
            }),
            _ => default_label(url, self.root_label),
        };

        BreadcrumbNode::new(label, url, candidate.order()).with_current(url == self.current)
    }
}
