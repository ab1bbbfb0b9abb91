//! Maud rendering of breadcrumb navigation
//!
//! A page shows the trail from the root to the current page and, below it,
//! the pages that sit next to the current one.

use maud::{html, Markup, DOCTYPE};
use rhtmx_breadcrumb::BreadcrumbNode;

/// Nodes on the same level as the deepest node of the trail
fn level_of_current(tree: &BreadcrumbNode) -> &[BreadcrumbNode] {
    tree.trail()
        .into_iter()
        .rev()
        .find(|node| !node.children.is_empty())
        .map(|node| node.children.as_slice())
        .unwrap_or_default()
}

/// Ordered trail, last entry marked as the current page
pub fn trail(tree: &BreadcrumbNode) -> Markup {
    html! {
        nav aria-label="breadcrumb" {
            ol.breadcrumb {
                @for node in tree.trail() {
                    li {
                        @if node.is_current_path {
                            span aria-current="page" { (node.label) }
                        } @else {
                            a href=(node.url) { (node.label) }
                        }
                    }
                }
            }
        }
    }
}

pub fn siblings(tree: &BreadcrumbNode) -> Markup {
    let level = level_of_current(tree);

    html! {
        @if !level.is_empty() {
            ul.siblings {
                @for node in level {
                    li.current[node.is_current_path] {
                        a href=(node.url) { (node.label) }
                    }
                }
            }
        }
    }
}

pub fn page(path: &str, tree: Option<&BreadcrumbNode>) -> Markup {
    let title = tree
        .and_then(BreadcrumbNode::current)
        .map(|node| node.label.as_str())
        .unwrap_or(path);

    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                title { (title) }
            }
            body {
                @match tree {
                    Some(tree) => {
                        (trail(tree))
                        (siblings(tree))
                    }
                    None => {
                        p.no-breadcrumb { "No breadcrumb available" }
                    }
                }
                h1 { (title) }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree() -> BreadcrumbNode {
        let mut docs = BreadcrumbNode::new("Docs", "/docs", 0).with_expanded(true);
        docs.children = vec![
            BreadcrumbNode::new("Install", "/docs/install", 0).with_current(true),
            BreadcrumbNode::new("Usage", "/docs/usage", 1),
        ];
        let mut root = BreadcrumbNode::new("Home", "/", 0).with_expanded(true);
        root.children = vec![docs, BreadcrumbNode::new("Blog", "/blog", 1)];
        root
    }

    #[test]
    fn test_trail_for_unknown_page_ends_at_ancestor() {
        let mut root = BreadcrumbNode::new("Home", "/", 0).with_expanded(true);
        root.children = vec![
            BreadcrumbNode::new("Docs", "/docs", 0).with_expanded(true),
            BreadcrumbNode::new("Blog", "/blog", 1),
        ];

        let html = trail(&root).into_string();
        assert!(html.contains(r#"<a href="/docs">Docs</a>"#));
        assert!(!html.contains("Blog"));
        assert!(!html.contains("aria-current"));

        let html = siblings(&root).into_string();
        assert!(html.contains(r#"<a href="/docs">Docs</a>"#));
        assert!(html.contains(r#"<a href="/blog">Blog</a>"#));
    }

    #[test]
    fn test_trail_links_ancestors_and_marks_current() {
        let html = trail(&tree()).into_string();
        assert!(html.contains(r#"<a href="/">Home</a>"#));
        assert!(html.contains(r#"<a href="/docs">Docs</a>"#));
        assert!(html.contains(r#"<span aria-current="page">Install</span>"#));
        assert!(!html.contains("Blog"));
    }

    #[test]
    fn test_siblings_show_current_level() {
        let html = siblings(&tree()).into_string();
        assert!(html.contains(r#"<li class="current"><a href="/docs/install">Install</a></li>"#));
        assert!(html.contains(r#"<a href="/docs/usage">Usage</a>"#));
        assert!(!html.contains("/blog"));
    }

    #[test]
    fn test_page_without_breadcrumb() {
        let html = page("/nowhere", None).into_string();
        assert!(html.contains("No breadcrumb available"));
        assert!(html.contains("<title>/nowhere</title>"));
    }

    #[test]
    fn test_page_title_from_current_node() {
        let tree = tree();
        let html = page("/docs/install", Some(&tree)).into_string();
        assert!(html.contains("<title>Install</title>"));
        assert!(html.contains("<h1>Install</h1>"));
    }
}
