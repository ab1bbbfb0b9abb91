// File: src/node.rs
// Purpose: Breadcrumb tree node and its serialized form

use serde::{Deserialize, Serialize};

/// One node of a breadcrumb tree
///
/// Serializes with the field names templates and API clients expect:
/// `text`, `url`, `order`, `is_current_path`, `children`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbNode {
    #[serde(rename = "text")]
    pub label: String,
    pub url: String,
    pub order: i32,
    pub is_current_path: bool,
    #[serde(default)]
    pub children: Vec<BreadcrumbNode>,
    /// Set on the ancestors of the requested path whose children are listed.
    /// Not serialized.
    #[serde(skip)]
    pub expanded: bool,
}

impl BreadcrumbNode {
    pub fn new(label: impl Into<String>, url: impl Into<String>, order: i32) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
            order,
            is_current_path: false,
            children: Vec::new(),
            expanded: false,
        }
    }

    pub fn with_current(mut self, is_current_path: bool) -> Self {
        self.is_current_path = is_current_path;
        self
    }

    pub fn with_expanded(mut self, expanded: bool) -> Self {
        self.expanded = expanded;
        self
    }

    /// The ancestor chain from this node down to the current node
    ///
    /// For an unknown path the chain ends at its deepest registered ancestor,
    /// even when that node has no children. Trees read back from JSON carry no
    /// expansion marks; the walk then follows the child that has children.
    pub fn trail(&self) -> Vec<&BreadcrumbNode> {
        let mut trail = vec![self];
        let mut node = self;

        while let Some(next) = node
            .children
            .iter()
            .find(|child| child.is_current_path || child.expanded)
            .or_else(|| node.children.iter().find(|child| !child.children.is_empty()))
        {
            trail.push(next);
            node = next;
        }

        trail
    }

    /// The node marked as the current path, if any
    pub fn current(&self) -> Option<&BreadcrumbNode> {
        if self.is_current_path {
            return Some(self);
        }
        self.children.iter().find_map(BreadcrumbNode::current)
    }

    /// Depth-first iterator over this node and all its descendants
    pub fn iter(&self) -> impl Iterator<Item = &BreadcrumbNode> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let node = stack.pop()?;
            stack.extend(node.children.iter().rev());
            Some(node)
        })
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn sample() -> BreadcrumbNode {
        let mut docs = BreadcrumbNode::new("Docs", "/docs", 0);
        docs.children = vec![
            BreadcrumbNode::new("Guide", "/docs/guide", 0).with_current(true),
            BreadcrumbNode::new("Reference", "/docs/reference", 1),
        ];

        let mut root = BreadcrumbNode::new("Home", "/", 0);
        root.children = vec![docs, BreadcrumbNode::new("Blog", "/blog", 1)];
        root
    }

    #[test]
    fn test_serialized_field_names() {
        let node = BreadcrumbNode::new("Home", "/", 0).with_current(true);
        let value = serde_json::to_value(&node).unwrap();
        assert_eq!(
            value,
            json!({
                "text": "Home",
                "url": "/",
                "order": 0,
                "is_current_path": true,
                "children": []
            })
        );
    }

    #[test]
    fn test_trail_follows_expanded_chain() {
        let root = sample();
        let urls: Vec<&str> = root.trail().iter().map(|n| n.url.as_str()).collect();
        assert_eq!(urls, vec!["/", "/docs", "/docs/guide"]);
    }

    #[test]
    fn test_trail_ends_at_expanded_leaf() {
        let mut root = BreadcrumbNode::new("Home", "/", 0).with_expanded(true);
        root.children = vec![
            BreadcrumbNode::new("A", "/a", 0).with_expanded(true),
            BreadcrumbNode::new("B", "/b", 0),
        ];

        let urls: Vec<&str> = root.trail().iter().map(|n| n.url.as_str()).collect();
        assert_eq!(urls, vec!["/", "/a"]);
    }

    #[test]
    fn test_expanded_is_not_serialized() {
        let node = BreadcrumbNode::new("A", "/a", 0).with_expanded(true);
        let value = serde_json::to_value(&node).unwrap();
        assert!(value.get("expanded").is_none());

        let back: BreadcrumbNode = serde_json::from_value(value).unwrap();
        assert!(!back.expanded);
    }

    #[test]
    fn test_current() {
        let root = sample();
        assert_eq!(root.current().map(|n| n.url.as_str()), Some("/docs/guide"));
        assert!(BreadcrumbNode::new("Home", "/", 0).current().is_none());
    }

    #[test]
    fn test_iter_is_depth_first() {
        let root = sample();
        let urls: Vec<&str> = root.iter().map(|n| n.url.as_str()).collect();
        assert_eq!(
            urls,
            vec!["/", "/docs", "/docs/guide", "/docs/reference", "/blog"]
        );
    }

    #[test]
    fn test_to_json_is_pretty() {
        let json = BreadcrumbNode::new("Home", "/", 0).to_json().unwrap();
        assert!(json.contains("\n  \"text\": \"Home\""));
    }
}
