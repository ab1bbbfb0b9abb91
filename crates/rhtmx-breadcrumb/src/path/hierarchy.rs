use super::parent_url;

/// Lazy iterator over a URL and its syntactic ancestors
///
/// For `/a/b/c`, yields: `/a/b/c` → `/a/b` → `/a` → `/`
///
/// Only borrows from the input, so walking the ancestor chain never
/// allocates. Iteration stops at `/`, or immediately if a step would not
/// shorten the path.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumb::path::PathHierarchy;
///
/// let paths: Vec<&str> = PathHierarchy::new("/a/b/c").collect();
/// assert_eq!(paths, vec!["/a/b/c", "/a/b", "/a", "/"]);
///
/// // Nearest ancestor matching a predicate, skipping the path itself
/// let known = ["/", "/a"];
/// let parent = PathHierarchy::new("/a/b/c").skip(1).find(|p| known.contains(p));
/// assert_eq!(parent, Some("/a"));
/// ```
#[derive(Debug, Clone)]
pub struct PathHierarchy<'a> {
    current: Option<&'a str>,
}

impl<'a> PathHierarchy<'a> {
    /// Creates a hierarchy iterator starting at (and including) `path`
    pub fn new(path: &'a str) -> Self {
        Self {
            current: Some(path),
        }
    }
}

impl<'a> Iterator for PathHierarchy<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.current?;

        self.current = parent_url(current).filter(|parent| *parent != current);

        Some(current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_path_hierarchy() {
        let paths: Vec<&str> = PathHierarchy::new("/a/b/c/d").collect();
        assert_eq!(paths, vec!["/a/b/c/d", "/a/b/c", "/a/b", "/a", "/"]);

        let paths: Vec<&str> = PathHierarchy::new("/users").collect();
        assert_eq!(paths, vec!["/users", "/"]);

        let paths: Vec<&str> = PathHierarchy::new("/").collect();
        assert_eq!(paths, vec!["/"]);
    }

    #[test]
    fn test_path_hierarchy_terminates_on_malformed_input() {
        let paths: Vec<&str> = PathHierarchy::new("no-slash").collect();
        assert_eq!(paths, vec!["no-slash"]);

        let paths: Vec<&str> = PathHierarchy::new("").collect();
        assert_eq!(paths, vec![""]);
    }

    #[test]
    fn test_path_hierarchy_short_circuit() {
        let mut iter = PathHierarchy::new("/a/b/c/d");
        assert_eq!(iter.find(|&p| p == "/a/b"), Some("/a/b"));
        assert_eq!(iter.next(), Some("/a"));
    }
}
