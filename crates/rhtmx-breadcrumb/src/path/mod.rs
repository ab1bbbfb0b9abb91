//! Path utilities for canonical breadcrumb URLs
//!
//! All functions are **pure** and **total**: given the same input they always
//! produce the same output, and malformed input degrades to best-effort
//! cleanup instead of an error.

use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;

pub mod hierarchy;
pub use hierarchy::PathHierarchy;

/// Bracketed placeholders anywhere in a segment: `<int:id>`, `{id}`, `[slug]`, `[...rest]`
static PLACEHOLDER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<[^<>]*>|\{[^{}]*\}|\[[^\[\]]*\]").expect("valid placeholder regex"));

/// Validates if a path is in canonical form
///
/// # Rules
///
/// - Must start with `/`
/// - Must not contain `//` or `\`
/// - Must not end with `/` (except root `/`)
/// - Must not be empty
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumb::path::is_valid_path;
///
/// assert!(is_valid_path("/"));
/// assert!(is_valid_path("/docs/guide"));
///
/// assert!(!is_valid_path(""));
/// assert!(!is_valid_path("docs"));
/// assert!(!is_valid_path("/docs/"));
/// assert!(!is_valid_path("/docs//guide"));
/// ```
pub fn is_valid_path(path: &str) -> bool {
    if path.is_empty() || !path.starts_with('/') {
        return false;
    }

    if path.contains("//") || path.contains('\\') {
        return false;
    }

    path == "/" || !path.ends_with('/')
}

/// Normalize a path to canonical form
///
/// Returns `Cow::Borrowed` when the input is already canonical and a single
/// allocation otherwise.
///
/// - Trailing slashes: `/path/` → `/path`
/// - Double slashes: `/path//to` → `/path/to`
/// - Backslashes: `\path\to` → `/path/to`
/// - Empty input: `""` → `/`
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumb::path::normalize_path;
/// use std::borrow::Cow;
///
/// assert!(matches!(normalize_path("/about"), Cow::Borrowed("/about")));
/// assert_eq!(normalize_path("/a//b/"), "/a/b");
/// assert_eq!(normalize_path(""), "/");
/// ```
pub fn normalize_path(path: &str) -> Cow<'_, str> {
    if is_valid_path(path) {
        return Cow::Borrowed(path);
    }

    let normalized = path
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("/");

    if normalized.is_empty() {
        Cow::Borrowed("/")
    } else {
        Cow::Owned(format!("/{}", normalized))
    }
}

/// Canonical URL for a registered route pattern
///
/// Strips parameter placeholders and then normalizes separators:
///
/// - `<id>`, `<int:id>`, `{id}`, `[id]`, `[...slug]` are removed wherever they appear
/// - whole segments starting with `:` or `*` (`/users/:id`, `/docs/*rest`) are removed
///
/// Unbalanced brackets are left in place.
///
/// # Examples
///
/// ```
/// use rhtmx_breadcrumb::path::normalize_pattern;
///
/// assert_eq!(normalize_pattern("/users/<int:id>/"), "/users");
/// assert_eq!(normalize_pattern("/users/:id/posts"), "/users/posts");
/// assert_eq!(normalize_pattern("/a//b/"), "/a/b");
/// assert_eq!(normalize_pattern("/<page>"), "/");
/// ```
pub fn normalize_pattern(pattern: &str) -> String {
    let stripped = PLACEHOLDER_REGEX.replace_all(pattern, "");

    let joined = stripped
        .replace('\\', "/")
        .split('/')
        .filter(|s| !s.is_empty() && !s.starts_with(':') && !s.starts_with('*'))
        .collect::<Vec<_>>()
        .join("/");

    format!("/{}", joined)
}

/// Canonical form of an incoming request path
///
/// Drops any `?query` or `#fragment` suffix, then normalizes separators.
/// Placeholders are not stripped: a request path is concrete.
///
/// ```
/// use rhtmx_breadcrumb::path::normalize_request_path;
///
/// assert_eq!(normalize_request_path("/docs/?tab=1"), "/docs");
/// assert_eq!(normalize_request_path(""), "/");
/// ```
pub fn normalize_request_path(path: &str) -> Cow<'_, str> {
    let path = match path.find(['?', '#']) {
        Some(pos) => &path[..pos],
        None => path,
    };
    normalize_path(path)
}

/// Syntactic parent of a canonical URL
///
/// Removes the last segment. Single-segment paths have `/` as their parent,
/// and `/` has none.
///
/// ```
/// use rhtmx_breadcrumb::path::parent_url;
///
/// assert_eq!(parent_url("/a/b/c"), Some("/a/b"));
/// assert_eq!(parent_url("/a"), Some("/"));
/// assert_eq!(parent_url("/"), None);
/// ```
pub fn parent_url(url: &str) -> Option<&str> {
    if url == "/" {
        return None;
    }

    match url.rfind('/') {
        Some(0) => Some("/"),
        Some(pos) => Some(&url[..pos]),
        None => None,
    }
}

/// Whether `url` lies strictly below `ancestor` in the path structure
///
/// ```
/// use rhtmx_breadcrumb::path::is_descendant_of;
///
/// assert!(is_descendant_of("/a/b", "/a"));
/// assert!(!is_descendant_of("/a", "/a"));
/// assert!(!is_descendant_of("/ab", "/a"));
/// assert!(is_descendant_of("/a", "/"));
/// ```
pub fn is_descendant_of(url: &str, ancestor: &str) -> bool {
    if ancestor == "/" {
        return url != "/" && url.starts_with('/');
    }

    url.len() > ancestor.len() + 1
        && url.starts_with(ancestor)
        && url.as_bytes()[ancestor.len()] == b'/'
}
