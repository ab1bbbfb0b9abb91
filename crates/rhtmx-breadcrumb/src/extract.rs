// File: src/extract.rs
// Purpose: axum integration (request extractor and JSON endpoint)

use crate::breadcrumbs::Breadcrumbs;
use crate::node::BreadcrumbNode;
use axum::async_trait;
use axum::extract::{FromRef, FromRequestParts, Query, State};
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json, Response};
use serde::Deserialize;
use serde_json::json;
use std::convert::Infallible;
use std::sync::Arc;

/// Breadcrumb tree for the request's own path
///
/// Requires `Arc<Breadcrumbs>` to be reachable from the router state.
///
/// ```no_run
/// use axum::{response::Html, routing::get, Router};
/// use rhtmx_breadcrumb::{Breadcrumbs, CurrentBreadcrumbs};
/// use std::sync::Arc;
///
/// async fn page(CurrentBreadcrumbs(tree): CurrentBreadcrumbs) -> Html<String> {
///     let trail = tree
///         .as_ref()
///         .map(|t| t.trail().iter().map(|n| n.label.clone()).collect::<Vec<_>>().join(" / "))
///         .unwrap_or_default();
///     Html(trail)
/// }
///
/// fn app(breadcrumbs: Arc<Breadcrumbs>) -> Router {
///     Router::new().route("/docs", get(page)).with_state(breadcrumbs)
/// }
/// ```
#[derive(Debug, Clone)]
pub struct CurrentBreadcrumbs(pub Option<BreadcrumbNode>);

#[async_trait]
impl<S> FromRequestParts<S> for CurrentBreadcrumbs
where
    Arc<Breadcrumbs>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let breadcrumbs = Arc::<Breadcrumbs>::from_ref(state);
        Ok(Self(breadcrumbs.build(parts.uri.path())))
    }
}

/// Query string of [`breadcrumb_tree_handler`]
#[derive(Debug, Deserialize)]
pub struct TreeQuery {
    /// Path to build the tree for (default: "/")
    pub path: Option<String>,
}

/// `GET ?path=/some/page` → breadcrumb tree as JSON, `{}` when none is available
pub async fn breadcrumb_tree_handler(
    State(breadcrumbs): State<Arc<Breadcrumbs>>,
    Query(query): Query<TreeQuery>,
) -> Response {
    let path = query.path.as_deref().unwrap_or("/");

    match breadcrumbs.build(path) {
        Some(tree) => Json(tree).into_response(),
        None => Json(json!({})).into_response(),
    }
}
