// File: src/site.rs
// Purpose: Demo site: one route table drives both axum routing and breadcrumbs

use crate::render;
use axum::{
    http::{StatusCode, Uri},
    response::{Html, IntoResponse, Response},
    routing::{get, MethodRouter},
    Router,
};
use rhtmx_breadcrumb::{
    breadcrumb_tree_handler, BreadcrumbConfig, Breadcrumbs, CurrentBreadcrumbs, MetadataRegistry,
    RouteTable,
};
use std::sync::Arc;
use tracing::info;

/// Every page of the site, in registration order
pub fn route_table() -> RouteTable {
    RouteTable::new()
        .get("/", "index")
        .get("/docs", "docs")
        .get("/docs/getting-started", "getting_started")
        .get("/docs/guides", "guides")
        .get("/docs/guides/routing", "guide_routing")
        .get("/docs/guides/deployment", "guide_deployment")
        .get("/blog", "blog")
        .get("/account", "account")
        .get("/account/orders", "orders")
        .route("/contact", "contact", ["GET", "POST"])
        .route("/api/breadcrumbs", "api_breadcrumbs", ["GET"])
}

pub fn metadata() -> MetadataRegistry {
    MetadataRegistry::builder()
        .label("index", "Home", 0)
        .label("docs", "Documentation", 1)
        .label("guides", "Guides", 1)
        .label("guide_deployment", "Deploying", 2)
        .label("blog", "Blog", 2)
        .dynamic("account", 3, |ctx| {
            if ctx.current_path == ctx.url {
                "Your account".to_string()
            } else {
                "Account".to_string()
            }
        })
        .label("contact", "Contact", 4)
        .build()
}

/// Breadcrumb service for this site; API routes are not navigation targets
pub fn breadcrumbs(mut config: BreadcrumbConfig) -> Breadcrumbs {
    config.catalog.excluded_prefixes.push("api_".to_string());
    Breadcrumbs::new(route_table(), metadata(), config)
}

async fn page_handler(uri: Uri, CurrentBreadcrumbs(tree): CurrentBreadcrumbs) -> Html<String> {
    Html(render::page(uri.path(), tree.as_ref()).into_string())
}

async fn contact_submit() -> Response {
    info!("contact form submitted");
    (StatusCode::ACCEPTED, "Thanks, we'll be in touch").into_response()
}

pub fn app(breadcrumbs: Arc<Breadcrumbs>) -> Router {
    let mut router: Router<Arc<Breadcrumbs>> = Router::new();

    for route in route_table().iter() {
        if route.route_id == "api_breadcrumbs" {
            router = router.route(&route.pattern, get(breadcrumb_tree_handler));
            continue;
        }

        let mut method_router: MethodRouter<Arc<Breadcrumbs>> = MethodRouter::new();
        if route.methods.contains("GET") {
            method_router = method_router.get(page_handler);
        }
        if route.methods.contains("POST") {
            method_router = method_router.post(contact_submit);
        }
        router = router.route(&route.pattern, method_router);
    }

    router.with_state(breadcrumbs)
}
