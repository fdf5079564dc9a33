//! Page routes: the dashboard at `/`, static assets, and a redirect for
//! everything else.

use axum::{
    Router,
    handler::HandlerWithoutStateExt,
    http::Uri,
    response::Redirect,
};
use std::path::Path;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::config::INDEX_FILE;

/// Build the router serving the frontend in `dist`.
///
/// `/` serves `index.html`, existing files are served as-is, and any
/// other path is redirected to `/`.
pub fn router(dist: &Path) -> Router {
    let assets = ServeDir::new(dist)
        .append_index_html_on_directories(false)
        .fallback(redirect_to_root.into_service());

    Router::new()
        .route_service("/", ServeFile::new(dist.join(INDEX_FILE)))
        .fallback_service(assets)
        .layer(TraceLayer::new_for_http())
}

/// Fallback for unknown paths.
pub async fn redirect_to_root(uri: Uri) -> Redirect {
    debug!(%uri, "redirecting to /");
    Redirect::to("/")
}
