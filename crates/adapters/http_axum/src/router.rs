//! Axum router assembly.

use std::path::Path;

use axum::Router;
use axum::middleware;
use axum::routing::get;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::auth::require_basic_auth;
use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// The launcher page at `/` and static files under `/assets` (served from
/// `assets_dir`) sit behind Basic-Auth. `/health` stays open for liveness
/// checks and never exposes page content.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build(state: AppState, assets_dir: impl AsRef<Path>) -> Router {
    let protected = Router::new()
        .merge(crate::dashboard::routes())
        .nest_service("/assets", ServeDir::new(assets_dir.as_ref()))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_basic_auth,
        ));

    Router::new()
        .route("/health", get(health_check))
        .merge(protected)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
