use axum::middleware::from_fn;
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;

use crate::middleware::security_headers::security_headers;
use crate::state::AppState;
use crate::static_files::{asset_handler, root_handler, shell_handler};

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/assets/{*file_path}", get(asset_handler))
        .route("/", get(root_handler))
        .route("/{*full_path}", get(shell_handler))
        .layer(from_fn(security_headers))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
