pub mod health;
pub mod recommend;
pub mod update;

use axum::extract::DefaultBodyLimit;
use axum::routing::post;
use axum::Router;

use crate::middleware::request_id;
use crate::state::AppState;

/// Maximum request body size: 256 KiB. A play history window of 10 fits in
/// a fraction of this.
const MAX_BODY_SIZE: usize = 256 * 1024;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/recommend", post(recommend::recommend))
        .route("/update", post(update::update))
        .nest("/health", health::router())
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(axum::middleware::from_fn(request_id::request_id_middleware))
        .with_state(state)
}
