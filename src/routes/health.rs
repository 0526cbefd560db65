use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};

use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health_check))
        .route("/live", get(liveness))
        .route("/ready", get(readiness))
        .route("/metrics", get(metrics))
}

pub async fn health_check(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "uptimeSecs": state.uptime_secs(),
    }))
}

pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

pub async fn readiness() -> StatusCode {
    StatusCode::OK
}

/// Aggregate view only: the raw reward buffer stays internal.
pub async fn metrics(State(state): State<AppState>) -> impl axum::response::IntoResponse {
    let (reward_count, mean_reward) = state.reward_stats();
    Json(serde_json::json!({
        "uptimeSecs": state.uptime_secs(),
        "historyLen": state.store().history_len(),
        "rewardCount": reward_count,
        "meanReward": mean_reward,
    }))
}
