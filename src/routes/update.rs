use axum::extract::State;
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::extractors::LenientJson;
use crate::policy::mapper::reward;
use crate::policy::types::Metrics;
use crate::state::AppState;
use crate::store::HistoryEntry;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct UpdateRequest {
    pub metrics: Option<Metrics>,
}

#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub ok: bool,
}

/// Records one observed round outcome. Persistence is best effort: a failed
/// file rewrite is logged and the caller still gets an acknowledgment, with
/// the in-memory state as the only guaranteed effect.
pub async fn update(
    State(state): State<AppState>,
    LenientJson(req): LenientJson<UpdateRequest>,
) -> Json<UpdateResponse> {
    let r = reward(req.metrics.as_ref());
    state.push_reward(r);

    let entry = HistoryEntry {
        metrics: req.metrics.unwrap_or_default(),
        reward: r,
        recorded_at: Utc::now(),
    };
    if let Err(error) = state.store().append(entry) {
        tracing::warn!(
            path = %state.store().path().display(),
            error = %error,
            "Failed to persist history entry"
        );
    }

    Json(UpdateResponse { ok: true })
}
