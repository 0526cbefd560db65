use axum::Json;
use serde::{Deserialize, Serialize};

use crate::extractors::LenientJson;
use crate::policy::features::extract;
use crate::policy::mapper::{distribution, sample};
use crate::policy::params::{DifficultyParams, ACTIONS};
use crate::policy::types::PlaySummary;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RecommendRequest {
    pub last_plays: Vec<PlaySummary>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendResponse {
    pub params: DifficultyParams,
    pub probs: [f64; 4],
}

/// Proposes a difficulty tier for the next round. With no play history the
/// fixed default distribution applies; otherwise recent plays are condensed
/// into a feature vector and mapped to a score band.
pub async fn recommend(LenientJson(req): LenientJson<RecommendRequest>) -> Json<RecommendResponse> {
    let probs = if req.last_plays.is_empty() {
        distribution(&[])
    } else {
        distribution(&extract(&req.last_plays))
    };

    let idx = sample(&probs, &mut rand::thread_rng());
    let action = ACTIONS[idx];

    tracing::debug!(
        plays = req.last_plays.len(),
        action = action.as_str(),
        "Recommended difficulty"
    );

    Json(RecommendResponse {
        params: action.params(),
        probs,
    })
}
