use serde::{Deserialize, Serialize};

/// Per-round measurements reported by the game client. Every field is
/// optional on the wire; absent fields deserialize to false/zero so a
/// partial payload never fails the request.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metrics {
    pub finished: bool,
    pub coins_collected: u32,
    pub total_coins: u32,
    pub time_taken: f64,
}

/// One past round as seen by the recommender: just its metrics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlaySummary {
    pub metrics: Metrics,
}

impl Metrics {
    /// `totalCoins` is clamped to ≥1 wherever it is used as a divisor.
    pub fn coin_ratio(&self) -> f64 {
        f64::from(self.coins_collected) / f64::from(self.total_coins.max(1))
    }
}
