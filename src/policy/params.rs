use serde::{Deserialize, Serialize};

/// The four selectable difficulty tiers, ordered easiest first. The order
/// is load-bearing: action distributions are aligned positionally to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Action {
    Easy,
    Medium,
    Hard,
    Superhard,
}

pub const ACTIONS: [Action; 4] = [
    Action::Easy,
    Action::Medium,
    Action::Hard,
    Action::Superhard,
];

/// Level-generation parameters handed back to the game client for one tier.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyParams {
    pub rows: u32,
    pub cols: u32,
    pub coin_count: u32,
    pub obstacle_density: f64,
    pub difficulty: Action,
}

impl Action {
    pub fn params(self) -> DifficultyParams {
        match self {
            Action::Easy => DifficultyParams {
                rows: 10,
                cols: 16,
                coin_count: 6,
                obstacle_density: 0.06,
                difficulty: Action::Easy,
            },
            Action::Medium => DifficultyParams {
                rows: 12,
                cols: 18,
                coin_count: 8,
                obstacle_density: 0.10,
                difficulty: Action::Medium,
            },
            Action::Hard => DifficultyParams {
                rows: 14,
                cols: 22,
                coin_count: 12,
                obstacle_density: 0.16,
                difficulty: Action::Hard,
            },
            Action::Superhard => DifficultyParams {
                rows: 16,
                cols: 26,
                coin_count: 18,
                obstacle_density: 0.22,
                difficulty: Action::Superhard,
            },
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Action::Easy => "easy",
            Action::Medium => "medium",
            Action::Hard => "hard",
            Action::Superhard => "superhard",
        }
    }
}
