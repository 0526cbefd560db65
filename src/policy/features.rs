use crate::policy::types::PlaySummary;

/// Fixed feature vector length. Together with [`HISTORY_WINDOW`] this means
/// only the first three-and-a-bit retained plays can ever influence the
/// vector; the mismatch is inherited behavior the rest of the pipeline
/// depends on, so it is kept as-is.
pub const FEATURE_LEN: usize = 10;

/// How many most-recent plays are retained before extraction.
pub const HISTORY_WINDOW: usize = 10;

/// Converts a bounded window of past plays into a fixed-length feature
/// vector. Each retained play contributes three components in chronological
/// order: finished flag, coin-collection ratio, and a speed term that decays
/// with time taken. Shorter histories are zero-padded on the right.
pub fn extract(history: &[PlaySummary]) -> [f64; FEATURE_LEN] {
    let start = history.len().saturating_sub(HISTORY_WINDOW);
    let mut feat = [0.0; FEATURE_LEN];
    let mut cursor = 0;

    for play in &history[start..] {
        if cursor >= FEATURE_LEN {
            break;
        }
        let m = &play.metrics;
        let components = [
            if m.finished { 1.0 } else { 0.0 },
            m.coin_ratio(),
            (1.0 / (1.0 + m.time_taken)).min(1.0),
        ];
        for value in components {
            if cursor >= FEATURE_LEN {
                break;
            }
            feat[cursor] = value;
            cursor += 1;
        }
    }

    feat
}
