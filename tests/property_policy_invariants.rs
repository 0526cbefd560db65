use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use difficulty_backend::policy::features::{extract, FEATURE_LEN};
use difficulty_backend::policy::mapper::{distribution, reward, sample};
use difficulty_backend::policy::types::{Metrics, PlaySummary};

proptest! {
    #[test]
    fn pt_distribution_is_a_probability_vector(feat in proptest::collection::vec(0.0_f64..=1.0, 0..24)) {
        let probs = distribution(&feat);
        let sum: f64 = probs.iter().sum();
        prop_assert!((sum - 1.0).abs() < 1e-9);
        prop_assert!(probs.iter().all(|p| *p >= 0.0));
    }

    #[test]
    fn pt_extract_is_fixed_length_and_finite(
        plays in proptest::collection::vec(
            (any::<bool>(), 0_u32..100, 0_u32..100, 0.0_f64..10_000.0),
            0..30,
        )
    ) {
        let history: Vec<PlaySummary> = plays
            .into_iter()
            .map(|(finished, coins_collected, total_coins, time_taken)| PlaySummary {
                metrics: Metrics {
                    finished,
                    coins_collected,
                    total_coins,
                    time_taken,
                },
            })
            .collect();

        let feat = extract(&history);
        prop_assert_eq!(feat.len(), FEATURE_LEN);
        prop_assert!(feat.iter().all(|v| v.is_finite() && *v >= 0.0));
    }

    #[test]
    fn pt_reward_bounded_when_coins_bounded(
        finished in any::<bool>(),
        coins in 0_u32..50,
        extra in 0_u32..50,
        time_taken in 0.0_f64..10_000.0,
    ) {
        // totalCoins >= coinsCollected keeps the ratio in [0, 1].
        let metrics = Metrics {
            finished,
            coins_collected: coins,
            total_coins: coins + extra,
            time_taken,
        };
        let r = reward(Some(&metrics));
        prop_assert!((0.0..=1.0).contains(&r));
        if finished {
            prop_assert_eq!(r, 1.0);
        }
    }

    #[test]
    fn pt_sample_index_in_range(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        for feat in [vec![], vec![0.0; 10], vec![1.0; 9]] {
            let probs = distribution(&feat);
            prop_assert!(sample(&probs, &mut rng) < 4);
        }
    }
}

#[test]
fn pt_seeded_sampling_converges_to_weights() {
    let mut rng = StdRng::seed_from_u64(2024);
    let probs = distribution(&[0.6, 0.0, 0.0]);
    let mut counts = [0u32; 4];
    let draws = 50_000;
    for _ in 0..draws {
        counts[sample(&probs, &mut rng)] += 1;
    }
    for (count, expected) in counts.iter().zip(probs) {
        let observed = f64::from(*count) / f64::from(draws);
        assert!(
            (observed - expected).abs() < 0.01,
            "observed {observed}, expected {expected}"
        );
    }
}
