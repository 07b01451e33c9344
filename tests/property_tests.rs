//! Property tests for engine determinism and range invariants.

use proptest::prelude::*;

use zt_compass::domain::foundation::ConstraintField;
use zt_compass::domain::profile::{validate_and_build, RawProfileInput};
use zt_compass::domain::scoring::{derive_weights, score_architectures};

fn input_from(values: [i64; 6]) -> RawProfileInput {
    let pairs: Vec<(ConstraintField, i64)> = ConstraintField::ALL
        .iter()
        .copied()
        .zip(values)
        .collect();
    RawProfileInput::from_values(&pairs)
}

proptest! {
    #[test]
    fn scoring_is_deterministic_for_any_valid_profile(
        values in proptest::array::uniform6(1i64..=10)
    ) {
        let profile = validate_and_build(&input_from(values)).profile;
        let first = score_architectures(&profile);
        let second = score_architectures(&profile);

        prop_assert_eq!(&first, &second);
        for (a, b) in first.scores.iter().zip(second.scores.iter()) {
            prop_assert_eq!(a.weighted_score.to_bits(), b.weighted_score.to_bits());
        }
    }

    #[test]
    fn weighted_scores_stay_in_range(values in proptest::array::uniform6(1i64..=10)) {
        let profile = validate_and_build(&input_from(values)).profile;
        let results = score_architectures(&profile);

        prop_assert!(!results.is_fallback);
        prop_assert_eq!(results.scores.len(), 3);
        for score in &results.scores {
            prop_assert!((1.0..=10.0).contains(&score.weighted_score));
        }
    }

    #[test]
    fn derived_weights_are_positive_and_complete(
        values in proptest::array::uniform6(1i64..=10)
    ) {
        let profile = validate_and_build(&input_from(values)).profile;
        let weights = derive_weights(&profile);

        prop_assert!(weights.is_well_formed());
        prop_assert_eq!(weights.rows().len(), 7);
        for (_, weight) in weights.rows() {
            prop_assert!(weight > 0.0 && weight <= 1.0 + 1e-9);
        }
    }

    #[test]
    fn ranking_is_sorted_descending(values in proptest::array::uniform6(1i64..=10)) {
        let profile = validate_and_build(&input_from(values)).profile;
        let results = score_architectures(&profile);

        for pair in results.scores.windows(2) {
            prop_assert!(pair[0].weighted_score >= pair[1].weighted_score);
        }
    }

    #[test]
    fn partial_input_always_materializes_a_full_profile(
        values in proptest::collection::vec(1i64..=10, 0..=6)
    ) {
        let pairs: Vec<(ConstraintField, i64)> = ConstraintField::ALL
            .iter()
            .copied()
            .zip(values.iter().copied())
            .collect();
        let validation = validate_and_build(&RawProfileInput::from_values(&pairs));

        prop_assert!(validation.validation.is_valid);
        prop_assert_eq!(validation.assumptions.len(), 6 - pairs.len());
        prop_assert_eq!(validation.profile.input_completeness(), pairs.len() == 6);
    }
}
