//! Batch results equal pairwise results, slot for slot.

use super::common::{int_sequence, small_alphabet_word};
use osa_distance::{
    distance, distance_batch_with, normalized_distance, normalized_distance_batch_with,
    BatchConfig,
};
use proptest::prelude::*;

fn eager() -> BatchConfig {
    BatchConfig {
        parallel: true,
        min_parallel_len: 1,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_batch_equals_pairwise(
        reference in small_alphabet_word(),
        candidates in prop::collection::vec(small_alphabet_word(), 0..40),
    ) {
        for config in [eager(), BatchConfig::sequential()] {
            let batch = distance_batch_with(&reference, &candidates, &config).unwrap();
            prop_assert_eq!(batch.len(), candidates.len());
            for (i, candidate) in candidates.iter().enumerate() {
                prop_assert_eq!(batch[i], distance(&reference, candidate).unwrap());
            }
        }
    }

    #[test]
    fn prop_normalized_batch_equals_pairwise(
        reference in int_sequence(),
        candidates in prop::collection::vec(int_sequence(), 0..40),
    ) {
        let batch = normalized_distance_batch_with(&reference, &candidates, &eager()).unwrap();
        prop_assert_eq!(batch.len(), candidates.len());
        for (i, candidate) in candidates.iter().enumerate() {
            prop_assert_eq!(batch[i], normalized_distance(&reference, candidate).unwrap());
        }
    }

    /// Reversing the candidates reverses the output.
    #[test]
    fn prop_order_tracks_input(
        reference in small_alphabet_word(),
        candidates in prop::collection::vec(small_alphabet_word(), 0..40),
    ) {
        let forward = distance_batch_with(&reference, &candidates, &eager()).unwrap();
        let mut reversed_input = candidates.clone();
        reversed_input.reverse();
        let mut backward = distance_batch_with(&reference, &reversed_input, &eager()).unwrap();
        backward.reverse();
        prop_assert_eq!(forward, backward);
    }
}
