use proptest::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;
use xpload_harness::partition;

fn span_and_count() -> impl Strategy<Value = (u64, usize)> {
    (1u64..500).prop_flat_map(|span| (Just(span), 1..=(span as usize + 1)))
}

proptest! {
    #[test]
    fn plan_covers_span_exactly((span, count) in span_and_count(), seed in any::<u64>()) {
        let plan = partition(span, count, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert_eq!(plan.sum(), span);
        prop_assert_eq!(plan.len(), count);
    }

    #[test]
    fn only_the_first_segment_can_be_zero((span, count) in span_and_count(), seed in any::<u64>()) {
        let plan = partition(span, count, &mut StdRng::seed_from_u64(seed)).unwrap();
        prop_assert!(plan.segments()[1..].iter().all(|&s| s > 0));
    }

    #[test]
    fn too_many_calls_are_rejected(span in 1u64..500, extra in 2usize..10, seed in any::<u64>()) {
        let count = span as usize + extra;
        prop_assert!(partition(span, count, &mut StdRng::seed_from_u64(seed)).is_err());
    }
}
