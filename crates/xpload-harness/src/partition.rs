use std::collections::BTreeSet;

use rand::Rng;

use crate::error::PartitionError;

/// Wait durations, in seconds, that cover a span exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SegmentPlan {
    segments: Vec<u64>,
}

impl SegmentPlan {
    pub fn segments(&self) -> &[u64] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn sum(&self) -> u64 {
        self.segments.iter().sum()
    }
}

impl IntoIterator for SegmentPlan {
    type Item = u64;
    type IntoIter = std::vec::IntoIter<u64>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

/// Splits `[0, span]` into `count` randomly sized segments.
///
/// `span` is always a cut point; the other `count - 1` are drawn without
/// replacement from `[0, span)`, in memory proportional to `count`. The
/// plan is the sequence of gaps between consecutive sorted cut points,
/// starting from 0, so it has exactly `count` elements and sums to `span`.
/// A segment may be 0 when 0 itself is drawn.
///
/// Draws are uniform; no attempt is made to balance the margins.
pub fn partition<R: Rng + ?Sized>(
    span: u64,
    count: usize,
    rng: &mut R,
) -> Result<SegmentPlan, PartitionError> {
    if span == 0 || count == 0 || count as u64 > span.saturating_add(1) {
        return Err(PartitionError::Precondition { span, count });
    }

    let mut cuts: Vec<u64> = sample_distinct(span, count as u64 - 1, rng)
        .into_iter()
        .collect();
    cuts.push(span);

    let mut previous = 0;
    let segments = cuts
        .into_iter()
        .map(|cut| {
            let gap = cut - previous;
            previous = cut;
            gap
        })
        .collect();

    Ok(SegmentPlan { segments })
}

/// `amount` distinct values from `[0, upper)`, in ascending order.
///
/// Floyd's sampling: memory grows with `amount`, never with `upper`.
fn sample_distinct<R: Rng + ?Sized>(upper: u64, amount: u64, rng: &mut R) -> BTreeSet<u64> {
    let mut picked = BTreeSet::new();
    for j in upper - amount..upper {
        let t = rng.gen_range(0..=j);
        if !picked.insert(t) {
            picked.insert(j);
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn single_call_waits_the_whole_span() {
        for seed in 0..20 {
            let plan = partition(10, 1, &mut StdRng::seed_from_u64(seed)).unwrap();
            assert_eq!(plan.segments(), &[10]);
        }
    }

    #[test]
    fn every_point_cut_gives_unit_gaps_after_an_immediate_start() {
        let plan = partition(7, 8, &mut StdRng::seed_from_u64(1)).unwrap();
        assert_eq!(plan.len(), 8);
        assert_eq!(plan.segments(), &[0, 1, 1, 1, 1, 1, 1, 1]);
        assert_eq!(plan.sum(), 7);
    }

    #[test]
    fn rejects_invalid_arguments() {
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(
            partition(0, 1, &mut rng),
            Err(PartitionError::Precondition { span: 0, count: 1 })
        );
        assert!(partition(10, 0, &mut rng).is_err());
        assert!(partition(10, 12, &mut rng).is_err());
        assert!(partition(10, 11, &mut rng).is_ok());
    }

    #[test]
    fn huge_spans_only_cost_the_call_count() {
        let mut rng = StdRng::seed_from_u64(1);

        let plan = partition(u64::MAX, 3, &mut rng).unwrap();
        assert_eq!(plan.len(), 3);
        assert_eq!(plan.sum(), u64::MAX);

        let plan = partition(1_000_000_000_000, 2, &mut rng).unwrap();
        assert_eq!(plan.len(), 2);
        assert_eq!(plan.sum(), 1_000_000_000_000);

        assert_eq!(partition(u64::MAX, 1, &mut rng).unwrap().segments(), &[u64::MAX]);
    }

    #[test]
    fn sampled_cut_points_are_distinct_and_in_range() {
        let mut rng = StdRng::seed_from_u64(3);
        let picked = sample_distinct(10, 10, &mut rng);
        assert_eq!(picked.into_iter().collect::<Vec<_>>(), (0..10).collect::<Vec<_>>());

        let picked = sample_distinct(50, 7, &mut rng);
        assert_eq!(picked.len(), 7);
        assert!(picked.iter().all(|&v| v < 50));
    }

    #[test]
    fn same_seed_same_plan() {
        let a = partition(100, 10, &mut StdRng::seed_from_u64(12345)).unwrap();
        let b = partition(100, 10, &mut StdRng::seed_from_u64(12345)).unwrap();
        assert_eq!(a, b);
    }
}
