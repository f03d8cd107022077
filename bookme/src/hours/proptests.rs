//! Property-based tests for the `Hour` and `HourRange` types.

use super::HourRange;
use proptest::prelude::*;

// Strategy for generating valid half-open hour ranges
fn range_strategy() -> impl Strategy<Value = HourRange> {
    (0u8..23).prop_flat_map(|start| {
        ((start + 1)..=23).prop_map(move |end| HourRange::from_hours(start, end).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 10000,
        .. ProptestConfig::default()
    })]

    // Overlap is symmetric
    #[test]
    fn overlap_symmetric(a in range_strategy(), b in range_strategy()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    // A range always overlaps itself
    #[test]
    fn overlap_reflexive(a in range_strategy()) {
        prop_assert!(a.overlaps(&a));
    }

    // Overlap agrees with shared-hour membership
    #[test]
    fn overlap_iff_shared_hour(a in range_strategy(), b in range_strategy()) {
        let shares_hour = a.hours().any(|h| b.contains(h));
        prop_assert_eq!(a.overlaps(&b), shares_hour);
    }

    // Touching ranges never overlap
    #[test]
    fn touching_never_overlaps(a in range_strategy()) {
        let end = a.end().value();
        if end < 23 {
            let next = HourRange::from_hours(end, end + 1).unwrap();
            prop_assert!(!a.overlaps(&next));
        }
    }

    // Length matches the number of iterated hours
    #[test]
    fn len_matches_hours(a in range_strategy()) {
        prop_assert_eq!(usize::from(a.len()), a.hours().count());
    }

    // Serialization round-trips
    #[test]
    fn serde_round_trip(a in range_strategy()) {
        let json = serde_json::to_string(&a).unwrap();
        let parsed: HourRange = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(parsed, a);
    }
}
