//! Property tests for region label computation.

use std::collections::HashSet;

use proptest::prelude::*;

use venndraw::{
    Fill, VennError, compute_regions, get_labels, get_labels_for,
    region::{CombinationKey, SetCount},
};

fn collections() -> impl Strategy<Value = Vec<Vec<u8>>> {
    (2usize..=4).prop_flat_map(|n| prop::collection::vec(prop::collection::vec(0u8..24, 0..16), n))
}

proptest! {
    #[test]
    fn every_key_has_a_label(data in collections()) {
        let set_count = SetCount::try_from(data.len()).unwrap();
        let labels = get_labels(data, &Fill::default()).unwrap();

        prop_assert_eq!(labels.len(), set_count.region_count());
        let keys: Vec<CombinationKey> = labels.iter().map(|(key, _)| key).collect();
        prop_assert_eq!(keys, set_count.keys().collect::<Vec<_>>());
    }

    #[test]
    fn region_sizes_sum_to_union(data in collections()) {
        let union: HashSet<u8> = data.iter().flatten().copied().collect();
        let regions = compute_regions(data).unwrap();

        let total: usize = regions.iter().map(|(_, elements)| elements.len()).sum();
        prop_assert_eq!(total, union.len());
        prop_assert_eq!(regions.union_len(), union.len());
    }

    #[test]
    fn regions_satisfy_inclusion_exclusion(data in collections()) {
        let sets: Vec<HashSet<u8>> = data.iter().map(|c| c.iter().copied().collect()).collect();
        let regions = compute_regions(data).unwrap();

        for (index, set) in sets.iter().enumerate() {
            let only = regions
                .iter()
                .find(|(key, _)| key.contains(index) && key.degree() == 1)
                .map(|(_, elements)| elements.len())
                .unwrap();
            let shared: usize = regions
                .iter()
                .filter(|(key, _)| key.contains(index) && key.degree() > 1)
                .map(|(_, elements)| elements.len())
                .sum();
            prop_assert_eq!(only, set.len() - shared);
        }
    }

    #[test]
    fn labels_are_idempotent(data in collections()) {
        let first = get_labels(data.clone(), &Fill::default()).unwrap();
        let second = get_labels(data, &Fill::default()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn empty_input_empties_its_regions(mut data in collections(), pick in 0usize..4) {
        let empty = pick % data.len();
        data[empty].clear();
        let regions = compute_regions(data).unwrap();

        for (key, elements) in regions.iter() {
            if key.contains(empty) {
                prop_assert!(elements.is_empty(), "region {} should be empty", key);
            }
        }
    }

    #[test]
    fn mismatched_set_count_is_rejected(data in collections()) {
        let wrong = SetCount::ALL
            .into_iter()
            .find(|set_count| set_count.get() != data.len())
            .unwrap();
        let result = get_labels_for(wrong, data, &Fill::default());
        prop_assert!(matches!(result, Err(VennError::InvalidArgument(_))));
    }
}

#[test]
fn two_set_scenario() {
    let regions = compute_regions([vec![1, 2, 3], vec![2, 3, 4]]).unwrap();
    let key = |s: &str| s.parse::<CombinationKey>().unwrap();

    assert_eq!(regions.get(key("10")), Some(&HashSet::from([1])));
    assert_eq!(regions.get(key("01")), Some(&HashSet::from([4])));
    assert_eq!(regions.get(key("11")), Some(&HashSet::from([2, 3])));
}
