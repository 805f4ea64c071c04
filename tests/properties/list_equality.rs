//! Property tests for list-valued fields.

use proptest::prelude::*;
use serde_json::json;

use netrecon::{Entity, EntityKind, EntityReport, FieldDetail, Reconciler, Source};

const LABELS: [&str; 3] = ["Inventory", "MonitoringTool", "Netbox"];

fn cidr_list() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop::sample::select(vec!["10.1.0.0/16", "10.2.0.0/16", "10.3.0.0/16"]).prop_map(String::from),
        0..5,
    )
}

/// Lists for Truth plus sources, and a permutation of one of them
fn lists_with_permutation() -> impl Strategy<Value = (Vec<Vec<String>>, usize, Vec<String>)> {
    prop::collection::vec(cidr_list(), 2..=4).prop_flat_map(|lists| {
        let len = lists.len();
        (Just(lists), 0..len).prop_flat_map(|(lists, index)| {
            let permuted = Just(lists[index].clone()).prop_shuffle();
            (Just(lists), Just(index), permuted)
        })
    })
}

fn entity(lists: &[Vec<String>]) -> Entity {
    let record = |cidrs: &Vec<String>| {
        serde_json::from_value(json!({ "name": "pods", "type": "cidr", "cidrs": cidrs })).unwrap()
    };
    let mut entity = Entity::new(EntityKind::Cluster, "c1").with_networks(vec![record(&lists[0])]);
    for (label, cidrs) in LABELS.iter().zip(&lists[1..]) {
        entity = entity.with_source(*label, Source::new(vec![record(cidrs)]));
    }
    entity
}

/// Which sources ended up together, ignoring the canonical value shown
fn classification(report: &EntityReport) -> Vec<(String, Vec<Vec<String>>)> {
    report
        .inconsistencies
        .iter()
        .flat_map(|e| &e.details)
        .map(|detail| match detail {
            FieldDetail::Mismatch { field, values, .. } => (
                field.clone(),
                values.iter().map(|class| class.sources.clone()).collect(),
            ),
            FieldDetail::Missing { field, missing_sources, .. } => {
                (field.clone(), vec![missing_sources.clone()])
            }
        })
        .collect()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: permuting one source's list never changes the classification.
    #[test]
    fn property_list_order_independence((lists, index, permuted) in lists_with_permutation()) {
        let mut shuffled = lists.clone();
        shuffled[index] = permuted;

        let reconciler = Reconciler::default();
        let original = reconciler.reconcile(&entity(&lists)).unwrap();
        let reordered = reconciler.reconcile(&entity(&shuffled)).unwrap();
        prop_assert_eq!(classification(&original), classification(&reordered));
    }

    /// PROPERTY: dropping a duplicate element changes the multiset and is a mismatch.
    #[test]
    fn property_dropping_duplicate_is_a_mismatch(list in cidr_list().prop_filter("non-empty", |l| !l.is_empty())) {
        let mut with_duplicate = list.clone();
        with_duplicate.push(list[0].clone());

        let report = Reconciler::default()
            .reconcile(&entity(&[with_duplicate, list]))
            .unwrap();
        prop_assert_eq!(report.mismatch_count(), 1);
    }
}
