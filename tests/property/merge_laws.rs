//! Property-based tests for the merge precedence laws

use proptest::prelude::*;
use strata::{merge, Mapping, Value};

/// Strategy for arbitrary configuration trees.
///
/// Floats are excluded so structural equality is reliable under proptest's
/// generated inputs (NaN is never equal to itself).
fn value_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::Integer),
        "[a-z]{0,6}".prop_map(Value::String),
    ];

    leaf.prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Sequence),
            prop::collection::btree_map("[a-z]{1,3}", inner, 0..4).prop_map(Value::Mapping),
        ]
    })
}

fn mapping_strategy() -> impl Strategy<Value = Mapping> {
    prop::collection::btree_map("[a-z]{1,3}", value_strategy(), 0..5)
}

/// Walk every leaf path of `overlay` (descending only through mappings) and
/// assert `merged` holds the overlay's value there.
fn assert_overlay_leaves_win(merged: &Mapping, overlay: &Mapping) {
    for (key, overlay_value) in overlay {
        match overlay_value {
            Value::Mapping(inner) => {
                let merged_inner = merged
                    .get(key)
                    .and_then(Value::as_mapping)
                    .unwrap_or_else(|| panic!("overlay mapping at '{}' lost in merge", key));
                assert_overlay_leaves_win(merged_inner, inner);
            }
            leaf => assert_eq!(merged.get(key), Some(leaf)),
        }
    }
}

/// Test that keys present only in the base survive a merge unchanged
#[test]
fn test_base_key_preservation_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(mapping_strategy(), mapping_strategy()),
            |(base, overlay)| {
                let merged = merge(&base, &overlay);

                for (key, base_value) in &base {
                    if !overlay.contains_key(key) {
                        assert_eq!(merged.get(key), Some(base_value));
                    }
                }

                Ok(())
            },
        )
        .unwrap();
}

/// Test that every overlay leaf path wins over the base
#[test]
fn test_overlay_leaf_wins_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(mapping_strategy(), mapping_strategy()),
            |(base, overlay)| {
                let merged = merge(&base, &overlay);
                assert_overlay_leaves_win(&merged, &overlay);
                Ok(())
            },
        )
        .unwrap();
}

/// Test that merging the same overlay twice changes nothing
#[test]
fn test_merge_idempotence_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(mapping_strategy(), mapping_strategy()),
            |(base, overlay)| {
                let once = merge(&base, &overlay);
                let twice = merge(&once, &overlay);
                assert_eq!(once, twice);
                Ok(())
            },
        )
        .unwrap();
}

/// Test the empty-mapping identities on both sides
#[test]
fn test_merge_identity_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(&mapping_strategy(), |tree| {
            assert_eq!(merge(&tree, &Mapping::new()), tree);
            assert_eq!(merge(&Mapping::new(), &tree), tree);
            Ok(())
        })
        .unwrap();
}

/// Test that merged keys are exactly the union of both key sets, per level
#[test]
fn test_merged_key_union_property() {
    let mut runner = proptest::test_runner::TestRunner::default();

    runner
        .run(
            &(mapping_strategy(), mapping_strategy()),
            |(base, overlay)| {
                let merged = merge(&base, &overlay);

                for key in merged.keys() {
                    assert!(base.contains_key(key) || overlay.contains_key(key));
                }
                for key in base.keys().chain(overlay.keys()) {
                    assert!(merged.contains_key(key));
                }

                Ok(())
            },
        )
        .unwrap();
}
