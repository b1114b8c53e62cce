//! Merge rules: override precedence, conflict handling.
//!
//! Combines two mapping trees into one. The overlay wins on any key present
//! in both; when both sides hold mappings the win is recursive, so the
//! deepest differing leaf from the overlay takes effect rather than the
//! whole subtree being replaced. The merge is pure: both inputs are left
//! untouched and a new tree is returned.

use crate::value::{Mapping, Value};

/// Deep-merge `overlay` on top of `base`, returning the combined mapping.
///
/// Rules, per key of `overlay`:
/// - both sides mappings: merged recursively
/// - base side missing or not a mapping while the overlay side is one: the
///   base value is dropped entirely and the overlay subtree is taken as-is
/// - overlay side is a scalar or sequence: full overwrite, sequences are
///   never merged element-wise
///
/// Keys present only in `base` are preserved unchanged. This function is
/// total; there is no failure case.
pub fn merge(base: &Mapping, overlay: &Mapping) -> Mapping {
    let mut merged = base.clone();

    for (key, incoming) in overlay {
        match (merged.get(key), incoming) {
            (Some(Value::Mapping(existing)), Value::Mapping(subtree)) => {
                merged.insert(key.clone(), Value::Mapping(merge(existing, subtree)));
            }
            (_, Value::Mapping(subtree)) => {
                merged.insert(key.clone(), Value::Mapping(merge(&Mapping::new(), subtree)));
            }
            _ => {
                merged.insert(key.clone(), incoming.clone());
            }
        }
    }

    merged
}
