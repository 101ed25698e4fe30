//! Position differ
//!
//! Compares two feature bundles and keeps only what changed going forward:
//!
//! - A leaf (number, boolean, label) is kept when its value differs
//! - A record is kept when its own diff is non-empty, and only the changed
//!   entries are kept inside it
//! - A key that exists only in `after` is kept verbatim
//! - A key that exists only in `before` is dropped
//!
//! `diff(b, b)` is always empty.

use indexmap::IndexMap;

use crate::bundle::{FeatureBundle, FeatureValue};

/// A feature bundle pruned to the entries that changed
pub type Diff = FeatureBundle;

pub fn diff(before: &FeatureBundle, after: &FeatureBundle) -> Diff {
    FeatureBundle::from_map(diff_maps(before.as_map(), after.as_map()))
}

fn diff_maps(
    before: &IndexMap<String, FeatureValue>,
    after: &IndexMap<String, FeatureValue>,
) -> IndexMap<String, FeatureValue> {
    let mut changed = IndexMap::new();
    for (key, new) in after {
        let Some(old) = before.get(key) else {
            changed.insert(key.clone(), new.clone());
            continue;
        };
        match (old, new) {
            (FeatureValue::Record(old), FeatureValue::Record(new)) => {
                let nested = diff_maps(old, new);
                if !nested.is_empty() {
                    changed.insert(key.clone(), FeatureValue::Record(nested));
                }
            }
            _ if old != new => {
                changed.insert(key.clone(), new.clone());
            }
            _ => {}
        }
    }
    changed
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bundle(entries: &[(&str, FeatureValue)]) -> FeatureBundle {
        let mut b = FeatureBundle::new();
        for (k, v) in entries {
            b.insert(*k, v.clone());
        }
        b
    }

    #[test]
    fn test_identical_bundles_diff_empty() {
        let b = bundle(&[
            ("mobility", 20u32.into()),
            ("material", FeatureValue::per_color(39u32, 39u32)),
        ]);
        assert!(diff(&b, &b).is_empty());
    }

    #[test]
    fn test_nested_records_keep_only_changed_leaves() {
        let before = bundle(&[(
            "pawn_structure",
            FeatureValue::per_color(
                FeatureValue::record([("doubled", 0u32), ("passed", 1)]),
                FeatureValue::record([("doubled", 0u32), ("passed", 0)]),
            ),
        )]);
        let after = bundle(&[(
            "pawn_structure",
            FeatureValue::per_color(
                FeatureValue::record([("doubled", 1u32), ("passed", 1)]),
                FeatureValue::record([("doubled", 0u32), ("passed", 0)]),
            ),
        )]);
        let d = diff(&before, &after);
        assert_eq!(d.keys().collect::<Vec<_>>(), ["pawn_structure"]);
        assert_eq!(
            d.get("pawn_structure"),
            Some(&FeatureValue::record([(
                "white",
                FeatureValue::record([("doubled", 1u32)])
            )]))
        );
    }

    #[test]
    fn test_asymmetric_key_handling() {
        let before = bundle(&[("old_only", 1u32.into()), ("shared", 1u32.into())]);
        let after = bundle(&[("shared", 1u32.into()), ("new_only", "x".into())]);
        let d = diff(&before, &after);
        assert_eq!(d.keys().collect::<Vec<_>>(), ["new_only"]);
        assert_eq!(d.get("new_only"), Some(&FeatureValue::from("x")));
    }

    #[test]
    fn test_leaf_type_change_reports_new_value() {
        let before = bundle(&[("engine", 12u32.into())]);
        let after = bundle(&[("engine", FeatureValue::record([("mate", 3u32)]))]);
        let d = diff(&before, &after);
        assert_eq!(d.get("engine"), after.get("engine"));
    }
}
