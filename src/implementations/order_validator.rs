use std::collections::HashMap;

use log::debug;

use crate::errors::{CompileError, CompileResult};
use crate::models::{PropertyRecord, SortKey};

/// Fails if two records share a sort key; equal keys would leave their
/// relative order up to input order.
pub fn check_unique_keys(records: &[PropertyRecord], keys: &[SortKey]) -> CompileResult<()> {
    let mut seen: HashMap<&SortKey, usize> = HashMap::with_capacity(keys.len());
    for (index, key) in keys.iter().enumerate() {
        if let Some(&previous) = seen.get(key) {
            return Err(CompileError::OrderCollision {
                first: records[previous].name.clone(),
                second: records[index].name.clone(),
            });
        }
        seen.insert(key, index);
    }
    Ok(())
}

/// Validates the keys and returns the records sorted by them.
///
/// The sort is stable, so records with equal keys keep their input order.
pub fn sort_records(
    records: Vec<PropertyRecord>,
    keys: Vec<SortKey>,
) -> CompileResult<Vec<PropertyRecord>> {
    check_unique_keys(&records, &keys)?;

    let mut keyed: Vec<(SortKey, PropertyRecord)> = keys.into_iter().zip(records).collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    debug!("Sorted {} records by priority and name", keyed.len());

    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::implementations::key_builder::build_sort_keys;

    fn names(records: &[PropertyRecord]) -> Vec<&str> {
        records.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn sorts_by_rank_then_name() {
        let records = vec![
            PropertyRecord::new("width", "Low"),
            PropertyRecord::new("color", "High"),
            PropertyRecord::new("animation-name", "Animation"),
            PropertyRecord::new("-webkit-box-flex", "Low"),
        ];
        let keys = build_sort_keys(&records).unwrap();
        let sorted = sort_records(records, keys).unwrap();
        assert_eq!(
            names(&sorted),
            vec!["animation-name", "color", "-webkit-box-flex", "width"]
        );
    }

    #[test]
    fn dashed_name_compares_without_dash() {
        let records = vec![
            PropertyRecord::new("-zzz", "High"),
            PropertyRecord::new("aaa", "High"),
        ];
        let keys = build_sort_keys(&records).unwrap();
        let sorted = sort_records(records, keys).unwrap();
        assert_eq!(names(&sorted), vec!["aaa", "-zzz"]);
    }

    #[test]
    fn dashed_and_plain_name_collide_in_same_tier() {
        let records = vec![
            PropertyRecord::new("foo", "Low"),
            PropertyRecord::new("bar", "Low"),
            PropertyRecord::new("-foo", "Low"),
        ];
        let keys = build_sort_keys(&records).unwrap();
        match sort_records(records, keys) {
            Err(CompileError::OrderCollision { first, second }) => {
                assert_eq!(first, "foo");
                assert_eq!(second, "-foo");
            }
            other => panic!("expected OrderCollision, got {:?}", other),
        }
    }

    #[test]
    fn same_name_in_different_tiers_is_not_a_collision() {
        let records = vec![
            PropertyRecord::new("foo", "Low"),
            PropertyRecord::new("-foo", "High"),
        ];
        let keys = build_sort_keys(&records).unwrap();
        let sorted = sort_records(records, keys).unwrap();
        assert_eq!(names(&sorted), vec!["-foo", "foo"]);
    }
}
