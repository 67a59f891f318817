use log::trace;

use crate::errors::{CompileError, CompileResult};
use crate::models::{Priority, PropertyRecord, SortKey};

/// Parses a record's priority tier
pub fn parse_priority(record: &PropertyRecord) -> CompileResult<Priority> {
    record
        .priority
        .parse::<Priority>()
        .map_err(|priority| CompileError::UnknownPriorityTier {
            name: record.name.clone(),
            priority,
        })
}

/// Builds one sort key per record, in input order
pub fn build_sort_keys(records: &[PropertyRecord]) -> CompileResult<Vec<SortKey>> {
    records
        .iter()
        .map(|record| -> CompileResult<SortKey> {
            let key = SortKey::new(parse_priority(record)?.rank(), &record.name);
            trace!("Sort key for {}: {}", record.name, key);
            Ok(key)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ranks_follow_priority_table() {
        let records = vec![
            PropertyRecord::new("color", "Low"),
            PropertyRecord::new("transition", "Animation"),
            PropertyRecord::new("direction", "High"),
        ];
        let keys = build_sort_keys(&records).unwrap();
        let ranks: Vec<u8> = keys.iter().map(|key| key.rank).collect();
        assert_eq!(ranks, vec![2, 0, 1]);
    }

    #[test]
    fn strips_a_single_leading_dash() {
        let records = vec![
            PropertyRecord::new("-webkit-appearance", "Low"),
            PropertyRecord::new("--weird", "Low"),
        ];
        let keys = build_sort_keys(&records).unwrap();
        assert_eq!(keys[0].comparison_name, "webkit-appearance");
        assert_eq!(keys[1].comparison_name, "-weird");
    }

    #[test]
    fn rejects_unknown_tier() {
        let records = vec![PropertyRecord::new("zoom", "Medium")];
        match build_sort_keys(&records) {
            Err(CompileError::UnknownPriorityTier { name, priority }) => {
                assert_eq!(name, "zoom");
                assert_eq!(priority, "Medium");
            }
            other => panic!("expected UnknownPriorityTier, got {:?}", other),
        }
    }
}
