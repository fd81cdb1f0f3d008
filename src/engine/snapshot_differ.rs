// ==========================================
// Parts Inventory - Snapshot differencer
// ==========================================
// Computes which current entries changed since the last captured
// snapshot; feeds the YES/NO changed flag in exported reports.
// ==========================================

use crate::domain::entry::Entry;
use std::collections::HashMap;

/// What counts as a change.
///
/// Floor/storage counts and product name always participate. Category
/// reassignment is a configurable rule (`diff_include_category` in
/// config_kv); it defaults off to match historical report behavior.
#[derive(Debug, Clone, Copy, Default)]
pub struct DiffPolicy {
    pub include_category: bool,
}

/// Return the subset of `current` changed relative to `snapshot`, in input
/// order.
///
/// An empty snapshot means no export was ever recorded: every entry is
/// changed. Item numbers match case-insensitively, the same key policy the
/// upsert reconciler uses.
pub fn diff(current: &[Entry], snapshot: &[Entry], policy: DiffPolicy) -> Vec<Entry> {
    if snapshot.is_empty() {
        return current.to_vec();
    }

    let baseline: HashMap<String, &Entry> = snapshot
        .iter()
        .map(|entry| (entry.item_key(), entry))
        .collect();

    current
        .iter()
        .filter(|entry| match baseline.get(&entry.item_key()) {
            None => true,
            Some(prior) => {
                entry.floor_count() != prior.floor_count()
                    || entry.storage_count() != prior.storage_count()
                    || entry.product_name != prior.product_name
                    || (policy.include_category && entry.category != prior.category)
            }
        })
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(item: &str, floor: u32, storage: u32) -> Entry {
        Entry::new(item, None, floor, storage, "oil-filters")
    }

    #[test]
    fn test_empty_snapshot_marks_everything_changed() {
        let current = vec![entry("A-1", 1, 0), entry("B-2", 2, 0), entry("C-3", 3, 0)];
        let changed = diff(&current, &[], DiffPolicy::default());

        assert_eq!(changed.len(), 3);
        let items: Vec<&str> = changed.iter().map(|e| e.item_number.as_str()).collect();
        assert_eq!(items, vec!["A-1", "B-2", "C-3"]);
    }

    #[test]
    fn test_unchanged_entries_excluded() {
        let snapshot = vec![entry("A-1", 1, 2)];
        let current = vec![entry("A-1", 1, 2)];
        assert!(diff(&current, &snapshot, DiffPolicy::default()).is_empty());
    }

    #[test]
    fn test_count_change_detected() {
        let snapshot = vec![entry("A-1", 1, 2)];
        let current = vec![entry("A-1", 1, 3)];
        assert_eq!(diff(&current, &snapshot, DiffPolicy::default()).len(), 1);
    }

    #[test]
    fn test_product_name_change_detected() {
        let snapshot = vec![Entry::new("A-1", Some("Old".into()), 1, 1, "oil-filters")];
        let current = vec![Entry::new("A-1", Some("New".into()), 1, 1, "oil-filters")];
        assert_eq!(diff(&current, &snapshot, DiffPolicy::default()).len(), 1);
    }

    #[test]
    fn test_new_entry_detected() {
        let snapshot = vec![entry("A-1", 1, 1)];
        let current = vec![entry("A-1", 1, 1), entry("B-2", 0, 0)];
        let changed = diff(&current, &snapshot, DiffPolicy::default());
        assert_eq!(changed.len(), 1);
        assert_eq!(changed[0].item_number, "B-2");
    }

    #[test]
    fn test_item_match_is_case_insensitive() {
        // Deliberate policy: the differ matches keys like the upsert
        // reconciler does, not by exact string equality.
        let snapshot = vec![entry("OIL-001", 1, 1)];
        let current = vec![entry("oil-001", 1, 1)];
        assert!(diff(&current, &snapshot, DiffPolicy::default()).is_empty());
    }

    #[test]
    fn test_category_change_ignored_by_default() {
        let snapshot = vec![Entry::new("A-1", None, 1, 1, "oil-filters")];
        let current = vec![Entry::new("A-1", None, 1, 1, "air-filters")];
        assert!(diff(&current, &snapshot, DiffPolicy::default()).is_empty());
    }

    #[test]
    fn test_category_change_detected_when_enabled() {
        let snapshot = vec![Entry::new("A-1", None, 1, 1, "oil-filters")];
        let current = vec![Entry::new("A-1", None, 1, 1, "air-filters")];
        let policy = DiffPolicy {
            include_category: true,
        };
        assert_eq!(diff(&current, &snapshot, policy).len(), 1);
    }

    #[test]
    fn test_output_preserves_current_order() {
        let snapshot = vec![entry("B-2", 1, 1)];
        let current = vec![entry("C-3", 0, 0), entry("B-2", 9, 9), entry("A-1", 0, 0)];
        let changed = diff(&current, &snapshot, DiffPolicy::default());
        let items: Vec<&str> = changed.iter().map(|e| e.item_number.as_str()).collect();
        assert_eq!(items, vec!["C-3", "B-2", "A-1"]);
    }
}
