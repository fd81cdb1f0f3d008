// ==========================================
// Parts Inventory - Bulk upsert reconciler
// ==========================================
// Classifies an incoming batch as new vs updating-existing and produces
// the merged entry set. Full-replace upsert keyed by lowercased item
// number; sequence positions of existing entries are preserved.
// ==========================================

use crate::domain::entry::Entry;
use std::collections::HashMap;

/// Result of reconciling one incoming batch.
#[derive(Debug, Clone)]
pub struct ReconcileOutcome {
    pub merged: Vec<Entry>,
    pub new_count: usize,
    pub updated_count: usize,
}

/// Merge `incoming` into `existing`.
///
/// A matching item number (case-insensitive) replaces the existing entry in
/// place, every field included; non-matching entries append in batch order.
/// Two incoming rows with the same item number resolve last-write-wins,
/// since replacement is unconditional and rows are processed in order.
pub fn reconcile(existing: &[Entry], incoming: Vec<Entry>) -> ReconcileOutcome {
    let mut merged: Vec<Entry> = existing.to_vec();
    let mut index: HashMap<String, usize> = merged
        .iter()
        .enumerate()
        .map(|(pos, entry)| (entry.item_key(), pos))
        .collect();

    let mut new_count = 0;
    let mut updated_count = 0;

    for entry in incoming {
        let key = entry.item_key();
        match index.get(&key) {
            Some(&pos) => {
                merged[pos] = entry;
                updated_count += 1;
            }
            None => {
                index.insert(key, merged.len());
                merged.push(entry);
                new_count += 1;
            }
        }
    }

    ReconcileOutcome {
        merged,
        new_count,
        updated_count,
    }
}
