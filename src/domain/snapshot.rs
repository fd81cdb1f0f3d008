// ==========================================
// Parts Inventory - Snapshot domain model
// ==========================================
// Immutable point-in-time copy of all entries, keyed by capture time.
// Used only for change detection; never mutated after creation.
// ==========================================

use crate::domain::entry::Entry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub snapshot_id: String,
    pub captured_at: DateTime<Utc>,
    pub entries: Vec<Entry>,
}

impl Snapshot {
    /// Capture the given entries as-of now.
    pub fn capture(entries: Vec<Entry>) -> Self {
        Self {
            snapshot_id: Uuid::new_v4().to_string(),
            captured_at: Utc::now(),
            entries,
        }
    }
}

/// Summary of one import run, persisted for audit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportBatch {
    pub batch_id: String,
    pub file_name: Option<String>,
    pub total_rows: i32,
    pub new_rows: i32,
    pub updated_rows: i32,
    pub error_rows: i32,
    pub imported_at: DateTime<Utc>,
    pub elapsed_ms: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capture_assigns_id_and_time() {
        let snap = Snapshot::capture(vec![]);
        assert!(!snap.snapshot_id.is_empty());
        assert!(snap.entries.is_empty());
    }
}
