// ==========================================
// Parts Inventory - Export API
// ==========================================
// Generates the count report with a YES/NO changed flag per entry and
// captures a fresh snapshot so the next export diffs against this one.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::snapshot::Snapshot;
use crate::engine::snapshot_differ::{diff, DiffPolicy};
use crate::repository::{InventoryStore, SqliteInventoryStore};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use tracing::info;

/// Result of one export run. The CSV text is handed back to the caller;
/// file writing and sharing stay outside this crate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportReport {
    pub snapshot_id: String,
    pub total_entries: usize,
    pub changed_entries: usize,
    pub csv: String,
}

pub struct ExportApi {
    db_path: String,
}

impl ExportApi {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    /// Export all entries as CSV, flagging each row changed-since-snapshot,
    /// then capture the new snapshot.
    pub async fn export_changed_report(&self) -> ApiResult<ExportReport> {
        let store = SqliteInventoryStore::new(&self.db_path)?;
        let config = ConfigManager::new(&self.db_path)?;
        let policy = DiffPolicy {
            include_category: config.diff_include_category()?,
        };

        let current = store.list_entries().await?;
        let baseline = store
            .latest_snapshot()
            .await?
            .map(|s| s.entries)
            .unwrap_or_default();

        let changed = diff(&current, &baseline, policy);
        let changed_keys: HashSet<String> = changed.iter().map(|e| e.item_key()).collect();

        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record([
                "Item Number",
                "Product Name",
                "Floor Count",
                "Storage Count",
                "Total Count",
                "Category",
                "Changed",
            ])
            .map_err(|e| ApiError::InternalError(e.to_string()))?;

        for entry in &current {
            let flag = if changed_keys.contains(&entry.item_key()) {
                "YES"
            } else {
                "NO"
            };
            writer
                .write_record([
                    entry.item_number.as_str(),
                    entry.product_name.as_deref().unwrap_or(""),
                    &entry.floor_count().to_string(),
                    &entry.storage_count().to_string(),
                    &entry.total_count().to_string(),
                    entry.category.as_str(),
                    flag,
                ])
                .map_err(|e| ApiError::InternalError(e.to_string()))?;
        }

        let csv = String::from_utf8(
            writer
                .into_inner()
                .map_err(|e| ApiError::InternalError(e.to_string()))?,
        )
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

        let snapshot = Snapshot::capture(current.clone());
        let snapshot_id = snapshot.snapshot_id.clone();
        store.insert_snapshot(snapshot).await?;

        info!(
            snapshot_id = %snapshot_id,
            total = current.len(),
            changed = changed.len(),
            "export complete"
        );

        Ok(ExportReport {
            snapshot_id,
            total_entries: current.len(),
            changed_entries: changed.len(),
            csv,
        })
    }
}
