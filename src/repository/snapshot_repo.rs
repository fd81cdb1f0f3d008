// ==========================================
// Parts Inventory - Snapshot repository
// ==========================================
// Snapshots are append-only; rows are never updated after capture.
// ==========================================

use crate::domain::entry::Entry;
use crate::domain::snapshot::Snapshot;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct SnapshotRepository {
    conn: Arc<Mutex<Connection>>,
}

impl SnapshotRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Persist one captured snapshot with its entries, transactionally.
    pub fn insert(&self, snapshot: &Snapshot) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute(
            "INSERT INTO snapshot (snapshot_id, captured_at) VALUES (?1, ?2)",
            params![snapshot.snapshot_id, snapshot.captured_at.to_rfc3339()],
        )?;

        for (position, entry) in snapshot.entries.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO snapshot_entry (
                    snapshot_id, position, id, item_number, product_name,
                    floor_count, storage_count, category_id
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
                params![
                    snapshot.snapshot_id,
                    position as i64,
                    entry.id,
                    entry.item_number,
                    entry.product_name,
                    entry.floor_count(),
                    entry.storage_count(),
                    entry.category,
                ],
            )?;
        }

        tx.commit()?;
        Ok(())
    }

    /// The most recently captured snapshot, or None before any export.
    pub fn latest(&self) -> RepositoryResult<Option<Snapshot>> {
        let conn = self.get_conn()?;

        let head = conn
            .query_row(
                "SELECT snapshot_id, captured_at FROM snapshot ORDER BY captured_at DESC, rowid DESC LIMIT 1",
                [],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, String>(1)?,
                    ))
                },
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        let (snapshot_id, captured_at_raw) = match head {
            Some(pair) => pair,
            None => return Ok(None),
        };

        let captured_at = DateTime::parse_from_rfc3339(&captured_at_raw)
            .map(|dt| dt.with_timezone(&Utc))
            .map_err(|e| {
                RepositoryError::ValidationError(format!(
                    "snapshot {snapshot_id} has invalid captured_at: {e}"
                ))
            })?;

        let mut stmt = conn.prepare(
            r#"
            SELECT id, item_number, product_name, floor_count, storage_count, category_id
            FROM snapshot_entry
            WHERE snapshot_id = ?1
            ORDER BY position
            "#,
        )?;

        let entries = stmt
            .query_map(params![snapshot_id], |row| {
                Ok(Entry::with_id(
                    row.get::<_, String>(0)?,
                    row.get::<_, String>(1)?,
                    row.get::<_, Option<String>>(2)?,
                    row.get::<_, u32>(3)?,
                    row.get::<_, u32>(4)?,
                    row.get::<_, String>(5)?,
                ))
            })?
            .collect::<SqliteResult<Vec<Entry>>>()?;

        Ok(Some(Snapshot {
            snapshot_id,
            captured_at,
            entries,
        }))
    }
}
