// ==========================================
// Parts Inventory - Import batch repository
// ==========================================
// Audit trail: one row per import run.
// ==========================================

use crate::domain::snapshot::ImportBatch;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct ImportBatchRepository {
    conn: Arc<Mutex<Connection>>,
}

impl ImportBatchRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    pub fn insert(&self, batch: &ImportBatch) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            r#"
            INSERT INTO import_batch (
                batch_id, file_name, total_rows, new_rows, updated_rows,
                error_rows, imported_at, elapsed_ms
            ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
            params![
                batch.batch_id,
                batch.file_name,
                batch.total_rows,
                batch.new_rows,
                batch.updated_rows,
                batch.error_rows,
                batch.imported_at.to_rfc3339(),
                batch.elapsed_ms,
            ],
        )?;
        Ok(())
    }

    /// Recent batches, newest first.
    pub fn list_recent(&self, limit: usize) -> RepositoryResult<Vec<ImportBatch>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT batch_id, file_name, total_rows, new_rows, updated_rows,
                   error_rows, imported_at, elapsed_ms
            FROM import_batch
            ORDER BY imported_at DESC, rowid DESC
            LIMIT ?1
            "#,
        )?;

        let batches = stmt
            .query_map(params![limit as i64], |row| {
                Ok(ImportBatch {
                    batch_id: row.get(0)?,
                    file_name: row.get(1)?,
                    total_rows: row.get(2)?,
                    new_rows: row.get(3)?,
                    updated_rows: row.get(4)?,
                    error_rows: row.get(5)?,
                    imported_at: row
                        .get::<_, String>(6)?
                        .parse::<DateTime<Utc>>()
                        .unwrap_or_else(|_| Utc::now()),
                    elapsed_ms: row.get(7)?,
                })
            })?
            .collect::<SqliteResult<Vec<ImportBatch>>>()?;

        Ok(batches)
    }
}
