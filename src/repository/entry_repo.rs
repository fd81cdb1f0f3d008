// ==========================================
// Parts Inventory - Entry repository
// ==========================================
// CRUD over the entry table. No business logic here; reconciliation
// happens in the engine and the merged sequence is persisted wholesale.
// ==========================================

use crate::domain::entry::Entry;
use crate::repository::error::{RepositoryError, RepositoryResult};
use chrono::Utc;
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct EntryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl EntryRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// All entries in their stored sequence order.
    pub fn list_all(&self) -> RepositoryResult<Vec<Entry>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            r#"
            SELECT id, item_number, product_name, floor_count, storage_count, category_id
            FROM entry
            ORDER BY position
            "#,
        )?;

        let entries = stmt
            .query_map([], |row| {
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

        Ok(entries)
    }

    /// Replace the whole entry set with the merged sequence.
    ///
    /// Runs in one transaction; positions are the sequence indices, so the
    /// reconciler's in-place/append ordering survives a round trip.
    pub fn replace_all(&self, entries: &[Entry]) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;

        tx.execute("DELETE FROM entry", [])?;

        let now = Utc::now().to_rfc3339();
        for (position, entry) in entries.iter().enumerate() {
            tx.execute(
                r#"
                INSERT INTO entry (
                    id, item_number, product_name, floor_count, storage_count,
                    category_id, position, updated_at
                ) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
                "#,
                params![
                    entry.id,
                    entry.item_number,
                    entry.product_name,
                    entry.floor_count(),
                    entry.storage_count(),
                    entry.category,
                    position as i64,
                    now,
                ],
            )?;
        }

        tx.commit()?;
        Ok(entries.len())
    }

    /// Delete one entry by id.
    pub fn delete_by_id(&self, id: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let affected = conn.execute("DELETE FROM entry WHERE id = ?1", params![id])?;
        if affected == 0 {
            return Err(RepositoryError::NotFound {
                entity: "Entry".to_string(),
                id: id.to_string(),
            });
        }
        Ok(())
    }

    /// Delete all entries referencing a category (cascade support).
    pub fn delete_by_category(&self, category_id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;
        let affected = conn.execute(
            "DELETE FROM entry WHERE category_id = ?1",
            params![category_id],
        )?;
        Ok(affected)
    }
}
