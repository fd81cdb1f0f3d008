// ==========================================
// Parts Inventory - Category repository
// ==========================================
// Enforced invariants: only custom categories may be deleted, and a
// deletion cascades to entries so none is ever orphaned.
// ==========================================

use crate::domain::category::{builtin_categories, Category};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection, Result as SqliteResult};
use std::sync::{Arc, Mutex};

pub struct CategoryRepository {
    conn: Arc<Mutex<Connection>>,
}

impl CategoryRepository {
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Seed the fixed built-in set. Idempotent; existing rows are kept.
    pub fn ensure_builtins(&self) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let tx = conn.unchecked_transaction()?;
        for (order, cat) in builtin_categories().iter().enumerate() {
            tx.execute(
                r#"
                INSERT OR IGNORE INTO category (id, name, is_locked, is_custom, sort_order)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![cat.id, cat.name, cat.is_locked, cat.is_custom, order as i64],
            )?;
        }
        tx.commit()?;
        Ok(())
    }

    /// Categories in stable display order (built-ins first).
    pub fn list_all(&self) -> RepositoryResult<Vec<Category>> {
        let conn = self.get_conn()?;
        let mut stmt = conn.prepare(
            "SELECT id, name, is_locked, is_custom FROM category ORDER BY sort_order, rowid",
        )?;

        let categories = stmt
            .query_map([], |row| {
                Ok(Category {
                    id: row.get(0)?,
                    name: row.get(1)?,
                    is_locked: row.get(2)?,
                    is_custom: row.get(3)?,
                })
            })?
            .collect::<SqliteResult<Vec<Category>>>()?;

        Ok(categories)
    }

    /// Add a user-defined category after the current highest sort order.
    pub fn insert(&self, category: &Category) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        let next_order: i64 = conn.query_row(
            "SELECT COALESCE(MAX(sort_order), -1) + 1 FROM category",
            [],
            |row| row.get(0),
        )?;
        conn.execute(
            r#"
            INSERT INTO category (id, name, is_locked, is_custom, sort_order)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
            params![
                category.id,
                category.name,
                category.is_locked,
                category.is_custom,
                next_order,
            ],
        )?;
        Ok(())
    }

    /// Delete a custom category and every entry referencing it.
    ///
    /// Built-in categories are refused outright; is_locked is advisory and
    /// plays no part here.
    pub fn delete_cascading(&self, category_id: &str) -> RepositoryResult<usize> {
        let conn = self.get_conn()?;

        let is_custom: Option<bool> = conn
            .query_row(
                "SELECT is_custom FROM category WHERE id = ?1",
                params![category_id],
                |row| row.get(0),
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;

        match is_custom {
            None => Err(RepositoryError::NotFound {
                entity: "Category".to_string(),
                id: category_id.to_string(),
            }),
            Some(false) => Err(RepositoryError::BusinessRuleViolation(format!(
                "category {category_id} is built-in and cannot be deleted"
            ))),
            Some(true) => {
                let tx = conn.unchecked_transaction()?;
                let removed_entries = tx.execute(
                    "DELETE FROM entry WHERE category_id = ?1",
                    params![category_id],
                )?;
                tx.execute("DELETE FROM category WHERE id = ?1", params![category_id])?;
                tx.commit()?;
                Ok(removed_entries)
            }
        }
    }
}
