// ==========================================
// Parts Inventory - Config manager
// ==========================================
// Key/value settings in the config_kv table; typed getters fall back to
// defaults when a key is absent or malformed.
// ==========================================

use crate::db::{initialize_schema, open_sqlite_connection};
use crate::repository::error::{RepositoryError, RepositoryResult};
use rusqlite::{params, Connection};
use std::sync::{Arc, Mutex};

/// Well-known config keys.
pub mod config_keys {
    /// "true"/"false": should the snapshot differ flag category changes
    pub const DIFF_INCLUDE_CATEGORY: &str = "diff_include_category";
    /// Max row errors echoed in an import summary
    pub const ERROR_PREVIEW_LIMIT: &str = "error_preview_limit";
}

/// Default cap on row errors shown in summaries.
pub const DEFAULT_ERROR_PREVIEW_LIMIT: usize = 10;

pub struct ConfigManager {
    conn: Arc<Mutex<Connection>>,
}

impl ConfigManager {
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        initialize_schema(&conn)?;
        Ok(Self::from_connection(Arc::new(Mutex::new(conn))))
    }

    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> Self {
        Self { conn }
    }

    fn get_conn(&self) -> RepositoryResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| RepositoryError::LockError(e.to_string()))
    }

    /// Raw value for a key, or None when unset.
    pub fn get_value(&self, key: &str) -> RepositoryResult<Option<String>> {
        let conn = self.get_conn()?;
        let value = conn
            .query_row(
                "SELECT value FROM config_kv WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .map(Some)
            .or_else(|err| match err {
                rusqlite::Error::QueryReturnedNoRows => Ok(None),
                other => Err(other),
            })?;
        Ok(value)
    }

    /// Upsert one key.
    pub fn set_value(&self, key: &str, value: &str) -> RepositoryResult<()> {
        let conn = self.get_conn()?;
        conn.execute(
            "INSERT OR REPLACE INTO config_kv (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }

    /// Whether the snapshot differ should treat a category reassignment as
    /// a change. Default: false.
    pub fn diff_include_category(&self) -> RepositoryResult<bool> {
        Ok(self
            .get_value(config_keys::DIFF_INCLUDE_CATEGORY)?
            .map(|v| v.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false))
    }

    /// Cap on row errors echoed in an import summary. Default: 10.
    pub fn error_preview_limit(&self) -> RepositoryResult<usize> {
        Ok(self
            .get_value(config_keys::ERROR_PREVIEW_LIMIT)?
            .and_then(|v| v.trim().parse::<usize>().ok())
            .filter(|v| *v > 0)
            .unwrap_or(DEFAULT_ERROR_PREVIEW_LIMIT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::configure_sqlite_connection;

    fn manager() -> ConfigManager {
        let conn = Connection::open_in_memory().unwrap();
        configure_sqlite_connection(&conn).unwrap();
        initialize_schema(&conn).unwrap();
        ConfigManager::from_connection(Arc::new(Mutex::new(conn)))
    }

    #[test]
    fn test_get_unset_key_is_none() {
        let mgr = manager();
        assert_eq!(mgr.get_value("nope").unwrap(), None);
    }

    #[test]
    fn test_set_then_get() {
        let mgr = manager();
        mgr.set_value("k", "v").unwrap();
        assert_eq!(mgr.get_value("k").unwrap().as_deref(), Some("v"));
        mgr.set_value("k", "v2").unwrap();
        assert_eq!(mgr.get_value("k").unwrap().as_deref(), Some("v2"));
    }

    #[test]
    fn test_diff_include_category_defaults_off() {
        let mgr = manager();
        assert!(!mgr.diff_include_category().unwrap());
        mgr.set_value(config_keys::DIFF_INCLUDE_CATEGORY, "TRUE").unwrap();
        assert!(mgr.diff_include_category().unwrap());
    }

    #[test]
    fn test_error_preview_limit_falls_back_on_junk() {
        let mgr = manager();
        assert_eq!(mgr.error_preview_limit().unwrap(), 10);
        mgr.set_value(config_keys::ERROR_PREVIEW_LIMIT, "abc").unwrap();
        assert_eq!(mgr.error_preview_limit().unwrap(), 10);
        mgr.set_value(config_keys::ERROR_PREVIEW_LIMIT, "25").unwrap();
        assert_eq!(mgr.error_preview_limit().unwrap(), 25);
    }
}
