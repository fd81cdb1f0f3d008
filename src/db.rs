// ==========================================
// Parts Inventory - SQLite connection setup
// ==========================================
// Single place for PRAGMA behavior and schema creation, so every module
// gets foreign keys and busy_timeout consistently.
// ==========================================

use rusqlite::Connection;
use std::time::Duration;

/// Default busy_timeout (milliseconds)
pub const DEFAULT_BUSY_TIMEOUT_MS: u64 = 5_000;

/// Apply unified PRAGMAs.
///
/// foreign_keys and busy_timeout are per-connection settings and must be
/// applied on every open.
pub fn configure_sqlite_connection(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch("PRAGMA foreign_keys = ON;")?;
    conn.busy_timeout(Duration::from_millis(DEFAULT_BUSY_TIMEOUT_MS))?;
    Ok(())
}

/// Open a connection with unified configuration.
pub fn open_sqlite_connection(db_path: &str) -> rusqlite::Result<Connection> {
    let conn = Connection::open(db_path)?;
    configure_sqlite_connection(&conn)?;
    Ok(conn)
}

/// Create all tables if absent. Idempotent.
///
/// total_count is deliberately not stored: it is derived, and rehydration
/// recomputes it from floor/storage so the invariant cannot drift in the db.
pub fn initialize_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS category (
            id          TEXT PRIMARY KEY,
            name        TEXT NOT NULL,
            is_locked   INTEGER NOT NULL DEFAULT 0,
            is_custom   INTEGER NOT NULL DEFAULT 0,
            sort_order  INTEGER NOT NULL DEFAULT 0
        );

        CREATE TABLE IF NOT EXISTS entry (
            id            TEXT PRIMARY KEY,
            item_number   TEXT NOT NULL,
            product_name  TEXT,
            floor_count   INTEGER NOT NULL DEFAULT 0,
            storage_count INTEGER NOT NULL DEFAULT 0,
            category_id   TEXT NOT NULL REFERENCES category(id),
            position      INTEGER NOT NULL,
            updated_at    TEXT NOT NULL
        );

        CREATE UNIQUE INDEX IF NOT EXISTS idx_entry_item_key
            ON entry (LOWER(item_number));

        CREATE TABLE IF NOT EXISTS snapshot (
            snapshot_id TEXT PRIMARY KEY,
            captured_at TEXT NOT NULL
        );

        CREATE TABLE IF NOT EXISTS snapshot_entry (
            snapshot_id   TEXT NOT NULL REFERENCES snapshot(snapshot_id) ON DELETE CASCADE,
            position      INTEGER NOT NULL,
            id            TEXT NOT NULL,
            item_number   TEXT NOT NULL,
            product_name  TEXT,
            floor_count   INTEGER NOT NULL,
            storage_count INTEGER NOT NULL,
            category_id   TEXT NOT NULL,
            PRIMARY KEY (snapshot_id, position)
        );

        CREATE TABLE IF NOT EXISTS import_batch (
            batch_id     TEXT PRIMARY KEY,
            file_name    TEXT,
            total_rows   INTEGER NOT NULL,
            new_rows     INTEGER NOT NULL,
            updated_rows INTEGER NOT NULL,
            error_rows   INTEGER NOT NULL,
            imported_at  TEXT NOT NULL,
            elapsed_ms   INTEGER NOT NULL
        );

        CREATE TABLE IF NOT EXISTS config_kv (
            key   TEXT PRIMARY KEY,
            value TEXT NOT NULL
        );
        "#,
    )
}
