// ==========================================
// Parts Inventory - SQLite inventory store
// ==========================================
// Composes the per-table repositories over one shared connection and
// exposes them through the InventoryStore trait.
// ==========================================

use crate::db::{initialize_schema, open_sqlite_connection};
use crate::domain::category::Category;
use crate::domain::entry::Entry;
use crate::domain::snapshot::{ImportBatch, Snapshot};
use crate::repository::category_repo::CategoryRepository;
use crate::repository::entry_repo::EntryRepository;
use crate::repository::error::{RepositoryError, RepositoryResult};
use crate::repository::import_batch_repo::ImportBatchRepository;
use crate::repository::inventory_store::InventoryStore;
use crate::repository::snapshot_repo::SnapshotRepository;
use rusqlite::Connection;
use std::sync::{Arc, Mutex};

pub struct SqliteInventoryStore {
    entries: EntryRepository,
    categories: CategoryRepository,
    snapshots: SnapshotRepository,
    batches: ImportBatchRepository,
}

impl SqliteInventoryStore {
    /// Open (or create) the database at `db_path`, apply the schema and
    /// seed the built-in categories.
    pub fn new(db_path: &str) -> RepositoryResult<Self> {
        let conn = open_sqlite_connection(db_path)
            .map_err(|e| RepositoryError::DatabaseConnectionError(e.to_string()))?;
        initialize_schema(&conn)?;
        Self::from_connection(Arc::new(Mutex::new(conn)))
    }

    /// Build the store over an existing configured connection.
    pub fn from_connection(conn: Arc<Mutex<Connection>>) -> RepositoryResult<Self> {
        let store = Self {
            entries: EntryRepository::from_connection(Arc::clone(&conn)),
            categories: CategoryRepository::from_connection(Arc::clone(&conn)),
            snapshots: SnapshotRepository::from_connection(Arc::clone(&conn)),
            batches: ImportBatchRepository::from_connection(conn),
        };
        store.categories.ensure_builtins()?;
        Ok(store)
    }

    pub fn entries(&self) -> &EntryRepository {
        &self.entries
    }

    pub fn categories(&self) -> &CategoryRepository {
        &self.categories
    }

    pub fn batches(&self) -> &ImportBatchRepository {
        &self.batches
    }
}

#[async_trait::async_trait]
impl InventoryStore for SqliteInventoryStore {
    async fn list_entries(&self) -> RepositoryResult<Vec<Entry>> {
        self.entries.list_all()
    }

    async fn list_categories(&self) -> RepositoryResult<Vec<Category>> {
        self.categories.list_all()
    }

    async fn replace_entries(&self, entries: Vec<Entry>) -> RepositoryResult<usize> {
        self.entries.replace_all(&entries)
    }

    async fn latest_snapshot(&self) -> RepositoryResult<Option<Snapshot>> {
        self.snapshots.latest()
    }

    async fn insert_snapshot(&self, snapshot: Snapshot) -> RepositoryResult<()> {
        self.snapshots.insert(&snapshot)
    }

    async fn insert_batch(&self, batch: ImportBatch) -> RepositoryResult<()> {
        self.batches.insert(&batch)
    }

    async fn insert_category(&self, category: Category) -> RepositoryResult<()> {
        self.categories.insert(&category)
    }

    async fn delete_category(&self, category_id: &str) -> RepositoryResult<usize> {
        self.categories.delete_cascading(category_id)
    }
}
