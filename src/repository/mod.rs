// ==========================================
// Parts Inventory - Repository layer
// ==========================================
// SQLite data access; one repository per table plus the composed store.
// ==========================================

pub mod category_repo;
pub mod entry_repo;
pub mod error;
pub mod import_batch_repo;
pub mod inventory_store;
pub mod snapshot_repo;
pub mod sqlite_store;

pub use category_repo::CategoryRepository;
pub use entry_repo::EntryRepository;
pub use error::{RepositoryError, RepositoryResult};
pub use import_batch_repo::ImportBatchRepository;
pub use inventory_store::InventoryStore;
pub use snapshot_repo::SnapshotRepository;
pub use sqlite_store::SqliteInventoryStore;
