// ==========================================
// Parts Inventory - Inventory store trait
// ==========================================
// The explicit store object handed to the import/export orchestration.
// The matchers, normalizer, reconciler and differ stay pure; this is the
// only seam that touches persistence.
// ==========================================

use crate::domain::category::Category;
use crate::domain::entry::Entry;
use crate::domain::snapshot::{ImportBatch, Snapshot};
use crate::repository::error::RepositoryResult;

#[async_trait::async_trait]
pub trait InventoryStore: Send + Sync {
    /// Current entries in sequence order.
    async fn list_entries(&self) -> RepositoryResult<Vec<Entry>>;

    /// Known categories in display order (the matcher iterates this order).
    async fn list_categories(&self) -> RepositoryResult<Vec<Category>>;

    /// Persist the reconciled entry sequence, replacing the previous set.
    async fn replace_entries(&self, entries: Vec<Entry>) -> RepositoryResult<usize>;

    /// Latest captured snapshot, or None before any export.
    async fn latest_snapshot(&self) -> RepositoryResult<Option<Snapshot>>;

    /// Persist a freshly captured snapshot.
    async fn insert_snapshot(&self, snapshot: Snapshot) -> RepositoryResult<()>;

    /// Record an import run for audit.
    async fn insert_batch(&self, batch: ImportBatch) -> RepositoryResult<()>;

    /// Add a user-defined category.
    async fn insert_category(&self, category: Category) -> RepositoryResult<()>;

    /// Delete a custom category, cascading to its entries.
    /// Returns the number of entries removed with it.
    async fn delete_category(&self, category_id: &str) -> RepositoryResult<usize>;
}
