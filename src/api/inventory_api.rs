// ==========================================
// Parts Inventory - Inventory API
// ==========================================
// Entry and category management outside the import pipeline.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::domain::category::Category;
use crate::domain::entry::Entry;
use crate::repository::{InventoryStore, SqliteInventoryStore};
use tracing::info;

pub struct InventoryApi {
    db_path: String,
}

impl InventoryApi {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn store(&self) -> ApiResult<SqliteInventoryStore> {
        Ok(SqliteInventoryStore::new(&self.db_path)?)
    }

    pub async fn list_entries(&self) -> ApiResult<Vec<Entry>> {
        Ok(self.store()?.list_entries().await?)
    }

    /// Delete one entry by its id.
    pub async fn delete_entry(&self, entry_id: &str) -> ApiResult<()> {
        self.store()?.entries().delete_by_id(entry_id)?;
        info!(entry_id, "entry deleted");
        Ok(())
    }

    pub async fn list_categories(&self) -> ApiResult<Vec<Category>> {
        Ok(self.store()?.list_categories().await?)
    }

    /// Add a user-defined category. The id must be non-empty and unused.
    pub async fn add_custom_category(&self, id: &str, name: &str) -> ApiResult<Category> {
        let id = id.trim();
        let name = name.trim();
        if id.is_empty() || name.is_empty() {
            return Err(ApiError::InvalidInput(
                "category id and name must be non-empty".to_string(),
            ));
        }

        let category = Category::custom(id, name);
        self.store()?.insert_category(category.clone()).await?;
        info!(category_id = id, "custom category added");
        Ok(category)
    }

    /// Delete a custom category and every entry referencing it.
    ///
    /// Built-ins are refused; returns how many entries were removed by the
    /// cascade.
    pub async fn delete_category(&self, category_id: &str) -> ApiResult<usize> {
        let removed = self.store()?.delete_category(category_id).await?;
        info!(category_id, removed_entries = removed, "category deleted");
        Ok(removed)
    }
}
