// ==========================================
// Parts Inventory - Import API
// ==========================================
// Front door for count-sheet imports: wires the store, config and
// importer together for one database.
// ==========================================

use crate::api::error::{ApiError, ApiResult};
use crate::config::ConfigManager;
use crate::domain::snapshot::ImportBatch;
use crate::importer::{ImportReport, SheetImporter, SheetImporterImpl};
use crate::repository::SqliteInventoryStore;

pub struct ImportApi {
    db_path: String,
}

impl ImportApi {
    pub fn new(db_path: impl Into<String>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }

    fn create_importer(&self) -> ApiResult<SheetImporterImpl<SqliteInventoryStore>> {
        let store = SqliteInventoryStore::new(&self.db_path)?;
        let config = ConfigManager::new(&self.db_path)?;
        let preview_limit = config.error_preview_limit()?;
        Ok(SheetImporterImpl::new(store, preview_limit))
    }

    /// Import one count-sheet file (.csv/.xlsx/.xls).
    pub async fn import_counts(&self, file_path: &str) -> ApiResult<ImportReport> {
        let importer = self.create_importer()?;
        importer
            .import_file(file_path)
            .await
            .map_err(ApiError::from)
    }

    /// Import pasted/uploaded CSV text.
    pub async fn import_counts_text(&self, content: &str) -> ApiResult<ImportReport> {
        let importer = self.create_importer()?;
        importer.import_text(content).await.map_err(ApiError::from)
    }

    /// Import several files; per-file failures are reported, not fatal.
    pub async fn batch_import(
        &self,
        file_paths: Vec<String>,
    ) -> ApiResult<Vec<Result<ImportReport, String>>> {
        let importer = self.create_importer()?;
        importer
            .batch_import(file_paths)
            .await
            .map_err(ApiError::from)
    }

    /// Recent import batches, newest first.
    pub async fn list_recent_batches(&self, limit: usize) -> ApiResult<Vec<ImportBatch>> {
        let store = SqliteInventoryStore::new(&self.db_path)?;
        Ok(store.batches().list_recent(limit)?)
    }
}
