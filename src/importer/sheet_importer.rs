// ==========================================
// Parts Inventory - Count-sheet importer
// ==========================================
// Orchestrates one import: parse -> resolve headers -> normalize rows ->
// reconcile -> persist -> record batch. Structural and schema failures
// abort before any row work; row errors accumulate and never abort.
// ==========================================

use crate::domain::category::Category;
use crate::domain::entry::Entry;
use crate::domain::snapshot::ImportBatch;
use crate::engine::reconciler::reconcile;
use crate::importer::error::{ImportError, ImportResult, RowError};
use crate::importer::file_parser::{CsvParser, RawTable, UniversalFileParser};
use crate::importer::header_matcher::{self, RoleMap};
use crate::importer::row_normalizer;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Instant;
use tracing::{debug, error, info, instrument, warn};
use uuid::Uuid;

/// User-facing result of one import run.
///
/// The summary always carries processed/new/updated/error counts together;
/// partial success is never hidden. `error_preview` is capped, `error_count`
/// is not.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ImportReport {
    pub batch_id: String,
    pub file_name: Option<String>,
    pub total_rows: usize,
    pub new_count: usize,
    pub updated_count: usize,
    pub error_count: usize,
    pub error_preview: Vec<RowError>,
    pub elapsed_ms: i64,
}

#[async_trait::async_trait]
pub trait SheetImporter: Send + Sync {
    /// Import a count sheet from a file path (.csv/.xlsx/.xls).
    async fn import_file<P: AsRef<Path> + Send>(&self, path: P) -> ImportResult<ImportReport>;

    /// Import already-acquired CSV text (paste / upload body).
    async fn import_text(&self, content: &str) -> ImportResult<ImportReport>;

    /// Import several files; each file gets its own batch and failures do
    /// not abort the others.
    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        paths: Vec<P>,
    ) -> ImportResult<Vec<Result<ImportReport, String>>>;
}

/// Normalize every data row against the resolved roles.
///
/// Pure: returns the successful entries plus the accumulated row errors,
/// with 1-based row numbering over data rows.
pub fn normalize_table(
    table: &RawTable,
    roles: &RoleMap,
    categories: &[Category],
) -> (Vec<Entry>, Vec<RowError>) {
    let mut entries = Vec::with_capacity(table.rows.len());
    let mut errors = Vec::new();

    for (idx, row) in table.rows.iter().enumerate() {
        match row_normalizer::normalize(row, roles, categories, idx + 1) {
            Ok(entry) => entries.push(entry),
            Err(err) => {
                warn!(row_number = err.row_number, reason = %err.reason, "row rejected");
                errors.push(err);
            }
        }
    }

    (entries, errors)
}

// ==========================================
// SheetImporterImpl
// ==========================================
pub struct SheetImporterImpl<S> {
    store: S,
    error_preview_limit: usize,
}

impl<S> SheetImporterImpl<S>
where
    S: crate::repository::InventoryStore,
{
    pub fn new(store: S, error_preview_limit: usize) -> Self {
        Self {
            store,
            error_preview_limit,
        }
    }

    /// Shared pipeline once a table has been parsed.
    #[instrument(skip(self, table), fields(batch_id))]
    async fn import_table(
        &self,
        table: RawTable,
        file_name: Option<String>,
    ) -> ImportResult<ImportReport> {
        let start = Instant::now();
        let batch_id = Uuid::new_v4().to_string();
        tracing::Span::current().record("batch_id", batch_id.as_str());

        info!(total_rows = table.rows.len(), "import started");

        // Step 1: resolve header roles (schema errors abort here)
        debug!("step 1: resolve headers");
        let roles = header_matcher::resolve(&table.headers)?;

        // Step 2: normalize rows, accumulating row errors
        debug!("step 2: normalize rows");
        let categories = self
            .store
            .list_categories()
            .await
            .map_err(|e| ImportError::DatabaseQueryError(e.to_string()))?;
        let (incoming, row_errors) = normalize_table(&table, &roles, &categories);
        info!(
            success = incoming.len(),
            failed = row_errors.len(),
            "row normalization complete"
        );

        // Step 3: reconcile against the existing set
        debug!("step 3: reconcile");
        let existing = self
            .store
            .list_entries()
            .await
            .map_err(|e| ImportError::DatabaseQueryError(e.to_string()))?;
        let outcome = reconcile(&existing, incoming);
        info!(
            new = outcome.new_count,
            updated = outcome.updated_count,
            "reconciliation complete"
        );

        // Step 4: persist the merged sequence. A failure here is fatal for
        // the operation but the parse already succeeded; the caller may
        // retry persistence by re-running the import.
        debug!("step 4: persist");
        self.store
            .replace_entries(outcome.merged)
            .await
            .map_err(|e| {
                error!(error = %e, "persisting reconciled entries failed");
                ImportError::DatabaseTransactionError(e.to_string())
            })?;

        let elapsed_ms = start.elapsed().as_millis() as i64;

        // Step 5: record the batch for audit
        let total_rows = table.rows.len();
        let batch = ImportBatch {
            batch_id: batch_id.clone(),
            file_name: file_name.clone(),
            total_rows: total_rows as i32,
            new_rows: outcome.new_count as i32,
            updated_rows: outcome.updated_count as i32,
            error_rows: row_errors.len() as i32,
            imported_at: Utc::now(),
            elapsed_ms,
        };
        self.store
            .insert_batch(batch)
            .await
            .map_err(|e| ImportError::DatabaseQueryError(e.to_string()))?;

        let error_count = row_errors.len();
        let error_preview: Vec<RowError> = row_errors
            .into_iter()
            .take(self.error_preview_limit)
            .collect();

        info!(
            total = total_rows,
            new = outcome.new_count,
            updated = outcome.updated_count,
            errors = error_count,
            elapsed_ms,
            "import complete"
        );

        Ok(ImportReport {
            batch_id,
            file_name,
            total_rows,
            new_count: outcome.new_count,
            updated_count: outcome.updated_count,
            error_count,
            error_preview,
            elapsed_ms,
        })
    }
}

#[async_trait::async_trait]
impl<S> SheetImporter for SheetImporterImpl<S>
where
    S: crate::repository::InventoryStore,
{
    async fn import_file<P: AsRef<Path> + Send>(&self, path: P) -> ImportResult<ImportReport> {
        let table = UniversalFileParser.parse(path.as_ref())?;
        let file_name = path
            .as_ref()
            .file_name()
            .and_then(|n| n.to_str())
            .map(str::to_string);
        self.import_table(table, file_name).await
    }

    async fn import_text(&self, content: &str) -> ImportResult<ImportReport> {
        let table = CsvParser.parse_text(content)?;
        self.import_table(table, None).await
    }

    async fn batch_import<P: AsRef<Path> + Send + Sync>(
        &self,
        paths: Vec<P>,
    ) -> ImportResult<Vec<Result<ImportReport, String>>> {
        use futures::future::join_all;

        info!(count = paths.len(), "batch import started");

        let tasks = paths.iter().map(|path| {
            // tracing macros bring `tracing::field::display` into their
            // expansion scope, so the local must not be named `display`
            let file_label = path.as_ref().display().to_string();
            async move {
                match self.import_file(path.as_ref()).await {
                    Ok(report) => Ok(report),
                    Err(e) => {
                        error!(file = %file_label, error = %e, "file import failed");
                        Err(format!("{file_label}: {e}"))
                    }
                }
            }
        });

        let results = join_all(tasks).await;
        info!(
            total = results.len(),
            failed = results.iter().filter(|r| r.is_err()).count(),
            "batch import complete"
        );
        Ok(results)
    }
}
