// ==========================================
// Parts Inventory - Import error types
// ==========================================
// Tooling: thiserror derive macros
// ==========================================

use thiserror::Error;

/// Column roles a count sheet must (or may) provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ColumnRole {
    ItemNumber,
    ProductName,
    FloorCount,
    StorageCount,
    Category,
}

impl ColumnRole {
    /// Stable role name used in diagnostics (not a column header).
    pub fn as_str(&self) -> &'static str {
        match self {
            ColumnRole::ItemNumber => "item-number",
            ColumnRole::ProductName => "product-name",
            ColumnRole::FloorCount => "floor-count",
            ColumnRole::StorageCount => "storage-count",
            ColumnRole::Category => "category",
        }
    }
}

impl std::fmt::Display for ColumnRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A diagnostic tied to one failed input row.
///
/// `row_number` is 1-based over data rows (the header row is not counted).
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct RowError {
    pub row_number: usize,
    pub reason: String,
}

impl RowError {
    pub fn new(row_number: usize, reason: impl Into<String>) -> Self {
        Self {
            row_number,
            reason: reason.into(),
        }
    }
}

impl std::fmt::Display for RowError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "row {}: {}", self.row_number, self.reason)
    }
}

/// Import module error type.
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== File errors =====
    #[error("file not found: {0}")]
    FileNotFound(String),

    #[error("unsupported file format: {0} (expected .xlsx/.xls/.csv)")]
    UnsupportedFormat(String),

    #[error("file read failed: {0}")]
    FileReadError(String),

    #[error("Excel parse failed: {0}")]
    ExcelParseError(String),

    #[error("CSV parse failed: {0}")]
    CsvParseError(String),

    // ===== Structural errors (whole file) =====
    #[error("input is empty")]
    EmptyInput,

    #[error("no header row found")]
    NoHeaderRow,

    #[error("no data rows found")]
    NoDataRows,

    // ===== Schema errors (header level) =====
    #[error("missing required columns: {}", .roles.iter().map(|r| r.as_str()).collect::<Vec<_>>().join(", "))]
    MissingColumns { roles: Vec<ColumnRole> },

    // ===== Persistence errors (post-parsing) =====
    #[error("database query failed: {0}")]
    DatabaseQueryError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    // ===== Generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

impl From<rusqlite::Error> for ImportError {
    fn from(err: rusqlite::Error) -> Self {
        ImportError::DatabaseQueryError(err.to_string())
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

impl From<calamine::Error> for ImportError {
    fn from(err: calamine::Error) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result alias for the import layer.
pub type ImportResult<T> = Result<T, ImportError>;
