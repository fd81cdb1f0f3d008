// ==========================================
// Parts Inventory - Import layer
// ==========================================
// Count-sheet ingestion: file parsing, header role resolution, category
// matching, row normalization and the orchestrating importer.
// ==========================================

pub mod category_matcher;
pub mod error;
pub mod file_parser;
pub mod header_matcher;
pub mod row_normalizer;
pub mod sheet_importer;

pub use category_matcher::match_category;
pub use error::{ColumnRole, ImportError, ImportResult, RowError};
pub use file_parser::{CsvParser, ExcelParser, RawTable, UniversalFileParser};
pub use header_matcher::RoleMap;
pub use sheet_importer::{normalize_table, ImportReport, SheetImporter, SheetImporterImpl};
