// ==========================================
// Parts Inventory - File parsers
// ==========================================
// Count-sheet readers: CSV (.csv) and Excel (.xlsx/.xls).
// Output is an ordered header row plus ordered string cells; all
// role/category interpretation happens downstream.
// ==========================================

use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook_auto, Reader};
use csv::ReaderBuilder;
use std::fs::File;
use std::path::Path;

/// A parsed sheet: one header row and zero or more data rows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Structural validation shared by every parser: a usable table has a
    /// non-blank header row and at least one data row.
    fn validated(self) -> ImportResult<Self> {
        if self.headers.iter().all(|h| h.trim().is_empty()) {
            return Err(ImportError::NoHeaderRow);
        }
        if self.rows.is_empty() {
            return Err(ImportError::NoDataRows);
        }
        Ok(self)
    }
}

fn is_blank_row(row: &[String]) -> bool {
    row.iter().all(|cell| cell.trim().is_empty())
}

// ==========================================
// CSV
// ==========================================
pub struct CsvParser;

impl CsvParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }
        if let Some(ext) = file_path.extension() {
            if ext != "csv" {
                return Err(ImportError::UnsupportedFormat(
                    ext.to_string_lossy().to_string(),
                ));
            }
        }

        let file = File::open(file_path)?;
        Self::read_table(file)
    }

    /// Parse already-acquired CSV text (e.g. clipboard paste or an upload
    /// body). A proper delimited-text reader is used rather than naive
    /// comma-splitting, so quoted product names containing commas survive.
    pub fn parse_text(&self, content: &str) -> ImportResult<RawTable> {
        if content.trim().is_empty() {
            return Err(ImportError::EmptyInput);
        }
        Self::read_table(content.as_bytes())
    }

    fn read_table<R: std::io::Read>(input: R) -> ImportResult<RawTable> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // rows may have uneven length
            .from_reader(input);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();
        if headers.is_empty() {
            return Err(ImportError::NoHeaderRow);
        }

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let row: Vec<String> = record.iter().map(|v| v.trim().to_string()).collect();
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        RawTable { headers, rows }.validated()
    }
}

// ==========================================
// Excel
// ==========================================
pub struct ExcelParser;

impl ExcelParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawTable> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }
        let ext = file_path.extension().and_then(|e| e.to_str()).unwrap_or("");
        if ext != "xlsx" && ext != "xls" {
            return Err(ImportError::UnsupportedFormat(ext.to_string()));
        }

        // Sniffs the actual format, so legacy .xls opens too
        let mut workbook = open_workbook_auto(file_path)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // First sheet only
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("workbook has no sheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        let mut sheet_rows = range.rows();
        let header_row = sheet_rows.next().ok_or(ImportError::NoHeaderRow)?;
        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let row: Vec<String> = data_row
                .iter()
                .map(|cell| cell.to_string().trim().to_string())
                .collect();
            if is_blank_row(&row) {
                continue;
            }
            rows.push(row);
        }

        RawTable { headers, rows }.validated()
    }
}

// ==========================================
// Extension dispatch
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawTable> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvParser.parse(path),
            "xlsx" | "xls" => ExcelParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
