// ==========================================
// Test helpers
// ==========================================
// Responsibility: temp database setup and count-sheet fixtures for
// the integration suites.
// ==========================================

#![allow(dead_code)]

use std::error::Error;
use tempfile::{NamedTempFile, TempDir};

/// Create a temporary database file path.
///
/// Schema and built-in categories are applied lazily by the store on
/// first open, so an empty file is enough here.
///
/// # Returns
/// - NamedTempFile: temp database file (keep it alive)
/// - String: database file path
pub fn create_test_db() -> Result<(NamedTempFile, String), Box<dyn Error>> {
    let temp_file = NamedTempFile::new()?;
    let db_path = temp_file
        .path()
        .to_str()
        .ok_or("temp path is not valid utf-8")?
        .to_string();
    Ok((temp_file, db_path))
}

/// Write a count sheet into a temp directory and return its path.
pub fn write_sheet(dir: &TempDir, name: &str, content: &str) -> Result<String, Box<dyn Error>> {
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok(path
        .to_str()
        .ok_or("sheet path is not valid utf-8")?
        .to_string())
}

/// Three clean rows across three built-in categories.
pub const BASIC_SHEET: &str = "\
Item Number,Product Name,Floor Count,Storage Count,Category
FLT-100,Premium Oil Filter,4,6,oil-filters
FLT-200,Engine Air Filter,2,0,air filter
WPR-300,20in Wiper Blade,1,3,wipers
";

/// Same items with changed counts, and the first item number re-cased.
pub const UPDATED_SHEET: &str = "\
Item Number,Product Name,Floor Count,Storage Count,Category
flt-100,Premium Oil Filter,9,1,oil-filters
FLT-200,Engine Air Filter,2,0,air filter
WPR-300,20in Wiper Blade,1,3,wipers
";
