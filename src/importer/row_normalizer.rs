// ==========================================
// Parts Inventory - Row normalizer
// ==========================================
// One raw row + resolved roles -> validated Entry or RowError.
// Pure over its arguments; persistence and id-collision handling
// belong to the caller.
// ==========================================

use crate::domain::category::Category;
use crate::domain::entry::Entry;
use crate::importer::category_matcher::match_category;
use crate::importer::error::RowError;
use crate::importer::header_matcher::RoleMap;

/// Trim a cell and strip one layer of surrounding single/double quotes.
pub fn clean_cell(cell: &str) -> &str {
    let trimmed = cell.trim();
    for quote in ['"', '\''] {
        if trimmed.len() >= 2 && trimmed.starts_with(quote) && trimmed.ends_with(quote) {
            return trimmed[1..trimmed.len() - 1].trim();
        }
    }
    trimmed
}

/// Counts are allowed to be blank or junk; they default to 0 rather than
/// failing the row. Negative values do not parse as u32 and fall back too.
fn parse_count(cell: Option<&str>) -> u32 {
    cell.map(clean_cell)
        .and_then(|v| v.parse::<u32>().ok())
        .unwrap_or(0)
}

/// Convert one raw row into an `Entry`, or a `RowError` carrying the
/// 1-based data-row index and the reason.
pub fn normalize(
    row: &[String],
    roles: &RoleMap,
    known_categories: &[Category],
    row_number: usize,
) -> Result<Entry, RowError> {
    let cell = |idx: usize| row.get(idx).map(String::as_str);

    // Item number: the cell must exist and be non-empty after cleaning.
    let item_number = match cell(roles.item_number) {
        None => {
            return Err(RowError::new(
                row_number,
                format!(
                    "insufficient cells: row has {}, item number expected in column {}",
                    row.len(),
                    roles.item_number + 1
                ),
            ))
        }
        Some(raw) => {
            let cleaned = clean_cell(raw);
            if cleaned.is_empty() {
                return Err(RowError::new(row_number, "empty item number"));
            }
            cleaned.to_string()
        }
    };

    let product_name = roles
        .product_name
        .and_then(cell)
        .map(clean_cell)
        .filter(|v| !v.is_empty())
        .map(str::to_string);

    let floor_count = parse_count(cell(roles.floor_count));
    let storage_count = parse_count(cell(roles.storage_count));

    let category_value = match cell(roles.category) {
        None => {
            return Err(RowError::new(
                row_number,
                format!(
                    "insufficient cells: row has {}, category expected in column {}",
                    row.len(),
                    roles.category + 1
                ),
            ))
        }
        Some(raw) => clean_cell(raw).trim().to_lowercase(),
    };

    let category = match match_category(&category_value, known_categories) {
        Some(id) => id,
        None => {
            let names: Vec<&str> = known_categories.iter().map(|c| c.name.as_str()).collect();
            return Err(RowError::new(
                row_number,
                format!(
                    "category not recognized: \"{}\" (known: {})",
                    category_value,
                    names.join(", ")
                ),
            ));
        }
    };

    Ok(Entry::new(
        item_number,
        product_name,
        floor_count,
        storage_count,
        category,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::category::builtin_categories;

    fn roles() -> RoleMap {
        RoleMap {
            item_number: 0,
            product_name: Some(1),
            floor_count: 2,
            storage_count: 3,
            category: 4,
        }
    }

    fn row(cells: &[&str]) -> Vec<String> {
        cells.iter().map(|c| c.to_string()).collect()
    }

    #[test]
    fn test_normalize_valid_row() {
        let entry = normalize(
            &row(&["OIL-001", "Premium Oil Filter", "3", "4", "Oil Filters"]),
            &roles(),
            &builtin_categories(),
            1,
        )
        .unwrap();

        assert_eq!(entry.item_number, "OIL-001");
        assert_eq!(entry.product_name.as_deref(), Some("Premium Oil Filter"));
        assert_eq!(entry.floor_count(), 3);
        assert_eq!(entry.storage_count(), 4);
        assert_eq!(entry.total_count(), 7);
        assert_eq!(entry.category, "oil-filters");
    }

    #[test]
    fn test_quotes_stripped_from_cells() {
        let entry = normalize(
            &row(&["\"OIL-001\"", "'Oil Filter'", "1", "2", "\"oil filters\""]),
            &roles(),
            &builtin_categories(),
            1,
        )
        .unwrap();

        assert_eq!(entry.item_number, "OIL-001");
        assert_eq!(entry.product_name.as_deref(), Some("Oil Filter"));
        assert_eq!(entry.category, "oil-filters");
    }

    #[test]
    fn test_empty_item_number_is_row_error() {
        let err = normalize(
            &row(&["  ", "x", "1", "2", "oil-filters"]),
            &roles(),
            &builtin_categories(),
            3,
        )
        .unwrap_err();

        assert_eq!(err.row_number, 3);
        assert!(err.reason.contains("empty item number"));
    }

    #[test]
    fn test_count_parse_leniency() {
        // "abc" and "" both default to 0; the row still succeeds
        let entry = normalize(
            &row(&["OIL-001", "", "abc", "", "oil-filters"]),
            &roles(),
            &builtin_categories(),
            1,
        )
        .unwrap();

        assert_eq!(entry.floor_count(), 0);
        assert_eq!(entry.storage_count(), 0);
        assert_eq!(entry.total_count(), 0);
    }

    #[test]
    fn test_max_counts_do_not_overflow_total() {
        // Both cells at u32::MAX parse fine; the derived total must not wrap
        let entry = normalize(
            &row(&["OIL-001", "", "4294967295", "4294967295", "oil-filters"]),
            &roles(),
            &builtin_categories(),
            1,
        )
        .unwrap();

        assert_eq!(entry.floor_count(), u32::MAX);
        assert_eq!(entry.storage_count(), u32::MAX);
        assert_eq!(entry.total_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_negative_count_defaults_to_zero() {
        let entry = normalize(
            &row(&["OIL-001", "", "-5", "2", "oil-filters"]),
            &roles(),
            &builtin_categories(),
            1,
        )
        .unwrap();

        assert_eq!(entry.floor_count(), 0);
        assert_eq!(entry.storage_count(), 2);
    }

    #[test]
    fn test_unrecognized_category_is_row_error() {
        let err = normalize(
            &row(&["OIL-001", "", "1", "2", "unknown-zone"]),
            &roles(),
            &builtin_categories(),
            4,
        )
        .unwrap_err();

        assert_eq!(err.row_number, 4);
        assert!(err.reason.contains("unknown-zone"));
        assert!(err.reason.contains("Oil Filters"));
    }

    #[test]
    fn test_short_row_is_row_error() {
        let err = normalize(&row(&["OIL-001", "x"]), &roles(), &builtin_categories(), 2)
            .unwrap_err();

        assert_eq!(err.row_number, 2);
        assert!(err.reason.contains("insufficient cells"));
    }

    #[test]
    fn test_missing_product_name_column() {
        let roles = RoleMap {
            item_number: 0,
            product_name: None,
            floor_count: 1,
            storage_count: 2,
            category: 3,
        };
        let entry = normalize(
            &row(&["OIL-001", "1", "2", "oil-filters"]),
            &roles,
            &builtin_categories(),
            1,
        )
        .unwrap();

        assert_eq!(entry.product_name, None);
    }

    #[test]
    fn test_fresh_ids_per_row() {
        let cells = row(&["OIL-001", "", "1", "2", "oil-filters"]);
        let a = normalize(&cells, &roles(), &builtin_categories(), 1).unwrap();
        let b = normalize(&cells, &roles(), &builtin_categories(), 2).unwrap();
        assert_ne!(a.id, b.id);
    }
}
