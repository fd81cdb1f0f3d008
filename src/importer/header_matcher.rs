// ==========================================
// Parts Inventory - Header matcher
// ==========================================
// Maps a raw header row to the five column roles.
// Matching: normalize (strip spaces/underscores/hyphens, lowercase),
// then substring containment against per-role candidate lists.
// ==========================================

use crate::importer::error::{ColumnRole, ImportError, ImportResult};

/// Resolved column indices for one sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoleMap {
    pub item_number: usize,
    pub product_name: Option<usize>,
    pub floor_count: usize,
    pub storage_count: usize,
    pub category: usize,
}

/// Ordered candidate substrings per role; more specific forms first.
fn candidates(role: ColumnRole) -> &'static [&'static str] {
    match role {
        ColumnRole::ItemNumber => &["itemnumber", "item", "sku", "number", "code"],
        ColumnRole::ProductName => &["productname", "product", "name", "description"],
        ColumnRole::FloorCount => &["floorcount", "floor"],
        ColumnRole::StorageCount => &["storagecount", "storage", "stock", "back"],
        ColumnRole::Category => &["category", "type", "group"],
    }
}

/// Role resolution order. Each role claims its column independently; a column
/// already claimed by an earlier role is unavailable to later ones
/// (first role wins the column, so no header ever binds twice).
const ROLE_ORDER: [ColumnRole; 5] = [
    ColumnRole::ItemNumber,
    ColumnRole::ProductName,
    ColumnRole::FloorCount,
    ColumnRole::StorageCount,
    ColumnRole::Category,
];

/// Strip whitespace/underscores/hyphens and lowercase.
pub fn normalize_header(header: &str) -> String {
    header
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
        .collect::<String>()
        .to_lowercase()
}

/// Resolve a header row into a `RoleMap`.
///
/// item-number, floor-count, storage-count and category are required;
/// product-name is optional. On failure the error enumerates the missing
/// *role names* (not the headers that were present), so the caller can tell
/// the user exactly which columns to add.
pub fn resolve(headers: &[String]) -> ImportResult<RoleMap> {
    let normalized: Vec<String> = headers.iter().map(|h| normalize_header(h)).collect();
    let mut claimed = vec![false; normalized.len()];
    let mut resolved: [Option<usize>; 5] = [None; 5];

    for (slot, role) in ROLE_ORDER.iter().enumerate() {
        let found = normalized.iter().enumerate().find(|(idx, header)| {
            !claimed[*idx] && candidates(*role).iter().any(|cand| header.contains(cand))
        });
        if let Some((idx, _)) = found {
            claimed[idx] = true;
            resolved[slot] = Some(idx);
        }
    }

    let missing: Vec<ColumnRole> = ROLE_ORDER
        .iter()
        .enumerate()
        .filter(|(slot, role)| resolved[*slot].is_none() && **role != ColumnRole::ProductName)
        .map(|(_, role)| *role)
        .collect();

    match (resolved[0], resolved[2], resolved[3], resolved[4]) {
        (Some(item_number), Some(floor_count), Some(storage_count), Some(category))
            if missing.is_empty() =>
        {
            Ok(RoleMap {
                item_number,
                product_name: resolved[1],
                floor_count,
                storage_count,
                category,
            })
        }
        _ => Err(ImportError::MissingColumns { roles: missing }),
    }
}
