// ==========================================
// Parts Inventory - Category domain model
// ==========================================
// Closed record type: matcher field access stays statically checkable.
// Built-ins use lowercase-kebab ids and default to locked.
// ==========================================

use serde::{Deserialize, Serialize};

/// A named inventory bucket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Stable identifier (lowercase-kebab for built-ins)
    pub id: String,

    /// Human-readable display name
    pub name: String,

    /// Advisory flag only: warns the caller, does not block mutation
    pub is_locked: bool,

    /// Only custom categories may be deleted (enforced by the store)
    pub is_custom: bool,
}

impl Category {
    /// Built-in category (locked, not custom).
    pub fn builtin(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_locked: true,
            is_custom: false,
        }
    }

    /// User-defined category (unlocked, deletable).
    pub fn custom(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_locked: false,
            is_custom: true,
        }
    }
}

/// The fixed category set every dataset starts with.
pub fn builtin_categories() -> Vec<Category> {
    vec![
        Category::builtin("oil-filters", "Oil Filters"),
        Category::builtin("air-filters", "Air Filters"),
        Category::builtin("cabin-filters", "Cabin Filters"),
        Category::builtin("fuel-filters", "Fuel Filters"),
        Category::builtin("wipers", "Wipers"),
    ]
}
