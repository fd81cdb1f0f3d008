// ==========================================
// Parts Inventory - Entry domain model
// ==========================================
// The canonical inventory record: one counted SKU.
// Natural key: item_number (case-insensitive within a dataset).
// ==========================================

use serde::{Deserialize, Deserializer, Serialize};
use uuid::Uuid;

/// One inventory line record.
///
/// Count fields are private: `total_count` is derived and recomputed on every
/// mutation, so the invariant `total_count == floor_count + storage_count`
/// holds at all times.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    /// Opaque unique identifier, assigned at creation, never reused
    pub id: String,

    /// Natural key; non-empty, case-insensitively unique within a dataset
    pub item_number: String,

    /// Optional descriptive name
    pub product_name: Option<String>,

    /// Category id (must reference an existing category)
    pub category: String,

    floor_count: u32,
    storage_count: u32,
    // Wider than the operands so the sum can never overflow
    total_count: u64,
}

fn derive_total(floor_count: u32, storage_count: u32) -> u64 {
    u64::from(floor_count) + u64::from(storage_count)
}

impl Entry {
    /// Create a new entry with a freshly generated id.
    pub fn new(
        item_number: impl Into<String>,
        product_name: Option<String>,
        floor_count: u32,
        storage_count: u32,
        category: impl Into<String>,
    ) -> Self {
        Self::with_id(
            Uuid::new_v4().to_string(),
            item_number,
            product_name,
            floor_count,
            storage_count,
            category,
        )
    }

    /// Rehydrate an entry with a known id (repository / snapshot loads).
    pub fn with_id(
        id: impl Into<String>,
        item_number: impl Into<String>,
        product_name: Option<String>,
        floor_count: u32,
        storage_count: u32,
        category: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            item_number: item_number.into(),
            product_name,
            category: category.into(),
            floor_count,
            storage_count,
            total_count: derive_total(floor_count, storage_count),
        }
    }

    pub fn floor_count(&self) -> u32 {
        self.floor_count
    }

    pub fn storage_count(&self) -> u32 {
        self.storage_count
    }

    /// Always equal to `floor_count + storage_count`.
    pub fn total_count(&self) -> u64 {
        self.total_count
    }

    pub fn set_floor_count(&mut self, value: u32) {
        self.floor_count = value;
        self.total_count = derive_total(self.floor_count, self.storage_count);
    }

    pub fn set_storage_count(&mut self, value: u32) {
        self.storage_count = value;
        self.total_count = derive_total(self.floor_count, self.storage_count);
    }

    /// Lowercased natural key used for upsert and diff matching.
    pub fn item_key(&self) -> String {
        self.item_number.to_lowercase()
    }
}

// Deserialization goes through a shadow struct so a hand-edited or stale
// total_count can never enter the system: the total is always recomputed.
impl<'de> Deserialize<'de> for Entry {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Raw {
            id: String,
            item_number: String,
            #[serde(default)]
            product_name: Option<String>,
            category: String,
            #[serde(default)]
            floor_count: u32,
            #[serde(default)]
            storage_count: u32,
        }

        let raw = Raw::deserialize(deserializer)?;
        Ok(Entry::with_id(
            raw.id,
            raw.item_number,
            raw.product_name,
            raw.floor_count,
            raw.storage_count,
            raw.category,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_total_count_derived_at_creation() {
        let entry = Entry::new("OIL-001", None, 3, 4, "oil-filters");
        assert_eq!(entry.total_count(), 7);
    }

    #[test]
    fn test_total_count_recomputed_on_mutation() {
        let mut entry = Entry::new("OIL-001", None, 3, 4, "oil-filters");
        entry.set_floor_count(10);
        assert_eq!(entry.total_count(), 14);
        entry.set_storage_count(0);
        assert_eq!(entry.total_count(), 10);
    }

    #[test]
    fn test_zero_counts() {
        let entry = Entry::new("AIR-002", Some("Air Filter".to_string()), 0, 0, "air-filters");
        assert_eq!(entry.total_count(), 0);
    }

    #[test]
    fn test_total_count_survives_max_counts() {
        // Two counts that each fit u32 must still sum without overflow
        let entry = Entry::new("OIL-001", None, u32::MAX, u32::MAX, "oil-filters");
        assert_eq!(entry.total_count(), 2 * u64::from(u32::MAX));

        let mut entry = Entry::new("OIL-001", None, u32::MAX, 0, "oil-filters");
        entry.set_storage_count(u32::MAX);
        assert_eq!(entry.total_count(), 2 * u64::from(u32::MAX));
    }

    #[test]
    fn test_item_key_lowercased() {
        let entry = Entry::new("OIL-001", None, 1, 1, "oil-filters");
        assert_eq!(entry.item_key(), "oil-001");
    }

    #[test]
    fn test_deserialize_recomputes_total() {
        // A stale total_count in the payload must not survive
        let json = r#"{
            "id": "abc",
            "item_number": "OIL-001",
            "category": "oil-filters",
            "floor_count": 2,
            "storage_count": 3,
            "total_count": 99
        }"#;
        let entry: Entry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.total_count(), 5);
    }
}
