// ==========================================
// Parts Inventory - Domain layer
// ==========================================
// Entities and invariants; no persistence, no I/O.
// ==========================================

pub mod category;
pub mod entry;
pub mod snapshot;

pub use category::{builtin_categories, Category};
pub use entry::Entry;
pub use snapshot::{ImportBatch, Snapshot};
