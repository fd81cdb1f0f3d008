// ==========================================
// Parts Inventory - Core library
// ==========================================
// Count-sheet ingestion for auto-parts inventory counting:
// fuzzy header/category matching, row normalization, upsert
// reconciliation and snapshot differencing over SQLite.
// ==========================================

// ==========================================
// Module declarations
// ==========================================

// Domain layer - entities and invariants
pub mod domain;

// Repository layer - data access
pub mod repository;

// Engine layer - pure business rules
pub mod engine;

// Import layer - count-sheet ingestion
pub mod importer;

// Config layer - system settings
pub mod config;

// Database infrastructure (connection init / unified PRAGMAs)
pub mod db;

// Logging
pub mod logging;

// API layer - business interfaces
pub mod api;

// ==========================================
// Core type re-exports
// ==========================================

// Domain entities
pub use domain::{builtin_categories, Category, Entry, ImportBatch, Snapshot};

// Engine
pub use engine::{diff, reconcile, DiffPolicy, ReconcileOutcome};

// Import pipeline
pub use importer::{
    match_category, ColumnRole, ImportError, ImportReport, RowError, SheetImporter,
    SheetImporterImpl,
};

// API
pub use api::{ExportApi, ImportApi, InventoryApi};

// ==========================================
// Constants
// ==========================================

// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// Application name
pub const APP_NAME: &str = "Parts Inventory";
