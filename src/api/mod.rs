// ==========================================
// Parts Inventory - API layer
// ==========================================
// Business-facing interfaces over the store, importer and engine.
// ==========================================

pub mod error;
pub mod export_api;
pub mod import_api;
pub mod inventory_api;

pub use error::{ApiError, ApiResult};
pub use export_api::{ExportApi, ExportReport};
pub use import_api::ImportApi;
pub use inventory_api::InventoryApi;
