// ==========================================
// Parts Inventory - Config layer
// ==========================================
// System settings with database-backed overrides.
// Storage: config_kv table
// ==========================================

pub mod config_manager;

pub use config_manager::{config_keys, ConfigManager, DEFAULT_ERROR_PREVIEW_LIMIT};
