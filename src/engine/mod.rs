// ==========================================
// Parts Inventory - Engine layer
// ==========================================
// Pure business rules: upsert reconciliation and snapshot differencing.
// No I/O; orchestration lives in the API layer.
// ==========================================

pub mod reconciler;
pub mod snapshot_differ;

pub use reconciler::{reconcile, ReconcileOutcome};
pub use snapshot_differ::{diff, DiffPolicy};
