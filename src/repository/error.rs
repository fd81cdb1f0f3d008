// ==========================================
// Parts Inventory - Repository error types
// ==========================================
// Tooling: thiserror derive macros
// ==========================================

use thiserror::Error;

/// Repository layer error type.
#[derive(Error, Debug)]
pub enum RepositoryError {
    // ===== Database errors =====
    #[error("record not found: {entity} with id={id}")]
    NotFound { entity: String, id: String },

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    #[error("database lock acquisition failed: {0}")]
    LockError(String),

    #[error("database transaction failed: {0}")]
    DatabaseTransactionError(String),

    #[error("database query failed: {0}")]
    DatabaseQueryError(String),

    #[error("unique constraint violated: {0}")]
    UniqueConstraintViolation(String),

    #[error("foreign key constraint violated: {0}")]
    ForeignKeyViolation(String),

    // ===== Business rule errors =====
    #[error("business rule violated: {0}")]
    BusinessRuleViolation(String),

    #[error("validation failed: {0}")]
    ValidationError(String),

    // ===== Generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<rusqlite::Error> for RepositoryError {
    fn from(err: rusqlite::Error) -> Self {
        match err {
            rusqlite::Error::SqliteFailure(_, Some(msg)) => {
                if msg.contains("UNIQUE") {
                    RepositoryError::UniqueConstraintViolation(msg)
                } else if msg.contains("FOREIGN KEY") {
                    RepositoryError::ForeignKeyViolation(msg)
                } else {
                    RepositoryError::DatabaseQueryError(msg)
                }
            }
            rusqlite::Error::QueryReturnedNoRows => RepositoryError::NotFound {
                entity: "Unknown".to_string(),
                id: "Unknown".to_string(),
            },
            _ => RepositoryError::DatabaseQueryError(err.to_string()),
        }
    }
}

/// Result alias for the repository layer.
pub type RepositoryResult<T> = Result<T, RepositoryError>;
