// ==========================================
// Parts Inventory - API error types
// ==========================================
// Converts repository/import errors into user-facing messages; every
// failure carries an explicit reason.
// ==========================================

use crate::importer::error::ImportError;
use crate::repository::error::RepositoryError;
use thiserror::Error;

/// API layer error type.
#[derive(Error, Debug)]
pub enum ApiError {
    // ===== Business rule errors =====
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("business rule violated: {0}")]
    BusinessRuleViolation(String),

    // ===== Data access errors =====
    #[error("database error: {0}")]
    DatabaseError(String),

    #[error("database connection failed: {0}")]
    DatabaseConnectionError(String),

    // ===== Import errors =====
    #[error("import failed: {0}")]
    ImportError(String),

    #[error("validation failed: {0}")]
    ValidationError(String),

    // ===== Generic =====
    #[error("internal error: {0}")]
    InternalError(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl From<RepositoryError> for ApiError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::NotFound { entity, id } => {
                ApiError::NotFound(format!("{entity} (id={id})"))
            }
            RepositoryError::DatabaseConnectionError(msg) => ApiError::DatabaseConnectionError(msg),
            RepositoryError::LockError(msg) => {
                ApiError::DatabaseConnectionError(format!("lock acquisition failed: {msg}"))
            }
            RepositoryError::DatabaseTransactionError(msg)
            | RepositoryError::DatabaseQueryError(msg) => ApiError::DatabaseError(msg),
            RepositoryError::UniqueConstraintViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("unique constraint violated: {msg}"))
            }
            RepositoryError::ForeignKeyViolation(msg) => {
                ApiError::BusinessRuleViolation(format!("foreign key violated: {msg}"))
            }
            RepositoryError::BusinessRuleViolation(msg) => ApiError::BusinessRuleViolation(msg),
            RepositoryError::ValidationError(msg) => ApiError::ValidationError(msg),
            RepositoryError::InternalError(msg) => ApiError::InternalError(msg),
            RepositoryError::Other(err) => ApiError::Other(err),
        }
    }
}

impl From<ImportError> for ApiError {
    fn from(err: ImportError) -> Self {
        ApiError::ImportError(err.to_string())
    }
}

/// Result alias for the API layer.
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repository_not_found_conversion() {
        let repo_err = RepositoryError::NotFound {
            entity: "Entry".to_string(),
            id: "E001".to_string(),
        };
        let api_err: ApiError = repo_err.into();
        match api_err {
            ApiError::NotFound(msg) => {
                assert!(msg.contains("Entry"));
                assert!(msg.contains("E001"));
            }
            other => panic!("expected NotFound, got {other:?}"),
        }
    }

    #[test]
    fn test_import_error_conversion_keeps_message() {
        let api_err: ApiError = ImportError::EmptyInput.into();
        assert!(api_err.to_string().contains("input is empty"));
    }
}
