//! # Service Error Type
//!
//! One error type for every `PetStoreService` operation, plus the code a
//! boundary layer reports to its caller.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  PetStoreService::save_employee(...)                                   │
//! │       │                                                                 │
//! │       ├── store missing? ───── CoreError::NotFound ──────────┐         │
//! │       ├── wrong store? ─────── CoreError::AssociationMismatch┤         │
//! │       ├── SQL failed? ──────── DbError::... ─────────────────┤         │
//! │       │                                                      ▼         │
//! │       │                                              ServiceError      │
//! │       │                                                      │         │
//! │       │                                               .code()│         │
//! │       ▼                                                      ▼         │
//! │  Ok(PetStoreEmployee)                 NOT_FOUND / ASSOCIATION_MISMATCH │
//! │                                       VALIDATION_ERROR / DATABASE_ERROR│
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use thiserror::Error;
use tracing::error;

use petstore_core::CoreError;
use petstore_db::DbError;

/// Errors returned by `PetStoreService`.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Lookup or association rule failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Storage failed.
    #[error(transparent)]
    Db(#[from] DbError),
}

impl ServiceError {
    /// Maps the error onto a boundary error code.
    ///
    /// ## Mapping
    /// ```text
    /// CoreError::NotFound              → NOT_FOUND
    /// CoreError::AssociationMismatch   → ASSOCIATION_MISMATCH
    /// DbError::NotFound                → NOT_FOUND
    /// DbError::UniqueViolation         → VALIDATION_ERROR
    /// DbError::ForeignKeyViolation     → VALIDATION_ERROR
    /// any other DbError                → DATABASE_ERROR
    /// ```
    pub fn code(&self) -> ErrorCode {
        match self {
            ServiceError::Core(CoreError::NotFound { .. }) => ErrorCode::NotFound,
            ServiceError::Core(CoreError::AssociationMismatch { .. }) => {
                ErrorCode::AssociationMismatch
            }
            ServiceError::Db(DbError::NotFound { .. }) => ErrorCode::NotFound,
            ServiceError::Db(DbError::UniqueViolation { .. })
            | ServiceError::Db(DbError::ForeignKeyViolation { .. }) => ErrorCode::ValidationError,
            ServiceError::Db(_) => ErrorCode::DatabaseError,
        }
    }

    /// Returns true for lookups that found nothing.
    pub fn is_not_found(&self) -> bool {
        self.code() == ErrorCode::NotFound
    }
}

/// Result type for service operations.
pub type ServiceResult<T> = Result<T, ServiceError>;

// =============================================================================
// Boundary Codes
// =============================================================================

/// Machine-readable error codes for the boundary layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Resource not found (404)
    NotFound,

    /// Entity is linked to a different store (400)
    AssociationMismatch,

    /// A constraint rejected the write (400)
    ValidationError,

    /// Database operation failed (500)
    DatabaseError,
}

impl ErrorCode {
    /// HTTP status a boundary layer should answer with.
    pub fn http_status(&self) -> u16 {
        match self {
            ErrorCode::NotFound => 404,
            ErrorCode::AssociationMismatch | ErrorCode::ValidationError => 400,
            ErrorCode::DatabaseError => 500,
        }
    }
}

/// Serializable error body.
///
/// ```json
/// {
///   "code": "NOT_FOUND",
///   "message": "Pet store with ID=9 was not found"
/// }
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    pub code: ErrorCode,
    pub message: String,
}

impl From<&ServiceError> for ErrorResponse {
    fn from(err: &ServiceError) -> Self {
        let code = err.code();
        let message = match err {
            ServiceError::Core(e) => e.to_string(),
            ServiceError::Db(DbError::NotFound { entity, id }) => {
                format!("{} not found: {}", entity, id)
            }
            ServiceError::Db(DbError::ForeignKeyViolation { message }) => {
                error!("Foreign key violation: {}", message);
                "Invalid reference".to_string()
            }
            ServiceError::Db(e @ DbError::UniqueViolation { .. }) => e.to_string(),
            // Log the actual error but return a generic message
            ServiceError::Db(e) => {
                error!("Database error: {}", e);
                "Database operation failed".to_string()
            }
        };

        ErrorResponse { code, message }
    }
}

impl From<ServiceError> for ErrorResponse {
    fn from(err: ServiceError) -> Self {
        ErrorResponse::from(&err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use petstore_core::EntityKind;

    #[test]
    fn test_codes() {
        let err = ServiceError::from(CoreError::not_found(EntityKind::PetStore, 9));
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(err.is_not_found());

        let err = ServiceError::from(CoreError::mismatch(EntityKind::Employee, 3, 1));
        assert_eq!(err.code(), ErrorCode::AssociationMismatch);
        assert_eq!(err.code().http_status(), 400);

        let err = ServiceError::from(DbError::ForeignKeyViolation {
            message: "FOREIGN KEY constraint failed".into(),
        });
        assert_eq!(err.code(), ErrorCode::ValidationError);

        let err = ServiceError::from(DbError::PoolExhausted);
        assert_eq!(err.code(), ErrorCode::DatabaseError);
        assert_eq!(err.code().http_status(), 500);
    }

    #[test]
    fn test_response_body() {
        let err = ServiceError::from(CoreError::not_found(EntityKind::PetStore, 9));
        let body = serde_json::to_value(ErrorResponse::from(err)).unwrap();

        assert_eq!(body["code"], "NOT_FOUND");
        assert_eq!(body["message"], "Pet store with ID=9 was not found");
    }

    #[test]
    fn test_database_details_are_hidden() {
        let err = ServiceError::from(DbError::QueryFailed("no such table: pet_store".into()));
        let body = ErrorResponse::from(&err);

        assert_eq!(body.code, ErrorCode::DatabaseError);
        assert_eq!(body.message, "Database operation failed");
    }
}
