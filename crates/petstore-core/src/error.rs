//! # Error Types
//!
//! Domain-specific error types for petstore-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  petstore-core errors (this file)                                      │
//! │  └── CoreError        - NotFound, AssociationMismatch                  │
//! │                                                                         │
//! │  petstore-db errors (separate crate)                                   │
//! │  └── DbError          - Database operation failures                    │
//! │                                                                         │
//! │  petstore-service errors                                               │
//! │  └── ServiceError     - Core | Db, plus a boundary ErrorCode           │
//! │                                                                         │
//! │  Flow: CoreError / DbError → ServiceError → boundary response          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use thiserror::Error;

// =============================================================================
// Entity Kind
// =============================================================================

/// Which entity an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntityKind {
    PetStore,
    Employee,
    Customer,
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntityKind::PetStore => "Pet store",
            EntityKind::Employee => "Employee",
            EntityKind::Customer => "Customer",
        };
        f.write_str(name)
    }
}

// =============================================================================
// Core Error
// =============================================================================

/// Domain errors raised by the pet store service.
///
/// Both variants abort the current operation; the surrounding unit of work
/// is rolled back and the error travels to the boundary layer unchanged.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A lookup by id yielded nothing.
    ///
    /// ## When This Occurs
    /// - Saving an employee or customer under a store id that doesn't exist
    /// - Saving an entity with an id that doesn't exist
    /// - Retrieving or deleting a store that doesn't exist
    #[error("{entity} with ID={id} was not found")]
    NotFound { entity: EntityKind, id: i64 },

    /// An entity's existing store association doesn't match the store the
    /// caller is saving it under.
    ///
    /// ## When This Occurs
    /// ```text
    /// Employee 7 belongs to store 1
    ///      │
    ///      ▼
    /// save_employee(pet_store_id = 2, { employeeId: 7, ... })
    ///      │
    ///      ▼
    /// AssociationMismatch { entity: Employee, id: 7, pet_store_id: 2 }
    /// ```
    #[error("{entity} with ID={id} is not associated with pet store ID={pet_store_id}")]
    AssociationMismatch {
        entity: EntityKind,
        id: i64,
        pet_store_id: i64,
    },
}

impl CoreError {
    /// Creates a NotFound error for a given entity kind and id.
    pub fn not_found(entity: EntityKind, id: i64) -> Self {
        CoreError::NotFound { entity, id }
    }

    /// Creates an AssociationMismatch error.
    pub fn mismatch(entity: EntityKind, id: i64, pet_store_id: i64) -> Self {
        CoreError::AssociationMismatch {
            entity,
            id,
            pet_store_id,
        }
    }

    /// Returns true for lookups that found nothing.
    pub fn is_not_found(&self) -> bool {
        matches!(self, CoreError::NotFound { .. })
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::not_found(EntityKind::PetStore, 42);
        assert_eq!(err.to_string(), "Pet store with ID=42 was not found");

        let err = CoreError::mismatch(EntityKind::Employee, 7, 2);
        assert_eq!(
            err.to_string(),
            "Employee with ID=7 is not associated with pet store ID=2"
        );
    }

    #[test]
    fn test_is_not_found() {
        assert!(CoreError::not_found(EntityKind::Customer, 1).is_not_found());
        assert!(!CoreError::mismatch(EntityKind::Customer, 1, 2).is_not_found());
    }
}
