//! # Domain Types
//!
//! Persisted entities of the pet store service.
//!
//! ## Entity Relationships
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Entities                                        │
//! │                                                                         │
//! │  ┌─────────────────┐        ┌─────────────────┐                        │
//! │  │    Employee     │  N:1   │    PetStore     │                        │
//! │  │  ─────────────  │───────►│  ─────────────  │                        │
//! │  │  id             │        │  id             │                        │
//! │  │  pet_store_id   │        │  name, address  │                        │
//! │  │  names, title   │        │  city/state/zip │                        │
//! │  └─────────────────┘        └────────▲────────┘                        │
//! │                                      │ M:N (pet_store_customer)        │
//! │                             ┌────────┴────────┐                        │
//! │                             │    Customer     │                        │
//! │                             │  ─────────────  │                        │
//! │                             │  id, names      │                        │
//! │                             │  email          │                        │
//! │                             └─────────────────┘                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## No Object Graph
//! Entities are plain records. Associations are explicit foreign keys
//! (`Employee::pet_store_id`) or link-table rows (customers), and the
//! "collections" on a store are queries run by the repositories. Nothing
//! here holds a reference back to its owner.
//!
//! ## Identity
//! `id` is `None` until the row has been inserted; SQLite assigns it.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Pet Store
// =============================================================================

/// A pet store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct PetStore {
    /// Row id, `None` for a store that has not been saved yet.
    pub id: Option<i64>,

    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    pub phone: String,

    /// When the row was first inserted. Never overwritten by updates.
    pub created_at: DateTime<Utc>,

    /// When the row was last saved.
    pub updated_at: DateTime<Utc>,
}

impl Default for PetStore {
    fn default() -> Self {
        let now = Utc::now();
        PetStore {
            id: None,
            name: String::new(),
            address: String::new(),
            city: String::new(),
            state: String::new(),
            zip: String::new(),
            phone: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

impl PetStore {
    /// Checks whether this store has been persisted.
    #[inline]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

// =============================================================================
// Employee
// =============================================================================

/// An employee working at exactly one pet store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: Option<i64>,

    /// Owning store (foreign key to `pet_store.id`).
    pub pet_store_id: i64,

    pub first_name: String,
    pub last_name: String,
    pub job_title: String,
    pub phone: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Employee {
    /// Creates an unsaved employee owned by the given store.
    pub fn for_pet_store(pet_store_id: i64) -> Self {
        let now = Utc::now();
        Employee {
            id: None,
            pet_store_id,
            first_name: String::new(),
            last_name: String::new(),
            job_title: String::new(),
            phone: String::new(),
            created_at: now,
            updated_at: now,
        }
    }

    /// Checks whether this employee works at the given store.
    #[inline]
    pub fn works_at(&self, pet_store_id: i64) -> bool {
        self.pet_store_id == pet_store_id
    }
}

// =============================================================================
// Customer
// =============================================================================

/// A customer, linked to any number of pet stores.
///
/// The store links are not part of the row; see
/// `CustomerRepository::pet_store_ids` in petstore-db.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "sqlx", derive(sqlx::FromRow))]
pub struct Customer {
    pub id: Option<i64>,

    pub first_name: String,
    pub last_name: String,
    pub email: String,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Default for Customer {
    fn default() -> Self {
        let now = Utc::now();
        Customer {
            id: None,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            created_at: now,
            updated_at: now,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_entities_have_no_id() {
        assert!(PetStore::default().is_new());
        assert_eq!(Customer::default().id, None);
        assert_eq!(Employee::for_pet_store(3).id, None);
    }

    #[test]
    fn test_employee_ownership() {
        let employee = Employee::for_pet_store(3);
        assert!(employee.works_at(3));
        assert!(!employee.works_at(4));
    }
}
