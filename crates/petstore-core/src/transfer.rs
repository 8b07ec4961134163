//! # Transfer Objects
//!
//! Boundary-facing shapes for pet stores, employees and customers, and the
//! field copy between them and the entities in [`crate::types`].
//!
//! ## Why Separate Shapes?
//! - Decouples the persisted model from the boundary contract
//! - Leaves out storage-managed fields (`created_at`, `updated_at`)
//! - Leaves out back-references (`Employee::pet_store_id`)
//! - camelCase keys for the boundary layer's JSON
//!
//! ## Copy Semantics
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request ──copy_into──► entity ──save──► row ──From──► response          │
//! │                                                                         │
//! │  copy_into: FULL overwrite of the scalar fields, including the id.      │
//! │             No partial-update semantics: an empty string in the         │
//! │             request becomes an empty string on the entity.              │
//! │  From:      projects the scalar fields back out. Collections on         │
//! │             PetStoreData start empty (summary view).                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Customer, Employee, PetStore};

// =============================================================================
// Pet Store Employee
// =============================================================================

/// Employee as seen by the boundary layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreEmployee {
    /// `None` asks the service to create a new employee.
    pub employee_id: Option<i64>,
    pub employee_first_name: String,
    pub employee_last_name: String,
    pub employee_phone: String,
    pub employee_job_title: String,
}

impl PetStoreEmployee {
    /// Overwrites the employee's scalar fields (id included) with this
    /// request's values. The owning store is left alone.
    pub fn copy_into(&self, employee: &mut Employee) {
        employee.id = self.employee_id;
        employee.first_name = self.employee_first_name.clone();
        employee.last_name = self.employee_last_name.clone();
        employee.job_title = self.employee_job_title.clone();
        employee.phone = self.employee_phone.clone();
    }
}

impl From<&Employee> for PetStoreEmployee {
    fn from(e: &Employee) -> Self {
        PetStoreEmployee {
            employee_id: e.id,
            employee_first_name: e.first_name.clone(),
            employee_last_name: e.last_name.clone(),
            employee_phone: e.phone.clone(),
            employee_job_title: e.job_title.clone(),
        }
    }
}

impl From<Employee> for PetStoreEmployee {
    fn from(e: Employee) -> Self {
        PetStoreEmployee::from(&e)
    }
}

// =============================================================================
// Pet Store Customer
// =============================================================================

/// Customer as seen by the boundary layer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreCustomer {
    /// `None` asks the service to create a new customer.
    pub customer_id: Option<i64>,
    pub customer_first_name: String,
    pub customer_last_name: String,
    pub customer_email: String,
}

impl PetStoreCustomer {
    /// Overwrites the customer's scalar fields (id included).
    pub fn copy_into(&self, customer: &mut Customer) {
        customer.id = self.customer_id;
        customer.first_name = self.customer_first_name.clone();
        customer.last_name = self.customer_last_name.clone();
        customer.email = self.customer_email.clone();
    }
}

impl From<&Customer> for PetStoreCustomer {
    fn from(c: &Customer) -> Self {
        PetStoreCustomer {
            customer_id: c.id,
            customer_first_name: c.first_name.clone(),
            customer_last_name: c.last_name.clone(),
            customer_email: c.email.clone(),
        }
    }
}

impl From<Customer> for PetStoreCustomer {
    fn from(c: Customer) -> Self {
        PetStoreCustomer::from(&c)
    }
}

// =============================================================================
// Pet Store Data
// =============================================================================

/// Pet store as seen by the boundary layer.
///
/// `employees` and `customers` are shallow: they carry the associated rows'
/// scalar fields only, never their other store links.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase", default)]
pub struct PetStoreData {
    /// `None` asks the service to create a new store.
    pub pet_store_id: Option<i64>,
    pub pet_store_name: String,
    pub pet_store_address: String,
    pub pet_store_city: String,
    pub pet_store_state: String,
    pub pet_store_zip: String,
    pub pet_store_phone: String,
    pub customers: Vec<PetStoreCustomer>,
    pub employees: Vec<PetStoreEmployee>,
}

impl PetStoreData {
    /// Full projection of a store with its associated employees and customers.
    pub fn with_associations(
        store: &PetStore,
        employees: &[Employee],
        customers: &[Customer],
    ) -> Self {
        PetStoreData {
            employees: employees.iter().map(PetStoreEmployee::from).collect(),
            customers: customers.iter().map(PetStoreCustomer::from).collect(),
            ..PetStoreData::from(store)
        }
    }

    /// Overwrites the store's scalar fields (id included). Collections in the
    /// request are ignored; associations are managed through the employee and
    /// customer operations.
    pub fn copy_into(&self, store: &mut PetStore) {
        store.id = self.pet_store_id;
        store.name = self.pet_store_name.clone();
        store.address = self.pet_store_address.clone();
        store.city = self.pet_store_city.clone();
        store.state = self.pet_store_state.clone();
        store.zip = self.pet_store_zip.clone();
        store.phone = self.pet_store_phone.clone();
    }
}

/// Summary projection: scalar fields only, empty collections.
impl From<&PetStore> for PetStoreData {
    fn from(p: &PetStore) -> Self {
        PetStoreData {
            pet_store_id: p.id,
            pet_store_name: p.name.clone(),
            pet_store_address: p.address.clone(),
            pet_store_city: p.city.clone(),
            pet_store_state: p.state.clone(),
            pet_store_zip: p.zip.clone(),
            pet_store_phone: p.phone.clone(),
            customers: Vec::new(),
            employees: Vec::new(),
        }
    }
}

impl From<PetStore> for PetStoreData {
    fn from(p: PetStore) -> Self {
        PetStoreData::from(&p)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
