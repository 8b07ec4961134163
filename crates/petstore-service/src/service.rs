//! # Pet Store Service
//!
//! Find-or-create saves for stores, employees and customers, and reads that
//! project stores into transfer objects.
//!
//! ## Operation Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save_employee(pet_store_id = 1, { employeeId: 7, ... })               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  db.begin() ──► UnitOfWork                                             │
//! │       │                                                                 │
//! │       ├── load store 1 ─────────────── missing → NotFound ──┐          │
//! │       ├── load employee 7 ──────────── missing → NotFound ──┤          │
//! │       ├── employee 7 at store 1? ───── no → Mismatch ───────┤          │
//! │       ├── copy request fields                               │          │
//! │       ├── set owner = 1, save                               ▼          │
//! │       │                                        drop UnitOfWork         │
//! │       ▼                                        (rolled back)           │
//! │  uow.commit() ──► Ok(PetStoreEmployee)                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Find-or-Create
//! A request without an id creates a new row. A request with an id loads
//! that row and fails with `NotFound` when it doesn't exist.

use tracing::{debug, info, warn};

use petstore_core::{
    CoreError, Customer, Employee, EntityKind, PetStore, PetStoreCustomer, PetStoreData,
    PetStoreEmployee,
};
use petstore_db::{Database, DbError, UnitOfWork};

use crate::error::ServiceResult;

/// Pet store operations over a [`Database`].
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct PetStoreService {
    db: Database,
}

impl PetStoreService {
    /// Creates the service over an open database.
    pub fn new(db: Database) -> Self {
        PetStoreService { db }
    }

    /// Returns the underlying database handle.
    pub fn database(&self) -> &Database {
        &self.db
    }

    // =========================================================================
    // Pet Stores
    // =========================================================================

    /// Creates or updates a pet store.
    ///
    /// Every scalar field is overwritten with the request's value. The
    /// request's `employees` and `customers` lists are ignored.
    ///
    /// ## Returns
    /// * `Ok(PetStoreData)` - The stored row, with empty collections
    /// * `Err(NotFound)` - `pet_store_id` is set but no such store exists
    pub async fn save_pet_store(&self, data: PetStoreData) -> ServiceResult<PetStoreData> {
        let mut uow = self.db.begin().await?;

        let mut store = match data.pet_store_id {
            None => PetStore::default(),
            Some(id) => find_pet_store(&mut uow, id).await?,
        };

        data.copy_into(&mut store);
        let saved = uow.pet_stores().save(&store).await?;
        uow.commit().await?;

        info!(pet_store_id = ?saved.id, name = %saved.name, "Pet store saved");
        Ok(PetStoreData::from(saved))
    }

    /// Lists every pet store as a summary, ordered by id.
    ///
    /// Employee and customer lists are always empty here; use
    /// [`Self::retrieve_pet_store_by_id`] for a single store's associations.
    pub async fn retrieve_all_pet_stores(&self) -> ServiceResult<Vec<PetStoreData>> {
        let mut uow = self.db.begin().await?;
        let stores = uow.pet_stores().find_all().await?;
        uow.commit().await?;

        debug!(count = stores.len(), "Retrieved all pet stores");
        Ok(stores.into_iter().map(PetStoreData::from).collect())
    }

    /// Loads one pet store with its employees and customers.
    pub async fn retrieve_pet_store_by_id(&self, pet_store_id: i64) -> ServiceResult<PetStoreData> {
        let mut uow = self.db.begin().await?;

        let store = find_pet_store(&mut uow, pet_store_id).await?;
        let employees = uow.employees().list_by_pet_store(pet_store_id).await?;
        let customers = uow.customers().list_by_pet_store(pet_store_id).await?;
        uow.commit().await?;

        debug!(
            pet_store_id = %pet_store_id,
            employees = employees.len(),
            customers = customers.len(),
            "Retrieved pet store"
        );
        Ok(PetStoreData::with_associations(&store, &employees, &customers))
    }

    /// Deletes a pet store.
    ///
    /// Its employees and customer links go with it; customer rows stay.
    pub async fn delete_pet_store_by_id(&self, pet_store_id: i64) -> ServiceResult<()> {
        let mut uow = self.db.begin().await?;

        find_pet_store(&mut uow, pet_store_id).await?;
        uow.pet_stores().delete(pet_store_id).await?;
        uow.commit().await?;

        info!(pet_store_id = %pet_store_id, "Pet store deleted");
        Ok(())
    }

    // =========================================================================
    // Employees
    // =========================================================================

    /// Creates or updates an employee of the given store.
    ///
    /// ## Returns
    /// * `Ok(PetStoreEmployee)` - The stored employee
    /// * `Err(NotFound)` - The store, or the requested employee id, doesn't exist
    /// * `Err(AssociationMismatch)` - The employee works at another store
    pub async fn save_employee(
        &self,
        pet_store_id: i64,
        data: PetStoreEmployee,
    ) -> ServiceResult<PetStoreEmployee> {
        let mut uow = self.db.begin().await?;

        find_pet_store(&mut uow, pet_store_id).await?;

        let mut employee = match data.employee_id {
            None => Employee::for_pet_store(pet_store_id),
            Some(id) => {
                let existing = uow
                    .employees()
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CoreError::not_found(EntityKind::Employee, id))?;

                if !existing.works_at(pet_store_id) {
                    warn!(
                        employee_id = %id,
                        current = %existing.pet_store_id,
                        requested = %pet_store_id,
                        "Employee belongs to another pet store"
                    );
                    return Err(CoreError::mismatch(EntityKind::Employee, id, pet_store_id).into());
                }

                existing
            }
        };

        data.copy_into(&mut employee);
        employee.pet_store_id = pet_store_id;

        let saved = uow.employees().save(&employee).await?;
        uow.commit().await?;

        info!(
            employee_id = ?saved.id,
            pet_store_id = %pet_store_id,
            "Employee saved"
        );
        Ok(PetStoreEmployee::from(saved))
    }

    // =========================================================================
    // Customers
    // =========================================================================

    /// Creates or updates a customer and links it to the given store.
    ///
    /// An existing customer is accepted when it has no store links yet or
    /// when the given store is among its links.
    ///
    /// ## Returns
    /// * `Ok(PetStoreCustomer)` - The stored customer
    /// * `Err(NotFound)` - The store, or the requested customer id, doesn't exist
    /// * `Err(AssociationMismatch)` - The customer is linked only to other stores
    pub async fn save_customer(
        &self,
        pet_store_id: i64,
        data: PetStoreCustomer,
    ) -> ServiceResult<PetStoreCustomer> {
        let mut uow = self.db.begin().await?;

        find_pet_store(&mut uow, pet_store_id).await?;

        let mut customer = match data.customer_id {
            None => Customer::default(),
            Some(id) => {
                let existing = uow
                    .customers()
                    .find_by_id(id)
                    .await?
                    .ok_or_else(|| CoreError::not_found(EntityKind::Customer, id))?;

                let linked = uow.customers().pet_store_ids(id).await?;
                if !linked.is_empty() && !linked.contains(&pet_store_id) {
                    warn!(
                        customer_id = %id,
                        linked = ?linked,
                        requested = %pet_store_id,
                        "Customer is not associated with the pet store"
                    );
                    return Err(CoreError::mismatch(EntityKind::Customer, id, pet_store_id).into());
                }

                existing
            }
        };

        data.copy_into(&mut customer);

        // The link row references the customer, so the row goes first
        let saved = uow.customers().save(&customer).await?;
        let customer_id = saved
            .id
            .ok_or_else(|| DbError::Internal("saved customer has no id".to_string()))?;
        uow.customers().add_to_pet_store(customer_id, pet_store_id).await?;
        uow.commit().await?;

        info!(
            customer_id = %customer_id,
            pet_store_id = %pet_store_id,
            "Customer saved"
        );
        Ok(PetStoreCustomer::from(saved))
    }
}

/// Loads a store or fails with `NotFound`.
async fn find_pet_store(uow: &mut UnitOfWork, pet_store_id: i64) -> ServiceResult<PetStore> {
    let store = uow
        .pet_stores()
        .find_by_id(pet_store_id)
        .await?
        .ok_or_else(|| CoreError::not_found(EntityKind::PetStore, pet_store_id))?;

    Ok(store)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use petstore_db::DbConfig;

    async fn service() -> PetStoreService {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        PetStoreService::new(db)
    }

    fn store_request(name: &str) -> PetStoreData {
        PetStoreData {
            pet_store_name: name.to_string(),
            pet_store_city: "Tulsa".to_string(),
            ..PetStoreData::default()
        }
    }

    #[tokio::test]
    async fn test_save_pet_store_ignores_request_collections() {
        let service = service().await;

        let mut request = store_request("Paws");
        request.employees.push(PetStoreEmployee::default());
        request.customers.push(PetStoreCustomer::default());

        let saved = service.save_pet_store(request).await.unwrap();
        assert!(saved.employees.is_empty());
        assert!(saved.customers.is_empty());

        let id = saved.pet_store_id.unwrap();
        let loaded = service.retrieve_pet_store_by_id(id).await.unwrap();
        assert!(loaded.employees.is_empty());
        assert!(loaded.customers.is_empty());
    }

    #[tokio::test]
    async fn test_save_pet_store_unknown_id() {
        let service = service().await;

        let mut request = store_request("Ghost");
        request.pet_store_id = Some(41);

        let err = service.save_pet_store(request).await.unwrap_err();
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert!(service.retrieve_all_pet_stores().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_save_employee_unknown_store() {
        let service = service().await;

        let err = service
            .save_employee(5, PetStoreEmployee::default())
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::ServiceError::Core(CoreError::NotFound {
                entity: EntityKind::PetStore,
                id: 5
            })
        ));
    }

    #[tokio::test]
    async fn test_save_employee_unknown_employee() {
        let service = service().await;
        let store = service.save_pet_store(store_request("A")).await.unwrap();

        let request = PetStoreEmployee {
            employee_id: Some(77),
            ..PetStoreEmployee::default()
        };
        let err = service
            .save_employee(store.pet_store_id.unwrap(), request)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            crate::ServiceError::Core(CoreError::NotFound {
                entity: EntityKind::Employee,
                id: 77
            })
        ));
    }

    #[tokio::test]
    async fn test_update_employee_in_place() {
        let service = service().await;
        let store = service.save_pet_store(store_request("A")).await.unwrap();
        let store_id = store.pet_store_id.unwrap();

        let created = service
            .save_employee(
                store_id,
                PetStoreEmployee {
                    employee_first_name: "Ada".to_string(),
                    employee_job_title: "Clerk".to_string(),
                    ..PetStoreEmployee::default()
                },
            )
            .await
            .unwrap();

        let mut update = created.clone();
        update.employee_job_title = "Manager".to_string();
        let updated = service.save_employee(store_id, update).await.unwrap();

        assert_eq!(updated.employee_id, created.employee_id);
        assert_eq!(updated.employee_job_title, "Manager");

        let loaded = service.retrieve_pet_store_by_id(store_id).await.unwrap();
        assert_eq!(loaded.employees, vec![updated]);
    }

    #[tokio::test]
    async fn test_unlinked_customer_is_associable() {
        let service = service().await;
        let store = service.save_pet_store(store_request("A")).await.unwrap();
        let store_id = store.pet_store_id.unwrap();

        // A customer row with no store links
        let orphan_id = {
            let mut uow = service.database().begin().await.unwrap();
            let saved = uow.customers().save(&Customer::default()).await.unwrap();
            uow.commit().await.unwrap();
            saved.id.unwrap()
        };

        let request = PetStoreCustomer {
            customer_id: Some(orphan_id),
            customer_email: "new@example.com".to_string(),
            ..PetStoreCustomer::default()
        };
        let saved = service.save_customer(store_id, request).await.unwrap();
        assert_eq!(saved.customer_id, Some(orphan_id));

        let loaded = service.retrieve_pet_store_by_id(store_id).await.unwrap();
        assert_eq!(loaded.customers.len(), 1);
        assert_eq!(loaded.customers[0].customer_email, "new@example.com");
    }

    #[tokio::test]
    async fn test_resaving_customer_keeps_one_link() {
        let service = service().await;
        let store = service.save_pet_store(store_request("A")).await.unwrap();
        let store_id = store.pet_store_id.unwrap();

        let created = service
            .save_customer(store_id, PetStoreCustomer::default())
            .await
            .unwrap();
        service.save_customer(store_id, created.clone()).await.unwrap();
        service.save_customer(store_id, created).await.unwrap();

        let loaded = service.retrieve_pet_store_by_id(store_id).await.unwrap();
        assert_eq!(loaded.customers.len(), 1);
    }
}
