//! # Unit of Work
//!
//! One database transaction spanning one service call.
//!
//! ```text
//! db.begin()  ──►  UnitOfWork ──► pet_stores() / employees() / customers()
//!                      │
//!                      ├── commit()    writes become visible
//!                      ├── rollback()  writes discarded
//!                      └── drop        same as rollback
//! ```
//!
//! Dropping a unit of work without committing rolls the transaction back, so
//! an early `?` return leaves nothing behind.

use sqlx::{Sqlite, SqlitePool, Transaction};
use std::fmt;
use tracing::debug;

use crate::error::{DbError, DbResult};
use crate::repository::customer::CustomerRepository;
use crate::repository::employee::EmployeeRepository;
use crate::repository::pet_store::PetStoreRepository;

/// An open transaction with repository access.
pub struct UnitOfWork {
    tx: Transaction<'static, Sqlite>,
}

impl fmt::Debug for UnitOfWork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnitOfWork").finish_non_exhaustive()
    }
}

impl UnitOfWork {
    pub(crate) async fn begin(pool: &SqlitePool) -> DbResult<Self> {
        let tx = pool.begin().await.map_err(DbError::transaction)?;
        debug!("Transaction started");
        Ok(UnitOfWork { tx })
    }

    /// Pet store repository bound to this transaction.
    pub fn pet_stores(&mut self) -> PetStoreRepository<'_> {
        PetStoreRepository::new(&mut *self.tx)
    }

    /// Employee repository bound to this transaction.
    pub fn employees(&mut self) -> EmployeeRepository<'_> {
        EmployeeRepository::new(&mut *self.tx)
    }

    /// Customer repository bound to this transaction.
    pub fn customers(&mut self) -> CustomerRepository<'_> {
        CustomerRepository::new(&mut *self.tx)
    }

    /// Commits every write made through this unit of work.
    pub async fn commit(self) -> DbResult<()> {
        self.tx.commit().await.map_err(DbError::transaction)?;
        debug!("Transaction committed");
        Ok(())
    }

    /// Discards every write made through this unit of work.
    pub async fn rollback(self) -> DbResult<()> {
        self.tx.rollback().await.map_err(DbError::transaction)?;
        debug!("Transaction rolled back");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use petstore_core::{Customer, Employee, PetStore};

    #[tokio::test]
    async fn test_commit_persists() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut uow = db.begin().await.unwrap();
        uow.pet_stores().save(&PetStore::default()).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = db.begin().await.unwrap();
        assert_eq!(uow.pet_stores().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_drop_rolls_back() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        {
            let mut uow = db.begin().await.unwrap();
            uow.pet_stores().save(&PetStore::default()).await.unwrap();
        }

        let mut uow = db.begin().await.unwrap();
        assert_eq!(uow.pet_stores().count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_explicit_rollback() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();

        let mut uow = db.begin().await.unwrap();
        uow.customers().save(&Customer::default()).await.unwrap();
        uow.rollback().await.unwrap();

        let mut uow = db.begin().await.unwrap();
        assert!(uow.customers().find_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_store_delete_cascades() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let store = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        uow.employees().save(&Employee::for_pet_store(store)).await.unwrap();
        uow.employees().save(&Employee::for_pet_store(store)).await.unwrap();
        let customer = uow.customers().save(&Customer::default()).await.unwrap().id.unwrap();
        uow.customers().add_to_pet_store(customer, store).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = db.begin().await.unwrap();
        uow.pet_stores().delete(store).await.unwrap();
        uow.commit().await.unwrap();

        let mut uow = db.begin().await.unwrap();
        assert!(uow.employees().find_all().await.unwrap().is_empty());
        assert!(uow.customers().pet_store_ids(customer).await.unwrap().is_empty());
        assert_eq!(uow.customers().find_all().await.unwrap().len(), 1);
    }
}
