//! # Customer Repository
//!
//! Database operations for customers and their store links.
//!
//! ## Many-to-Many Links
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  customer                pet_store_customer              pet_store      │
//! │  ┌────┬───────┐          ┌──────────────┬─────────────┐  ┌────┬──────┐ │
//! │  │ id │ email │◄─────────│ customer_id  │ pet_store_id│─►│ id │ name │ │
//! │  ├────┼───────┤          ├──────────────┼─────────────┤  ├────┼──────┤ │
//! │  │  4 │ sam@  │          │      4       │      1      │  │  1 │ Paws │ │
//! │  │    │       │          │      4       │      2      │  │  2 │ Fins │ │
//! │  └────┴───────┘          └──────────────┴─────────────┘  └────┴──────┘ │
//! │                                                                         │
//! │  list_by_pet_store(1)  → [customer 4]                                  │
//! │  pet_store_ids(4)      → [1, 2]                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use petstore_core::Customer;

/// Repository for customer database operations.
#[derive(Debug)]
pub struct CustomerRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> CustomerRepository<'c> {
    /// Creates a new CustomerRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        CustomerRepository { conn }
    }

    /// Gets a customer by its ID.
    pub async fn find_by_id(&mut self, id: i64) -> DbResult<Option<Customer>> {
        let customer = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM customer
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(customer)
    }

    /// Lists every customer, ordered by id.
    pub async fn find_all(&mut self) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT id, first_name, last_name, email, created_at, updated_at
            FROM customer
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(customers)
    }

    /// Lists the customers linked to one store, ordered by id.
    pub async fn list_by_pet_store(&mut self, pet_store_id: i64) -> DbResult<Vec<Customer>> {
        let customers = sqlx::query_as::<_, Customer>(
            r#"
            SELECT c.id, c.first_name, c.last_name, c.email, c.created_at, c.updated_at
            FROM customer c
            INNER JOIN pet_store_customer psc ON psc.customer_id = c.id
            WHERE psc.pet_store_id = ?1
            ORDER BY c.id
            "#,
        )
        .bind(pet_store_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(customers)
    }

    /// Returns the ids of every store a customer is linked to, ascending.
    pub async fn pet_store_ids(&mut self, customer_id: i64) -> DbResult<Vec<i64>> {
        let ids: Vec<i64> = sqlx::query_scalar(
            r#"
            SELECT pet_store_id
            FROM pet_store_customer
            WHERE customer_id = ?1
            ORDER BY pet_store_id
            "#,
        )
        .bind(customer_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(ids)
    }

    /// Links a customer to a store. Linking twice is a no-op.
    ///
    /// ## Returns
    /// * `Ok(true)` - A new link was created
    /// * `Ok(false)` - The link already existed
    pub async fn add_to_pet_store(&mut self, customer_id: i64, pet_store_id: i64) -> DbResult<bool> {
        debug!(customer_id = %customer_id, pet_store_id = %pet_store_id, "Linking customer");

        let result = sqlx::query(
            r#"
            INSERT OR IGNORE INTO pet_store_customer (pet_store_id, customer_id)
            VALUES (?1, ?2)
            "#,
        )
        .bind(pet_store_id)
        .bind(customer_id)
        .execute(&mut *self.conn)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Inserts or updates a customer by identity. Store links are untouched.
    pub async fn save(&mut self, customer: &Customer) -> DbResult<Customer> {
        debug!(id = ?customer.id, "Saving customer");

        let now = Utc::now();

        let saved = sqlx::query_as::<_, Customer>(
            r#"
            INSERT INTO customer (
                id, first_name, last_name, email, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6
            )
            ON CONFLICT (id) DO UPDATE SET
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                email = excluded.email,
                updated_at = excluded.updated_at
            RETURNING id, first_name, last_name, email, created_at, updated_at
            "#,
        )
        .bind(customer.id)
        .bind(&customer.first_name)
        .bind(&customer.last_name)
        .bind(&customer.email)
        .bind(customer.created_at)
        .bind(now)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(saved)
    }

    /// Deletes a customer by id, together with its store links.
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting customer");

        let result = sqlx::query("DELETE FROM customer WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Customer", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig};
    use petstore_core::{Customer, PetStore};

    #[tokio::test]
    async fn test_links_are_idempotent() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let store = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        let customer = uow.customers().save(&Customer::default()).await.unwrap().id.unwrap();

        assert!(uow.customers().add_to_pet_store(customer, store).await.unwrap());
        assert!(!uow.customers().add_to_pet_store(customer, store).await.unwrap());

        assert_eq!(uow.customers().pet_store_ids(customer).await.unwrap(), vec![store]);
        assert_eq!(uow.customers().list_by_pet_store(store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_customer_in_two_stores() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let a = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        let b = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        let customer = uow.customers().save(&Customer::default()).await.unwrap().id.unwrap();

        uow.customers().add_to_pet_store(customer, b).await.unwrap();
        uow.customers().add_to_pet_store(customer, a).await.unwrap();

        assert_eq!(uow.customers().pet_store_ids(customer).await.unwrap(), vec![a, b]);
    }

    #[tokio::test]
    async fn test_delete_store_keeps_customer_row() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let store = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        let mut customer = Customer::default();
        customer.email = "kim@example.com".to_string();
        let customer = uow.customers().save(&customer).await.unwrap().id.unwrap();
        uow.customers().add_to_pet_store(customer, store).await.unwrap();

        uow.pet_stores().delete(store).await.unwrap();

        assert!(uow.customers().pet_store_ids(customer).await.unwrap().is_empty());
        let kept = uow.customers().find_by_id(customer).await.unwrap().unwrap();
        assert_eq!(kept.email, "kim@example.com");

        uow.customers().delete(customer).await.unwrap();
        assert!(uow.customers().find_all().await.unwrap().is_empty());
    }
}
