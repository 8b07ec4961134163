//! # Pet Store Repository
//!
//! Database operations for pet stores.
//!
//! ## Key Operations
//! - Find by id / find all
//! - Save (insert or update by identity)
//! - Delete (employees and customer links cascade in the schema)

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use petstore_core::PetStore;

/// Repository for pet store database operations.
///
/// Borrows a connection for its lifetime; obtain one from
/// [`crate::UnitOfWork::pet_stores`] so every call joins the open transaction.
///
/// ## Usage
/// ```rust,ignore
/// let mut uow = db.begin().await?;
/// let store = uow.pet_stores().find_by_id(7).await?;
/// uow.commit().await?;
/// ```
#[derive(Debug)]
pub struct PetStoreRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> PetStoreRepository<'c> {
    /// Creates a new PetStoreRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        PetStoreRepository { conn }
    }

    /// Gets a pet store by its ID.
    ///
    /// ## Returns
    /// * `Ok(Some(PetStore))` - Store found
    /// * `Ok(None)` - Store not found
    pub async fn find_by_id(&mut self, id: i64) -> DbResult<Option<PetStore>> {
        let store = sqlx::query_as::<_, PetStore>(
            r#"
            SELECT id, name, address, city, state, zip, phone, created_at, updated_at
            FROM pet_store
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(store)
    }

    /// Lists every pet store, ordered by id.
    pub async fn find_all(&mut self) -> DbResult<Vec<PetStore>> {
        let stores = sqlx::query_as::<_, PetStore>(
            r#"
            SELECT id, name, address, city, state, zip, phone, created_at, updated_at
            FROM pet_store
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(stores)
    }

    /// Inserts or updates a pet store by identity.
    ///
    /// ## Upsert Rules
    /// ```text
    /// id = None      → INSERT, SQLite assigns the id
    /// id = Some(n)   → INSERT, or UPDATE of row n when it already exists
    ///
    /// UPDATE rewrites every scalar column and updated_at.
    /// created_at is written on insert only.
    /// ```
    ///
    /// ## Returns
    /// The row as stored, with its id and timestamps.
    pub async fn save(&mut self, store: &PetStore) -> DbResult<PetStore> {
        debug!(id = ?store.id, name = %store.name, "Saving pet store");

        let now = Utc::now();

        let saved = sqlx::query_as::<_, PetStore>(
            r#"
            INSERT INTO pet_store (
                id, name, address, city, state, zip, phone, created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9
            )
            ON CONFLICT (id) DO UPDATE SET
                name = excluded.name,
                address = excluded.address,
                city = excluded.city,
                state = excluded.state,
                zip = excluded.zip,
                phone = excluded.phone,
                updated_at = excluded.updated_at
            RETURNING id, name, address, city, state, zip, phone, created_at, updated_at
            "#,
        )
        .bind(store.id)
        .bind(&store.name)
        .bind(&store.address)
        .bind(&store.city)
        .bind(&store.state)
        .bind(&store.zip)
        .bind(&store.phone)
        .bind(store.created_at)
        .bind(now)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(saved)
    }

    /// Deletes a pet store by id.
    ///
    /// The schema cascades the delete to the store's employees and to its
    /// customer links. Customer rows are kept.
    ///
    /// ## Returns
    /// * `Ok(())` - Store deleted
    /// * `Err(DbError::NotFound)` - No row with that id
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting pet store");

        let result = sqlx::query("DELETE FROM pet_store WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("PetStore", id));
        }

        Ok(())
    }

    /// Counts pet stores (for diagnostics).
    pub async fn count(&mut self) -> DbResult<i64> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM pet_store")
            .fetch_one(&mut *self.conn)
            .await?;

        Ok(count)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use petstore_core::PetStore;

    fn store(name: &str) -> PetStore {
        PetStore {
            name: name.to_string(),
            city: "Boise".to_string(),
            state: "ID".to_string(),
            ..PetStore::default()
        }
    }

    #[tokio::test]
    async fn test_insert_assigns_id() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let first = uow.pet_stores().save(&store("First")).await.unwrap();
        let second = uow.pet_stores().save(&store("Second")).await.unwrap();

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);
        assert_eq!(first.name, "First");
        assert_eq!(uow.pet_stores().count().await.unwrap(), 2);
    }

    #[tokio::test]
    async fn test_update_keeps_created_at() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let saved = uow.pet_stores().save(&store("Before")).await.unwrap();

        let mut changed = saved.clone();
        changed.name = "After".to_string();
        changed.created_at = chrono::Utc::now() + chrono::Duration::days(1);
        let updated = uow.pet_stores().save(&changed).await.unwrap();

        assert_eq!(updated.id, saved.id);
        assert_eq!(updated.name, "After");
        assert_eq!(updated.created_at, saved.created_at);
        assert_eq!(uow.pet_stores().count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_find_all_and_delete() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let a = uow.pet_stores().save(&store("A")).await.unwrap();
        uow.pet_stores().save(&store("B")).await.unwrap();

        let all = uow.pet_stores().find_all().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].name, "A");

        let id = a.id.unwrap();
        uow.pet_stores().delete(id).await.unwrap();
        assert!(uow.pet_stores().find_by_id(id).await.unwrap().is_none());

        let err = uow.pet_stores().delete(id).await.unwrap_err();
        assert!(matches!(err, DbError::NotFound { .. }));
    }
}
