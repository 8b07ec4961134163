//! # Employee Repository
//!
//! Database operations for employees.
//!
//! An employee row carries its owning store in `pet_store_id`; a store's
//! employee list is the query [`EmployeeRepository::list_by_pet_store`].

use chrono::Utc;
use sqlx::SqliteConnection;
use tracing::debug;

use crate::error::{DbError, DbResult};
use petstore_core::Employee;

/// Repository for employee database operations.
#[derive(Debug)]
pub struct EmployeeRepository<'c> {
    conn: &'c mut SqliteConnection,
}

impl<'c> EmployeeRepository<'c> {
    /// Creates a new EmployeeRepository over the given connection.
    pub fn new(conn: &'c mut SqliteConnection) -> Self {
        EmployeeRepository { conn }
    }

    /// Gets an employee by its ID.
    pub async fn find_by_id(&mut self, id: i64) -> DbResult<Option<Employee>> {
        let employee = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, pet_store_id, first_name, last_name, job_title, phone,
                   created_at, updated_at
            FROM employee
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(&mut *self.conn)
        .await?;

        Ok(employee)
    }

    /// Lists every employee, ordered by id.
    pub async fn find_all(&mut self) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, pet_store_id, first_name, last_name, job_title, phone,
                   created_at, updated_at
            FROM employee
            ORDER BY id
            "#,
        )
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(employees)
    }

    /// Lists the employees of one store, ordered by id.
    pub async fn list_by_pet_store(&mut self, pet_store_id: i64) -> DbResult<Vec<Employee>> {
        let employees = sqlx::query_as::<_, Employee>(
            r#"
            SELECT id, pet_store_id, first_name, last_name, job_title, phone,
                   created_at, updated_at
            FROM employee
            WHERE pet_store_id = ?1
            ORDER BY id
            "#,
        )
        .bind(pet_store_id)
        .fetch_all(&mut *self.conn)
        .await?;

        Ok(employees)
    }

    /// Inserts or updates an employee by identity.
    ///
    /// Same rules as `PetStoreRepository::save`; the owning store is
    /// rewritten on update.
    ///
    /// ## Returns
    /// * `Ok(Employee)` - The row as stored
    /// * `Err(DbError::ForeignKeyViolation)` - `pet_store_id` doesn't exist
    pub async fn save(&mut self, employee: &Employee) -> DbResult<Employee> {
        debug!(
            id = ?employee.id,
            pet_store_id = %employee.pet_store_id,
            "Saving employee"
        );

        let now = Utc::now();

        let saved = sqlx::query_as::<_, Employee>(
            r#"
            INSERT INTO employee (
                id, pet_store_id, first_name, last_name, job_title, phone,
                created_at, updated_at
            ) VALUES (
                ?1, ?2, ?3, ?4, ?5, ?6,
                ?7, ?8
            )
            ON CONFLICT (id) DO UPDATE SET
                pet_store_id = excluded.pet_store_id,
                first_name = excluded.first_name,
                last_name = excluded.last_name,
                job_title = excluded.job_title,
                phone = excluded.phone,
                updated_at = excluded.updated_at
            RETURNING id, pet_store_id, first_name, last_name, job_title, phone,
                      created_at, updated_at
            "#,
        )
        .bind(employee.id)
        .bind(employee.pet_store_id)
        .bind(&employee.first_name)
        .bind(&employee.last_name)
        .bind(&employee.job_title)
        .bind(&employee.phone)
        .bind(employee.created_at)
        .bind(now)
        .fetch_one(&mut *self.conn)
        .await?;

        Ok(saved)
    }

    /// Deletes an employee by id.
    pub async fn delete(&mut self, id: i64) -> DbResult<()> {
        debug!(id = %id, "Deleting employee");

        let result = sqlx::query("DELETE FROM employee WHERE id = ?1")
            .bind(id)
            .execute(&mut *self.conn)
            .await?;

        if result.rows_affected() == 0 {
            return Err(DbError::not_found("Employee", id));
        }

        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use crate::{Database, DbConfig, DbError};
    use petstore_core::{Employee, PetStore};

    #[tokio::test]
    async fn test_list_by_pet_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let a = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        let b = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();

        for (store_id, name) in [(a, "Ada"), (b, "Bob"), (a, "Cy")] {
            let mut employee = Employee::for_pet_store(store_id);
            employee.first_name = name.to_string();
            uow.employees().save(&employee).await.unwrap();
        }

        let at_a = uow.employees().list_by_pet_store(a).await.unwrap();
        let names: Vec<_> = at_a.iter().map(|e| e.first_name.as_str()).collect();
        assert_eq!(names, vec!["Ada", "Cy"]);
        assert_eq!(uow.employees().find_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_save_rejects_unknown_store() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let err = uow
            .employees()
            .save(&Employee::for_pet_store(404))
            .await
            .unwrap_err();

        assert!(matches!(err, DbError::ForeignKeyViolation { .. }));
    }

    #[tokio::test]
    async fn test_update_moves_employee() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut uow = db.begin().await.unwrap();

        let a = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();
        let b = uow.pet_stores().save(&PetStore::default()).await.unwrap().id.unwrap();

        let mut employee = uow.employees().save(&Employee::for_pet_store(a)).await.unwrap();
        employee.pet_store_id = b;
        employee.job_title = "Manager".to_string();
        let moved = uow.employees().save(&employee).await.unwrap();

        assert_eq!(moved.id, employee.id);
        assert!(moved.works_at(b));

        let found = uow.employees().find_by_id(moved.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(found.job_title, "Manager");

        uow.employees().delete(moved.id.unwrap()).await.unwrap();
        assert!(uow.employees().find_all().await.unwrap().is_empty());
    }
}
