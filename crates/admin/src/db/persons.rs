//! Person repository for database operations.
//!
//! Queries use the runtime-checked sqlx API with positional binds.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use person_admin_core::PersonId;

use super::RepositoryError;
use crate::models::person::Person;

/// Internal row type for person queries.
#[derive(Debug, sqlx::FromRow)]
struct PersonRow {
    id: i64,
    name: String,
    age: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<PersonRow> for Person {
    fn from(row: PersonRow) -> Self {
        Self {
            id: PersonId::new(row.id),
            name: row.name,
            age: row.age,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

/// Repository for person database operations.
pub struct PersonRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> PersonRepository<'a> {
    /// Create a new person repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// List all persons, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list_all(&self) -> Result<Vec<Person>, RepositoryError> {
        let rows = sqlx::query_as::<_, PersonRow>(
            r"
            SELECT id, name, age, created_at, updated_at
            FROM person
            ORDER BY id
            ",
        )
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Person::from).collect())
    }

    /// Get a person by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn get_by_id(&self, id: PersonId) -> Result<Option<Person>, RepositoryError> {
        let row = sqlx::query_as::<_, PersonRow>(
            r"
            SELECT id, name, age, created_at, updated_at
            FROM person
            WHERE id = ?1
            ",
        )
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        Ok(row.map(Person::from))
    }

    /// Create a new person; the store assigns the ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the insert fails.
    pub async fn create(&self, name: &str, age: &str) -> Result<Person, RepositoryError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, PersonRow>(
            r"
            INSERT INTO person (name, age, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, name, age, created_at, updated_at
            ",
        )
        .bind(name)
        .bind(age)
        .bind(now)
        .fetch_one(self.pool)
        .await?;

        Ok(Person::from(row))
    }

    /// Save an updated person back to the store.
    ///
    /// Callers fetch, mutate, then save; there is no compare-and-swap, so
    /// concurrent updates to the same ID are last-write-wins.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ID does not exist, or
    /// `RepositoryError::Database` if the update fails.
    pub async fn update(&self, person: &Person) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE person
            SET name = ?1, age = ?2, updated_at = ?3
            WHERE id = ?4
            ",
        )
        .bind(&person.name)
        .bind(&person.age)
        .bind(Utc::now())
        .bind(person.id.as_i64())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Delete a person by their ID.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ID does not exist, or
    /// `RepositoryError::Database` if the delete fails.
    pub async fn delete(&self, id: PersonId) -> Result<(), RepositoryError> {
        let result = sqlx::query("DELETE FROM person WHERE id = ?1")
            .bind(id.as_i64())
            .execute(self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    #[tokio::test]
    async fn test_create_assigns_fresh_id_and_lists() {
        let pool = test_pool().await;
        let repo = PersonRepository::new(&pool);

        let alice = repo.create("Alice", "30").await.unwrap();
        let persons = repo.list_all().await.unwrap();

        assert_eq!(persons.len(), 1);
        assert_eq!(persons[0].id, alice.id);
        assert_eq!(persons[0].name, "Alice");
        assert_eq!(persons[0].age, "30");
    }

    #[tokio::test]
    async fn test_update_overwrites_fields() {
        let pool = test_pool().await;
        let repo = PersonRepository::new(&pool);

        let mut person = repo.create("Alice", "30").await.unwrap();
        person.name = "Alicia".to_string();
        person.age = "31".to_string();
        repo.update(&person).await.unwrap();

        let fetched = repo.get_by_id(person.id).await.unwrap().unwrap();
        assert_eq!(fetched.name, "Alicia");
        assert_eq!(fetched.age, "31");
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = PersonRepository::new(&pool);

        let ghost = Person {
            id: PersonId::new(999),
            name: "Ghost".to_string(),
            age: "0".to_string(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };
        assert!(matches!(
            repo.update(&ghost).await,
            Err(RepositoryError::NotFound)
        ));
    }

    #[tokio::test]
    async fn test_delete_removes_row() {
        let pool = test_pool().await;
        let repo = PersonRepository::new(&pool);

        let person = repo.create("Alice", "30").await.unwrap();
        repo.delete(person.id).await.unwrap();

        assert!(repo.get_by_id(person.id).await.unwrap().is_none());
        assert!(repo.list_all().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let pool = test_pool().await;
        let repo = PersonRepository::new(&pool);

        assert!(matches!(
            repo.delete(PersonId::new(42)).await,
            Err(RepositoryError::NotFound)
        ));
        assert!(repo.list_all().await.unwrap().is_empty());
    }
}
