//! Admin account repository for database operations.
//!
//! The password digest hook lives at this seam: every write path that sets
//! a password accepts plaintext and stores only its digest, and no other
//! write path touches the digest column. Re-saving an admin without
//! changing the password therefore leaves the stored digest byte-identical.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use person_admin_core::{AdminId, Email};

use super::RepositoryError;
use crate::models::admin_user::AdminUser;
use crate::services::auth::password_digest;

/// Internal row type for admin queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminRow {
    id: i64,
    email: String,
    password_digest: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<AdminRow> for AdminUser {
    type Error = RepositoryError;

    fn try_from(row: AdminRow) -> Result<Self, Self::Error> {
        let email = Email::parse(&row.email).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid email in database: {e}"))
        })?;

        Ok(Self {
            id: AdminId::new(row.id),
            email,
            password_digest: row.password_digest,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Repository for admin account database operations.
pub struct AdminRepository<'a> {
    pool: &'a SqlitePool,
}

impl<'a> AdminRepository<'a> {
    /// Create a new admin repository.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self { pool }
    }

    /// Count admin accounts.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn count(&self) -> Result<i64, RepositoryError> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM admin")
            .fetch_one(self.pool)
            .await?;
        Ok(count)
    }

    /// Get an admin by their email address.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    /// Returns `RepositoryError::DataCorruption` if the stored data is invalid.
    pub async fn get_by_email(&self, email: &Email) -> Result<Option<AdminUser>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            SELECT id, email, password_digest, created_at, updated_at
            FROM admin
            WHERE email = ?1
            ",
        )
        .bind(email.as_str())
        .fetch_optional(self.pool)
        .await?;

        row.map(TryInto::try_into).transpose()
    }

    /// Create a new admin account.
    ///
    /// The plaintext password is digested here, before the write.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Conflict` if the email already exists.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn create(&self, email: &Email, password: &str) -> Result<AdminUser, RepositoryError> {
        let now = Utc::now();
        let row = sqlx::query_as::<_, AdminRow>(
            r"
            INSERT INTO admin (email, password_digest, created_at, updated_at)
            VALUES (?1, ?2, ?3, ?3)
            RETURNING id, email, password_digest, created_at, updated_at
            ",
        )
        .bind(email.as_str())
        .bind(password_digest(password))
        .bind(now)
        .fetch_one(self.pool)
        .await
        .map_err(map_unique_violation)?;

        row.try_into()
    }

    /// Change an admin's email without touching the password digest.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ID does not exist.
    /// Returns `RepositoryError::Conflict` if the email already exists.
    pub async fn update_email(&self, id: AdminId, email: &Email) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE admin
            SET email = ?1, updated_at = ?2
            WHERE id = ?3
            ",
        )
        .bind(email.as_str())
        .bind(Utc::now())
        .bind(id.as_i64())
        .execute(self.pool)
        .await
        .map_err(map_unique_violation)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    /// Replace an admin's password, digesting the new plaintext.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the ID does not exist, or
    /// `RepositoryError::Database` if the update fails.
    pub async fn set_password(&self, id: AdminId, password: &str) -> Result<(), RepositoryError> {
        let result = sqlx::query(
            r"
            UPDATE admin
            SET password_digest = ?1, updated_at = ?2
            WHERE id = ?3
            ",
        )
        .bind(password_digest(password))
        .bind(Utc::now())
        .bind(id.as_i64())
        .execute(self.pool)
        .await?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }
}

/// Map a unique-constraint failure on the email column to `Conflict`.
fn map_unique_violation(e: sqlx::Error) -> RepositoryError {
    match &e {
        sqlx::Error::Database(db) if db.is_unique_violation() => {
            RepositoryError::Conflict("email already exists".to_string())
        }
        _ => RepositoryError::Database(e),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::db::test_pool;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[tokio::test]
    async fn test_create_stores_digest_not_plaintext() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);

        let admin = repo.create(&email("admin@admin.com"), "123456").await.unwrap();
        assert_ne!(admin.password_digest, "123456");
        assert_eq!(admin.password_digest, password_digest("123456"));
    }

    #[tokio::test]
    async fn test_digest_unchanged_by_non_password_write() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);

        let admin = repo.create(&email("admin@admin.com"), "123456").await.unwrap();
        repo.update_email(admin.id, &email("root@admin.com"))
            .await
            .unwrap();

        let reloaded = repo
            .get_by_email(&email("root@admin.com"))
            .await
            .unwrap()
            .unwrap();
        assert_eq!(reloaded.password_digest, admin.password_digest);
    }

    #[tokio::test]
    async fn test_set_password_replaces_digest() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);

        let admin = repo.create(&email("admin@admin.com"), "123456").await.unwrap();
        repo.set_password(admin.id, "hunter2").await.unwrap();

        let reloaded = repo
            .get_by_email(&email("admin@admin.com"))
            .await
            .unwrap()
            .unwrap();
        assert_ne!(reloaded.password_digest, admin.password_digest);
        assert_eq!(reloaded.password_digest, password_digest("hunter2"));
    }

    #[tokio::test]
    async fn test_duplicate_email_is_conflict() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);

        repo.create(&email("admin@admin.com"), "123456").await.unwrap();
        assert!(matches!(
            repo.create(&email("admin@admin.com"), "other").await,
            Err(RepositoryError::Conflict(_))
        ));
    }

    #[tokio::test]
    async fn test_get_by_unknown_email_is_none() {
        let pool = test_pool().await;
        let repo = AdminRepository::new(&pool);

        assert!(repo
            .get_by_email(&email("nobody@admin.com"))
            .await
            .unwrap()
            .is_none());
    }
}
