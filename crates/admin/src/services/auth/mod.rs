//! Admin authentication service.
//!
//! Email + password authentication against the admin table. The stored
//! value is an unsalted SHA-256 hex digest of the password - a single fast
//! digest kept for compatibility with the data this panel migrated from.
//! It is a known security weakness (no salt, no work factor); replacing it
//! with a real password hash breaks existing stored digests, so the
//! decision is documented in DESIGN.md rather than made silently here.

use secrecy::ExposeSecret;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

use person_admin_core::Email;

use crate::config::AdminConfig;
use crate::db::{AdminRepository, RepositoryError};
use crate::models::admin_user::AdminUser;

/// Compute the stored digest for a plaintext password.
///
/// Deterministic: the same plaintext always yields the same digest, which
/// is what makes lookup-free verification (digest and compare) work.
#[must_use]
pub fn password_digest(plaintext: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plaintext.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Admin authentication service.
pub struct AdminAuthService<'a> {
    admins: AdminRepository<'a>,
}

impl<'a> AdminAuthService<'a> {
    /// Create a new admin authentication service.
    #[must_use]
    pub const fn new(pool: &'a SqlitePool) -> Self {
        Self {
            admins: AdminRepository::new(pool),
        }
    }

    /// Verify a submitted email + password pair.
    ///
    /// Returns the matching admin on success and `None` on any credential
    /// failure. Unknown email, malformed email, and wrong password are
    /// deliberately indistinguishable to the caller so the login flow
    /// cannot leak which accounts exist.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError` only for store failures; credential
    /// mismatches are not errors.
    pub async fn authenticate(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Option<AdminUser>, RepositoryError> {
        let Ok(email) = Email::parse(email) else {
            return Ok(None);
        };

        let Some(admin) = self.admins.get_by_email(&email).await? else {
            return Ok(None);
        };

        if password_digest(password) == admin.password_digest {
            Ok(Some(admin))
        } else {
            Ok(None)
        }
    }
}

/// Seed the first admin account.
///
/// Runs at startup: if the admin table is empty and the bootstrap
/// credential pair is configured, create that account through the normal
/// repository path (so the digest hook applies). Does nothing when admins
/// already exist or no bootstrap pair is configured.
///
/// # Errors
///
/// Returns `RepositoryError` if the count or insert fails, or
/// `RepositoryError::DataCorruption` if the configured email is invalid.
pub async fn ensure_bootstrap_admin(
    pool: &SqlitePool,
    config: &AdminConfig,
) -> Result<Option<AdminUser>, RepositoryError> {
    let Some(bootstrap) = &config.bootstrap else {
        return Ok(None);
    };

    let admins = AdminRepository::new(pool);
    if admins.count().await? > 0 {
        return Ok(None);
    }

    let email = Email::parse(&bootstrap.email).map_err(|e| {
        RepositoryError::DataCorruption(format!("invalid ADMIN_BOOTSTRAP_EMAIL: {e}"))
    })?;

    let admin = admins
        .create(&email, bootstrap.password.expose_secret())
        .await?;
    tracing::info!(email = %admin.email, "Bootstrap admin account created");
    Ok(Some(admin))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use secrecy::SecretString;

    use super::*;
    use crate::db::test_pool;

    fn email(s: &str) -> Email {
        Email::parse(s).unwrap()
    }

    #[test]
    fn test_digest_is_deterministic() {
        assert_eq!(password_digest("123456"), password_digest("123456"));
    }

    #[test]
    fn test_distinct_passwords_distinct_digests() {
        assert_ne!(password_digest("123456"), password_digest("1234567"));
        assert_ne!(password_digest(""), password_digest(" "));
    }

    #[test]
    fn test_digest_is_hex_sha256() {
        let digest = password_digest("123456");
        assert_eq!(digest.len(), 64);
        assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[tokio::test]
    async fn test_authenticate_success() {
        let pool = test_pool().await;
        AdminRepository::new(&pool)
            .create(&email("admin@admin.com"), "123456")
            .await
            .unwrap();

        let service = AdminAuthService::new(&pool);
        let admin = service
            .authenticate("admin@admin.com", "123456")
            .await
            .unwrap();
        assert!(admin.is_some());
    }

    #[tokio::test]
    async fn test_authenticate_failures_are_uniform() {
        let pool = test_pool().await;
        AdminRepository::new(&pool)
            .create(&email("admin@admin.com"), "123456")
            .await
            .unwrap();

        let service = AdminAuthService::new(&pool);
        // Wrong password, unknown email, and malformed email all look the same
        assert!(service
            .authenticate("admin@admin.com", "wrong")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .authenticate("nobody@admin.com", "123456")
            .await
            .unwrap()
            .is_none());
        assert!(service
            .authenticate("not-an-email", "123456")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_bootstrap_creates_admin_once() {
        let pool = test_pool().await;
        let config = AdminConfig {
            database_url: SecretString::from("sqlite::memory:"),
            host: "127.0.0.1".parse().unwrap(),
            port: 0,
            base_url: "http://localhost:3000".to_string(),
            bootstrap: Some(crate::config::BootstrapAdmin {
                email: "admin@admin.com".to_string(),
                password: SecretString::from("123456"),
            }),
        };

        let created = ensure_bootstrap_admin(&pool, &config).await.unwrap();
        assert!(created.is_some());

        // Second run is a no-op: the table is no longer empty
        let second = ensure_bootstrap_admin(&pool, &config).await.unwrap();
        assert!(second.is_none());
        assert_eq!(AdminRepository::new(&pool).count().await.unwrap(), 1);
    }
}
