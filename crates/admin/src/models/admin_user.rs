//! Admin account domain type.

use chrono::{DateTime, Utc};

use person_admin_core::{AdminId, Email};

/// An admin account (domain type).
///
/// `password_digest` only ever holds the hex digest written by the
/// repository; plaintext never appears on this type.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique admin ID.
    pub id: AdminId,
    /// Login email address.
    pub email: Email,
    /// Hex digest of the password.
    pub password_digest: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
