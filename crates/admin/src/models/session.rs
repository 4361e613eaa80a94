//! Session-stored types for authentication state and flash messages.

use serde::{Deserialize, Serialize};

use person_admin_core::{AdminId, Email};

/// Session-stored admin identity.
///
/// Minimal data stored in the session to identify the logged-in admin.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CurrentAdmin {
    /// Admin's database ID.
    pub id: AdminId,
    /// Admin's email address.
    pub email: Email,
}

/// Session keys for admin panel session data.
pub mod keys {
    /// Key for storing the current logged-in admin.
    pub const CURRENT_ADMIN: &str = "current_admin";

    /// Key for the one-shot flash message queue.
    pub const FLASH: &str = "flash";
}
