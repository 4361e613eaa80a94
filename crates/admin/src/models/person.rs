//! Person record domain type.

use chrono::{DateTime, Utc};

use person_admin_core::PersonId;

/// A person record, the entity managed through the CRUD screens.
///
/// `age` is kept as text: the source data carried it untyped and existing
/// rows may not all be numeric. New input is validated at the HTTP edge
/// before it reaches the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    /// Store-assigned unique ID.
    pub id: PersonId,
    /// Display name.
    pub name: String,
    /// Age, stored as text.
    pub age: String,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record was last updated.
    pub updated_at: DateTime<Utc>,
}
