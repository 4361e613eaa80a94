//! Domain models for the admin panel.

pub mod admin_user;
pub mod person;
pub mod session;

pub use admin_user::AdminUser;
pub use person::Person;
pub use session::{CurrentAdmin, keys as session_keys};
