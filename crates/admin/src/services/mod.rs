//! Services for the admin panel.

pub mod auth;
