//! Core types for the person admin panel.

pub mod email;
pub mod id;

pub use email::{Email, EmailError};
pub use id::*;
