//! Person Admin Core - Shared types library.
//!
//! Common types used by the admin panel binary. This crate contains only
//! types - no I/O, no database access, no HTTP - which keeps it lightweight
//! and usable from any context (handlers, repositories, tests).
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs and email addresses

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
