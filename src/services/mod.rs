//! Business logic layer for the URL shortener.
//!
//! Contains the core functionality for registering users, verifying
//! credentials, and managing ownership-scoped short URLs.

mod auth;
mod helpers;
mod urls;

pub use auth::*;
pub use helpers::{generate_code, hash_password, timestamp, verify_password};
pub use urls::*;
