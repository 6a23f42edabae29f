//! Test utilities and helpers.
//!
//! Provides common test infrastructure used across multiple test modules.
//! This module is only compiled when running tests.

#![cfg(test)]

use crate::config::Config;
use crate::models::{ShortUrl, User};
use crate::store::Store;

/// Create a fresh, empty store for testing.
pub fn setup_test_store() -> Store {
    Store::new()
}

/// Create a default test configuration.
pub fn test_config() -> Config {
    Config::default()
}

/// Helper to register a test user with a known password.
pub fn create_test_user(store: &Store, email: &str, password: &str) -> User {
    crate::services::register_user(store, email, password).expect("Failed to create test user")
}

/// Helper to create a test URL owned by the given user.
pub fn create_test_url(store: &Store, user_id: &str, long_url: &str) -> ShortUrl {
    crate::services::create_url(store, long_url, 6, user_id).expect("Failed to create test URL")
}

/// Extension trait for test assertions.
pub trait TestAssertions {
    /// Assert that a result is Ok.
    fn assert_ok(&self);
    /// Assert that a result is Err.
    fn assert_err(&self);
}

impl<T, E: std::fmt::Debug> TestAssertions for Result<T, E> {
    fn assert_ok(&self) {
        assert!(
            self.is_ok(),
            "Expected Ok, got Err: {:?}",
            self.as_ref().err()
        );
    }

    fn assert_err(&self) {
        assert!(self.is_err(), "Expected Err, got Ok");
    }
}

#[cfg(test)]
mod tests {
    use super::{create_test_url, create_test_user, setup_test_store, test_config, TestAssertions};

    #[test]
    fn test_setup_test_store() {
        let store = setup_test_store();
        assert!(store.read_users().unwrap().is_empty());
    }

    #[test]
    fn test_test_config() {
        let config = test_config();
        assert_eq!(config.short_code_length, 6);
    }

    #[test]
    fn test_create_test_user() {
        let store = setup_test_store();
        let user = create_test_user(&store, "test@example.com", "pw1");
        assert_eq!(user.email, "test@example.com");
        assert!(!user.id.is_empty());
    }

    #[test]
    fn test_create_test_url() {
        let store = setup_test_store();
        let user = create_test_user(&store, "test@example.com", "pw1");
        let url = create_test_url(&store, &user.id, "https://example.com");
        assert_eq!(url.long_url, "https://example.com");
        assert_eq!(url.short_code.len(), 6);
    }

    #[test]
    fn test_assertions() {
        let ok_result: Result<i32, &str> = Ok(42);
        ok_result.assert_ok();

        let err_result: Result<i32, &str> = Err("error");
        err_result.assert_err();
    }
}
