//! Data models and form DTOs for the URL shortener.
//!
//! Contains structures for the in-memory directories and the HTML form
//! payloads posted by the browser.

use serde::Deserialize;
use validator::Validate;

// ============================================================================
// Directory Entries
// ============================================================================

/// Represents a registered user in the user directory
#[derive(Debug, Clone)]
pub struct User {
    /// Unique identifier (generated alphanumeric code)
    pub id: String,
    /// User's email address (unique, compared case-insensitively)
    pub email: String,
    /// Argon2 digest of the user's password; the plaintext is never stored
    pub password_digest: String,
    /// When the user registered
    pub created_at: String,
}

/// Represents a shortened URL in the URL directory
#[derive(Debug, Clone)]
pub struct ShortUrl {
    /// The short code (unique key, e.g. "b2xVn2")
    pub short_code: String,
    /// The original long URL (opaque, stored as submitted)
    pub long_url: String,
    /// Id of the user who owns this entry
    pub user_id: String,
    /// Number of times this short URL has been followed
    pub clicks: i64,
    /// When the entry was created
    pub created_at: String,
    /// When the long URL was last edited
    pub updated_at: String,
}

// ============================================================================
// Form DTOs
// ============================================================================

/// Form body for user registration
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct RegisterForm {
    /// Email address (must be valid format)
    #[validate(email(message = "Invalid email format"))]
    #[validate(length(max = 255, message = "Email is too long (max 255 characters)"))]
    pub email: String,

    /// Password (must not be empty)
    #[validate(length(min = 1, message = "Password must not be empty"))]
    pub password: String,
}

/// Form body for logging in
#[derive(Debug, Clone, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Form body for creating or editing a short URL
///
/// The long URL is stored as an opaque string, exactly as submitted.
#[derive(Debug, Clone, Deserialize)]
pub struct UrlForm {
    pub long_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_form_accepts_valid_input() {
        let form = RegisterForm {
            email: "user@test.com".to_string(),
            password: "123".to_string(),
        };
        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_register_form_rejects_empty_email() {
        let form = RegisterForm {
            email: String::new(),
            password: "123".to_string(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_register_form_rejects_empty_password() {
        let form = RegisterForm {
            email: "user@test.com".to_string(),
            password: String::new(),
        };
        assert!(form.validate().is_err());
    }

    #[test]
    fn test_register_form_rejects_malformed_email() {
        let form = RegisterForm {
            email: "not-an-email".to_string(),
            password: "123".to_string(),
        };
        assert!(form.validate().is_err());
    }
}
