//! Custom error types for the URL shortener application.
//!
//! Implements proper error handling with automatic HTTP response conversion.
//! Errors render as a small HTML page since the application is server-rendered.

use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use askama::Template;
use std::fmt;

/// Application-level errors
#[derive(Debug)]
pub enum AppError {
    /// Invalid input data (empty or malformed required field)
    ValidationError(String),
    /// Email already registered
    EmailAlreadyExists(String),
    /// No user matches the given email
    UserNotFound(String),
    /// Password did not verify against the stored digest
    InvalidCredentials(String),
    /// No valid session on a route that requires one
    Unauthenticated(String),
    /// Session present but the caller does not own the resource
    Forbidden(String),
    /// Short URL was not found
    NotFound(String),
    /// Internal server error
    InternalError(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AppError::EmailAlreadyExists(msg) => write!(f, "Email already exists: {}", msg),
            AppError::UserNotFound(msg) => write!(f, "User not found: {}", msg),
            AppError::InvalidCredentials(msg) => write!(f, "Invalid credentials: {}", msg),
            AppError::Unauthenticated(msg) => write!(f, "Unauthenticated: {}", msg),
            AppError::Forbidden(msg) => write!(f, "Forbidden: {}", msg),
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::InternalError(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

// ============================================================================
// Constructor Methods
// ============================================================================

impl AppError {
    /// Create a ValidationError with a message
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::ValidationError(message.into())
    }

    /// Create an EmailAlreadyExists error
    pub fn email_already_exists(email: &str) -> Self {
        AppError::EmailAlreadyExists(format!("Email '{}' is already registered", email))
    }

    /// Create a UserNotFound error
    pub fn user_not_found(identifier: &str) -> Self {
        AppError::UserNotFound(format!("No account found for '{}'", identifier))
    }

    /// Create an InvalidCredentials error
    pub fn invalid_credentials() -> Self {
        AppError::InvalidCredentials("Incorrect password".into())
    }

    /// Create an Unauthenticated error for a missing or invalid session
    pub fn missing_session() -> Self {
        AppError::Unauthenticated("You must be signed in to perform this action".into())
    }

    /// Create a Forbidden error for resource ownership violation
    pub fn not_owner(resource_type: &str) -> Self {
        AppError::Forbidden(format!(
            "You do not have permission to access this {}",
            resource_type
        ))
    }

    /// Create a NotFound error for a short URL
    pub fn url_not_found(short_code: &str) -> Self {
        AppError::NotFound(format!("Short URL '{}' not found", short_code))
    }

    /// Create an InternalError with a message
    pub fn internal(message: impl Into<String>) -> Self {
        AppError::InternalError(message.into())
    }

    /// The user-facing message carried by this error
    pub fn message(&self) -> &str {
        match self {
            AppError::ValidationError(msg)
            | AppError::EmailAlreadyExists(msg)
            | AppError::UserNotFound(msg)
            | AppError::InvalidCredentials(msg)
            | AppError::Unauthenticated(msg)
            | AppError::Forbidden(msg)
            | AppError::NotFound(msg)
            | AppError::InternalError(msg) => msg,
        }
    }

    /// Short machine-readable code for this error kind
    fn error_code(&self) -> &'static str {
        match self {
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::EmailAlreadyExists(_) => "EMAIL_ALREADY_EXISTS",
            AppError::UserNotFound(_) => "USER_NOT_FOUND",
            AppError::InvalidCredentials(_) => "INVALID_CREDENTIALS",
            AppError::Unauthenticated(_) => "UNAUTHENTICATED",
            AppError::Forbidden(_) => "FORBIDDEN",
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

/// Rendered error page
#[derive(Template)]
#[template(path = "error.html")]
struct ErrorPage {
    status: u16,
    code: &'static str,
    message: String,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::EmailAlreadyExists(_) => StatusCode::CONFLICT,
            AppError::UserNotFound(_) => StatusCode::NOT_FOUND,
            AppError::InvalidCredentials(_) => StatusCode::UNAUTHORIZED,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        let page = ErrorPage {
            status: status.as_u16(),
            code: self.error_code(),
            message: self.message().to_string(),
        };

        match page.render() {
            Ok(body) => HttpResponse::build(status)
                .content_type("text/html; charset=utf-8")
                .body(body),
            Err(e) => {
                log::error!("Failed to render error page: {}", e);
                HttpResponse::build(status)
                    .content_type("text/plain; charset=utf-8")
                    .body(format!("{} {}: {}", status.as_u16(), page.code, page.message))
            }
        }
    }
}
