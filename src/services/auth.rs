//! User registration and credential verification services.

use super::helpers::{generate_code, hash_password, timestamp, verify_password};
use crate::constants::{MAX_CODE_GENERATION_RETRIES, USER_ID_LENGTH};
use crate::errors::AppError;
use crate::models::User;
use crate::store::Store;

/// Register a new user.
///
/// Fails fast on empty input or a duplicate email; no partial mutation is
/// performed on any failure path.
pub fn register_user(store: &Store, email: &str, password: &str) -> Result<User, AppError> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err(AppError::validation("Email and password must not be empty"));
    }

    let mut users = store.write_users()?;

    // Duplicate check is a case-insensitive linear scan over the directory
    if users.values().any(|u| u.email.eq_ignore_ascii_case(email)) {
        return Err(AppError::email_already_exists(email));
    }

    let mut id = generate_code(USER_ID_LENGTH);
    let mut attempts = 0;
    while users.contains_key(&id) && attempts < MAX_CODE_GENERATION_RETRIES {
        id = generate_code(USER_ID_LENGTH);
        attempts += 1;
    }
    if users.contains_key(&id) {
        return Err(AppError::internal("failed to generate a unique user id"));
    }

    let user = User {
        id: id.clone(),
        email: email.to_string(),
        password_digest: hash_password(password)?,
        created_at: timestamp(),
    };
    users.insert(id, user.clone());

    log::info!("Registered new user: {} (ID: {})", user.email, user.id);
    Ok(user)
}

/// Verify a user's credentials and return the resolved user.
///
/// Distinguishes an unknown email from a wrong password so callers can
/// surface the two cases separately.
pub fn authenticate_user(store: &Store, email: &str, password: &str) -> Result<User, AppError> {
    let users = store.read_users()?;

    let user = users
        .values()
        .find(|u| u.email.eq_ignore_ascii_case(email.trim()))
        .ok_or_else(|| AppError::user_not_found(email))?;

    if !verify_password(password, &user.password_digest)? {
        log::warn!("Failed login attempt for {}", user.email);
        return Err(AppError::invalid_credentials());
    }

    log::info!("User {} authenticated", user.email);
    Ok(user.clone())
}

/// Look up a user by id
pub fn get_user_by_id(store: &Store, user_id: &str) -> Result<User, AppError> {
    store
        .read_users()?
        .get(user_id)
        .cloned()
        .ok_or_else(|| AppError::user_not_found(user_id))
}
