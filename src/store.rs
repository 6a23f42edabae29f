//! In-memory store for the user and URL directories.
//!
//! Both directories are process-wide mutable state held for the life of the
//! process; nothing is persisted. Each directory sits behind its own lock so
//! the store can be shared across worker threads.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::constants::USER_ID_LENGTH;
use crate::errors::AppError;
use crate::models::{ShortUrl, User};
use crate::services::{generate_code, hash_password, timestamp};

/// Shared application store holding both directories.
///
/// Constructed once at startup and handed to request handlers by reference.
/// No operation holds both locks at the same time.
#[derive(Debug, Default)]
pub struct Store {
    users: RwLock<HashMap<String, User>>,
    urls: RwLock<HashMap<String, ShortUrl>>,
}

impl Store {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Acquire the user directory for reading
    pub fn read_users(&self) -> Result<RwLockReadGuard<'_, HashMap<String, User>>, AppError> {
        self.users
            .read()
            .map_err(|_| AppError::internal("user directory lock poisoned"))
    }

    /// Acquire the user directory for writing
    pub fn write_users(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, User>>, AppError> {
        self.users
            .write()
            .map_err(|_| AppError::internal("user directory lock poisoned"))
    }

    /// Acquire the URL directory for reading
    pub fn read_urls(&self) -> Result<RwLockReadGuard<'_, HashMap<String, ShortUrl>>, AppError> {
        self.urls
            .read()
            .map_err(|_| AppError::internal("URL directory lock poisoned"))
    }

    /// Acquire the URL directory for writing
    pub fn write_urls(&self) -> Result<RwLockWriteGuard<'_, HashMap<String, ShortUrl>>, AppError> {
        self.urls
            .write()
            .map_err(|_| AppError::internal("URL directory lock poisoned"))
    }
}

/// Seed the store with the demo fixture data.
///
/// Two users with known passwords and three short URLs, so a fresh instance
/// is browsable right away. Password digests are computed at startup; the
/// plaintext never enters the store.
pub fn seed_demo_data(store: &Store) -> Result<(), AppError> {
    let fixtures: [(&str, &str, &[(&str, &str)]); 2] = [
        (
            "user@test.com",
            "123",
            &[
                ("b2xVn2", "http://www.lighthouselabs.ca"),
                ("9sm5xK", "http://www.google.com"),
            ],
        ),
        ("user2@test.com", "456", &[("d6Ty2l", "http://www.pawdopt.com")]),
    ];

    for (email, password, links) in fixtures {
        let user_id = {
            let mut users = store.write_users()?;

            let mut id = generate_code(USER_ID_LENGTH);
            while users.contains_key(&id) {
                id = generate_code(USER_ID_LENGTH);
            }

            users.insert(
                id.clone(),
                User {
                    id: id.clone(),
                    email: email.to_string(),
                    password_digest: hash_password(password)?,
                    created_at: timestamp(),
                },
            );
            id
        };

        let mut urls = store.write_urls()?;
        for (short_code, long_url) in links {
            let now = timestamp();
            urls.insert(
                short_code.to_string(),
                ShortUrl {
                    short_code: short_code.to_string(),
                    long_url: long_url.to_string(),
                    user_id: user_id.clone(),
                    clicks: 0,
                    created_at: now.clone(),
                    updated_at: now,
                },
            );
        }
    }

    log::info!(
        "Seeded store with {} users and {} URLs",
        store.read_users()?.len(),
        store.read_urls()?.len()
    );
    Ok(())
}
