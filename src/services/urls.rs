//! Short URL CRUD and ownership services.
//!
//! Every operation except `resolve_url` is scoped to the owning user: a
//! caller may only observe or mutate entries whose owner id matches their
//! own.

use super::helpers::{generate_code, timestamp};
use crate::constants::MAX_CODE_GENERATION_RETRIES;
use crate::errors::AppError;
use crate::models::ShortUrl;
use crate::store::Store;

/// List every entry owned by `user_id`, sorted by short code for a stable
/// rendering order. Returns an empty list when the user owns nothing.
pub fn urls_for_user(store: &Store, user_id: &str) -> Result<Vec<ShortUrl>, AppError> {
    let urls = store.read_urls()?;

    let mut owned: Vec<ShortUrl> = urls
        .values()
        .filter(|u| u.user_id == user_id)
        .cloned()
        .collect();
    owned.sort_by(|a, b| a.short_code.cmp(&b.short_code));
    Ok(owned)
}

/// Create a new short URL owned by `user_id`.
///
/// The long URL is stored as an opaque string. The owner must exist in the
/// user directory at creation time.
pub fn create_url(
    store: &Store,
    long_url: &str,
    code_length: usize,
    user_id: &str,
) -> Result<ShortUrl, AppError> {
    let owner_exists = store.read_users()?.contains_key(user_id);
    if !owner_exists {
        return Err(AppError::user_not_found(user_id));
    }

    let mut urls = store.write_urls()?;

    // Generate a unique code with bounded retries
    let mut code = generate_code(code_length);
    let mut attempts = 0;
    while urls.contains_key(&code) && attempts < MAX_CODE_GENERATION_RETRIES {
        code = generate_code(code_length);
        attempts += 1;
    }
    if urls.contains_key(&code) {
        return Err(AppError::internal("failed to generate a unique short code"));
    }

    let now = timestamp();
    let entry = ShortUrl {
        short_code: code.clone(),
        long_url: long_url.to_string(),
        user_id: user_id.to_string(),
        clicks: 0,
        created_at: now.clone(),
        updated_at: now,
    };
    urls.insert(code, entry.clone());

    log::info!(
        "Created short URL: {} -> {} (user: {})",
        entry.short_code,
        entry.long_url,
        entry.user_id
    );
    Ok(entry)
}

/// Get an entry by its short code, with no ownership check
pub fn get_url(store: &Store, short_code: &str) -> Result<ShortUrl, AppError> {
    store
        .read_urls()?
        .get(short_code)
        .cloned()
        .ok_or_else(|| AppError::url_not_found(short_code))
}

/// Get an entry by its short code, enforcing ownership
pub fn get_owned_url(store: &Store, short_code: &str, user_id: &str) -> Result<ShortUrl, AppError> {
    let url = get_url(store, short_code)?;
    if url.user_id != user_id {
        return Err(AppError::not_owner("short URL"));
    }
    Ok(url)
}

/// Replace the long URL of an entry owned by `user_id`; the owner is
/// unchanged
pub fn update_url(
    store: &Store,
    short_code: &str,
    user_id: &str,
    new_long_url: &str,
) -> Result<ShortUrl, AppError> {
    let mut urls = store.write_urls()?;

    let entry = urls
        .get_mut(short_code)
        .ok_or_else(|| AppError::url_not_found(short_code))?;
    if entry.user_id != user_id {
        return Err(AppError::not_owner("short URL"));
    }

    entry.long_url = new_long_url.to_string();
    entry.updated_at = timestamp();

    log::info!(
        "Updated short URL: {} -> {} (user: {})",
        short_code,
        new_long_url,
        user_id
    );
    Ok(entry.clone())
}

/// Delete an entry owned by `user_id`
pub fn delete_url(store: &Store, short_code: &str, user_id: &str) -> Result<(), AppError> {
    let mut urls = store.write_urls()?;

    let entry = urls
        .get(short_code)
        .ok_or_else(|| AppError::url_not_found(short_code))?;
    if entry.user_id != user_id {
        return Err(AppError::not_owner("short URL"));
    }

    urls.remove(short_code);
    log::info!("Deleted short URL: {} (user: {})", short_code, user_id);
    Ok(())
}

/// Resolve a short code to its long URL for the public redirect path.
///
/// Any caller may resolve, owner or not. Increments the click counter.
pub fn resolve_url(store: &Store, short_code: &str) -> Result<String, AppError> {
    let mut urls = store.write_urls()?;

    let entry = urls
        .get_mut(short_code)
        .ok_or_else(|| AppError::url_not_found(short_code))?;
    entry.clicks += 1;
    Ok(entry.long_url.clone())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_url, create_test_user, setup_test_store};

    #[test]
    fn test_create_url() {
        let store = setup_test_store();
        let user = create_test_user(&store, "a@test.com", "pw1");

        let url = create_url(&store, "http://example.com", 6, &user.id).unwrap();
        assert_eq!(url.long_url, "http://example.com");
        assert_eq!(url.short_code.len(), 6);
        assert_eq!(url.user_id, user.id);
        assert_eq!(url.clicks, 0);
    }

    #[test]
    fn test_create_url_requires_existing_owner() {
        let store = setup_test_store();

        let result = create_url(&store, "http://example.com", 6, "zzzzzz");
        assert!(matches!(result, Err(AppError::UserNotFound(_))));
        assert!(store.read_urls().unwrap().is_empty());
    }

    #[test]
    fn test_urls_for_user_only_returns_owned_entries() {
        let store = setup_test_store();
        let alice = create_test_user(&store, "a@test.com", "pw1");
        let bob = create_test_user(&store, "b@test.com", "pw2");

        let a1 = create_test_url(&store, &alice.id, "http://a1.example.com");
        let a2 = create_test_url(&store, &alice.id, "http://a2.example.com");
        let b1 = create_test_url(&store, &bob.id, "http://b1.example.com");

        let alices: Vec<String> = urls_for_user(&store, &alice.id)
            .unwrap()
            .into_iter()
            .map(|u| u.short_code)
            .collect();
        assert_eq!(alices.len(), 2);
        assert!(alices.contains(&a1.short_code));
        assert!(alices.contains(&a2.short_code));
        assert!(!alices.contains(&b1.short_code));

        let bobs = urls_for_user(&store, &bob.id).unwrap();
        assert_eq!(bobs.len(), 1);
        assert_eq!(bobs[0].short_code, b1.short_code);
    }

    #[test]
    fn test_urls_for_user_empty_without_entries() {
        let store = setup_test_store();
        let user = create_test_user(&store, "a@test.com", "pw1");

        assert!(urls_for_user(&store, &user.id).unwrap().is_empty());
    }

    #[test]
    fn test_get_owned_url_enforces_ownership() {
        let store = setup_test_store();
        let alice = create_test_user(&store, "a@test.com", "pw1");
        let bob = create_test_user(&store, "b@test.com", "pw2");
        let url = create_test_url(&store, &alice.id, "http://example.com");

        assert!(get_owned_url(&store, &url.short_code, &alice.id).is_ok());

        let result = get_owned_url(&store, &url.short_code, &bob.id);
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let missing = get_owned_url(&store, "zzzzzz", &alice.id);
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_update_url() {
        let store = setup_test_store();
        let user = create_test_user(&store, "a@test.com", "pw1");
        let url = create_test_url(&store, &user.id, "http://old.example.com");

        let updated = update_url(&store, &url.short_code, &user.id, "http://new.example.com")
            .unwrap();
        assert_eq!(updated.long_url, "http://new.example.com");
        assert_eq!(updated.user_id, user.id);

        let stored = get_url(&store, &url.short_code).unwrap();
        assert_eq!(stored.long_url, "http://new.example.com");
    }

    #[test]
    fn test_update_by_non_owner_is_forbidden_and_leaves_entry_unchanged() {
        let store = setup_test_store();
        let alice = create_test_user(&store, "a@test.com", "pw1");
        let bob = create_test_user(&store, "b@test.com", "pw2");
        let url = create_test_url(&store, &alice.id, "http://example.com");

        let result = update_url(&store, &url.short_code, &bob.id, "http://evil.example.com");
        assert!(matches!(result, Err(AppError::Forbidden(_))));

        let stored = get_url(&store, &url.short_code).unwrap();
        assert_eq!(stored.long_url, "http://example.com");
        assert_eq!(stored.user_id, alice.id);
    }

    #[test]
    fn test_delete_url() {
        let store = setup_test_store();
        let user = create_test_user(&store, "a@test.com", "pw1");
        let url = create_test_url(&store, &user.id, "http://example.com");

        delete_url(&store, &url.short_code, &user.id).unwrap();
        assert!(matches!(
            get_url(&store, &url.short_code),
            Err(AppError::NotFound(_))
        ));
    }

    #[test]
    fn test_delete_by_non_owner_is_forbidden_and_leaves_entry() {
        let store = setup_test_store();
        let alice = create_test_user(&store, "a@test.com", "pw1");
        let bob = create_test_user(&store, "b@test.com", "pw2");
        let url = create_test_url(&store, &alice.id, "http://example.com");

        let result = delete_url(&store, &url.short_code, &bob.id);
        assert!(matches!(result, Err(AppError::Forbidden(_))));
        assert!(get_url(&store, &url.short_code).is_ok());
    }

    #[test]
    fn test_resolve_url_is_public_and_counts_clicks() {
        let store = setup_test_store();
        let user = create_test_user(&store, "a@test.com", "pw1");
        let url = create_test_url(&store, &user.id, "http://example.com");

        // No user id involved: resolution works for any caller
        assert_eq!(
            resolve_url(&store, &url.short_code).unwrap(),
            "http://example.com"
        );
        assert_eq!(
            resolve_url(&store, &url.short_code).unwrap(),
            "http://example.com"
        );

        assert_eq!(get_url(&store, &url.short_code).unwrap().clicks, 2);
    }

    #[test]
    fn test_resolve_unknown_code() {
        let store = setup_test_store();

        let result = resolve_url(&store, "zzzzzz");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    // The end-to-end ownership walk: register two users, interleave their
    // operations, and check neither can see or touch the other's entries.
    #[test]
    fn test_two_user_ownership_scenario() {
        let store = setup_test_store();
        let alice = crate::services::register_user(&store, "a@test.com", "pw1").unwrap();
        let link = create_url(&store, "http://example.com", 6, &alice.id).unwrap();

        let bob = crate::services::register_user(&store, "b@test.com", "pw2").unwrap();
        assert!(urls_for_user(&store, &bob.id).unwrap().is_empty());

        let denied = delete_url(&store, &link.short_code, &bob.id);
        assert!(matches!(denied, Err(AppError::Forbidden(_))));

        delete_url(&store, &link.short_code, &alice.id).unwrap();
        assert!(matches!(
            get_url(&store, &link.short_code),
            Err(AppError::NotFound(_))
        ));
    }
}
