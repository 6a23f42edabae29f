//! Ownership-scoped URL page handlers: list, create, show, edit, delete.
//!
//! Page GETs bounce anonymous callers to the login form; mutating POSTs
//! reject them outright via the `AuthenticatedUser` extractor.

use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse};
use askama::Template;

use super::{redirect_to, render_html};
use crate::auth::{AuthenticatedUser, Identity};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{ShortUrl, UrlForm};
use crate::services;
use crate::store::Store;

#[derive(Template)]
#[template(path = "urls_index.html")]
struct UrlsIndexTemplate {
    email: String,
    urls: Vec<ShortUrl>,
}

#[derive(Template)]
#[template(path = "urls_new.html")]
struct UrlsNewTemplate {
    email: String,
}

#[derive(Template)]
#[template(path = "urls_show.html")]
struct UrlsShowTemplate {
    email: String,
    url: ShortUrl,
    short_link: String,
}

/// List the caller's short URLs
#[get("/urls")]
pub(super) async fn list_urls(
    identity: Identity,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = match identity.user_id() {
        Some(id) => id.to_string(),
        None => return Ok(redirect_to("/login")),
    };

    let user = services::get_user_by_id(&store, &user_id)?;
    let urls = services::urls_for_user(&store, &user_id)?;

    render_html(
        StatusCode::OK,
        &UrlsIndexTemplate {
            email: user.email,
            urls,
        },
    )
}

/// Render the creation form
#[get("/urls/new")]
pub(super) async fn new_url_form(
    identity: Identity,
    store: web::Data<Store>,
) -> Result<HttpResponse, AppError> {
    let user_id = match identity.user_id() {
        Some(id) => id.to_string(),
        None => return Ok(redirect_to("/login")),
    };

    let user = services::get_user_by_id(&store, &user_id)?;
    render_html(StatusCode::OK, &UrlsNewTemplate { email: user.email })
}

/// Create a new short URL owned by the caller
#[post("/urls")]
pub(super) async fn create_short_url(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    config: web::Data<Config>,
    form: web::Form<UrlForm>,
) -> Result<HttpResponse, AppError> {
    let url = services::create_url(
        &store,
        &form.long_url,
        config.short_code_length,
        &user.user_id,
    )?;

    Ok(redirect_to(&format!("/urls/{}", url.short_code)))
}

/// Show one of the caller's entries
#[get("/urls/{code}")]
pub(super) async fn show_url(
    identity: Identity,
    store: web::Data<Store>,
    config: web::Data<Config>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let user_id = match identity.user_id() {
        Some(id) => id.to_string(),
        None => return Ok(redirect_to("/login")),
    };

    let user = services::get_user_by_id(&store, &user_id)?;
    let url = services::get_owned_url(&store, &code, &user_id)?;
    let short_link = format!("{}/u/{}", config.base_url, url.short_code);

    render_html(
        StatusCode::OK,
        &UrlsShowTemplate {
            email: user.email,
            url,
            short_link,
        },
    )
}

/// Replace the long URL of one of the caller's entries
#[post("/urls/{code}")]
pub(super) async fn edit_short_url(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<String>,
    form: web::Form<UrlForm>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    services::update_url(&store, &code, &user.user_id, &form.long_url)?;

    Ok(redirect_to("/urls"))
}

/// Delete one of the caller's entries
#[post("/urls/{code}/delete")]
pub(super) async fn delete_short_url(
    user: AuthenticatedUser,
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    services::delete_url(&store, &code, &user.user_id)?;

    Ok(redirect_to("/urls"))
}
