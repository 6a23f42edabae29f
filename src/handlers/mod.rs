//! HTTP request handlers for the URL shortener.
//!
//! Defines all route handlers and configures the routing table.

mod auth;
mod health;
mod redirect;
mod urls;

use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use askama::Template;

use crate::errors::AppError;

/// Configure all application routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg
        // Auth pages
        .service(auth::register_form)
        .service(auth::register)
        .service(auth::login_form)
        .service(auth::login)
        .service(auth::logout)
        // URL pages ("/urls/new" must be registered before "/urls/{code}")
        .service(urls::new_url_form)
        .service(urls::list_urls)
        .service(urls::create_short_url)
        .service(urls::show_url)
        .service(urls::edit_short_url)
        .service(urls::delete_short_url)
        // Public surface
        .service(redirect::follow_short_url)
        .service(health::health_check)
        // Unknown routes fail open to the landing list rather than a 404
        .default_service(web::route().to(fallback));
}

/// Render an askama template into an HTML response with the given status
pub(super) fn render_html<T: Template>(
    status: StatusCode,
    template: &T,
) -> Result<HttpResponse, AppError> {
    let body = template
        .render()
        .map_err(|e| AppError::internal(format!("template rendering failed: {}", e)))?;

    Ok(HttpResponse::build(status)
        .content_type("text/html; charset=utf-8")
        .body(body))
}

/// 303 redirect used for page flows
pub(super) fn redirect_to(location: &str) -> HttpResponse {
    HttpResponse::SeeOther()
        .append_header(("Location", location.to_string()))
        .finish()
}

/// Fallback for unknown routes; `/urls` bounces anonymous callers to `/login`
async fn fallback() -> HttpResponse {
    redirect_to("/urls")
}
