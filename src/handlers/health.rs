//! Health check endpoint handler.

use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;
use crate::store::Store;

/// Health check endpoint reporting directory sizes
#[get("/health")]
pub(super) async fn health_check(store: web::Data<Store>) -> Result<HttpResponse, AppError> {
    let users = store.read_users()?.len();
    let urls = store.read_urls()?.len();

    Ok(HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "version": env!("CARGO_PKG_VERSION"),
        "users": users,
        "urls": urls,
    })))
}
