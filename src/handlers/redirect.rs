//! Public redirect endpoint handler.

use actix_web::{get, web, HttpResponse};

use crate::errors::AppError;
use crate::services;
use crate::store::Store;

/// Follow a short link to its stored long URL.
///
/// This is the public path: any caller may follow a short code, owner or
/// not, logged in or not.
#[get("/u/{code}")]
pub(super) async fn follow_short_url(
    store: web::Data<Store>,
    path: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let code = path.into_inner();
    let long_url = services::resolve_url(&store, &code)?;

    log::info!("Redirecting {} -> {}", code, long_url);

    Ok(HttpResponse::Found()
        .append_header(("Location", long_url))
        .finish())
}
