//! Auth page handlers: registration, login, and logout.
//!
//! Registration and login failures re-render the submitted form with an
//! inline error message instead of a bare error page.

use actix_web::http::StatusCode;
use actix_web::{get, post, web, HttpResponse, ResponseError};
use askama::Template;
use validator::Validate;

use super::render_html;
use crate::auth::{clear_session_cookie, session_cookie};
use crate::config::Config;
use crate::errors::AppError;
use crate::models::{LoginForm, RegisterForm};
use crate::services;
use crate::store::Store;

#[derive(Template)]
#[template(path = "register.html")]
struct RegisterTemplate {
    error: String,
    email: String,
}

#[derive(Template)]
#[template(path = "login.html")]
struct LoginTemplate {
    error: String,
    email: String,
}

/// Render the registration form
#[get("/register")]
pub(super) async fn register_form() -> Result<HttpResponse, AppError> {
    render_html(
        StatusCode::OK,
        &RegisterTemplate {
            error: String::new(),
            email: String::new(),
        },
    )
}

/// Create a user, establish the session, and land on the URL list
#[post("/register")]
pub(super) async fn register(
    store: web::Data<Store>,
    config: web::Data<Config>,
    form: web::Form<RegisterForm>,
) -> Result<HttpResponse, AppError> {
    if let Err(e) = form.validate() {
        let err = AppError::validation(format!("Invalid input: {}", e));
        return register_rejected(&err, &form.email);
    }

    let user = match services::register_user(&store, &form.email, &form.password) {
        Ok(user) => user,
        Err(err) => match err {
            AppError::ValidationError(_) | AppError::EmailAlreadyExists(_) => {
                return register_rejected(&err, &form.email);
            }
            other => return Err(other),
        },
    };

    let cookie = session_cookie(&user.id, &config)?;
    Ok(HttpResponse::SeeOther()
        .cookie(cookie)
        .append_header(("Location", "/urls"))
        .finish())
}

/// Re-render the registration form with an inline error, keeping the
/// submitted email
fn register_rejected(err: &AppError, email: &str) -> Result<HttpResponse, AppError> {
    render_html(
        err.status_code(),
        &RegisterTemplate {
            error: err.message().to_string(),
            email: email.to_string(),
        },
    )
}

/// Render the login form
#[get("/login")]
pub(super) async fn login_form() -> Result<HttpResponse, AppError> {
    render_html(
        StatusCode::OK,
        &LoginTemplate {
            error: String::new(),
            email: String::new(),
        },
    )
}

/// Verify credentials and establish the session
#[post("/login")]
pub(super) async fn login(
    store: web::Data<Store>,
    config: web::Data<Config>,
    form: web::Form<LoginForm>,
) -> Result<HttpResponse, AppError> {
    let user = match services::authenticate_user(&store, &form.email, &form.password) {
        Ok(user) => user,
        Err(err) => match err {
            AppError::UserNotFound(_) | AppError::InvalidCredentials(_) => {
                return render_html(
                    err.status_code(),
                    &LoginTemplate {
                        error: err.message().to_string(),
                        email: form.email.clone(),
                    },
                );
            }
            other => return Err(other),
        },
    };

    let cookie = session_cookie(&user.id, &config)?;
    Ok(HttpResponse::SeeOther()
        .cookie(cookie)
        .append_header(("Location", "/urls"))
        .finish())
}

/// Clear the session unconditionally; safe to call when already logged out
#[post("/logout")]
pub(super) async fn logout() -> HttpResponse {
    HttpResponse::SeeOther()
        .cookie(clear_session_cookie())
        .append_header(("Location", "/urls"))
        .finish()
}
