//! Authentication route handlers.
//!
//! The login flow: a GET renders the form, a POST checks the submitted
//! email + password against the admin table. Success stores the admin
//! identity in the session and redirects to the listing page; any failure
//! redirects back to the form with one generic flash message, so wrong
//! password and unknown email are indistinguishable to the client.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::error::AppError;
use crate::middleware::{clear_current_admin, push_flash, set_current_admin, take_flash};
use crate::models::CurrentAdmin;
use crate::services::auth::AdminAuthService;
use crate::state::AppState;

/// The single failure message for every credential failure.
const LOGIN_FAILED_FLASH: &str = "Invalid email or password.";

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
}

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
struct LoginTemplate {
    flash: Vec<String>,
}

/// Render the login page.
///
/// GET /login
pub async fn login_page(session: Session) -> Result<Response, AppError> {
    let flash = take_flash(&session).await?;
    Ok(LoginTemplate { flash }.into_response())
}

/// Handle login form submission.
///
/// POST /login
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response, AppError> {
    let service = AdminAuthService::new(state.pool());

    match service.authenticate(&form.email, &form.password).await? {
        Some(admin) => {
            let current = CurrentAdmin {
                id: admin.id,
                email: admin.email,
            };
            set_current_admin(&session, &current).await?;
            tracing::info!(admin = %current.email, "Admin logged in");
            Ok(Redirect::to("/list").into_response())
        }
        None => {
            tracing::warn!("Failed admin login attempt");
            push_flash(&session, LOGIN_FAILED_FLASH).await?;
            Ok(Redirect::to("/login").into_response())
        }
    }
}

/// Logout and destroy the session.
///
/// POST /logout
pub async fn logout(session: Session) -> Result<Response, AppError> {
    clear_current_admin(&session).await?;
    session.flush().await?;
    Ok(Redirect::to("/login").into_response())
}
