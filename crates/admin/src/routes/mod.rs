//! HTTP route handlers for the admin panel.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                - Redirect to the person list
//!
//! # Auth
//! GET  /login           - Login page
//! POST /login           - Login action (email + password form)
//! POST /logout          - Logout action
//!
//! # Persons (all auth-gated)
//! GET  /list            - Person listing (drains pending flash messages)
//! GET  /p/new           - Creation form
//! POST /p/new           - Create person
//! GET  /p/edit/{id}     - Edit form, pre-populated
//! POST /p/edit/{id}     - Update person
//! GET  /p/delete/{id}   - Delete person (GET kept for legacy clients)
//! ```

pub mod auth;
pub mod persons;

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};

use crate::state::AppState;

/// Create all routes for the admin panel.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/login", get(auth::login_page).post(auth::login))
        .route("/logout", post(auth::logout))
        .route("/list", get(persons::list))
        .route("/p/new", get(persons::new_form).post(persons::create))
        .route(
            "/p/edit/{id}",
            get(persons::edit_form).post(persons::update),
        )
        .route("/p/delete/{id}", get(persons::delete))
}

/// The panel has a single landing page: the person list.
async fn root() -> Redirect {
    Redirect::to("/list")
}
