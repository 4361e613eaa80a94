//! Person CRUD route handlers.
//!
//! All five operations are auth-gated: [`RequireAdmin`] runs before the
//! handler body, so unauthenticated requests are redirected to the login
//! page before any store access. Form input is validated before it
//! reaches the store; invalid input redirects back to the form with a
//! flash message and performs no mutation.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, State},
    response::{IntoResponse, Redirect, Response},
};
use serde::Deserialize;
use tower_sessions::Session;

use person_admin_core::PersonId;

use crate::db::PersonRepository;
use crate::error::AppError;
use crate::middleware::{RequireAdmin, push_flash, take_flash};
use crate::models::Person;
use crate::state::AppState;

/// Informational flash enqueued by visiting the creation form; it shows
/// on the next rendered page (normally the listing).
const VISITED_NEW_FLASH: &str = "You visited /new";

/// Person form data, shared by the create and update operations.
///
/// The schema is explicit: exactly these two named fields, nothing else
/// from the request body is ever copied into the record.
#[derive(Debug, Deserialize)]
pub struct PersonForm {
    pub name: String,
    pub age: String,
}

impl PersonForm {
    /// Validate the form, returning trimmed `(name, age)` on success.
    ///
    /// Name must be non-empty; age must parse as an unsigned integer.
    fn validate(&self) -> Result<(String, String), String> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err("Name must not be empty.".to_string());
        }

        let age = self.age.trim();
        if age.parse::<u32>().is_err() {
            return Err("Age must be a whole number.".to_string());
        }

        Ok((name.to_string(), age.to_string()))
    }
}

// =============================================================================
// Templates
// =============================================================================

/// Person listing template.
#[derive(Template, WebTemplate)]
#[template(path = "persons/list.html")]
struct ListTemplate {
    persons: Vec<Person>,
    flash: Vec<String>,
}

/// Creation form template.
#[derive(Template, WebTemplate)]
#[template(path = "persons/new.html")]
struct NewTemplate {
    flash: Vec<String>,
}

/// Edit form template, pre-populated with the current record.
#[derive(Template, WebTemplate)]
#[template(path = "persons/edit.html")]
struct EditTemplate {
    person: Person,
    flash: Vec<String>,
}

// =============================================================================
// Handlers
// =============================================================================

/// Render the person listing with any pending flash messages.
///
/// GET /list
pub async fn list(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
) -> Result<Response, AppError> {
    let persons = PersonRepository::new(state.pool()).list_all().await?;
    let flash = take_flash(&session).await?;
    Ok(ListTemplate { persons, flash }.into_response())
}

/// Render the empty creation form.
///
/// GET /p/new
///
/// Visiting enqueues a fixed informational flash for the next page;
/// pending messages (e.g. a validation failure that redirected here)
/// are drained into this render first.
pub async fn new_form(
    RequireAdmin(_admin): RequireAdmin,
    session: Session,
) -> Result<Response, AppError> {
    let flash = take_flash(&session).await?;
    push_flash(&session, VISITED_NEW_FLASH).await?;
    Ok(NewTemplate { flash }.into_response())
}

/// Create a person and return to the listing.
///
/// POST /p/new
pub async fn create(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    let (name, age) = match form.validate() {
        Ok(fields) => fields,
        Err(message) => {
            push_flash(&session, &message).await?;
            return Ok(Redirect::to("/p/new").into_response());
        }
    };

    let person = PersonRepository::new(state.pool()).create(&name, &age).await?;
    tracing::info!(id = %person.id, "Person created");
    Ok(Redirect::to("/list").into_response())
}

/// Render the edit form for one person.
///
/// GET /p/edit/{id}
pub async fn edit_form(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let id = PersonId::new(id);
    let person = PersonRepository::new(state.pool())
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("person {id}")))?;
    let flash = take_flash(&session).await?;
    Ok(EditTemplate { person, flash }.into_response())
}

/// Update a person and return to the listing.
///
/// POST /p/edit/{id}
///
/// Fetch, mutate, save - three sequential store steps with no
/// compare-and-swap, so concurrent updates to the same ID are
/// last-write-wins.
pub async fn update(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    session: Session,
    Path(id): Path<i64>,
    Form(form): Form<PersonForm>,
) -> Result<Response, AppError> {
    let id = PersonId::new(id);
    let (name, age) = match form.validate() {
        Ok(fields) => fields,
        Err(message) => {
            push_flash(&session, &message).await?;
            return Ok(Redirect::to(&format!("/p/edit/{id}")).into_response());
        }
    };

    let repo = PersonRepository::new(state.pool());
    let mut person = repo
        .get_by_id(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("person {id}")))?;

    person.name = name;
    person.age = age;
    repo.update(&person).await?;

    tracing::info!(id = %id, "Person updated");
    Ok(Redirect::to("/list").into_response())
}

/// Delete a person and return to the listing.
///
/// GET /p/delete/{id}
///
/// GET is kept for legacy client compatibility even though a mutating
/// GET has no CSRF protection; see DESIGN.md.
pub async fn delete(
    RequireAdmin(_admin): RequireAdmin,
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    let id = PersonId::new(id);
    PersonRepository::new(state.pool()).delete(id).await?;
    tracing::info!(id = %id, "Person deleted");
    Ok(Redirect::to("/list").into_response())
}
