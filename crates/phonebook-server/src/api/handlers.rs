//! HTTP request handlers and shared application state.
//!
//! Each public async function corresponds to an API route registered in
//! [`create_router`](crate::api::create_router). Handlers extract path/body
//! parameters via Axum extractors and delegate to the
//! [`Phonebook`](phonebook_core::registry::Phonebook) registry, returning
//! JSON responses or [`ApiError`](crate::api::errors::ApiError) on failure.

use crate::api::errors::ApiError;
use crate::api::models::{ContactPayload, Person};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::Json;
use phonebook_core::registry::{Phonebook, RegistryError};

/// Shared application state passed to every handler via Axum's `State`
/// extractor.
#[derive(Clone)]
pub struct AppState {
    pub phonebook: Phonebook,
}

/// Parses a path id the way the API treats ids: anything that is not a
/// non-negative integer behaves like an id that is not listed.
fn parse_id(raw: &str) -> Option<u32> {
    raw.parse().ok()
}

/// `GET /` — static greeting page.
pub async fn index() -> Html<&'static str> {
    Html("<h1>Agenda Telefónica</h1>")
}

/// `GET /api/persons` — returns the full collection in insertion order.
pub async fn list_persons(State(state): State<AppState>) -> Json<Vec<Person>> {
    Json(state.phonebook.list())
}

/// `GET /info` — contact count and the current server time.
pub async fn info(State(state): State<AppState>) -> Html<String> {
    let count = state.phonebook.len();
    let now = chrono::Local::now();
    Html(format!(
        "<p>Phonebook has info for {} people</p><p>{}</p>",
        count,
        now.to_rfc2822()
    ))
}

/// `GET /api/persons/:id` — linear search by id. Misses answer 404 with an
/// empty body.
pub async fn get_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Person>, ApiError> {
    let person = parse_id(&id)
        .and_then(|id| state.phonebook.find(id))
        .ok_or(ApiError::NotFound)?;
    Ok(Json(person))
}

/// `POST /api/persons` — validates the payload, rejects duplicate names,
/// assigns a generated id, and appends the record.
pub async fn create_person(
    State(state): State<AppState>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Person>, ApiError> {
    let (name, number) = payload
        .into_fields()
        .ok_or_else(|| ApiError::BadRequest("El nombre y el número son requeridos".to_string()))?;

    let person = state.phonebook.add(name, number).map_err(|err| match err {
        RegistryError::DuplicateName(_) => {
            ApiError::BadRequest("El nombre ya existe en la agenda".to_string())
        }
    })?;

    tracing::info!(id = person.id, name = %person.name, "contact added");
    Ok(Json(person))
}

/// `PUT /api/persons/:id` — replaces the name and number of an existing
/// record, keeping its id.
pub async fn update_person(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(payload): Json<ContactPayload>,
) -> Result<Json<Person>, ApiError> {
    let (name, number) = payload
        .into_fields()
        .ok_or_else(|| ApiError::BadRequest("El nombre y el número son requeridos".to_string()))?;

    let person = parse_id(&id)
        .and_then(|id| state.phonebook.update(id, name, number))
        .ok_or_else(|| ApiError::NotFoundMessage("Person not found".to_string()))?;

    tracing::info!(id = person.id, name = %person.name, "contact updated");
    Ok(Json(person))
}

/// `DELETE /api/persons/:id` — removes the record if present. Answers 204
/// whether or not the id existed.
pub async fn delete_person(State(state): State<AppState>, Path(id): Path<String>) -> StatusCode {
    if let Some(id) = parse_id(&id) {
        state.phonebook.remove(id);
        tracing::info!(id, "contact removed");
    }
    StatusCode::NO_CONTENT
}
