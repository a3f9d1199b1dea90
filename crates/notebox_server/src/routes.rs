//! HTTP routing and request handlers.
//!
//! # Responsibility
//! - Map six endpoint+method pairs onto exactly one note use-case each.
//! - Own the shared storage handle injected at router construction.
//!
//! # Invariants
//! - Each request locks the connection, runs one use-case, and releases it;
//!   no transaction spans requests.
//! - Request bodies are explicit structs with named fields; absence of an
//!   optional field is represented as `None`, never inferred.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Html;
use axum::routing::get;
use axum::{Json, Router};
use log::info;
use notebox_core::{Note, NoteId, NoteService, SqliteNoteRepository};
use rusqlite::Connection;
use serde::Deserialize;
use serde_json::{json, Value};
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::cors::CorsLayer;

use crate::error::ApiError;

const WELCOME_BODY: &str = "<h2>Welcome to the Notes server</h2>";

/// Process-wide shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    db: Arc<Mutex<Connection>>,
}

impl AppState {
    /// Wraps a migrated connection for injection into the router.
    pub fn new(conn: Connection) -> Self {
        Self {
            db: Arc::new(Mutex::new(conn)),
        }
    }
}

/// Body of `POST /notes`.
#[derive(Debug, Deserialize)]
pub struct CreateNoteBody {
    text: String,
}

/// Body of `PUT /notes/{id}`.
#[derive(Debug, Deserialize)]
pub struct UpdateNoteBody {
    text: String,
}

/// Body of `PATCH /notes/{id}`; a missing `text` field leaves the note
/// unchanged.
#[derive(Debug, Default, Deserialize)]
pub struct PatchNoteBody {
    text: Option<String>,
}

/// Builds the full application router over the injected storage state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(home))
        .route("/notes", get(list_notes).post(create_note))
        .route(
            "/notes/{id}",
            get(get_note)
                .put(update_note)
                .patch(patch_note)
                .delete(delete_note),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn home() -> Html<&'static str> {
    Html(WELCOME_BODY)
}

async fn list_notes(State(state): State<AppState>) -> Result<Json<Vec<Note>>, ApiError> {
    let conn = state.db.lock().await;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    Ok(Json(service.list_notes()?))
}

async fn get_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<Note>, ApiError> {
    let conn = state.db.lock().await;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    Ok(Json(service.get_note(id)?))
}

async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteBody>,
) -> Result<(StatusCode, Json<Note>), ApiError> {
    let conn = state.db.lock().await;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let note = service.create_note(&body.text)?;
    info!("event=note_create module=http status=ok id={}", note.id);
    Ok((StatusCode::CREATED, Json(note)))
}

async fn update_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(body): Json<UpdateNoteBody>,
) -> Result<Json<Note>, ApiError> {
    let conn = state.db.lock().await;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let note = service.update_note(id, &body.text)?;
    info!("event=note_update module=http status=ok id={id}");
    Ok(Json(note))
}

async fn patch_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
    Json(body): Json<PatchNoteBody>,
) -> Result<Json<Note>, ApiError> {
    let conn = state.db.lock().await;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    let note = service.patch_note(id, body.text.as_deref())?;
    info!(
        "event=note_patch module=http status=ok id={id} text_supplied={}",
        body.text.is_some()
    );
    Ok(Json(note))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<NoteId>,
) -> Result<Json<Value>, ApiError> {
    let conn = state.db.lock().await;
    let service = NoteService::new(SqliteNoteRepository::new(&conn));
    service.delete_note(id)?;
    info!("event=note_delete module=http status=ok id={id}");
    Ok(Json(json!({ "message": "Note deleted" })))
}
