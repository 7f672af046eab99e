//! Handlers for the notes resource.
//!
//! Notes are addressed by slug. Writes are validated before the store is
//! touched; every successful response carries the read projection
//! ([`NoteResponse`]).

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use notes_core::error::CoreError;
use notes_core::note::NotePayload;
use notes_db::models::note::Note;
use notes_db::repositories::NoteRepo;

use crate::error::{AppError, AppResult};
use crate::projection::NoteResponse;
use crate::response::DataResponse;
use crate::state::AppState;

/// Fetch a note by slug or return 404.
async fn ensure_note_by_slug(pool: &sqlx::PgPool, slug: &str) -> AppResult<Note> {
    NoteRepo::find_by_slug(pool, slug)
        .await?
        .ok_or_else(|| not_found(slug))
}

fn not_found(slug: &str) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Note",
        key: slug.to_string(),
    })
}

/// GET /api/v1/notes
///
/// List all notes, most recently updated first.
pub async fn list_notes(State(state): State<AppState>) -> AppResult<impl IntoResponse> {
    let notes = NoteRepo::list(&state.pool).await?;
    let data: Vec<NoteResponse> = notes.into_iter().map(NoteResponse::from).collect();

    Ok(Json(DataResponse { data }))
}

/// POST /api/v1/notes
///
/// Create a note. The slug is derived from the title.
pub async fn create_note(
    State(state): State<AppState>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(payload) = payload?;
    let input = payload.into_fields()?;

    let note = NoteRepo::create(&state.pool, &input).await?;

    tracing::info!(note_id = note.id, slug = %note.slug, "Note created");

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: NoteResponse::from(note),
        }),
    ))
}

/// GET /api/v1/notes/{slug}
pub async fn get_note(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let note = ensure_note_by_slug(&state.pool, &slug).await?;

    Ok(Json(DataResponse {
        data: NoteResponse::from(note),
    }))
}

/// PUT /api/v1/notes/{slug}
///
/// Replace title, category and body. The slug never changes.
pub async fn update_note(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    ensure_note_by_slug(&state.pool, &slug).await?;

    let Json(payload) = payload?;
    let input = payload.into_fields()?;

    let note = NoteRepo::update(&state.pool, &slug, &input)
        .await?
        .ok_or_else(|| not_found(&slug))?;

    tracing::info!(note_id = note.id, slug = %slug, "Note updated");

    Ok(Json(DataResponse {
        data: NoteResponse::from(note),
    }))
}

/// PATCH /api/v1/notes/{slug}
///
/// Overwrite only the supplied fields.
pub async fn patch_note(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    payload: Result<Json<NotePayload>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    ensure_note_by_slug(&state.pool, &slug).await?;

    let Json(payload) = payload?;
    let patch = payload.into_patch()?;
    if patch.is_empty() {
        tracing::debug!(slug = %slug, "Patch carries no fields, only touching updated");
    }

    let note = NoteRepo::patch(&state.pool, &slug, &patch)
        .await?
        .ok_or_else(|| not_found(&slug))?;

    tracing::info!(note_id = note.id, slug = %slug, "Note patched");

    Ok(Json(DataResponse {
        data: NoteResponse::from(note),
    }))
}

/// DELETE /api/v1/notes/{slug}
pub async fn delete_note(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> AppResult<impl IntoResponse> {
    let deleted = NoteRepo::delete(&state.pool, &slug).await?;

    if !deleted {
        return Err(not_found(&slug));
    }

    tracing::info!(slug = %slug, "Note deleted");

    Ok(StatusCode::NO_CONTENT)
}
