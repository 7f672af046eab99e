//! Route definitions for the notes resource.

use axum::routing::{get, MethodRouter};
use axum::Router;

use crate::handlers::notes;
use crate::state::AppState;

/// ```text
/// GET    /notes             -> list_notes
/// POST   /notes             -> create_note
/// GET    /notes/{slug}      -> get_note
/// PUT    /notes/{slug}      -> update_note
/// PATCH  /notes/{slug}      -> patch_note
/// DELETE /notes/{slug}      -> delete_note
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/notes", collection())
        .route("/notes/", collection())
        .route("/notes/{slug}", detail())
        .route("/notes/{slug}/", detail())
}

fn collection() -> MethodRouter<AppState> {
    get(notes::list_notes).post(notes::create_note)
}

fn detail() -> MethodRouter<AppState> {
    get(notes::get_note)
        .put(notes::update_note)
        .patch(notes::patch_note)
        .delete(notes::delete_note)
}
