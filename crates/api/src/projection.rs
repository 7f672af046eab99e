//! Read-side representations returned to API clients.
//!
//! The persisted [`Note`] row only knows its category code. The display
//! label and color are looked up from the fixed category table here, when a
//! note is presented.

use notes_core::category::{display_color, display_label, Category, CATEGORY_TABLE};
use notes_core::types::{DbId, Timestamp};
use notes_db::models::note::Note;
use serde::Serialize;

/// A note as returned by every notes endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct NoteResponse {
    pub id: DbId,
    pub title: String,
    pub category: Category,
    pub category_display: &'static str,
    pub color: &'static str,
    pub slug: String,
    pub created: Timestamp,
    pub updated: Timestamp,
    pub body: String,
}

impl From<Note> for NoteResponse {
    fn from(note: Note) -> Self {
        Self {
            id: note.id,
            title: note.title,
            category: note.category,
            category_display: display_label(note.category),
            color: display_color(note.category),
            slug: note.slug,
            created: note.created,
            updated: note.updated,
            body: note.body,
        }
    }
}

/// One entry of `GET /categories`.
#[derive(Debug, Clone, Serialize)]
pub struct CategoryChoice {
    pub value: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// All categories in declaration order.
pub fn category_choices() -> Vec<CategoryChoice> {
    CATEGORY_TABLE
        .iter()
        .map(|entry| CategoryChoice {
            value: entry.code,
            label: entry.label,
            color: entry.color,
        })
        .collect()
}
