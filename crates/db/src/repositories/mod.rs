//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod note_repo;

pub use note_repo::{CreateNoteError, NoteRepo};
