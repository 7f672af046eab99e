//! Note row model.

use std::fmt;

use notes_core::category::Category;
use notes_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A row from the `notes` table.
#[derive(Debug, Clone, FromRow)]
pub struct Note {
    pub id: DbId,
    pub title: String,
    pub body: String,
    pub slug: String,
    #[sqlx(try_from = "String")]
    pub category: Category,
    pub created: Timestamp,
    pub updated: Timestamp,
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.title)
    }
}
