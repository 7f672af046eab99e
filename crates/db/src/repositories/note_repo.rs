//! Repository for the `notes` table.

use notes_core::note::{NoteFields, NotePatch};
use notes_core::slug::{candidate, slugify, MAX_SLUG_ATTEMPTS};
use sqlx::PgPool;

use crate::models::note::Note;

/// Column list for notes queries.
const COLUMNS: &str = "id, title, body, slug, category, created, updated";

/// Failure modes of [`NoteRepo::create`].
#[derive(Debug, thiserror::Error)]
pub enum CreateNoteError {
    #[error(transparent)]
    Database(#[from] sqlx::Error),

    #[error("no free slug for base '{base}' after {attempts} attempts")]
    SlugExhausted { base: String, attempts: usize },
}

/// Provides CRUD operations for notes. Notes are addressed by slug.
pub struct NoteRepo;

impl NoteRepo {
    /// Create a note, deriving a unique slug from its title.
    ///
    /// Each attempt is a single `INSERT ... ON CONFLICT DO NOTHING` against
    /// the `uq_notes_slug` constraint, so the uniqueness check and the write
    /// are one atomic statement. A conflict moves on to the next candidate
    /// (`base-xxxxxx`).
    pub async fn create(pool: &PgPool, input: &NoteFields) -> Result<Note, CreateNoteError> {
        let base = slugify(&input.title);

        for attempt in 0..MAX_SLUG_ATTEMPTS {
            let slug = candidate(&base, attempt);
            if let Some(note) = Self::insert_with_slug(pool, input, &slug).await? {
                return Ok(note);
            }
            tracing::debug!(slug = %slug, attempt, "Slug taken, retrying with suffix");
        }

        Err(CreateNoteError::SlugExhausted {
            base,
            attempts: MAX_SLUG_ATTEMPTS,
        })
    }

    /// Insert a note with an explicit slug. Returns `None` if the slug is taken.
    pub async fn insert_with_slug(
        pool: &PgPool,
        input: &NoteFields,
        slug: &str,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "INSERT INTO notes (title, body, slug, category)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT ON CONSTRAINT uq_notes_slug DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(&input.title)
            .bind(&input.body)
            .bind(slug)
            .bind(input.category.code())
            .fetch_optional(pool)
            .await
    }

    /// Find a note by its slug.
    pub async fn find_by_slug(pool: &PgPool, slug: &str) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE slug = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(slug)
            .fetch_optional(pool)
            .await
    }

    /// List all notes, most recently updated first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes ORDER BY updated DESC, id DESC");
        sqlx::query_as::<_, Note>(&query).fetch_all(pool).await
    }

    /// Overwrite title, category and body. Returns `None` if no note has `slug`.
    pub async fn update(
        pool: &PgPool,
        slug: &str,
        input: &NoteFields,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = $2,
                category = $3,
                body = $4,
                updated = GREATEST(NOW(), updated)
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(slug)
            .bind(&input.title)
            .bind(input.category.code())
            .bind(&input.body)
            .fetch_optional(pool)
            .await
    }

    /// Overwrite only the supplied fields. Returns `None` if no note has `slug`.
    pub async fn patch(
        pool: &PgPool,
        slug: &str,
        input: &NotePatch,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                category = COALESCE($3, category),
                body = COALESCE($4, body),
                updated = GREATEST(NOW(), updated)
             WHERE slug = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(slug)
            .bind(input.title.as_deref())
            .bind(input.category.map(|c| c.code()))
            .bind(input.body.as_deref())
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a note. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, slug: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE slug = $1")
            .bind(slug)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
