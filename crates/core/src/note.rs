//! Write-side representation of a note and its validation rules.
//!
//! Clients submit a [`NotePayload`]. Only `title`, `category` and `body` are
//! read from it; anything else in the request body (`slug`, `id`,
//! timestamps) is ignored. Validation collects every problem into a
//! field-keyed [`FieldErrors`] before the store is touched.

use serde::Deserialize;

use crate::category::{validate_category, Category, DEFAULT_CATEGORY};
use crate::error::{CoreError, FieldErrors};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Maximum length of a note title in characters.
pub const MAX_TITLE_LENGTH: usize = 200;

pub const MSG_REQUIRED: &str = "This field is required.";
pub const MSG_BLANK: &str = "This field may not be blank.";

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

/// Raw write payload for create, full update and partial update.
///
/// A JSON `null` is treated the same as an absent field.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotePayload {
    pub title: Option<String>,
    pub category: Option<String>,
    pub body: Option<String>,
}

/// Validated fields for a create or full update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub category: Category,
    pub body: String,
}

/// Validated fields for a partial update. `None` leaves the column untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotePatch {
    pub title: Option<String>,
    pub category: Option<Category>,
    pub body: Option<String>,
}

impl NotePatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.category.is_none() && self.body.is_none()
    }
}

// ---------------------------------------------------------------------------
// Field rules
// ---------------------------------------------------------------------------

/// Trim a title and check it is non-blank and within [`MAX_TITLE_LENGTH`].
pub fn clean_title(title: &str) -> Result<String, String> {
    let title = title.trim();
    if title.is_empty() {
        return Err(MSG_BLANK.to_string());
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(format!(
            "Ensure this field has no more than {MAX_TITLE_LENGTH} characters."
        ));
    }
    Ok(title.to_string())
}

/// Trim a body and check it is non-blank.
pub fn clean_body(body: &str) -> Result<String, String> {
    let body = body.trim();
    if body.is_empty() {
        return Err(MSG_BLANK.to_string());
    }
    Ok(body.to_string())
}

// ---------------------------------------------------------------------------
// Payload validation
// ---------------------------------------------------------------------------

impl NotePayload {
    /// Validate for create or full update.
    ///
    /// `title` and `body` are required; a missing `category` falls back to
    /// [`DEFAULT_CATEGORY`].
    pub fn into_fields(self) -> Result<NoteFields, CoreError> {
        let mut errors = FieldErrors::new();

        let title = required(&mut errors, "title", self.title.as_deref(), clean_title);
        let body = required(&mut errors, "body", self.body.as_deref(), clean_body);
        let category = match self.category.as_deref() {
            Some(code) => checked_category(&mut errors, code),
            None => Some(DEFAULT_CATEGORY),
        };

        // A `None` here always has a matching entry in `errors`.
        match (title, category, body) {
            (Some(title), Some(category), Some(body)) if errors.is_empty() => Ok(NoteFields {
                title,
                category,
                body,
            }),
            _ => Err(CoreError::Validation(errors)),
        }
    }

    /// Validate for partial update. Only supplied fields are checked.
    pub fn into_patch(self) -> Result<NotePatch, CoreError> {
        let mut errors = FieldErrors::new();

        let title = self
            .title
            .as_deref()
            .and_then(|t| collect(&mut errors, "title", clean_title(t)));
        let body = self
            .body
            .as_deref()
            .and_then(|b| collect(&mut errors, "body", clean_body(b)));
        let category = self
            .category
            .as_deref()
            .and_then(|c| checked_category(&mut errors, c));

        errors.into_result()?;

        Ok(NotePatch {
            title,
            category,
            body,
        })
    }
}

fn collect<T>(
    errors: &mut FieldErrors,
    field: &'static str,
    result: Result<T, String>,
) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(message) => {
            errors.add(field, message);
            None
        }
    }
}

fn required(
    errors: &mut FieldErrors,
    field: &'static str,
    value: Option<&str>,
    clean: fn(&str) -> Result<String, String>,
) -> Option<String> {
    match value {
        Some(value) => collect(errors, field, clean(value)),
        None => {
            errors.add(field, MSG_REQUIRED);
            None
        }
    }
}

fn checked_category(errors: &mut FieldErrors, code: &str) -> Option<Category> {
    collect(
        errors,
        "category",
        validate_category(code).map_err(|e| e.to_string()),
    )
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn payload(json: serde_json::Value) -> NotePayload {
        serde_json::from_value(json).unwrap()
    }

    fn field_errors(err: CoreError) -> FieldErrors {
        match err {
            CoreError::Validation(errors) => errors,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    // -- into_fields ---------------------------------------------------------

    #[test]
    fn full_payload_accepted() {
        let fields = payload(serde_json::json!({
            "title": "Trip Plan",
            "category": "HEALTH",
            "body": "Pack light",
        }))
        .into_fields()
        .unwrap();

        assert_eq!(fields.title, "Trip Plan");
        assert_eq!(fields.category, Category::Health);
        assert_eq!(fields.body, "Pack light");
    }

    #[test]
    fn missing_category_defaults_to_personal() {
        let fields = payload(serde_json::json!({ "title": "T", "body": "B" }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.category, Category::Personal);
    }

    #[test]
    fn null_category_defaults_to_personal() {
        let fields = payload(serde_json::json!({ "title": "T", "body": "B", "category": null }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.category, Category::Personal);
    }

    #[test]
    fn missing_required_fields_reported() {
        let errors = field_errors(NotePayload::default().into_fields().unwrap_err());
        assert_eq!(errors.get("title").unwrap(), [MSG_REQUIRED]);
        assert_eq!(errors.get("body").unwrap(), [MSG_REQUIRED]);
        assert!(errors.get("category").is_none());
    }

    #[test]
    fn blank_fields_rejected() {
        let errors = field_errors(
            payload(serde_json::json!({ "title": "   ", "body": "" }))
                .into_fields()
                .unwrap_err(),
        );
        assert_eq!(errors.get("title").unwrap(), [MSG_BLANK]);
        assert_eq!(errors.get("body").unwrap(), [MSG_BLANK]);
    }

    #[test]
    fn invalid_category_rejected_with_choices() {
        let errors = field_errors(
            payload(serde_json::json!({ "title": "X", "category": "BOGUS", "body": "Y" }))
                .into_fields()
                .unwrap_err(),
        );
        let messages = errors.get("category").unwrap();
        assert_eq!(messages.len(), 1);
        assert!(messages[0].contains("'BOGUS'"));
        for code in ["BUSINESS", "PERSONAL", "HEALTH", "STUDY", "WORK", "IMPORTANT"] {
            assert!(messages[0].contains(code), "missing {code}");
        }
    }

    #[test]
    fn all_errors_collected_together() {
        let errors = field_errors(
            payload(serde_json::json!({ "category": "nope", "body": "ok" }))
                .into_fields()
                .unwrap_err(),
        );
        assert!(errors.get("title").is_some());
        assert!(errors.get("category").is_some());
        assert!(errors.get("body").is_none());
    }

    #[test]
    fn title_at_max_length_accepted() {
        let title = "a".repeat(MAX_TITLE_LENGTH);
        let fields = payload(serde_json::json!({ "title": title, "body": "b" }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.title.chars().count(), MAX_TITLE_LENGTH);
    }

    #[test]
    fn title_over_max_length_rejected() {
        let title = "a".repeat(MAX_TITLE_LENGTH + 1);
        let errors = field_errors(
            payload(serde_json::json!({ "title": title, "body": "b" }))
                .into_fields()
                .unwrap_err(),
        );
        assert!(errors.get("title").unwrap()[0].contains("200 characters"));
    }

    #[test]
    fn title_length_counts_characters_not_bytes() {
        let title = "é".repeat(MAX_TITLE_LENGTH);
        assert!(clean_title(&title).is_ok());
    }

    #[test]
    fn surrounding_whitespace_trimmed() {
        let fields = payload(serde_json::json!({ "title": "  Trip Plan ", "body": "\n body \n" }))
            .into_fields()
            .unwrap();
        assert_eq!(fields.title, "Trip Plan");
        assert_eq!(fields.body, "body");
    }

    #[test]
    fn read_only_fields_ignored() {
        let fields = payload(serde_json::json!({
            "title": "T",
            "body": "B",
            "slug": "chosen-by-client",
            "id": 99,
            "created": "2020-01-01T00:00:00Z",
        }))
        .into_fields()
        .unwrap();
        assert_eq!(
            fields,
            NoteFields {
                title: "T".into(),
                category: Category::Personal,
                body: "B".into(),
            }
        );
    }

    // -- into_patch ----------------------------------------------------------

    #[test]
    fn patch_keeps_only_supplied_fields() {
        let patch = payload(serde_json::json!({ "category": "BUSINESS" }))
            .into_patch()
            .unwrap();
        assert_eq!(
            patch,
            NotePatch {
                title: None,
                category: Some(Category::Business),
                body: None,
            }
        );
    }

    #[test]
    fn empty_patch_is_valid() {
        let patch = NotePayload::default().into_patch().unwrap();
        assert!(patch.is_empty());
    }

    #[test]
    fn patch_with_invalid_category_rejected() {
        let err = payload(serde_json::json!({ "category": "BOGUS" }))
            .into_patch()
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(ref errors) if errors.get("category").is_some());
    }

    #[test]
    fn patch_with_blank_title_rejected() {
        let errors = field_errors(
            payload(serde_json::json!({ "title": "" }))
                .into_patch()
                .unwrap_err(),
        );
        assert_eq!(errors.get("title").unwrap(), [MSG_BLANK]);
    }
}
