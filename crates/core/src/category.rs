//! Note categories and their display lookup tables.
//!
//! The category set is fixed at compile time. Stored rows carry the code
//! (`"BUSINESS"`); the human-readable label and display color are looked up
//! from [`CATEGORY_TABLE`] when a note is presented.

use serde::Serialize;

// ---------------------------------------------------------------------------
// Enumeration
// ---------------------------------------------------------------------------

/// Classification tag attached to every note.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Category {
    Business,
    Personal,
    Health,
    Study,
    Work,
    Important,
}

/// Category assigned when a write omits one.
pub const DEFAULT_CATEGORY: Category = Category::Personal;

/// One row of the category lookup table.
#[derive(Debug, Clone, Copy)]
pub struct CategoryInfo {
    pub category: Category,
    pub code: &'static str,
    pub label: &'static str,
    pub color: &'static str,
}

/// Every category in declaration order. Indexed by `Category as usize`.
pub static CATEGORY_TABLE: [CategoryInfo; 6] = [
    CategoryInfo {
        category: Category::Business,
        code: "BUSINESS",
        label: "Business",
        color: "navy",
    },
    CategoryInfo {
        category: Category::Personal,
        code: "PERSONAL",
        label: "Personal",
        color: "teal",
    },
    CategoryInfo {
        category: Category::Health,
        code: "HEALTH",
        label: "Health",
        color: "green",
    },
    CategoryInfo {
        category: Category::Study,
        code: "STUDY",
        label: "Study",
        color: "blue",
    },
    CategoryInfo {
        category: Category::Work,
        code: "WORK",
        label: "Work",
        color: "orange",
    },
    CategoryInfo {
        category: Category::Important,
        code: "IMPORTANT",
        label: "Important",
        color: "red",
    },
];

fn info(category: Category) -> &'static CategoryInfo {
    &CATEGORY_TABLE[category as usize]
}

impl Category {
    /// Stored code, e.g. `"BUSINESS"`.
    pub fn code(self) -> &'static str {
        info(self).code
    }

    /// Parse a stored code. Case-sensitive.
    pub fn from_code(code: &str) -> Option<Self> {
        CATEGORY_TABLE
            .iter()
            .find(|entry| entry.code == code)
            .map(|entry| entry.category)
    }
}

/// Human-readable label for a category (`BUSINESS` -> `"Business"`).
pub fn display_label(category: Category) -> &'static str {
    info(category).label
}

/// Fixed display color for a category (`BUSINESS` -> `"navy"`).
pub fn display_color(category: Category) -> &'static str {
    info(category).color
}

/// All accepted codes in declaration order.
pub fn valid_codes() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().map(|entry| entry.code)
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// A category code outside the fixed set.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid Category '{value}'. Please choose from: {}.", valid_codes().collect::<Vec<_>>().join(", "))]
pub struct InvalidCategory {
    pub value: String,
}

impl InvalidCategory {
    /// The codes that would have been accepted.
    pub fn accepted(&self) -> Vec<&'static str> {
        valid_codes().collect()
    }
}

/// Check a submitted category code against the whitelist.
pub fn validate_category(value: &str) -> Result<Category, InvalidCategory> {
    Category::from_code(value).ok_or_else(|| InvalidCategory {
        value: value.to_string(),
    })
}

impl TryFrom<String> for Category {
    type Error = InvalidCategory;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Category::from_code(&value).ok_or(InvalidCategory { value })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn table_is_indexed_by_discriminant() {
        for (idx, entry) in CATEGORY_TABLE.iter().enumerate() {
            assert_eq!(entry.category as usize, idx);
        }
    }

    #[test]
    fn labels_match_codes() {
        assert_eq!(display_label(Category::Business), "Business");
        assert_eq!(display_label(Category::Personal), "Personal");
        assert_eq!(display_label(Category::Health), "Health");
        assert_eq!(display_label(Category::Study), "Study");
        assert_eq!(display_label(Category::Work), "Work");
        assert_eq!(display_label(Category::Important), "Important");
    }

    #[test]
    fn colors_match_codes() {
        let colors: Vec<_> = CATEGORY_TABLE
            .iter()
            .map(|entry| display_color(entry.category))
            .collect();
        assert_eq!(colors, ["navy", "teal", "green", "blue", "orange", "red"]);
    }

    #[test]
    fn every_code_parses_back() {
        for entry in &CATEGORY_TABLE {
            assert_eq!(Category::from_code(entry.code), Some(entry.category));
            assert_eq!(entry.category.code(), entry.code);
        }
    }

    #[test]
    fn serializes_as_code() {
        let json = serde_json::to_value(Category::Important).unwrap();
        assert_eq!(json, "IMPORTANT");
    }

    #[test]
    fn default_is_personal() {
        assert_eq!(DEFAULT_CATEGORY.code(), "PERSONAL");
    }

    #[test]
    fn validate_accepts_known_code() {
        assert_matches!(validate_category("HEALTH"), Ok(Category::Health));
    }

    #[test]
    fn validate_is_case_sensitive() {
        assert!(validate_category("health").is_err());
        assert!(validate_category("Health").is_err());
    }

    #[test]
    fn invalid_category_names_value_and_choices() {
        let err = validate_category("BOGUS").unwrap_err();
        assert_eq!(err.value, "BOGUS");
        assert_eq!(err.accepted().len(), 6);
        assert_eq!(
            err.to_string(),
            "Invalid Category 'BOGUS'. Please choose from: \
             BUSINESS, PERSONAL, HEALTH, STUDY, WORK, IMPORTANT."
        );
    }

    #[test]
    fn empty_category_rejected() {
        assert!(validate_category("").is_err());
    }

    #[test]
    fn try_from_string() {
        assert_matches!(Category::try_from("WORK".to_string()), Ok(Category::Work));
        assert_matches!(
            Category::try_from("PLAY".to_string()),
            Err(InvalidCategory { value }) if value == "PLAY"
        );
    }
}
