//! Slug derivation for notes.
//!
//! A note's slug is computed once, at creation, from its title. When the
//! plain slug is already taken the repository retries with
//! [`candidate`] for increasing attempt numbers, each of which appends a fresh
//! random suffix to the same base.

use rand::Rng;
use unicode_normalization::UnicodeNormalization;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Length of the random suffix appended on collision.
pub const SLUG_SUFFIX_LENGTH: usize = 6;

/// Total insert attempts (plain slug plus suffixed retries) before giving up.
pub const MAX_SLUG_ATTEMPTS: usize = 10;

/// Base used when a title contains nothing sluggable.
pub const FALLBACK_SLUG: &str = "note";

// ---------------------------------------------------------------------------
// Derivation
// ---------------------------------------------------------------------------

/// Derive a URL-safe base slug from a title.
///
/// Decomposes the title (NFKD) and keeps only the ASCII part, so accents,
/// ligatures and compatibility forms fold to plain letters. The result is
/// lowercased, apostrophes are dropped, every other run of non-alphanumeric
/// characters becomes a single hyphen, and hyphens are trimmed from both ends.
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());

    for c in title.nfkd().filter(char::is_ascii) {
        let c = c.to_ascii_lowercase();
        if c.is_ascii_alphanumeric() {
            slug.push(c);
        } else if c == '\'' {
            // "don't" -> "dont"
        } else if !slug.is_empty() && !slug.ends_with('-') {
            slug.push('-');
        }
    }

    while slug.ends_with('-') {
        slug.pop();
    }

    if slug.is_empty() {
        FALLBACK_SLUG.to_string()
    } else {
        slug
    }
}

/// Random lowercase alphanumeric suffix of [`SLUG_SUFFIX_LENGTH`] characters.
pub fn random_suffix() -> String {
    rand::rng()
        .sample_iter(&rand::distr::Alphanumeric)
        .take(SLUG_SUFFIX_LENGTH)
        .map(|b| char::from(b).to_ascii_lowercase())
        .collect()
}

/// Slug to try on the given zero-based attempt.
///
/// Attempt 0 is the base itself; every later attempt is `base-xxxxxx` with a
/// freshly generated suffix.
pub fn candidate(base: &str, attempt: usize) -> String {
    if attempt == 0 {
        base.to_string()
    } else {
        format!("{base}-{}", random_suffix())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
