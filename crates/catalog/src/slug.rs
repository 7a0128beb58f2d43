//! URL-safe slug derivation and uniqueness allocation.
//!
//! Slugs identify categories in URLs and must be unique. [`slugify`]
//! derives a candidate from a display name; [`allocate`] probes numeric
//! suffixes until the candidate is free.

use thiserror::Error;

/// Slug derivation errors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SlugError {
    /// The candidate reduced to nothing after normalization. Not
    /// auto-recoverable: the caller must supply a manual slug.
    #[error("slug candidate is empty after normalization")]
    EmptyCandidate,
}

/// Derive a URL-safe slug candidate from a display name.
///
/// Lowercases the input, drops everything outside `[a-z0-9]` and the
/// separator characters (whitespace, `_`, `-`), collapses separator runs
/// into single hyphens, and trims leading/trailing hyphens.
///
/// ```
/// # use parts_catalog::slug::slugify;
/// assert_eq!(slugify("  Heavy-Duty_Brake Pads!! "), "heavy-duty-brake-pads");
/// ```
#[must_use]
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut pending_separator = false;

    for ch in name.to_lowercase().chars() {
        if ch.is_ascii_alphanumeric() {
            if pending_separator && !slug.is_empty() {
                slug.push('-');
            }
            pending_separator = false;
            slug.push(ch);
        } else if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_separator = true;
        }
        // anything else is dropped without acting as a separator
    }

    slug
}

/// Allocate a unique slug from a candidate.
///
/// Returns `candidate` unchanged when `exists` reports it free; otherwise
/// probes `candidate-2`, `candidate-3`, ... until one is free. No upper
/// bound is imposed on the probe count; this path is not contended.
///
/// # Errors
///
/// Returns [`SlugError::EmptyCandidate`] when `candidate` is empty.
pub fn allocate(
    candidate: &str,
    mut exists: impl FnMut(&str) -> bool,
) -> Result<String, SlugError> {
    if candidate.is_empty() {
        return Err(SlugError::EmptyCandidate);
    }

    if !exists(candidate) {
        return Ok(candidate.to_string());
    }

    let mut suffix: u64 = 2;
    loop {
        let attempt = format!("{candidate}-{suffix}");
        if !exists(&attempt) {
            return Ok(attempt);
        }
        suffix += 1;
    }
}
