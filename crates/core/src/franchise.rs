//! Listing bounds, parameter validation and search pattern helpers.
//!
//! Bounds are enforced at the HTTP boundary: an out-of-range value is a
//! validation error, never silently clamped.

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Pagination bounds
// ---------------------------------------------------------------------------

/// Rows returned when the caller gives no `limit`.
pub const DEFAULT_LIMIT: i64 = 100;

/// Smallest accepted `limit`.
pub const MIN_LIMIT: i64 = 1;

/// Largest accepted `limit`.
pub const MAX_LIMIT: i64 = 1000;

/// Offset used when the caller gives no `skip`.
pub const DEFAULT_SKIP: i64 = 0;

// ---------------------------------------------------------------------------
// Search
// ---------------------------------------------------------------------------

/// Escape character declared in every `LIKE ... ESCAPE` clause.
///
/// `!` is used instead of a backslash so the pattern means the same thing
/// regardless of the server's `NO_BACKSLASH_ESCAPES` mode. `LOWER()` leaves
/// `!`, `%` and `_` unchanged, so escaping survives lower-casing in SQL.
pub const LIKE_ESCAPE: char = '!';

/// Validate a `limit` parameter, falling back to [`DEFAULT_LIMIT`].
pub fn validate_limit(limit: Option<i64>) -> Result<i64, CoreError> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(MIN_LIMIT..=MAX_LIMIT).contains(&limit) {
        return Err(CoreError::Validation(format!(
            "limit must be between {MIN_LIMIT} and {MAX_LIMIT}, got {limit}"
        )));
    }
    Ok(limit)
}

/// Validate a `skip` parameter, falling back to [`DEFAULT_SKIP`].
pub fn validate_skip(skip: Option<i64>) -> Result<i64, CoreError> {
    let skip = skip.unwrap_or(DEFAULT_SKIP);
    if skip < 0 {
        return Err(CoreError::Validation(format!(
            "skip must be >= 0, got {skip}"
        )));
    }
    Ok(skip)
}

/// Validate the free-text search query and return it trimmed.
///
/// A missing, empty, or whitespace-only query is rejected.
pub fn validate_search_query(q: Option<&str>) -> Result<&str, CoreError> {
    match q.map(str::trim) {
        Some(q) if !q.is_empty() => Ok(q),
        _ => Err(CoreError::Validation(
            "q is required and must not be empty".to_string(),
        )),
    }
}

/// Build a substring `LIKE` pattern for `query`.
///
/// LIKE wildcards in the input are escaped with [`LIKE_ESCAPE`], so the
/// query always matches literally. Case is left alone: the SQL side applies
/// `LOWER()` to both the column and the bound pattern, so one collation
/// decides case folding for both.
///
/// # Examples
///
/// ```
/// use kfranchise_core::franchise::contains_pattern;
/// assert_eq!(contains_pattern("Brew"), "%Brew%");
/// assert_eq!(contains_pattern("50%_off"), "%50!%!_off%");
/// ```
pub fn contains_pattern(query: &str) -> String {
    let mut pattern = String::with_capacity(query.len() + 2);
    pattern.push('%');
    for c in query.chars() {
        if c == '%' || c == '_' || c == LIKE_ESCAPE {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
