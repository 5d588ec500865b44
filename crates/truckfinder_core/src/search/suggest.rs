//! Search-box suggestions.

use crate::model::truck::Cuisine;

/// Suggestions shown per group (cuisines, locations) under the search box.
pub const DEFAULT_SUGGESTION_LIMIT: usize = 3;

/// Returns up to `limit` options containing `query`, case-insensitively.
///
/// Options keep their input order. An empty query matches every option.
pub fn suggest<'a, S: AsRef<str>>(options: &'a [S], query: &str, limit: usize) -> Vec<&'a str> {
    let needle = query.to_lowercase();
    options
        .iter()
        .map(|option| option.as_ref())
        .filter(|option| option.to_lowercase().contains(&needle))
        .take(limit)
        .collect()
}

/// Cuisine names matching `query`, at most [`DEFAULT_SUGGESTION_LIMIT`].
pub fn cuisine_suggestions(query: &str) -> Vec<&'static str> {
    let needle = query.to_lowercase();
    Cuisine::ALL
        .into_iter()
        .map(Cuisine::as_str)
        .filter(|name| name.to_lowercase().contains(&needle))
        .take(DEFAULT_SUGGESTION_LIMIT)
        .collect()
}
