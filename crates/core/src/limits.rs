/// Default number of projects returned by the listing endpoint.
pub const DEFAULT_PROJECT_LIMIT: i64 = 9;

/// Resolve a user-provided limit, falling back to `default`.
///
/// Non-positive values are raised to 1. There is no upper bound: callers
/// get every matching record up to the limit they asked for.
pub fn resolve_limit(limit: Option<i64>, default: i64) -> i64 {
    limit.unwrap_or(default).max(1)
}

/// Keep at most `max` characters of `text`.
pub fn truncate_chars(text: &str, max: usize) -> String {
    text.chars().take(max).collect()
}
