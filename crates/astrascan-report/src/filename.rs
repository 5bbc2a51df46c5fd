//! Query-string to file-name sanitization.

/// Maximum length of a sanitized file-name token
const MAX_LEN: usize = 50;

/// Map a free-form query string to a filesystem-safe token.
///
/// Quotes are dropped; spaces, colons and both slash directions become
/// underscores; `+` becomes `plus` and the literal `OR` becomes `or`.
/// The result is truncated to 50 characters. Idempotent, and path
/// separators are replaced before truncation so the output can never
/// contain a traversal sequence.
#[must_use]
pub fn sanitize_filename(query: &str) -> String {
    let sanitized = query
        .replace('"', "")
        .replace([' ', ':', '/', '\\'], "_")
        .replace('+', "plus")
        .replace("OR", "or");
    sanitized.chars().take(MAX_LEN).collect()
}
