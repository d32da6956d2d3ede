//! City extraction for weather queries.

/// City used when a weather query does not name one.
pub const DEFAULT_CITY: &str = "London";

/// Keeps only ASCII letters, ASCII digits, and whitespace.
///
/// Idempotent: the output contains nothing the filter would remove.
pub fn remove_special_characters(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_alphanumeric() || c.is_whitespace())
        .collect()
}

/// Extracts the city from a weather query.
///
/// Takes the text after the last standalone word "in", trims it, and strips
/// special characters. Falls back to [`DEFAULT_CITY`] when there is no "in"
/// or nothing usable follows it.
pub fn extract_city(query: &str) -> String {
    let Some(tail) = text_after_last_in(query) else {
        return DEFAULT_CITY.to_string();
    };

    let sanitized = remove_special_characters(tail.trim());
    let city = sanitized.trim();
    if city.is_empty() {
        DEFAULT_CITY.to_string()
    } else {
        city.to_string()
    }
}

/// Finds the last "in" bounded by whitespace or the ends of the string and
/// returns everything after it.
fn text_after_last_in(query: &str) -> Option<&str> {
    let bytes = query.as_bytes();
    if bytes.len() < 2 {
        return None;
    }

    // ASCII bytes never occur inside a multi-byte UTF-8 sequence, so a match
    // on "in" always sits on char boundaries.
    (0..=bytes.len() - 2)
        .rev()
        .filter(|&i| bytes[i..i + 2].eq_ignore_ascii_case(b"in"))
        .find(|&i| {
            let before = query[..i].chars().next_back();
            let after = query[i + 2..].chars().next();
            before.map_or(true, char::is_whitespace) && after.map_or(true, char::is_whitespace)
        })
        .map(|i| &query[i + 2..])
}
