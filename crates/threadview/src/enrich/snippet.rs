//! Plain-text previews of a message body

use regex::Regex;
use std::sync::OnceLock;

use super::html::html_escape;

/// Leading characters dropped from the list snippet
const SNIPPET_STRIP_CHARS: [char; 5] = ['<', '>', '-', '_', '='];

fn markup_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"(?s)<[^>]*>").expect("valid markup regex"))
}

/// Remove anything that looks like a tag
pub fn strip_markup(text: &str) -> String {
    markup_regex().replace_all(text, "").into_owned()
}

/// The body with markup and `>` quoted lines removed, lines concatenated
/// without separators, then HTML escaped.
pub fn quote_filtered_preview(body: &str) -> String {
    let stripped = strip_markup(body);
    let kept: String = stripped
        .split("\r\n")
        .filter(|line| !line.starts_with('>'))
        .collect();
    html_escape(&kept)
}

/// The first `max_chars` characters of the trimmed body, after dropping
/// leading quote and separator characters.
pub fn truncated_snippet(body: &str, max_chars: usize) -> String {
    body.trim()
        .trim_start_matches(SNIPPET_STRIP_CHARS)
        .chars()
        .take(max_chars)
        .collect()
}
