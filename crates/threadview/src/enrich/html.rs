//! Plain-text body to safe HTML

use regex::Regex;
use std::sync::OnceLock;

/// Characters never treated as the end of a link
const TRAILING_PUNCTUATION: &[char] = &['.', ',', ';', ':', '!', '?', ')', ']', '}'];

fn link_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(
            r#"(?i)(?:https?)?(?:://)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}(?::\d+)?(?:/[^\s<>"']*)?"#,
        )
        .expect("valid link regex")
    })
}

/// Simple HTML escape for user-generated content
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

fn anchor(link: &str) -> String {
    let link = html_escape(link);
    format!(r#"<a href="{link}" target="_blank" title="{link}">{link}</a>"#)
}

/// Escape `text` and turn hostname-with-path tokens into anchors that open
/// in a new tab. The matched text is used verbatim as href and title.
pub fn autolink(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut last = 0;

    for m in link_regex().find_iter(text) {
        // Part of a larger token, e.g. the domain of an email address
        if let Some(prev) = text[..m.start()].chars().next_back()
            && (prev.is_alphanumeric() || matches!(prev, '@' | '.' | '-' | '_' | '/'))
        {
            continue;
        }

        let link = m.as_str().trim_end_matches(TRAILING_PUNCTUATION);
        if !link.contains('/') {
            continue;
        }

        out.push_str(&html_escape(&text[last..m.start()]));
        out.push_str(&anchor(link));
        last = m.start() + link.len();
    }

    out.push_str(&html_escape(&text[last..]));
    out
}

/// Render a plain-text body as HTML: escaped, autolinked, line breaks kept
pub fn body_to_html(body: &str) -> String {
    autolink(body).replace("\r\n", "\n").replace('\n', "<br>")
}
