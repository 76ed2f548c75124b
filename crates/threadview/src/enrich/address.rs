//! Address header parsing
//!
//! Parsing is deliberately lenient: malformed headers degrade to the raw
//! text as the display name and an empty email instead of failing the
//! whole thread render.

/// Split a header value like `John D. <john@abc.org>` into a display name
/// and an email wrapped in angle brackets.
///
/// Without a `<` the whole trimmed value (minus stray `>`) becomes the
/// name and the email is empty. A missing closing bracket is tolerated.
pub fn split_name_and_email(header: &str) -> (String, String) {
    let Some((name, rest)) = header.split_once('<') else {
        return (header.trim().replace('>', "").trim().to_string(), String::new());
    };

    let inner = match rest.split_once('>') {
        Some((inner, _)) => inner,
        None => rest,
    };
    let inner: String = inner.chars().filter(|c| *c != '<' && *c != '>').collect();
    let inner = inner.trim();

    let email = if inner.is_empty() {
        String::new()
    } else {
        format!("<{inner}>")
    };

    (name.trim().to_string(), email)
}

/// Summarize a recipient header as comma-joined display names.
pub fn recipient_names(header: &str) -> String {
    header
        .split(',')
        .filter(|segment| !segment.trim().is_empty())
        .map(|segment| split_name_and_email(segment).0)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Strip angle brackets from a wrapped email: `<a@b.c>` -> `a@b.c`
pub fn bare_email(email: &str) -> &str {
    email.trim().trim_start_matches('<').trim_end_matches('>')
}
