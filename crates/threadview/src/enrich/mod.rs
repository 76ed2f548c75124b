//! Field enrichment
//!
//! Derives the display-ready fields of a single message: sender and
//! recipient names, date labels, avatar URL, HTML body and snippets.
//! Every function here is pure; the current time is a parameter.

mod address;
mod avatar;
mod date;
mod html;
mod snippet;

pub use address::{bare_email, recipient_names, split_name_and_email};
pub use avatar::avatar_url;
pub use date::{absolute_label, relative_label};
pub use html::{autolink, body_to_html, html_escape};
pub use snippet::{quote_filtered_preview, strip_markup, truncated_snippet};

use chrono::{DateTime, TimeZone};
use std::fmt::Display;

use crate::config::RenderConfig;
use crate::models::{EnrichedMessage, RawMessage};

/// Build the enriched form of `raw` as seen at `now`.
///
/// Dates are rendered in the timezone of `now`.
pub fn enrich<Tz: TimeZone>(
    raw: RawMessage,
    config: &RenderConfig,
    now: &DateTime<Tz>,
) -> EnrichedMessage
where
    Tz::Offset: Display,
{
    let (sender_name, sender_email) = split_name_and_email(&raw.from);
    let received_at = raw.received_at.with_timezone(&now.timezone());

    EnrichedMessage {
        recipient_names: recipient_names(&raw.to),
        date_label: absolute_label(&received_at),
        relative_date: relative_label(&received_at, now),
        avatar_url: avatar_url(&config.avatar_url_template, &sender_email),
        body_html: body_to_html(&raw.body_text),
        snippet: truncated_snippet(&raw.body_text, config.snippet_length),
        quote_filtered_preview: quote_filtered_preview(&raw.body_text),
        is_unread: !raw.seen,
        received_at: received_at.fixed_offset(),
        sender_name,
        sender_email,
        raw,
    }
}
