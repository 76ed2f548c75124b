//! Message models: the raw record delivered by storage and its enriched form

use super::{FolderId, ThreadId};
use chrono::{DateTime, FixedOffset, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for a stored message copy
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MessageId(pub String);

impl MessageId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Identity shared by every folder copy of one logical message
/// (the Message-ID header).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MessageIdentity(pub String);

impl MessageIdentity {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for MessageIdentity {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for MessageIdentity {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// Boolean message flags that the action handler can mutate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageFlag {
    Seen,
    Deleted,
    Flagged,
}

/// A message copy as delivered by the message store.
///
/// Headers arrive as undecoded display strings; the body is the decoded
/// plain-text part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawMessage {
    pub id: MessageId,
    pub account_id: i64,
    pub thread_id: ThreadId,
    pub identity: MessageIdentity,
    pub folder_id: FolderId,
    pub seen: bool,
    pub deleted: bool,
    pub flagged: bool,
    /// Sender header, e.g. `John D. <john@abc.org>`
    pub from: String,
    /// Recipient header, comma separated
    pub to: String,
    pub subject: String,
    pub received_at: DateTime<Utc>,
    pub body_text: String,
}

impl RawMessage {
    /// Create a new message builder
    pub fn builder(id: impl Into<MessageId>, thread_id: impl Into<ThreadId>) -> RawMessageBuilder {
        RawMessageBuilder::new(id.into(), thread_id.into())
    }

    pub fn flag(&self, flag: MessageFlag) -> bool {
        match flag {
            MessageFlag::Seen => self.seen,
            MessageFlag::Deleted => self.deleted,
            MessageFlag::Flagged => self.flagged,
        }
    }

    pub fn set_flag(&mut self, flag: MessageFlag, value: bool) {
        match flag {
            MessageFlag::Seen => self.seen = value,
            MessageFlag::Deleted => self.deleted = value,
            MessageFlag::Flagged => self.flagged = value,
        }
    }
}

/// Builder for creating RawMessage instances
pub struct RawMessageBuilder {
    id: MessageId,
    thread_id: ThreadId,
    account_id: i64,
    identity: Option<MessageIdentity>,
    folder_id: FolderId,
    seen: bool,
    flagged: bool,
    from: String,
    to: String,
    subject: String,
    received_at: Option<DateTime<Utc>>,
    body_text: String,
}

impl RawMessageBuilder {
    fn new(id: MessageId, thread_id: ThreadId) -> Self {
        Self {
            id,
            thread_id,
            account_id: 0,
            identity: None,
            folder_id: FolderId::new(FolderId::INBOX),
            seen: false,
            flagged: false,
            from: String::new(),
            to: String::new(),
            subject: String::new(),
            received_at: None,
            body_text: String::new(),
        }
    }

    pub fn account_id(mut self, account_id: i64) -> Self {
        self.account_id = account_id;
        self
    }

    pub fn identity(mut self, identity: impl Into<MessageIdentity>) -> Self {
        self.identity = Some(identity.into());
        self
    }

    pub fn folder(mut self, folder_id: impl Into<FolderId>) -> Self {
        self.folder_id = folder_id.into();
        self
    }

    pub fn seen(mut self, seen: bool) -> Self {
        self.seen = seen;
        self
    }

    pub fn flagged(mut self, flagged: bool) -> Self {
        self.flagged = flagged;
        self
    }

    pub fn from(mut self, from: impl Into<String>) -> Self {
        self.from = from.into();
        self
    }

    pub fn to(mut self, to: impl Into<String>) -> Self {
        self.to = to.into();
        self
    }

    pub fn subject(mut self, subject: impl Into<String>) -> Self {
        self.subject = subject.into();
        self
    }

    pub fn received_at(mut self, received_at: DateTime<Utc>) -> Self {
        self.received_at = Some(received_at);
        self
    }

    pub fn body_text(mut self, body_text: impl Into<String>) -> Self {
        self.body_text = body_text.into();
        self
    }

    /// Build the message. Without an explicit identity, the message id is
    /// used so that the copy is treated as its own logical message.
    pub fn build(self) -> RawMessage {
        RawMessage {
            identity: self
                .identity
                .unwrap_or_else(|| MessageIdentity::new(self.id.as_str())),
            id: self.id,
            account_id: self.account_id,
            thread_id: self.thread_id,
            folder_id: self.folder_id,
            seen: self.seen,
            deleted: false,
            flagged: self.flagged,
            from: self.from,
            to: self.to,
            subject: self.subject,
            received_at: self.received_at.unwrap_or(DateTime::<Utc>::UNIX_EPOCH),
            body_text: self.body_text,
        }
    }
}

/// A raw message plus everything the rendering layer needs to display it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnrichedMessage {
    pub raw: RawMessage,
    pub sender_name: String,
    /// Sender address wrapped in angle brackets, empty when the header had none
    pub sender_email: String,
    /// Comma-joined display names of the recipients
    pub recipient_names: String,
    /// Receipt time in the viewer's timezone
    pub received_at: DateTime<FixedOffset>,
    /// e.g. `8 July 2024 14:05`
    pub date_label: String,
    /// `14:05`, `8 Jul` or `8/7/2023` depending on age
    pub relative_date: String,
    pub avatar_url: String,
    pub body_html: String,
    /// First characters of the trimmed body; the preview shown in lists
    pub snippet: String,
    /// Markup-stripped body without quoted lines, HTML escaped
    pub quote_filtered_preview: String,
    pub is_unread: bool,
}

impl EnrichedMessage {
    pub fn id(&self) -> &MessageId {
        &self.raw.id
    }

    pub fn identity(&self) -> &MessageIdentity {
        &self.raw.identity
    }

    pub fn folder_id(&self) -> &FolderId {
        &self.raw.folder_id
    }
}
