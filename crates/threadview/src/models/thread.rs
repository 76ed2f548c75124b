//! Thread model: one assembled conversation ready for rendering

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::{EnrichedMessage, Folder, FolderId, MessageId};

/// Unique identifier for a thread
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ThreadId(pub String);

impl ThreadId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for ThreadId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ThreadId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl std::fmt::Display for ThreadId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// One block of the display index.
///
/// Positions refer to [`Thread::messages`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayEntry {
    /// A run of read messages rendered as "N more messages"
    Group { positions: Vec<usize>, collapsed: bool },
    /// A message shown on its own, expanded when `open`
    Message {
        position: usize,
        open: bool,
        current: bool,
    },
}

impl DisplayEntry {
    /// Number of messages covered by this entry
    pub fn count(&self) -> usize {
        match self {
            DisplayEntry::Group { positions, .. } => positions.len(),
            DisplayEntry::Message { .. } => 1,
        }
    }

    /// Message positions covered by this entry, in order
    pub fn positions(&self) -> &[usize] {
        match self {
            DisplayEntry::Group { positions, .. } => positions,
            DisplayEntry::Message { position, .. } => std::slice::from_ref(position),
        }
    }
}

/// A conversation assembled for a single render
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Thread {
    pub id: ThreadId,
    /// Subject of the primary (first) message
    pub subject: String,
    /// Deduplicated messages in discovery order
    pub messages: Vec<EnrichedMessage>,
    pub message_count: usize,
    pub unread: HashSet<MessageId>,
    /// Every folder touched by a copy of a thread message, discovery order
    pub folder_ids: Vec<FolderId>,
    /// Folder badges, catalog order, mailbox aggregates excluded
    pub folders: Vec<Folder>,
    pub index: Vec<DisplayEntry>,
}

impl Thread {
    /// The subject-bearing message. Assembly never produces an empty thread.
    pub fn primary(&self) -> &EnrichedMessage {
        &self.messages[0]
    }

    pub fn last_message(&self) -> &EnrichedMessage {
        &self.messages[self.messages.len() - 1]
    }

    pub fn is_unread(&self) -> bool {
        !self.unread.is_empty()
    }

    /// Resolve the messages of a display entry
    pub fn entry_messages<'a>(
        &'a self,
        entry: &'a DisplayEntry,
    ) -> impl Iterator<Item = &'a EnrichedMessage> + 'a {
        entry.positions().iter().map(|&pos| &self.messages[pos])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_counts() {
        let group = DisplayEntry::Group {
            positions: vec![1, 2, 3],
            collapsed: true,
        };
        let single = DisplayEntry::Message {
            position: 4,
            open: true,
            current: true,
        };

        assert_eq!(group.count(), 3);
        assert_eq!(single.count(), 1);
        assert_eq!(single.positions(), &[4]);
    }

    #[test]
    fn test_entry_serializes_tagged() {
        let entry = DisplayEntry::Message {
            position: 0,
            open: true,
            current: false,
        };
        let json = serde_json::to_value(&entry).unwrap();
        assert_eq!(json["kind"], "message");
        assert_eq!(json["open"], true);
    }
}
