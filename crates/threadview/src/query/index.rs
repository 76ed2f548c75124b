//! Display-index construction
//!
//! A single forward pass decides, per message, whether it is shown on its
//! own or folded into a collapsed group. The first, second-to-last and last
//! messages are always visible, as is every unread message.

use crate::models::{DisplayEntry, EnrichedMessage};

/// Accumulates display entries and the pending run of folded messages
struct IndexBuilder {
    entries: Vec<DisplayEntry>,
    pending: Vec<usize>,
}

impl IndexBuilder {
    fn new() -> Self {
        Self {
            entries: Vec::new(),
            pending: Vec::new(),
        }
    }

    fn flush_group(&mut self) {
        if self.pending.is_empty() {
            return;
        }
        let positions = std::mem::take(&mut self.pending);
        self.entries.push(DisplayEntry::Group {
            positions,
            collapsed: true,
        });
    }

    fn push_message(&mut self, position: usize, open: bool, current: bool) {
        self.flush_group();
        self.entries.push(DisplayEntry::Message {
            position,
            open,
            current,
        });
    }

    fn fold(&mut self, position: usize) {
        self.pending.push(position);
    }

    fn finish(mut self) -> Vec<DisplayEntry> {
        self.flush_group();
        self.entries
    }
}

/// Build the display index for a deduplicated, ordered message sequence.
///
/// Concatenating the positions of all entries yields `0..messages.len()`.
pub fn build_index(messages: &[EnrichedMessage]) -> Vec<DisplayEntry> {
    let unread: Vec<bool> = messages.iter().map(|m| m.is_unread).collect();
    build_index_from_unread(&unread)
}

/// Same as [`build_index`], driven only by each message's unread state
pub fn build_index_from_unread(unread: &[bool]) -> Vec<DisplayEntry> {
    let count = unread.len();
    let mut builder = IndexBuilder::new();

    for (i, &is_unread) in unread.iter().enumerate() {
        let is_last = i + 1 >= count;
        if i == 0 || i + 2 == count {
            builder.push_message(i, is_unread || count == 1, false);
        } else if is_unread || is_last {
            builder.push_message(i, true, is_last);
        } else {
            builder.fold(i);
        }
    }

    builder.finish()
}
