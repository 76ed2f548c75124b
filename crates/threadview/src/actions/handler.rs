//! Action handler for message flag mutations

use anyhow::Result;
use log::{debug, info};
use std::sync::Arc;

use crate::models::{FolderId, MessageFlag, MessageIdentity};
use crate::storage::MessageStore;

/// Handler for flag actions like delete and mark-read
///
/// Actions address a logical message by its identity. Without a folder
/// filter every copy sharing the identity is changed, so deleting a thread
/// message removes it thread-wide rather than from one folder.
pub struct ActionHandler {
    store: Arc<dyn MessageStore>,
}

impl ActionHandler {
    /// Create a new action handler
    pub fn new(store: Arc<dyn MessageStore>) -> Self {
        Self { store }
    }

    /// Set `flag` to `value` on the matching copies.
    ///
    /// Returns the number of copies whose flag changed.
    pub fn set_flag(
        &self,
        account_id: i64,
        identity: &MessageIdentity,
        folder: Option<&FolderId>,
        flag: MessageFlag,
        value: bool,
    ) -> Result<usize> {
        let copies = self.store.messages_with_identity(account_id, identity)?;

        let mut changed = 0;
        for msg in copies
            .iter()
            .filter(|msg| folder.is_none_or(|f| &msg.folder_id == f))
        {
            if msg.flag(flag) == value {
                continue;
            }
            debug!(
                "Setting {:?}={} on {} in {}",
                flag,
                value,
                msg.id.as_str(),
                msg.folder_id.as_str()
            );
            self.store.update_message_flag(&msg.id, flag, value)?;
            changed += 1;
        }

        info!(
            "Set {:?}={} on {} of {} copies of {}",
            flag,
            value,
            changed,
            copies.len(),
            identity.as_str()
        );
        Ok(changed)
    }

    /// Delete a message, everywhere unless a folder is given
    pub fn delete_message(
        &self,
        account_id: i64,
        identity: &MessageIdentity,
        folder: Option<&FolderId>,
    ) -> Result<usize> {
        self.set_flag(account_id, identity, folder, MessageFlag::Deleted, true)
    }

    /// Set the read status of a message
    pub fn set_read(
        &self,
        account_id: i64,
        identity: &MessageIdentity,
        folder: Option<&FolderId>,
        is_read: bool,
    ) -> Result<usize> {
        self.set_flag(account_id, identity, folder, MessageFlag::Seen, is_read)
    }
}
