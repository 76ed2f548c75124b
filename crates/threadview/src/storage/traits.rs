//! Storage trait definitions

use crate::models::{Folder, MessageFlag, MessageId, MessageIdentity, RawMessage, ThreadId};
use anyhow::Result;

/// Source of raw message records
///
/// Retrieval and synchronization live outside this crate; implementations
/// only have to honor the ordering contract below.
pub trait MessageStore: Send + Sync {
    /// Messages of a thread, ordered by received_at ascending.
    /// Copies flagged deleted are not returned. May be empty.
    fn get_thread_messages(&self, account_id: i64, thread_id: &ThreadId) -> Result<Vec<RawMessage>>;

    /// Insert or update a message copy
    fn upsert_message(&self, message: RawMessage) -> Result<()>;

    /// Every stored copy (in any folder) sharing `identity`, deleted ones included
    fn messages_with_identity(
        &self,
        account_id: i64,
        identity: &MessageIdentity,
    ) -> Result<Vec<RawMessage>>;

    /// Set one flag on one stored copy
    fn update_message_flag(&self, id: &MessageId, flag: MessageFlag, value: bool) -> Result<()>;
}

/// Catalog of the account's folders
pub trait FolderCatalog: Send + Sync {
    /// All folders in catalog order
    fn list_folders(&self) -> Result<Vec<Folder>>;

    /// Insert or update a folder, keeping its catalog position
    fn upsert_folder(&self, folder: Folder) -> Result<()>;
}
