//! In-memory storage implementation

use anyhow::{Result, anyhow};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use super::{FolderCatalog, MessageStore};
use crate::models::{Folder, MessageFlag, MessageId, MessageIdentity, RawMessage, ThreadId};

/// In-memory implementation of MessageStore and FolderCatalog
///
/// Uses HashMaps protected by RwLocks for thread-safe access.
pub struct InMemoryMailStore {
    messages: RwLock<HashMap<String, RawMessage>>,
    /// thread id -> message ids in insertion order
    thread_messages: RwLock<HashMap<String, Vec<String>>>,
    folders: RwLock<Vec<Folder>>,
}

fn read<T>(lock: &RwLock<T>) -> Result<RwLockReadGuard<'_, T>> {
    lock.read().map_err(|_| anyhow!("storage lock poisoned"))
}

fn write<T>(lock: &RwLock<T>) -> Result<RwLockWriteGuard<'_, T>> {
    lock.write().map_err(|_| anyhow!("storage lock poisoned"))
}

impl InMemoryMailStore {
    /// Create a new empty in-memory store
    pub fn new() -> Self {
        Self {
            messages: RwLock::new(HashMap::new()),
            thread_messages: RwLock::new(HashMap::new()),
            folders: RwLock::new(Vec::new()),
        }
    }

    /// Get a stored copy by id
    pub fn get_message(&self, id: &MessageId) -> Result<Option<RawMessage>> {
        Ok(read(&self.messages)?.get(&id.0).cloned())
    }
}

impl Default for InMemoryMailStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MessageStore for InMemoryMailStore {
    fn get_thread_messages(&self, account_id: i64, thread_id: &ThreadId) -> Result<Vec<RawMessage>> {
        let thread_messages = read(&self.thread_messages)?;
        let messages = read(&self.messages)?;

        let mut result: Vec<RawMessage> = thread_messages
            .get(&thread_id.0)
            .into_iter()
            .flatten()
            .filter_map(|msg_id| messages.get(msg_id))
            .filter(|msg| msg.account_id == account_id && !msg.deleted)
            .cloned()
            .collect();

        // Stable: copies received at the same instant keep insertion order
        result.sort_by(|a, b| a.received_at.cmp(&b.received_at));

        Ok(result)
    }

    fn upsert_message(&self, message: RawMessage) -> Result<()> {
        let thread_id = message.thread_id.0.clone();
        let msg_id = message.id.0.clone();

        let mut messages = write(&self.messages)?;
        let mut thread_messages = write(&self.thread_messages)?;

        // A message moving threads is unlinked from the old one
        if let Some(previous) = messages.get(&msg_id)
            && previous.thread_id.0 != thread_id
            && let Some(ids) = thread_messages.get_mut(&previous.thread_id.0)
        {
            ids.retain(|id| id != &msg_id);
        }

        let ids = thread_messages.entry(thread_id).or_default();
        if !ids.contains(&msg_id) {
            ids.push(msg_id.clone());
        }
        messages.insert(msg_id, message);

        Ok(())
    }

    fn messages_with_identity(
        &self,
        account_id: i64,
        identity: &MessageIdentity,
    ) -> Result<Vec<RawMessage>> {
        let messages = read(&self.messages)?;
        let mut result: Vec<RawMessage> = messages
            .values()
            .filter(|msg| msg.account_id == account_id && &msg.identity == identity)
            .cloned()
            .collect();
        result.sort_by(|a, b| a.id.cmp(&b.id));
        Ok(result)
    }

    fn update_message_flag(&self, id: &MessageId, flag: MessageFlag, value: bool) -> Result<()> {
        let mut messages = write(&self.messages)?;
        let msg = messages
            .get_mut(&id.0)
            .ok_or_else(|| anyhow!("Message not found: {}", id.as_str()))?;
        msg.set_flag(flag, value);
        Ok(())
    }
}

impl FolderCatalog for InMemoryMailStore {
    fn list_folders(&self) -> Result<Vec<Folder>> {
        Ok(read(&self.folders)?.clone())
    }

    fn upsert_folder(&self, folder: Folder) -> Result<()> {
        let mut folders = write(&self.folders)?;
        match folders.iter_mut().find(|f| f.id == folder.id) {
            Some(existing) => *existing = folder,
            None => folders.push(folder),
        }
        Ok(())
    }
}
