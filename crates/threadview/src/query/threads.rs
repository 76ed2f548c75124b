//! Thread assembly
//!
//! Loads the raw copies of a thread, keeps one copy per logical message,
//! enriches the survivors and builds the display index.

use anyhow::Result;
use chrono::{DateTime, TimeZone};
use log::{debug, info};
use std::collections::HashSet;
use std::fmt::Display;

use super::index::build_index;
use crate::config::RenderConfig;
use crate::enrich::enrich;
use crate::models::{EnrichedMessage, Folder, FolderId, MessageIdentity, RawMessage, Thread, ThreadId};
use crate::storage::{FolderCatalog, MessageStore};

/// Error returned when a thread id resolves to no messages
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Thread not found: {thread_id}")]
pub struct ThreadNotFoundError {
    pub thread_id: ThreadId,
}

/// Result of collapsing folder copies of the same logical message
#[derive(Debug, Clone, PartialEq)]
pub struct Deduplicated {
    /// First copy of each identity, in discovery order
    pub messages: Vec<RawMessage>,
    /// Folders touched by any copy, including skipped ones, discovery order
    pub folder_ids: Vec<FolderId>,
}

/// Keep the first copy of each message identity.
///
/// Skipped copies still contribute their folder to `folder_ids`.
pub fn deduplicate(raw: Vec<RawMessage>) -> Deduplicated {
    let mut seen: HashSet<MessageIdentity> = HashSet::new();
    let mut folders_seen: HashSet<FolderId> = HashSet::new();
    let mut messages = Vec::new();
    let mut folder_ids = Vec::new();

    for msg in raw {
        if folders_seen.insert(msg.folder_id.clone()) {
            folder_ids.push(msg.folder_id.clone());
        }
        if seen.insert(msg.identity.clone()) {
            messages.push(msg);
        } else {
            debug!(
                "Skipping copy {} of {} in folder {}",
                msg.id.as_str(),
                msg.identity.as_str(),
                msg.folder_id.as_str()
            );
        }
    }

    Deduplicated {
        messages,
        folder_ids,
    }
}

/// Folder badges for a thread: catalog order, mailbox aggregates excluded
pub fn visible_folders(catalog: Vec<Folder>, touched: &[FolderId]) -> Vec<Folder> {
    let touched: HashSet<&FolderId> = touched.iter().collect();
    catalog
        .into_iter()
        .filter(|folder| !folder.is_mailbox_aggregate && touched.contains(&folder.id))
        .collect()
}

/// Assemble a thread for rendering.
///
/// Fails with [`ThreadNotFoundError`] when the store returns no messages.
/// Dates are labelled relative to `now`, in its timezone.
///
/// # Arguments
/// * `store` - Source of raw messages
/// * `catalog` - Folder catalog used for badges
/// * `account_id` - Account owning the thread
/// * `thread_id` - The thread to assemble
/// * `config` - Snippet and avatar settings
/// * `now` - Reference time for relative date labels
pub fn load_thread<Tz: TimeZone>(
    store: &dyn MessageStore,
    catalog: &dyn FolderCatalog,
    account_id: i64,
    thread_id: &ThreadId,
    config: &RenderConfig,
    now: &DateTime<Tz>,
) -> Result<Thread>
where
    Tz::Offset: Display,
{
    let raw = store.get_thread_messages(account_id, thread_id)?;
    if raw.is_empty() {
        return Err(ThreadNotFoundError {
            thread_id: thread_id.clone(),
        }
        .into());
    }

    let fetched = raw.len();
    let Deduplicated {
        messages,
        folder_ids,
    } = deduplicate(raw);

    let messages: Vec<EnrichedMessage> = messages
        .into_iter()
        .map(|msg| enrich(msg, config, now))
        .collect();

    let unread = messages
        .iter()
        .filter(|m| m.is_unread)
        .map(|m| m.id().clone())
        .collect();

    let folders = visible_folders(catalog.list_folders()?, &folder_ids);
    let index = build_index(&messages);

    info!(
        "Loaded thread {} ({} messages from {} copies, {} folders)",
        thread_id,
        messages.len(),
        fetched,
        folder_ids.len()
    );

    Ok(Thread {
        id: thread_id.clone(),
        subject: messages[0].raw.subject.clone(),
        message_count: messages.len(),
        messages,
        unread,
        folder_ids,
        folders,
        index,
    })
}
