//! Threadview crate - Thread rendering engine for a mail client
//!
//! Given every stored copy of the messages in one conversation, this crate:
//! - Deduplicates copies of the same logical message across folders
//! - Enriches each message with display fields (names, dates, avatar,
//!   sanitized HTML body, snippet)
//! - Builds the display index deciding which messages render expanded and
//!   which collapse into "N more messages" groups
//! - Resolves the folder badges shown for the thread
//!
//! Storage and synchronization are external; the crate reads through the
//! [`MessageStore`] and [`FolderCatalog`] traits.

pub mod actions;
pub mod config;
pub mod enrich;
pub mod models;
pub mod query;
pub mod storage;

pub use actions::ActionHandler;
pub use config::RenderConfig;
pub use enrich::enrich;
pub use models::{
    DisplayEntry, EnrichedMessage, Folder, FolderId, MessageFlag, MessageId, MessageIdentity,
    RawMessage, Thread, ThreadId,
};
pub use query::{ThreadNotFoundError, build_index, load_thread};
pub use storage::{FolderCatalog, InMemoryMailStore, MessageStore};
