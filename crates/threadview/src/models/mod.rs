//! Domain models for threads, messages and folders

mod folder;
mod message;
mod thread;

pub use folder::{Folder, FolderId};
pub use message::{EnrichedMessage, MessageFlag, MessageId, MessageIdentity, RawMessage, RawMessageBuilder};
pub use thread::{DisplayEntry, Thread, ThreadId};
