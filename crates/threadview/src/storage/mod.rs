//! Storage traits and implementations
//!
//! The engine reads messages and folders through these traits; the
//! in-memory implementation backs tests and embedding callers that
//! already hold their data in memory.

mod memory;
mod traits;

pub use memory::InMemoryMailStore;
pub use traits::{FolderCatalog, MessageStore};
