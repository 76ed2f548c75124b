//! Thread query API for the rendering layer
//!
//! Assembles a thread from storage and computes the display index that
//! decides which messages render expanded and which fold into groups.

mod index;
mod threads;

pub use index::{build_index, build_index_from_unread};
pub use threads::{Deduplicated, ThreadNotFoundError, deduplicate, load_thread, visible_folders};
