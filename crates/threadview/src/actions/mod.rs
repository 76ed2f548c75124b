//! Message actions module
//!
//! Flag mutations (deleted, seen, flagged) applied to every folder copy
//! of a logical message, or to the copies in a single folder.

mod handler;

pub use handler::ActionHandler;
