//! Folder model used for thread badges

use serde::{Deserialize, Serialize};

/// Unique identifier for a folder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FolderId(pub String);

impl FolderId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    // Well-known folders
    pub const INBOX: &'static str = "INBOX";
    pub const SENT: &'static str = "SENT";
    pub const ALL_MAIL: &'static str = "ALL";
}

impl From<String> for FolderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for FolderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A folder from the folder catalog
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    pub id: FolderId,
    /// Display name
    pub name: String,
    /// Virtual folder aggregating other folders; never shown as a badge
    pub is_mailbox_aggregate: bool,
}

impl Folder {
    /// Create a regular folder
    pub fn new(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_mailbox_aggregate: false,
        }
    }

    /// Create a mailbox aggregate folder
    pub fn mailbox(id: impl Into<FolderId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            is_mailbox_aggregate: true,
        }
    }
}
