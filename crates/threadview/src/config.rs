//! Render configuration
//!
//! Loaded from `render.json` in the threadview config directory when
//! present, otherwise the built-in defaults apply.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Config filename in the threadview config directory
const RENDER_CONFIG_FILE: &str = "render.json";

/// Placeholder replaced by the address hash in the avatar template
pub const AVATAR_HASH_PLACEHOLDER: &str = "{hash}";

/// Settings for deriving display fields
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Maximum snippet length, in characters
    pub snippet_length: usize,
    /// Avatar service URL containing `{hash}`
    pub avatar_url_template: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            snippet_length: 160,
            avatar_url_template: "https://www.gravatar.com/avatar/{hash}?s=80&d=identicon".to_string(),
        }
    }
}

impl RenderConfig {
    /// Load the render config from the config directory, falling back to
    /// defaults when no file exists.
    pub fn load() -> Result<Self> {
        if config::config_exists(RENDER_CONFIG_FILE) {
            let cfg: RenderConfig = config::load_json(RENDER_CONFIG_FILE)?;
            return cfg.validated();
        }
        Ok(Self::default())
    }

    /// Load the render config from a specific JSON file
    pub fn from_file(path: &Path) -> Result<Self> {
        let cfg: RenderConfig = config::load_json_file(path)?;
        cfg.validated()
    }

    /// Parse the render config from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let cfg: RenderConfig =
            serde_json::from_str(json).context("Failed to parse render config JSON")?;
        cfg.validated()
    }

    fn validated(self) -> Result<Self> {
        anyhow::ensure!(
            self.avatar_url_template.contains(AVATAR_HASH_PLACEHOLDER),
            "avatar_url_template must contain {}",
            AVATAR_HASH_PLACEHOLDER
        );
        Ok(self)
    }
}
