//! Configuration file handling.
//!
//! The whitelist travels in a JSON document under the `whitelistUrl` key,
//! the field name the guarded application writes:
//!
//! ```json
//! { "whitelistUrl": "example.com,app.example.org" }
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

/// Guard settings read from a JSON config file. Unknown fields are ignored.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GuardConfig {
    /// Comma-separated whitelist patterns; absent means nothing whitelisted.
    #[serde(default)]
    pub whitelist_url: Option<String>,
}

impl GuardConfig {
    /// Load a config file from disk.
    pub fn load(path: &Path) -> Result<Self, String> {
        let content = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read '{}': {}", path.display(), e))?;

        serde_json::from_str(&content)
            .map_err(|e| format!("Failed to parse '{}': {}", path.display(), e))
    }
}
