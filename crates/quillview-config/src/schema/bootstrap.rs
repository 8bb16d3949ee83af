//! Where the editor document is loaded from.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BootstrapConfig {
    /// Root served under `quillview://`. Unset uses the bundled assets
    /// next to the executable.
    pub assets_dir: Option<PathBuf>,
    /// Document path relative to `assets_dir`.
    pub document: String,
}

impl Default for BootstrapConfig {
    fn default() -> Self {
        Self {
            assets_dir: None,
            document: "editor/index.html".into(),
        }
    }
}
