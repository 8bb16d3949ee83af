//! Host window settings.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    /// Logical width in pixels (valid range: 200-7680).
    pub width: u32,
    /// Logical height in pixels (valid range: 200-4320).
    pub height: u32,
    pub transparent: bool,
    /// Enable WebView devtools in release builds too.
    pub devtools: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Quillview".into(),
            width: 720,
            height: 540,
            transparent: false,
            devtools: false,
        }
    }
}
