//! Editor behavior settings.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Built-in editor theme.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditorTheme {
    #[default]
    Snow,
    Bubble,
}

impl EditorTheme {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorTheme::Snow => "snow",
            EditorTheme::Bubble => "bubble",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorConfig {
    /// Document pushed into the editor once it reports mounted. Changing
    /// it on disk updates a running editor.
    pub initial_value: Option<String>,
    pub read_only: bool,
    pub placeholder: Option<String>,
    /// Allowed formats. Unset means the editor's own defaults.
    pub formats: Option<Vec<String>>,
    pub theme: EditorTheme,
    /// Saved documents are appended here. Unset means saves are only logged.
    pub save_path: Option<PathBuf>,
}
