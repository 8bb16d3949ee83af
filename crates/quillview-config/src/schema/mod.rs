//! Configuration schema types for Quillview.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod bootstrap;
mod editor;
mod system;
mod window;

pub use bootstrap::*;
pub use editor::*;
pub use system::*;
pub use window::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration. Only override what you want to change.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuillviewConfig {
    pub editor: EditorConfig,
    pub window: WindowConfig,
    pub bootstrap: BootstrapConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
