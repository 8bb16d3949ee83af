//! Quillview configuration.
//!
//! TOML-based configuration with validation and live reload. All sections
//! use defaults, so partial configs work out of the box.
//!
//! ```rust,no_run
//! use quillview_config::{load_config, config_to_json};
//!
//! let config = load_config().expect("failed to load config");
//! println!("{}", config_to_json(&config));
//! ```

pub mod reload;
pub mod schema;
pub mod toml_loader;
pub mod validation;
pub mod watcher;

pub use reload::ReloadManager;
pub use schema::{QuillviewConfig, CONFIG_SCHEMA_VERSION};
pub use watcher::ConfigWatcher;

use quillview_common::ConfigError;
use std::path::Path;

/// Load `config.toml` from the OS config directory, creating a default if
/// none exists, and validate it.
pub fn load_config() -> Result<QuillviewConfig, ConfigError> {
    let config = toml_loader::load_default()?;
    validation::validate(&config)?;
    Ok(config)
}

/// Load and validate a config at an explicit path.
pub fn load_config_from(path: &Path) -> Result<QuillviewConfig, ConfigError> {
    let config = toml_loader::load_from_path(path)?;
    validation::validate(&config)?;
    Ok(config)
}

/// Serialize a config to a pretty-printed JSON string.
pub fn config_to_json(config: &QuillviewConfig) -> String {
    serde_json::to_string_pretty(config)
        .unwrap_or_else(|e| format!("{{\"error\": \"failed to serialize config: {e}\"}}"))
}
