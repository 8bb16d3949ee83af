//! Read config from a path or the platform default.

use crate::schema::QuillviewConfig;
use crate::validation;
use quillview_common::ConfigError;
use std::path::Path;
use tracing::{info, warn};

use super::paths::{create_default_config, default_config_path};

/// Load config from a specific TOML file.
///
/// Missing fields take their defaults. A config that fails validation is
/// still returned, with a warning.
pub fn load_from_path(path: &Path) -> Result<QuillviewConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            ConfigError::FileNotFound(path.to_path_buf())
        } else {
            ConfigError::ParseError(format!("failed to read {}: {e}", path.display()))
        }
    })?;

    let config: QuillviewConfig = toml::from_str(&content)
        .map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))?;

    if let Err(e) = validation::validate(&config) {
        warn!(path = %path.display(), "config validation warning: {e}");
    }

    info!(path = %path.display(), "loaded config");
    Ok(config)
}

/// Load config from the platform default path.
///
/// On Linux: `~/.config/quillview/config.toml`
/// On macOS: `~/Library/Application Support/quillview/config.toml`
///
/// A missing file is created from the documented template.
pub fn load_default() -> Result<QuillviewConfig, ConfigError> {
    let path = default_config_path()?;

    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!(path = %path.display(), "no config found, creating default");
            create_default_config(&path)?;
            Ok(QuillviewConfig::default())
        }
        other => other,
    }
}
