//! Configuration validation.
//!
//! Each section has its own check; all errors are collected into a single
//! `ConfigError`.

mod editor;
mod helpers;


use crate::schema::QuillviewConfig;
use quillview_common::ConfigError;

pub use editor::KNOWN_FORMATS;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &QuillviewConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    editor::validate_editor(&mut errors, config);
    editor::validate_bootstrap(&mut errors, config);
    validate_window(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_window(errors: &mut Vec<String>, config: &QuillviewConfig) {
    helpers::validate_range(errors, "window.width", config.window.width, 200, 7680);
    helpers::validate_range(errors, "window.height", config.window.height, 200, 4320);
    if config.window.title.trim().is_empty() {
        errors.push("window.title must not be empty".into());
    }
}
