//! Editor and bootstrap document checks.

use std::path::{Component, Path};

use crate::schema::QuillviewConfig;

use super::helpers::validate_max_len;

/// Formats the bundled editor understands.
pub const KNOWN_FORMATS: &[&str] = &[
    "background",
    "bold",
    "color",
    "font",
    "code",
    "italic",
    "link",
    "size",
    "strike",
    "script",
    "underline",
    "blockquote",
    "header",
    "indent",
    "list",
    "bullet",
    "align",
    "direction",
    "code-block",
];

pub(crate) fn validate_editor(errors: &mut Vec<String>, config: &QuillviewConfig) {
    if let Some(placeholder) = &config.editor.placeholder {
        validate_max_len(errors, "editor.placeholder", placeholder, 200);
    }

    if let Some(formats) = &config.editor.formats {
        if formats.is_empty() {
            errors.push("editor.formats must not be empty; omit it for defaults".into());
        }
        for format in formats {
            if !KNOWN_FORMATS.contains(&format.as_str()) {
                errors.push(format!("editor.formats contains unknown format '{format}'"));
            }
        }
    }

    if let Some(path) = &config.editor.save_path {
        if path.as_os_str().is_empty() {
            errors.push("editor.save_path must not be empty".into());
        }
    }
}

pub(crate) fn validate_bootstrap(errors: &mut Vec<String>, config: &QuillviewConfig) {
    let document = Path::new(&config.bootstrap.document);
    if config.bootstrap.document.is_empty() {
        errors.push("bootstrap.document must not be empty".into());
        return;
    }
    let escapes = document
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if escapes {
        errors.push(format!(
            "bootstrap.document '{}' must be a relative path inside assets_dir",
            config.bootstrap.document
        ));
    }
}
