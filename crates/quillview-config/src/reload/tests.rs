use super::*;
use crate::schema::QuillviewConfig;
use std::path::PathBuf;

#[tokio::test]
async fn start_with_nonexistent_path_uses_defaults() {
    let path = PathBuf::from("/tmp/nonexistent_quillview_reload_test.toml");
    let (config, rx) = ReloadManager::start(path).await;
    assert_eq!(config, QuillviewConfig::default());
    assert_eq!(*rx.borrow(), QuillviewConfig::default());
}

#[tokio::test]
async fn start_with_valid_config() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[editor]
initial_value = "<p>from disk</p>"
"#,
    )
    .unwrap();

    let (config, _rx) = ReloadManager::start(path).await;
    assert_eq!(config.editor.initial_value.as_deref(), Some("<p>from disk</p>"));
    assert_eq!(config.window.title, "Quillview"); // default
}
