//! QuillviewApp struct definition and constructor.

use std::cell::Cell;
use std::path::PathBuf;
use std::rc::Rc;
use std::sync::Arc;
use std::time::Instant;

use tokio::sync::watch;
use winit::window::Window;

use quillview_bridge::{EditorProps, EditorWebView, OuterPeer, WebViewManager};
use quillview_config::schema::{EditorConfig, QuillviewConfig};

use super::callbacks::host_callbacks;
use super::init::resolve_assets_dir;
use crate::cli::Args;

pub struct QuillviewApp {
    pub(super) config: QuillviewConfig,
    pub(super) config_rx: watch::Receiver<QuillviewConfig>,
    pub(super) assets_dir: PathBuf,

    pub(super) window: Option<Arc<Window>>,
    pub(super) webviews: WebViewManager,
    /// Host-side bridge peer; owns the editor WebView once created.
    pub(super) outer: OuterPeer<EditorWebView>,

    pub(super) runtime: Option<tokio::runtime::Runtime>,
    /// Set by the cancel callback and by a closed WebView.
    pub(super) exit_requested: Rc<Cell<bool>>,
    pub(super) last_poll: Instant,
}

impl QuillviewApp {
    pub fn new(
        config: QuillviewConfig,
        config_rx: watch::Receiver<QuillviewConfig>,
        args: &Args,
        runtime: tokio::runtime::Runtime,
    ) -> Self {
        let exit_requested = Rc::new(Cell::new(false));
        let callbacks = host_callbacks(config.editor.save_path.clone(), Rc::clone(&exit_requested));
        let props = editor_props(&config.editor, args.initial_value.clone());
        let assets_dir = resolve_assets_dir(args.assets.clone(), config.bootstrap.assets_dir.clone());

        Self {
            config,
            config_rx,
            assets_dir,
            window: None,
            webviews: WebViewManager::new(),
            outer: OuterPeer::new(props, callbacks),
            runtime: Some(runtime),
            exit_requested,
            last_poll: Instant::now(),
        }
    }
}

/// Editor props from config, with an optional command-line document.
pub(super) fn editor_props(config: &EditorConfig, initial_value: Option<String>) -> EditorProps {
    EditorProps {
        initial_value: initial_value.or_else(|| config.initial_value.clone()),
        read_only: config.read_only,
        placeholder: config.placeholder.clone(),
        formats: config.formats.clone(),
        modules: None,
        theme: Some(config.theme.as_str().to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_line_value_overrides_config() {
        let config = EditorConfig {
            initial_value: Some("from config".into()),
            ..Default::default()
        };
        let props = editor_props(&config, Some("from cli".into()));
        assert_eq!(props.initial_value.as_deref(), Some("from cli"));

        let props = editor_props(&config, None);
        assert_eq!(props.initial_value.as_deref(), Some("from config"));
    }

    #[test]
    fn props_carry_editor_settings() {
        let config = EditorConfig {
            read_only: true,
            placeholder: Some("Notes".into()),
            formats: Some(vec!["bold".into()]),
            ..Default::default()
        };
        let props = editor_props(&config, None);
        assert!(props.read_only);
        assert_eq!(props.placeholder.as_deref(), Some("Notes"));
        assert_eq!(props.formats, Some(vec!["bold".to_string()]));
        assert_eq!(props.theme.as_deref(), Some("snow"));
        assert!(props.modules.is_none());
    }
}
