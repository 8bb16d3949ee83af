//! Window creation, bootstrap loading, and editor WebView setup.

use std::path::PathBuf;
use std::sync::Arc;

use winit::dpi::{LogicalSize, PhysicalSize};
use winit::event_loop::ActiveEventLoop;
use winit::window::WindowAttributes;

use quillview_bridge::{ContentBootstrap, ContentProvider, WebViewConfig};

use super::core::QuillviewApp;

// =============================================================================
// CONSTANTS
// =============================================================================

/// Relative path from the binary to the bundled editor assets.
const ASSETS_DIR: &str = "assets";

// =============================================================================
// INITIALIZATION
// =============================================================================

impl QuillviewApp {
    /// Create the window, load the bootstrap document, and mount the editor
    /// WebView. Returns `false` if the event loop should exit.
    pub(super) fn initialize_window(&mut self, event_loop: &ActiveEventLoop) -> bool {
        let wc = &self.config.window;
        let attrs = WindowAttributes::default()
            .with_title(wc.title.clone())
            .with_transparent(wc.transparent)
            .with_inner_size(LogicalSize::new(wc.width as f64, wc.height as f64));

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                tracing::error!("Failed to create window: {e}");
                return false;
            }
        };

        let provider = Arc::new(ContentProvider::new(self.assets_dir.clone()));
        self.webviews.set_content_provider(Arc::clone(&provider));
        tracing::info!(dir = %self.assets_dir.display(), "serving editor assets");

        let source = ContentBootstrap::new(provider, self.config.bootstrap.document.clone());
        let Some(rt) = self.runtime.as_ref() else {
            tracing::error!("async runtime already shut down");
            return false;
        };
        if !rt.block_on(self.outer.bootstrap(&source)) {
            tracing::error!("No editor document; nothing to show");
            return false;
        }
        let Some(document) = self.outer.document().map(str::to_owned) else {
            return false;
        };

        let webview_config = WebViewConfig {
            transparent: wc.transparent,
            devtools: wc.devtools || cfg!(debug_assertions),
            ..WebViewConfig::with_document(document)
        };
        let bounds = full_window_bounds(window.inner_size());
        match self.webviews.create(window.as_ref(), bounds, webview_config) {
            Ok(webview) => {
                self.outer.attach_channel(webview);
                tracing::info!("Editor WebView created");
            }
            Err(e) => {
                tracing::error!("Failed to create editor WebView: {e}");
                return false;
            }
        }

        self.window = Some(window);
        true
    }

    /// Keep the WebView filling the window.
    pub(super) fn sync_webview_bounds(&self) {
        let (Some(window), Some(webview)) = (&self.window, self.outer.channel()) else {
            return;
        };
        if let Err(e) = webview.set_bounds(full_window_bounds(window.inner_size())) {
            tracing::warn!("Failed to resize editor WebView: {e}");
        }
    }
}

/// `--assets`, then the configured directory, then `assets/` beside the
/// binary, then `assets/` in the working directory.
pub(super) fn resolve_assets_dir(cli: Option<PathBuf>, configured: Option<PathBuf>) -> PathBuf {
    if let Some(dir) = cli.or(configured) {
        return dir;
    }

    let beside_exe = std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(ASSETS_DIR)));
    if let Some(dir) = beside_exe.filter(|dir| dir.is_dir()) {
        return dir;
    }

    std::env::current_dir()
        .map(|cwd| cwd.join(ASSETS_DIR))
        .unwrap_or_else(|_| PathBuf::from(ASSETS_DIR))
}

/// A rect covering the whole client area.
pub(super) fn full_window_bounds(size: PhysicalSize<u32>) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Physical(wry::dpi::PhysicalPosition::new(0, 0)),
        size: wry::dpi::Size::Physical(wry::dpi::PhysicalSize::new(size.width, size.height)),
    }
}

// =============================================================================
// TESTS
// =============================================================================
