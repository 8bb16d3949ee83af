use std::borrow::Cow;
use std::sync::Arc;

use quillview_common::BridgeError;
use tracing::{debug, warn};
use wry::http::Response;
use wry::raw_window_handle;
use wry::WebViewBuilder;

use crate::content::{request_path, ContentProvider};
use crate::ipc::IPC_INIT_SCRIPT;

use super::handle::EditorWebView;
use super::types::WebViewConfig;
use super::WebViewManager;

/// Scheme served by the [`ContentProvider`].
pub const CUSTOM_PROTOCOL: &str = "quillview";

impl WebViewManager {
    /// Create the editor WebView as a child of `window`, positioned at
    /// `bounds`.
    pub fn create<W: raw_window_handle::HasWindowHandle>(
        &self,
        window: &W,
        bounds: wry::Rect,
        config: WebViewConfig,
    ) -> Result<EditorWebView, BridgeError> {
        let mut builder = WebViewBuilder::new()
            .with_bounds(bounds)
            .with_transparent(config.transparent)
            .with_devtools(config.devtools)
            .with_clipboard(config.clipboard)
            .with_focused(true)
            .with_initialization_script(IPC_INIT_SCRIPT);

        if let Some(ua) = &config.user_agent {
            builder = builder.with_user_agent(ua);
        }

        builder = Self::attach_ipc_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_page_load_handler(builder, Arc::clone(&self.events));
        builder = Self::attach_navigation_handler(builder, Arc::clone(&self.events));
        builder = self.attach_custom_protocol(builder);

        let initial_url = config.initial_url();
        builder = match (&config.html, &config.url) {
            (Some(html), _) => builder.with_html(html),
            (None, Some(url)) => builder.with_url(url),
            (None, None) => builder.with_html("<html><body></body></html>"),
        };

        let webview = builder
            .build_as_child(window)
            .map_err(|e| BridgeError::WebView(e.to_string()))?;
        debug!(url = %initial_url, "editor WebView created");

        Ok(EditorWebView {
            webview,
            current_url: initial_url,
        })
    }

    /// Serve bundled assets under `quillview://`.
    pub fn set_content_provider(&mut self, provider: Arc<ContentProvider>) {
        self.content_provider = Some(provider);
    }

    fn attach_custom_protocol<'a>(&self, builder: WebViewBuilder<'a>) -> WebViewBuilder<'a> {
        let Some(provider) = &self.content_provider else {
            return builder;
        };
        let cp = Arc::clone(provider);
        builder.with_custom_protocol(CUSTOM_PROTOCOL.to_string(), move |_id, request| {
            let uri = request.uri().to_string();
            let path = request_path(&uri);

            let response = match cp.resolve(path) {
                Some(asset) => Response::builder()
                    .status(200)
                    .header("Content-Type", asset.mime.as_ref())
                    .header("Access-Control-Allow-Origin", "quillview://localhost")
                    .body(Cow::from(asset.data.into_owned())),
                None => {
                    warn!(path = %path, "custom protocol: asset not found");
                    Response::builder()
                        .status(404)
                        .body(Cow::from(b"Not Found".to_vec()))
                }
            };
            response.unwrap_or_else(|e| {
                warn!(error = %e, "custom protocol: response build failed");
                Response::new(Cow::from(Vec::new()))
            })
        })
    }
}
