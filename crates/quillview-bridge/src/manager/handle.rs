use quillview_common::TransportError;
use wry::WebView;

use crate::transport::CommandChannel;

/// Handle to the live editor WebView.
///
/// Implements [`CommandChannel`], so it can be handed to an
/// [`OuterPeer`](crate::outer::OuterPeer) as its injection primitive.
pub struct EditorWebView {
    pub(super) webview: WebView,
    pub(super) current_url: String,
}

impl EditorWebView {
    pub fn current_url(&self) -> &str {
        &self.current_url
    }

    /// Replace the page with a freshly loaded bootstrap document.
    pub fn load_html(&mut self, html: &str) -> Result<(), wry::Error> {
        self.current_url = "about:blank".to_string();
        self.webview.load_html(html)
    }

    /// Execute JavaScript in the WebView context.
    pub fn evaluate_script(&self, js: &str) -> Result<(), wry::Error> {
        self.webview.evaluate_script(js)
    }

    /// Set the WebView bounds within the parent window.
    pub fn set_bounds(&self, bounds: wry::Rect) -> Result<(), wry::Error> {
        self.webview.set_bounds(bounds)
    }

    pub fn focus(&self) -> Result<(), wry::Error> {
        self.webview.focus()
    }

    /// No-op unless devtools were enabled at creation.
    pub fn open_devtools(&self) {
        self.webview.open_devtools();
    }

    pub fn inner(&self) -> &WebView {
        &self.webview
    }
}

impl CommandChannel for EditorWebView {
    fn inject(&self, script: &str) -> Result<(), TransportError> {
        self.webview
            .evaluate_script(script)
            .map_err(|e| TransportError::Injection(e.to_string()))
    }
}
