//! Editor WebView creation and event collection.
//!
//! `WebViewManager` builds the `wry::WebView` that hosts the editor
//! document and collects its events for the host event loop.

use std::sync::{Arc, Mutex};

use crate::content::ContentProvider;
use crate::events::WebViewEvent;

mod handle;
pub mod handlers;
mod lifecycle;
mod types;

pub use handle::EditorWebView;
pub use lifecycle::CUSTOM_PROTOCOL;
pub use types::WebViewConfig;

pub struct WebViewManager {
    /// Event sink; handlers push here and the main loop drains it.
    pub(crate) events: Arc<Mutex<Vec<WebViewEvent>>>,
    content_provider: Option<Arc<ContentProvider>>,
}

impl WebViewManager {
    pub fn new() -> Self {
        Self {
            events: Arc::new(Mutex::new(Vec::new())),
            content_provider: None,
        }
    }

    /// Drain all pending events.
    pub fn drain_events(&self) -> Vec<WebViewEvent> {
        match self.events.lock() {
            Ok(mut events) => std::mem::take(&mut *events),
            Err(_) => Vec::new(),
        }
    }

    /// Record that the editor WebView went away.
    pub fn notify_closed(&self) {
        if let Ok(mut events) = self.events.lock() {
            events.push(WebViewEvent::Closed);
        }
    }
}

impl Default for WebViewManager {
    fn default() -> Self {
        Self::new()
    }
}
