//! Events raised by the editor WebView.

use serde::{Deserialize, Serialize};

/// State of a page load lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PageLoadState {
    Started,
    Finished,
}

impl From<wry::PageLoadEvent> for PageLoadState {
    fn from(e: wry::PageLoadEvent) -> Self {
        match e {
            wry::PageLoadEvent::Started => Self::Started,
            wry::PageLoadEvent::Finished => Self::Finished,
        }
    }
}

/// Pushed from wry handlers, drained by the host event loop.
#[derive(Debug, Clone, PartialEq)]
pub enum WebViewEvent {
    PageLoad { state: PageLoadState, url: String },
    /// A raw envelope posted by the editor document.
    IpcMessage { body: String },
    /// An allowed navigation. Blocked ones are only logged.
    NavigationRequested { url: String },
    Closed,
}

impl WebViewEvent {
    /// The envelope body, if this event carries one.
    pub fn ipc_body(&self) -> Option<&str> {
        match self {
            WebViewEvent::IpcMessage { body } => Some(body),
            _ => None,
        }
    }
}
