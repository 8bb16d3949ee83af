use std::sync::{Arc, Mutex};

use tracing::{debug, warn};
use wry::WebViewBuilder;

use crate::events::{PageLoadState, WebViewEvent};

use super::WebViewManager;

// =============================================================================
// NAVIGATION ALLOWLIST
// =============================================================================

/// URL prefixes the editor WebView may navigate to. Everything else is
/// blocked.
/// - `quillview://` serves the bundled editor document
/// - `about:blank` is the origin of an inline bootstrap document
/// - CDN origins host the editor library
pub const ALLOWED_NAV_PREFIXES: &[&str] = &[
    "quillview://",
    // WebView2 rewrites quillview://localhost/… to http://quillview.localhost/…
    "http://quillview.localhost/",
    "about:blank",
    "https://cdn.jsdelivr.net/",
    "https://cdn.quilljs.com/",
];

pub fn is_navigation_allowed(url: &str) -> bool {
    ALLOWED_NAV_PREFIXES
        .iter()
        .any(|prefix| url.starts_with(prefix))
}

/// Envelope bodies must be JSON objects; anything else never reaches the
/// host peer.
pub fn is_envelope_body(body: &str) -> bool {
    matches!(
        serde_json::from_str::<serde_json::Value>(body),
        Ok(serde_json::Value::Object(_))
    )
}

// =============================================================================
// HANDLER ATTACHMENTS
// =============================================================================

type EventSink = Arc<Mutex<Vec<WebViewEvent>>>;

impl WebViewManager {
    pub(super) fn attach_ipc_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_ipc_handler(move |request| {
            let body = request.body().to_string();

            if !is_envelope_body(&body) {
                warn!(body_len = body.len(), "IPC message rejected: not a JSON object");
                return;
            }

            debug!(body_len = body.len(), "IPC message from editor");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::IpcMessage { body });
            }
        })
    }

    pub(super) fn attach_page_load_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_on_page_load_handler(move |event, url| {
            let state = PageLoadState::from(event);
            debug!(?state, url = %url, "page load");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::PageLoad { state, url });
            }
        })
    }

    pub(super) fn attach_navigation_handler<'a>(
        builder: WebViewBuilder<'a>,
        events: EventSink,
    ) -> WebViewBuilder<'a> {
        builder.with_navigation_handler(move |url| {
            if !is_navigation_allowed(&url) {
                warn!(url = %url, "navigation blocked: URL not in allowlist");
                return false;
            }

            debug!(url = %url, "navigation allowed");
            if let Ok(mut evts) = events.lock() {
                evts.push(WebViewEvent::NavigationRequested { url });
            }
            true
        })
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn allows_bundled_editor() {
        assert!(is_navigation_allowed(
            "quillview://localhost/editor/index.html"
        ));
        assert!(is_navigation_allowed(
            "http://quillview.localhost/editor/index.html"
        ));
        assert!(is_navigation_allowed("about:blank"));
    }

    #[test]
    fn allows_editor_cdn() {
        assert!(is_navigation_allowed(
            "https://cdn.jsdelivr.net/npm/quill@1.3.7/dist/quill.min.js"
        ));
        assert!(is_navigation_allowed(
            "https://cdn.quilljs.com/1.3.7/quill.snow.css"
        ));
    }

    #[test]
    fn blocks_everything_else() {
        assert!(!is_navigation_allowed("https://evil.com"));
        assert!(!is_navigation_allowed("http://localhost:8080"));
        assert!(!is_navigation_allowed("file:///etc/passwd"));
        assert!(!is_navigation_allowed("javascript:alert(1)"));
        assert!(!is_navigation_allowed("data:text/html,<h1>x</h1>"));
        assert!(!is_navigation_allowed(""));
    }

    #[test]
    fn lookalike_hosts_are_blocked() {
        assert!(!is_navigation_allowed("https://cdn.jsdelivr.net.evil.com/x"));
        assert!(!is_navigation_allowed("http://quillview.localhost.evil.com"));
    }

    #[test]
    fn envelope_bodies_must_be_objects() {
        assert!(is_envelope_body(r#"{"event":"ON_CANCEL"}"#));
        assert!(!is_envelope_body("[1,2]"));
        assert!(!is_envelope_body("\"QUILLJS_COMPONENT_MOUNTED\""));
        assert!(!is_envelope_body("{oops"));
    }
}
