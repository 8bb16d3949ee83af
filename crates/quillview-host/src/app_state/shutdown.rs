//! Graceful shutdown: release the editor WebView, then the runtime and window.

use std::time::Duration;

use super::core::QuillviewApp;

// =============================================================================
// SHUTDOWN
// =============================================================================

impl QuillviewApp {
    /// Tear down in order: the WebView must go before its parent window.
    /// Safe to call more than once.
    pub(super) fn shutdown(&mut self) {
        tracing::info!("Initiating graceful shutdown");

        drop(self.outer.detach_channel());

        if let Some(rt) = self.runtime.take() {
            rt.shutdown_timeout(Duration::from_secs(2));
        }

        self.window = None;

        tracing::info!("Graceful shutdown complete");
    }
}
