//! Polling of WebView events and config reloads.

use std::time::Instant;

use winit::event_loop::{ActiveEventLoop, ControlFlow};

use quillview_bridge::WebViewEvent;
use quillview_config::schema::QuillviewConfig;

use super::core::QuillviewApp;
use super::types::POLL_INTERVAL;

impl QuillviewApp {
    /// Run polling and schedule the next wake-up.
    pub(super) fn poll_and_schedule(&mut self, event_loop: &ActiveEventLoop) {
        let now = Instant::now();

        if now.duration_since(self.last_poll) >= POLL_INTERVAL {
            self.last_poll = now;
            self.poll_webview_events();
            self.poll_config();
        }

        event_loop.set_control_flow(ControlFlow::WaitUntil(Instant::now() + POLL_INTERVAL));
    }

    /// Route queued WebView events; IPC bodies go to the bridge peer.
    pub(super) fn poll_webview_events(&mut self) {
        for event in self.webviews.drain_events() {
            match event {
                WebViewEvent::IpcMessage { body } => self.outer.on_inbound_raw(&body),
                WebViewEvent::PageLoad { state, url } => {
                    tracing::debug!(?state, %url, "editor page load");
                }
                WebViewEvent::NavigationRequested { url } => {
                    tracing::debug!(%url, "editor navigation");
                }
                WebViewEvent::Closed => {
                    tracing::info!("Editor WebView closed");
                    self.exit_requested.set(true);
                }
            }
        }
    }

    /// Apply a config published by the reload manager, if any.
    fn poll_config(&mut self) {
        if !self.config_rx.has_changed().unwrap_or(false) {
            return;
        }
        let next = self.config_rx.borrow_and_update().clone();
        self.apply_config(next);
    }

    /// Push settings that can change while the editor is open.
    ///
    /// The document is re-sent only when `editor.initial_value` itself
    /// changed, so edits to other keys never clobber what the user typed.
    pub(super) fn apply_config(&mut self, next: QuillviewConfig) {
        if next.editor.initial_value != self.config.editor.initial_value {
            tracing::info!("initial value changed in config, updating editor");
            self.outer.set_initial_value(next.editor.initial_value.clone());
        }
        if next.window.title != self.config.window.title {
            if let Some(window) = &self.window {
                window.set_title(&next.window.title);
            }
        }
        self.config = next;
    }
}
