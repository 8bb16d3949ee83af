//! Top-level application state.
//!
//! Implements `winit::application::ApplicationHandler` to drive the main
//! event loop: one window hosting the editor WebView, with the host-side
//! bridge peer routing its messages.

mod callbacks;
mod core;
mod event_handler;
mod init;
mod polling;
mod shutdown;
mod types;

pub use core::QuillviewApp;
