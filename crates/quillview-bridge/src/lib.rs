//! Message bridge between a host application and a rich-text editor running
//! inside an embedded WebView.
//!
//! - [`protocol`]: event tags, envelopes, host commands and their codec
//! - [`inner`]: the editor-side peer
//! - [`outer`]: the host-side peer
//! - [`transport`]: the capabilities both peers are built on, with an
//!   in-memory implementation
//! - [`manager`]: the `wry` WebView that hosts the editor document
//! - [`bootstrap`] / [`content`]: where that document comes from

pub mod bootstrap;
pub mod content;
pub mod events;
pub mod inner;
pub mod ipc;
pub mod manager;
pub mod outer;
pub mod protocol;
pub mod transport;

pub use bootstrap::{BootstrapSource, ContentBootstrap, FileBootstrap, InlineBootstrap};
pub use content::{Asset, ContentProvider};
pub use events::{PageLoadState, WebViewEvent};
pub use inner::{EditorCapability, InnerPeer, ViewState};
pub use manager::{EditorWebView, WebViewConfig, WebViewManager};
pub use outer::{EditorProps, HostCallbacks, OuterPeer};
pub use protocol::{BridgeState, Envelope, EventTag, ViewOptions};
