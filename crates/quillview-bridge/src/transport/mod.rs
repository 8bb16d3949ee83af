//! Transport capabilities injected into the peers.
//!
//! Neither peer owns the channel. The editor side receives one or more
//! [`MessageSource`]s to listen on and an [`OutboundSink`] to post through;
//! the host side receives a [`CommandChannel`] that runs scripts inside the
//! content view. Delivery is FIFO per direction, best effort, and never
//! acknowledged.

mod inbox;
pub mod memory;

use std::sync::Arc;

use quillview_common::TransportError;

use crate::protocol::Surface;

pub use crate::ipc::post_message_script;
pub use inbox::Inbox;

/// Callback invoked with each raw inbound message string.
pub type InboundHandler = Arc<dyn Fn(&str) + Send + Sync>;

/// Token returned by [`MessageSource::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(pub u64);

/// An ambient surface that raises message events inside the content view.
pub trait MessageSource {
    fn surface(&self) -> Surface;

    fn subscribe(&self, handler: InboundHandler) -> Result<SubscriptionId, TransportError>;

    /// Removing an unknown id is a no-op.
    fn unsubscribe(&self, id: SubscriptionId);
}

/// Editor-to-host posting primitive. Fire and forget.
pub trait OutboundSink {
    fn post(&self, raw: String);
}

/// Host-to-editor primitive: run a script inside the content view.
pub trait CommandChannel {
    fn inject(&self, script: &str) -> Result<(), TransportError>;
}

impl<T: OutboundSink + ?Sized> OutboundSink for Box<T> {
    fn post(&self, raw: String) {
        (**self).post(raw)
    }
}

impl<T: CommandChannel + ?Sized> CommandChannel for Box<T> {
    fn inject(&self, script: &str) -> Result<(), TransportError> {
        (**self).inject(script)
    }
}
