//! In-process transport: used by tests and by embedders that run both
//! peers in one process.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use quillview_common::TransportError;
use tracing::debug;

use super::{CommandChannel, InboundHandler, MessageSource, OutboundSink, SubscriptionId};
use crate::ipc::parse_post_message_script;
use crate::protocol::Surface;

// =============================================================================
// SURFACE
// =============================================================================

/// A message source that fans each delivered message out to its handlers.
#[derive(Clone)]
pub struct MemorySurface {
    surface: Surface,
    available: bool,
    handlers: Arc<Mutex<Vec<(SubscriptionId, InboundHandler)>>>,
    next_id: Arc<AtomicU64>,
}

impl MemorySurface {
    pub fn new(surface: Surface) -> Self {
        Self {
            surface,
            available: true,
            handlers: Arc::new(Mutex::new(Vec::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// A surface that does not exist in the current execution context.
    pub fn unavailable(surface: Surface) -> Self {
        Self {
            available: false,
            ..Self::new(surface)
        }
    }

    /// Raise a message event. Returns how many handlers saw it.
    pub fn deliver(&self, raw: &str) -> usize {
        // Snapshot first so a handler may subscribe or unsubscribe.
        let handlers: Vec<InboundHandler> = match self.handlers.lock() {
            Ok(h) => h.iter().map(|(_, handler)| Arc::clone(handler)).collect(),
            Err(_) => return 0,
        };
        for handler in &handlers {
            handler(raw);
        }
        handlers.len()
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.lock().map(|h| h.len()).unwrap_or(0)
    }
}

impl MessageSource for MemorySurface {
    fn surface(&self) -> Surface {
        self.surface
    }

    fn subscribe(&self, handler: InboundHandler) -> Result<SubscriptionId, TransportError> {
        if !self.available {
            return Err(TransportError::SurfaceUnavailable(
                self.surface.name().to_string(),
            ));
        }
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        let mut handlers = self
            .handlers
            .lock()
            .map_err(|_| TransportError::Closed)?;
        handlers.push((id, handler));
        Ok(id)
    }

    fn unsubscribe(&self, id: SubscriptionId) {
        if let Ok(mut handlers) = self.handlers.lock() {
            handlers.retain(|(existing, _)| *existing != id);
        }
    }
}

// =============================================================================
// OUTBOX
// =============================================================================

/// Records every posted message, in order.
#[derive(Clone, Default)]
pub struct MemoryOutbox {
    posted: Arc<Mutex<Vec<String>>>,
}

impl MemoryOutbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove and return everything posted so far.
    pub fn take(&self) -> Vec<String> {
        self.posted
            .lock()
            .map(|mut p| std::mem::take(&mut *p))
            .unwrap_or_default()
    }

    pub fn posted(&self) -> Vec<String> {
        self.posted.lock().map(|p| p.clone()).unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.posted.lock().map(|p| p.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OutboundSink for MemoryOutbox {
    fn post(&self, raw: String) {
        if let Ok(mut posted) = self.posted.lock() {
            posted.push(raw);
        }
    }
}

// =============================================================================
// INJECTOR
// =============================================================================

/// Runs `window.postMessage(...)` scripts by delivering their payload to
/// a [`MemorySurface`].
#[derive(Clone)]
pub struct MemoryInjector {
    target: MemorySurface,
    open: Arc<AtomicBool>,
}

impl MemoryInjector {
    pub fn new(target: MemorySurface) -> Self {
        Self {
            target,
            open: Arc::new(AtomicBool::new(true)),
        }
    }

    /// Tear the channel down; later injections fail with `Closed`.
    pub fn close(&self) {
        self.open.store(false, Ordering::SeqCst);
    }
}

impl CommandChannel for MemoryInjector {
    fn inject(&self, script: &str) -> Result<(), TransportError> {
        if !self.open.load(Ordering::SeqCst) {
            return Err(TransportError::Closed);
        }
        let payload = parse_post_message_script(script)
            .ok_or_else(|| TransportError::Injection("unsupported script".into()))?;
        let delivered = self.target.deliver(payload);
        debug!(delivered, "injected message delivered");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ipc::post_message_script;
    use crate::transport::Inbox;

    #[test]
    fn surface_fans_out_to_all_handlers() {
        let surface = MemorySurface::new(Surface::Window);
        let a = Inbox::new();
        let b = Inbox::new();
        surface.subscribe(a.handler()).unwrap();
        surface.subscribe(b.handler()).unwrap();

        assert_eq!(surface.deliver("hello"), 2);
        assert_eq!(a.drain(), vec!["hello"]);
        assert_eq!(b.drain(), vec!["hello"]);
    }

    #[test]
    fn unsubscribe_stops_delivery() {
        let surface = MemorySurface::new(Surface::Document);
        let inbox = Inbox::new();
        let id = surface.subscribe(inbox.handler()).unwrap();
        surface.unsubscribe(id);

        assert_eq!(surface.deliver("ignored"), 0);
        assert!(inbox.is_empty());
        assert_eq!(surface.handler_count(), 0);
    }

    #[test]
    fn unavailable_surface_refuses_subscription() {
        let surface = MemorySurface::unavailable(Surface::Document);
        let err = surface.subscribe(Inbox::new().handler()).unwrap_err();
        assert_eq!(
            err,
            TransportError::SurfaceUnavailable("document".into())
        );
    }

    #[test]
    fn outbox_preserves_order() {
        let outbox = MemoryOutbox::new();
        outbox.post("1".into());
        outbox.post("2".into());
        assert_eq!(outbox.posted(), vec!["1", "2"]);
        assert_eq!(outbox.take(), vec!["1", "2"]);
        assert!(outbox.is_empty());
    }

    #[test]
    fn injector_delivers_payload_to_surface() {
        let surface = MemorySurface::new(Surface::Window);
        let inbox = Inbox::new();
        surface.subscribe(inbox.handler()).unwrap();

        let injector = MemoryInjector::new(surface);
        injector
            .inject(&post_message_script(r#"{"initialValue":"x"}"#))
            .unwrap();
        assert_eq!(inbox.drain(), vec![r#"{"initialValue":"x"}"#]);
    }

    #[test]
    fn injector_without_listener_is_silent() {
        let injector = MemoryInjector::new(MemorySurface::new(Surface::Window));
        assert!(injector.inject(&post_message_script("{}")).is_ok());
    }

    #[test]
    fn closed_injector_reports_closed() {
        let injector = MemoryInjector::new(MemorySurface::new(Surface::Window));
        injector.close();
        assert_eq!(
            injector.inject(&post_message_script("{}")),
            Err(TransportError::Closed)
        );
    }

    #[test]
    fn injector_rejects_arbitrary_scripts() {
        let injector = MemoryInjector::new(MemorySurface::new(Surface::Window));
        assert!(matches!(
            injector.inject("document.body.innerHTML = ''"),
            Err(TransportError::Injection(_))
        ));
    }
}
