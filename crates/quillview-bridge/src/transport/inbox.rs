use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use super::InboundHandler;

/// Shared FIFO mailbox between message-source callbacks and the peer.
///
/// Handlers only enqueue; the owning peer drains and processes messages
/// on its own turn, so a delivery never re-enters the peer.
#[derive(Clone, Default)]
pub struct Inbox {
    queue: Arc<Mutex<VecDeque<String>>>,
}

impl Inbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, raw: String) {
        if let Ok(mut queue) = self.queue.lock() {
            queue.push_back(raw);
        }
    }

    /// Take every pending message in arrival order.
    pub fn drain(&self) -> Vec<String> {
        match self.queue.lock() {
            Ok(mut queue) => queue.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.queue.lock().map(|q| q.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// A handler that enqueues into this inbox.
    pub fn handler(&self) -> InboundHandler {
        let inbox = self.clone();
        Arc::new(move |raw: &str| inbox.push(raw.to_string()))
    }
}
