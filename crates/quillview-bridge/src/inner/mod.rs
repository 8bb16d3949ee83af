//! Editor-side peer.
//!
//! Runs inside the content view next to the live editor. Turns editor
//! callbacks into outbound envelopes and inbound host commands into view
//! state changes followed by a re-render.

mod view;

#[cfg(test)]
mod tests;

use quillview_common::TransportError;
use tracing::{debug, info, warn};

use crate::protocol::{
    decode_command, encode, BlurPayload, BridgeState, ChangePayload, ChangeSource, Delta,
    EditorSnapshot, Envelope, EventTag, KeyPayload, Range, SavePayload, SelectionPayload,
};
use crate::transport::{Inbox, MessageSource, OutboundSink, SubscriptionId};

pub use view::{Affordances, ViewState, DEFAULT_FORMATS, TOOLBAR_ITEMS};

/// The rich-text component, seen from the bridge.
///
/// Only the re-render hook is needed here; change, selection, focus and
/// key notifications flow the other way, into the `on_*` methods of
/// [`InnerPeer`].
pub trait EditorCapability {
    fn render(&mut self, view: &ViewState);
}

struct Attachment {
    source: Box<dyn MessageSource>,
    subscription: Option<SubscriptionId>,
}

/// Editor-side end of the bridge. Exclusively owns the editor capability.
pub struct InnerPeer<E: EditorCapability> {
    editor: E,
    outbound: Box<dyn OutboundSink>,
    attachments: Vec<Attachment>,
    inbox: Inbox,
    view: ViewState,
    state: BridgeState,
}

impl<E: EditorCapability> InnerPeer<E> {
    pub fn new(editor: E, outbound: impl OutboundSink + 'static) -> Self {
        Self {
            editor,
            outbound: Box::new(outbound),
            attachments: Vec::new(),
            inbox: Inbox::new(),
            view: ViewState::default(),
            state: BridgeState::default(),
        }
    }

    /// Register a surface the inbound listener should be attached to.
    pub fn with_source(mut self, source: impl MessageSource + 'static) -> Self {
        self.attachments.push(Attachment {
            source: Box::new(source),
            subscription: None,
        });
        self
    }

    pub fn view(&self) -> &ViewState {
        &self.view
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn editor(&self) -> &E {
        &self.editor
    }

    pub fn editor_mut(&mut self) -> &mut E {
        &mut self.editor
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Attach the inbound listener, then announce the editor as mounted.
    ///
    /// The mounted envelope is posted even when no listener could be
    /// attached; the host learns about that from the error envelope.
    pub fn mount(&mut self) {
        if let Err(e) = self.attach_inbound_listener() {
            warn!(error = %e, "editor mounted without an inbound listener");
        }
        self.post(Envelope::ComponentMounted);
        self.state.on_mounted();
        self.editor.render(&self.view);
        info!(state = ?self.state, "editor bridge ready");
    }

    /// Attach the single inbound handler to every known surface.
    ///
    /// Surfaces that already carry the handler are skipped, so repeated
    /// calls never cause duplicate delivery. Fails when no surface ends up
    /// with a listener; an `UNABLE_TO_ADD_EVENT_LISTENER` envelope is
    /// posted in that case.
    pub fn attach_inbound_listener(&mut self) -> Result<(), TransportError> {
        let mut newly_attached = Vec::new();

        for attachment in &mut self.attachments {
            if attachment.subscription.is_some() {
                continue;
            }
            let surface = attachment.source.surface();
            match attachment.source.subscribe(self.inbox.handler()) {
                Ok(id) => {
                    attachment.subscription = Some(id);
                    newly_attached.push(surface);
                }
                Err(e) => {
                    debug!(surface = surface.name(), error = %e, "listener not attached");
                }
            }
        }

        for surface in newly_attached {
            debug!(surface = surface.name(), "inbound listener attached");
            self.post(Envelope::listener_added(surface));
        }

        if self.attached_count() == 0 {
            self.post(Envelope::ListenerUnavailable {
                error: EventTag::ListenerUnavailable.as_str().to_string(),
            });
            return Err(TransportError::SurfaceUnavailable(
                "no message surface accepted a listener".into(),
            ));
        }

        self.state.on_listener_attached();
        Ok(())
    }

    /// Remove the inbound handler from every surface it was attached to.
    pub fn detach_inbound_listeners(&mut self) {
        let mut detached = Vec::new();
        for attachment in &mut self.attachments {
            if let Some(id) = attachment.subscription.take() {
                attachment.source.unsubscribe(id);
                detached.push(attachment.source.surface());
            }
        }
        for surface in detached {
            debug!(surface = surface.name(), "inbound listener removed");
            self.post(Envelope::listener_removed(surface));
        }
    }

    pub fn attached_count(&self) -> usize {
        self.attachments
            .iter()
            .filter(|a| a.subscription.is_some())
            .count()
    }

    // =========================================================================
    // INBOUND
    // =========================================================================

    /// Process every queued inbound message in arrival order.
    pub fn process_inbound(&mut self) -> usize {
        let pending = self.inbox.drain();
        let count = pending.len();
        for raw in pending {
            self.handle_inbound_message(&raw);
        }
        count
    }

    /// Merge a host command into the view and re-render.
    ///
    /// Each recognized field merges on its own, so one mistyped value does
    /// not discard the rest. Undecodable messages are dropped; this never
    /// fails.
    pub fn handle_inbound_message(&mut self, raw: &str) {
        match decode_command(raw) {
            Ok(options) if options.is_empty() => {
                debug!(len = raw.len(), "inbound message carried no recognized fields");
            }
            Ok(options) => {
                debug!(
                    has_initial_value = options.initial_value.is_some(),
                    "host command applied"
                );
                self.view.apply(options);
                self.editor.render(&self.view);
            }
            Err(e) => {
                debug!(error = %e, len = raw.len(), "inbound message dropped");
            }
        }
    }

    // =========================================================================
    // OUTBOUND
    // =========================================================================

    pub fn on_editor_changed(
        &mut self,
        value: impl Into<String>,
        delta: Delta,
        source: ChangeSource,
        editor: EditorSnapshot,
    ) {
        let value = value.into();
        self.view.record_edit(&value, &editor.text);
        self.post(Envelope::Change(ChangePayload {
            value,
            delta,
            source,
            editor,
        }));
    }

    pub fn on_selection_changed(
        &self,
        range: Option<Range>,
        source: ChangeSource,
        editor: EditorSnapshot,
    ) {
        self.post(Envelope::ChangeSelection(SelectionPayload {
            range,
            source,
            editor,
        }));
    }

    pub fn on_focus(&self, range: Option<Range>, source: ChangeSource, editor: EditorSnapshot) {
        self.post(Envelope::Focus(SelectionPayload {
            range,
            source,
            editor,
        }));
    }

    pub fn on_blur(
        &self,
        previous_range: Option<Range>,
        source: ChangeSource,
        editor: EditorSnapshot,
    ) {
        self.post(Envelope::Blur(BlurPayload {
            previous_range,
            source,
            editor,
        }));
    }

    pub fn on_key_down(&self, event: serde_json::Value) {
        self.post(Envelope::KeyDown(KeyPayload { event }));
    }

    pub fn on_key_press(&self, event: serde_json::Value) {
        self.post(Envelope::KeyPress(KeyPayload { event }));
    }

    pub fn on_key_up(&self, event: serde_json::Value) {
        self.post(Envelope::KeyUp(KeyPayload { event }));
    }

    /// Commit `value` to the host and reset the editor to empty.
    pub fn on_save_requested(&mut self, value: impl Into<String>) {
        self.post(Envelope::Save(SavePayload {
            value: value.into(),
        }));
        self.view.clear_content();
        self.editor.render(&self.view);
    }

    /// Save the current content. Does nothing while the document is empty.
    pub fn request_save(&mut self) -> bool {
        if !self.view.has_content() {
            return false;
        }
        let value = self.view.content().to_string();
        self.on_save_requested(value);
        true
    }

    pub fn on_cancel_requested(&self) {
        self.post(Envelope::Cancel);
    }

    fn post(&self, envelope: Envelope) {
        debug!(tag = %envelope.tag(), "posting envelope");
        self.outbound.post(encode(&envelope));
    }
}
