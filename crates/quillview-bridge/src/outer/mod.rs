//! Host-side peer.
//!
//! Owns the embedding surface: loads the bootstrap document, routes
//! envelopes posted by the editor to host callbacks, and pushes host
//! configuration into the editor as injected commands.

mod callbacks;


use tracing::{debug, info, warn};

use crate::bootstrap::BootstrapSource;
use crate::ipc::post_message_script;
use crate::protocol::{
    decode, encode_command, BridgeState, DecodeFailure, Envelope, ViewOptions,
};
use crate::transport::CommandChannel;

pub use callbacks::HostCallbacks;

/// Host-supplied editor configuration.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EditorProps {
    pub initial_value: Option<String>,
    pub read_only: bool,
    pub placeholder: Option<String>,
    pub formats: Option<Vec<String>>,
    pub modules: Option<serde_json::Map<String, serde_json::Value>>,
    pub theme: Option<String>,
}

impl EditorProps {
    /// The command that brings a freshly mounted editor in line with these props.
    pub fn to_options(&self) -> ViewOptions {
        ViewOptions {
            initial_value: self.initial_value.clone(),
            read_only: self.read_only.then_some(true),
            placeholder: self.placeholder.clone(),
            preserve_whitespace: None,
            formats: self.formats.clone(),
            modules: self.modules.clone(),
            theme: self.theme.clone(),
        }
    }
}

/// Host-side end of the bridge.
pub struct OuterPeer<C: CommandChannel> {
    channel: Option<C>,
    callbacks: HostCallbacks,
    props: EditorProps,
    document: Option<String>,
    state: BridgeState,
}

impl<C: CommandChannel> OuterPeer<C> {
    pub fn new(props: EditorProps, callbacks: HostCallbacks) -> Self {
        Self {
            channel: None,
            callbacks,
            props,
            document: None,
            state: BridgeState::default(),
        }
    }

    pub fn props(&self) -> &EditorProps {
        &self.props
    }

    pub fn state(&self) -> BridgeState {
        self.state
    }

    pub fn callbacks_mut(&mut self) -> &mut HostCallbacks {
        &mut self.callbacks
    }

    /// The loaded bootstrap document, once available.
    pub fn document(&self) -> Option<&str> {
        self.document.as_deref()
    }

    /// Bootstrapped and connected to a content view.
    pub fn is_mounted(&self) -> bool {
        self.document.is_some() && self.channel.is_some()
    }

    /// Whether the editor has announced itself.
    pub fn is_editor_ready(&self) -> bool {
        self.state.is_ready()
    }

    // =========================================================================
    // LIFECYCLE
    // =========================================================================

    /// Load the document that seeds the content view.
    ///
    /// A failure is logged and leaves the surface without content; the
    /// caller may retry by bootstrapping again.
    pub async fn bootstrap(&mut self, source: &dyn BootstrapSource) -> bool {
        match source.load().await {
            Ok(document) => {
                info!(
                    source = %source.describe(),
                    bytes = document.len(),
                    "bootstrap document loaded"
                );
                self.document = Some(document);
                true
            }
            Err(e) => {
                warn!(source = %source.describe(), error = %e, "bootstrap document failed to load");
                false
            }
        }
    }

    /// Connect the content view once it has been created with the bootstrap
    /// document and an inbound handler feeding [`OuterPeer::on_inbound_raw`].
    pub fn attach_channel(&mut self, channel: C) {
        self.channel = Some(channel);
        self.state.on_listener_attached();
        debug!("host channel attached");
    }

    pub fn channel(&self) -> Option<&C> {
        self.channel.as_ref()
    }

    /// Release the content view, e.g. before its window is destroyed.
    /// Later commands are dropped.
    pub fn detach_channel(&mut self) -> Option<C> {
        let channel = self.channel.take();
        if channel.is_some() {
            debug!("host channel detached");
        }
        channel
    }

    // =========================================================================
    // HOST -> EDITOR
    // =========================================================================

    /// Best-effort, at-most-once delivery of a command into the content view.
    ///
    /// Returns whether the command was handed to the transport. Nothing is
    /// acknowledged: a command sent before the editor listens is lost.
    pub fn send_command(&self, options: &ViewOptions) -> bool {
        if self.document.is_none() {
            debug!("command dropped: bootstrap not complete");
            return false;
        }
        let Some(channel) = &self.channel else {
            debug!("command dropped: no content view attached");
            return false;
        };

        let script = post_message_script(&encode_command(options));
        match channel.inject(&script) {
            Ok(()) => {
                debug!(editor_ready = self.state.is_ready(), "command injected");
                true
            }
            Err(e) => {
                warn!(error = %e, "command injection failed");
                false
            }
        }
    }

    /// React to a new externally supplied initial value.
    ///
    /// Only a changed value is pushed, and only once the surface is mounted.
    pub fn set_initial_value(&mut self, value: Option<String>) {
        if value == self.props.initial_value {
            return;
        }
        self.props.initial_value = value.clone();
        if !self.is_mounted() {
            return;
        }
        if let Some(value) = value {
            self.send_command(&ViewOptions::initial_value(value));
        }
    }

    /// Options pushed to the editor as soon as it reports mounted.
    pub fn initial_options(&self) -> ViewOptions {
        self.props.to_options()
    }

    // =========================================================================
    // EDITOR -> HOST
    // =========================================================================

    /// Decode a message posted by the editor and invoke the matching callback.
    ///
    /// Malformed messages and unknown tags are dropped; this never fails.
    pub fn on_inbound_raw(&mut self, raw: &str) {
        let envelope = match decode(raw) {
            Ok(envelope) => envelope,
            Err(DecodeFailure::UnknownTag(tag)) => {
                debug!(tag = %tag, "ignoring envelope with unknown tag");
                return;
            }
            Err(e) => {
                warn!(error = %e, len = raw.len(), "inbound envelope dropped");
                return;
            }
        };

        debug!(tag = %envelope.tag(), "inbound envelope");
        self.dispatch(envelope);
    }

    fn dispatch(&mut self, envelope: Envelope) {
        match envelope {
            Envelope::ComponentMounted => self.on_editor_mounted(),
            Envelope::DocumentListenerAdded | Envelope::WindowListenerAdded => {
                debug!("editor attached an inbound listener");
            }
            Envelope::DocumentListenerRemoved | Envelope::WindowListenerRemoved => {
                debug!("editor removed an inbound listener");
            }
            Envelope::ListenerUnavailable { error } => {
                warn!(error = %error, "editor could not attach an inbound listener");
            }
            Envelope::Change(p) => {
                if let Some(f) = self.callbacks.on_change.as_mut() {
                    f(&p.value, &p.delta, p.source, &p.editor);
                }
            }
            Envelope::ChangeSelection(p) => {
                if let Some(f) = self.callbacks.on_change_selection.as_mut() {
                    f(p.range, p.source, &p.editor);
                }
            }
            Envelope::Focus(p) => {
                if let Some(f) = self.callbacks.on_focus.as_mut() {
                    f(p.range, p.source, &p.editor);
                }
            }
            Envelope::Blur(p) => {
                if let Some(f) = self.callbacks.on_blur.as_mut() {
                    f(p.previous_range, p.source, &p.editor);
                }
            }
            Envelope::KeyDown(p) => {
                if let Some(f) = self.callbacks.on_key_down.as_mut() {
                    f(&p.event);
                }
            }
            Envelope::KeyPress(p) => {
                if let Some(f) = self.callbacks.on_key_press.as_mut() {
                    f(&p.event);
                }
            }
            Envelope::KeyUp(p) => {
                if let Some(f) = self.callbacks.on_key_up.as_mut() {
                    f(&p.event);
                }
            }
            Envelope::Save(p) => {
                if let Some(f) = self.callbacks.on_save.as_mut() {
                    f(&p.value);
                }
            }
            Envelope::Cancel => {
                if let Some(f) = self.callbacks.on_cancel.as_mut() {
                    f();
                }
            }
        }
    }

    fn on_editor_mounted(&mut self) {
        self.state.on_mounted();
        info!("editor mounted");

        let options = self.initial_options();
        if !options.is_empty() {
            self.send_command(&options);
        }
    }
}
