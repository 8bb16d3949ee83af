//! Tests for the editor-side peer.

use super::*;
use crate::protocol::{decode, encode_command, ViewOptions};
use crate::protocol::Surface;
use crate::transport::memory::{MemoryOutbox, MemorySurface};
use serde_json::json;

#[derive(Default)]
struct RecordingEditor {
    renders: Vec<String>,
}

impl EditorCapability for RecordingEditor {
    fn render(&mut self, view: &ViewState) {
        self.renders.push(view.content().to_string());
    }
}

struct Fixture {
    peer: InnerPeer<RecordingEditor>,
    outbox: MemoryOutbox,
    document: MemorySurface,
    window: MemorySurface,
}

fn fixture() -> Fixture {
    let outbox = MemoryOutbox::new();
    let document = MemorySurface::new(Surface::Document);
    let window = MemorySurface::new(Surface::Window);
    let peer = InnerPeer::new(RecordingEditor::default(), outbox.clone())
        .with_source(document.clone())
        .with_source(window.clone());
    Fixture {
        peer,
        outbox,
        document,
        window,
    }
}

fn posted(outbox: &MemoryOutbox) -> Vec<Envelope> {
    outbox
        .take()
        .iter()
        .map(|raw| decode(raw).expect("peer posts decodable envelopes"))
        .collect()
}

// -----------------------------------------------------------------
// Lifecycle
// -----------------------------------------------------------------

#[test]
fn mount_attaches_then_announces() {
    let mut f = fixture();
    assert_eq!(f.peer.state(), BridgeState::Uninitialized);

    f.peer.mount();

    assert_eq!(
        posted(&f.outbox),
        vec![
            Envelope::DocumentListenerAdded,
            Envelope::WindowListenerAdded,
            Envelope::ComponentMounted,
        ]
    );
    assert_eq!(f.peer.state(), BridgeState::Ready);
    assert_eq!(f.peer.attached_count(), 2);
}

#[test]
fn attach_is_idempotent() {
    let mut f = fixture();
    f.peer.attach_inbound_listener().unwrap();
    f.outbox.take();

    f.peer.attach_inbound_listener().unwrap();

    assert!(f.outbox.is_empty(), "no second confirmation");
    assert_eq!(f.document.handler_count(), 1);
    assert_eq!(f.window.handler_count(), 1);
    assert_eq!(f.peer.state(), BridgeState::Listening);
}

#[test]
fn attach_to_zero_surfaces_posts_error() {
    let outbox = MemoryOutbox::new();
    let mut peer = InnerPeer::new(RecordingEditor::default(), outbox.clone())
        .with_source(MemorySurface::unavailable(Surface::Document))
        .with_source(MemorySurface::unavailable(Surface::Window));

    let result = peer.attach_inbound_listener();

    assert!(matches!(result, Err(TransportError::SurfaceUnavailable(_))));
    assert_eq!(
        posted(&outbox),
        vec![Envelope::ListenerUnavailable {
            error: "UNABLE_TO_ADD_EVENT_LISTENER".into()
        }]
    );
    assert_eq!(peer.state(), BridgeState::Uninitialized);
}

#[test]
fn attach_with_no_sources_at_all_posts_error() {
    let outbox = MemoryOutbox::new();
    let mut peer = InnerPeer::new(RecordingEditor::default(), outbox.clone());
    assert!(peer.attach_inbound_listener().is_err());
    assert_eq!(posted(&outbox)[0].tag(), EventTag::ListenerUnavailable);
}

#[test]
fn mount_still_announces_when_listener_fails() {
    let outbox = MemoryOutbox::new();
    let mut peer = InnerPeer::new(RecordingEditor::default(), outbox.clone())
        .with_source(MemorySurface::unavailable(Surface::Window));

    peer.mount();

    let envelopes = posted(&outbox);
    assert_eq!(envelopes.len(), 2);
    assert_eq!(envelopes[0].tag(), EventTag::ListenerUnavailable);
    assert_eq!(envelopes[1], Envelope::ComponentMounted);
    assert!(peer.state().is_ready());
}

#[test]
fn partial_attachment_reports_only_successful_surface() {
    let outbox = MemoryOutbox::new();
    let mut peer = InnerPeer::new(RecordingEditor::default(), outbox.clone())
        .with_source(MemorySurface::unavailable(Surface::Document))
        .with_source(MemorySurface::new(Surface::Window));

    assert!(peer.attach_inbound_listener().is_ok());
    assert_eq!(posted(&outbox), vec![Envelope::WindowListenerAdded]);
}

#[test]
fn detach_removes_handlers_and_confirms() {
    let mut f = fixture();
    f.peer.mount();
    f.outbox.take();

    f.peer.detach_inbound_listeners();

    assert_eq!(
        posted(&f.outbox),
        vec![
            Envelope::DocumentListenerRemoved,
            Envelope::WindowListenerRemoved
        ]
    );
    assert_eq!(f.document.handler_count(), 0);
    assert_eq!(f.window.handler_count(), 0);
    assert_eq!(f.peer.attached_count(), 0);
}

// -----------------------------------------------------------------
// Inbound
// -----------------------------------------------------------------

#[test]
fn inbound_initial_value_replaces_content_and_renders() {
    let mut f = fixture();
    f.peer.mount();

    f.window
        .deliver(&encode_command(&ViewOptions::initial_value("Hello")));
    assert_eq!(f.peer.process_inbound(), 1);

    assert_eq!(f.peer.view().content(), "Hello");
    assert!(f.peer.view().has_content());
    assert_eq!(f.peer.editor().renders.last().map(String::as_str), Some("Hello"));
}

#[test]
fn inbound_messages_are_processed_in_order() {
    let mut f = fixture();
    f.peer.mount();

    f.window
        .deliver(&encode_command(&ViewOptions::initial_value("first")));
    f.window
        .deliver(&encode_command(&ViewOptions::initial_value("second")));
    f.peer.process_inbound();

    assert_eq!(f.peer.view().content(), "second");
}

#[test]
fn both_surfaces_active_deliver_twice_but_merge_is_stable() {
    let mut f = fixture();
    f.peer.mount();

    let raw = encode_command(&ViewOptions::initial_value("same"));
    f.document.deliver(&raw);
    f.window.deliver(&raw);

    assert_eq!(f.peer.process_inbound(), 2);
    assert_eq!(f.peer.view().content(), "same");
}

#[test]
fn garbled_inbound_is_swallowed() {
    let mut f = fixture();
    f.peer.mount();
    let renders_before = f.peer.editor().renders.len();

    f.peer.handle_inbound_message("not json");
    f.peer.handle_inbound_message("[1,2]");
    f.peer.handle_inbound_message(r#"{"initialValue": false}"#);

    assert_eq!(f.peer.view().content(), "");
    assert_eq!(f.peer.editor().renders.len(), renders_before);
}

#[test]
fn mistyped_field_does_not_discard_the_rest() {
    let mut f = fixture();
    f.peer.mount();

    f.window
        .deliver(r#"{"initialValue":"Hello","readOnly":"yes","placeholder":"Notes"}"#);
    assert_eq!(f.peer.process_inbound(), 1);

    assert_eq!(f.peer.view().content(), "Hello");
    assert_eq!(f.peer.view().options().placeholder.as_deref(), Some("Notes"));
    assert!(!f.peer.view().is_read_only());
    assert_eq!(f.peer.editor().renders.last().map(String::as_str), Some("Hello"));
}

#[test]
fn messages_before_attachment_are_lost() {
    let mut f = fixture();
    f.window
        .deliver(&encode_command(&ViewOptions::initial_value("early")));
    f.peer.mount();
    assert_eq!(f.peer.process_inbound(), 0);
    assert_eq!(f.peer.view().content(), "");
}

// -----------------------------------------------------------------
// Outbound
// -----------------------------------------------------------------

#[test]
fn change_posts_all_four_fields_and_updates_content() {
    let mut f = fixture();
    let delta = Delta {
        ops: vec![json!({"insert": "Hi\n"})],
    };
    f.peer.on_editor_changed(
        "<p>Hi</p>",
        delta.clone(),
        ChangeSource::User,
        EditorSnapshot::from_text("Hi\n"),
    );

    assert_eq!(
        posted(&f.outbox),
        vec![Envelope::Change(ChangePayload {
            value: "<p>Hi</p>".into(),
            delta,
            source: ChangeSource::User,
            editor: EditorSnapshot::from_text("Hi\n"),
        })]
    );
    assert_eq!(f.peer.view().content(), "<p>Hi</p>");
}

#[test]
fn forwarders_do_not_touch_view_state() {
    let mut f = fixture();
    f.peer.on_editor_changed(
        "x",
        Delta::default(),
        ChangeSource::User,
        EditorSnapshot::from_text("x"),
    );
    f.outbox.take();
    let before = f.peer.view().clone();

    let range = Some(Range {
        index: 1,
        length: 0,
    });
    f.peer
        .on_selection_changed(range, ChangeSource::User, EditorSnapshot::default());
    f.peer.on_focus(range, ChangeSource::User, EditorSnapshot::default());
    f.peer.on_blur(range, ChangeSource::User, EditorSnapshot::default());
    f.peer.on_key_down(json!({"key": "a"}));
    f.peer.on_key_press(json!({"key": "a"}));
    f.peer.on_key_up(json!({"key": "a"}));

    let tags: Vec<EventTag> = posted(&f.outbox).iter().map(Envelope::tag).collect();
    assert_eq!(
        tags,
        vec![
            EventTag::ChangeSelection,
            EventTag::Focus,
            EventTag::Blur,
            EventTag::KeyDown,
            EventTag::KeyPress,
            EventTag::KeyUp,
        ]
    );
    assert_eq!(f.peer.view(), &before);
}

#[test]
fn save_posts_value_then_clears() {
    let mut f = fixture();
    f.peer.on_editor_changed(
        "<p>draft</p>",
        Delta::default(),
        ChangeSource::User,
        EditorSnapshot::from_text("draft"),
    );
    f.outbox.take();

    f.peer.on_save_requested("<p>draft</p>");

    assert_eq!(
        posted(&f.outbox),
        vec![Envelope::Save(SavePayload {
            value: "<p>draft</p>".into()
        })]
    );
    assert_eq!(f.peer.view().content(), "");
    assert!(!f.peer.view().has_content());
    assert!(!f.peer.view().affordances().save_enabled);
}

#[test]
fn request_save_uses_current_content() {
    let mut f = fixture();
    assert!(!f.peer.request_save(), "nothing to save");
    assert!(f.outbox.is_empty());

    f.peer.on_editor_changed(
        "body",
        Delta::default(),
        ChangeSource::User,
        EditorSnapshot::from_text("body"),
    );
    f.outbox.take();

    assert!(f.peer.request_save());
    assert_eq!(
        posted(&f.outbox),
        vec![Envelope::Save(SavePayload {
            value: "body".into()
        })]
    );
}

#[test]
fn cancel_posts_empty_envelope_and_keeps_content() {
    let mut f = fixture();
    f.peer.on_editor_changed(
        "keep me",
        Delta::default(),
        ChangeSource::User,
        EditorSnapshot::from_text("keep me"),
    );
    f.outbox.take();

    f.peer.on_cancel_requested();

    let raw = f.outbox.take();
    assert_eq!(raw, vec![r#"{"event":"ON_CANCEL"}"#.to_string()]);
    assert_eq!(f.peer.view().content(), "keep me");
}
