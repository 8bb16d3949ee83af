//! Typed envelopes: one variant per event tag, one payload record per shape.

use serde::{Deserialize, Serialize};

use super::tag::EventTag;

/// A selection range inside the editor document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub index: usize,
    pub length: usize,
}

/// Origin of an editor change, as reported by the rich-text component.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeSource {
    User,
    Api,
    Silent,
}

/// Opaque rich-text operations. The bridge never interprets them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Delta {
    pub ops: Vec<serde_json::Value>,
}

/// Read-only snapshot of the editor taken when an event fired.
///
/// The host only ever sees this copy, never the live editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EditorSnapshot {
    /// Plain-text rendition of the document.
    pub text: String,
    pub length: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection: Option<Range>,
}

impl EditorSnapshot {
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        Self {
            length: text.chars().count(),
            text,
            ..Default::default()
        }
    }
}

/// Payload of `ON_CHANGE`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChangePayload {
    pub value: String,
    #[serde(default)]
    pub delta: Delta,
    pub source: ChangeSource,
    #[serde(default)]
    pub editor: EditorSnapshot,
}

/// Payload of `ON_CHANGE_SELECTION` and `ON_FOCUS`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SelectionPayload {
    pub range: Option<Range>,
    pub source: ChangeSource,
    #[serde(default)]
    pub editor: EditorSnapshot,
}

/// Payload of `ON_BLUR`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BlurPayload {
    pub previous_range: Option<Range>,
    pub source: ChangeSource,
    #[serde(default)]
    pub editor: EditorSnapshot,
}

/// Payload of the three key events: the raw key event data, untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyPayload {
    pub event: serde_json::Value,
}

/// Payload of `ON_SAVE`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavePayload {
    pub value: String,
}

/// Ambient surface an inbound listener can be attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Surface {
    Document,
    Window,
}

impl Surface {
    pub fn name(self) -> &'static str {
        match self {
            Surface::Document => "document",
            Surface::Window => "window",
        }
    }
}

/// The unit of cross-boundary communication. Carries exactly one event.
#[derive(Debug, Clone, PartialEq)]
pub enum Envelope {
    ComponentMounted,
    DocumentListenerAdded,
    WindowListenerAdded,
    /// Bridge-level failure; reported through the `error` field.
    ListenerUnavailable { error: String },
    DocumentListenerRemoved,
    WindowListenerRemoved,
    Change(ChangePayload),
    ChangeSelection(SelectionPayload),
    Focus(SelectionPayload),
    Blur(BlurPayload),
    KeyDown(KeyPayload),
    KeyPress(KeyPayload),
    KeyUp(KeyPayload),
    Save(SavePayload),
    Cancel,
}

impl Envelope {
    pub fn tag(&self) -> EventTag {
        match self {
            Envelope::ComponentMounted => EventTag::ComponentMounted,
            Envelope::DocumentListenerAdded => EventTag::DocumentListenerAdded,
            Envelope::WindowListenerAdded => EventTag::WindowListenerAdded,
            Envelope::ListenerUnavailable { .. } => EventTag::ListenerUnavailable,
            Envelope::DocumentListenerRemoved => EventTag::DocumentListenerRemoved,
            Envelope::WindowListenerRemoved => EventTag::WindowListenerRemoved,
            Envelope::Change(_) => EventTag::Change,
            Envelope::ChangeSelection(_) => EventTag::ChangeSelection,
            Envelope::Focus(_) => EventTag::Focus,
            Envelope::Blur(_) => EventTag::Blur,
            Envelope::KeyDown(_) => EventTag::KeyDown,
            Envelope::KeyPress(_) => EventTag::KeyPress,
            Envelope::KeyUp(_) => EventTag::KeyUp,
            Envelope::Save(_) => EventTag::Save,
            Envelope::Cancel => EventTag::Cancel,
        }
    }

    /// Confirmation posted after a listener was attached to `surface`.
    pub fn listener_added(surface: Surface) -> Self {
        match surface {
            Surface::Document => Envelope::DocumentListenerAdded,
            Surface::Window => Envelope::WindowListenerAdded,
        }
    }

    /// Confirmation posted after a listener was removed from `surface`.
    pub fn listener_removed(surface: Surface) -> Self {
        match surface {
            Surface::Document => Envelope::DocumentListenerRemoved,
            Surface::Window => Envelope::WindowListenerRemoved,
        }
    }

    /// The bridge-failure text, for envelopes that carry one.
    pub fn error(&self) -> Option<&str> {
        match self {
            Envelope::ListenerUnavailable { error } => Some(error),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tag_matches_variant() {
        assert_eq!(Envelope::ComponentMounted.tag(), EventTag::ComponentMounted);
        assert_eq!(Envelope::Cancel.tag(), EventTag::Cancel);
        assert_eq!(
            Envelope::Save(SavePayload { value: "x".into() }).tag(),
            EventTag::Save
        );
        assert_eq!(
            Envelope::KeyPress(KeyPayload::default()).tag(),
            EventTag::KeyPress
        );
    }

    #[test]
    fn listener_envelopes_follow_surface() {
        assert_eq!(
            Envelope::listener_added(Surface::Document),
            Envelope::DocumentListenerAdded
        );
        assert_eq!(
            Envelope::listener_added(Surface::Window),
            Envelope::WindowListenerAdded
        );
        assert_eq!(
            Envelope::listener_removed(Surface::Window).tag(),
            EventTag::WindowListenerRemoved
        );
    }

    #[test]
    fn only_listener_unavailable_carries_error() {
        let env = Envelope::ListenerUnavailable {
            error: "UNABLE_TO_ADD_EVENT_LISTENER".into(),
        };
        assert_eq!(env.error(), Some("UNABLE_TO_ADD_EVENT_LISTENER"));
        assert_eq!(Envelope::ComponentMounted.error(), None);
    }

    #[test]
    fn snapshot_from_text_counts_chars() {
        let snap = EditorSnapshot::from_text("héllo\n");
        assert_eq!(snap.length, 6);
        assert_eq!(snap.text, "héllo\n");
        assert!(snap.html.is_none());
    }

    #[test]
    fn blur_payload_uses_camel_case_on_the_wire() {
        let payload = BlurPayload {
            previous_range: Some(Range {
                index: 2,
                length: 0,
            }),
            source: ChangeSource::User,
            editor: EditorSnapshot::default(),
        };
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["previousRange"]["index"], 2);
        assert_eq!(json["source"], "user");
    }

    #[test]
    fn javascript_editor_object_decodes_to_empty_snapshot() {
        // Stringifying a live editor object yields `{}` (functions are dropped).
        let payload: SelectionPayload =
            serde_json::from_str(r#"{"range":null,"source":"api","editor":{}}"#).unwrap();
        assert_eq!(payload.range, None);
        assert_eq!(payload.source, ChangeSource::Api);
        assert_eq!(payload.editor, EditorSnapshot::default());
    }
}
