//! Envelope codec: typed envelopes to transport strings and back.
//!
//! Wire shape: `{ "event": TAG, "payload": {...}, "error": "..." }`.
//! Older editor bundles label the tag `msg` instead of `event`; both are
//! accepted on decode, `event` wins when both are present. An envelope that
//! only carries `error` (set to a tag name) is also accepted.
//!
//! Decoding is total: every input yields either an `Envelope` or a
//! `DecodeFailure`, never a panic.

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use super::command::ViewOptions;
use super::envelope::Envelope;
use super::tag::EventTag;

/// Which field name carries the tag on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WireLabel {
    #[default]
    Event,
    /// Legacy label emitted by older editor bundles.
    Msg,
}

impl WireLabel {
    fn key(self) -> &'static str {
        match self {
            WireLabel::Event => "event",
            WireLabel::Msg => "msg",
        }
    }
}

/// Why a transport string could not be turned into a message.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DecodeFailure {
    #[error("malformed message: {0}")]
    Malformed(String),

    #[error("message has no tag")]
    MissingTag,

    #[error("unknown tag: {0}")]
    UnknownTag(String),

    #[error("invalid payload for {tag}: {reason}")]
    InvalidPayload { tag: EventTag, reason: String },
}

// =============================================================================
// ENCODE
// =============================================================================

/// Serialize an envelope using the preferred `event` label.
pub fn encode(envelope: &Envelope) -> String {
    encode_with_label(envelope, WireLabel::Event)
}

/// Serialize an envelope, choosing the tag field name.
pub fn encode_with_label(envelope: &Envelope, label: WireLabel) -> String {
    let mut wire = Map::new();
    wire.insert(
        label.key().to_string(),
        Value::String(envelope.tag().as_str().to_string()),
    );

    if let Some(error) = envelope.error() {
        wire.insert("error".to_string(), Value::String(error.to_string()));
    }

    let payload = match envelope {
        Envelope::Change(p) => Some(to_value(p)),
        Envelope::ChangeSelection(p) | Envelope::Focus(p) => Some(to_value(p)),
        Envelope::Blur(p) => Some(to_value(p)),
        Envelope::KeyDown(p) | Envelope::KeyPress(p) | Envelope::KeyUp(p) => Some(to_value(p)),
        Envelope::Save(p) => Some(to_value(p)),
        Envelope::ComponentMounted
        | Envelope::DocumentListenerAdded
        | Envelope::WindowListenerAdded
        | Envelope::ListenerUnavailable { .. }
        | Envelope::DocumentListenerRemoved
        | Envelope::WindowListenerRemoved
        | Envelope::Cancel => None,
    };
    if let Some(payload) = payload {
        wire.insert("payload".to_string(), payload);
    }

    serde_json::to_string(&Value::Object(wire)).unwrap_or_else(|_| "{}".to_string())
}

/// Serialize a host command for injection into the content view.
pub fn encode_command(options: &ViewOptions) -> String {
    serde_json::to_string(options).unwrap_or_else(|_| "{}".to_string())
}

fn to_value<T: Serialize>(payload: &T) -> Value {
    serde_json::to_value(payload).unwrap_or(Value::Null)
}

// =============================================================================
// DECODE
// =============================================================================

/// Parse a transport string into an envelope.
pub fn decode(raw: &str) -> Result<Envelope, DecodeFailure> {
    let mut map = parse_object(raw)?;

    let label = resolve_label(&map).ok_or(DecodeFailure::MissingTag)?;
    let tag: EventTag = label
        .parse()
        .map_err(|_| DecodeFailure::UnknownTag(label.to_string()))?;

    let error = map
        .get("error")
        .and_then(Value::as_str)
        .map(str::to_string);
    let payload = match map.remove("payload") {
        None | Some(Value::Null) => Value::Object(Map::new()),
        Some(other) => other,
    };

    let envelope = match tag {
        EventTag::ComponentMounted => Envelope::ComponentMounted,
        EventTag::DocumentListenerAdded => Envelope::DocumentListenerAdded,
        EventTag::WindowListenerAdded => Envelope::WindowListenerAdded,
        EventTag::ListenerUnavailable => Envelope::ListenerUnavailable {
            error: error.unwrap_or_else(|| tag.as_str().to_string()),
        },
        EventTag::DocumentListenerRemoved => Envelope::DocumentListenerRemoved,
        EventTag::WindowListenerRemoved => Envelope::WindowListenerRemoved,
        EventTag::Change => Envelope::Change(typed(tag, payload)?),
        EventTag::ChangeSelection => Envelope::ChangeSelection(typed(tag, payload)?),
        EventTag::Focus => Envelope::Focus(typed(tag, payload)?),
        EventTag::Blur => Envelope::Blur(typed(tag, payload)?),
        EventTag::KeyDown => Envelope::KeyDown(typed(tag, payload)?),
        EventTag::KeyPress => Envelope::KeyPress(typed(tag, payload)?),
        EventTag::KeyUp => Envelope::KeyUp(typed(tag, payload)?),
        EventTag::Save => Envelope::Save(typed(tag, payload)?),
        EventTag::Cancel => Envelope::Cancel,
    };
    Ok(envelope)
}

/// Parse an injected host command.
///
/// Only non-object input fails. Recognized keys are read one by one, so a
/// mistyped value drops that key and keeps the others.
pub fn decode_command(raw: &str) -> Result<ViewOptions, DecodeFailure> {
    let map = parse_object(raw)?;
    serde_json::from_value(Value::Object(map))
        .map_err(|e| DecodeFailure::Malformed(e.to_string()))
}

fn parse_object(raw: &str) -> Result<Map<String, Value>, DecodeFailure> {
    match serde_json::from_str::<Value>(raw) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(DecodeFailure::Malformed("expected a JSON object".into())),
        Err(e) => Err(DecodeFailure::Malformed(e.to_string())),
    }
}

/// `event` first, then legacy `msg`, then an `error` that names a tag.
fn resolve_label(map: &Map<String, Value>) -> Option<&str> {
    let label = |key: &str| map.get(key).and_then(Value::as_str);

    label("event").or_else(|| label("msg")).or_else(|| {
        label("error").filter(|e| {
            e.parse::<EventTag>()
                .map(EventTag::is_error)
                .unwrap_or(false)
        })
    })
}

fn typed<T: DeserializeOwned>(tag: EventTag, payload: Value) -> Result<T, DecodeFailure> {
    serde_json::from_value(payload).map_err(|e| DecodeFailure::InvalidPayload {
        tag,
        reason: e.to_string(),
    })
}
