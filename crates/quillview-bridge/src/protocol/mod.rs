//! Wire protocol shared by both peers.
//!
//! Messages flow in both directions:
//! - **editor -> host**: the content view posts a serialized [`Envelope`]
//!   (`{"event": TAG, "payload": {...}}`) through its outbound primitive.
//! - **host -> editor**: the host injects a script that delivers a
//!   serialized [`ViewOptions`] as a message event inside the content view.

pub mod codec;
mod command;
mod envelope;
mod lifecycle;
mod tag;

pub use codec::{
    decode, decode_command, encode, encode_command, encode_with_label, DecodeFailure, WireLabel,
};
pub use command::ViewOptions;
pub use envelope::{
    BlurPayload, ChangePayload, ChangeSource, Delta, EditorSnapshot, Envelope, KeyPayload, Range,
    SavePayload, SelectionPayload, Surface,
};
pub use lifecycle::BridgeState;
pub use tag::{EventTag, UnknownTag};
