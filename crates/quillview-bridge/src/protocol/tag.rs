//! The closed set of event tags carried on the wire.

use std::fmt;
use std::str::FromStr;

/// Discriminator identifying an envelope's semantic event and payload shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTag {
    ComponentMounted,
    DocumentListenerAdded,
    WindowListenerAdded,
    ListenerUnavailable,
    DocumentListenerRemoved,
    WindowListenerRemoved,
    Change,
    ChangeSelection,
    Focus,
    Blur,
    KeyPress,
    KeyDown,
    KeyUp,
    Save,
    Cancel,
}

impl EventTag {
    pub const ALL: [EventTag; 15] = [
        EventTag::ComponentMounted,
        EventTag::DocumentListenerAdded,
        EventTag::WindowListenerAdded,
        EventTag::ListenerUnavailable,
        EventTag::DocumentListenerRemoved,
        EventTag::WindowListenerRemoved,
        EventTag::Change,
        EventTag::ChangeSelection,
        EventTag::Focus,
        EventTag::Blur,
        EventTag::KeyPress,
        EventTag::KeyDown,
        EventTag::KeyUp,
        EventTag::Save,
        EventTag::Cancel,
    ];

    /// Wire spelling of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            EventTag::ComponentMounted => "QUILLJS_COMPONENT_MOUNTED",
            EventTag::DocumentListenerAdded => "DOCUMENT_EVENT_LISTENER_ADDED",
            EventTag::WindowListenerAdded => "WINDOW_EVENT_LISTENER_ADDED",
            EventTag::ListenerUnavailable => "UNABLE_TO_ADD_EVENT_LISTENER",
            EventTag::DocumentListenerRemoved => "DOCUMENT_EVENT_LISTENER_REMOVED",
            EventTag::WindowListenerRemoved => "WINDOW_EVENT_LISTENER_REMOVED",
            EventTag::Change => "ON_CHANGE",
            EventTag::ChangeSelection => "ON_CHANGE_SELECTION",
            EventTag::Focus => "ON_FOCUS",
            EventTag::Blur => "ON_BLUR",
            EventTag::KeyPress => "ON_KEY_PRESS",
            EventTag::KeyDown => "ON_KEY_DOWN",
            EventTag::KeyUp => "ON_KEY_UP",
            EventTag::Save => "ON_SAVE",
            EventTag::Cancel => "ON_CANCEL",
        }
    }

    /// Tags whose envelope reports a bridge failure via `error`.
    pub fn is_error(self) -> bool {
        matches!(self, EventTag::ListenerUnavailable)
    }
}

impl fmt::Display for EventTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a string is not one of the known wire tags.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl FromStr for EventTag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventTag::ALL
            .iter()
            .copied()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_wire_spelling() {
        for tag in EventTag::ALL {
            assert_eq!(tag.as_str().parse::<EventTag>(), Ok(tag));
        }
    }

    #[test]
    fn wire_spellings_are_unique() {
        let mut names: Vec<&str> = EventTag::ALL.iter().map(|t| t.as_str()).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), EventTag::ALL.len());
    }

    #[test]
    fn parsing_is_case_sensitive() {
        assert!("on_change".parse::<EventTag>().is_err());
        assert!("ON_CHANGE ".parse::<EventTag>().is_err());
        assert_eq!(
            "ON_SOMETHING_NEW".parse::<EventTag>(),
            Err(UnknownTag("ON_SOMETHING_NEW".into()))
        );
    }

    #[test]
    fn only_listener_unavailable_is_an_error_tag() {
        let errors: Vec<_> = EventTag::ALL.iter().filter(|t| t.is_error()).collect();
        assert_eq!(errors, vec![&EventTag::ListenerUnavailable]);
    }

    #[test]
    fn display_matches_wire_spelling() {
        assert_eq!(EventTag::Change.to_string(), "ON_CHANGE");
        assert_eq!(
            EventTag::ComponentMounted.to_string(),
            "QUILLJS_COMPONENT_MOUNTED"
        );
    }
}
