//! Editor view state held by the editor-side peer.

use crate::protocol::ViewOptions;

/// Formats enabled when the host does not supply its own list.
pub const DEFAULT_FORMATS: &[&str] = &["bold", "italic", "underline", "list", "bullet", "link"];

/// Toolbar controls shown for an editable document.
pub const TOOLBAR_ITEMS: &[&str] = &["bold", "italic", "underline", "link"];

/// Displayed content plus the configuration merged in from the host.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    content: String,
    options: ViewOptions,
}

/// UI affordances derived from the view state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Affordances {
    pub save_enabled: bool,
    pub save_label: &'static str,
    /// `None` hides the toolbar.
    pub toolbar: Option<Vec<&'static str>>,
    pub formats: Vec<String>,
}

impl ViewState {
    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn has_content(&self) -> bool {
        !self.content.is_empty()
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn is_read_only(&self) -> bool {
        self.options.read_only.unwrap_or(false)
    }

    pub fn affordances(&self) -> Affordances {
        let save_label = if self.options.initial_value.is_some() {
            "Update"
        } else {
            "Save"
        };
        let toolbar = if self.is_read_only() {
            None
        } else {
            Some(TOOLBAR_ITEMS.to_vec())
        };
        let formats = match &self.options.formats {
            Some(formats) => formats.clone(),
            None => DEFAULT_FORMATS.iter().map(|f| f.to_string()).collect(),
        };
        Affordances {
            save_enabled: self.has_content(),
            save_label,
            toolbar,
            formats,
        }
    }

    /// A local edit. Blank plain text means an empty document even when the
    /// markup is not empty (e.g. `<p><br></p>`).
    pub(crate) fn record_edit(&mut self, value: &str, plain_text: &str) {
        if plain_text.trim().is_empty() {
            self.content.clear();
        } else {
            self.content = value.to_string();
        }
    }

    /// Merge a host command. A supplied initial value replaces the content.
    pub(crate) fn apply(&mut self, options: ViewOptions) {
        if let Some(value) = &options.initial_value {
            self.content = value.clone();
        }
        self.options.merge(options);
    }

    pub(crate) fn clear_content(&mut self) {
        self.content.clear();
    }
}
