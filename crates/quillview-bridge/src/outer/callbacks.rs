use crate::protocol::{ChangeSource, Delta, EditorSnapshot, Range};

type ChangeFn = Box<dyn FnMut(&str, &Delta, ChangeSource, &EditorSnapshot)>;
type RangeFn = Box<dyn FnMut(Option<Range>, ChangeSource, &EditorSnapshot)>;
type KeyFn = Box<dyn FnMut(&serde_json::Value)>;
type SaveFn = Box<dyn FnMut(&str)>;
type CancelFn = Box<dyn FnMut()>;

/// Host handlers, one optional slot per event. Events whose slot is empty
/// are dropped without error.
#[derive(Default)]
pub struct HostCallbacks {
    pub(crate) on_change: Option<ChangeFn>,
    pub(crate) on_change_selection: Option<RangeFn>,
    pub(crate) on_focus: Option<RangeFn>,
    pub(crate) on_blur: Option<RangeFn>,
    pub(crate) on_key_down: Option<KeyFn>,
    pub(crate) on_key_press: Option<KeyFn>,
    pub(crate) on_key_up: Option<KeyFn>,
    pub(crate) on_save: Option<SaveFn>,
    pub(crate) on_cancel: Option<CancelFn>,
}

impl HostCallbacks {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(value, delta, source, editor)`
    pub fn on_change(
        mut self,
        f: impl FnMut(&str, &Delta, ChangeSource, &EditorSnapshot) + 'static,
    ) -> Self {
        self.on_change = Some(Box::new(f));
        self
    }

    /// `(range, source, editor)`
    pub fn on_change_selection(
        mut self,
        f: impl FnMut(Option<Range>, ChangeSource, &EditorSnapshot) + 'static,
    ) -> Self {
        self.on_change_selection = Some(Box::new(f));
        self
    }

    /// `(range, source, editor)`
    pub fn on_focus(
        mut self,
        f: impl FnMut(Option<Range>, ChangeSource, &EditorSnapshot) + 'static,
    ) -> Self {
        self.on_focus = Some(Box::new(f));
        self
    }

    /// `(previous_range, source, editor)`
    pub fn on_blur(
        mut self,
        f: impl FnMut(Option<Range>, ChangeSource, &EditorSnapshot) + 'static,
    ) -> Self {
        self.on_blur = Some(Box::new(f));
        self
    }

    pub fn on_key_down(mut self, f: impl FnMut(&serde_json::Value) + 'static) -> Self {
        self.on_key_down = Some(Box::new(f));
        self
    }

    pub fn on_key_press(mut self, f: impl FnMut(&serde_json::Value) + 'static) -> Self {
        self.on_key_press = Some(Box::new(f));
        self
    }

    pub fn on_key_up(mut self, f: impl FnMut(&serde_json::Value) + 'static) -> Self {
        self.on_key_up = Some(Box::new(f));
        self
    }

    pub fn on_save(mut self, f: impl FnMut(&str) + 'static) -> Self {
        self.on_save = Some(Box::new(f));
        self
    }

    pub fn on_cancel(mut self, f: impl FnMut() + 'static) -> Self {
        self.on_cancel = Some(Box::new(f));
        self
    }
}

impl std::fmt::Debug for HostCallbacks {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostCallbacks")
            .field("on_change", &self.on_change.is_some())
            .field("on_change_selection", &self.on_change_selection.is_some())
            .field("on_focus", &self.on_focus.is_some())
            .field("on_blur", &self.on_blur.is_some())
            .field("on_key_down", &self.on_key_down.is_some())
            .field("on_key_press", &self.on_key_press.is_some())
            .field("on_key_up", &self.on_key_up.is_some())
            .field("on_save", &self.on_save.is_some())
            .field("on_cancel", &self.on_cancel.is_some())
            .finish()
    }
}
