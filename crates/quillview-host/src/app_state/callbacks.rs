//! Host reactions to editor events.

use std::cell::Cell;
use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::rc::Rc;

use quillview_bridge::HostCallbacks;

/// Log every editor event; append saved documents to `save_path` and request
/// exit on cancel.
pub(super) fn host_callbacks(save_path: Option<PathBuf>, exit: Rc<Cell<bool>>) -> HostCallbacks {
    HostCallbacks::new()
        .on_change(|value, delta, source, _editor| {
            tracing::debug!(len = value.len(), ops = delta.ops.len(), ?source, "editor changed");
        })
        .on_change_selection(|range, source, _editor| {
            tracing::trace!(?range, ?source, "selection changed");
        })
        .on_focus(|_, _, _| tracing::debug!("editor focused"))
        .on_blur(|_, _, _| tracing::debug!("editor blurred"))
        .on_key_down(|event| tracing::trace!(key = %event["key"], "key down"))
        .on_save(move |value| {
            tracing::info!(len = value.len(), "document saved");
            if let Some(path) = &save_path {
                if let Err(e) = append_document(path, value) {
                    tracing::error!(path = %path.display(), "Failed to write document: {e}");
                }
            }
        })
        .on_cancel(move || {
            tracing::info!("editing cancelled");
            exit.set(true);
        })
}

/// One saved document per line.
pub(super) fn append_document(path: &Path, value: &str) -> io::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let mut file = OpenOptions::new().create(true).append(true).open(path)?;
    writeln!(file, "{value}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use quillview_bridge::transport::memory::{MemoryInjector, MemorySurface};
    use quillview_bridge::protocol::Surface;
    use quillview_bridge::{EditorProps, OuterPeer};

    fn peer(save_path: Option<PathBuf>, exit: &Rc<Cell<bool>>) -> OuterPeer<MemoryInjector> {
        let mut peer = OuterPeer::new(EditorProps::default(), host_callbacks(save_path, Rc::clone(exit)));
        peer.attach_channel(MemoryInjector::new(MemorySurface::new(Surface::Window)));
        peer
    }

    #[test]
    fn save_appends_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes/saved.html");
        let exit = Rc::new(Cell::new(false));
        let mut peer = peer(Some(path.clone()), &exit);

        peer.on_inbound_raw(r#"{"event":"ON_SAVE","payload":{"value":"<p>one</p>"}}"#);
        peer.on_inbound_raw(r#"{"event":"ON_SAVE","payload":{"value":"<p>two</p>"}}"#);

        let saved = std::fs::read_to_string(&path).unwrap();
        assert_eq!(saved, "<p>one</p>\n<p>two</p>\n");
        assert!(!exit.get());
    }

    #[test]
    fn save_without_path_only_logs() {
        let exit = Rc::new(Cell::new(false));
        let mut peer = peer(None, &exit);
        peer.on_inbound_raw(r#"{"event":"ON_SAVE","payload":{"value":"x"}}"#);
        assert!(!exit.get());
    }

    #[test]
    fn cancel_requests_exit() {
        let exit = Rc::new(Cell::new(false));
        let mut peer = peer(None, &exit);
        peer.on_inbound_raw(r#"{"event":"ON_CANCEL"}"#);
        assert!(exit.get());
    }

    #[test]
    fn other_events_leave_exit_alone() {
        let exit = Rc::new(Cell::new(false));
        let mut peer = peer(None, &exit);
        peer.on_inbound_raw(r#"{"event":"ON_KEY_DOWN","payload":{"event":{"key":"a"}}}"#);
        peer.on_inbound_raw(r#"{"event":"QUILLJS_COMPONENT_MOUNTED"}"#);
        assert!(!exit.get());
        assert!(peer.is_editor_ready());
    }
}
