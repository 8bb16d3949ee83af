//! Watches the config file with `notify` and emits debounced change signals.

use notify::{Event, EventKind, RecommendedWatcher, RecursiveMode, Watcher};
use quillview_common::ConfigError;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::sync::{broadcast, mpsc};
use tracing::{debug, error, info, warn};

/// Quiet period that coalesces the bursts editors produce on atomic save
/// (write + rename).
pub const DEBOUNCE: Duration = Duration::from_millis(500);

pub struct ConfigWatcher {
    path: PathBuf,
}

impl ConfigWatcher {
    /// The file does not need to exist yet; its creation is a change.
    pub fn new(path: PathBuf) -> Result<Self, ConfigError> {
        if !path.exists() {
            warn!(path = %path.display(), "config file does not exist yet, watching for creation");
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Watch until the notify channel closes, sending `()` on `tx` after
    /// each debounced burst of changes.
    pub async fn watch(&self, tx: broadcast::Sender<()>) -> Result<(), ConfigError> {
        // The parent is watched so that atomic replaces are seen.
        let watch_dir = self
            .path
            .parent()
            .map(Path::to_path_buf)
            .unwrap_or_else(|| self.path.clone());
        let file_name = self.path.file_name().map(OsStr::to_os_string).unwrap_or_default();

        info!(path = %self.path.display(), "starting config file watcher");

        let (notify_tx, mut notify_rx) = mpsc::channel::<()>(16);

        let mut watcher = RecommendedWatcher::new(
            move |result: Result<Event, notify::Error>| match result {
                Ok(event) => {
                    if is_relevant(&event, &file_name) {
                        debug!("config file change detected");
                        let _ = notify_tx.try_send(());
                    }
                }
                Err(e) => error!("file watcher error: {e}"),
            },
            notify::Config::default(),
        )
        .map_err(|e| ConfigError::WatchError(format!("failed to create watcher: {e}")))?;

        watcher
            .watch(&watch_dir, RecursiveMode::NonRecursive)
            .map_err(|e| {
                ConfigError::WatchError(format!("failed to watch {}: {e}", watch_dir.display()))
            })?;

        loop {
            if notify_rx.recv().await.is_none() {
                break;
            }

            // Every further signal inside the window restarts it.
            loop {
                tokio::select! {
                    _ = tokio::time::sleep(DEBOUNCE) => break,
                    msg = notify_rx.recv() => {
                        if msg.is_none() {
                            return Ok(());
                        }
                    }
                }
            }

            info!("config file changed, sending reload signal");
            if tx.send(()).is_err() {
                debug!("no receivers for config reload signal");
            }
        }

        drop(watcher);
        Ok(())
    }
}

/// A create or modify event touching the watched file name.
pub(crate) fn is_relevant(event: &Event, file_name: &OsStr) -> bool {
    matches!(event.kind, EventKind::Modify(_) | EventKind::Create(_))
        && event
            .paths
            .iter()
            .any(|p| p.file_name() == Some(file_name))
}
