use crate::schema::QuillviewConfig;
use crate::toml_loader;
use crate::validation;
use crate::watcher::ConfigWatcher;
use quillview_common::ConfigError;
use std::path::PathBuf;
use tokio::sync::{broadcast, watch};
use tracing::{error, info, warn};

/// Publishes a freshly loaded config on a [`watch`] channel every time the
/// file changes on disk. Invalid configs are logged and not published.
pub struct ReloadManager {
    config_path: PathBuf,
}

impl ReloadManager {
    /// Load the initial config and spawn the watch task.
    ///
    /// Must be called inside a tokio runtime. A missing or unreadable file
    /// yields defaults.
    pub async fn start(config_path: PathBuf) -> (QuillviewConfig, watch::Receiver<QuillviewConfig>) {
        let initial = match toml_loader::load_from_path(&config_path) {
            Ok(config) => config,
            Err(e) => {
                warn!(path = %config_path.display(), "failed to load config: {e}, using defaults");
                QuillviewConfig::default()
            }
        };

        let (config_tx, config_rx) = watch::channel(initial.clone());

        tokio::spawn(async move {
            let manager = ReloadManager { config_path };
            manager.run_watch_loop(config_tx).await;
        });

        (initial, config_rx)
    }

    async fn run_watch_loop(&self, config_tx: watch::Sender<QuillviewConfig>) {
        let watcher = match ConfigWatcher::new(self.config_path.clone()) {
            Ok(w) => w,
            Err(e) => {
                error!("failed to create config watcher: {e}");
                return;
            }
        };

        let (change_tx, mut change_rx) = broadcast::channel::<()>(16);
        tokio::spawn(async move {
            if let Err(e) = watcher.watch(change_tx).await {
                error!("config watcher error: {e}");
            }
        });

        loop {
            match change_rx.recv().await {
                Ok(()) => match self.reload() {
                    Ok(config) => {
                        // Unchanged content does not wake receivers.
                        let changed = config_tx.send_if_modified(|current| {
                            if *current == config {
                                false
                            } else {
                                *current = config;
                                true
                            }
                        });
                        info!(changed, "config reloaded");
                        if config_tx.is_closed() {
                            info!("all config receivers dropped, stopping reload manager");
                            break;
                        }
                    }
                    Err(e) => warn!("config reload failed: {e}"),
                },
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    warn!("config watcher lagged by {n} events");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    info!("config watcher channel closed");
                    break;
                }
            }
        }
    }

    fn reload(&self) -> Result<QuillviewConfig, ConfigError> {
        let config = toml_loader::load_from_path(&self.config_path)?;
        validation::validate(&config)?;
        Ok(config)
    }
}
