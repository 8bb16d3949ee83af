//! Sources for the document that seeds the editor content view.
//!
//! The document is opaque to the bridge; only its successful load matters,
//! because commands are meaningless before the content view exists.

use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use quillview_common::BridgeError;

use crate::content::ContentProvider;

/// Path of the bundled editor document inside the assets directory.
pub const EDITOR_DOCUMENT: &str = "editor/index.html";

#[async_trait]
pub trait BootstrapSource: Send + Sync {
    async fn load(&self) -> Result<String, BridgeError>;

    /// Human-readable origin, for logs.
    fn describe(&self) -> String;
}

/// Reads the document from a file on disk.
pub struct FileBootstrap {
    path: PathBuf,
}

impl FileBootstrap {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl BootstrapSource for FileBootstrap {
    async fn load(&self) -> Result<String, BridgeError> {
        tokio::fs::read_to_string(&self.path).await.map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                BridgeError::BootstrapNotFound(self.path.display().to_string())
            } else {
                BridgeError::BootstrapLoad(format!("{}: {e}", self.path.display()))
            }
        })
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Resolves the document through the same provider that serves the
/// `quillview://` custom protocol.
pub struct ContentBootstrap {
    provider: Arc<ContentProvider>,
    path: String,
}

impl ContentBootstrap {
    pub fn new(provider: Arc<ContentProvider>, path: impl Into<String>) -> Self {
        Self {
            provider,
            path: path.into(),
        }
    }

    /// The bundled editor document.
    pub fn editor(provider: Arc<ContentProvider>) -> Self {
        Self::new(provider, EDITOR_DOCUMENT)
    }
}

#[async_trait]
impl BootstrapSource for ContentBootstrap {
    async fn load(&self) -> Result<String, BridgeError> {
        self.provider
            .resolve(&self.path)
            .ok_or_else(|| BridgeError::BootstrapNotFound(self.path.clone()))?
            .into_text()
            .map_err(|e| BridgeError::BootstrapLoad(format!("{}: {e}", self.path)))
    }

    fn describe(&self) -> String {
        format!("quillview://localhost/{}", self.path)
    }
}

/// A document already held in memory.
pub struct InlineBootstrap(pub String);

#[async_trait]
impl BootstrapSource for InlineBootstrap {
    async fn load(&self) -> Result<String, BridgeError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "inline document".to_string()
    }
}
