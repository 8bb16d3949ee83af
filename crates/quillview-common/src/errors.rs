use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),

    #[error("config watch error: {0}")]
    WatchError(String),
}

/// Failures of the underlying content-view channel.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("no surface available to attach a listener: {0}")]
    SurfaceUnavailable(String),

    #[error("transport closed")]
    Closed,

    #[error("script injection failed: {0}")]
    Injection(String),
}

#[derive(Debug, thiserror::Error)]
pub enum BridgeError {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("bootstrap document not found: {0}")]
    BootstrapNotFound(String),

    #[error("bootstrap load failed: {0}")]
    BootstrapLoad(String),

    #[error("webview error: {0}")]
    WebView(String),
}

#[derive(Debug, thiserror::Error)]
pub enum QuillviewError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Bridge(#[from] BridgeError),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
