pub mod errors;

pub use errors::{BridgeError, ConfigError, QuillviewError, TransportError};

pub type Result<T> = std::result::Result<T, QuillviewError>;
