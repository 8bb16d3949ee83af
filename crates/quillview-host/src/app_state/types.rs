use std::time::Duration;

/// How often webview and config events are polled (approx 60 Hz).
pub(super) const POLL_INTERVAL: Duration = Duration::from_millis(16);
