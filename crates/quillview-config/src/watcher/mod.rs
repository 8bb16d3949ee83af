//! Config file watcher for live reload.

mod config_watcher;

#[cfg(test)]
mod tests;

pub use config_watcher::{ConfigWatcher, DEBOUNCE};
