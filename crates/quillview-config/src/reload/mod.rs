//! Live config reload: the file watcher plus loading and validation.

mod manager;

#[cfg(test)]
mod tests;

pub use manager::ReloadManager;
