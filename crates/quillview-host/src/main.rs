mod app_state;
mod cli;

use std::path::PathBuf;
use std::process::ExitCode;

use quillview_config::schema::QuillviewConfig;
use quillview_config::{toml_loader, validation, ReloadManager};
use tokio::sync::watch;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{reload, EnvFilter, Registry};
use winit::event_loop::EventLoop;

/// `--config`, or the platform default created from the template if missing.
fn config_path(explicit: Option<PathBuf>) -> quillview_common::Result<PathBuf> {
    if let Some(path) = explicit {
        return Ok(path);
    }
    let path = toml_loader::default_config_path()?;
    if !path.exists() {
        toml_loader::create_default_config(&path)?;
    }
    Ok(path)
}

/// Level used until the config file has been read.
const STARTUP_LEVEL: &str = "info";

/// Directive to start logging with, and whether it is final.
///
/// `--log-level` wins, then `RUST_LOG`. Without either, logging starts at
/// [`STARTUP_LEVEL`] and switches to the config file's level once loaded.
fn startup_filter(cli_level: Option<&str>, env_level: Option<String>) -> (String, bool) {
    match (cli_level, env_level) {
        (Some(level), _) => (level.to_string(), true),
        (None, Some(level)) => (level, true),
        (None, None) => (STARTUP_LEVEL.to_string(), false),
    }
}

/// Install the subscriber before anything can log. Returns a handle for
/// swapping in the config level when the level was not fixed explicitly.
fn init_logging(cli_level: Option<&str>) -> Option<reload::Handle<EnvFilter, Registry>> {
    let env_level = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    let (directive, fixed) = startup_filter(cli_level, env_level);
    let (filter, handle) = reload::Layer::new(EnvFilter::new(directive));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
    (!fixed).then_some(handle)
}

fn main() -> ExitCode {
    let args = cli::parse();
    let log_handle = init_logging(args.log_level.as_deref());

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("failed to start async runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    let path = config_path(args.config.clone());
    let (config, config_rx) = match &path {
        Ok(path) => runtime.block_on(ReloadManager::start(path.clone())),
        Err(_) => {
            let (_, rx) = watch::channel(QuillviewConfig::default());
            (QuillviewConfig::default(), rx)
        }
    };

    if let Some(handle) = log_handle {
        let level = config.logging.level.as_filter();
        if let Err(e) = handle.reload(EnvFilter::new(level)) {
            tracing::warn!("failed to apply configured log level {level}: {e}");
        }
    }
    tracing::info!("Quillview v{} starting", env!("CARGO_PKG_VERSION"));

    match &path {
        Ok(path) => tracing::info!(path = %path.display(), "config loaded, watching for changes"),
        Err(e) => tracing::warn!("no config file, using defaults: {e}"),
    }
    if let Err(e) = validation::validate(&config) {
        tracing::warn!("{e}");
    }

    let event_loop = match EventLoop::new() {
        Ok(event_loop) => event_loop,
        Err(e) => {
            tracing::error!("failed to create event loop: {e}");
            return ExitCode::FAILURE;
        }
    };
    let mut app = app_state::QuillviewApp::new(config, config_rx, &args, runtime);

    tracing::info!("Entering event loop");
    if let Err(e) = event_loop.run_app(&mut app) {
        tracing::error!("Event loop error: {e}");
        return ExitCode::FAILURE;
    }
    tracing::info!("Shutdown complete");
    ExitCode::SUCCESS
}
