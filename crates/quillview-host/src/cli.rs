use std::path::PathBuf;

use clap::Parser;

/// Quillview: a rich-text editor window driven over a message bridge.
#[derive(Parser, Debug)]
#[command(name = "quillview", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Document to open, overriding `editor.initial_value`.
    #[arg(short = 'i', long)]
    pub initial_value: Option<String>,

    /// Log level override (debug, info, warn, error).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Directory served under `quillview://`, overriding `bootstrap.assets_dir`.
    #[arg(long)]
    pub assets: Option<PathBuf>,
}

pub fn parse() -> Args {
    Args::parse()
}
