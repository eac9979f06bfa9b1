#![allow(clippy::collapsible_if)]
#![allow(clippy::collapsible_else_if)]

// Core modules
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
mod ui;

// Re-export commonly used types outside of crate
pub use app::App;
pub use domain::{Pair, PairAddress, WatchList};

// CLI argument parsing
use clap::Parser;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Directory holding the pair list and app state (defaults to the
    /// working directory)
    #[arg(long)]
    pub data_dir: Option<PathBuf>,

    /// Skip the automatic refresh of every pair on startup
    #[arg(long, default_value_t = false)]
    pub no_auto_refresh: bool,
}

impl Cli {
    pub fn resolve_data_dir(&self) -> PathBuf {
        self.data_dir
            .clone()
            .unwrap_or_else(|| Path::new(".").to_path_buf())
    }
}

/// Main application entry point - creates the GUI app
/// This is the public API for the binary to call
pub fn run_app(cc: &eframe::CreationContext<'_>, args: Cli) -> App {
    App::new(cc, args)
}
