#![allow(non_snake_case)]

mod actions;
mod app;
mod components;
mod context;
mod pages;
mod records;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global data directory, set from command line
static DATA_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Get the data directory (set from command line or default)
pub fn get_data_dir() -> PathBuf {
    DATA_DIR.get().cloned().unwrap_or_else(|| {
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("gestion-mostrador")
    })
}

/// Gestión Mostrador - sales administration panel
#[derive(Parser, Debug)]
#[command(name = "gestion-desktop")]
#[command(about = "Gestión Mostrador - panel de administración de ventas")]
struct Args {
    /// Data directory for the snapshot, exports and persisted UI state
    #[arg(short, long)]
    data_dir: Option<PathBuf>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    if let Some(dir) = args.data_dir {
        let _ = DATA_DIR.set(dir);
    }

    tracing::info!(data_dir = ?get_data_dir(), "starting panel");

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Gestión Mostrador")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 780.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
