#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod scroll;
mod theme;

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use suture_core::Catalog;
use tracing_subscriber::EnvFilter;

/// Global catalog, set once at startup
static CATALOG: OnceLock<Arc<Catalog>> = OnceLock::new();

/// Get the catalog (loaded from --catalog or the built-in one)
pub fn get_catalog() -> Arc<Catalog> {
    CATALOG
        .get_or_init(|| Arc::new(Catalog::builtin()))
        .clone()
}

/// Neon-Suture - Scrollytelling storefront
#[derive(Parser, Debug)]
#[command(name = "suture-desktop")]
#[command(about = "Neon-Suture - FW24 scrollytelling storefront")]
struct Args {
    /// JSON catalog replacing the built-in products, archive and materials
    #[arg(short, long)]
    catalog: Option<PathBuf>,

    /// Window width in logical pixels
    #[arg(long, default_value_t = 1280.0)]
    width: f64,

    /// Window height in logical pixels
    #[arg(long, default_value_t = 900.0)]
    height: f64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let catalog = match &args.catalog {
        Some(path) => Catalog::load(path)
            .with_context(|| format!("failed to load catalog from {}", path.display()))?,
        None => Catalog::builtin(),
    };
    let _ = CATALOG.set(Arc::new(catalog));

    tracing::info!(
        catalog = ?args.catalog,
        width = args.width,
        height = args.height,
        "Starting Neon-Suture storefront"
    );

    // Configure desktop window
    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("NEON-SUTURE")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);

    Ok(())
}
