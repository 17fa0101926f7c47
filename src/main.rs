#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod export;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use cardforge_render::{AspectRatio, Design};
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};

/// Global export directory, set from command line
static OUT_DIR: OnceLock<PathBuf> = OnceLock::new();

/// Initial selections, set from command line
static INIT_DESIGN: OnceLock<Design> = OnceLock::new();
static INIT_ASPECT: OnceLock<AspectRatio> = OnceLock::new();

/// Get the directory exported PNGs are saved into (command line override,
/// otherwise the user's Downloads directory).
pub fn get_out_dir() -> PathBuf {
    OUT_DIR
        .get()
        .cloned()
        .unwrap_or_else(|| dirs::download_dir().unwrap_or_else(|| PathBuf::from(".")))
}

/// Get the design selected at startup (if set via --design).
pub fn get_init_design() -> Option<Design> {
    INIT_DESIGN.get().copied()
}

/// Get the aspect ratio selected at startup (if set via --aspect).
pub fn get_init_aspect() -> Option<AspectRatio> {
    INIT_ASPECT.get().copied()
}

/// Cardforge - text-card studio
#[derive(Parser, Debug)]
#[command(name = "cardforge")]
#[command(about = "Cardforge - type your text, preview it in style, download as PNG")]
struct Args {
    /// Directory exported PNGs are written to (default: your Downloads folder)
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Design skin selected at startup (token, e.g. "neon-glow")
    #[arg(long)]
    design: Option<Design>,

    /// Aspect ratio selected at startup (token, e.g. "16-9")
    #[arg(long)]
    aspect: Option<AspectRatio>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    if let Some(dir) = args.out_dir {
        let _ = OUT_DIR.set(dir);
    }
    if let Some(design) = args.design {
        let _ = INIT_DESIGN.set(design);
    }
    if let Some(aspect) = args.aspect {
        let _ = INIT_ASPECT.set(aspect);
    }

    tracing::info!("Starting Cardforge, exporting to {:?}", get_out_dir());

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Cardforge")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1000.0, 880.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
