#![allow(non_snake_case)]

mod app;
mod components;
mod pages;
mod theme;

use std::path::PathBuf;
use std::sync::OnceLock;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use portfolio_core::PortfolioContent;

/// Content loaded at startup, set from command line
static CONTENT: OnceLock<PortfolioContent> = OnceLock::new();

/// Get the portfolio content resolved at startup
pub fn get_content() -> PortfolioContent {
    CONTENT.get().cloned().unwrap_or_default()
}

/// Personal portfolio page as a desktop app
#[derive(Parser, Debug)]
#[command(name = "portfolio-desktop")]
#[command(about = "Personal portfolio - skills, services carousel and project gallery")]
struct Args {
    /// JSON content file (default: <config dir>/portfolio/content.json)
    #[arg(short, long)]
    content: Option<PathBuf>,

    /// Window title override
    #[arg(short, long)]
    title: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let explicit = args.content.is_some();
    let content_path = args.content.unwrap_or_else(|| {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("portfolio")
            .join("content.json")
    });

    let content = match PortfolioContent::load(&content_path) {
        Ok(content) => {
            tracing::info!("Loaded content from {:?}", content_path);
            content
        }
        Err(e) => {
            if explicit {
                tracing::warn!(
                    "Failed to load {:?}: {} - falling back to built-in content",
                    content_path,
                    e
                );
            } else {
                tracing::debug!(
                    "No usable content at {:?} ({}), using built-in content",
                    content_path,
                    e
                );
            }
            PortfolioContent::default()
        }
    };

    let title = args
        .title
        .unwrap_or_else(|| format!("{} - Portfolio", content.owner_name));

    let _ = CONTENT.set(content);

    let window_width = 1100.0;
    let window_height = 860.0;

    tracing::info!("Starting '{}'", title);

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title(&title)
            .with_inner_size(dioxus::desktop::LogicalSize::new(window_width, window_height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
