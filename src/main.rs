#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
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
            .join("holocron")
    })
}

/// Holocron - Collectible Card Album
#[derive(Parser, Debug)]
#[command(name = "holocron-desktop")]
#[command(about = "Holocron - collect cards from a galaxy far, far away")]
struct Args {
    /// Data directory for storage (use different dirs for multiple albums)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Album name (creates data dir: holocron-<name>)
    #[arg(short, long, alias = "instance")]
    name: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    // Determine data directory and display name
    let (data_dir, display_name) = if let Some(dir) = args.data_dir {
        let label = dir
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("custom")
            .to_string();
        (dir, label)
    } else if let Some(ref name) = args.name {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(format!("holocron-{}", name));
        (base, name.clone())
    } else {
        let base = dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("holocron");
        (base, String::new())
    };

    // Store data directory globally
    let _ = DATA_DIR.set(data_dir.clone());

    let window_width = 1100.0;
    let window_height = 850.0;

    // Window title with album name
    let title = if !display_name.is_empty() {
        format!("Holocron - {}", display_name)
    } else {
        "Holocron".to_string()
    };

    tracing::info!("Starting '{}' with data dir: {:?}", display_name, data_dir);

    // Configure desktop window
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_and_instance_are_interchangeable() {
        let by_name = Args::try_parse_from(["holocron-desktop", "--name", "rebel"]).unwrap();
        assert_eq!(by_name.name.as_deref(), Some("rebel"));

        let by_instance =
            Args::try_parse_from(["holocron-desktop", "--instance", "rebel"]).unwrap();
        assert_eq!(by_instance.name.as_deref(), Some("rebel"));
    }

    #[test]
    fn test_data_dir_arg_parses() {
        let args =
            Args::try_parse_from(["holocron-desktop", "--data-dir", "/tmp/holo"]).unwrap();
        assert_eq!(args.data_dir, Some(PathBuf::from("/tmp/holo")));
    }
}
