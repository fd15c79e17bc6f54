//! Holocron CLI
//!
//! Thin wrapper around holocron-core functions for command-line usage.
//!
//! ## Usage
//!
//! ```bash
//! # Show album and wallet overview
//! holocron info
//!
//! # Show the points balance
//! holocron points
//!
//! # Show the album (optionally one section)
//! holocron album show
//! holocron album show --section people
//!
//! # Wipe the album and restore the starting balance
//! holocron album reset --yes
//!
//! # List packs in the shop with their lock state
//! holocron pack list
//!
//! # Show active pack and cooldown
//! holocron pack status
//!
//! # Buy and open a pack (prompts keep/discard per card)
//! holocron pack open 1
//! holocron pack open 1 --keep-all
//! ```

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use holocron_core::{
    format_cooldown, is_pack_locked, AlbumEngine, ApiClient, OpenedPack, PackId, RevealedCard,
    Section, PACK_CONFIGS, PACK_COST,
};
use tokio::io::AsyncBufReadExt;

/// Holocron - collectible card album
#[derive(Parser)]
#[command(name = "holocron")]
#[command(version = "0.1.0")]
#[command(about = "Holocron - collectible card album")]
#[command(
    long_about = "Buy randomized card packs with virtual points and collect the cards in a local album."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Data directory (default: ~/.holocron/data)
    #[arg(short, long, global = true)]
    data_dir: Option<PathBuf>,

    /// Card API base URL (mirrors, testing)
    #[arg(long, global = true)]
    api_url: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show album and wallet overview
    Info,

    /// Show the points balance
    Points,

    /// Album management
    Album {
        #[command(subcommand)]
        action: AlbumAction,
    },

    /// Pack shop
    Pack {
        #[command(subcommand)]
        action: PackAction,
    },
}

#[derive(Subcommand)]
enum AlbumAction {
    /// Show collected stickers
    Show {
        /// Limit to one section: films, people, or starships
        #[arg(short, long)]
        section: Option<String>,
    },
    /// Wipe the album and restore the starting balance
    Reset {
        /// Confirm the reset
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PackAction {
    /// List packs in the shop with their lock state
    List,
    /// Show active pack and cooldown
    Status,
    /// Buy and open a pack
    Open {
        /// Pack number (1-4)
        pack: u8,
        /// Keep every card without prompting
        #[arg(long)]
        keep_all: bool,
    },
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .init();
}

/// Get the default data directory (~/.holocron/data)
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".holocron")
        .join("data")
}

/// Parse a section key from the command line
fn parse_section(s: &str) -> Result<Section> {
    Section::from_str_key(&s.to_lowercase()).ok_or_else(|| {
        anyhow::anyhow!(
            "Invalid section '{}'. Must be one of: films, people, starships",
            s
        )
    })
}

/// Parse a pack number from the command line
fn parse_pack_id(n: u8) -> Result<PackId> {
    PackId::new(n).ok_or_else(|| anyhow::anyhow!("Invalid pack '{}'. Must be 1-4", n))
}

fn print_card(card: &RevealedCard) {
    let rarity = match card.special {
        Some(class) => class.label(),
        None => "Regular",
    };
    println!(
        "  [{}] {} #{} - {} ({})",
        card.section.label(),
        card.section,
        card.id,
        card.name,
        rarity
    );
}

/// Accept or discard each revealed card; returns the number kept.
///
/// The caller finishes the pack whatever this returns.
async fn reveal_pack(engine: &AlbumEngine, opened: &OpenedPack, keep_all: bool) -> Result<u32> {
    let mut kept = 0;
    for card in &opened.cards {
        if engine.is_collected(card.section, card.id)? {
            print_card(card);
            println!("    (already in the album)");
            continue;
        }

        let keep = if keep_all { true } else { prompt_keep(card).await? };

        if keep {
            if engine.add_sticker(&card.to_sticker())? {
                kept += 1;
                print_card(card);
                println!("    added to the album");
            }
        } else {
            print_card(card);
            println!("    discarded");
        }
    }
    Ok(kept)
}

async fn prompt_keep(card: &RevealedCard) -> Result<bool> {
    println!();
    print_card(card);
    println!("  Keep this card? [y/N]");

    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let answer = lines.next_line().await?.unwrap_or_default();
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose);

    let data_dir = cli.data_dir.unwrap_or_else(default_data_dir);
    let engine = match cli.api_url {
        Some(url) => AlbumEngine::with_api(&data_dir, ApiClient::with_base_url(url))?,
        None => AlbumEngine::new(&data_dir)?,
    };

    match cli.command {
        Commands::Info => {
            let progress = engine.progress()?;
            let state = engine.pack_state()?;
            let cooldown = engine.cooldown_seconds()?;

            println!("Holocron v0.1.0");
            println!();
            println!("Data directory: {}", engine.data_dir().display());
            println!("Points: {}", engine.points()?);
            println!();
            println!("Album: {} / {} ({}%)", progress.collected, progress.total, progress.percent());
            for section in &progress.sections {
                println!(
                    "  {}: {} / {} ({}%)",
                    section.section.label(),
                    section.collected,
                    section.total,
                    section.percent()
                );
            }
            println!();
            match state.active_pack_id {
                Some(pack) => println!("Active pack: {}", pack),
                None => println!("Active pack: none"),
            }
            if cooldown > 0 {
                println!("Cooldown: {}", format_cooldown(cooldown));
            }
        }

        Commands::Points => {
            println!("Points: {}", engine.points()?);
        }

        Commands::Album { action } => match action {
            AlbumAction::Show { section } => {
                let sections: Vec<Section> = match section {
                    Some(key) => vec![parse_section(&key)?],
                    None => Section::ALL.to_vec(),
                };

                for section in sections {
                    let stickers = engine.list_stickers(section)?;
                    println!("{}: {} collected", section.label(), stickers.len());
                    for sticker in stickers {
                        let rarity = match sticker.special {
                            Some(class) => format!(" [{}]", class.label()),
                            None => String::new(),
                        };
                        println!("  #{} {}{}", sticker.id, sticker.name, rarity);
                    }
                    println!();
                }
            }

            AlbumAction::Reset { yes } => {
                if !yes {
                    println!("WARNING: Resetting the album is IRREVERSIBLE!");
                    println!();
                    println!("This will:");
                    println!("  - Remove every collected sticker");
                    println!("  - Forget every rarity roll");
                    println!("  - Restore the starting points balance");
                    println!();
                    println!("To confirm, run: holocron album reset --yes");
                } else {
                    engine.reset_album()?;
                    println!("Album reset. Points: {}", engine.points()?);
                }
            }
        },

        Commands::Pack { action } => match action {
            PackAction::List => {
                let state = engine.pack_state()?;
                let cooldown = engine.cooldown_seconds()?;

                println!("Packs ({} points each, 5 cards):", PACK_COST);
                for config in PACK_CONFIGS {
                    println!("  Config {}: {}", config.id, config.label);
                }
                println!();
                for pack in PackId::ALL {
                    let locked = is_pack_locked(pack, state.active_pack_id, cooldown);
                    let status = if state.active_pack_id == Some(pack) {
                        "in progress".to_string()
                    } else if locked {
                        format!("locked ({})", format_cooldown(cooldown))
                    } else {
                        "available".to_string()
                    };
                    println!("  Pack {}: {}", pack, status);
                }
            }

            PackAction::Status => {
                let state = engine.pack_state()?;
                let cooldown = engine.cooldown_seconds()?;

                match state.active_pack_id {
                    Some(pack) => println!("Active pack: {}", pack),
                    None => println!("Active pack: none"),
                }
                if cooldown > 0 {
                    println!("Cooldown: {}", format_cooldown(cooldown));
                } else {
                    println!("Cooldown: none");
                }
            }

            PackAction::Open { pack, keep_all } => {
                let pack_id = parse_pack_id(pack)?;

                println!("Opening pack {} ({} points)...", pack_id, PACK_COST);
                let opened = engine.purchase_pack(pack_id).await?;

                println!();
                println!("Pack {} revealed (config {}: {}):", opened.pack_id, opened.config.id, opened.config.label);

                // The pack must be finished even when the reveal loop fails,
                // or it stays wedged active in storage.
                let outcome = reveal_pack(&engine, &opened, keep_all).await;
                engine.finish_pack()?;
                let kept = outcome?;

                println!();
                println!("Kept {} of {} cards. Points: {}", kept, opened.cards.len(), engine.points()?);
            }
        },
    }

    Ok(())
}
