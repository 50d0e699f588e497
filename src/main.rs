//! Pente GUI
//!
//! A graphical interface for a tournament of Pente against the computer.

use std::path::PathBuf;

use anyhow::Context as _;
use clap::Parser;
use pente::config::PenteConfig;
use pente::ui::{GameState, PenteApp};
use rand::SeedableRng;
use rand_pcg::Pcg32;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file
    #[arg(long)]
    config: Option<PathBuf>,
    /// Seed for every random choice
    #[arg(long)]
    seed: Option<u64>,
    /// Directory holding saved games
    #[arg(long)]
    save_dir: Option<PathBuf>,
    /// Name shown for the human player
    #[arg(long)]
    name: Option<String>,
    /// Saved game to resume on startup
    #[arg(long)]
    load: Option<String>,
}

impl Args {
    fn into_config(self) -> anyhow::Result<(PenteConfig, Option<String>)> {
        let mut config = match &self.config {
            Some(path) => PenteConfig::load(path)
                .with_context(|| format!("Failed to load config: {}", path.display()))?,
            None => PenteConfig::default(),
        };
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(dir) = self.save_dir {
            config.save_dir = dir;
        }
        if let Some(name) = self.name {
            config.player_name = name;
        }
        Ok((config, self.load))
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let (config, load) = Args::parse().into_config()?;
    let rng = match config.seed {
        Some(seed) => Pcg32::seed_from_u64(seed),
        None => Pcg32::from_rng(&mut rand::rng()),
    };
    info!(seed = ?config.seed, save_dir = %config.save_dir.display(), "starting");

    let mut state = GameState::new(&config, rng);
    if let Some(name) = load {
        state.load(&name)?;
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 750.0])
            .with_min_inner_size([800.0, 600.0])
            .with_title("Pente"),
        ..Default::default()
    };

    eframe::run_native("Pente", options, Box::new(|cc| Ok(Box::new(PenteApp::new(cc, state)))))
        .map_err(|err| anyhow::anyhow!("GUI error: {err}"))
}
