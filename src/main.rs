use anyhow::{Result, anyhow};
use clap::Parser;
use log::info;
use simplelog::LevelFilter;
use std::path::PathBuf;
use tui_snake::app::{App, AppConfig};
use tui_snake::game::FruitPlacement;
use tui_snake::logging;

#[derive(Parser)]
#[command(name = "tui_snake")]
#[command(version, about = "Snake in the terminal")]
struct Cli {
    /// JSON config file; flags below override it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Milliseconds between snake moves
    #[arg(long)]
    tick_ms: Option<u64>,

    /// Directory with art and sound files
    #[arg(long)]
    assets: Option<PathBuf>,

    /// Play without sound
    #[arg(long)]
    mute: bool,

    /// Where new fruit may appear
    #[arg(long, value_enum)]
    fruit_placement: Option<FruitPlacement>,

    /// Seed for reproducible fruit placement
    #[arg(long)]
    seed: Option<u64>,

    /// Log file path
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log debug detail
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_json_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(tick_ms) = self.tick_ms {
            config.game.tick_interval_ms = tick_ms;
        }
        if let Some(placement) = self.fruit_placement {
            config.game.fruit_placement = placement;
        }
        if self.seed.is_some() {
            config.game.seed = self.seed;
        }
        if let Some(assets) = self.assets {
            config.asset_dir = assets;
        }
        if let Some(log_file) = self.log_file {
            config.log_file = log_file;
        }
        config.muted |= self.mute;

        config
            .validate()
            .map_err(|e| anyhow!("Invalid configuration: {e}"))?;
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Config problems are reported before the terminal is taken over
    let config = cli.into_config()?;
    logging::init(&config.log_file, level)?;
    info!("Starting with {config:?}");

    let mut app = App::new(&config);
    app.run().await
}
