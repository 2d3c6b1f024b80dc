use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use movable_core::AppConfig;

mod commands;

#[derive(Parser)]
#[command(name = "movable")]
#[command(author, version, about = "Drag-to-reorder list geometry and a terminal demo")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the interactive reorder demo
    Run {
        /// Number of demo items
        #[arg(short = 'n', long, default_value_t = 40)]
        items: usize,
    },
    /// Find the slot a value falls in among ascending boundaries
    Locate {
        /// Comma-separated ascending boundaries, e.g. 0,40,80
        #[arg(short, long, value_delimiter = ',', allow_negative_numbers = true)]
        boundaries: Vec<f64>,
        #[arg(allow_negative_numbers = true)]
        target: f64,
    },
    /// Autoscroll speed for a pointer `distance` deep into a hot zone
    Speed {
        distance: f64,
        /// Depth at which the speed saturates
        max_distance: f64,
        /// Speed cap, defaults to drag.max_speed
        #[arg(long)]
        max_speed: Option<f64>,
    },
    /// Hot-zone size for a viewport
    Zone {
        viewport: f64,
        /// Size cap, defaults to drag.max_zone_size
        #[arg(long)]
        max_size: Option<f64>,
    },
    /// Move an element to a new position
    Move {
        from: usize,
        /// Destination; negative counts from the end
        #[arg(allow_negative_numbers = true)]
        to: isize,
        items: Vec<String>,
    },
    /// Remove the element at an index
    Remove { index: usize, items: Vec<String> },
    /// Show the effective configuration
    Config {
        /// Write the defaults to the config file if it does not exist
        #[arg(long)]
        init: bool,
        /// Print only the config file path
        #[arg(long)]
        path: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = AppConfig::load()?;

    // The demo owns the terminal, so its logs go to a file
    let interactive = matches!(cli.command, Some(Commands::Run { .. }) | None);
    init_logging(&config, interactive)?;

    match cli.command {
        Some(Commands::Run { items }) => commands::run::run(config, items),
        None => commands::run::run(config, 40),
        Some(Commands::Locate { boundaries, target }) => {
            commands::geometry::locate(&boundaries, target, cli.json)
        }
        Some(Commands::Speed {
            distance,
            max_distance,
            max_speed,
        }) => commands::geometry::speed(
            distance,
            max_distance,
            max_speed.unwrap_or(config.drag.max_speed),
            cli.json,
        ),
        Some(Commands::Zone { viewport, max_size }) => commands::geometry::zone(
            viewport,
            max_size.unwrap_or(config.drag.max_zone_size),
            cli.json,
        ),
        Some(Commands::Move { from, to, items }) => {
            commands::reorder::move_to(&items, from, to, cli.json)
        }
        Some(Commands::Remove { index, items }) => {
            commands::reorder::remove(&items, index, cli.json)
        }
        Some(Commands::Config { init, path }) => commands::config::run(&config, init, path),
    }
}

fn init_logging(config: &AppConfig, to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.general.log_level));

    if to_file {
        let path = config.log_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}
