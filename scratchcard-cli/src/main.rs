mod commands;
mod config;

use clap::{Parser, Subcommand};
use scratchcard_core::ScratchError;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "scratchcard")]
#[command(about = "Scratch card game in the terminal")]
#[command(version)]
struct Cli {
    /// Game configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Seed for the random source
    #[arg(short, long, global = true)]
    seed: Option<u64>,

    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Deal a set of cards and show what is printed on them
    Deal {
        /// Number of cards
        #[arg(short = 'n', long)]
        cards: Option<usize>,
        /// Show the prize behind every card
        #[arg(long)]
        show_prizes: bool,
        /// Print cards as JSON
        #[arg(long)]
        json: bool,
    },
    /// Scratch every card automatically until it reveals
    Sweep {
        /// Number of cards
        #[arg(short = 'n', long)]
        cards: Option<usize>,
    },
    /// Scratch cards interactively
    Play {
        /// Number of cards
        #[arg(short = 'n', long)]
        cards: Option<usize>,
    },
    /// Show the exact odds of every outcome
    Odds,
    /// Deal many cards and compare observed outcomes with the odds
    Simulate {
        /// Number of cards to deal
        #[arg(short, long, default_value_t = 100_000)]
        rounds: u64,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(format!(
            "scratchcard={},scratchcard_core={}",
            log_level, log_level
        )))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli_config = config::CliConfig::default();
    let game_config = match cli_config.load_game_config(cli.config.as_deref()).await {
        Ok(game_config) => game_config,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    let result = match cli.command {
        Commands::Deal {
            cards,
            show_prizes,
            json,
        } => commands::deal(
            game_config,
            &cli_config,
            cards.unwrap_or(cli_config.default_cards),
            cli.seed,
            show_prizes,
            json,
        ),
        Commands::Sweep { cards } => commands::sweep(
            game_config,
            &cli_config,
            cards.unwrap_or(cli_config.default_cards),
            cli.seed,
        ),
        Commands::Play { cards } => commands::play(
            game_config,
            &cli_config,
            cards.unwrap_or(cli_config.default_cards),
            cli.seed,
        ),
        Commands::Odds => commands::show_odds(&game_config),
        Commands::Simulate { rounds } => commands::simulate(&game_config, rounds, cli.seed),
    };

    if let Err(e) = result {
        match e.downcast_ref::<ScratchError>() {
            Some(ScratchError::CardNotFound(id)) => {
                eprintln!("Error: Card '{}' not found", id);
            }
            Some(ScratchError::Config(msg)) => {
                eprintln!("Error: Invalid game configuration: {}", msg);
                eprintln!("Run without --config to use the built-in settings");
            }
            _ => {
                eprintln!("Error: {}", e);
            }
        }
        std::process::exit(1);
    }

    Ok(())
}
