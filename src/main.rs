use anyhow::Result;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use swiss_tracker::calculate;
use swiss_tracker::config::AppConfig;
use swiss_tracker::models::PlayerId;
use swiss_tracker::storage::{RecordStore, StorageConfig};

#[derive(Parser)]
#[command(name = "swiss-tracker")]
#[command(about = "Local Swiss-system tournament tracker")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: String,

    /// Data directory path (overrides config file)
    #[arg(long)]
    data_dir: Option<String>,

    /// Log level (trace, debug, info, warn, error; overrides config file)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Register a player for the tournament
    Register {
        /// Player's full name (need not be unique)
        name: String,
    },

    /// Record the outcome of a single match
    Report {
        /// Winning player's id
        winner: u64,

        /// Losing player's id
        loser: u64,
    },

    /// Show current standings, sorted by wins
    Standings,

    /// Compute next-round pairings
    Pair,

    /// Show player and match counts
    Count,

    /// Delete stored records
    Reset {
        /// Only delete match records, keeping the roster
        #[arg(long)]
        matches_only: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Config file is optional; CLI flags win over it.
    let mut config = if std::path::Path::new(&cli.config).exists() {
        AppConfig::from_file(std::path::Path::new(&cli.config))?
    } else {
        AppConfig::default()
    };
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = std::path::PathBuf::from(data_dir);
    }
    if let Some(log_level) = &cli.log_level {
        config.log_level = log_level.clone();
    }
    config.validate()?;

    // Initialize tracing
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level));

    if cli.json_logs {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    tracing::info!("Starting swiss-tracker v{}", env!("CARGO_PKG_VERSION"));

    let store = RecordStore::new(StorageConfig::new(config.data_dir.clone()));

    match cli.command {
        Commands::Register { name } => {
            let player = store.register_player(&name)?;
            println!("Registered {} with id {}", player.name, player.id);
        }
        Commands::Report { winner, loser } => {
            let result = store.report_match(PlayerId::new(winner), PlayerId::new(loser))?;
            println!("Recorded: {} beat {}", result.winner_id, result.loser_id);
        }
        Commands::Standings => {
            let standings = calculate::player_standings(&store)?;
            if standings.is_empty() {
                println!("No players registered.");
                return Ok(());
            }

            println!("=== Standings ({} players) ===\n", standings.len());
            println!("{:>5}  {:<24} {:>5} {:>8}", "id", "name", "wins", "matches");
            for entry in &standings {
                println!(
                    "{:>5}  {:<24} {:>5} {:>8}",
                    entry.player_id.value(),
                    entry.player_name,
                    entry.wins,
                    entry.matches_played
                );
            }
        }
        Commands::Pair => {
            let pairs = calculate::swiss_pairings(&store)?;
            if pairs.is_empty() {
                println!("No players registered; nothing to pair.");
                return Ok(());
            }

            println!("=== Next Round ({} pairings) ===\n", pairs.len());
            for (table, pair) in pairs.iter().enumerate() {
                println!(
                    "  Table {}: {} ({}) vs {} ({})",
                    table + 1,
                    pair.player1_name,
                    pair.player1_id,
                    pair.player2_name,
                    pair.player2_id
                );
            }
        }
        Commands::Count => {
            println!("Players: {}", store.count_players()?);
            println!("Matches: {}", store.count_matches()?);
        }
        Commands::Reset { matches_only } => {
            if matches_only {
                store.clear_matches()?;
                println!("Deleted all match records.");
            } else {
                store.clear_players()?;
                println!("Deleted all player and match records.");
            }
        }
    }

    Ok(())
}
