use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use match_radar::api::build_router;
use match_radar::api::state::AppState;
use match_radar::config::AppConfig;
use match_radar::engine::{analyze_match, compare_match};
use match_radar::models::{BenchmarkTable, MatchDetails, MatchId, MatchRecord, RankTier};
use match_radar::storage::{read_match_file, MatchStore, StorageConfig};

#[derive(Parser)]
#[command(name = "match-radar")]
#[command(about = "Compare a player's match performance against their lane opponent")]
#[command(version)]
struct Cli {
    /// Path to configuration file
    #[arg(long, default_value = "./config.toml")]
    config: PathBuf,

    /// Data directory path (overrides config)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Where to read the match record from.
#[derive(Args)]
struct MatchSource {
    /// Match record JSON file
    #[arg(long, conflicts_with = "match_id", required_unless_present = "match_id")]
    file: Option<PathBuf>,

    /// Match id in the data directory store
    #[arg(long)]
    match_id: Option<String>,

    /// Player to report on
    #[arg(long)]
    puuid: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Radar comparison against the lane opponent
    Radar {
        #[command(flatten)]
        source: MatchSource,

        /// Rank tier for benchmarks (default from config)
        #[arg(long)]
        rank: Option<RankTier>,
    },

    /// Full scoreboard for a match
    Details {
        #[command(flatten)]
        source: MatchSource,
    },

    /// Highlights and headline stats for one player
    Analyze {
        #[command(flatten)]
        source: MatchSource,
    },

    /// Start the API server
    Serve {
        /// Bind address (default from config)
        #[arg(long)]
        host: Option<String>,

        /// Port number (default from config)
        #[arg(long)]
        port: Option<u16>,
    },
}

fn load_record(source: &MatchSource, store: &MatchStore) -> Result<MatchRecord> {
    match (&source.file, &source.match_id) {
        (Some(path), _) => read_match_file(path)
            .with_context(|| format!("Failed to read match file {:?}", path)),
        (None, Some(id)) => store
            .load(&MatchId::from(id.as_str()))
            .with_context(|| format!("Failed to load match {}", id)),
        (None, None) => anyhow::bail!("Specify --file or --match-id"),
    }
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load config {:?}", cli.config))?;

    // Initialize tracing
    let log_level = cli.log_level.clone().unwrap_or(config.log_level.clone());
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_level));

    let registry = tracing_subscriber::registry().with(filter);
    if cli.json_logs {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    tracing::info!("Starting match-radar v{}", env!("CARGO_PKG_VERSION"));

    let data_dir = cli.data_dir.clone().unwrap_or(config.data_dir.clone());
    let store = MatchStore::new(StorageConfig::new(data_dir));
    let benchmarks = BenchmarkTable::standard();

    match cli.command {
        Commands::Radar { source, rank } => {
            let record = load_record(&source, &store)?;
            let tier = rank.unwrap_or(config.radar.rank);
            let result = compare_match(&record, &source.puuid, tier, &benchmarks)?;
            print_json(&result)?;
        }
        Commands::Details { source } => {
            let record = load_record(&source, &store)?;
            let details =
                MatchDetails::from_record(&record, &source.puuid, &config.radar.avatar_base_url);
            if details.player_stats.is_none() {
                tracing::warn!("Player {} is not in match {}", source.puuid, record.match_id());
            }
            print_json(&details)?;
        }
        Commands::Analyze { source } => {
            let record = load_record(&source, &store)?;
            let analysis = analyze_match(&record, &source.puuid)?;
            print_json(&analysis)?;
        }
        Commands::Serve { host, port } => {
            let host = host.unwrap_or(config.server.host.clone());
            let port = port.unwrap_or(config.server.port);

            let state = AppState {
                store: Arc::new(store),
                benchmarks: Arc::new(benchmarks),
                radar: Arc::new(config.radar.clone()),
                cors_origin: config.server.cors_origin.clone(),
            };
            let app = build_router(state);
            let addr = format!("{}:{}", host, port);
            let listener = tokio::net::TcpListener::bind(&addr).await?;
            tracing::info!("Listening on http://{}", addr);
            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
