//! Command line entry point for the standings tool
//!
//! Loads a JSON batch of matches, aggregates player records and prints the
//! ranked standings as a table or JSON.

use anyhow::Result;
use clap::Parser;
use standings::config::{validate_config, AppConfig, OutputFormat};
use standings::input::load_matches;
use standings::ranking::parse_criteria_list;
use standings::RankingCalculator;
use std::path::PathBuf;
use tracing::{error, info};

/// Standings - tournament rankings from raw match results
#[derive(Parser)]
#[command(
    name = "standings",
    version,
    about = "Compute tournament standings from match results",
    long_about = "Standings aggregates completed matches into per-player records \
                 (match and game wins/losses, total points) and ranks players by a \
                 prioritized list of tiebreak criteria."
)]
struct Args {
    /// Match file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to a JSON file of matches",
        required_unless_present = "dry_run"
    )]
    matches: Option<PathBuf>,

    /// Configuration file path
    #[arg(
        short,
        long,
        value_name = "FILE",
        help = "Path to configuration file (TOML format)"
    )]
    config: Option<PathBuf>,

    /// Criteria override
    #[arg(
        long,
        value_name = "LIST",
        help = "Comma separated criteria, highest priority first (e.g. most_match_wins,total_points)"
    )]
    criteria: Option<String>,

    /// Output format override
    #[arg(long, value_name = "FORMAT", help = "Output format (table, json)")]
    format: Option<OutputFormat>,

    /// Print aggregated records without ranking
    #[arg(long, help = "Print aggregated player records without ranking them")]
    records_only: bool,

    /// Aggregate in parallel
    #[arg(long, help = "Aggregate matches in parallel (requires the parallel feature)")]
    parallel: bool,

    /// Log level override
    #[arg(
        short,
        long,
        value_name = "LEVEL",
        help = "Override log level (trace, debug, info, warn, error)"
    )]
    log_level: Option<String>,

    /// Enable debug mode
    #[arg(short, long, help = "Enable debug mode with verbose logging")]
    debug: bool,

    /// Dry run mode (validate config and exit)
    #[arg(long, help = "Validate configuration and exit without reading matches")]
    dry_run: bool,
}

/// Initialize structured logging with the configured level
fn init_logging(log_level: &str) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| log_level.into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    Ok(())
}

/// Load and merge configuration from file or environment and CLI arguments
fn load_config(args: &Args) -> Result<AppConfig> {
    let mut config = if let Some(config_path) = &args.config {
        AppConfig::from_file(config_path)?
    } else {
        AppConfig::from_env()?
    };

    if let Some(log_level) = &args.log_level {
        config.service.log_level = log_level.clone();
    }

    if args.debug {
        config.service.log_level = "debug".to_string();
    }

    if let Some(criteria) = &args.criteria {
        config.ranking.criteria = parse_criteria_list(criteria)?;
    }

    if let Some(format) = args.format {
        config.output.format = format;
    }

    if args.parallel {
        config.ranking.parallel = true;
    }

    validate_config(&config)?;
    Ok(config)
}

fn display_settings(config: &AppConfig) {
    let criteria: Vec<&str> = config.ranking.criteria.iter().map(|c| c.as_str()).collect();
    info!("{} {}", config.service.name, standings::VERSION);
    info!("   Criteria: {}", criteria.join(" > "));
    info!("   Output: {:?}", config.output.format);
    info!("   Parallel aggregation: {}", config.ranking.parallel);
}

fn run(args: &Args, config: &AppConfig) -> Result<()> {
    let Some(matches_path) = &args.matches else {
        return Ok(());
    };

    info!("Loading matches from: {}", matches_path.display());
    let matches = load_matches(matches_path)?;
    let calculator = RankingCalculator::from_config(&config.ranking)?;

    if args.records_only {
        let records = calculator.calculate_records(&matches)?;
        match config.output.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&records)?),
            OutputFormat::Table => {
                for record in &records {
                    println!(
                        "{:<24} MW {:>4}  ML {:>4}  GW {:>5}  GL {:>5}  Pts {:>7}",
                        record.player().name(),
                        record.match_wins(),
                        record.match_losses(),
                        record.game_wins(),
                        record.game_losses(),
                        record.total_points()
                    );
                }
            }
        }
        return Ok(());
    }

    let standings = calculator.calculate_standings(&matches)?;
    match config.output.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&standings)?),
        OutputFormat::Table => print!("{}", standings),
    }
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = load_config(&args).unwrap_or_else(|e| {
        eprintln!("Configuration error: {}", e);
        std::process::exit(1);
    });

    if let Err(e) = init_logging(&config.service.log_level) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    display_settings(&config);

    if args.dry_run {
        info!("Configuration validation successful - exiting without reading matches");
        return Ok(());
    }

    if let Err(e) = run(&args, &config) {
        error!("Failed to compute standings: {}", e);
        std::process::exit(1);
    }

    Ok(())
}
