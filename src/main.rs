use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing::{debug, error, info, trace};

use ticket_analyzer::analysis::analyze_route;
use ticket_analyzer::config::{AnalyzerConfig, ConfigOverrides};
use ticket_analyzer::report::{self, OutputFormat};
use ticket_analyzer::tickets::load_tickets;

/// Flight ticket statistics for a single city pair
#[derive(Parser)]
#[command(name = "ticket-analyzer")]
#[command(
    about = "Minimum flight time per carrier and average/median price difference between two cities",
    long_about = None
)]
struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to a TOML configuration file
    #[arg(short = 'c', long)]
    config: Option<PathBuf>,

    /// Path to the tickets JSON document (default: tickets.json)
    #[arg(short = 't', long)]
    tickets: Option<PathBuf>,

    /// Origin city display name
    #[arg(long)]
    origin: Option<String>,

    /// Destination city display name
    #[arg(long)]
    destination: Option<String>,

    /// Report format
    #[arg(short = 'f', long, value_enum)]
    format: Option<OutputFormat>,
}

fn main() {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };

    tracing_subscriber::fmt()
        .with_env_filter(log_level)
        .with_target(cli.verbose >= 2)
        .with_writer(std::io::stderr)
        .init();

    debug!("ticket-analyzer started with verbosity level: {}", cli.verbose);
    trace!("Full CLI args: {:?}", std::env::args().collect::<Vec<_>>());

    if let Err(e) = run(cli) {
        error!("Fatal error: {:#}", e);
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let overrides = ConfigOverrides {
        tickets_path: cli.tickets,
        origin: cli.origin,
        destination: cli.destination,
        format: cli.format,
    };
    let config = AnalyzerConfig::load(cli.config.as_deref(), overrides)
        .context("Failed to load configuration")?;

    let Some(tickets) = load_tickets(&config.tickets_path) else {
        println!("No tickets could be read.");
        return Ok(());
    };

    let route = config.route();
    info!(
        "Analyzing {} tickets for {} -> {}",
        tickets.len(),
        route.origin,
        route.destination
    );

    let analysis = analyze_route(&tickets, &route);
    let output = report::render(&analysis, &route, config.format)
        .context("Failed to render report")?;
    print!("{output}");
    if config.format == OutputFormat::Json {
        println!();
    }

    Ok(())
}
