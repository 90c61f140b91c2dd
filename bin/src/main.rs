//! movequote CLI - Household moving price estimator.

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use movequote_lib::prelude::*;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod commands;
mod display;

#[derive(Parser)]
#[command(name = "movequote")]
#[command(about = "Household moving price estimator", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (only print results)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// JSON tariff file replacing the standard rates
    #[arg(long, global = true)]
    tariff: Option<PathBuf>,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate the price of a move
    Quote {
        /// Origin as LAT,LON (e.g. -1.2921,36.8219)
        #[arg(long, allow_hyphen_values = true)]
        from: GeoPoint,

        /// Destination as LAT,LON (e.g. -4.0435,39.6682)
        #[arg(long, allow_hyphen_values = true)]
        to: GeoPoint,

        /// Home size (bedsitter, one bedroom, studio, two bedroom)
        #[arg(short, long)]
        size: MoveSize,

        /// Include the packing service
        #[arg(short, long)]
        packing: bool,

        /// Print the quote as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the great-circle distance between two points
    Distance {
        /// Origin as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        from: GeoPoint,

        /// Destination as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        to: GeoPoint,
    },

    /// List home sizes and their price multipliers
    Sizes,

    /// Print the active tariff as JSON
    Tariff,

    /// Validate a moving request and print the submission payload
    Payload {
        /// Origin name
        #[arg(long)]
        from_location: String,

        /// Origin as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        from: GeoPoint,

        /// Destination name
        #[arg(long)]
        to_location: String,

        /// Destination as LAT,LON
        #[arg(long, allow_hyphen_values = true)]
        to: GeoPoint,

        /// Home size (bedsitter, one bedroom, studio, two bedroom)
        #[arg(short, long)]
        size: MoveSize,

        /// Moving date (YYYY-MM-DD or "YYYY-MM-DD HH:MM:SS")
        #[arg(short, long, value_parser = display::parse_moving_date)]
        date: chrono::NaiveDateTime,

        /// Include the packing service
        #[arg(short, long)]
        packing: bool,

        /// Additional details for the mover
        #[arg(long)]
        details: Option<String>,
    },
}

/// Installs the tracing subscriber. `RUST_LOG` overrides the verbosity flags.
fn init_tracing(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "info",
        (false, 2) => "debug",
        (false, _) => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    // Show help if no command provided
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let estimator = display::load_estimator(cli.tariff.as_deref())?;

    match command {
        Commands::Quote {
            from,
            to,
            size,
            packing,
            json,
        } => commands::quote::quote(&estimator, QuoteRequest::new(from, to, size, packing), json),
        Commands::Distance { from, to } => commands::quote::distance(&estimator, &from, &to),
        Commands::Sizes => commands::sizes::list_sizes(&estimator),
        Commands::Tariff => commands::sizes::show_tariff(&estimator),
        Commands::Payload {
            from_location,
            from,
            to_location,
            to,
            size,
            date,
            packing,
            details,
        } => {
            let form = MovingDetails {
                from_location,
                from,
                to_location,
                to,
                home_size: size,
                moving_date: date,
                packing_service: packing,
                additional_details: details,
            };
            commands::payload::payload(&estimator, &form, cli.quiet)
        }
    }
}
