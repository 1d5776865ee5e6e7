//! mc-pi - Monte Carlo estimation of pi
//!
//! Draws random points in the unit square, counts those inside the inscribed
//! circle and reports `4 * hits / samples`.
//!
//! # Usage
//!
//! - `mc-pi` - run with the configured sample count (default 50 000)
//! - `mc-pi <NUM_SAMPLES>` - run with an explicit positive sample count
//!
//! Besides the stdout report, two plots are written to the output directory:
//! the classified scatter plot and the convergence of the running estimate.
//! Everything else (seed, output directory, format, log level) comes from
//! `mc-pi.toml` or `MC_PI_*` environment variables.

use clap::Parser;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use pi_core::mc::parse_sample_count;

mod config;
mod error;
mod estimate;

pub use error::{CliError, Result};

use config::{CliArgs, LogLevel};

/// Estimate pi by Monte Carlo sampling
#[derive(Parser)]
#[command(name = "mc-pi")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Number of random points to draw (positive integer)
    #[arg(value_name = "NUM_SAMPLES", allow_negative_numbers = true)]
    num_samples: Option<String>,
}

fn main() -> anyhow::Result<()> {
    run()?;
    Ok(())
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let num_samples = cli
        .num_samples
        .as_deref()
        .map(parse_sample_count)
        .transpose()?;
    let config = config::build_config(&CliArgs { num_samples }, config::process_env)?;

    init_tracing(config.log_level);
    debug!(?config, "Resolved configuration");

    let report = estimate::run(&config)?;
    debug!(artifacts = ?report.artifacts, "Plots written");

    println!("{} drops", report.summary.samples);
    println!("pi is estimated as:\t{}", report.summary.estimate);
    Ok(())
}

/// Logs go to stderr; `RUST_LOG` takes precedence over the configured level.
fn init_tracing(level: LogLevel) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(level.as_filter_str()));

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}
