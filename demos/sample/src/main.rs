//! Defaults a sample configuration and prints it as JSON.

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use sample::{Layout, Result, defaulted_sample, write_sample_to};

/// Command-line options.
#[derive(Debug, Parser)]
#[command(name = "sample", about = "Print a sample configuration with defaults applied")]
struct Cli {
    /// Print the JSON on a single line.
    #[arg(long)]
    compact: bool,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    init_tracing();
    let cli = Cli::parse();
    run(&cli).map_err(color_eyre::eyre::Report::from)
}

/// Logs to standard error, filtered by `RUST_LOG` (default `warn`).
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let sample = defaulted_sample()?;
    let layout = if cli.compact {
        Layout::Compact
    } else {
        Layout::Pretty
    };
    write_sample_to(&mut io::stdout().lock(), &sample, layout)
}
