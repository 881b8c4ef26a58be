//! storcat - storage device catalog report tool
//!
//! Prints a report over the built-in catalog of storage devices: one
//! summary block per device (info, free space, simulated copy) followed by
//! the total storage volume.

use anyhow::Result;
use clap::Parser;
use storcat_report::{builtin_catalog, ReportRunner};
use tracing::info;

/// storcat - storage device catalog report tool
#[derive(Parser)]
#[command(
    name = "storcat",
    version = env!("CARGO_PKG_VERSION"),
    about = "Storage device catalog report tool",
    long_about = "storcat models a small catalog of storage devices (flash drive,\n\
                  DVD, hard disk) and prints a capacity and free-space report\n\
                  with a simulated data copy per device."
)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,

    /// Quiet mode - minimal logging
    #[arg(short, long)]
    quiet: bool,

    /// Verbose mode - detailed logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    init_logging(cli.debug, cli.quiet, cli.verbose)?;

    info!("storcat v{} starting", env!("CARGO_PKG_VERSION"));

    let runner = ReportRunner::new(builtin_catalog());
    let stdout = std::io::stdout();
    runner.write_report(&mut stdout.lock())?;

    info!("Report finished");
    Ok(())
}

fn init_logging(debug: bool, quiet: bool, verbose: bool) -> Result<()> {
    use tracing_subscriber::{fmt, EnvFilter};

    let level = if debug {
        "debug"
    } else if verbose {
        "info"
    } else if quiet {
        "error"
    } else {
        "warn"
    };

    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}
