//! Interactive space travel simulator.
//!
//! Reads commands from stdin and prints results to stdout. Diagnostics go to stderr
//! and are silent unless `-v` or `RUST_LOG` raises the level.

use std::io;
use std::path::PathBuf;

use anyhow::Context;
use clap::{ArgAction, Parser};
use space_travel_simulator::navigation::Catalog;
use space_travel_simulator::session::Session;

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Interactive simulator for planet distances, travel times, and signal delays"
)]
struct Cli {
    /// Directory holding `planets` and `ships` catalogs (.toml, .yaml or .yml)
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Raise the stderr log level (-v info, -vv debug)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let loaded;
    let catalog = match &cli.catalog {
        Some(dir) => {
            loaded = Catalog::load_dir(dir)
                .with_context(|| format!("failed to load catalog from {}", dir.display()))?;
            &loaded
        }
        None => Catalog::builtin().context("built-in catalog is invalid")?,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    Session::new(catalog, stdin.lock(), stdout.lock()).run()?;
    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level))
        .format_timestamp(None)
        .init();
}
