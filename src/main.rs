//! lambda-demo CLI
//!
//! Prints every value of the fixed sequence `{1, 2, 3, 4, 5}` through a printer
//! closure, sums the sequence through an accumulator closure, then prints the sum.
//!
//! ## Output
//!
//! ```text
//! Using Lambda to Print Values:
//! Value: 1
//! Value: 2
//! Value: 3
//! Value: 4
//! Value: 5
//! Sum: 15
//! ```
//!
//! ## Logging
//!
//! Diagnostics go to stderr only. `RUST_LOG` overrides the level, otherwise the
//! `logging.default_level` from `config.yaml` (default `warn`) applies.

use anyhow::Result;
use clap::Parser;
use lambda_demo::{init_logging, run, Config, Sequence};
use std::io;
use tracing::{debug, warn};

#[derive(Parser)]
#[command(author, version, about = "Print and sum a fixed sequence using closures", long_about = None)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            // Logging is not up yet, so report on stderr directly
            eprintln!("Ignoring config: {:#}", e);
            Config::default()
        }
    };
    if !init_logging(&config.logging) {
        warn!("Logging already initialized");
    }

    let sequence = Sequence::default();
    let stdout = io::stdout();
    let mut out = stdout.lock();
    let report = run(&sequence, &mut out)?;

    debug!(?report, "done");
    Ok(())
}
