//! # `Slipbox`
//!
//! `Slipbox` prints the resolved note settings of a directory in a plain-text
//! notebook: the root settings of `.slipbox/config.toml`, the `[dir.<name>]`
//! table inheriting from them, and the overrides given on the command line.
//!
//! ## Usage
//!
//! ```sh
//! slipbox --dir journal --extra mood=happy
//! slipbox --aliases --format json
//! ```

use anyhow::Result;
use clap::Parser as _;
use slipbox::cli::Args;
use slipbox::error::SlipboxError;
use slipbox::system::RealSystem;
use tracing::error;
use tracing_subscriber::{EnvFilter, fmt};

fn main() -> Result<()> {
    let args = Args::parse();

    let log_level = if args.verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let system = RealSystem::new();
    match slipbox::run(&args, &system) {
        Ok(output) => {
            if !output.is_empty() {
                println!("{output}");
            }
            std::process::exit(0);
        }
        Err(err) => {
            error!("{:#}", err);
            std::process::exit(
                err.downcast_ref::<SlipboxError>()
                    .map_or(1, SlipboxError::exit_code),
            );
        }
    }
}
