//! stepview: terminal player for the step visualization gallery

mod cli;
mod commands;
mod player;

use anyhow::Result;
use clap::Parser;
use sv_content::Gallery;
use sv_core::AutoplayPolicy;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::cli::{Cli, Command};

/// Set up logging on stderr; `RUST_LOG` wins over `--log-level`
fn init_logging(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    let gallery = Gallery::standard();
    info!("Starting stepview with {} visualizations", gallery.len());

    match cli.command {
        Command::List => player::list(&gallery, &mut std::io::stdout().lock())?,
        Command::Show(args) => {
            let visualization = gallery.lookup(&args.selection.slug)?;
            player::show(
                visualization,
                args.selection.variant.as_deref(),
                args.json,
                &mut std::io::stdout().lock(),
            )?;
        }
        Command::Play(args) => {
            let visualization = gallery.lookup(&args.selection.slug)?;
            let config = player::load_config(args.config.as_deref())?;
            // `play` always autoplays; the enabled flag only matters for `step`
            let interval = match args.interval {
                Some(interval) => interval,
                None => config.playback.interval()?,
            };
            let policy = AutoplayPolicy::new(interval)?;
            player::play(visualization, args.selection.variant.as_deref(), policy).await?;
        }
        Command::Step(args) => {
            let visualization = gallery.lookup(&args.selection.slug)?;
            let config = player::load_config(args.config.as_deref())?;
            player::step(visualization, args.selection.variant.as_deref(), &config).await?;
        }
    }

    Ok(())
}
