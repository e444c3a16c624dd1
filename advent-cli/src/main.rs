mod commands;
mod logging;
mod render;

use advent_core::Settings;
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "advent")]
#[command(about = "A 24-box advent running calendar in your terminal")]
struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the calendar grid.
    Status,
    /// Open one box and reveal its distance.
    Open {
        /// Box to open (1-24).
        #[arg(value_parser = clap::value_parser!(u8).range(1..=24))]
        day: u8,
    },
    /// Assign a fresh distance to every box.
    Assign {
        /// Allow the same distance on more than one day.
        #[arg(long, conflicts_with = "no_duplicates")]
        duplicates: bool,

        /// Force every distance to be unique.
        #[arg(long)]
        no_duplicates: bool,
    },
    /// Reassign all distances and close every box.
    Reset {
        /// Allow the same distance on more than one day.
        #[arg(long, conflicts_with = "no_duplicates")]
        duplicates: bool,

        /// Force every distance to be unique.
        #[arg(long)]
        no_duplicates: bool,

        /// Skip the confirmation prompt.
        #[arg(short, long)]
        yes: bool,
    },
    /// Show or change settings and storage paths.
    Config {
        /// Set whether assignment may repeat distances.
        #[arg(long)]
        allow_duplicates: Option<bool>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match cli.command {
        Commands::Status => commands::status::run(),
        Commands::Open { day } => commands::open::run(day),
        Commands::Assign {
            duplicates,
            no_duplicates,
        } => commands::assign::run(resolve_duplicates(duplicates, no_duplicates)?),
        Commands::Reset {
            duplicates,
            no_duplicates,
            yes,
        } => commands::reset::run(resolve_duplicates(duplicates, no_duplicates)?, yes),
        Commands::Config { allow_duplicates } => commands::config::run(allow_duplicates),
    }
}

/// Explicit flags win; otherwise the persisted setting decides.
fn resolve_duplicates(duplicates: bool, no_duplicates: bool) -> Result<bool> {
    if duplicates {
        Ok(true)
    } else if no_duplicates {
        Ok(false)
    } else {
        let settings = Settings::load().context("Failed to load settings")?;
        Ok(settings.allow_duplicates)
    }
}
