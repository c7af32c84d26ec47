mod config;
mod domain;
mod outbound;

use bingo_core::{Drawer, JsonFileStore, RandomSource, SeededSource, ThreadSource};

use std::{io, path::PathBuf};

use clap::{Parser, Subcommand};
use tracing::{Level, span};

use config::Config;
use domain::{
    ports::BingoService,
    service::{Service, round_status},
};
use outbound::announcers::{OutputFormat, WriterAnnouncer};

#[derive(Parser, Debug)]
#[command(version, about = "Calls one bingo number per run", long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    #[command(flatten)]
    draw: DrawArgs,

    /// Path of the state record [default: $BINGO_STATE_PATH or bingo_state.json]
    #[arg(short, long, global = true)]
    state: Option<PathBuf>,

    /// Log draw and storage details
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
struct DrawArgs {
    /// Seed for a reproducible draw
    #[arg(long)]
    seed: Option<u64>,

    #[arg(short, long, default_value_t, value_enum)]
    format: OutputFormat,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Draw the next number (default)
    Draw(DrawArgs),
    /// Show the round in progress without drawing
    Status,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::INFO
        })
        .init();

    match args.command.unwrap_or(Command::Draw(args.draw)) {
        Command::Draw(DrawArgs { seed, format }) => {
            let config = Config::from_env(args.state, seed, format)?;
            match config.seed {
                Some(seed) => draw(&config, SeededSource::seeded(seed)),
                None => draw(&config, ThreadSource::thread()),
            }
        }
        Command::Status => {
            let config = Config::from_env(args.state, None, OutputFormat::default())?;
            status(&config)
        }
    }
}

fn draw<R: RandomSource>(config: &Config, source: R) -> anyhow::Result<()> {
    let span = span!(Level::INFO, "draw", state = %config.state_path.display());
    let _guard = span.enter();

    let store = JsonFileStore::new(&config.state_path);
    let announcer = WriterAnnouncer::new(io::stdout(), config.format);
    let mut service = Service::new(store, Drawer::new(source), announcer);

    service.draw_number()?;

    Ok(())
}

fn status(config: &Config) -> anyhow::Result<()> {
    let status = round_status(&JsonFileStore::new(&config.state_path))?;

    println!("{}", status.progress);
    match status.last_called() {
        Some(label) => {
            println!("Last called: {label}");
            println!("Called: {}", status.called.join(" "));
        }
        None => println!("Nothing called yet this round"),
    }

    Ok(())
}
