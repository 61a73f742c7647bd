#![warn(clippy::pedantic)]

use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use clap::{ArgAction, Parser, Subcommand};
use color_eyre::eyre::WrapErr;
use cube_cli::{
    config::Config,
    render::{Style, render},
    session::{Outcome, Session},
};
use cube_core::{Color, Cube, format_moves, parse_moves};
use env_logger::TimestampPrecision;
use log::{LevelFilter, info};
use owo_colors::OwoColorize;

/// Turn the faces of a 3x3 cube from the terminal
#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The configuration file to use, in TOML format.
    #[arg(long, short = 'c', value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// How to draw the cube
    #[arg(long, value_enum, default_value_t = Style::Color)]
    style: Style,

    /// Increase logging verbosity (can be repeated)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply key presses through the key bindings, e.g. "eswd".
    Keys {
        /// The keys to press, in order
        keys: String,
    },
    /// Apply a move sequence, e.g. "F R' U2".
    Moves {
        /// Face letters F L D R U B, optionally followed by ' or 2
        sequence: String,
    },
    /// Apply random moves and print them.
    Scramble {
        /// How many quarter turns to apply
        #[arg(long, short = 'n', default_value_t = 25)]
        count: usize,
        /// Seed for a reproducible scramble
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Read key presses from stdin, one line at a time.
    Play,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(match cli.verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Info,
            2 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        })
        .format_timestamp(Some(TimestampPrecision::Millis))
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)
            .wrap_err_with(|| format!("Could not load {}", path.display()))?,
        None => Config::default(),
    };

    let mut cube = Cube::with_placement(Color::CANONICAL, config.placement());

    match cli.command {
        Commands::Keys { keys } => {
            let moves = config.keys.translate(&keys)?;
            info!("Applying {}", format_moves(&moves));
            cube.apply_all(moves);
        }
        Commands::Moves { sequence } => {
            cube.apply_all(parse_moves(&sequence)?);
        }
        Commands::Scramble { count, seed } => {
            let mut rng = seed.map_or_else(fastrand::Rng::new, fastrand::Rng::with_seed);
            let moves = cube.scramble(&mut rng, count);
            println!("{}", format_moves(&moves));
        }
        Commands::Play => {
            return play(Session::new(&config), cli.style);
        }
    }

    print!("{}", render(&cube, cli.style));

    Ok(())
}

fn play(mut session: Session, style: Style) -> color_eyre::Result<()> {
    print!("{}", session.render(style));
    io::stdout().flush()?;

    for line in io::stdin().lock().lines() {
        match session.handle_line(&line?) {
            Ok(Outcome::Quit) => break,
            Ok(Outcome::Applied(moves)) => info!("Applied {}", format_moves(&moves)),
            Ok(Outcome::Reset) => {}
            Err(e) => {
                eprintln!("{}", e.red());
                continue;
            }
        }

        print!("{}", session.render(style));

        if session.cube().is_solved() {
            println!("{}", "Solved".green());
        }

        io::stdout().flush()?;
    }

    Ok(())
}
