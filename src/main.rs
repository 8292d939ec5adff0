#![deny(
    clippy::all,
    clippy::nursery,
    clippy::must_use_candidate,
    // clippy::restriction,
    // clippy::pedantic
)]
// now allow a few rules which are denied by the above statement
#![allow(clippy::redundant_pub_crate)]
#![deny(missing_debug_implementations)]
#![deny(rustdoc::all)]

//! Console Connect Four: asks for the type of both players and plays one game.

use std::io;

use anyhow::Context;
use clap::Parser;
use connect_four::{Game, PlayerKind, Session};
use tracing_subscriber::filter::{LevelFilter, Targets};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const WIDTH: usize = 7;
const HEIGHT: usize = 6;

#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// Type of player 1. Asked for interactively if omitted
    #[arg(long = "player-1", value_enum)]
    player_1: Option<PlayerKind>,

    /// Type of player 2. Asked for interactively if omitted
    #[arg(long = "player-2", value_enum)]
    player_2: Option<PlayerKind>,

    /// A log level among "off", "error", "warn", "info", "debug", "trace"
    #[arg(short, long, default_value = "warn")]
    log_level: LevelFilter,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    initialize_logging(args.log_level);

    println!("Connect Four ({HEIGHT} rows x {WIDTH} cols)\n");

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock());
    let kinds = session
        .choose_player_kinds([args.player_1, args.player_2])
        .context("Failed to select the player types")?;

    let mut game = Game::<WIDTH, HEIGHT>::new();
    session
        .play(&mut game, kinds)
        .with_context(|| format!("Game aborted in round {}", game.round() + 1))?;

    Ok(())
}

/// Logs go to stderr so that they never interleave with the board.
fn initialize_logging(level: LevelFilter) {
    let format = tracing_subscriber::fmt::format()
        .with_target(false)
        .compact();

    let filter = Targets::new().with_default(level);

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .event_format(format)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();
}
