//! Headless self-play runner (default binary).
//!
//! Drives seeded games through the rules core and reports one summary per
//! game. The move policy is deliberately trivial; it exists to exercise the
//! engine, not to play well.

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use rand::seq::SliceRandom;
use rand::RngCore;
use serde::Serialize;
use tracing::{debug, info, trace};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twenty48::core::{Board, BoardConfig, SimpleRng};
use twenty48::engine::successors;
use twenty48::types::{Action, Score, Tile, TileEvent, DEFAULT_GRID_SIZE, DEFAULT_STARTING_TILES};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Policy {
    /// Uniformly random valid action
    Random,
    /// Action with the most points this turn (first in Up, Down, Left, Right order on ties)
    Greedy,
}

#[derive(Debug, Parser)]
#[command(name = "twenty48", about = "Play seeded 2048 games headlessly")]
struct Args {
    /// Board side length
    #[arg(long, default_value_t = DEFAULT_GRID_SIZE)]
    size: usize,

    /// Tiles placed before the first move
    #[arg(long, default_value_t = DEFAULT_STARTING_TILES)]
    starting_tiles: usize,

    /// Number of games to play
    #[arg(long, default_value_t = 1)]
    games: u32,

    /// Seed for the first game; game `i` uses `seed + i`
    #[arg(long, default_value_t = 1)]
    seed: u32,

    /// Stop a game after this many moves
    #[arg(long)]
    max_moves: Option<u64>,

    #[arg(long, value_enum, default_value_t = Policy::Random)]
    policy: Policy,

    /// Print one JSON summary per line instead of log lines
    #[arg(long)]
    json: bool,

    /// Tracing filter, e.g. "info", "debug", "twenty48_core=trace"
    #[arg(long, default_value = "info")]
    log: String,
}

#[derive(Debug, Serialize)]
struct GameSummary {
    game: u32,
    seed: u32,
    score: Score,
    moves: u64,
    max_tile: Tile,
    game_over: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_new(&args.log).context("invalid --log filter")?)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = BoardConfig::new(args.size, args.starting_tiles);
    config.validate().context("invalid board configuration")?;

    for game in 0..args.games {
        let seed = args.seed.wrapping_add(game);
        let summary = play(game, seed, config, &args)?;

        if args.json {
            println!("{}", serde_json::to_string(&summary)?);
        } else {
            info!(
                game = summary.game,
                seed = summary.seed,
                score = summary.score,
                moves = summary.moves,
                max_tile = summary.max_tile,
                game_over = summary.game_over,
                "game finished"
            );
        }
    }

    Ok(())
}

fn play(game: u32, seed: u32, config: BoardConfig, args: &Args) -> Result<GameSummary> {
    let mut rng = SimpleRng::new(seed);
    let mut events: Vec<TileEvent> = Vec::new();

    let mut board = Board::new(config).context("failed to create board")?;
    board.spawn_starting_tiles(&mut rng, &mut events);
    log_events(&mut events);

    let mut moves = 0u64;
    while args.max_moves.map_or(true, |max| moves < max) {
        let Some(action) = choose(&board, args.policy, &mut rng) else {
            break;
        };

        board
            .apply_action(action, &mut events)
            .with_context(|| format!("game {game}: applying {action}"))?;
        board.spawn_tile(&mut rng, &mut events);
        moves += 1;

        debug!(game, moves, %action, score = board.score(), "move");
        log_events(&mut events);
    }

    trace!(game, "final board\n{board}");

    Ok(GameSummary {
        game,
        seed,
        score: board.score(),
        moves,
        max_tile: board.max_tile(),
        game_over: board.is_game_over(),
    })
}

fn choose(board: &Board, policy: Policy, rng: &mut dyn RngCore) -> Option<Action> {
    match policy {
        Policy::Random => board.valid_actions().choose(rng).copied(),
        Policy::Greedy => successors(board)
            .into_iter()
            .rev()
            .max_by_key(|s| s.points)
            .map(|s| s.action),
    }
}

fn log_events(events: &mut Vec<TileEvent>) {
    for event in events.drain(..) {
        trace!(?event, "tile event");
    }
}
