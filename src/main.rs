use anyhow::{Context, Result};
use tracing::{debug, info};

use jackboard_core::{Board, Color};

/// Settings for the self-play run.
struct PlayConfig {
    /// Stop after this many applied moves.
    max_plies: usize,
}

impl Default for PlayConfig {
    fn default() -> Self {
        Self { max_plies: 200 }
    }
}

impl PlayConfig {
    /// Read the optional ply limit from the first command-line argument.
    fn from_args(mut args: impl Iterator<Item = String>) -> Result<Self> {
        let mut config = Self::default();
        if let Some(arg) = args.next() {
            config.max_plies = arg
                .parse()
                .with_context(|| format!("invalid ply limit: {arg:?}"))?;
        }
        Ok(config)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let config = PlayConfig::from_args(std::env::args().skip(1))?;
    info!(max_plies = config.max_plies, "jackboard starting");

    let mut board = Board::new();
    let (_, events) = board.subscribe();

    // Plays the first generated move for the side to move each turn.
    while board.moves().len() < config.max_plies && !board.is_solution() {
        let side = board.side_to_move();
        let Some(mv) = board.possible_moves_for(side).into_iter().next() else {
            info!(%side, "no moves left");
            break;
        };
        board
            .apply_move(&mv)
            .with_context(|| format!("generated move {mv} was rejected"))?;
        for event in events.try_iter() {
            debug!(property = event.property, mv = %event.new_value, "board changed");
        }
    }

    info!(plies = board.moves().len(), solved = board.is_solution(), "finished");
    for color in Color::ALL {
        info!(%color, pieces = board.count(color), "remaining");
    }
    println!("{}", board.pretty());
    Ok(())
}
