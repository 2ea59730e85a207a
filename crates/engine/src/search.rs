use arrayvec::ArrayVec;

use twenty48_core::{Board, BoardError, SpawnStates};
use twenty48_types::{
    Action, Position, Score, Tile, FOUR_SPAWN_DENOMINATOR, FOUR_SPAWN_NUMERATOR, SPAWN_FOUR,
    SPAWN_TWO,
};

/// Board reached by one player action
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Successor {
    pub action: Action,
    pub board: Board,
    /// Score gained by the action's merges
    pub points: Score,
}

/// One spawn outcome of a chance node
#[derive(Debug, Clone, PartialEq)]
pub struct ChanceOutcome {
    pub at: Position,
    pub value: Tile,
    pub board: Board,
    pub probability: f64,
}

/// How likely each spawn value is at a chance node.
///
/// The core enumerates outcomes without weights; the weighting is a search
/// policy. The default matches `Board::spawn_tile` (2 with 2/3, 4 with 1/3).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpawnWeights {
    pub two: f64,
    pub four: f64,
}

impl Default for SpawnWeights {
    fn default() -> Self {
        let four = f64::from(FOUR_SPAWN_NUMERATOR) / f64::from(FOUR_SPAWN_DENOMINATOR);
        Self {
            two: 1.0 - four,
            four,
        }
    }
}

/// The board after `action`, without a spawn
pub fn successor(board: &Board, action: Action) -> Result<Successor, BoardError> {
    let mut next = board.duplicate();
    let outcome = next.apply_action(action, &mut ())?;
    Ok(Successor {
        action,
        board: next,
        points: outcome.points,
    })
}

/// One successor per valid action, in Up, Down, Left, Right order
pub fn successors(board: &Board) -> ArrayVec<Successor, 4> {
    board
        .valid_actions()
        .into_iter()
        .filter_map(|action| successor(board, action).ok())
        .collect()
}

/// Every spawn outcome with the default weights
pub fn chance_outcomes(board: &Board) -> Vec<ChanceOutcome> {
    chance_outcomes_with(board, SpawnWeights::default())
}

/// Every spawn outcome; each cell is equally likely, so a value's weight is
/// split evenly across the empty cells. Empty on a full board.
pub fn chance_outcomes_with(board: &Board, weights: SpawnWeights) -> Vec<ChanceOutcome> {
    let SpawnStates {
        positions,
        twos,
        fours,
    } = board.spawn_states();
    if positions.is_empty() {
        return Vec::new();
    }

    let cells = positions.len() as f64;
    let mut out = Vec::with_capacity(twos.len() + fours.len());
    for (value, family, weight) in [(SPAWN_TWO, twos, weights.two), (SPAWN_FOUR, fours, weights.four)] {
        out.extend(
            positions
                .iter()
                .zip(family)
                .map(|(&at, board)| ChanceOutcome {
                    at,
                    value,
                    board,
                    probability: weight / cells,
                }),
        );
    }
    out
}
