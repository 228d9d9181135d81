use log::debug;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::ai::eval::evaluate;
use crate::board::{Board, Side};
use crate::types::{Difficulty, Position};

/// Sentinel for a decided game. Larger than any heuristic value so real
/// wins and losses dominate ancestor comparisons.
const WIN_SCORE: f64 = 100_000.0;

/// Depth-limited minimax without pruning.
///
/// `perspective` is the side the whole search scores for; it stays fixed
/// all the way down, both for leaf evaluation and for the terminal
/// sentinels. `maximizing` says whether the node to move is `perspective`
/// itself. A side with no moves passes: the recursion advances one ply on
/// the unchanged board with the flag flipped.
pub fn minimax(
    board: &Board,
    depth: u8,
    max_depth: u8,
    maximizing: bool,
    perspective: Side,
) -> f64 {
    if depth == max_depth {
        return evaluate(board, perspective);
    }

    let (dark, light) = board.count();
    let (own, opp) = match perspective {
        Side::Dark => (dark, light),
        Side::Light => (light, dark),
    };
    if board.is_full() || own == 0 || opp == 0 {
        return if own > opp {
            WIN_SCORE
        } else if own < opp {
            -WIN_SCORE
        } else {
            0.0
        };
    }

    let to_move = if maximizing {
        perspective
    } else {
        perspective.opponent()
    };
    let moves = board.legal_moves(to_move);
    if moves.is_empty() {
        // Forced pass: no disc placed, only the side flag flips.
        return minimax(board, depth + 1, max_depth, !maximizing, perspective);
    }

    let mut best = if maximizing { -WIN_SCORE } else { WIN_SCORE };
    for mv in moves {
        let mut next = *board;
        next.apply_move(mv.row as usize, mv.col as usize, to_move);
        let value = minimax(&next, depth + 1, max_depth, !maximizing, perspective);
        best = if maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }
    best
}

/// Expands every legal move for `side` and keeps the one whose
/// `max_depth`-ply search value is strictly greatest, so the first-seen
/// move wins ties. Returns `None` only when `side` has no legal move.
pub fn best_move(board: &Board, side: Side, max_depth: u8) -> Option<Position> {
    let mut best: Option<(Position, f64)> = None;

    for mv in board.legal_moves(side) {
        let mut next = *board;
        next.apply_move(mv.row as usize, mv.col as usize, side);
        let value = minimax(&next, 0, max_depth, false, side);

        let better = match best {
            None => true,
            Some((_, best_value)) => value > best_value,
        };
        if better {
            best = Some((mv, value));
        }
    }

    best.map(|(mv, _)| mv)
}

/// Move suggestion for whichever side asks: the Intermediate policy.
pub fn hint(board: &Board, side: Side) -> Option<Position> {
    best_move(board, side, 2)
}

/// Per-difficulty move choice. Owns the random source used by the
/// Beginner tier; seed it for reproducible games.
pub struct Strategist {
    rng: StdRng,
}

impl Strategist {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Caller contract: `board` must have at least one legal move for
    /// `side`; otherwise `None` comes back and no policy ran.
    pub fn choose_move(
        &mut self,
        board: &Board,
        side: Side,
        difficulty: Difficulty,
    ) -> Option<Position> {
        let chosen = match difficulty {
            Difficulty::Beginner => self.random_move(board, side),
            Difficulty::Intermediate => best_move(board, side, 2),
            Difficulty::Expert => best_move(board, side, 4),
        };
        debug!("{difficulty:?} picked {chosen:?} for {side:?}");
        chosen
    }

    fn random_move(&mut self, board: &Board, side: Side) -> Option<Position> {
        let moves = board.legal_moves(side);
        if moves.is_empty() {
            return None;
        }
        let pick = self.rng.gen_range(0..moves.len());
        Some(moves[pick])
    }
}

impl Default for Strategist {
    fn default() -> Self {
        Self::new()
    }
}
