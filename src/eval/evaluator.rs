//! One-ply move evaluator
//!
//! Every empty intersection is tried twice, once for the mover and once for
//! its opponent. Each try is a real placement on a scratch board followed by
//! an undo, so captures and wins are resolved by the board engine itself.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::debug;

use super::weights::EvalWeights;
use crate::board::{Board, Pos, Side, Stone};
use crate::rules::WIN_LENGTH;

/// Why a move was scored the way it was
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum MoveReason {
    Unknown,
    Win,
    Capture,
    Build,
    BoardRestriction,
}

/// A candidate placement with its score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvaluatedMove {
    pub pos: Pos,
    pub score: i64,
    /// Side whose stone was simulated
    pub side: Side,
    pub reason: MoveReason,
}

impl EvaluatedMove {
    /// Rationale for playing this move, as seen by `mover`.
    ///
    /// A move evaluated for the other side is a block: "to prevent a win".
    pub fn describe(&self, mover: Side) -> String {
        let goal = match self.reason {
            MoveReason::Win => "win",
            MoveReason::Capture => "capture",
            MoveReason::Build => "build",
            MoveReason::BoardRestriction => return "because of a board restriction".to_string(),
            MoveReason::Unknown => return "with no clear advantage".to_string(),
        };
        if self.side == mover {
            format!("to {goal}")
        } else {
            format!("to prevent a {goal}")
        }
    }
}

/// Intersections three steps from the centre along the four axes, as
/// `(row, col)` offsets
const RING: [(i32, i32); 4] = [(-3, 0), (0, 3), (3, 0), (0, -3)];

#[derive(Debug, Clone, Default)]
pub struct MoveEvaluator {
    weights: EvalWeights,
}

impl MoveEvaluator {
    pub fn new(weights: EvalWeights) -> Self {
        Self { weights }
    }

    /// Map a score onto its classification
    pub fn classify(&self, score: i64) -> MoveReason {
        if score >= self.weights.win {
            MoveReason::Win
        } else if score >= self.weights.capture {
            MoveReason::Capture
        } else if score > 0 {
            MoveReason::Build
        } else {
            MoveReason::Unknown
        }
    }

    /// Score the most recent placement on `board` from the point of view of
    /// `mover`.
    ///
    /// # Arguments
    /// * `board` - Board right after the placement being scored
    /// * `mover` - Side whose turn it really is; only its own stones are
    ///   penalised for exposing a pair to capture
    ///
    /// # Returns
    /// `None` when the board has no last move.
    pub fn evaluate(&self, board: &Board, mover: Side) -> Option<EvaluatedMove> {
        let pos = board.last_move_position()?;
        let side = board.get(pos).side()?;
        let w = &self.weights;

        let wins = board.winning_lines_of_last_move() as i64;
        let mut score = w.win * wins;

        // Shorter lines are credited on top of the longer ones already seen;
        // lines that are part of a completed five are not
        let mut block = 0i64;
        for n in (2..WIN_LENGTH).rev() {
            block += board.count_lines_at(n, pos) as i64 - wins;
            let weight = (n * n) as i64;
            score += w.build * block * weight;
        }

        if side == mover && score < w.win {
            score -= w.capture_risk * board.count_potential_captures(side, pos) as i64;
        }

        score += w.capture * board.captured_pairs_of_last_move() as i64;

        Some(EvaluatedMove {
            pos,
            score,
            side,
            reason: self.classify(score),
        })
    }

    /// Place for `side`, score, and take the stone back
    fn simulate(&self, board: &mut Board, side: Side, mover: Side, pos: Pos) -> Option<EvaluatedMove> {
        board.place_at(side, pos).ok()?;
        let evaluated = self.evaluate(board, mover);
        let undone = board.undo();
        debug_assert!(undone.is_ok(), "simulated placement at {pos} was not taken back");
        evaluated
    }

    /// Pick the move `mover` should play next.
    ///
    /// The best move for the mover is compared with the best move for the
    /// opponent: a winning move is played outright, otherwise the higher
    /// score wins and equal scores favour blocking the opponent. Remaining
    /// ties are broken with `rng`. Opening restrictions then override the
    /// classification, and for the ring opening also the position.
    ///
    /// `board` is never modified. Returns `None` when no placement is legal.
    pub fn recommend_move<R>(&self, board: &Board, mover: Side, rng: &mut R) -> Option<EvaluatedMove>
    where
        R: Rng + ?Sized,
    {
        let opponent = mover.opponent();
        let mut scratch = board.clone();

        let mut ours: Option<EvaluatedMove> = None;
        let mut theirs: Option<EvaluatedMove> = None;
        let mut top = Vec::new();

        let candidates: Vec<Pos> = board
            .grid()
            .positions()
            .filter(|&pos| board.get(pos) == Stone::Empty)
            .collect();

        for pos in candidates {
            let Some(our_move) = self.simulate(&mut scratch, mover, mover, pos) else {
                continue;
            };
            let Some(their_move) = self.simulate(&mut scratch, opponent, mover, pos) else {
                continue;
            };

            if improves(ours, our_move) {
                ours = Some(our_move);
                top.push(our_move);
            }
            if improves(theirs, their_move) {
                theirs = Some(their_move);
                top.push(their_move);
            }
        }

        let (ours, theirs) = (ours?, theirs?);
        if ours.reason.is_win() {
            debug!(%mover, pos = %ours.pos, score = ours.score, "winning move");
            return Some(ours);
        }

        let mut best = if ours.score > theirs.score { ours } else { theirs };
        top.retain(|m| m.score == best.score);
        if top.len() > 1 {
            if let Some(&pick) = top.choose(rng) {
                best = pick;
            }
        }

        if board.outer_bounds() == 0 {
            best.reason = MoveReason::BoardRestriction;
        }
        if board.inner_bounds() == 3 {
            best.reason = MoveReason::BoardRestriction;
            best.side = mover;
            if let Some(&ring) = ring_positions(board).choose(rng) {
                best.pos = ring;
            }
        }

        debug!(
            %mover,
            pos = %best.pos,
            score = best.score,
            reason = ?best.reason,
            ties = top.len(),
            "recommended move"
        );
        Some(best)
    }
}

#[inline]
fn improves(best: Option<EvaluatedMove>, candidate: EvaluatedMove) -> bool {
    match best {
        Some(best) => candidate.score >= best.score,
        None => true,
    }
}

/// Ring intersections that can still be played
fn ring_positions(board: &Board) -> Vec<Pos> {
    let grid = board.grid();
    let center = grid.center();
    RING.iter()
        .filter_map(|&delta| grid.offset(center, delta, 1))
        .filter(|&pos| board.can_place(pos).is_ok())
        .collect()
}
