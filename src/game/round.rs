//! One round of Pente between a human and the computer
//!
//! The round owns the board, alternates turns, applies the opening
//! restrictions and decides when the round is over:
//! - a completed five wins
//! - five captured pairs win
//! - a full board with no winner is a tie

use derive_more::{Display, Error, From, IsVariant};
use rand::Rng;
use tracing::{info, warn};

use super::player::{PlayerKind, Seat};
use crate::board::{Board, Pos, Side};
use crate::error::BoardError;
use crate::eval::{EvaluatedMove, MoveEvaluator};

/// Captured pairs that win a round outright
pub const CAPTURE_WIN_PAIRS: usize = 5;
/// Points for each five in a row completed by the winning move
pub const POINTS_PER_FIVE: usize = 5;
/// Length of the uninterrupted lines worth one point at the end of a round
pub const STRAIGHT_STONES: usize = 4;
/// Minimum distance from the centre for White's second stone
pub const SECOND_MOVE_DISTANCE: usize = 3;
/// Ply assumed for a resumed game in which somebody has already captured
const RESUMED_PLY: usize = 3;

#[derive(Debug, Display, Error, From)]
pub enum RoundError {
    #[display("{_0}")]
    #[from]
    Board(BoardError),
    #[display("it is not your turn")]
    NotYourTurn,
    #[display("the round is already over")]
    RoundOver,
    #[display("the previous round is still being played")]
    RoundInProgress,
    #[display("no round has been started")]
    NoActiveRound,
    #[display("players must be one human and one computer on opposite colors")]
    InvalidPlayers,
    #[display("scores are tied, the coin toss must be called")]
    CoinTossRequired,
    #[display("no legal move is available")]
    NoMoveAvailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, IsVariant)]
pub enum WinKind {
    FiveInRow { lines: usize },
    Captures,
}

/// Points earned by one player in a finished round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundPoints {
    pub kind: PlayerKind,
    pub side: Side,
    /// Winner only: five per completed line
    pub five: usize,
    /// One per captured pair
    pub captures: usize,
    /// One per uninterrupted four left on the board
    pub fours: usize,
}

impl RoundPoints {
    #[inline]
    pub fn total(&self) -> usize {
        self.five + self.captures + self.fours
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundResult {
    /// `None` for a tie on a full board
    pub winner: Option<PlayerKind>,
    pub win: Option<WinKind>,
    pub points: [RoundPoints; 2],
}

impl RoundResult {
    pub fn points_for(&self, kind: PlayerKind) -> usize {
        self.points
            .iter()
            .filter(|p| p.kind == kind)
            .map(RoundPoints::total)
            .sum()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, IsVariant)]
pub enum RoundStatus {
    InProgress,
    Finished(RoundResult),
}

/// What happened during one ply
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlyOutcome {
    pub player: PlayerKind,
    pub side: Side,
    pub pos: Pos,
    pub captured_pairs: usize,
    /// The computer's evaluation when it chose the move
    pub computer_move: Option<EvaluatedMove>,
    /// Set when this ply ended the round
    pub result: Option<RoundResult>,
}

#[derive(Debug, Clone)]
pub struct Round {
    board: Board,
    /// Turn order: `seats[current]` moves next
    seats: [Seat; 2],
    current: usize,
    ply: usize,
    status: RoundStatus,
}

impl Round {
    /// Start a fresh round. `first` plays White and opens at the centre.
    pub fn new(first: PlayerKind) -> Self {
        let mut round = Self {
            board: Board::new(),
            seats: [Seat::new(first, Side::White), Seat::new(first.other(), Side::Black)],
            current: 0,
            ply: 0,
            status: RoundStatus::InProgress,
        };
        round.restrict();
        info!(%first, "round started");
        round
    }

    /// Continue a saved round with `next` to move.
    ///
    /// The exact ply count is not saved: any capture means the opening is
    /// over, otherwise the stones on the board are counted.
    pub fn resume(board: Board, next: Seat, other: Seat) -> Result<Self, RoundError> {
        if next.kind == other.kind || next.side == other.side {
            return Err(RoundError::InvalidPlayers);
        }
        if board.is_game_over() {
            return Err(RoundError::RoundOver);
        }

        let ply = if next.captured_pairs > 0 || other.captured_pairs > 0 {
            RESUMED_PLY
        } else {
            board.stone_count()
        };

        let mut round = Self {
            board,
            seats: [next, other],
            current: 0,
            ply,
            status: RoundStatus::InProgress,
        };
        round.restrict();
        info!(next = %next.kind, ply, "round resumed");
        Ok(round)
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn ply(&self) -> usize {
        self.ply
    }

    #[inline]
    pub fn status(&self) -> &RoundStatus {
        &self.status
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_finished()
    }

    pub fn result(&self) -> Option<&RoundResult> {
        match &self.status {
            RoundStatus::Finished(result) => Some(result),
            RoundStatus::InProgress => None,
        }
    }

    /// Seat whose turn it is
    #[inline]
    pub fn current(&self) -> &Seat {
        &self.seats[self.current]
    }

    /// Seat that moves after the current one
    #[inline]
    pub fn next(&self) -> &Seat {
        &self.seats[1 - self.current]
    }

    pub fn seat(&self, kind: PlayerKind) -> &Seat {
        if self.seats[0].kind == kind {
            &self.seats[0]
        } else {
            &self.seats[1]
        }
    }

    /// Play the human's move given as a label such as `K10`
    pub fn play_human(&mut self, label: &str) -> Result<PlyOutcome, RoundError> {
        self.ensure_turn(PlayerKind::Human)?;
        let pos = self.board.parse_position(label)?;
        self.commit(pos, None)
    }

    /// Play the human's move at an already resolved position
    pub fn play_human_at(&mut self, pos: Pos) -> Result<PlyOutcome, RoundError> {
        self.ensure_turn(PlayerKind::Human)?;
        self.commit(pos, None)
    }

    /// Let the computer choose and play its move
    pub fn play_computer<R>(&mut self, evaluator: &MoveEvaluator, rng: &mut R) -> Result<PlyOutcome, RoundError>
    where
        R: Rng + ?Sized,
    {
        self.ensure_turn(PlayerKind::Computer)?;
        let side = self.current().side;
        let chosen = evaluator
            .recommend_move(&self.board, side, rng)
            .ok_or(RoundError::NoMoveAvailable)?;
        info!(pos = %chosen.pos, reason = %chosen.describe(side), "computer move");
        self.commit(chosen.pos, Some(chosen))
    }

    /// The move the computer would play for whoever is to move
    pub fn hint<R>(&self, evaluator: &MoveEvaluator, rng: &mut R) -> Result<EvaluatedMove, RoundError>
    where
        R: Rng + ?Sized,
    {
        if self.is_over() {
            return Err(RoundError::RoundOver);
        }
        evaluator
            .recommend_move(&self.board, self.current().side, rng)
            .ok_or(RoundError::NoMoveAvailable)
    }

    fn ensure_turn(&self, kind: PlayerKind) -> Result<(), RoundError> {
        if self.is_over() {
            return Err(RoundError::RoundOver);
        }
        if self.current().kind != kind {
            return Err(RoundError::NotYourTurn);
        }
        Ok(())
    }

    fn commit(&mut self, pos: Pos, computer_move: Option<EvaluatedMove>) -> Result<PlyOutcome, RoundError> {
        let seat = self.seats[self.current];
        self.board.place_at(seat.side, pos)?;

        let captured_pairs = self.board.captured_pairs_of_last_move();
        self.seats[self.current].captured_pairs += captured_pairs;

        let result = self.check_end();
        match &result {
            Some(result) => {
                info!(winner = ?result.winner, win = ?result.win, "round over");
                self.status = RoundStatus::Finished(result.clone());
            }
            None => {
                self.current = 1 - self.current;
                self.ply += 1;
                self.restrict();
            }
        }

        Ok(PlyOutcome {
            player: seat.kind,
            side: seat.side,
            pos,
            captured_pairs,
            computer_move,
            result,
        })
    }

    /// A win by the player who just moved takes priority over a full board
    fn check_end(&self) -> Option<RoundResult> {
        let lines = self.board.winning_lines_of_last_move();
        let win = if lines > 0 {
            Some(WinKind::FiveInRow { lines })
        } else if self.current().captured_pairs >= CAPTURE_WIN_PAIRS {
            Some(WinKind::Captures)
        } else {
            None
        };

        if win.is_none() && !self.board.is_board_full() {
            return None;
        }
        Some(self.tally(win))
    }

    /// Score a finished round; `win` is credited to the player who just moved
    fn tally(&self, win: Option<WinKind>) -> RoundResult {
        let winner = win.map(|_| self.current().kind);
        let lines = match win {
            Some(WinKind::FiveInRow { lines }) => lines,
            _ => 0,
        };

        let points = self.seats.map(|seat| RoundPoints {
            kind: seat.kind,
            side: seat.side,
            five: if winner == Some(seat.kind) { lines * POINTS_PER_FIVE } else { 0 },
            captures: seat.captured_pairs,
            fours: self.board.count_uninterrupted(STRAIGHT_STONES, seat.side),
        });

        RoundResult { winner, win, points }
    }

    /// Opening restrictions by ply: White's first stone on the centre,
    /// White's second stone at least three away from it
    fn restrict(&mut self) {
        let size = self.board.size();
        let (inner, outer) = match self.ply {
            0 => (0, 0),
            2 => (SECOND_MOVE_DISTANCE, size),
            _ => (0, size),
        };
        if let Err(err) = self.board.set_bounds(inner, outer) {
            warn!(%err, inner, outer, "could not restrict the board");
        }
    }
}
