//! Board-level failures

use derive_more::{Display, Error, From};

use crate::board::ParsePosError;

/// Every way a board operation can be refused.
///
/// A refused operation leaves the board exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error, From)]
pub enum BoardError {
    #[display("cannot read move: {_0}")]
    #[from]
    Parse(ParsePosError),
    #[display("position is off the board")]
    OutOfBounds,
    #[display("position is not allowed by the current distance restriction")]
    BoundsRestricted,
    #[display("position is already occupied")]
    Occupied,
    #[display("the game is already over")]
    GameAlreadyOver,
    #[display("the board is full")]
    FullBoard,
    #[display("there is no move to undo")]
    NoPriorMoves,
    #[display("board does not have the expected dimensions")]
    InvalidBoardShape,
    #[display("board already contains five in a row")]
    AlreadyWinningBoard,
    #[display("distance restriction must lie between 0 and the board size")]
    InvalidBounds,
}
