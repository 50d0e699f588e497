//! Game flow on top of the board engine
//!
//! - [`player`]: participants, seats and the coin toss
//! - [`round`]: turn order, opening restrictions and round scoring
//! - [`tournament`]: scores carried across rounds
//! - [`save`]: the text save format

pub mod player;
pub mod round;
pub mod save;
pub mod tournament;

pub use player::{CoinFace, CoinToss, Participant, PlayerKind, Seat};
pub use round::{PlyOutcome, Round, RoundError, RoundPoints, RoundResult, RoundStatus, WinKind, CAPTURE_WIN_PAIRS};
pub use save::{PlayerRecord, SaveError, SaveState};
pub use tournament::{Standing, Tournament};
