//! A tournament: rounds between one human and the computer until the human
//! stops, with scores carried from round to round

use rand::Rng;
use tracing::info;

use super::player::{CoinFace, CoinToss, Participant, PlayerKind, Seat};
use super::round::{PlyOutcome, Round, RoundError};
use super::save::{PlayerRecord, SaveState};
use crate::board::{Board, Pos};
use crate::eval::{EvaluatedMove, MoveEvaluator};

/// Standing at the end of a tournament
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Standing {
    Leader(PlayerKind),
    Tie,
}

#[derive(Debug, Clone)]
pub struct Tournament {
    human: Participant,
    computer: Participant,
    round: Option<Round>,
    rounds_played: usize,
}

impl Tournament {
    pub fn new(human_name: impl Into<String>) -> Self {
        Self {
            human: Participant::human(human_name),
            computer: Participant::computer(),
            round: None,
            rounds_played: 0,
        }
    }

    /// Continue a saved game. Scores, captures, colours and turn order come
    /// from the save; the board is checked the same way as any bulk replace.
    pub fn from_save(human_name: impl Into<String>, state: &SaveState) -> Result<Self, RoundError> {
        let mut board = Board::new();
        board.set_board(&state.board)?;

        let record = |kind| match kind {
            PlayerKind::Human => state.human,
            PlayerKind::Computer => state.computer,
        };
        let seat = |kind, side| Seat {
            kind,
            side,
            captured_pairs: record(kind).captured_pairs,
        };
        let next = seat(state.next, state.next_side);
        let other = seat(state.next.other(), state.next_side.opponent());
        let round = Round::resume(board, next, other)?;

        let mut tournament = Self::new(human_name);
        tournament.human.score = state.human.score;
        tournament.computer.score = state.computer.score;
        tournament.round = Some(round);
        Ok(tournament)
    }

    pub fn participant(&self, kind: PlayerKind) -> &Participant {
        match kind {
            PlayerKind::Human => &self.human,
            PlayerKind::Computer => &self.computer,
        }
    }

    #[inline]
    pub fn score(&self, kind: PlayerKind) -> usize {
        self.participant(kind).score
    }

    #[inline]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[inline]
    pub fn rounds_played(&self) -> usize {
        self.rounds_played
    }

    /// Tied scores are settled by a coin toss before a round starts
    pub fn needs_coin_toss(&self) -> bool {
        self.human.score == self.computer.score
    }

    /// Start the next round.
    ///
    /// With tied scores `call` is the human's call of the coin toss and the
    /// winner of the toss goes first; otherwise the leader goes first and
    /// `call` is ignored.
    pub fn start_round<R>(&mut self, call: Option<CoinFace>, rng: &mut R) -> Result<Option<CoinToss>, RoundError>
    where
        R: Rng + ?Sized,
    {
        if self.round.as_ref().is_some_and(|round| !round.is_over()) {
            return Err(RoundError::RoundInProgress);
        }

        let (first, toss) = if self.needs_coin_toss() {
            let call = call.ok_or(RoundError::CoinTossRequired)?;
            let toss = CoinToss {
                call,
                landed: CoinFace::toss(rng),
            };
            let first = if toss.human_won() { PlayerKind::Human } else { PlayerKind::Computer };
            info!(%call, landed = %toss.landed, %first, "coin toss");
            (first, Some(toss))
        } else if self.human.score > self.computer.score {
            (PlayerKind::Human, None)
        } else {
            (PlayerKind::Computer, None)
        };

        self.round = Some(Round::new(first));
        Ok(toss)
    }

    fn round_mut(&mut self) -> Result<&mut Round, RoundError> {
        self.round.as_mut().ok_or(RoundError::NoActiveRound)
    }

    pub fn play_human(&mut self, label: &str) -> Result<PlyOutcome, RoundError> {
        let outcome = self.round_mut()?.play_human(label)?;
        self.record(&outcome);
        Ok(outcome)
    }

    pub fn play_human_at(&mut self, pos: Pos) -> Result<PlyOutcome, RoundError> {
        let outcome = self.round_mut()?.play_human_at(pos)?;
        self.record(&outcome);
        Ok(outcome)
    }

    pub fn play_computer<R>(&mut self, evaluator: &MoveEvaluator, rng: &mut R) -> Result<PlyOutcome, RoundError>
    where
        R: Rng + ?Sized,
    {
        let outcome = self.round_mut()?.play_computer(evaluator, rng)?;
        self.record(&outcome);
        Ok(outcome)
    }

    pub fn hint<R>(&self, evaluator: &MoveEvaluator, rng: &mut R) -> Result<EvaluatedMove, RoundError>
    where
        R: Rng + ?Sized,
    {
        self.round().ok_or(RoundError::NoActiveRound)?.hint(evaluator, rng)
    }

    /// Credit round points once the round is over
    fn record(&mut self, outcome: &PlyOutcome) {
        let Some(result) = &outcome.result else {
            return;
        };
        self.human.score += result.points_for(PlayerKind::Human);
        self.computer.score += result.points_for(PlayerKind::Computer);
        self.rounds_played += 1;
        info!(
            human = self.human.score,
            computer = self.computer.score,
            rounds = self.rounds_played,
            "scores updated"
        );
    }

    pub fn standing(&self) -> Standing {
        use std::cmp::Ordering;
        match self.human.score.cmp(&self.computer.score) {
            Ordering::Greater => Standing::Leader(PlayerKind::Human),
            Ordering::Less => Standing::Leader(PlayerKind::Computer),
            Ordering::Equal => Standing::Tie,
        }
    }

    /// Snapshot of the round in progress for saving
    pub fn save_state(&self) -> Result<SaveState, RoundError> {
        let round = self.round().ok_or(RoundError::NoActiveRound)?;
        if round.is_over() {
            return Err(RoundError::RoundOver);
        }

        let record = |kind| PlayerRecord {
            captured_pairs: round.seat(kind).captured_pairs,
            score: self.score(kind),
        };
        Ok(SaveState {
            board: round.board().snapshot_grid(),
            human: record(PlayerKind::Human),
            computer: record(PlayerKind::Computer),
            next: round.current().kind,
            next_side: round.current().side,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{Side, Stone, BOARD_SIZE};
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_tied_scores_need_a_call() {
        let mut tournament = Tournament::new("Ada");
        let mut rng = Pcg32::seed_from_u64(2);
        assert!(tournament.needs_coin_toss());
        assert!(matches!(
            tournament.start_round(None, &mut rng),
            Err(RoundError::CoinTossRequired)
        ));

        let toss = tournament.start_round(Some(CoinFace::Heads), &mut rng).unwrap().unwrap();
        let first = tournament.round().unwrap().current().kind;
        assert_eq!(first.is_human(), toss.human_won());
        assert_eq!(tournament.round().unwrap().current().side, Side::White);

        assert!(matches!(
            tournament.start_round(Some(CoinFace::Heads), &mut rng),
            Err(RoundError::RoundInProgress)
        ));
    }

    #[test]
    fn test_leader_goes_first() {
        let mut state = empty_save();
        state.computer.score = 3;
        let mut tournament = Tournament::from_save("Ada", &state).unwrap();
        tournament.round = None;

        let mut rng = Pcg32::seed_from_u64(0);
        assert_eq!(tournament.start_round(None, &mut rng).unwrap(), None);
        assert_eq!(tournament.round().unwrap().current().kind, PlayerKind::Computer);
        assert_eq!(tournament.standing(), Standing::Leader(PlayerKind::Computer));
    }

    fn empty_save() -> SaveState {
        let mut board = vec![vec![Stone::Empty; BOARD_SIZE]; BOARD_SIZE];
        board[9][9] = Stone::White;
        SaveState {
            board,
            human: PlayerRecord::default(),
            computer: PlayerRecord::default(),
            next: PlayerKind::Human,
            next_side: Side::Black,
        }
    }

    #[test]
    fn test_save_state_round_trip() {
        let mut state = empty_save();
        state.human = PlayerRecord {
            captured_pairs: 1,
            score: 4,
        };
        let tournament = Tournament::from_save("Ada", &state).unwrap();
        let round = tournament.round().unwrap();
        assert_eq!(round.current().kind, PlayerKind::Human);
        assert_eq!(round.current().side, Side::Black);
        assert_eq!(round.seat(PlayerKind::Computer).side, Side::White);
        assert_eq!(tournament.score(PlayerKind::Human), 4);

        assert_eq!(tournament.save_state().unwrap(), state);
    }

    #[test]
    fn test_from_save_rejects_winning_board() {
        let mut state = empty_save();
        for col in 0..5 {
            state.board[0][col] = Stone::Black;
        }
        assert!(matches!(
            Tournament::from_save("Ada", &state),
            Err(RoundError::Board(crate::error::BoardError::AlreadyWinningBoard))
        ));
    }

    #[test]
    fn test_full_round_against_itself() {
        // Both seats driven by the evaluator until the round ends
        let mut tournament = Tournament::new("Ada");
        let mut rng = Pcg32::seed_from_u64(2024);
        let eval = MoveEvaluator::default();
        tournament.start_round(Some(CoinFace::Tails), &mut rng).unwrap();

        let mut plies = 0;
        loop {
            let round = tournament.round().unwrap();
            let outcome = if round.current().kind.is_human() {
                let hint = tournament.hint(&eval, &mut rng).unwrap();
                tournament.play_human_at(hint.pos).unwrap()
            } else {
                tournament.play_computer(&eval, &mut rng).unwrap()
            };
            plies += 1;
            if let Some(result) = outcome.result {
                assert_eq!(
                    tournament.score(PlayerKind::Human) + tournament.score(PlayerKind::Computer),
                    result.points_for(PlayerKind::Human) + result.points_for(PlayerKind::Computer)
                );
                break;
            }
            assert!(plies < BOARD_SIZE * BOARD_SIZE * 2);
        }

        assert_eq!(tournament.rounds_played(), 1);
        assert!(matches!(tournament.save_state(), Err(RoundError::RoundOver)));
    }
}
