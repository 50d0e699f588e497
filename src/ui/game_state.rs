//! Game state management for the Pente GUI

use std::path::PathBuf;

use anyhow::Context as _;
use rand_pcg::Pcg32;
use tracing::{info, warn};

use crate::board::{Pos, Side};
use crate::config::PenteConfig;
use crate::eval::{EvaluatedMove, MoveEvaluator};
use crate::game::{save, CoinFace, CoinToss, PlayerKind, PlyOutcome, RoundError, RoundResult, Tournament, WinKind};

/// Where the tournament currently stands from the window's point of view
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::IsVariant)]
pub enum Phase {
    /// Scores are tied and the human has to call the coin
    CoinToss,
    Playing,
    /// The round ended; the human picks another round or stops
    RoundOver,
    TournamentOver,
}

pub struct GameState {
    pub tournament: Tournament,
    pub phase: Phase,
    pub message: Option<String>,
    /// Rationale of the computer's most recent move
    pub last_rationale: Option<String>,
    pub hint: Option<EvaluatedMove>,
    pub last_toss: Option<CoinToss>,
    evaluator: MoveEvaluator,
    rng: Pcg32,
    save_dir: PathBuf,
}

impl GameState {
    pub fn new(config: &PenteConfig, rng: Pcg32) -> Self {
        let mut state = Self {
            tournament: Tournament::new(config.player_name.clone()),
            phase: Phase::CoinToss,
            message: None,
            last_rationale: None,
            hint: None,
            last_toss: None,
            evaluator: MoveEvaluator::new(config.weights),
            rng,
            save_dir: config.save_dir.clone(),
        };
        state.next_round();
        state
    }

    #[inline]
    pub fn round_result(&self) -> Option<&RoundResult> {
        self.tournament.round().and_then(|round| round.result())
    }

    /// Side to move in the current round
    pub fn current_side(&self) -> Option<Side> {
        self.tournament.round().map(|round| round.current().side)
    }

    pub fn is_human_turn(&self) -> bool {
        self.phase.is_playing()
            && self
                .tournament
                .round()
                .is_some_and(|round| round.current().kind.is_human())
    }

    pub fn is_computer_turn(&self) -> bool {
        self.phase.is_playing()
            && self
                .tournament
                .round()
                .is_some_and(|round| round.current().kind.is_computer())
    }

    /// Start another round, or wait for a coin call when scores are tied
    pub fn next_round(&mut self) {
        if self.tournament.needs_coin_toss() {
            self.phase = Phase::CoinToss;
            return;
        }
        match self.tournament.start_round(None, &mut self.rng) {
            Ok(_) => self.begin_playing(),
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn call_coin(&mut self, call: CoinFace) {
        match self.tournament.start_round(Some(call), &mut self.rng) {
            Ok(toss) => {
                self.last_toss = toss;
                self.begin_playing();
                if let Some(toss) = toss {
                    let first = if toss.human_won() { "you go" } else { "the computer goes" };
                    self.message = Some(format!("You called {}, the coin landed {}: {first} first", toss.call, toss.landed));
                }
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn end_tournament(&mut self) {
        info!(
            human = self.tournament.score(PlayerKind::Human),
            computer = self.tournament.score(PlayerKind::Computer),
            rounds = self.tournament.rounds_played(),
            "tournament over"
        );
        self.phase = Phase::TournamentOver;
    }

    fn begin_playing(&mut self) {
        self.phase = Phase::Playing;
        self.hint = None;
        self.last_rationale = None;
        self.message = None;
    }

    /// Attempt to place the human's stone at the given position
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), RoundError> {
        let outcome = self.tournament.play_human_at(pos)?;
        self.apply(&outcome);
        Ok(())
    }

    /// Play the computer's move if it is the computer's turn
    pub fn play_computer_turn(&mut self) {
        if !self.is_computer_turn() {
            return;
        }
        match self.tournament.play_computer(&self.evaluator, &mut self.rng) {
            Ok(outcome) => {
                if let Some(chosen) = outcome.computer_move {
                    self.last_rationale = Some(format!("Played {} {}", chosen.pos, chosen.describe(outcome.side)));
                }
                self.apply(&outcome);
            }
            Err(err) => {
                warn!(%err, "computer could not move");
                self.message = Some(err.to_string());
            }
        }
    }

    fn apply(&mut self, outcome: &PlyOutcome) {
        self.hint = None;
        self.message = None;
        if outcome.captured_pairs > 0 {
            let who = self.tournament.participant(outcome.player).name.clone();
            self.message = Some(format!("{who} captured {} pair(s) at {}", outcome.captured_pairs, outcome.pos));
        }
        if let Some(result) = &outcome.result {
            self.message = Some(self.describe_result(result));
            self.phase = Phase::RoundOver;
        }
    }

    pub fn describe_result(&self, result: &RoundResult) -> String {
        let Some(winner) = result.winner else {
            return "The board is full, the round is a tie".to_string();
        };
        let name = &self.tournament.participant(winner).name;
        match result.win {
            Some(WinKind::FiveInRow { lines }) if lines > 1 => format!("{name} wins with {lines} fives in a row"),
            Some(WinKind::FiveInRow { .. }) => format!("{name} wins with five in a row"),
            Some(WinKind::Captures) => format!("{name} wins by capturing five pairs"),
            None => format!("{name} wins"),
        }
    }

    /// Ask the evaluator what it would play for the human
    pub fn request_hint(&mut self) {
        if !self.is_human_turn() {
            return;
        }
        match self.tournament.hint(&self.evaluator, &mut self.rng) {
            Ok(hint) => {
                let side = hint.side;
                let mover = self.current_side().unwrap_or(side);
                self.message = Some(format!("Try {} {}", hint.pos, hint.describe(mover)));
                self.hint = Some(hint);
            }
            Err(err) => self.message = Some(err.to_string()),
        }
    }

    pub fn save(&mut self, name: &str) -> anyhow::Result<PathBuf> {
        let state = self.tournament.save_state().context("Nothing to save")?;
        let path = save::save(&self.save_dir, name, &state)
            .with_context(|| format!("Failed to save game as {name:?}"))?;
        self.message = Some(format!("Saved to {}", path.display()));
        Ok(path)
    }

    pub fn load(&mut self, name: &str) -> anyhow::Result<()> {
        let state = save::load(&self.save_dir, name).with_context(|| format!("Failed to load {name:?}"))?;
        let human_name = self.tournament.participant(PlayerKind::Human).name.clone();
        self.tournament = Tournament::from_save(human_name, &state).with_context(|| format!("Cannot resume {name:?}"))?;
        self.begin_playing();
        self.message = Some(format!("Loaded {name}"));
        Ok(())
    }

    /// Names of the saved games, empty when the directory cannot be read
    pub fn saved_games(&self) -> Vec<String> {
        match save::list(&self.save_dir) {
            Ok(names) => names,
            Err(err) => {
                warn!(%err, dir = %self.save_dir.display(), "cannot list saved games");
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use tempfile::{tempdir, TempDir};

    fn config(dir: &TempDir) -> PenteConfig {
        PenteConfig {
            save_dir: dir.path().to_path_buf(),
            player_name: "Ada".to_string(),
            ..PenteConfig::default()
        }
    }

    #[test]
    fn test_starts_with_coin_toss() {
        let mut state = GameState::new(&config(&tempdir().unwrap()), Pcg32::seed_from_u64(3));
        assert!(state.phase.is_coin_toss());
        assert!(!state.is_human_turn());

        state.call_coin(CoinFace::Heads);
        assert!(state.phase.is_playing());
        assert!(state.last_toss.is_some());
        assert_ne!(state.is_human_turn(), state.is_computer_turn());
    }

    #[test]
    fn test_computer_answers_human() {
        let mut state = GameState::new(&config(&tempdir().unwrap()), Pcg32::seed_from_u64(5));
        state.call_coin(CoinFace::Tails);
        if state.is_computer_turn() {
            state.play_computer_turn();
            assert!(state.last_rationale.is_some());
        }
        assert!(state.is_human_turn());

        state.request_hint();
        let hint = state.hint.unwrap();
        state.try_place_stone(hint.pos).unwrap();
        assert!(state.hint.is_none());
        assert!(state.is_computer_turn());

        state.play_computer_turn();
        assert!(state.is_human_turn());
        assert!(matches!(
            state.try_place_stone(Pos::new(9, 9)),
            Err(RoundError::Board(_))
        ));
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = tempdir().unwrap();
        let cfg = config(&temp_dir);
        let mut state = GameState::new(&cfg, Pcg32::seed_from_u64(8));
        state.call_coin(CoinFace::Heads);
        state.play_computer_turn();
        let stones = state.tournament.round().unwrap().board().stone_count();

        state.save("checkpoint").unwrap();
        assert!(state.save("checkpoint").is_err());
        assert_eq!(state.saved_games(), vec!["checkpoint.txt".to_string()]);

        let mut other = GameState::new(&cfg, Pcg32::seed_from_u64(9));
        other.load("checkpoint").unwrap();
        assert!(other.phase.is_playing());
        assert_eq!(other.tournament.round().unwrap().board().stone_count(), stones);
        assert!(other.is_human_turn());
    }
}
