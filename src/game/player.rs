//! Tournament participants

use derive_more::{Display, IsVariant};
use rand::Rng;

use crate::board::Side;

/// Who supplies the moves for a participant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum PlayerKind {
    Human,
    Computer,
}

impl PlayerKind {
    #[inline]
    pub fn other(self) -> PlayerKind {
        match self {
            PlayerKind::Human => PlayerKind::Computer,
            PlayerKind::Computer => PlayerKind::Human,
        }
    }
}

/// A player across the rounds of a tournament
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub name: String,
    pub kind: PlayerKind,
    /// Points accumulated over finished rounds
    pub score: usize,
}

impl Participant {
    pub fn new(name: impl Into<String>, kind: PlayerKind) -> Self {
        Self {
            name: name.into(),
            kind,
            score: 0,
        }
    }

    pub fn human(name: impl Into<String>) -> Self {
        Self::new(name, PlayerKind::Human)
    }

    pub fn computer() -> Self {
        Self::new("Computer", PlayerKind::Computer)
    }
}

/// A participant's place in the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Seat {
    pub kind: PlayerKind,
    pub side: Side,
    /// Pairs captured during this round
    pub captured_pairs: usize,
}

impl Seat {
    pub fn new(kind: PlayerKind, side: Side) -> Self {
        Self {
            kind,
            side,
            captured_pairs: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IsVariant)]
pub enum CoinFace {
    Heads,
    Tails,
}

impl CoinFace {
    pub fn toss<R>(rng: &mut R) -> CoinFace
    where
        R: Rng + ?Sized,
    {
        if rng.random_bool(0.5) {
            CoinFace::Heads
        } else {
            CoinFace::Tails
        }
    }
}

/// Outcome of the toss that decides who opens a round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CoinToss {
    pub call: CoinFace,
    pub landed: CoinFace,
}

impl CoinToss {
    #[inline]
    pub fn human_won(self) -> bool {
        self.call == self.landed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg32;

    #[test]
    fn test_toss_lands_on_both_faces() {
        let mut rng = Pcg32::seed_from_u64(11);
        let faces: Vec<CoinFace> = (0..64).map(|_| CoinFace::toss(&mut rng)).collect();
        assert!(faces.iter().any(|f| f.is_heads()));
        assert!(faces.iter().any(|f| f.is_tails()));
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(PlayerKind::Human.to_string(), "Human");
        assert_eq!(PlayerKind::Computer.other(), PlayerKind::Human);
        assert_eq!(Participant::computer().name, "Computer");
    }
}
