//! Game construction parameters.

use crate::agents::{BotAgent, BotProfile, Difficulty, FirstLegal, OpponentStrategy};

/// Which strategy drives the automated opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[non_exhaustive]
pub enum OpponentKind {
    /// First two cards to the crib, first legal card in play.
    #[default]
    FirstLegal,
    Bot(Difficulty),
}

impl OpponentKind {
    /// Build the strategy. Bots derive their own seed from `seed` so a seeded
    /// game replays the same opponent decisions.
    pub fn build(self, seed: Option<u64>) -> Box<dyn OpponentStrategy> {
        match self {
            OpponentKind::FirstLegal => Box::new(FirstLegal),
            OpponentKind::Bot(difficulty) => {
                let mut profile = BotProfile::for_difficulty(difficulty);
                if let Some(seed) = seed {
                    profile = profile.with_seed(seed.rotate_left(17) ^ 0x5eed);
                }
                Box::new(BotAgent::new(profile))
            }
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[non_exhaustive]
pub struct GameConfig {
    /// Seed for the deck (and a seeded bot). `None` draws from entropy.
    pub seed: Option<u64>,
    pub opponent: OpponentKind,
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_opponent(mut self, opponent: OpponentKind) -> Self {
        self.opponent = opponent;
        self
    }
}
