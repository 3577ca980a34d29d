//! Agents: pluggable decision makers for the automated opponent.
//!
//! The game asks an [`OpponentStrategy`] for two things only: which two cards
//! go to the crib and which card to peg next. The state machine validates the
//! answers, so strategies stay free of rule bookkeeping.

use crate::cards::Card;
use crate::hand::{is_legal_play, Hand};

/// What a strategy can see of the pegging pile when it must play.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PileState<'a> {
    /// Cards played since the count last reset, oldest first.
    pub pile: &'a [Card],
    /// Running value total of `pile`.
    pub count: u8,
}

impl<'a> PileState<'a> {
    pub fn new(pile: &'a [Card], count: u8) -> Self {
        Self { pile, count }
    }
}

/// Decisions the automated player makes during a hand.
///
/// `choose_discards` receives the six dealt cards and must return two of
/// them. `choose_play` is only called when at least one card in `hand` keeps
/// the count at or under 31 and must return such a card. Returning anything
/// else is a bug the game treats as fatal.
pub trait OpponentStrategy {
    fn choose_discards(&mut self, hand: &Hand) -> [Card; 2];
    fn choose_play(&mut self, hand: &Hand, pile: PileState<'_>) -> Card;
    /// Short name used in logs.
    fn name(&self) -> &'static str {
        "opponent"
    }
}

mod bots;

pub use bots::{BotAgent, BotProfile, Difficulty};

/// Baseline strategy: the first two cards go to the crib and the first card
/// that fits under 31 is played.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstLegal;

impl OpponentStrategy for FirstLegal {
    fn choose_discards(&mut self, hand: &Hand) -> [Card; 2] {
        let mut cards = hand.cards();
        match (cards.next(), cards.next()) {
            (Some(a), Some(b)) => [a, b],
            _ => panic!("cannot discard two cards from a hand of {}", hand.remaining()),
        }
    }

    fn choose_play(&mut self, hand: &Hand, pile: PileState<'_>) -> Card {
        match hand.cards().find(|c| is_legal_play(*c, pile.count)) {
            Some(card) => card,
            None => panic!("no legal play at count {}", pile.count),
        }
    }

    fn name(&self) -> &'static str {
        "first-legal"
    }
}
