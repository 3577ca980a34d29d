use crate::cards::{parse_cards, Card};
use std::collections::HashSet;
use std::str::FromStr;

/// Cards dealt to each player.
pub const DEALT_CARDS: usize = 6;
/// Cards kept by each player once the crib is formed.
pub const HAND_SIZE: usize = 4;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum HandError {
    #[error("duplicate cards in hand")]
    DuplicateCards,
    #[error("too many cards for a hand: {0}")]
    TooManyCards(usize),
    #[error("card parse error: {0}")]
    CardParse(String),
}

/// A player's hand as a fixed number of slots.
///
/// Real cards are dealt in ascending rank order. Playing a card empties its
/// slot without shifting the others, so 1-based slot numbers stay stable for
/// the whole pegging phase.
///
/// ```
/// use cribbage_rs::hand::Hand;
///
/// let mut hand: Hand = "Kh 5d 5c Jh".parse().unwrap();
/// assert_eq!(hand.get(0).unwrap().to_string(), "5c");
/// assert!(hand.take(0).is_some());
/// assert_eq!(hand.remaining(), 3);
/// assert_eq!(hand.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Hand {
    slots: Vec<Option<Card>>,
}

impl Hand {
    /// Build a hand from dealt cards, sorted ascending by rank.
    pub fn dealt(mut cards: Vec<Card>) -> Self {
        cards.sort();
        Self { slots: cards.into_iter().map(Some).collect() }
    }

    /// Hand with `n` empty slots.
    pub fn empty(n: usize) -> Self {
        Self { slots: vec![None; n] }
    }

    pub fn try_from_cards(cards: Vec<Card>) -> Result<Self, HandError> {
        if cards.len() > DEALT_CARDS {
            return Err(HandError::TooManyCards(cards.len()));
        }
        let set: HashSet<Card> = cards.iter().copied().collect();
        if set.len() != cards.len() {
            return Err(HandError::DuplicateCards);
        }
        Ok(Self::dealt(cards))
    }

    /// Number of slots, occupied or not.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of slots still holding a card.
    pub fn remaining(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn slots(&self) -> &[Option<Card>] {
        &self.slots
    }

    /// Card at a 0-based slot, if the slot exists and is occupied.
    pub fn get(&self, index: usize) -> Option<Card> {
        self.slots.get(index).copied().flatten()
    }

    /// Remaining cards in slot order.
    pub fn cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.slots.iter().filter_map(|s| *s)
    }

    /// Empty a 0-based slot and return its card.
    pub fn take(&mut self, index: usize) -> Option<Card> {
        self.slots.get_mut(index).and_then(Option::take)
    }

    /// 0-based slot holding `card`.
    pub fn position(&self, card: Card) -> Option<usize> {
        self.slots.iter().position(|s| *s == Some(card))
    }

    /// Whether some remaining card keeps the pegging count at or under 31.
    pub fn has_legal_play(&self, count: u8) -> bool {
        self.cards().any(|c| is_legal_play(c, count))
    }
}

/// A card may be played while it keeps the pegging count at or under 31.
pub fn is_legal_play(card: Card, count: u8) -> bool {
    u16::from(card.value()) + u16::from(count) <= 31
}

impl FromStr for Hand {
    type Err = HandError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let cards = parse_cards(s).map_err(|e| HandError::CardParse(e.to_string()))?;
        Hand::try_from_cards(cards)
    }
}
