use crate::cards::{Card, Rank};
use crate::hand::HAND_SIZE;
use crate::scoring::combinations::{subsets_of_at_least, Combinations};
use crate::scoring::rank_counts::RankCounts;
use crate::scoring::runs::{is_run, is_run_at};
use crate::scoring::ScoreEvent;

/// Which four cards are being counted. The crib only scores a flush when the
/// up-card matches too.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CountKind {
    Hand,
    Crib,
}

/// Count a four-card hand (or the crib) together with the up-card.
///
/// Events come out grouped as fifteens, pairs (ascending by rank), runs,
/// flush, nobs.
///
/// ```
/// use cribbage_rs::cards::{parse_cards, Card};
/// use cribbage_rs::scoring::{score_counting, total_points, CountKind};
///
/// let cards = parse_cards("5c 5d 5h Js").unwrap();
/// let hand: [Card; 4] = cards.try_into().unwrap();
/// let up: Card = "5s".parse().unwrap();
/// let events = score_counting(&hand, up, CountKind::Hand);
/// assert_eq!(total_points(&events), 29);
/// ```
pub fn score_counting(hand: &[Card; HAND_SIZE], up_card: Card, kind: CountKind) -> Vec<ScoreEvent> {
    let mut cards = [up_card; HAND_SIZE + 1];
    cards[..HAND_SIZE].copy_from_slice(hand);

    let mut events = Vec::new();
    fifteens(&cards, &mut events);
    pairs(&cards, &mut events);
    runs(&cards, &mut events);
    flush(hand, up_card, kind, &mut events);
    if nobs(hand, up_card) {
        events.push(ScoreEvent::Nobs);
    }
    events
}

fn fifteens(cards: &[Card], events: &mut Vec<ScoreEvent>) {
    for subset in subsets_of_at_least(cards.len(), 2) {
        let sum: u32 = subset.iter().map(|&i| u32::from(cards[i].value())).sum();
        if sum == 15 {
            events.push(ScoreEvent::Fifteen);
        }
    }
}

fn pairs(cards: &[Card], events: &mut Vec<ScoreEvent>) {
    let counts = RankCounts::from_cards(cards);
    events.extend(counts.repeated().filter_map(|(_, n)| ScoreEvent::pair_tier(usize::from(n))));
}

fn runs(cards: &[Card], events: &mut Vec<ScoreEvent>) {
    if is_run(cards) {
        events.push(ScoreEvent::RunOfFive);
        return;
    }
    for len in [4, 3] {
        let found = Combinations::new(cards.len(), len).filter(|idx| is_run_at(cards, idx)).count();
        if found > 0 {
            if let Some(event) = ScoreEvent::run_of(len) {
                events.extend(std::iter::repeat(event).take(found));
            }
            return;
        }
    }
}

fn flush(hand: &[Card; HAND_SIZE], up_card: Card, kind: CountKind, events: &mut Vec<ScoreEvent>) {
    let suit = hand[0].suit();
    if !hand.iter().all(|c| c.suit() == suit) {
        return;
    }
    if up_card.suit() == suit {
        events.push(ScoreEvent::FiveCardFlush);
    } else if kind == CountKind::Hand {
        events.push(ScoreEvent::Flush);
    }
}

fn nobs(hand: &[Card; HAND_SIZE], up_card: Card) -> bool {
    hand.iter().any(|c| c.rank() == Rank::Jack && c.suit() == up_card.suit())
}
