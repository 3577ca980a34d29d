use crate::cards::Card;
use crate::scoring::runs::is_run;
use crate::scoring::ScoreEvent;

/// Longest trailing window checked for a run during pegging.
const MAX_PEGGING_RUN: usize = 7;

fn pile_total(pile: &[Card]) -> u32 {
    pile.iter().map(|c| u32::from(c.value())).sum()
}

/// Score the pegging pile after a card is played.
///
/// `pile` is every card played since the count last reset, oldest first; the
/// most recent card is last. Events are emitted in the order fifteen,
/// thirty-one, pairs, run, last card.
///
/// ```
/// use cribbage_rs::cards::parse_cards;
/// use cribbage_rs::scoring::{score_pegging, ScoreEvent};
///
/// let pile = parse_cards("Ah 2c 3d 4s").unwrap();
/// assert_eq!(score_pegging(&pile, false), vec![ScoreEvent::RunOfFour]);
/// ```
pub fn score_pegging(pile: &[Card], is_last_card: bool) -> Vec<ScoreEvent> {
    let mut events = Vec::new();
    let Some(&last) = pile.last() else {
        return events;
    };
    let total = pile_total(pile);

    if total == 15 {
        events.push(ScoreEvent::Fifteen);
    }
    if total == 31 {
        events.push(ScoreEvent::ThirtyOne);
    }

    let matching = pile.iter().rev().skip(1).take_while(|c| c.rank() == last.rank()).count();
    if let Some(tier) = ScoreEvent::pair_tier(matching + 1) {
        events.push(tier);
    }

    let longest = (3..=pile.len().min(MAX_PEGGING_RUN))
        .rev()
        .find(|&k| is_run(&pile[pile.len() - k..]));
    if let Some(run) = longest.and_then(ScoreEvent::run_of) {
        events.push(run);
    }

    if is_last_card && total != 31 {
        events.push(ScoreEvent::LastCard);
    }
    events
}

/// Events for the last card of a segment: a single LastCard unless the pile
/// already made thirty-one, which scored when the card was played.
pub fn score_last_card(pile: &[Card]) -> Vec<ScoreEvent> {
    if pile_total(pile) == 31 {
        Vec::new()
    } else {
        vec![ScoreEvent::LastCard]
    }
}
