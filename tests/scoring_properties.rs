use cribbage_rs::cards::Card;
use cribbage_rs::deck::{Deck, POPULATION};
use cribbage_rs::scoring::{score_counting, score_pegging, CountKind, ScoreEvent};
use proptest::prelude::*;
use std::collections::HashSet;

fn distinct_cards(n: usize) -> impl Strategy<Value = Vec<Card>> {
    proptest::sample::subsequence(POPULATION.to_vec(), n).prop_shuffle()
}

fn pile() -> impl Strategy<Value = Vec<Card>> {
    (3usize..=8).prop_flat_map(distinct_cards)
}

fn fifteens_by_brute_force(cards: &[Card]) -> usize {
    (0u32..1 << cards.len())
        .filter(|mask| mask.count_ones() >= 2)
        .filter(|mask| {
            let sum: u32 = cards
                .iter()
                .enumerate()
                .filter(|(i, _)| mask & (1 << i) != 0)
                .map(|(_, c)| u32::from(c.value()))
                .sum();
            sum == 15
        })
        .count()
}

fn run_length(event: ScoreEvent) -> Option<usize> {
    (3..=7).find(|&len| ScoreEvent::run_of(len) == Some(event))
}

proptest! {
    #[test]
    fn fifteens_match_every_summing_subset(cards in distinct_cards(5)) {
        let hand: [Card; 4] = cards[..4].try_into().unwrap();
        let events = score_counting(&hand, cards[4], CountKind::Hand);
        let fifteens = events.iter().filter(|e| **e == ScoreEvent::Fifteen).count();
        prop_assert_eq!(fifteens, fifteens_by_brute_force(&cards));
    }

    #[test]
    fn pegging_runs_never_repeat_a_rank(pile in pile()) {
        for event in score_pegging(&pile, false) {
            if let Some(len) = run_length(event) {
                let top = &pile[pile.len() - len..];
                let ranks: HashSet<_> = top.iter().map(|c| c.rank()).collect();
                prop_assert_eq!(ranks.len(), len, "run over {:?}", top);
            }
        }
    }

    #[test]
    fn counting_runs_never_repeat_a_rank(cards in distinct_cards(5)) {
        let hand: [Card; 4] = cards[..4].try_into().unwrap();
        let events = score_counting(&hand, cards[4], CountKind::Crib);
        let runs: Vec<usize> = events.iter().filter_map(|e| run_length(*e)).collect();
        let distinct: HashSet<_> = cards.iter().map(|c| c.rank()).collect();
        if runs.iter().any(|&len| len == 5) {
            prop_assert_eq!(distinct.len(), 5);
        }
        for len in runs {
            prop_assert!(len <= distinct.len());
        }
    }

    #[test]
    fn thirteen_card_deal_has_no_duplicates(seed in any::<u64>()) {
        let cards = Deck::seeded(seed).draw(13);
        let unique: HashSet<Card> = cards.iter().copied().collect();
        prop_assert_eq!(unique.len(), 13);
    }
}
