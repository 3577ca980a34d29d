use cribbage_rs::cards::parse_cards;
use cribbage_rs::scoring::{score_last_card, score_pegging, ScoreEvent};

use ScoreEvent::*;

fn peg(pile: &str, is_last_card: bool) -> Vec<ScoreEvent> {
    score_pegging(&parse_cards(pile).unwrap(), is_last_card)
}

#[test]
fn ace_to_four_is_a_run_of_four() {
    assert_eq!(peg("Ah 2c 3d 4s", false), vec![RunOfFour]);
}

#[test]
fn runs_need_not_be_played_in_order() {
    assert_eq!(peg("5h 3c 4d", false), vec![RunOfThree]);
}

#[test]
fn a_repeated_rank_breaks_the_run() {
    assert!(peg("3h 4c 4d 5s", false).is_empty());
    assert!(peg("9h 6c 9d 6s", false).is_empty());
}

#[test]
fn pairs_come_from_the_top_of_the_pile() {
    assert_eq!(peg("Kh 7c 7d", false), vec![Pair]);
    assert_eq!(peg("7h 7c 7d", false), vec![PairRoyale]);
    assert_eq!(peg("5h 5c 5d", false), vec![Fifteen, PairRoyale]);
    assert_eq!(peg("2h 2c 2d 2s", false), vec![DoublePairRoyale]);
}

#[test]
fn thirty_one_replaces_last_card() {
    assert_eq!(peg("Kh Qd 5c 6s", false), vec![ThirtyOne]);
    assert_eq!(peg("Kh Qd 5c 6s", true), vec![ThirtyOne]);
    assert!(score_last_card(&parse_cards("Kh Qd 5c 6s").unwrap()).is_empty());
}

#[test]
fn last_card_under_thirty_one() {
    assert_eq!(peg("Kh 9c", true), vec![LastCard]);
    assert_eq!(score_last_card(&parse_cards("Kh 9c").unwrap()), vec![LastCard]);
}
